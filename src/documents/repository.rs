pub mod http_document_repository;
pub mod memory_document_repository;

use std::collections::HashMap;
use async_trait::async_trait;
use crate::core::library::{DocumentId, LibraryResult, PaginatedResult};
use crate::documents::dto::{AvailabilityDto, CategorySummaryDto, DocumentDto};

#[async_trait]
pub(crate) trait DocumentRepository: Sync + Send {
    // categories with their document count
    async fn list_categories(&self) -> LibraryResult<Vec<CategorySummaryDto>>;

    // all documents ordered by id
    async fn list(&self, page: usize, page_size: usize) -> LibraryResult<PaginatedResult<DocumentDto>>;

    // documents whose title or author contains the text
    async fn search(&self, text: &str, page: usize, page_size: usize) -> LibraryResult<PaginatedResult<DocumentDto>>;

    // documents of a single category
    async fn find_by_category(&self, category: &str,
                              page: usize, page_size: usize) -> LibraryResult<PaginatedResult<DocumentDto>>;

    // copy counts of one document
    async fn find_availability(&self, id: DocumentId) -> LibraryResult<AvailabilityDto>;

    // copy counts of several documents, one entry per distinct id
    async fn find_availability_batch(&self, ids: &[DocumentId]) -> HashMap<DocumentId, LibraryResult<AvailabilityDto>> {
        let mut res = HashMap::new();
        for id in ids {
            if !res.contains_key(id) {
                res.insert(*id, self.find_availability(*id).await);
            }
        }
        res
    }
}
