use std::sync::Arc;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::repository::RepositoryStore;
use crate::documents::repository::DocumentRepository;
use crate::documents::repository::http_document_repository::HttpDocumentRepository;
use crate::documents::repository::memory_document_repository::MemoryDocumentRepository;
use crate::utils::http::build_http_client;

pub(crate) fn create_document_repository(config: &Configuration, store: RepositoryStore) -> LibraryResult<Arc<dyn DocumentRepository>> {
    match store {
        RepositoryStore::Http => {
            let client = build_http_client(config)?;
            Ok(Arc::new(HttpDocumentRepository::new(
                client, config.api_base_url.as_str(), config.availability_concurrency)))
        }
        RepositoryStore::InMemory => {
            Ok(Arc::new(MemoryDocumentRepository::demo()))
        }
    }
}
