use std::collections::{BTreeMap, HashMap, HashSet};
use async_trait::async_trait;

use crate::core::library::{DocumentId, LibraryError, LibraryResult, PaginatedResult};
use crate::documents::dto::{AvailabilityDto, CategorySummaryDto, DocumentDto};
use crate::documents::repository::DocumentRepository;

// MemoryDocumentRepository serves a fixed catalog, used for local development and tests
#[derive(Debug, Default)]
pub struct MemoryDocumentRepository {
    documents: Vec<DocumentDto>,
    availability: HashMap<DocumentId, AvailabilityDto>,
    failing_availability: HashSet<DocumentId>,
    failing_listing: bool,
}

impl MemoryDocumentRepository {
    pub(crate) fn new(documents: Vec<DocumentDto>) -> Self {
        let mut documents = documents;
        documents.sort_by_key(|d| d.id);
        Self {
            documents,
            ..Default::default()
        }
    }

    pub(crate) fn with_availability(mut self, id: DocumentId, availability: AvailabilityDto) -> Self {
        self.availability.insert(id, availability);
        self
    }

    pub(crate) fn with_failing_availability(mut self, id: DocumentId) -> Self {
        self.failing_availability.insert(id);
        self
    }

    // every listing, search and category lookup fails as if the backend were down
    pub(crate) fn with_failing_listing(mut self) -> Self {
        self.failing_listing = true;
        self
    }

    pub(crate) fn demo() -> Self {
        let docs = vec![
            DocumentDto::new(1, "libro", "Cien años de soledad", "Gabriel García Márquez")
                .with_category("novela").with_publication("Sudamericana", 1967),
            DocumentDto::new(2, "libro", "El amor en los tiempos del cólera", "Gabriel García Márquez")
                .with_category("novela").with_publication("Oveja Negra", 1985),
            DocumentDto::new(3, "libro", "Rayuela", "Julio Cortázar")
                .with_category("novela").with_publication("Sudamericana", 1963),
            DocumentDto::new(4, "libro", "Veinte poemas de amor y una canción desesperada", "Pablo Neruda")
                .with_category("poesia").with_publication("Nascimento", 1924),
            DocumentDto::new(5, "libro", "Canto general", "Pablo Neruda")
                .with_category("poesia").with_publication("Talleres Gráficos de la Nación", 1950),
            DocumentDto::new(6, "revista", "Revista de Historia de Chile", "Varios autores")
                .with_category("historia_de_chile"),
            DocumentDto::new(7, "libro", "Historia de Chile 1808-1994", "Simon Collier")
                .with_category("historia_de_chile").with_publication("Cambridge", 1996),
            DocumentDto::new(8, "libro", "Breve historia del tiempo", "Stephen Hawking")
                .with_category("ciencia").with_publication("Crítica", 1988),
            DocumentDto::new(9, "libro", "Cosmos", "Carl Sagan")
                .with_category("ciencia").with_publication("Planeta", 1980),
            DocumentDto::new(10, "dvd", "Cosmos: la serie", "Carl Sagan")
                .with_category("ciencia"),
            DocumentDto::new(11, "libro", "La casa de los espíritus", "Isabel Allende")
                .with_category("novela").with_publication("Plaza & Janés", 1982),
            DocumentDto::new(12, "libro", "Ficciones", "Jorge Luis Borges")
                .with_publication("Sur", 1944),
        ];
        let mut repo = MemoryDocumentRepository::new(docs);
        for id in 1..=12 {
            let available = (id % 4) as u32;
            repo = repo.with_availability(id, AvailabilityDto::new(available, 1, (id % 2) as u32));
        }
        repo
    }

    fn check_listing(&self) -> LibraryResult<()> {
        if self.failing_listing {
            return Err(LibraryError::unavailable("catalog backend unavailable", Some("503".to_string()), true));
        }
        Ok(())
    }

    fn paginate<'a>(&self, matching: impl Iterator<Item=&'a DocumentDto>,
                    page: usize, page_size: usize) -> PaginatedResult<DocumentDto> {
        let matching: Vec<&DocumentDto> = matching.collect();
        let offset = page.saturating_sub(1) * page_size;
        let records = matching.iter().skip(offset).take(page_size).map(|d| (*d).clone()).collect();
        PaginatedResult::new(page, page_size, matching.len() as u64, records)
    }
}

#[async_trait]
impl DocumentRepository for MemoryDocumentRepository {
    async fn list_categories(&self) -> LibraryResult<Vec<CategorySummaryDto>> {
        self.check_listing()?;
        let mut counts = BTreeMap::new();
        for doc in &self.documents {
            if let Some(category) = &doc.category {
                *counts.entry(category.clone()).or_insert(0u64) += 1;
            }
        }
        Ok(counts.into_iter().map(|(category, count)| CategorySummaryDto { category, count }).collect())
    }

    async fn list(&self, page: usize, page_size: usize) -> LibraryResult<PaginatedResult<DocumentDto>> {
        self.check_listing()?;
        Ok(self.paginate(self.documents.iter(), page, page_size))
    }

    async fn search(&self, text: &str, page: usize, page_size: usize) -> LibraryResult<PaginatedResult<DocumentDto>> {
        self.check_listing()?;
        let needle = text.to_lowercase();
        let matching = self.documents.iter().filter(|d| {
            d.title.to_lowercase().contains(&needle) || d.author.to_lowercase().contains(&needle)
        });
        Ok(self.paginate(matching, page, page_size))
    }

    async fn find_by_category(&self, category: &str,
                              page: usize, page_size: usize) -> LibraryResult<PaginatedResult<DocumentDto>> {
        self.check_listing()?;
        let matching = self.documents.iter().filter(|d| d.category.as_deref() == Some(category));
        Ok(self.paginate(matching, page, page_size))
    }

    async fn find_availability(&self, id: DocumentId) -> LibraryResult<AvailabilityDto> {
        if self.failing_availability.contains(&id) {
            return Err(LibraryError::unavailable(
                format!("availability of {} unavailable", id).as_str(), Some("503".to_string()), true));
        }
        if !self.documents.iter().any(|d| d.id == id) {
            return Err(LibraryError::not_found(format!("document {} not found", id).as_str()));
        }
        Ok(self.availability.get(&id).cloned().unwrap_or_else(AvailabilityDto::unavailable))
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::LibraryError;
    use crate::documents::dto::{AvailabilityDto, DocumentDto};
    use crate::documents::repository::DocumentRepository;
    use crate::documents::repository::memory_document_repository::MemoryDocumentRepository;

    fn thirteen_documents() -> MemoryDocumentRepository {
        let docs = (1..=13).map(|i| {
            let category = if i <= 5 { "a" } else if i <= 8 { "b" } else { "c" };
            DocumentDto::new(i, "libro", format!("Title {}", i).as_str(), "Author").with_category(category)
        }).collect();
        MemoryDocumentRepository::new(docs)
    }

    #[tokio::test]
    async fn test_should_return_second_page() {
        let repo = thirteen_documents();
        let res = repo.list(2, 6).await.expect("should list documents");
        assert_eq!(13, res.total_items);
        assert_eq!(3, res.total_pages());
        let ids: Vec<i64> = res.records.iter().map(|d| d.id).collect();
        assert_eq!(vec![7, 8, 9, 10, 11, 12], ids);
    }

    #[tokio::test]
    async fn test_should_return_short_last_page() {
        let repo = thirteen_documents();
        let res = repo.list(3, 6).await.expect("should list documents");
        assert_eq!(1, res.records.len());
        assert_eq!(13, res.records[0].id);
    }

    #[tokio::test]
    async fn test_should_count_categories() {
        let repo = thirteen_documents();
        let res = repo.list_categories().await.expect("should list categories");
        let counts: Vec<(String, u64)> = res.into_iter().map(|c| (c.category, c.count)).collect();
        assert_eq!(vec![("a".to_string(), 5), ("b".to_string(), 3), ("c".to_string(), 5)], counts);
    }

    #[tokio::test]
    async fn test_should_search_title_or_author_ignoring_case() {
        let repo = MemoryDocumentRepository::demo();
        let res = repo.search("neruda", 1, 6).await.expect("should search");
        assert_eq!(2, res.total_items);
        let res = repo.search("COSMOS", 1, 6).await.expect("should search");
        assert_eq!(2, res.total_items);
    }

    #[tokio::test]
    async fn test_should_filter_by_category() {
        let repo = thirteen_documents();
        let res = repo.find_by_category("b", 1, 6).await.expect("should filter");
        assert_eq!(3, res.total_items);
        assert!(res.records.iter().all(|d| d.category.as_deref() == Some("b")));
    }

    #[tokio::test]
    async fn test_should_fail_listing_when_configured() {
        let repo = thirteen_documents().with_failing_listing();
        assert!(matches!(repo.list(1, 6).await, Err(LibraryError::CurrentlyUnavailable { .. })));
    }

    #[tokio::test]
    async fn test_should_fetch_availability_batch() {
        let repo = thirteen_documents()
            .with_availability(1, AvailabilityDto::new(2, 1, 0))
            .with_failing_availability(2);
        let res = repo.find_availability_batch(&[1, 2, 3, 1, 99]).await;
        assert_eq!(4, res.len());
        assert_eq!(2, res[&1].as_ref().expect("should have availability").available);
        assert!(res[&2].is_err());
        assert!(!res[&3].as_ref().expect("should default availability").can_request);
        assert!(matches!(res[&99], Err(LibraryError::NotFound { .. })));
    }
}
