use std::collections::HashMap;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::cart::domain::model::{Cart, CartChange};
use crate::catalog::domain::model::{PageQuery, QueryState};
use crate::core::library::{DocumentId, LibraryError, LibraryResult, PaginatedResult, total_pages};
use crate::documents::dto::{AvailabilityDto, CategorySummaryDto, DocumentDto};
use crate::utils::date::serializer;

// AvailabilitySnapshot is what the backend reported for a document and when, it is never refreshed
// until the document is fetched again
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct AvailabilitySnapshot {
    pub counts: AvailabilityDto,
    #[serde(with = "serializer")]
    pub fetched_at: NaiveDateTime,
}

// FetchTicket identifies one issued list fetch, only the latest ticket may change the results
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FetchTicket {
    pub generation: u64,
    pub query: PageQuery,
}

// FetchOutcome is what applying a list response did to the session
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum FetchOutcome {
    // results replaced, these documents still need availability
    Applied(Vec<DocumentId>),
    // the page lay past the last page of the new results and was pulled back, fetch again
    Clamped,
    // superseded by a newer fetch, or failed
    Dropped,
}

// CatalogSession is the owned state of one open catalog page
#[derive(Debug)]
pub(crate) struct CatalogSession {
    session_id: String,
    pub query: QueryState,
    pub categories: Vec<CategorySummaryDto>,
    pub documents: Vec<DocumentDto>,
    pub total_items: u64,
    pub availability: HashMap<DocumentId, AvailabilitySnapshot>,
    pub cart: Cart<DocumentDto>,
    pub cart_visible: bool,
    pub loading: bool,
    pub error: Option<String>,
    generation: u64,
}

impl CatalogSession {
    pub fn new(session_id: &str) -> Self {
        Self {
            session_id: session_id.to_string(),
            query: QueryState::new(),
            categories: vec![],
            documents: vec![],
            total_items: 0,
            availability: HashMap::new(),
            cart: Cart::default(),
            cart_visible: false,
            loading: false,
            error: None,
            generation: 0,
        }
    }

    pub fn session_id(&self) -> &str {
        self.session_id.as_str()
    }

    pub fn total_pages(&self, page_size: usize) -> usize {
        total_pages(self.total_items, page_size)
    }

    pub fn begin_fetch(&mut self, page_size: usize) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        FetchTicket {
            generation: self.generation,
            query: self.query.page_query(page_size),
        }
    }

    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.generation
    }

    pub fn complete_fetch(&mut self, ticket: &FetchTicket,
                          result: LibraryResult<PaginatedResult<DocumentDto>>) -> FetchOutcome {
        if !self.is_current(ticket) {
            return FetchOutcome::Dropped;
        }
        self.loading = false;
        match result {
            Ok(res) => {
                let last_page = total_pages(res.total_items, ticket.query.page_size);
                self.total_items = res.total_items;
                if self.query.clamp_page(last_page) {
                    return FetchOutcome::Clamped;
                }
                self.documents = res.records;
                self.availability.clear();
                FetchOutcome::Applied(self.documents.iter().map(|d| d.id).collect())
            }
            Err(_) => {
                self.error = Some(ticket.query.mode.failure_message().to_string());
                FetchOutcome::Dropped
            }
        }
    }

    pub fn apply_availability(&mut self, ticket: &FetchTicket,
                              availability: HashMap<DocumentId, AvailabilityDto>,
                              fetched_at: NaiveDateTime) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        for (id, counts) in availability {
            self.availability.insert(id, AvailabilitySnapshot { counts, fetched_at });
        }
        true
    }

    pub fn find_document(&self, id: DocumentId) -> Option<&DocumentDto> {
        self.documents.iter().find(|d| d.id == id)
    }

    pub fn can_request(&self, id: DocumentId) -> bool {
        self.availability.get(&id).map(|a| a.counts.can_request).unwrap_or(false)
    }

    pub fn add_to_cart(&mut self, id: DocumentId) -> LibraryResult<CartChange> {
        let doc = self.find_document(id).cloned().ok_or_else(|| LibraryError::not_found(
            format!("document {} is not among the current results", id).as_str()))?;
        if !self.can_request(id) {
            return Err(LibraryError::validation(
                format!("document {} cannot be requested right now", id).as_str(), Some("400".to_string())));
        }
        let (cart, change) = std::mem::take(&mut self.cart).add(doc);
        self.cart = cart;
        Ok(change)
    }

    pub fn remove_from_cart(&mut self, id: DocumentId) -> bool {
        let (cart, removed) = std::mem::take(&mut self.cart).remove(id);
        self.cart = cart;
        removed
    }

    pub fn clear_cart(&mut self) {
        self.cart = std::mem::take(&mut self.cart).clear();
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use chrono::Utc;
    use crate::cart::domain::model::CartChange;
    use crate::catalog::domain::model::PageChange;
    use crate::core::library::{LibraryError, PaginatedResult};
    use crate::documents::dto::{AvailabilityDto, DocumentDto};
    use crate::session::model::{CatalogSession, FetchOutcome};

    fn page_of(ids: &[i64], total: u64) -> PaginatedResult<DocumentDto> {
        let docs = ids.iter().map(|i| DocumentDto::new(*i, "libro", format!("Title {}", i).as_str(), "Author")).collect();
        PaginatedResult::new(1, 6, total, docs)
    }

    #[tokio::test]
    async fn test_should_apply_current_fetch() {
        let mut session = CatalogSession::new("s1");
        let ticket = session.begin_fetch(6);
        assert!(session.loading);
        let outcome = session.complete_fetch(&ticket, Ok(page_of(&[1, 2], 13)));
        assert_eq!(FetchOutcome::Applied(vec![1, 2]), outcome);
        assert!(!session.loading);
        assert_eq!(13, session.total_items);
        assert_eq!(3, session.total_pages(6));
    }

    #[tokio::test]
    async fn test_should_discard_stale_fetch() {
        let mut session = CatalogSession::new("s1");
        let older = session.begin_fetch(6);
        session.query.change_page(PageChange::Next, 3);
        let newer = session.begin_fetch(6);
        assert!(matches!(session.complete_fetch(&newer, Ok(page_of(&[7, 8], 13))), FetchOutcome::Applied(_)));
        assert_eq!(FetchOutcome::Dropped, session.complete_fetch(&older, Ok(page_of(&[1, 2], 13))));
        let ids: Vec<i64> = session.documents.iter().map(|d| d.id).collect();
        assert_eq!(vec![7, 8], ids);
        assert!(!session.apply_availability(&older, HashMap::from([(7, AvailabilityDto::new(1, 0, 0))]), Utc::now().naive_utc()));
        assert!(session.availability.is_empty());
    }

    #[tokio::test]
    async fn test_should_keep_results_on_failure() {
        let mut session = CatalogSession::new("s1");
        let ticket = session.begin_fetch(6);
        session.complete_fetch(&ticket, Ok(page_of(&[1, 2], 2)));
        session.query.toggle_category("poesia");
        let ticket = session.begin_fetch(6);
        let res = session.complete_fetch(&ticket, Err(LibraryError::unavailable("down", None, true)));
        assert_eq!(FetchOutcome::Dropped, res);
        assert!(!session.loading);
        assert_eq!(Some("Error filtering by category".to_string()), session.error);
        assert_eq!(2, session.documents.len());
    }

    #[tokio::test]
    async fn test_should_pull_page_back_when_results_shrink() {
        let mut session = CatalogSession::new("s1");
        let ticket = session.begin_fetch(6);
        session.complete_fetch(&ticket, Ok(page_of(&[1, 2, 3, 4, 5, 6], 13)));
        session.query.toggle_category("b");
        let ticket = session.begin_fetch(6);
        session.complete_fetch(&ticket, Err(LibraryError::unavailable("down", None, true)));
        // still paging against the 13 documents of the failed listing
        assert!(session.query.change_page(PageChange::Next, session.total_pages(6)));

        let ticket = session.begin_fetch(6);
        assert_eq!(FetchOutcome::Clamped, session.complete_fetch(&ticket, Ok(page_of(&[], 3))));
        assert_eq!(1, session.query.page());
        assert_eq!(1, session.total_pages(6));
        assert_eq!(6, session.documents.len());

        let ticket = session.begin_fetch(6);
        assert_eq!(FetchOutcome::Applied(vec![6, 7, 8]), session.complete_fetch(&ticket, Ok(page_of(&[6, 7, 8], 3))));
    }

    #[tokio::test]
    async fn test_should_clear_error_on_next_fetch() {
        let mut session = CatalogSession::new("s1");
        let ticket = session.begin_fetch(6);
        session.complete_fetch(&ticket, Err(LibraryError::unavailable("down", None, true)));
        assert!(session.error.is_some());
        let _ = session.begin_fetch(6);
        assert!(session.error.is_none());
    }

    #[tokio::test]
    async fn test_should_only_add_requestable_documents() {
        let mut session = CatalogSession::new("s1");
        let ticket = session.begin_fetch(6);
        session.complete_fetch(&ticket, Ok(page_of(&[1, 2], 2)));
        session.apply_availability(&ticket, HashMap::from([
            (1, AvailabilityDto::new(2, 0, 0)),
            (2, AvailabilityDto::unavailable()),
        ]), Utc::now().naive_utc());

        assert_eq!(CartChange::Added, session.add_to_cart(1).expect("should add"));
        assert_eq!(CartChange::AlreadyPresent, session.add_to_cart(1).expect("should report duplicate"));
        assert!(matches!(session.add_to_cart(2), Err(LibraryError::Validation { .. })));
        assert!(matches!(session.add_to_cart(99), Err(LibraryError::NotFound { .. })));
        assert_eq!(1, session.cart.len());

        assert!(!session.remove_from_cart(99));
        assert!(session.remove_from_cart(1));
        session.clear_cart();
        assert!(session.cart.is_empty());
    }
}
