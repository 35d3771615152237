pub mod model;
pub mod service;

use async_trait::async_trait;
use crate::cart::domain::model::CartOutcome;
use crate::core::library::{DocumentId, LibraryResult};

#[async_trait]
pub(crate) trait CartService: Sync + Send {
    async fn add_to_cart(&self, session_id: &str, document_id: DocumentId) -> LibraryResult<CartOutcome>;
    async fn remove_from_cart(&self, session_id: &str, document_id: DocumentId) -> LibraryResult<CartOutcome>;
    async fn clear_cart(&self, session_id: &str) -> LibraryResult<CartOutcome>;
    async fn set_cart_visible(&self, session_id: &str, visible: bool) -> LibraryResult<CartOutcome>;
    async fn submit_request(&self, session_id: &str) -> LibraryResult<CartOutcome>;
}
