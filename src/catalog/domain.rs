pub mod model;
pub mod pagination;
pub mod service;

use async_trait::async_trait;
use crate::catalog::domain::model::PageChange;
use crate::core::library::LibraryResult;
use crate::session::view::CatalogView;

#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    async fn open_session(&self) -> LibraryResult<CatalogView>;
    async fn view(&self, session_id: &str) -> LibraryResult<CatalogView>;
    async fn close_session(&self, session_id: &str) -> LibraryResult<()>;
    async fn update_search_text(&self, session_id: &str, text: &str) -> LibraryResult<CatalogView>;
    async fn submit_search(&self, session_id: &str, text: Option<&str>) -> LibraryResult<CatalogView>;
    async fn toggle_category(&self, session_id: &str, category: &str) -> LibraryResult<CatalogView>;
    async fn clear_filters(&self, session_id: &str) -> LibraryResult<CatalogView>;
    async fn change_page(&self, session_id: &str, change: PageChange) -> LibraryResult<CatalogView>;
}
