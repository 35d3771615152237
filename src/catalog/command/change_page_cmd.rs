use async_trait::async_trait;
use serde::Deserialize;
use crate::catalog::command::ViewCommandResponse;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::model::PageChange;
use crate::core::command::{Command, CommandError};

pub(crate) struct ChangePageCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl ChangePageCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChangePageCommandRequest {
    #[serde(default)]
    pub(crate) session_id: String,
    pub(crate) change: PageChange,
}

#[async_trait]
impl Command<ChangePageCommandRequest, ViewCommandResponse> for ChangePageCommand {
    async fn execute(&self, req: ChangePageCommandRequest) -> Result<ViewCommandResponse, CommandError> {
        self.catalog_service.change_page(req.session_id.as_str(), req.change).await
            .map_err(CommandError::from).map(ViewCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::catalog::command::change_page_cmd::{ChangePageCommand, ChangePageCommandRequest};
    use crate::catalog::domain::model::PageChange;
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::documents::repository::memory_document_repository::MemoryDocumentRepository;
    use crate::session::store::SessionStore;
    use crate::session::view::ResultsView;

    #[tokio::test]
    async fn test_should_run_change_page() {
        let svc = factory::create_catalog_service(&Configuration::new("test"),
            Arc::new(MemoryDocumentRepository::demo()), Arc::new(SessionStore::new()));
        let opened = svc.open_session().await.expect("should open session");

        let cmd = ChangePageCommand::new(svc);
        let next = cmd.execute(ChangePageCommandRequest {
            session_id: opened.session_id.clone(),
            change: PageChange::Next,
        }).await.expect("should move to next page");
        let pagination = next.view.pagination.expect("should paginate");
        assert_eq!(2, pagination.current_page);
        assert!(!pagination.next_enabled);
        match next.view.results {
            ResultsView::Grid { cards } => assert_eq!(7, cards[0].document_id),
            other => panic!("expected results, got {:?}", other),
        }

        let clamped = cmd.execute(ChangePageCommandRequest {
            session_id: opened.session_id.clone(),
            change: PageChange::To(40),
        }).await.expect("should clamp page");
        assert_eq!(2, clamped.view.pagination.expect("should paginate").current_page);
    }

    #[tokio::test]
    async fn test_should_parse_page_changes() {
        let req: ChangePageCommandRequest = serde_json::from_str(r#"{"change":{"to":3}}"#).expect("should parse to");
        assert_eq!(PageChange::To(3), req.change);
        let req: ChangePageCommandRequest = serde_json::from_str(r#"{"change":"previous"}"#).expect("should parse previous");
        assert_eq!(PageChange::Previous, req.change);
    }
}
