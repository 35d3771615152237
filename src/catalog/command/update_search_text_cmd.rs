use async_trait::async_trait;
use serde::Deserialize;
use crate::catalog::command::ViewCommandResponse;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

// UpdateSearchTextCommand only edits the draft in the search bar, nothing is fetched
pub(crate) struct UpdateSearchTextCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl UpdateSearchTextCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateSearchTextCommandRequest {
    #[serde(default)]
    pub(crate) session_id: String,
    #[serde(default)]
    pub(crate) text: String,
}

#[async_trait]
impl Command<UpdateSearchTextCommandRequest, ViewCommandResponse> for UpdateSearchTextCommand {
    async fn execute(&self, req: UpdateSearchTextCommandRequest) -> Result<ViewCommandResponse, CommandError> {
        self.catalog_service.update_search_text(req.session_id.as_str(), req.text.as_str()).await
            .map_err(CommandError::from).map(ViewCommandResponse::new)
    }
}
