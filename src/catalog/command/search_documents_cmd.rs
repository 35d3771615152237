use async_trait::async_trait;
use serde::Deserialize;
use crate::catalog::command::ViewCommandResponse;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct SearchDocumentsCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl SearchDocumentsCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// text replaces the draft before submitting, when absent the current draft is submitted
#[derive(Debug, Deserialize)]
pub(crate) struct SearchDocumentsCommandRequest {
    #[serde(default)]
    pub(crate) session_id: String,
    #[serde(default)]
    pub(crate) text: Option<String>,
}

#[async_trait]
impl Command<SearchDocumentsCommandRequest, ViewCommandResponse> for SearchDocumentsCommand {
    async fn execute(&self, req: SearchDocumentsCommandRequest) -> Result<ViewCommandResponse, CommandError> {
        self.catalog_service.submit_search(req.session_id.as_str(), req.text.as_deref()).await
            .map_err(CommandError::from).map(ViewCommandResponse::new)
    }
}
