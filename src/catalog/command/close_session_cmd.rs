use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct CloseSessionCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl CloseSessionCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CloseSessionCommandRequest {
    pub(crate) session_id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct CloseSessionCommandResponse {
    pub session_id: String,
}

#[async_trait]
impl Command<CloseSessionCommandRequest, CloseSessionCommandResponse> for CloseSessionCommand {
    async fn execute(&self, req: CloseSessionCommandRequest) -> Result<CloseSessionCommandResponse, CommandError> {
        self.catalog_service.close_session(req.session_id.as_str()).await
            .map_err(CommandError::from)
            .map(|_| CloseSessionCommandResponse { session_id: req.session_id })
    }
}
