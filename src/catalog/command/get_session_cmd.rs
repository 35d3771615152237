use async_trait::async_trait;
use serde::Deserialize;
use crate::catalog::command::ViewCommandResponse;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct GetSessionCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl GetSessionCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetSessionCommandRequest {
    pub(crate) session_id: String,
}

#[async_trait]
impl Command<GetSessionCommandRequest, ViewCommandResponse> for GetSessionCommand {
    async fn execute(&self, req: GetSessionCommandRequest) -> Result<ViewCommandResponse, CommandError> {
        self.catalog_service.view(req.session_id.as_str()).await.map_err(CommandError::from).map(ViewCommandResponse::new)
    }
}
