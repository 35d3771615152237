use async_trait::async_trait;
use serde::Deserialize;
use crate::catalog::command::ViewCommandResponse;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct OpenSessionCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl OpenSessionCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct OpenSessionCommandRequest {}

#[async_trait]
impl Command<OpenSessionCommandRequest, ViewCommandResponse> for OpenSessionCommand {
    async fn execute(&self, _req: OpenSessionCommandRequest) -> Result<ViewCommandResponse, CommandError> {
        self.catalog_service.open_session().await.map_err(CommandError::from).map(ViewCommandResponse::new)
    }
}
