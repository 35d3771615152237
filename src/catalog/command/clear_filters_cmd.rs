use async_trait::async_trait;
use serde::Deserialize;
use crate::catalog::command::ViewCommandResponse;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct ClearFiltersCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl ClearFiltersCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ClearFiltersCommandRequest {
    pub(crate) session_id: String,
}

#[async_trait]
impl Command<ClearFiltersCommandRequest, ViewCommandResponse> for ClearFiltersCommand {
    async fn execute(&self, req: ClearFiltersCommandRequest) -> Result<ViewCommandResponse, CommandError> {
        self.catalog_service.clear_filters(req.session_id.as_str()).await
            .map_err(CommandError::from).map(ViewCommandResponse::new)
    }
}
