use async_trait::async_trait;
use serde::Deserialize;
use crate::catalog::command::ViewCommandResponse;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct ToggleCategoryCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl ToggleCategoryCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ToggleCategoryCommandRequest {
    pub(crate) session_id: String,
    pub(crate) category: String,
}

#[async_trait]
impl Command<ToggleCategoryCommandRequest, ViewCommandResponse> for ToggleCategoryCommand {
    async fn execute(&self, req: ToggleCategoryCommandRequest) -> Result<ViewCommandResponse, CommandError> {
        if req.category.trim().is_empty() {
            return Err(CommandError::Validation { message: "category must not be empty".to_string(), reason_code: None });
        }
        self.catalog_service.toggle_category(req.session_id.as_str(), req.category.as_str()).await
            .map_err(CommandError::from).map(ViewCommandResponse::new)
    }
}
