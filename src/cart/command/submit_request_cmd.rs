use async_trait::async_trait;
use serde::Deserialize;
use crate::cart::command::CartCommandResponse;
use crate::cart::domain::CartService;
use crate::core::command::{Command, CommandError};

pub(crate) struct SubmitRequestCommand {
    cart_service: Box<dyn CartService>,
}

impl SubmitRequestCommand {
    pub(crate) fn new(cart_service: Box<dyn CartService>) -> Self {
        Self {
            cart_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SubmitRequestCommandRequest {
    pub(crate) session_id: String,
}

#[async_trait]
impl Command<SubmitRequestCommandRequest, CartCommandResponse> for SubmitRequestCommand {
    async fn execute(&self, req: SubmitRequestCommandRequest) -> Result<CartCommandResponse, CommandError> {
        self.cart_service.submit_request(req.session_id.as_str()).await
            .map_err(CommandError::from).map(CartCommandResponse::from)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::cart::command::submit_request_cmd::{SubmitRequestCommand, SubmitRequestCommandRequest};
    use crate::cart::domain::model::REQUESTS_UNAVAILABLE;
    use crate::cart::factory::create_cart_service;
    use crate::catalog::factory::create_catalog_service;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::documents::repository::memory_document_repository::MemoryDocumentRepository;
    use crate::session::store::SessionStore;

    #[tokio::test]
    async fn test_should_run_submit_request() {
        let config = Configuration::new("test");
        let sessions = Arc::new(SessionStore::new());
        let view = create_catalog_service(&config, Arc::new(MemoryDocumentRepository::demo()), sessions.clone())
            .open_session().await.expect("should open session");
        let cmd = SubmitRequestCommand::new(create_cart_service(&config, sessions.clone()));

        let empty = cmd.execute(SubmitRequestCommandRequest { session_id: view.session_id.clone() }).await;
        assert!(matches!(empty, Err(CommandError::Validation { .. })));

        create_cart_service(&config, sessions).add_to_cart(view.session_id.as_str(), 5).await.expect("should add");
        let res = cmd.execute(SubmitRequestCommandRequest { session_id: view.session_id.clone() })
            .await.expect("should submit");
        assert_eq!(Some(REQUESTS_UNAVAILABLE.to_string()), res.notification);
        assert_eq!(1, res.view.header.cart_count);
    }
}
