use async_trait::async_trait;
use serde::Deserialize;
use crate::cart::command::CartCommandResponse;
use crate::cart::domain::CartService;
use crate::core::command::{Command, CommandError};
use crate::core::library::DocumentId;

pub(crate) struct RemoveFromCartCommand {
    cart_service: Box<dyn CartService>,
}

impl RemoveFromCartCommand {
    pub(crate) fn new(cart_service: Box<dyn CartService>) -> Self {
        Self {
            cart_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoveFromCartCommandRequest {
    pub(crate) session_id: String,
    pub(crate) document_id: DocumentId,
}

#[async_trait]
impl Command<RemoveFromCartCommandRequest, CartCommandResponse> for RemoveFromCartCommand {
    async fn execute(&self, req: RemoveFromCartCommandRequest) -> Result<CartCommandResponse, CommandError> {
        self.cart_service.remove_from_cart(req.session_id.as_str(), req.document_id).await
            .map_err(CommandError::from).map(CartCommandResponse::from)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::cart::command::remove_from_cart_cmd::{RemoveFromCartCommand, RemoveFromCartCommandRequest};
    use crate::cart::factory::create_cart_service;
    use crate::catalog::factory::create_catalog_service;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::documents::repository::memory_document_repository::MemoryDocumentRepository;
    use crate::session::store::SessionStore;

    #[tokio::test]
    async fn test_should_run_remove_from_cart() {
        let config = Configuration::new("test");
        let sessions = Arc::new(SessionStore::new());
        let view = create_catalog_service(&config, Arc::new(MemoryDocumentRepository::demo()), sessions.clone())
            .open_session().await.expect("should open session");
        let cart = create_cart_service(&config, sessions.clone());
        cart.add_to_cart(view.session_id.as_str(), 1).await.expect("should add");

        let cmd = RemoveFromCartCommand::new(cart);
        let res = cmd.execute(RemoveFromCartCommandRequest { session_id: view.session_id.clone(), document_id: 1 })
            .await.expect("should remove from cart");
        assert_eq!(0, res.view.header.cart_count);
        assert!(res.notification.is_none());
    }
}
