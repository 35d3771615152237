use async_trait::async_trait;
use serde::Deserialize;
use crate::cart::command::CartCommandResponse;
use crate::cart::domain::CartService;
use crate::core::command::{Command, CommandError};
use crate::core::library::DocumentId;

pub(crate) struct AddToCartCommand {
    cart_service: Box<dyn CartService>,
}

impl AddToCartCommand {
    pub(crate) fn new(cart_service: Box<dyn CartService>) -> Self {
        Self {
            cart_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddToCartCommandRequest {
    pub(crate) session_id: String,
    pub(crate) document_id: DocumentId,
}

#[async_trait]
impl Command<AddToCartCommandRequest, CartCommandResponse> for AddToCartCommand {
    async fn execute(&self, req: AddToCartCommandRequest) -> Result<CartCommandResponse, CommandError> {
        self.cart_service.add_to_cart(req.session_id.as_str(), req.document_id).await
            .map_err(CommandError::from).map(CartCommandResponse::from)
    }
}
