use async_trait::async_trait;
use serde::Deserialize;
use crate::cart::command::CartCommandResponse;
use crate::cart::domain::CartService;
use crate::core::command::{Command, CommandError};

pub(crate) struct ClearCartCommand {
    cart_service: Box<dyn CartService>,
}

impl ClearCartCommand {
    pub(crate) fn new(cart_service: Box<dyn CartService>) -> Self {
        Self {
            cart_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ClearCartCommandRequest {
    pub(crate) session_id: String,
}

#[async_trait]
impl Command<ClearCartCommandRequest, CartCommandResponse> for ClearCartCommand {
    async fn execute(&self, req: ClearCartCommandRequest) -> Result<CartCommandResponse, CommandError> {
        self.cart_service.clear_cart(req.session_id.as_str()).await
            .map_err(CommandError::from).map(CartCommandResponse::from)
    }
}
