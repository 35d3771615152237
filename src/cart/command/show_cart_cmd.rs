use async_trait::async_trait;
use serde::Deserialize;
use crate::cart::command::CartCommandResponse;
use crate::cart::domain::CartService;
use crate::core::command::{Command, CommandError};

// ShowCartCommand opens or closes the cart modal
pub(crate) struct ShowCartCommand {
    cart_service: Box<dyn CartService>,
}

impl ShowCartCommand {
    pub(crate) fn new(cart_service: Box<dyn CartService>) -> Self {
        Self {
            cart_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ShowCartCommandRequest {
    #[serde(default)]
    pub(crate) session_id: String,
    pub(crate) visible: bool,
}

#[async_trait]
impl Command<ShowCartCommandRequest, CartCommandResponse> for ShowCartCommand {
    async fn execute(&self, req: ShowCartCommandRequest) -> Result<CartCommandResponse, CommandError> {
        self.cart_service.set_cart_visible(req.session_id.as_str(), req.visible).await
            .map_err(CommandError::from).map(CartCommandResponse::from)
    }
}
