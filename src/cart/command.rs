pub mod add_to_cart_cmd;
pub mod clear_cart_cmd;
pub mod remove_from_cart_cmd;
pub mod show_cart_cmd;
pub mod submit_request_cmd;

use serde::Serialize;
use crate::cart::domain::model::CartOutcome;
use crate::session::view::CatalogView;

#[derive(Debug, Serialize)]
pub(crate) struct CartCommandResponse {
    pub view: CatalogView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<String>,
}

impl From<CartOutcome> for CartCommandResponse {
    fn from(outcome: CartOutcome) -> Self {
        Self {
            view: outcome.view,
            notification: outcome.notification,
        }
    }
}
