pub mod change_page_cmd;
pub mod clear_filters_cmd;
pub mod close_session_cmd;
pub mod get_session_cmd;
pub mod open_session_cmd;
pub mod search_documents_cmd;
pub mod toggle_category_cmd;
pub mod update_search_text_cmd;

use serde::Serialize;
use crate::session::view::CatalogView;

// ViewCommandResponse carries the page as it looks after the command ran
#[derive(Debug, Serialize)]
pub(crate) struct ViewCommandResponse {
    pub view: CatalogView,
}

impl ViewCommandResponse {
    pub fn new(view: CatalogView) -> Self {
        Self {
            view,
        }
    }
}
