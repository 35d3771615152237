use std::sync::Arc;
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::Router;
use crate::cart::controller::{add_to_cart, clear_cart, remove_from_cart, show_cart, submit_request};
use crate::catalog::controller::{change_page, clear_filters, close_session, get_session, open_session,
                                 search_documents, toggle_category, update_search_text};
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::repository::RepositoryStore;
use crate::documents::factory::create_document_repository;
use crate::documents::repository::DocumentRepository;
use crate::session::store::SessionStore;

// AppState is shared by every handler, sessions and the backend client live as long as the server
#[derive(Clone)]
pub struct AppState {
    pub(crate) config: Configuration,
    pub(crate) sessions: Arc<SessionStore>,
    pub(crate) documents: Arc<dyn DocumentRepository>,
}

impl AppState {
    pub fn new(config: Configuration, store: RepositoryStore) -> LibraryResult<AppState> {
        let documents = create_document_repository(&config, store)?;
        let sessions = Arc::new(SessionStore::new().with_idle_ttl_secs(config.session_idle_secs));
        Ok(AppState {
            config,
            sessions,
            documents,
        })
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/sessions", post(open_session))
        .route("/sessions/:session_id",
               get(get_session).delete(close_session))
        .route("/sessions/:session_id/search",
               put(update_search_text).post(search_documents))
        .route("/sessions/:session_id/categories/:category", post(toggle_category))
        .route("/sessions/:session_id/filters", delete(clear_filters))
        .route("/sessions/:session_id/page", post(change_page))
        .route("/sessions/:session_id/cart", delete(clear_cart))
        .route("/sessions/:session_id/cart/items/:document_id",
               post(add_to_cart).delete(remove_from_cart))
        .route("/sessions/:session_id/cart/visibility", put(show_cart))
        .route("/sessions/:session_id/cart/submit", post(submit_request))
        .with_state(state)
}

pub(crate) type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Transport { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, format!("{:?}", err))
            }
            CommandError::Runtime { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::Serialization { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;
    use axum::http::StatusCode;
    use serde_json::{json, Value};
    use crate::core::command::CommandError;
    use crate::core::controller::{AppState, router, ServerError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    async fn spawn_app() -> SocketAddr {
        let state = AppState::new(Configuration::new("test"), RepositoryStore::InMemory)
            .expect("should build state");
        let server = axum::Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0)))
            .serve(router(state).into_make_service());
        let addr = server.local_addr();
        tokio::spawn(server);
        addr
    }

    #[tokio::test]
    async fn test_should_map_command_errors() {
        let (status, _) = ServerError::from(CommandError::NotFound { message: "x".to_string() });
        assert_eq!(StatusCode::NOT_FOUND, status);
        let (status, _) = ServerError::from(CommandError::Transport { message: "x".to_string(), reason_code: None, retryable: false });
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status);
        let (status, _) = ServerError::from(CommandError::Validation { message: "x".to_string(), reason_code: None });
        assert_eq!(StatusCode::BAD_REQUEST, status);
        let (status, _) = ServerError::from(CommandError::Runtime { message: "x".to_string(), reason_code: None, retryable: true });
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status);
    }

    #[tokio::test]
    async fn test_should_browse_and_fill_cart_over_http() {
        let addr = spawn_app().await;
        let client = reqwest::Client::new();
        let base = format!("http://{}", addr);

        let opened: Value = client.post(format!("{}/sessions", base)).send().await.expect("should open")
            .json().await.expect("should parse view");
        let session_id = opened["view"]["session_id"].as_str().expect("should carry id").to_string();
        let session = format!("{}/sessions/{}", base, session_id);
        assert_eq!(12, opened["view"]["summary"]["total"]);
        assert_eq!("grid", opened["view"]["results"]["state"]);

        let page: Value = client.post(format!("{}/page", session)).json(&json!("next"))
            .send().await.expect("should page").json().await.expect("should parse view");
        assert_eq!(2, page["view"]["pagination"]["current_page"]);

        let filtered: Value = client.post(format!("{}/categories/poesia", session))
            .send().await.expect("should filter").json().await.expect("should parse view");
        assert_eq!("poesia", filtered["view"]["summary"]["category"]);
        assert!(filtered["view"]["pagination"].is_null());

        let added: Value = client.post(format!("{}/cart/items/5", session))
            .send().await.expect("should add").json().await.expect("should parse view");
        assert_eq!(1, added["view"]["header"]["cart_count"]);
        assert!(added.get("notification").is_none());

        let again: Value = client.post(format!("{}/cart/items/5", session))
            .send().await.expect("should add again").json().await.expect("should parse view");
        assert_eq!("This document is already in your cart", again["notification"]);

        let ineligible = client.post(format!("{}/cart/items/4", session)).send().await.expect("should answer");
        assert_eq!(reqwest::StatusCode::BAD_REQUEST, ineligible.status());

        let shown: Value = client.put(format!("{}/cart/visibility", session)).json(&json!({"visible": true}))
            .send().await.expect("should show cart").json().await.expect("should parse view");
        assert_eq!(1, shown["view"]["cart"]["count"]);

        let submitted: Value = client.post(format!("{}/cart/submit", session))
            .send().await.expect("should submit").json().await.expect("should parse view");
        assert_eq!("Document requests are not available yet", submitted["notification"]);

        let closed = client.delete(session.as_str()).send().await.expect("should close");
        assert_eq!(reqwest::StatusCode::OK, closed.status());
        let gone = client.get(session.as_str()).send().await.expect("should answer");
        assert_eq!(reqwest::StatusCode::NOT_FOUND, gone.status());
    }

    #[tokio::test]
    async fn test_should_reject_malformed_page_change() {
        let addr = spawn_app().await;
        let client = reqwest::Client::new();
        let opened: Value = client.post(format!("http://{}/sessions", addr)).send().await.expect("should open")
            .json().await.expect("should parse view");
        let session_id = opened["view"]["session_id"].as_str().expect("should carry id").to_string();

        let res = client.post(format!("http://{}/sessions/{}/page", addr, session_id))
            .json(&json!("sideways")).send().await.expect("should answer");
        assert_eq!(reqwest::StatusCode::BAD_REQUEST, res.status());
    }
}
