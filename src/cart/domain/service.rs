use std::sync::Arc;
use async_trait::async_trait;
use tracing::info;
use crate::cart::domain::CartService;
use crate::cart::domain::model::{ALREADY_IN_CART, CartChange, CartOutcome, REQUESTS_UNAVAILABLE};
use crate::core::domain::Configuration;
use crate::core::library::{DocumentId, LibraryError, LibraryResult};
use crate::session::model::CatalogSession;
use crate::session::store::SessionStore;
use crate::session::view::CatalogView;

pub(crate) struct CartServiceImpl {
    config: Configuration,
    sessions: Arc<SessionStore>,
}

impl CartServiceImpl {
    pub(crate) fn new(config: &Configuration, sessions: Arc<SessionStore>) -> Self {
        Self {
            config: config.clone(),
            sessions,
        }
    }

    // cart changes never touch the backend so the session stays locked for the whole update
    async fn update<F>(&self, session_id: &str, update: F) -> LibraryResult<CartOutcome>
        where F: FnOnce(&mut CatalogSession) -> LibraryResult<Option<&'static str>> + Send {
        let session = self.sessions.get(session_id).await?;
        let mut guard = session.lock().await;
        let notification = update(&mut *guard)?;
        let outcome = CartOutcome::new(CatalogView::render(&*guard, &self.config));
        Ok(match notification {
            Some(notification) => outcome.with_notification(notification),
            None => outcome,
        })
    }
}

#[async_trait]
impl CartService for CartServiceImpl {
    async fn add_to_cart(&self, session_id: &str, document_id: DocumentId) -> LibraryResult<CartOutcome> {
        self.update(session_id, |session| {
            match session.add_to_cart(document_id)? {
                CartChange::Added => Ok(None),
                CartChange::AlreadyPresent => Ok(Some(ALREADY_IN_CART)),
            }
        }).await
    }

    async fn remove_from_cart(&self, session_id: &str, document_id: DocumentId) -> LibraryResult<CartOutcome> {
        self.update(session_id, |session| {
            session.remove_from_cart(document_id);
            Ok(None)
        }).await
    }

    async fn clear_cart(&self, session_id: &str) -> LibraryResult<CartOutcome> {
        self.update(session_id, |session| {
            session.clear_cart();
            Ok(None)
        }).await
    }

    async fn set_cart_visible(&self, session_id: &str, visible: bool) -> LibraryResult<CartOutcome> {
        self.update(session_id, |session| {
            session.cart_visible = visible;
            Ok(None)
        }).await
    }

    async fn submit_request(&self, session_id: &str) -> LibraryResult<CartOutcome> {
        self.update(session_id, |session| {
            if session.cart.is_empty() {
                return Err(LibraryError::validation("cart is empty", Some("400".to_string())));
            }
            info!("session {} asked to request {} documents", session.session_id(), session.cart.len());
            Ok(Some(REQUESTS_UNAVAILABLE))
        }).await
    }
}
