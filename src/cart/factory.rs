use std::sync::Arc;
use crate::cart::domain::CartService;
use crate::cart::domain::service::CartServiceImpl;
use crate::core::domain::Configuration;
use crate::session::store::SessionStore;

pub(crate) fn create_cart_service(config: &Configuration, sessions: Arc<SessionStore>) -> Box<dyn CartService> {
    Box::new(CartServiceImpl::new(config, sessions))
}
