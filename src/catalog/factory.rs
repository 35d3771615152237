use std::sync::Arc;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::documents::repository::DocumentRepository;
use crate::session::store::SessionStore;

pub(crate) fn create_catalog_service(config: &Configuration, document_repository: Arc<dyn DocumentRepository>,
                                     sessions: Arc<SessionStore>) -> Box<dyn CatalogService> {
    Box::new(CatalogServiceImpl::new(config, document_repository, sessions))
}
