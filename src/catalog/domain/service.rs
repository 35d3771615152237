use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info, warn};
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::model::{PageChange, PageQuery, QueryMode};
use crate::core::domain::{Configuration, PAGE_SIZE};
use crate::core::library::{DocumentId, LibraryResult, PaginatedResult};
use crate::documents::dto::{AvailabilityDto, DocumentDto};
use crate::documents::repository::DocumentRepository;
use crate::session::model::{CatalogSession, FetchOutcome};
use crate::session::store::{SessionStore, SharedSession};
use crate::session::view::CatalogView;

pub(crate) struct CatalogServiceImpl {
    config: Configuration,
    document_repository: Arc<dyn DocumentRepository>,
    sessions: Arc<SessionStore>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, document_repository: Arc<dyn DocumentRepository>,
                      sessions: Arc<SessionStore>) -> Self {
        Self {
            config: config.clone(),
            document_repository,
            sessions,
        }
    }

    async fn load_categories(&self, session: &SharedSession) {
        let categories = self.document_repository.list_categories().await.unwrap_or_else(|err| {
            warn!("categories defaulted to empty: {}", err);
            vec![]
        });
        session.lock().await.categories = categories;
    }

    // the fetch runs on its own task, it still completes when the request that started it
    // is dropped
    async fn refresh(&self, session: &SharedSession) {
        let task = tokio::spawn(fetch_page(self.document_repository.clone(), session.clone()));
        if let Err(err) = task.await {
            warn!("fetch task failed: {}", err);
        }
    }

    async fn render(&self, session: &SharedSession) -> CatalogView {
        CatalogView::render(&*session.lock().await, &self.config)
    }

    // applies a query transition and refetches when it asks for it
    async fn transition<F>(&self, session_id: &str, update: F) -> LibraryResult<CatalogView>
        where F: FnOnce(&mut CatalogSession) -> bool + Send {
        let session = self.sessions.get(session_id).await?;
        let fetch = {
            let mut guard = session.lock().await;
            update(&mut *guard)
        };
        if fetch {
            self.refresh(&session).await;
        }
        Ok(self.render(&session).await)
    }
}

async fn fetch_documents(repository: &dyn DocumentRepository,
                         query: &PageQuery) -> LibraryResult<PaginatedResult<DocumentDto>> {
    match &query.mode {
        QueryMode::All => {
            repository.list(query.page, query.page_size).await
        }
        QueryMode::Search(text) => {
            repository.search(text.as_str(), query.page, query.page_size).await
        }
        QueryMode::Category(category) => {
            repository.find_by_category(category.as_str(), query.page, query.page_size).await
        }
    }
}

// one batch per rendered page, a failed lookup degrades to the unavailable default
async fn fetch_availability(repository: &dyn DocumentRepository,
                            ids: &[DocumentId]) -> HashMap<DocumentId, AvailabilityDto> {
    repository.find_availability_batch(ids).await
        .into_iter()
        .map(|(id, res)| {
            let counts = res.unwrap_or_else(|err| {
                warn!("availability of document {} defaulted: {}", id, err);
                AvailabilityDto::unavailable()
            });
            (id, counts)
        })
        .collect()
}

// runs the active query; the session lock is released while the backend is awaited and a
// response is applied only if no newer fetch was issued meanwhile
async fn fetch_page(repository: Arc<dyn DocumentRepository>, session: SharedSession) {
    loop {
        let ticket = session.lock().await.begin_fetch(PAGE_SIZE);
        let res = fetch_documents(repository.as_ref(), &ticket.query).await;
        if let Err(err) = &res {
            warn!("fetching {:?} failed: {}", ticket.query, err);
        }
        let outcome = {
            let mut guard = session.lock().await;
            if !guard.is_current(&ticket) {
                debug!("discarding superseded response for {:?}", ticket.query);
                return;
            }
            guard.complete_fetch(&ticket, res)
        };
        let ids = match outcome {
            FetchOutcome::Applied(ids) => ids,
            FetchOutcome::Clamped => {
                debug!("page {} is past the results of {:?}, fetching again", ticket.query.page, ticket.query.mode);
                continue;
            }
            FetchOutcome::Dropped => return,
        };
        if !ids.is_empty() {
            let availability = fetch_availability(repository.as_ref(), &ids).await;
            let applied = session.lock().await.apply_availability(&ticket, availability, Utc::now().naive_utc());
            if !applied {
                debug!("discarding superseded availability for {:?}", ticket.query);
            }
        }
        return;
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn open_session(&self) -> LibraryResult<CatalogView> {
        let session = self.sessions.create().await;
        let session_id = session.lock().await.session_id().to_string();
        info!("opened catalog session {}, {} open", session_id, self.sessions.len().await);
        futures::join!(self.load_categories(&session), self.refresh(&session));
        Ok(self.render(&session).await)
    }

    async fn view(&self, session_id: &str) -> LibraryResult<CatalogView> {
        let session = self.sessions.get(session_id).await?;
        Ok(self.render(&session).await)
    }

    async fn close_session(&self, session_id: &str) -> LibraryResult<()> {
        self.sessions.remove(session_id).await?;
        info!("closed catalog session {}", session_id);
        Ok(())
    }

    async fn update_search_text(&self, session_id: &str, text: &str) -> LibraryResult<CatalogView> {
        self.transition(session_id, |session| {
            session.query.set_search_text(text);
            false
        }).await
    }

    async fn submit_search(&self, session_id: &str, text: Option<&str>) -> LibraryResult<CatalogView> {
        self.transition(session_id, |session| {
            if let Some(text) = text {
                session.query.set_search_text(text);
            }
            session.query.submit_search();
            true
        }).await
    }

    async fn toggle_category(&self, session_id: &str, category: &str) -> LibraryResult<CatalogView> {
        self.transition(session_id, |session| {
            session.query.toggle_category(category);
            true
        }).await
    }

    async fn clear_filters(&self, session_id: &str) -> LibraryResult<CatalogView> {
        self.transition(session_id, |session| {
            session.query.clear_filters();
            true
        }).await
    }

    async fn change_page(&self, session_id: &str, change: PageChange) -> LibraryResult<CatalogView> {
        self.transition(session_id, |session| {
            let total_pages = session.total_pages(PAGE_SIZE);
            session.query.change_page(change, total_pages)
        }).await
    }
}
