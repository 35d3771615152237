use std::collections::HashMap;
use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::core::library::{DocumentId, LibraryError, LibraryResult, PaginatedResult};
use crate::documents::dto::{AvailabilityDto, CategorySummaryDto, DocumentDto, DocumentPageDto};
use crate::documents::repository::DocumentRepository;
use crate::utils::http::endpoint;

#[derive(Debug)]
pub struct HttpDocumentRepository {
    client: Client,
    base_url: String,
    concurrency: usize,
}

impl HttpDocumentRepository {
    pub(crate) fn new(client: Client, base_url: &str, concurrency: usize) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
            concurrency: concurrency.max(1),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, query: &[(&str, String)]) -> LibraryResult<T> {
        debug!("GET {} {:?}", url, query);
        let res = self.client
            .get(url.clone())
            .query(query)
            .send()
            .await?;
        let status = res.status();
        if !status.is_success() {
            return Err(LibraryError::from_status(url.as_str(), status.as_u16()));
        }
        res.json::<T>().await.map_err(LibraryError::from)
    }

    async fn get_page(&self, url: Url, mut query: Vec<(&str, String)>,
                      page: usize, page_size: usize) -> LibraryResult<PaginatedResult<DocumentDto>> {
        query.push(("page", page.to_string()));
        query.push(("size", page_size.to_string()));
        let res: DocumentPageDto = self.get_json(url, &query).await?;
        Ok(res.into_paginated(page, page_size))
    }
}

#[async_trait]
impl DocumentRepository for HttpDocumentRepository {
    async fn list_categories(&self) -> LibraryResult<Vec<CategorySummaryDto>> {
        let url = endpoint(&self.base_url, &["categorias", ""])?;
        self.get_json(url, &[]).await
    }

    async fn list(&self, page: usize, page_size: usize) -> LibraryResult<PaginatedResult<DocumentDto>> {
        let url = endpoint(&self.base_url, &["documentos", ""])?;
        self.get_page(url, vec![], page, page_size).await
    }

    async fn search(&self, text: &str, page: usize, page_size: usize) -> LibraryResult<PaginatedResult<DocumentDto>> {
        let url = endpoint(&self.base_url, &["catalogo", "buscar", ""])?;
        self.get_page(url, vec![("q", text.to_string())], page, page_size).await
    }

    async fn find_by_category(&self, category: &str,
                              page: usize, page_size: usize) -> LibraryResult<PaginatedResult<DocumentDto>> {
        let url = endpoint(&self.base_url, &["categorias", category, "documentos", ""])?;
        self.get_page(url, vec![], page, page_size).await
    }

    async fn find_availability(&self, id: DocumentId) -> LibraryResult<AvailabilityDto> {
        let id = id.to_string();
        let url = endpoint(&self.base_url, &["ejemplares", "documento", id.as_str(), "disponibilidad"])?;
        self.get_json(url, &[]).await
    }

    async fn find_availability_batch(&self, ids: &[DocumentId]) -> HashMap<DocumentId, LibraryResult<AvailabilityDto>> {
        let mut distinct = ids.to_vec();
        distinct.sort_unstable();
        distinct.dedup();
        stream::iter(distinct)
            .map(|id| async move { (id, self.find_availability(id).await) })
            .buffer_unordered(self.concurrency)
            .collect::<HashMap<_, _>>()
            .await
    }
}
