use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::{DocumentId, PaginatedResult};

// DocumentDto is a catalog entry as served by the backend, field names follow the wire format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct DocumentDto {
    pub id: DocumentId,
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "autor")]
    pub author: String,
    #[serde(rename = "anio", default)]
    pub year: Option<i32>,
    #[serde(rename = "editorial", default)]
    pub publisher: Option<String>,
    #[serde(rename = "edicion", default)]
    pub edition: Option<String>,
    #[serde(rename = "categoria", default)]
    pub category: Option<String>,
    #[serde(rename = "tipo_medio", default)]
    pub media_type: Option<String>,
}

impl DocumentDto {
    pub fn new(id: DocumentId, kind: &str, title: &str, author: &str) -> DocumentDto {
        DocumentDto {
            id,
            kind: kind.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            year: None,
            publisher: None,
            edition: None,
            category: None,
            media_type: None,
        }
    }

    pub fn with_category(mut self, category: &str) -> DocumentDto {
        self.category = Some(category.to_string());
        self
    }

    pub fn with_publication(mut self, publisher: &str, year: i32) -> DocumentDto {
        self.publisher = Some(publisher.to_string());
        self.year = Some(year);
        self
    }
}

impl Identifiable for DocumentDto {
    fn id(&self) -> DocumentId {
        self.id
    }
}

// DocumentPageDto is one page of a listing, search or category filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct DocumentPageDto {
    #[serde(default)]
    pub total_items: u64,
    #[serde(default)]
    pub items: Vec<DocumentDto>,
}

impl DocumentPageDto {
    pub fn into_paginated(self, page: usize, page_size: usize) -> PaginatedResult<DocumentDto> {
        PaginatedResult::new(page, page_size, self.total_items, self.items)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct CategorySummaryDto {
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "conteo")]
    pub count: u64,
}

impl CategorySummaryDto {
    pub fn new(category: &str, count: u64) -> Self {
        Self {
            category: category.to_string(),
            count,
        }
    }
}

// AvailabilityDto counts the copies of one document by state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct AvailabilityDto {
    #[serde(rename = "disponibles", default)]
    pub available: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(rename = "puede_solicitar", default)]
    pub can_request: bool,
    #[serde(rename = "prestados", default)]
    pub loaned: u32,
    #[serde(rename = "en_sala", default)]
    pub in_room: u32,
    #[serde(rename = "mantenimiento", default)]
    pub maintenance: u32,
}

impl AvailabilityDto {
    pub fn new(available: u32, loaned: u32, in_room: u32) -> Self {
        Self {
            available,
            total: available + loaned + in_room,
            can_request: available > 0,
            loaned,
            in_room,
            maintenance: 0,
        }
    }

    // substituted whenever a lookup fails, nothing can be requested
    pub fn unavailable() -> Self {
        Self {
            available: 0,
            total: 0,
            can_request: false,
            loaned: 0,
            in_room: 0,
            maintenance: 0,
        }
    }
}
