use chrono::NaiveDateTime;
use serde::Serialize;
use crate::catalog::domain::pagination::PaginationView;
use crate::core::domain::{Configuration, PAGE_SIZE};
use crate::core::library::{AvailabilityLevel, DocumentId};
use crate::documents::dto::{CategorySummaryDto, DocumentDto};
use crate::session::model::{AvailabilitySnapshot, CatalogSession};
use crate::utils::date::serializer;

// placeholder cards shown while a page is loading
const LOADING_PLACEHOLDERS: usize = 6;

// CatalogView is the render tree of the page, rebuilt after every transition
#[derive(Debug, Clone, Serialize)]
pub(crate) struct CatalogView {
    pub session_id: String,
    pub header: HeaderView,
    pub search_bar: SearchBarView,
    pub sidebar: SidebarView,
    pub summary: SummaryView,
    pub error: Option<String>,
    pub results: ResultsView,
    pub pagination: Option<PaginationView>,
    pub cart: Option<CartModalView>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct HeaderView {
    pub title: String,
    pub subtitle: String,
    pub cart_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct SearchBarView {
    pub text: String,
    pub show_clear: bool,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct SidebarView {
    pub loading: bool,
    pub categories: Vec<CategoryEntryView>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct CategoryEntryView {
    pub category: String,
    pub label: String,
    pub count: u64,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct SummaryView {
    pub loading: bool,
    pub shown: usize,
    pub total: u64,
    pub search_text: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub(crate) enum ResultsView {
    Loading { placeholders: usize },
    Empty,
    Grid { cards: Vec<CardView> },
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct CardView {
    pub document_id: DocumentId,
    pub kind: String,
    pub title: String,
    pub author: String,
    pub year: Option<i32>,
    pub publisher: Option<String>,
    pub category: Option<String>,
    pub availability: CardAvailabilityView,
    pub button: CardButtonView,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub(crate) enum CardAvailabilityView {
    Pending,
    Known {
        label: String,
        level: AvailabilityLevel,
        available: u32,
        total: u32,
        loaned: u32,
        in_room: u32,
        can_request: bool,
        #[serde(with = "serializer")]
        fetched_at: NaiveDateTime,
    },
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct CardButtonView {
    pub enabled: bool,
    pub in_cart: bool,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct CartModalView {
    pub count: usize,
    pub items: Vec<CartItemView>,
    pub show_actions: bool,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct CartItemView {
    pub document_id: DocumentId,
    pub title: String,
    pub author: String,
    pub kind: String,
}

// backend category keys use underscores between words
pub(crate) fn category_label(category: &str) -> String {
    category.replace('_', " ")
}

impl CatalogView {
    pub fn render(session: &CatalogSession, config: &Configuration) -> CatalogView {
        let query = &session.query;
        CatalogView {
            session_id: session.session_id().to_string(),
            header: HeaderView {
                title: config.branch_name.to_string(),
                subtitle: "Browse and request books".to_string(),
                cart_count: session.cart.len(),
            },
            search_bar: SearchBarView {
                text: query.search_text().to_string(),
                show_clear: query.has_filters(),
            },
            sidebar: SidebarView {
                loading: session.categories.is_empty(),
                categories: session.categories.iter()
                    .map(|c| CategoryEntryView::build(c, query.mode().category()))
                    .collect(),
            },
            summary: SummaryView {
                loading: session.loading,
                shown: session.documents.len(),
                total: session.total_items,
                search_text: query.mode().search_text().map(str::to_string),
                category: query.mode().category().map(str::to_string),
            },
            error: session.error.clone(),
            results: ResultsView::build(session),
            pagination: PaginationView::build(query.page(), session.total_pages(PAGE_SIZE)),
            cart: if session.cart_visible { Some(CartModalView::build(session)) } else { None },
        }
    }
}

impl CategoryEntryView {
    fn build(summary: &CategorySummaryDto, selected: Option<&str>) -> Self {
        Self {
            category: summary.category.to_string(),
            label: category_label(summary.category.as_str()),
            count: summary.count,
            selected: selected == Some(summary.category.as_str()),
        }
    }
}

impl ResultsView {
    fn build(session: &CatalogSession) -> Self {
        if session.loading {
            ResultsView::Loading { placeholders: LOADING_PLACEHOLDERS }
        } else if session.documents.is_empty() {
            ResultsView::Empty
        } else {
            ResultsView::Grid {
                cards: session.documents.iter().map(|d| CardView::build(d, session)).collect(),
            }
        }
    }
}

impl CardView {
    fn build(doc: &DocumentDto, session: &CatalogSession) -> Self {
        let availability = CardAvailabilityView::from(session.availability.get(&doc.id));
        Self {
            document_id: doc.id,
            kind: doc.kind.to_uppercase(),
            title: doc.title.to_string(),
            author: doc.author.to_string(),
            year: doc.year,
            publisher: doc.publisher.clone(),
            category: doc.category.as_deref().map(category_label),
            button: CardButtonView {
                enabled: session.can_request(doc.id),
                in_cart: session.cart.contains(doc.id),
            },
            availability,
        }
    }
}

impl From<Option<&AvailabilitySnapshot>> for CardAvailabilityView {
    fn from(snapshot: Option<&AvailabilitySnapshot>) -> Self {
        match snapshot {
            None => CardAvailabilityView::Pending,
            Some(snapshot) => {
                let counts = &snapshot.counts;
                CardAvailabilityView::Known {
                    label: format!("{}/{}", counts.available, counts.total),
                    level: AvailabilityLevel::from_available(counts.available),
                    available: counts.available,
                    total: counts.total,
                    loaned: counts.loaned,
                    in_room: counts.in_room,
                    can_request: counts.can_request,
                    fetched_at: snapshot.fetched_at,
                }
            }
        }
    }
}

impl CartModalView {
    fn build(session: &CatalogSession) -> Self {
        Self {
            count: session.cart.len(),
            items: session.cart.items().iter().map(|d| CartItemView {
                document_id: d.id,
                title: d.title.to_string(),
                author: d.author.to_string(),
                kind: d.kind.to_string(),
            }).collect(),
            show_actions: !session.cart.is_empty(),
        }
    }
}
