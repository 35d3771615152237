use serde::{Deserialize, Serialize};

// QueryMode is the single retrieval path that backs the result grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "snake_case")]
pub(crate) enum QueryMode {
    All,
    Search(String),
    Category(String),
}

impl QueryMode {
    pub fn search_text(&self) -> Option<&str> {
        match self {
            QueryMode::Search(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn category(&self) -> Option<&str> {
        match self {
            QueryMode::Category(category) => Some(category.as_str()),
            _ => None,
        }
    }

    // banner shown when a fetch of this mode fails
    pub fn failure_message(&self) -> &'static str {
        match self {
            QueryMode::All => "Error loading documents",
            QueryMode::Search(_) => "Error searching the catalog",
            QueryMode::Category(_) => "Error filtering by category",
        }
    }
}

// PageQuery is everything a single fetch needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PageQuery {
    pub mode: QueryMode,
    pub page: usize,
    pub page_size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum PageChange {
    To(usize),
    Next,
    Previous,
}

// QueryState holds the search bar draft, the active mode and the 1-based page
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct QueryState {
    search_text: String,
    mode: QueryMode,
    page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        QueryState::new()
    }
}

impl QueryState {
    pub fn new() -> Self {
        Self {
            search_text: String::new(),
            mode: QueryMode::All,
            page: 1,
        }
    }

    pub fn search_text(&self) -> &str {
        self.search_text.as_str()
    }

    pub fn mode(&self) -> &QueryMode {
        &self.mode
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn has_filters(&self) -> bool {
        !self.search_text.is_empty() || self.mode != QueryMode::All
    }

    // typing only edits the draft
    pub fn set_search_text(&mut self, text: &str) {
        self.search_text = text.to_string();
    }

    pub fn submit_search(&mut self) {
        let trimmed = self.search_text.trim();
        self.mode = if trimmed.is_empty() {
            QueryMode::All
        } else {
            QueryMode::Search(trimmed.to_string())
        };
        self.page = 1;
    }

    pub fn toggle_category(&mut self, category: &str) {
        if self.mode.category() == Some(category) {
            self.mode = QueryMode::All;
        } else {
            self.mode = QueryMode::Category(category.to_string());
            self.search_text.clear();
        }
        self.page = 1;
    }

    pub fn clear_filters(&mut self) {
        self.search_text.clear();
        self.mode = QueryMode::All;
        self.page = 1;
    }

    // returns true when the page actually moved
    pub fn change_page(&mut self, change: PageChange, total_pages: usize) -> bool {
        let last = total_pages.max(1);
        let target = match change {
            PageChange::To(page) => page,
            PageChange::Next => self.page.saturating_add(1),
            PageChange::Previous => self.page.saturating_sub(1),
        }.clamp(1, last);
        let moved = target != self.page;
        self.page = target;
        moved
    }

    // keeps the page within the results actually returned, true when it had to move
    pub fn clamp_page(&mut self, total_pages: usize) -> bool {
        self.change_page(PageChange::To(self.page), total_pages)
    }

    pub fn page_query(&self, page_size: usize) -> PageQuery {
        PageQuery {
            mode: self.mode.clone(),
            page: self.page,
            page_size,
        }
    }
}
