use crate::core::domain::Identifiable;
use crate::core::library::DocumentId;
use crate::session::view::CatalogView;

pub(crate) const ALREADY_IN_CART: &str = "This document is already in your cart";
pub(crate) const REQUESTS_UNAVAILABLE: &str = "Document requests are not available yet";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CartChange {
    Added,
    AlreadyPresent,
}

// CartOutcome is the page after a cart operation plus a message to pop up, if any
#[derive(Debug, Clone)]
pub(crate) struct CartOutcome {
    pub view: CatalogView,
    pub notification: Option<String>,
}

impl CartOutcome {
    pub fn new(view: CatalogView) -> Self {
        Self { view, notification: None }
    }

    pub fn with_notification(mut self, notification: &str) -> Self {
        self.notification = Some(notification.to_string());
        self
    }
}

// Cart is an insertion ordered set of staged items, unique by id. Every operation consumes
// the cart and hands back the next one.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Cart<T: Identifiable> {
    items: Vec<T>,
}

impl<T: Identifiable> Default for Cart<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Identifiable> Cart<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: DocumentId) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }

    pub fn add(mut self, item: T) -> (Self, CartChange) {
        if self.contains(item.id()) {
            return (self, CartChange::AlreadyPresent);
        }
        self.items.push(item);
        (self, CartChange::Added)
    }

    pub fn remove(mut self, id: DocumentId) -> (Self, bool) {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        let removed = self.items.len() != before;
        (self, removed)
    }

    pub fn clear(self) -> Self {
        Self::default()
    }
}
