use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

// RepositoryStore picks where catalog documents come from
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    // the catalog REST backend
    Http,
    // built-in demo catalog for local development
    InMemory,
}

impl RepositoryStore {
    pub fn from_env() -> RepositoryStore {
        std::env::var("CATALOG_STORE").map(RepositoryStore::from).unwrap_or(RepositoryStore::Http)
    }
}

impl From<String> for RepositoryStore {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" => RepositoryStore::InMemory,
            _ => RepositoryStore::Http,
        }
    }
}

impl Display for RepositoryStore {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RepositoryStore::Http => write!(f, "http"),
            RepositoryStore::InMemory => write!(f, "memory"),
        }
    }
}
