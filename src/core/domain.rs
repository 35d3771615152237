use serde::{Deserialize, Serialize};
use crate::core::library::DocumentId;

// Identifiable defines common traits that can be shared by catalog objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> DocumentId;
}

// Results are always fetched six at a time, the backend sees this as `size`
pub(crate) const PAGE_SIZE: usize = 6;

pub(crate) const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/v1";

pub(crate) const DEFAULT_SESSION_IDLE_SECS: u64 = 30 * 60;

// Configuration abstracts config options for the catalog page
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_name: String,
    pub api_base_url: String,
    pub availability_concurrency: usize,
    pub request_timeout_secs: u64,
    // sessions untouched for this long are dropped
    pub session_idle_secs: u64,
}

impl Configuration {
    pub fn new(branch_name: &str) -> Self {
        Configuration {
            branch_name: branch_name.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            availability_concurrency: 6,
            request_timeout_secs: 10,
            session_idle_secs: DEFAULT_SESSION_IDLE_SECS,
        }
    }

    pub fn with_api_base_url(mut self, api_base_url: &str) -> Self {
        self.api_base_url = api_base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_session_idle_secs(mut self, session_idle_secs: u64) -> Self {
        self.session_idle_secs = session_idle_secs;
        self
    }

    // overrides the backend location from CATALOG_API_BASE_URL and the session idle timeout
    // from CATALOG_SESSION_IDLE_SECS when they are set
    pub fn from_env(branch_name: &str) -> Self {
        let config = Configuration::new(branch_name);
        let config = match std::env::var("CATALOG_API_BASE_URL") {
            Ok(url) if !url.trim().is_empty() => config.with_api_base_url(url.trim()),
            _ => config,
        };
        match std::env::var("CATALOG_SESSION_IDLE_SECS").ok().and_then(|s| s.trim().parse::<u64>().ok()) {
            Some(secs) => config.with_session_idle_secs(secs),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new("test");
        assert_eq!(1800, config.session_idle_secs);
        assert_eq!(6, config.availability_concurrency);
        assert_eq!(10, config.request_timeout_secs);
        assert_eq!("http://localhost:8000/api/v1", config.api_base_url.as_str());
    }

    #[tokio::test]
    async fn test_should_strip_trailing_slash() {
        let config = Configuration::new("test").with_api_base_url("http://catalog:8000/api/v1/");
        assert_eq!("http://catalog:8000/api/v1", config.api_base_url.as_str());
    }
}
