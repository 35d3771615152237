use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

// Backend documents are keyed by the integer id the catalog API hands out
pub(crate) type DocumentId = i64;

#[derive(Debug)]
pub enum LibraryError {
    Transport {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    NotFound {
        message: String,
    },
    // The backend answered with a 5xx or could not be reached in time. The caller may issue
    // the same request again, there is no automatic retry.
    CurrentlyUnavailable {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn transport(message: &str, reason_code: Option<String>, retryable: bool) -> LibraryError {
        LibraryError::Transport { message: message.to_string(), reason_code, retryable }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn unavailable(message: &str, reason_code: Option<String>, retryable: bool) -> LibraryError {
        LibraryError::CurrentlyUnavailable { message: message.to_string(), reason_code, retryable }
    }

    // maps a non-success http status from the catalog backend onto the matching error kind
    pub fn from_status(message: &str, status: u16) -> LibraryError {
        let reason = Some(status.to_string());
        match status {
            404 => LibraryError::not_found(
                format!("not found error {} {}", message, status).as_str()),
            400..=499 => LibraryError::validation(
                format!("rejected request {} {}", message, status).as_str(), reason),
            500..=599 => LibraryError::unavailable(
                format!("catalog backend unavailable {} {}", message, status).as_str(), reason, true),
            _ => LibraryError::transport(
                format!("unexpected catalog response {} {}", message, status).as_str(), reason, false),
        }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn retryable(&self) -> bool {
        match self {
            LibraryError::Transport { retryable, .. } => { *retryable }
            LibraryError::NotFound { .. } => { false }
            LibraryError::CurrentlyUnavailable { retryable, .. } => { *retryable }
            LibraryError::Validation { .. } => { false }
            LibraryError::Serialization { .. } => { false }
            LibraryError::Runtime { .. } => { false }
        }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl From<String> for LibraryError {
    fn from(err: String) -> Self {
        LibraryError::runtime(err.as_str(), None)
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Transport { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::CurrentlyUnavailable { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for catalog operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

// It defines abstraction for a page of an offset paginated listing
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedResult<T> {
    // 1-based page number
    pub page: usize,
    // page size
    pub page_size: usize,
    // number of records across all pages
    pub total_items: u64,
    // list of records
    pub records: Vec<T>,
}

impl<T> PaginatedResult<T> {
    pub(crate) fn new(page: usize, page_size: usize, total_items: u64, records: Vec<T>) -> Self {
        PaginatedResult {
            page,
            page_size,
            total_items,
            records,
        }
    }

    pub(crate) fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.page_size)
    }
}

pub(crate) fn total_pages(total_items: u64, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size as u64) as usize
}

// AvailabilityLevel buckets the available copies of a document for the card indicator
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum AvailabilityLevel {
    Unavailable,
    Limited,
    Available,
}

impl AvailabilityLevel {
    pub fn from_available(available: u32) -> Self {
        match available {
            0 => AvailabilityLevel::Unavailable,
            1..=2 => AvailabilityLevel::Limited,
            _ => AvailabilityLevel::Available,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{AvailabilityLevel, LibraryError, PaginatedResult, total_pages};

    #[tokio::test]
    async fn test_should_create_transport_error() {
        assert!(matches!(LibraryError::transport("test", None, false), LibraryError::Transport{ message: _, reason_code: _, retryable: _ }));
    }

    #[tokio::test]
    async fn test_should_create_not_found_error() {
        assert!(matches!(LibraryError::not_found("test"), LibraryError::NotFound{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_unavailable_error() {
        assert!(matches!(LibraryError::unavailable("test", None, false), LibraryError::CurrentlyUnavailable{ message: _, reason_code: _, retryable: _ }));
    }

    #[tokio::test]
    async fn test_should_create_validation_error() {
        assert!(matches!(LibraryError::validation("test", None), LibraryError::Validation{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_map_http_status() {
        assert!(matches!(LibraryError::from_status("test", 404), LibraryError::NotFound{ message: _ }));
        assert!(matches!(LibraryError::from_status("test", 422), LibraryError::Validation{ message: _, reason_code: _ }));
        assert!(matches!(LibraryError::from_status("test", 503), LibraryError::CurrentlyUnavailable{ message: _, reason_code: _, retryable: true }));
        assert!(matches!(LibraryError::from_status("test", 302), LibraryError::Transport{ message: _, reason_code: _, retryable: false }));
    }

    #[tokio::test]
    async fn test_should_create_retryable_error() {
        assert_eq!(false, LibraryError::transport("test", None, false).retryable());
        assert_eq!(true, LibraryError::transport("test", None, true).retryable());
        assert_eq!(false, LibraryError::not_found("test").retryable());
        assert_eq!(true, LibraryError::unavailable("test", None, true).retryable());
        assert_eq!(false, LibraryError::validation("test", None).retryable());
        assert_eq!(false, LibraryError::serialization("test").retryable());
        assert_eq!(false, LibraryError::runtime("test", None).retryable());
    }

    #[tokio::test]
    async fn test_should_compute_total_pages() {
        assert_eq!(0, total_pages(0, 6));
        assert_eq!(1, total_pages(1, 6));
        assert_eq!(1, total_pages(6, 6));
        assert_eq!(2, total_pages(7, 6));
        assert_eq!(3, total_pages(13, 6));
        assert_eq!(3, PaginatedResult::<i64>::new(2, 6, 13, vec![]).total_pages());
    }

    #[tokio::test]
    async fn test_should_bucket_availability() {
        assert_eq!(AvailabilityLevel::Unavailable, AvailabilityLevel::from_available(0));
        assert_eq!(AvailabilityLevel::Limited, AvailabilityLevel::from_available(1));
        assert_eq!(AvailabilityLevel::Limited, AvailabilityLevel::from_available(2));
        assert_eq!(AvailabilityLevel::Available, AvailabilityLevel::from_available(3));
    }

    #[tokio::test]
    async fn test_should_serialize_availability_level() {
        let json = serde_json::to_string(&AvailabilityLevel::Unavailable).expect("should serialize");
        assert_eq!(r#""unavailable""#, json);
    }

    #[tokio::test]
    async fn test_should_print_status_url_plainly() {
        let err = LibraryError::from_status("http://localhost:8000/api/v1/documentos/", 503);
        assert_eq!("catalog backend unavailable http://localhost:8000/api/v1/documentos/ 503 Some(\"503\") true",
                   err.to_string());
    }
}
