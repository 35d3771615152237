use std::time::Duration;
use reqwest::{Client, Url};
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};

// helper method to build the http client shared by all backend calls
pub(crate) fn build_http_client(config: &Configuration) -> LibraryResult<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(config.request_timeout_secs))
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()
        .map_err(LibraryError::from)
}

// joins path segments onto the api base, each segment is percent-encoded and an empty
// trailing segment produces the trailing slash the backend routes expect
pub(crate) fn endpoint(base_url: &str, segments: &[&str]) -> LibraryResult<Url> {
    let mut url = Url::parse(base_url).map_err(|err| LibraryError::validation(
        format!("invalid catalog api url {} due to {}", base_url, err).as_str(), None))?;
    url.path_segments_mut()
        .map_err(|_| LibraryError::validation(
            format!("catalog api url {} cannot have a path", base_url).as_str(), None))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        .json()
        .init();
}

impl From<reqwest::Error> for LibraryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            LibraryError::unavailable(
                format!("catalog backend unreachable {:?}", err).as_str(), None, true)
        } else if err.is_decode() {
            LibraryError::serialization(
                format!("catalog response parsing {:?}", err).as_str())
        } else if let Some(status) = err.status() {
            LibraryError::from_status(format!("{:?}", err).as_str(), status.as_u16())
        } else {
            LibraryError::transport(
                format!("catalog request failed {:?}", err).as_str(), None, false)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;
    use crate::utils::http::{build_http_client, endpoint};

    #[tokio::test]
    async fn test_should_build_endpoint_with_trailing_slash() {
        let url = endpoint("http://localhost:8000/api/v1", &["documentos", ""]).expect("should build url");
        assert_eq!("http://localhost:8000/api/v1/documentos/", url.as_str());
    }

    #[tokio::test]
    async fn test_should_encode_path_segments() {
        let url = endpoint("http://localhost:8000/api/v1", &["categorias", "ciencia ficcion/otros", "documentos", ""])
            .expect("should build url");
        assert_eq!("http://localhost:8000/api/v1/categorias/ciencia%20ficcion%2Fotros/documentos/", url.as_str());
    }

    #[tokio::test]
    async fn test_should_reject_invalid_base() {
        assert!(endpoint("not a url", &["documentos"]).is_err());
    }

    #[tokio::test]
    async fn test_should_build_client() {
        let _ = build_http_client(&Configuration::new("test")).expect("should build client");
    }
}
