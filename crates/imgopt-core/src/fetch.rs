//! Single blocking HTTP GET of an image body.
//!
//! The processor only depends on the [`Fetcher`] trait; [`CurlFetcher`] is the
//! libcurl-backed implementation used by the CLI.

use crate::config::HttpConfig;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Failure to obtain a response body.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (timeout, connection, DNS, etc.).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
}

impl FetchError {
    /// True when the transfer hit the configured timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Curl(e) if e.is_operation_timedout())
    }
}

/// Retrieves the full body at a URL.
pub trait Fetcher {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, FetchError>;
}

/// libcurl GET with fixed timeouts and static headers. No retries.
#[derive(Debug, Clone)]
pub struct CurlFetcher {
    timeout: Duration,
    connect_timeout: Duration,
    headers: Vec<(String, String)>,
}

impl CurlFetcher {
    pub fn new(http: &HttpConfig) -> Self {
        Self {
            timeout: http.timeout(),
            connect_timeout: http.connect_timeout(),
            headers: http.headers(),
        }
    }
}

impl Fetcher for CurlFetcher {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url.as_str())?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        let mut list = curl::easy::List::new();
        for (k, v) in &self.headers {
            list.append(&format!("{}: {}", k.trim(), v.trim()))?;
        }
        easy.http_headers(list)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Http(code));
        }
        tracing::debug!(url = %url, bytes = body.len(), "fetched");
        Ok(body)
    }
}
