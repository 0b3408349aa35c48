use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client;
use url::Url;

use super::models::FeedResponse;
use crate::config::AppConfig;
use crate::{Error, Result};

/// Feed fetcher wrapping a configured HTTP client
pub struct FeedFetcher {
    client: Client,
    user_agent: String,
}

impl FeedFetcher {
    /// Create a new fetcher from configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.fetch.request_timeout_secs))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            user_agent: config.fetch.user_agent.clone(),
        })
    }

    /// Check that a URL parses and uses http or https
    pub fn validate_url(url: &str) -> Result<()> {
        let parsed = Url::parse(url)?;
        match parsed.scheme() {
            "http" | "https" => Ok(()),
            other => Err(Error::InvalidUrl(format!(
                "unsupported scheme '{}' in {}",
                other, url
            ))),
        }
    }

    fn build_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "application/rss+xml,application/xml;q=0.9,text/xml;q=0.9,*/*;q=0.8",
            ),
        );
        if let Ok(ua) = HeaderValue::from_str(&self.user_agent) {
            headers.insert(USER_AGENT, ua);
        }
        headers
    }

    /// Fetch the feed with a single GET attempt, no retries
    pub async fn fetch(&self, url: &str) -> Result<FeedResponse> {
        Self::validate_url(url)?;

        tracing::debug!("Making HTTP request to {}", url);

        let response = self
            .client
            .get(url)
            .headers(self.build_headers())
            .send()
            .await
            .map_err(|e| classify_request_error(e, url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| classify_request_error(e, url))?;

        tracing::debug!("Response arrived with status {}, {} bytes", status, body.len());

        Ok(FeedResponse {
            status: status.as_u16(),
            body,
        })
    }
}

/// Map a reqwest error onto the fetch failure taxonomy
fn classify_request_error(err: reqwest::Error, url: &str) -> Error {
    if err.is_timeout() {
        Error::Timeout(url.to_string())
    } else if err.is_connect() {
        Error::Connection(err.to_string())
    } else if let Some(status) = err.status() {
        Error::HttpStatus {
            status: status.as_u16(),
            url: url.to_string(),
        }
    } else {
        Error::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url_accepts_http_and_https() {
        assert!(FeedFetcher::validate_url("https://example.com/feed.xml").is_ok());
        assert!(FeedFetcher::validate_url("http://example.com/rss").is_ok());
    }

    #[test]
    fn test_validate_url_rejects_other_schemes() {
        let err = FeedFetcher::validate_url("ftp://example.com/feed").unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[test]
    fn test_validate_url_rejects_garbage() {
        let err = FeedFetcher::validate_url("not a url").unwrap_err();
        assert!(matches!(err, Error::UrlParse(_)));
    }

    #[test]
    fn test_fetcher_builds_with_defaults() {
        let config = AppConfig::default();
        assert!(FeedFetcher::new(&config).is_ok());
    }

    #[tokio::test]
    async fn test_http_404_classified_as_http_status_error() {
        use tokio::io::AsyncWriteExt;
        use tokio::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let _ = socket
                    .write_all(
                        b"HTTP/1.1 404 Not Found\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
                    )
                    .await;
            }
        });

        let fetcher = FeedFetcher::new(&AppConfig::default()).unwrap();
        let url = format!("http://{}/feed.xml", addr);
        let err = fetcher.fetch(&url).await.unwrap_err();
        assert!(matches!(err, Error::HttpStatus { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_refused_connection_classified_as_connection_error() {
        let fetcher = FeedFetcher::new(&AppConfig::default()).unwrap();
        // Port 1 on loopback is not listening
        let err = fetcher.fetch("http://127.0.0.1:1/feed.xml").await.unwrap_err();
        assert!(matches!(err, Error::Connection(_)));
    }
}
