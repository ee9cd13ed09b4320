// API client module: a small blocking HTTP client for the TinyURL
// `api-create.php` endpoint. One call, one GET request, no state kept
// between calls.

use crate::config::ShortenerConfig;
use crate::error::ShortenError;
use reqwest::blocking::Client;
use reqwest::StatusCode;

/// Shortening client that holds a reqwest blocking client and the
/// settings it was built with. Cloning is cheap and clones share the
/// underlying connection pool.
#[derive(Clone, Debug)]
pub struct ShortenerClient {
    client: Client,
    config: ShortenerConfig,
}

impl ShortenerClient {
    /// Build a client whose requests time out after `config.timeout`.
    pub fn new(config: ShortenerConfig) -> Result<Self, ShortenError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(ShortenerClient { client, config })
    }

    /// Ask the service for a short form of `url`.
    ///
    /// The URL is sent as the `url` query parameter without validation.
    /// On HTTP 200 the body is returned, trimmed when the trim option is
    /// on; an empty body is a valid result. Any other status becomes
    /// `ShortenError::Service`, and network failures come back as
    /// `ShortenError::Transport` with the reqwest error untouched.
    pub fn shorten(&self, url: &str) -> Result<String, ShortenError> {
        tracing::debug!(endpoint = %self.config.endpoint, url, "requesting short url");

        let res = self
            .client
            .get(&self.config.endpoint)
            .query(&[("url", url)])
            .send()
            .map_err(|e| {
                tracing::debug!(error = %e, "shorten request failed");
                ShortenError::Transport(e)
            })?;

        let status = res.status();
        if status != StatusCode::OK {
            tracing::debug!(status = status.as_u16(), "shortening service rejected request");
            return Err(ShortenError::Service {
                status: status.as_u16(),
            });
        }

        let body = res.text()?;
        let short = if self.config.trim {
            body.trim().to_string()
        } else {
            body
        };
        tracing::debug!(short = %short, "shortened");
        Ok(short)
    }
}

/// One-off helper: build a client from `config` and shorten a single URL.
pub fn shorten_url(url: &str, config: &ShortenerConfig) -> Result<String, ShortenError> {
    ShortenerClient::new(config.clone())?.shorten(url)
}
