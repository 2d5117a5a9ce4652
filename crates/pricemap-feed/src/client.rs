//! HTTP client for the store-record feed.
//!
//! The feed is one static JSON document: an array of store objects. The
//! client issues a single GET per call, with no retry and no request timeout.

use reqwest::{Client, Url};

use pricemap_core::StoreRecord;

use crate::error::FeedError;

/// Client for one store-record feed.
///
/// Point it at the production feed with the configured URL, or at a mock
/// server in tests.
pub struct FeedClient {
    client: Client,
    feed_url: Url,
}

impl FeedClient {
    /// Creates a client for `feed_url`.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::InvalidUrl`] if `feed_url` is not an absolute
    /// `http(s)` URL, or [`FeedError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(feed_url: &str, user_agent: &str) -> Result<Self, FeedError> {
        let feed_url = Self::parse_feed_url(feed_url)?;
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client, feed_url })
    }

    #[must_use]
    pub fn feed_url(&self) -> &Url {
        &self.feed_url
    }

    /// Fetches and decodes the whole feed.
    ///
    /// # Errors
    ///
    /// - [`FeedError::Http`] on network failure.
    /// - [`FeedError::UnexpectedStatus`] on any non-2xx status.
    /// - [`FeedError::Deserialize`] if the body is not a JSON array of records.
    pub async fn fetch_stores(&self) -> Result<Vec<StoreRecord>, FeedError> {
        let body = self.request_body().await?;
        serde_json::from_str::<Vec<StoreRecord>>(&body).map_err(|e| FeedError::Deserialize {
            context: self.feed_url.to_string(),
            source: e,
        })
    }

    /// Sends the GET, asserts a 2xx status and returns the body text.
    async fn request_body(&self) -> Result<String, FeedError> {
        let response = self
            .client
            .get(self.feed_url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.feed_url.to_string(),
            });
        }

        Ok(response.text().await?)
    }

    fn parse_feed_url(raw: &str) -> Result<Url, FeedError> {
        let url = Url::parse(raw).map_err(|e| FeedError::InvalidUrl {
            url: raw.to_owned(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(FeedError::InvalidUrl {
                url: raw.to_owned(),
                reason: format!("unsupported scheme \"{}\"", url.scheme()),
            });
        }
        Ok(url)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
