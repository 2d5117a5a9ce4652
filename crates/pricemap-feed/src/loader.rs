//! Startup load: one fetch, folded into a [`LoadState`].
//!
//! This is the error boundary of the viewer. Every [`FeedError`] becomes
//! `LoadState::Failed` carrying the error's message; nothing propagates.

use pricemap_core::LoadState;

use crate::client::FeedClient;
use crate::error::FeedError;

/// Fetches the feed once through `client`.
pub async fn load_stores(client: &FeedClient) -> LoadState {
    tracing::info!(url = %client.feed_url(), "loading store data");
    match client.fetch_stores().await {
        Ok(records) => {
            tracing::info!(count = records.len(), "store data loaded");
            LoadState::Ready(records)
        }
        Err(e) => failed(&e),
    }
}

/// Builds a client for `feed_url` and fetches the feed once.
///
/// Client construction errors are reported the same way as fetch errors.
pub async fn load_feed(feed_url: &str, user_agent: &str) -> LoadState {
    match FeedClient::new(feed_url, user_agent) {
        Ok(client) => load_stores(&client).await,
        Err(e) => failed(&e),
    }
}

fn failed(error: &FeedError) -> LoadState {
    tracing::error!(error = %error, "store data failed to load");
    let message = error.to_string();
    if message.is_empty() {
        LoadState::Failed("Failed to fetch store data".to_string())
    } else {
        LoadState::Failed(message)
    }
}
