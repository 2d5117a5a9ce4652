use thiserror::Error;

/// Errors returned while fetching the store-record feed.
///
/// Every variant renders a message fit to show the user directly.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("failed to fetch store data: {0}")]
    Http(#[from] reqwest::Error),

    /// The feed answered with a non-2xx status.
    #[error("failed to fetch store data: HTTP {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The body was not a JSON array of store records.
    #[error("store data from {context} is not valid: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid feed URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },
}
