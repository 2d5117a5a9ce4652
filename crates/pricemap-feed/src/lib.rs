pub mod client;
pub mod error;
pub mod loader;

pub use client::FeedClient;
pub use error::FeedError;
pub use loader::{load_feed, load_stores};
