pub mod app_config;
pub mod color;
pub mod config;
pub mod filter;
pub mod maps;
pub mod pipeline;
pub mod range;
pub mod selection;
pub mod session;
pub mod store;

#[cfg(test)]
pub(crate) mod test_support;

pub use app_config::{AppConfig, Environment};
pub use color::{color_at, color_for_price, Rgb};
pub use config::{load_app_config, load_app_config_from_env, load_app_config_with_feed_url};
pub use filter::{FilterCriteria, SortOrder};
pub use maps::{map_search_url, DEFAULT_MAP_SEARCH_BASE};
pub use pipeline::{derive_view, state_options, ViewSummary};
pub use range::{pointer_fraction, RangeHandle};
pub use selection::Selection;
pub use session::{LoadState, Session, ViewMode};
pub use store::{parse_price, PriceBounds, StoreRecord};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
