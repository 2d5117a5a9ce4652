#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Runtime settings for one viewer session.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    /// Location of the store-record JSON feed. Fetched exactly once per run.
    pub feed_url: String,
    /// Prefix for outbound map-service search links; the encoded address is appended.
    pub map_search_base: String,
    pub user_agent: String,
    pub log_level: String,
}
