/// Server configuration
///
/// # Environment variables
///
/// Every setting can be overridden through an environment variable:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | ROSTER_DB_URL | rocksdb://data/roster.db | store connection string |
/// | HTTP_PORT | 8080 | HTTP service port |
/// | ROSTER_CAPACITY | 42 | roster size and member-number upper bound |
/// | ENVIRONMENT | development | development \| staging \| production |
///
/// # Example
///
/// ```ignore
/// ROSTER_DB_URL=mem:// HTTP_PORT=3000 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Store connection string, handed to the any-engine connector
    pub database_url: String,
    /// HTTP API service port
    pub http_port: u16,
    /// Maximum number of live members; also the upper bound of member_number
    pub capacity: u32,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to the
    /// defaults above for anything unset
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("ROSTER_DB_URL")
                .unwrap_or_else(|_| "rocksdb://data/roster.db".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            capacity: std::env::var("ROSTER_CAPACITY")
                .ok()
                .and_then(|c| c.parse().ok())
                .unwrap_or(42),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override the store URL and port on top of the env-derived config.
    ///
    /// Mostly used by tests.
    pub fn with_overrides(database_url: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.database_url = database_url.into();
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
