use std::time::Duration;

/// Timeouts applied around request handling and storage access
#[derive(Debug, Clone)]
pub struct TimeoutConfig {
    /// Whole-request budget enforced by the HTTP layer
    pub http_request: Duration,

    /// Acquiring a pooled database connection
    pub db_acquire: Duration,

    /// Grace period for in-flight requests on shutdown
    pub shutdown_grace: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            http_request: Duration::from_secs(30),
            db_acquire: Duration::from_secs(10),
            shutdown_grace: Duration::from_secs(10),
        }
    }
}

impl TimeoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_http_request(mut self, timeout: Duration) -> Self {
        self.http_request = timeout;
        self
    }
}
