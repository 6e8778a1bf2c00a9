use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    pub num_retries: u32,
    pub delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            num_retries: 3,
            delay_ms: 400,
            max_delay_ms: 8000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DasClientConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
    pub retry_config: RetryConfig,
}

impl DasClientConfig {
    /// Builds a config from a URL string.
    ///
    /// If the URL carries an `api-key` query parameter it is split off and
    /// re-appended to every request:
    ///
    /// ```
    /// use cnft_vault_client::das::DasClientConfig;
    ///
    /// let config = DasClientConfig::new("https://rpc.example.com?api-key=YOUR_KEY");
    /// assert_eq!(config.base_url, "https://rpc.example.com");
    /// assert_eq!(config.api_key.as_deref(), Some("YOUR_KEY"));
    /// ```
    pub fn new(url: impl Into<String>) -> Self {
        let (base_url, api_key) = Self::parse_url(&url.into());
        Self {
            base_url,
            api_key,
            timeout: Duration::from_secs(30),
            retry_config: RetryConfig::default(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_retry_config(mut self, retry_config: RetryConfig) -> Self {
        self.retry_config = retry_config;
        self
    }

    fn parse_url(url: &str) -> (String, Option<String>) {
        if let Some(query_start) = url.find('?') {
            let base = &url[..query_start];
            let query = &url[query_start + 1..];
            for param in query.split('&') {
                if let Some(value) = param.strip_prefix("api-key=") {
                    return (base.to_string(), Some(value.to_string()));
                }
            }
            (url.to_string(), None)
        } else {
            (url.to_string(), None)
        }
    }
}
