//! Client configuration.

/// Environment variable holding the API base URL.
pub const BASE_URL_ENV: &str = "LIVESTOCK_API_BASE_URL";

/// Base URL used when the environment does not provide one.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000/api";

/// Where the REST API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Read [`BASE_URL_ENV`], falling back to [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(BASE_URL_ENV).ok())
    }

    fn from_value(value: Option<String>) -> Self {
        value
            .filter(|v| !v.trim().is_empty())
            .map(|v| Self::new(&v))
            .unwrap_or_default()
    }

    /// Absolute URL for a resource path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        assert_eq!(ClientConfig::default().base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_from_value() {
        let config = ClientConfig::from_value(Some("https://farm.example/api/ ".into()));
        assert_eq!(config.base_url, "https://farm.example/api");

        assert_eq!(ClientConfig::from_value(Some("  ".into())), ClientConfig::default());
        assert_eq!(ClientConfig::from_value(None), ClientConfig::default());
    }

    #[test]
    fn test_url_joins_paths() {
        let config = ClientConfig::new("http://localhost:5000/api/");
        assert_eq!(config.url("/animals"), "http://localhost:5000/api/animals");
        assert_eq!(config.url("health/3"), "http://localhost:5000/api/health/3");
    }
}
