use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST backend, without a trailing slash
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_stripped() {
        let config = ApiConfig::new("http://localhost:8080/");
        assert_eq!(config.base_url, "http://localhost:8080");

        let config = ApiConfig::new("http://api.example.com//");
        assert_eq!(config.base_url, "http://api.example.com");
    }

    #[test]
    fn default_points_at_local_backend() {
        assert_eq!(ApiConfig::default().base_url, "http://localhost:8080");
    }
}
