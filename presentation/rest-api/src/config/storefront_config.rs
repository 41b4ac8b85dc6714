use std::env;
use std::time::Duration;

/// Location of the storefront API serving `stock/{id}` and `products/{id}`.
pub struct StorefrontConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl StorefrontConfig {
    /// Environment variables:
    /// - STOREFRONT_API_URL: base URL (default: "http://localhost:3333")
    /// - STOREFRONT_TIMEOUT_SECS: request timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url =
            lookup("STOREFRONT_API_URL").unwrap_or_else(|| "http://localhost:3333".to_string());
        let timeout_secs = lookup("STOREFRONT_TIMEOUT_SECS")
            .and_then(|t| t.parse().ok())
            .unwrap_or(30);

        Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_defaults_when_unset() {
        let config = StorefrontConfig::from_lookup(|_| None);

        assert_eq!(config.base_url, "http://localhost:3333");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn should_read_url_and_timeout() {
        let config = StorefrontConfig::from_lookup(|name| match name {
            "STOREFRONT_API_URL" => Some("https://shop.example.com/api".to_string()),
            "STOREFRONT_TIMEOUT_SECS" => Some("5".to_string()),
            _ => None,
        });

        assert_eq!(config.base_url, "https://shop.example.com/api");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
