use std::time::Duration;

use reqwest::Client;

use business::domain::cart::value_objects::ProductId;

/// Shared HTTP client for the storefront API.
#[derive(Clone)]
pub struct StorefrontClient {
    pub client: Client,
    pub base_url: String,
}

impl StorefrontClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Returns the stock endpoint URL for a product.
    pub fn stock_url(&self, product_id: ProductId) -> String {
        format!("{}/stock/{}", self.base_url, product_id)
    }

    /// Returns the catalog endpoint URL for a product.
    pub fn product_url(&self, product_id: ProductId) -> String {
        format!("{}/products/{}", self.base_url, product_id)
    }
}
