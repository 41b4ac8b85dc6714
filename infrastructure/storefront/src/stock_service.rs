use async_trait::async_trait;

use business::domain::cart::errors::CartError;
use business::domain::cart::model::Stock;
use business::domain::cart::services::StockService;
use business::domain::cart::value_objects::ProductId;

use crate::client::StorefrontClient;

/// Reads live stock from `GET stock/{productId}`.
pub struct StockServiceHttp {
    client: StorefrontClient,
}

impl StockServiceHttp {
    pub fn new(client: StorefrontClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StockService for StockServiceHttp {
    async fn get_stock(&self, product_id: ProductId) -> Result<Stock, CartError> {
        let response = self
            .client
            .client
            .get(self.client.stock_url(product_id))
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(%product_id, error = %e, "stock request failed");
                CartError::NetworkFailure
            })?;

        if !response.status().is_success() {
            tracing::warn!(%product_id, status = %response.status(), "stock request rejected");
            return Err(CartError::NetworkFailure);
        }

        response.json::<Stock>().await.map_err(|e| {
            tracing::warn!(%product_id, error = %e, "unreadable stock response");
            CartError::NetworkFailure
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::test_server::serve_once;

    fn service(base_url: String) -> StockServiceHttp {
        StockServiceHttp::new(StorefrontClient::new(base_url, Duration::from_secs(5)))
    }

    #[tokio::test]
    async fn should_parse_available_amount() {
        let base_url = serve_once("200 OK", r#"{"id":1,"amount":3}"#).await;

        let stock = service(base_url).get_stock(ProductId::new(1)).await.unwrap();

        assert_eq!(
            stock,
            Stock {
                id: ProductId::new(1),
                amount: 3
            }
        );
    }

    #[tokio::test]
    async fn should_fail_when_stock_entry_missing() {
        let base_url = serve_once("404 Not Found", "{}").await;

        let result = service(base_url).get_stock(ProductId::new(8)).await;

        assert!(matches!(result.unwrap_err(), CartError::NetworkFailure));
    }

    #[tokio::test]
    async fn should_fail_on_server_error() {
        let base_url = serve_once("500 Internal Server Error", "{}").await;

        let result = service(base_url).get_stock(ProductId::new(1)).await;

        assert!(matches!(result.unwrap_err(), CartError::NetworkFailure));
    }

    #[tokio::test]
    async fn should_fail_on_malformed_body() {
        let base_url = serve_once("200 OK", r#"{"id":1,"amount":-2}"#).await;

        let result = service(base_url).get_stock(ProductId::new(1)).await;

        assert!(matches!(result.unwrap_err(), CartError::NetworkFailure));
    }
}
