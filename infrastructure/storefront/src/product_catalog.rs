use async_trait::async_trait;
use reqwest::StatusCode;

use business::domain::cart::errors::CartError;
use business::domain::cart::model::CatalogProduct;
use business::domain::cart::services::ProductCatalog;
use business::domain::cart::value_objects::ProductId;

use crate::client::StorefrontClient;

/// Looks products up through `GET products/{productId}`.
pub struct ProductCatalogHttp {
    client: StorefrontClient,
}

impl ProductCatalogHttp {
    pub fn new(client: StorefrontClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProductCatalog for ProductCatalogHttp {
    async fn get_product(&self, product_id: ProductId) -> Result<CatalogProduct, CartError> {
        let response = self
            .client
            .client
            .get(self.client.product_url(product_id))
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(%product_id, error = %e, "catalog request failed");
                CartError::NetworkFailure
            })?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(CartError::UnknownProduct(product_id));
        }

        if !response.status().is_success() {
            tracing::warn!(%product_id, status = %response.status(), "catalog request rejected");
            return Err(CartError::NetworkFailure);
        }

        response.json::<CatalogProduct>().await.map_err(|e| {
            tracing::warn!(%product_id, error = %e, "unreadable catalog response");
            CartError::NetworkFailure
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::test_server::serve_once;

    fn catalog(base_url: String) -> ProductCatalogHttp {
        ProductCatalogHttp::new(StorefrontClient::new(base_url, Duration::from_secs(5)))
    }

    #[tokio::test]
    async fn should_parse_catalog_product_and_ignore_extra_fields() {
        let base_url = serve_once(
            "200 OK",
            r#"{"id":2,"title":"Tênis VR Caminhada Confortável","price":139.9,"image":"https://cdn.example.com/2.jpg","brand":"VR"}"#,
        )
        .await;

        let product = catalog(base_url).get_product(ProductId::new(2)).await.unwrap();

        assert_eq!(product.id, ProductId::new(2));
        assert_eq!(product.title, "Tênis VR Caminhada Confortável");
        assert_eq!(product.price, 139.9);
    }

    #[tokio::test]
    async fn should_report_unknown_product_on_not_found() {
        let base_url = serve_once("404 Not Found", "{}").await;

        let result = catalog(base_url).get_product(ProductId::new(42)).await;

        assert!(matches!(
            result.unwrap_err(),
            CartError::UnknownProduct(id) if id == ProductId::new(42)
        ));
    }

    #[tokio::test]
    async fn should_report_network_failure_when_service_unavailable() {
        let base_url = serve_once("503 Service Unavailable", "{}").await;

        let result = catalog(base_url).get_product(ProductId::new(1)).await;

        assert!(matches!(result.unwrap_err(), CartError::NetworkFailure));
    }
}
