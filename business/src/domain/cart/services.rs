use async_trait::async_trait;

use super::errors::CartError;
use super::model::{CatalogProduct, Stock};
use super::value_objects::ProductId;

/// Service port for querying the quantity currently available for a product.
///
/// Implementations must not cache: every call reflects the remote state.
/// Transport failures are reported as `CartError::NetworkFailure`.
#[async_trait]
pub trait StockService: Send + Sync {
    async fn get_stock(&self, product_id: ProductId) -> Result<Stock, CartError>;
}

/// Service port for looking up product details in the storefront catalog.
///
/// Returns `CartError::UnknownProduct` when the catalog has no such product.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn get_product(&self, product_id: ProductId) -> Result<CatalogProduct, CartError>;
}
