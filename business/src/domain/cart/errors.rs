use super::value_objects::ProductId;

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.insufficient_stock")]
    InsufficientStock {
        product_id: ProductId,
        requested: u64,
        available: u32,
    },
    #[error("cart.product_not_found")]
    ProductNotFound(ProductId),
    #[error("cart.unknown_product")]
    UnknownProduct(ProductId),
    #[error("cart.duplicate_product")]
    DuplicateProduct(ProductId),
    #[error("cart.invalid_amount")]
    InvalidAmount(i64),
    #[error("cart.network_failure")]
    NetworkFailure,
    #[error("cart.serialization_failed")]
    Serialization,
    #[error("storage.persistence")]
    Storage(#[from] crate::domain::errors::StorageError),
}
