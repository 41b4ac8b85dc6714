use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::value_objects::ProductId;

pub struct UpdateProductAmountParams {
    pub product_id: ProductId,
    /// Requested quantity. Non-positive values are rejected without side effects.
    pub amount: i64,
}

#[async_trait]
pub trait UpdateProductAmountUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductAmountParams) -> Result<Cart, CartError>;
}
