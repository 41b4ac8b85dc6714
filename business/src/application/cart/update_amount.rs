use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::failure::report_failure;
use crate::application::cart::stock_check::StockChecker;
use crate::application::cart::store::CartStore;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::use_cases::update_amount::{
    UpdateProductAmountParams, UpdateProductAmountUseCase,
};
use crate::domain::cart::value_objects::ProductId;
use crate::domain::logger::Logger;
use crate::domain::notifier::{Notification, Notifier};

pub struct UpdateProductAmountUseCaseImpl {
    pub store: Arc<CartStore>,
    pub stock_checker: Arc<StockChecker>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

impl UpdateProductAmountUseCaseImpl {
    async fn update(&self, product_id: ProductId, requested: u64) -> Result<Cart, CartError> {
        let cart = self.store.snapshot();

        // Checked before the stock lookup so an unknown id never hits the stock service.
        if !cart.contains(product_id) {
            return Err(CartError::ProductNotFound(product_id));
        }

        let amount = self.stock_checker.check(product_id, requested).await?;
        let updated = cart.with_amount(product_id, amount)?;

        self.store.commit(updated).await
    }
}

#[async_trait]
impl UpdateProductAmountUseCase for UpdateProductAmountUseCaseImpl {
    async fn execute(&self, params: UpdateProductAmountParams) -> Result<Cart, CartError> {
        if params.amount <= 0 {
            self.logger.debug(&format!(
                "Ignoring non-positive amount {} for product {}",
                params.amount, params.product_id
            ));
            return Err(CartError::InvalidAmount(params.amount));
        }

        let requested =
            u64::try_from(params.amount).map_err(|_| CartError::InvalidAmount(params.amount))?;

        self.logger.info(&format!(
            "Updating amount of product {} to {}",
            params.product_id, requested
        ));

        match self.update(params.product_id, requested).await {
            Ok(cart) => {
                self.logger
                    .info(&format!("Product amount updated: {}", params.product_id));
                Ok(cart)
            }
            Err(e) => {
                self.logger.error(&format!(
                    "Failed to update amount of product {}: {}",
                    params.product_id, e
                ));
                report_failure(
                    self.notifier.as_ref(),
                    Notification::UpdateAmountFailed,
                    &e,
                );
                Err(e)
            }
        }
    }
}
