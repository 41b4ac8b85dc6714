use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::failure::report_failure;
use crate::application::cart::store::CartStore;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::use_cases::remove_product::{RemoveProductParams, RemoveProductUseCase};
use crate::domain::logger::Logger;
use crate::domain::notifier::{Notification, Notifier};

pub struct RemoveProductUseCaseImpl {
    pub store: Arc<CartStore>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveProductUseCase for RemoveProductUseCaseImpl {
    async fn execute(&self, params: RemoveProductParams) -> Result<Cart, CartError> {
        self.logger
            .info(&format!("Removing product from cart: {}", params.product_id));

        let result = match self.store.snapshot().without_product(params.product_id) {
            Ok(updated) => self.store.commit(updated).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(cart) => {
                self.logger
                    .info(&format!("Product removed from cart: {}", params.product_id));
                Ok(cart)
            }
            Err(e) => {
                self.logger.error(&format!(
                    "Failed to remove product {}: {}",
                    params.product_id, e
                ));
                report_failure(
                    self.notifier.as_ref(),
                    Notification::RemoveProductFailed,
                    &e,
                );
                Err(e)
            }
        }
    }
}
