use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::failure::report_failure;
use crate::application::cart::stock_check::StockChecker;
use crate::application::cart::store::CartStore;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::services::ProductCatalog;
use crate::domain::cart::use_cases::add_product::{AddProductParams, AddProductUseCase};
use crate::domain::cart::value_objects::ProductId;
use crate::domain::logger::Logger;
use crate::domain::notifier::{Notification, Notifier};

pub struct AddProductUseCaseImpl {
    pub store: Arc<CartStore>,
    pub catalog: Arc<dyn ProductCatalog>,
    pub stock_checker: Arc<StockChecker>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

impl AddProductUseCaseImpl {
    async fn add(&self, product_id: ProductId) -> Result<Cart, CartError> {
        let cart = self.store.snapshot();

        let updated = match cart.find(product_id) {
            Some(existing) => {
                let requested = u64::from(existing.amount) + 1;
                let amount = self.stock_checker.check(product_id, requested).await?;
                cart.with_amount(product_id, amount)?
            }
            None => {
                let product = self.catalog.get_product(product_id).await?;
                cart.with_product(product.into_cart_product())?
            }
        };

        self.store.commit(updated).await
    }
}

#[async_trait]
impl AddProductUseCase for AddProductUseCaseImpl {
    async fn execute(&self, params: AddProductParams) -> Result<Cart, CartError> {
        self.logger
            .info(&format!("Adding product to cart: {}", params.product_id));

        match self.add(params.product_id).await {
            Ok(cart) => {
                self.logger
                    .info(&format!("Product added to cart: {}", params.product_id));
                Ok(cart)
            }
            Err(e) => {
                self.logger.error(&format!(
                    "Failed to add product {}: {}",
                    params.product_id, e
                ));
                report_failure(self.notifier.as_ref(), Notification::AddProductFailed, &e);
                Err(e)
            }
        }
    }
}
