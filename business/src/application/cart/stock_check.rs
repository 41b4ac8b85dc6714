use std::sync::Arc;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Stock;
use crate::domain::cart::services::StockService;
use crate::domain::cart::value_objects::ProductId;
use crate::domain::logger::Logger;
use crate::domain::notifier::{Notification, Notifier};

/// Validates a requested quantity against the live stock of a product.
///
/// Returns the granted quantity. A shortfall raises the out-of-stock
/// notification before returning `InsufficientStock`.
pub struct StockChecker {
    pub stock_service: Arc<dyn StockService>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

impl StockChecker {
    pub async fn check(&self, product_id: ProductId, requested: u64) -> Result<u32, CartError> {
        let stock = self.stock_service.get_stock(product_id).await?;

        match u32::try_from(requested) {
            Ok(granted) if stock.covers(requested) => Ok(granted),
            _ => Err(self.shortfall(product_id, &stock, requested)),
        }
    }

    fn shortfall(&self, product_id: ProductId, stock: &Stock, requested: u64) -> CartError {
        self.logger.warn(&format!(
            "Insufficient stock for product {}: requested {}, available {}",
            product_id, requested, stock.amount
        ));
        self.notifier.notify_error(Notification::OutOfStock);
        CartError::InsufficientStock {
            product_id,
            requested,
            available: stock.amount,
        }
    }
}
