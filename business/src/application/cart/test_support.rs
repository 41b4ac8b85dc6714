use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mockall::mock;

use crate::application::cart::stock_check::StockChecker;
use crate::application::cart::store::CartStore;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{CART_STORAGE_KEY, Cart, CatalogProduct, Product, Stock};
use crate::domain::cart::services::{ProductCatalog, StockService};
use crate::domain::cart::value_objects::ProductId;
use crate::domain::errors::StorageError;
use crate::domain::logger::Logger;
use crate::domain::notifier::{Notification, Notifier};
use crate::domain::storage::KeyValueStorage;

mock! {
    pub StockSvc {}

    #[async_trait]
    impl StockService for StockSvc {
        async fn get_stock(&self, product_id: ProductId) -> Result<Stock, CartError>;
    }
}

mock! {
    pub Catalog {}

    #[async_trait]
    impl ProductCatalog for Catalog {
        async fn get_product(&self, product_id: ProductId) -> Result<CatalogProduct, CartError>;
    }
}

mock! {
    pub Storage {}

    #[async_trait]
    impl KeyValueStorage for Storage {
        async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
        async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

mock! {
    pub Notify {}

    impl Notifier for Notify {
        fn notify_error(&self, notification: Notification);
    }
}

/// Storage double that keeps values in memory so tests can inspect what
/// was persisted.
#[derive(Default)]
pub struct InMemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl InMemoryStorage {
    pub fn with_cart(cart: &Cart) -> Self {
        let storage = Self::default();
        storage
            .items
            .lock()
            .unwrap()
            .insert(CART_STORAGE_KEY.to_string(), cart.to_json().unwrap());
        storage
    }

    pub fn stored_cart(&self) -> Option<Cart> {
        self.items
            .lock()
            .unwrap()
            .get(CART_STORAGE_KEY)
            .map(|raw| Cart::from_json(raw).unwrap())
    }
}

#[async_trait]
impl KeyValueStorage for InMemoryStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.lock().unwrap().get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

/// Notifier that fails the test if anything is raised.
pub fn silent_notifier() -> Arc<dyn Notifier> {
    let mut notifier = MockNotify::new();
    notifier.expect_notify_error().never();
    Arc::new(notifier)
}

/// Notifier that expects exactly one `expected` notification.
pub fn expect_single_notification(expected: Notification) -> Arc<dyn Notifier> {
    let mut notifier = MockNotify::new();
    notifier
        .expect_notify_error()
        .withf(move |n| *n == expected)
        .times(1)
        .returning(|_| ());
    Arc::new(notifier)
}

pub fn stock_of(amount: u32) -> MockStockSvc {
    let mut stock = MockStockSvc::new();
    stock
        .expect_get_stock()
        .returning(move |id| Ok(Stock { id, amount }));
    stock
}

pub fn stock_checker(stock: MockStockSvc, notifier: Arc<dyn Notifier>) -> Arc<StockChecker> {
    Arc::new(StockChecker {
        stock_service: Arc::new(stock),
        notifier,
        logger: mock_logger(),
    })
}

pub fn product(id: u64, amount: u32) -> Product {
    Product {
        id: ProductId::new(id),
        title: format!("Tênis {}", id),
        price: 179.9,
        image: format!("https://cdn.example.com/{}.jpg", id),
        amount,
    }
}

pub fn cart_with(products: Vec<Product>) -> Cart {
    Cart::from_products(products).unwrap()
}

pub async fn store_on(storage: Arc<dyn KeyValueStorage>) -> Arc<CartStore> {
    Arc::new(CartStore::load(storage, mock_logger()).await.unwrap())
}
