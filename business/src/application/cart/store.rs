use std::sync::Arc;

use tokio::sync::{Mutex, watch};

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{CART_STORAGE_KEY, Cart};
use crate::domain::logger::Logger;
use crate::domain::storage::KeyValueStorage;

/// Owns the in-memory cart and mirrors it to client storage.
///
/// The stored value always equals the last published cart: `commit` writes
/// to storage first and only publishes once the write succeeded. Operations
/// read a snapshot, do their remote checks and commit the result; two
/// operations running at the same time both start from the same snapshot and
/// the last commit wins.
pub struct CartStore {
    storage: Arc<dyn KeyValueStorage>,
    logger: Arc<dyn Logger>,
    state: watch::Sender<Cart>,
    commit_lock: Mutex<()>,
}

impl CartStore {
    /// Restores the cart persisted by a previous session, or starts empty.
    pub async fn load(
        storage: Arc<dyn KeyValueStorage>,
        logger: Arc<dyn Logger>,
    ) -> Result<Self, CartError> {
        let cart = match storage.get_item(CART_STORAGE_KEY).await? {
            Some(raw) => Cart::from_json(&raw).unwrap_or_else(|e| {
                logger.warn(&format!("Discarding unreadable stored cart: {}", e));
                Cart::new()
            }),
            None => Cart::new(),
        };

        logger.info(&format!("Cart loaded with {} products", cart.len()));
        let (state, _) = watch::channel(cart);

        Ok(Self {
            storage,
            logger,
            state,
            commit_lock: Mutex::new(()),
        })
    }

    pub fn snapshot(&self) -> Cart {
        self.state.borrow().clone()
    }

    /// Observers are woken with every cart published after they subscribed.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.state.subscribe()
    }

    pub(crate) async fn commit(&self, cart: Cart) -> Result<Cart, CartError> {
        let _guard = self.commit_lock.lock().await;

        let raw = cart.to_json()?;
        self.storage.set_item(CART_STORAGE_KEY, &raw).await?;
        self.state.send_replace(cart.clone());

        self.logger
            .debug(&format!("Cart committed with {} products", cart.len()));
        Ok(cart)
    }
}
