use serde::{Deserialize, Serialize};

use super::errors::CartError;
use super::value_objects::ProductId;

/// Key under which the serialized cart is kept in the client storage.
pub const CART_STORAGE_KEY: &str = "@RocketShoes:cart";

/// A product line in the cart. `amount` is the quantity the customer holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub image: String,
    pub amount: u32,
}

/// Product details as served by the catalog. The catalog knows nothing
/// about quantities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub image: String,
}

impl CatalogProduct {
    /// A freshly added product always starts with a single unit.
    pub fn into_cart_product(self) -> Product {
        Product {
            id: self.id,
            title: self.title,
            price: self.price,
            image: self.image,
            amount: 1,
        }
    }
}

/// Available quantity for a product, as reported by the stock service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    pub id: ProductId,
    pub amount: u32,
}

impl Stock {
    /// Requests are `u64` so a quantity no stock can ever hold is simply a shortfall.
    pub fn covers(&self, requested: u64) -> bool {
        requested <= u64::from(self.amount)
    }
}

/// Ordered list of products, unique by id.
///
/// Every mutation returns a new `Cart`, leaving `self` untouched, so a failed
/// operation never leaves a half-applied cart behind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Product>", into = "Vec<Product>")]
pub struct Cart {
    products: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_products(products: Vec<Product>) -> Result<Self, CartError> {
        let mut cart = Self::new();
        for product in products {
            cart = cart.with_product(product)?;
        }
        Ok(cart)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.find(id).is_some()
    }

    /// Appends a product that is not in the cart yet.
    pub fn with_product(&self, product: Product) -> Result<Self, CartError> {
        if self.contains(product.id) {
            return Err(CartError::DuplicateProduct(product.id));
        }

        let mut products = self.products.clone();
        products.push(product);
        Ok(Self { products })
    }

    /// Replaces the amount of an existing entry, keeping its position.
    pub fn with_amount(&self, id: ProductId, amount: u32) -> Result<Self, CartError> {
        if !self.contains(id) {
            return Err(CartError::ProductNotFound(id));
        }

        let products = self
            .products
            .iter()
            .map(|p| {
                if p.id == id {
                    Product {
                        amount,
                        ..p.clone()
                    }
                } else {
                    p.clone()
                }
            })
            .collect();
        Ok(Self { products })
    }

    pub fn without_product(&self, id: ProductId) -> Result<Self, CartError> {
        let products: Vec<Product> = self
            .products
            .iter()
            .filter(|p| p.id != id)
            .cloned()
            .collect();

        if products.len() == self.products.len() {
            return Err(CartError::ProductNotFound(id));
        }

        Ok(Self { products })
    }

    pub fn to_json(&self) -> Result<String, CartError> {
        serde_json::to_string(self).map_err(|_| CartError::Serialization)
    }

    pub fn from_json(raw: &str) -> Result<Self, CartError> {
        serde_json::from_str(raw).map_err(|_| CartError::Serialization)
    }
}

impl TryFrom<Vec<Product>> for Cart {
    type Error = CartError;

    fn try_from(products: Vec<Product>) -> Result<Self, Self::Error> {
        Self::from_products(products)
    }
}

impl From<Cart> for Vec<Product> {
    fn from(cart: Cart) -> Self {
        cart.products
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn product(id: u64, amount: u32) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Tênis {}", id),
            price: 179.9,
            image: format!("https://cdn.example.com/{}.jpg", id),
            amount,
        }
    }

    #[test]
    fn should_start_empty() {
        let cart = Cart::new();

        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
    }

    #[test]
    fn should_append_new_product_at_the_end() {
        let cart = Cart::from_products(vec![product(1, 2)]).unwrap();

        let updated = cart.with_product(product(2, 1)).unwrap();

        assert_eq!(updated.len(), 2);
        assert_eq!(updated.products()[1].id, ProductId::new(2));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn should_reject_duplicate_product() {
        let cart = Cart::from_products(vec![product(1, 2)]).unwrap();

        let result = cart.with_product(product(1, 1));

        assert!(matches!(
            result.unwrap_err(),
            CartError::DuplicateProduct(id) if id == ProductId::new(1)
        ));
    }

    #[test]
    fn should_replace_amount_and_leave_other_entries_untouched() {
        let cart = Cart::from_products(vec![product(1, 2), product(2, 5)]).unwrap();

        let updated = cart.with_amount(ProductId::new(1), 3).unwrap();

        assert_eq!(updated.find(ProductId::new(1)).unwrap().amount, 3);
        assert_eq!(updated.find(ProductId::new(2)), cart.find(ProductId::new(2)));
    }

    #[test]
    fn should_fail_to_set_amount_of_missing_product() {
        let cart = Cart::from_products(vec![product(1, 2)]).unwrap();

        let result = cart.with_amount(ProductId::new(9), 3);

        assert!(matches!(result.unwrap_err(), CartError::ProductNotFound(_)));
    }

    #[test]
    fn should_fail_to_remove_missing_product() {
        let cart = Cart::from_products(vec![product(1, 2)]).unwrap();

        let result = cart.without_product(ProductId::new(9));

        assert!(matches!(result.unwrap_err(), CartError::ProductNotFound(_)));
    }

    #[test]
    fn should_serialize_as_plain_product_array() {
        let cart = Cart::from_products(vec![product(1, 2)]).unwrap();

        let json: serde_json::Value = serde_json::from_str(&cart.to_json().unwrap()).unwrap();

        assert!(json.is_array());
        assert_eq!(json[0]["id"], 1);
        assert_eq!(json[0]["amount"], 2);
        assert_eq!(json[0]["title"], "Tênis 1");
    }

    #[test]
    fn should_reject_stored_cart_with_duplicate_ids() {
        let raw = r#"[
            {"id":1,"title":"a","price":1.0,"image":"a.jpg","amount":1},
            {"id":1,"title":"b","price":2.0,"image":"b.jpg","amount":1}
        ]"#;

        let result = Cart::from_json(raw);

        assert!(matches!(result.unwrap_err(), CartError::Serialization));
    }

    #[test]
    fn should_reject_negative_stored_amount() {
        let raw = r#"[{"id":1,"title":"a","price":1.0,"image":"a.jpg","amount":-1}]"#;

        assert!(Cart::from_json(raw).is_err());
    }

    #[test]
    fn should_start_catalog_product_with_one_unit() {
        let catalog = CatalogProduct {
            id: ProductId::new(4),
            title: "Tênis de Caminhada".to_string(),
            price: 139.9,
            image: "4.jpg".to_string(),
        };

        let product = catalog.into_cart_product();

        assert_eq!(product.amount, 1);
        assert_eq!(product.id, ProductId::new(4));
    }

    #[test]
    fn should_cover_requested_amount_up_to_available() {
        let stock = Stock {
            id: ProductId::new(1),
            amount: 3,
        };

        assert!(stock.covers(3));
        assert!(!stock.covers(4));
    }

    #[test]
    fn should_not_cover_amount_beyond_any_stock() {
        let stock = Stock {
            id: ProductId::new(1),
            amount: u32::MAX,
        };

        assert!(stock.covers(u64::from(u32::MAX)));
        assert!(!stock.covers(u64::from(u32::MAX) + 1));
    }

    proptest! {
        #[test]
        fn removing_present_product_shrinks_cart_by_one(ids in proptest::collection::hash_set(0u64..1000, 1..20)) {
            let ids: Vec<u64> = ids.into_iter().collect();
            let cart = Cart::from_products(ids.iter().map(|id| product(*id, 1)).collect()).unwrap();
            let target = ProductId::new(ids[0]);

            let updated = cart.without_product(target).unwrap();

            prop_assert_eq!(updated.len(), cart.len() - 1);
            prop_assert!(!updated.contains(target));
        }

        #[test]
        fn stored_form_round_trips_to_same_cart(
            lines in proptest::collection::vec(
                (1u32..100, proptest::num::f64::NORMAL | proptest::num::f64::ZERO),
                0..20,
            )
        ) {
            let products = lines
                .iter()
                .enumerate()
                .map(|(i, (amount, price))| Product {
                    price: *price,
                    ..product(i as u64, *amount)
                })
                .collect();
            let cart = Cart::from_products(products).unwrap();

            let restored = Cart::from_json(&cart.to_json().unwrap()).unwrap();

            prop_assert_eq!(restored, cart);
        }
    }
}
