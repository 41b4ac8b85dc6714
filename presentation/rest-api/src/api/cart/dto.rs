use poem_openapi::Object;

use business::domain::cart::model::{Cart, Product};

#[derive(Debug, Clone, Object)]
pub struct UpdateAmountRequest {
    /// Desired quantity; values below 1 are rejected
    pub amount: i64,
}

#[derive(Debug, Clone, Object)]
pub struct CartProductResponse {
    /// Product identifier
    pub id: u64,
    /// Product title
    pub title: String,
    /// Unit price
    pub price: f64,
    /// Product image URL
    pub image: String,
    /// Quantity in the cart
    pub amount: u32,
    /// Unit price times quantity
    pub subtotal: f64,
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    /// Cart lines in insertion order
    pub products: Vec<CartProductResponse>,
    /// Sum of all quantities
    pub items: u64,
    /// Sum of all subtotals
    pub total: f64,
}

impl From<&Product> for CartProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.value(),
            title: product.title.clone(),
            price: product.price,
            image: product.image.clone(),
            amount: product.amount,
            subtotal: product.price * f64::from(product.amount),
        }
    }
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        let products: Vec<CartProductResponse> = cart.products().iter().map(Into::into).collect();
        let items = products.iter().map(|p| u64::from(p.amount)).sum();
        let total = products.iter().map(|p| p.subtotal).sum();

        Self {
            products,
            items,
            total,
        }
    }
}
