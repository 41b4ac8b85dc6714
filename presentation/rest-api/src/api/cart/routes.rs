use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::use_cases::add_product::{AddProductParams, AddProductUseCase};
use business::domain::cart::use_cases::get_cart::GetCartUseCase;
use business::domain::cart::use_cases::remove_product::{
    RemoveProductParams, RemoveProductUseCase,
};
use business::domain::cart::use_cases::update_amount::{
    UpdateProductAmountParams, UpdateProductAmountUseCase,
};
use business::domain::cart::value_objects::ProductId;

use crate::api::cart::dto::{CartResponse, UpdateAmountRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    get_cart_use_case: Arc<dyn GetCartUseCase>,
    add_product_use_case: Arc<dyn AddProductUseCase>,
    remove_product_use_case: Arc<dyn RemoveProductUseCase>,
    update_amount_use_case: Arc<dyn UpdateProductAmountUseCase>,
}

impl CartApi {
    pub fn new(
        get_cart_use_case: Arc<dyn GetCartUseCase>,
        add_product_use_case: Arc<dyn AddProductUseCase>,
        remove_product_use_case: Arc<dyn RemoveProductUseCase>,
        update_amount_use_case: Arc<dyn UpdateProductAmountUseCase>,
    ) -> Self {
        Self {
            get_cart_use_case,
            add_product_use_case,
            remove_product_use_case,
            update_amount_use_case,
        }
    }
}

/// Shopping cart API
///
/// Every mutation either fully applies and returns the new cart, or leaves
/// the cart untouched and returns an error.
#[OpenApi]
impl CartApi {
    /// Get the cart
    ///
    /// Returns the products currently in the cart with their quantities.
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self) -> GetCartResponse {
        match self.get_cart_use_case.execute().await {
            Ok(cart) => GetCartResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetCartResponse::InternalError(json)
            }
        }
    }

    /// Add a product
    ///
    /// Adds one unit of the product. A product not yet in the cart is fetched
    /// from the catalog; otherwise its quantity is increased if stock allows.
    #[oai(path = "/cart/products/:product_id", method = "post", tag = "ApiTags::Cart")]
    async fn add_product(&self, product_id: Path<u64>) -> MutateCartResponse {
        let params = AddProductParams {
            product_id: ProductId::new(product_id.0),
        };

        match self.add_product_use_case.execute(params).await {
            Ok(cart) => MutateCartResponse::Ok(Json(cart.into())),
            Err(err) => MutateCartResponse::from_error(err.into_error_response()),
        }
    }

    /// Remove a product
    ///
    /// Removes the product line from the cart, whatever its quantity.
    #[oai(
        path = "/cart/products/:product_id",
        method = "delete",
        tag = "ApiTags::Cart"
    )]
    async fn remove_product(&self, product_id: Path<u64>) -> MutateCartResponse {
        let params = RemoveProductParams {
            product_id: ProductId::new(product_id.0),
        };

        match self.remove_product_use_case.execute(params).await {
            Ok(cart) => MutateCartResponse::Ok(Json(cart.into())),
            Err(err) => MutateCartResponse::from_error(err.into_error_response()),
        }
    }

    /// Set a product quantity
    ///
    /// Sets the quantity of a product already in the cart, if stock allows.
    #[oai(path = "/cart/products/:product_id", method = "put", tag = "ApiTags::Cart")]
    async fn update_amount(
        &self,
        product_id: Path<u64>,
        body: Json<UpdateAmountRequest>,
    ) -> MutateCartResponse {
        let params = UpdateProductAmountParams {
            product_id: ProductId::new(product_id.0),
            amount: body.0.amount,
        };

        match self.update_amount_use_case.execute(params).await {
            Ok(cart) => MutateCartResponse::Ok(Json(cart.into())),
            Err(err) => MutateCartResponse::from_error(err.into_error_response()),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum MutateCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl MutateCartResponse {
    fn from_error(
        (status, json): (poem::http::StatusCode, Json<ErrorResponse>),
    ) -> Self {
        match status.as_u16() {
            400 => MutateCartResponse::BadRequest(json),
            404 => MutateCartResponse::NotFound(json),
            409 => MutateCartResponse::Conflict(json),
            502 => MutateCartResponse::BadGateway(json),
            _ => MutateCartResponse::InternalError(json),
        }
    }
}
