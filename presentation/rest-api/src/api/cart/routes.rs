use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::cart::errors::CartError;
use business::domain::cart::use_cases::abandon::{
    AbandonCartSessionParams, AbandonCartSessionUseCase,
};
use business::domain::cart::use_cases::add_line::{
    AddLineParams, AddLineUseCase, IncrementLineParams,
};
use business::domain::cart::use_cases::checkout::{CheckoutParams, CheckoutUseCase};
use business::domain::cart::use_cases::get_by_id::{GetCartSessionParams, GetCartSessionUseCase};
use business::domain::cart::use_cases::scan::{ScanProductParams, ScanProductUseCase};
use business::domain::cart::use_cases::start::StartCartSessionUseCase;
use business::domain::cart::use_cases::sub_line::{SubLineParams, SubLineUseCase};
use business::domain::shared::value_objects::ProductId;

use crate::api::cart::dto::{
    AddLineRequest, CartResponse, ReceiptResponse, ScanRequest, ScanResponse,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::money::parse_money;
use crate::api::tags::ApiTags;

pub struct CartApi {
    start_use_case: Arc<dyn StartCartSessionUseCase>,
    get_by_id_use_case: Arc<dyn GetCartSessionUseCase>,
    scan_use_case: Arc<dyn ScanProductUseCase>,
    add_line_use_case: Arc<dyn AddLineUseCase>,
    sub_line_use_case: Arc<dyn SubLineUseCase>,
    checkout_use_case: Arc<dyn CheckoutUseCase>,
    abandon_use_case: Arc<dyn AbandonCartSessionUseCase>,
}

impl CartApi {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        start_use_case: Arc<dyn StartCartSessionUseCase>,
        get_by_id_use_case: Arc<dyn GetCartSessionUseCase>,
        scan_use_case: Arc<dyn ScanProductUseCase>,
        add_line_use_case: Arc<dyn AddLineUseCase>,
        sub_line_use_case: Arc<dyn SubLineUseCase>,
        checkout_use_case: Arc<dyn CheckoutUseCase>,
        abandon_use_case: Arc<dyn AbandonCartSessionUseCase>,
    ) -> Self {
        Self {
            start_use_case,
            get_by_id_use_case,
            scan_use_case,
            add_line_use_case,
            sub_line_use_case,
            checkout_use_case,
            abandon_use_case,
        }
    }
}

fn parse_session_id(raw: &str) -> Result<Uuid, Json<ErrorResponse>> {
    Uuid::parse_str(raw).map_err(|_| ErrorResponse::validation("cart.invalid_session_id"))
}

fn parse_product_id(raw: &str) -> Result<ProductId, Json<ErrorResponse>> {
    ProductId::parse(raw).ok_or_else(|| ErrorResponse::validation("cart.invalid_product_id"))
}

impl From<CartError> for CartSessionResponse {
    fn from(err: CartError) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => CartSessionResponse::BadRequest(json),
            404 => CartSessionResponse::NotFound(json),
            _ => CartSessionResponse::InternalError(json),
        }
    }
}

/// Cart session API
///
/// One session per customer at the till. Every mutation returns the full
/// cart so the client can re-render lines and totals.
#[OpenApi]
impl CartApi {
    /// Start a cart session
    #[oai(path = "/carts", method = "post", tag = "ApiTags::Carts")]
    async fn start_cart(&self) -> StartCartResponse {
        match self.start_use_case.execute().await {
            Ok(session) => StartCartResponse::Created(Json(session.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                StartCartResponse::InternalError(json)
            }
        }
    }

    /// Get a cart session
    #[oai(path = "/carts/:id", method = "get", tag = "ApiTags::Carts")]
    async fn get_cart(&self, id: Path<String>) -> CartSessionResponse {
        let session_id = match parse_session_id(&id.0) {
            Ok(session_id) => session_id,
            Err(json) => return CartSessionResponse::BadRequest(json),
        };

        match self
            .get_by_id_use_case
            .execute(GetCartSessionParams { session_id })
            .await
        {
            Ok(session) => CartSessionResponse::Ok(Json(session.into())),
            Err(err) => err.into(),
        }
    }

    /// Scan a product into the cart
    ///
    /// Resolves the QR payload against the catalog and adds one unit of the
    /// product, creating its line when missing.
    #[oai(path = "/carts/:id/scan", method = "post", tag = "ApiTags::Carts")]
    async fn scan(&self, id: Path<String>, body: Json<ScanRequest>) -> ScanCartResponse {
        let session_id = match parse_session_id(&id.0) {
            Ok(session_id) => session_id,
            Err(json) => return ScanCartResponse::BadRequest(json),
        };

        match self
            .scan_use_case
            .execute(ScanProductParams {
                session_id,
                code: body.0.code,
            })
            .await
        {
            Ok(result) => ScanCartResponse::Ok(Json(result.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ScanCartResponse::BadRequest(json),
                    404 => ScanCartResponse::NotFound(json),
                    _ => ScanCartResponse::InternalError(json),
                }
            }
        }
    }

    /// Add a line
    ///
    /// Adds one unit of the given product. When the product already has a
    /// line its quantity grows and the unit price from the first add is kept.
    #[oai(path = "/carts/:id/lines", method = "post", tag = "ApiTags::Carts")]
    async fn add_line(&self, id: Path<String>, body: Json<AddLineRequest>) -> CartSessionResponse {
        let session_id = match parse_session_id(&id.0) {
            Ok(session_id) => session_id,
            Err(json) => return CartSessionResponse::BadRequest(json),
        };
        let product_id = match parse_product_id(&body.0.product_id) {
            Ok(product_id) => product_id,
            Err(json) => return CartSessionResponse::BadRequest(json),
        };
        let Some(unit_price) = parse_money(&body.0.unit_price) else {
            return CartSessionResponse::BadRequest(ErrorResponse::validation(
                "cart.invalid_amount",
            ));
        };

        let params = AddLineParams {
            session_id,
            product_id,
            unit_price,
            name: body.0.name,
        };

        match self.add_line_use_case.execute(params).await {
            Ok(session) => CartSessionResponse::Ok(Json(session.into())),
            Err(err) => err.into(),
        }
    }

    /// Increment a line
    ///
    /// Re-adds the product using the price and name already on the line.
    #[oai(
        path = "/carts/:id/lines/:product_id/increment",
        method = "post",
        tag = "ApiTags::Carts"
    )]
    async fn increment_line(
        &self,
        id: Path<String>,
        product_id: Path<String>,
    ) -> CartSessionResponse {
        let session_id = match parse_session_id(&id.0) {
            Ok(session_id) => session_id,
            Err(json) => return CartSessionResponse::BadRequest(json),
        };
        let product_id = match parse_product_id(&product_id.0) {
            Ok(product_id) => product_id,
            Err(json) => return CartSessionResponse::BadRequest(json),
        };

        match self
            .add_line_use_case
            .increment(IncrementLineParams {
                session_id,
                product_id,
            })
            .await
        {
            Ok(session) => CartSessionResponse::Ok(Json(session.into())),
            Err(err) => err.into(),
        }
    }

    /// Decrement a line
    ///
    /// Removes one unit; the line disappears when its quantity reaches zero.
    /// Unknown products leave the cart as it is.
    #[oai(
        path = "/carts/:id/lines/:product_id/decrement",
        method = "post",
        tag = "ApiTags::Carts"
    )]
    async fn decrement_line(
        &self,
        id: Path<String>,
        product_id: Path<String>,
    ) -> CartSessionResponse {
        let session_id = match parse_session_id(&id.0) {
            Ok(session_id) => session_id,
            Err(json) => return CartSessionResponse::BadRequest(json),
        };
        let product_id = match parse_product_id(&product_id.0) {
            Ok(product_id) => product_id,
            Err(json) => return CartSessionResponse::BadRequest(json),
        };

        match self
            .sub_line_use_case
            .execute(SubLineParams {
                session_id,
                product_id,
            })
            .await
        {
            Ok(session) => CartSessionResponse::Ok(Json(session.into())),
            Err(err) => err.into(),
        }
    }

    /// Check out
    ///
    /// Closes the session and returns the receipt. Empty carts are rejected.
    #[oai(path = "/carts/:id/checkout", method = "post", tag = "ApiTags::Carts")]
    async fn checkout(&self, id: Path<String>) -> CheckoutResponse {
        let session_id = match parse_session_id(&id.0) {
            Ok(session_id) => session_id,
            Err(json) => return CheckoutResponse::BadRequest(json),
        };

        match self
            .checkout_use_case
            .execute(CheckoutParams { session_id })
            .await
        {
            Ok(receipt) => CheckoutResponse::Ok(Json(receipt.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CheckoutResponse::BadRequest(json),
                    404 => CheckoutResponse::NotFound(json),
                    _ => CheckoutResponse::InternalError(json),
                }
            }
        }
    }

    /// Abandon a cart session
    #[oai(path = "/carts/:id", method = "delete", tag = "ApiTags::Carts")]
    async fn abandon_cart(&self, id: Path<String>) -> AbandonCartResponse {
        let session_id = match parse_session_id(&id.0) {
            Ok(session_id) => session_id,
            Err(json) => return AbandonCartResponse::BadRequest(json),
        };

        match self
            .abandon_use_case
            .execute(AbandonCartSessionParams { session_id })
            .await
        {
            Ok(()) => AbandonCartResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => AbandonCartResponse::NotFound(json),
                    _ => AbandonCartResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum StartCartResponse {
    #[oai(status = 201)]
    Created(Json<CartResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartSessionResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ScanCartResponse {
    #[oai(status = 200)]
    Ok(Json<ScanResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CheckoutResponse {
    #[oai(status = 200)]
    Ok(Json<ReceiptResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AbandonCartResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
