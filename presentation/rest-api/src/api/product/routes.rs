use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::catalog::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::catalog::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::catalog::use_cases::get_all::GetAllProductsUseCase;
use business::domain::catalog::use_cases::lookup::{LookupProductParams, LookupProductUseCase};
use business::domain::shared::value_objects::ProductId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::money::parse_money;
use crate::api::product::dto::{CreateProductRequest, ProductResponse};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
    lookup_use_case: Arc<dyn LookupProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
        lookup_use_case: Arc<dyn LookupProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            delete_use_case,
            lookup_use_case,
        }
    }
}

/// Product catalog API
///
/// Endpoints for maintaining the products a till can scan.
#[OpenApi]
impl ProductApi {
    /// Create a new product
    ///
    /// Registers a product and assigns the identifier printed in its QR code.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<CreateProductRequest>) -> CreateProductResponse {
        let Some(price) = parse_money(&body.0.price) else {
            return CreateProductResponse::BadRequest(ErrorResponse::validation(
                "catalog.invalid_price",
            ));
        };

        let params = CreateProductParams {
            name: body.0.name,
            price,
            stock: body.0.stock,
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// List all products
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> GetAllProductsResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetAllProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Look up a scanned code
    ///
    /// Resolves the payload of a QR code to its catalog entry without
    /// touching any cart.
    #[oai(
        path = "/products/lookup/:code",
        method = "get",
        tag = "ApiTags::Products"
    )]
    async fn lookup_product(&self, code: Path<String>) -> LookupProductResponse {
        match self
            .lookup_use_case
            .execute(LookupProductParams { code: code.0 })
            .await
        {
            Ok(product) => LookupProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => LookupProductResponse::BadRequest(json),
                    404 => LookupProductResponse::NotFound(json),
                    _ => LookupProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Removes the product from the catalog. Carts that already hold it keep
    /// their line.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<String>) -> DeleteProductResponse {
        let Some(id) = ProductId::parse(&id.0) else {
            return DeleteProductResponse::BadRequest(ErrorResponse::validation(
                "catalog.invalid_code",
            ));
        };

        match self
            .delete_use_case
            .execute(DeleteProductParams { id })
            .await
        {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum LookupProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
