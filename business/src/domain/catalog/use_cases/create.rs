use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;

pub struct CreateProductParams {
    pub name: String,
    pub price: BigDecimal,
    pub stock: u32,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, CatalogError>;
}
