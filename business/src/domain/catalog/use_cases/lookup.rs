use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;

pub struct LookupProductParams {
    /// Raw scanned code, untrimmed.
    pub code: String,
}

/// Resolves a scanned code to a catalog product.
#[async_trait]
pub trait LookupProductUseCase: Send + Sync {
    async fn execute(&self, params: LookupProductParams) -> Result<Product, CatalogError>;
}
