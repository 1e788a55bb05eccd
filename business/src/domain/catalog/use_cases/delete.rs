use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::shared::value_objects::ProductId;

pub struct DeleteProductParams {
    pub id: ProductId,
}

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), CatalogError>;
}
