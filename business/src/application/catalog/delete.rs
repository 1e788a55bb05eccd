use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::repository::ProductRepository;
use crate::domain::catalog::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), CatalogError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        // Verify it exists
        self.repository
            .get_by_id(&params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CatalogError::NotFound,
                other => CatalogError::Repository(other),
            })?;

        self.repository.delete(&params.id).await?;

        self.logger
            .info(&format!("Product deleted: {}", params.id));
        Ok(())
    }
}
