use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::repository::ProductRepository;
use crate::domain::catalog::use_cases::lookup::{LookupProductParams, LookupProductUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::ProductId;

pub struct LookupProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LookupProductUseCase for LookupProductUseCaseImpl {
    async fn execute(&self, params: LookupProductParams) -> Result<Product, CatalogError> {
        let Some(id) = ProductId::parse(&params.code) else {
            self.logger
                .warn(&format!("Rejected malformed product code: {:?}", params.code));
            return Err(CatalogError::InvalidCode);
        };

        self.logger.debug(&format!("Looking up product: {}", id));

        let product = self
            .repository
            .get_by_id(&id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CatalogError::NotFound,
                other => CatalogError::Repository(other),
            })?;

        // A record with a blank name cannot be shown on a cart line
        if product.name.trim().is_empty() {
            self.logger
                .warn(&format!("Product {} has no name, treating as missing", id));
            return Err(CatalogError::NotFound);
        }

        Ok(product)
    }
}
