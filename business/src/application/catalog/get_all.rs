use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::repository::ProductRepository;
use crate::domain::catalog::use_cases::get_all::GetAllProductsUseCase;
use crate::domain::logger::Logger;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Product>, CatalogError> {
        self.logger.info("Getting all products");
        let products = self.repository.get_all().await?;
        self.logger
            .info(&format!("Retrieved {} products", products.len()));
        Ok(products)
    }
}
