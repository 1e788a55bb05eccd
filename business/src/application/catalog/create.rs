use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::repository::ProductRepository;
use crate::domain::catalog::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::logger::Logger;

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, CatalogError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        let product = Product::new(params.name, params.price, params.stock)?;
        self.repository.save(&product).await?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}
