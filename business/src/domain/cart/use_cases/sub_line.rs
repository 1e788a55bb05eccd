use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSession;
use crate::domain::shared::value_objects::ProductId;

pub struct SubLineParams {
    pub session_id: Uuid,
    pub product_id: ProductId,
}

#[async_trait]
pub trait SubLineUseCase: Send + Sync {
    async fn execute(&self, params: SubLineParams) -> Result<CartSession, CartError>;
}
