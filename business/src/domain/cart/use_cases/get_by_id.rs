use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSession;

pub struct GetCartSessionParams {
    pub session_id: Uuid,
}

#[async_trait]
pub trait GetCartSessionUseCase: Send + Sync {
    async fn execute(&self, params: GetCartSessionParams) -> Result<CartSession, CartError>;
}
