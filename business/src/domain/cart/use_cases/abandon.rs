use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;

pub struct AbandonCartSessionParams {
    pub session_id: Uuid,
}

#[async_trait]
pub trait AbandonCartSessionUseCase: Send + Sync {
    async fn execute(&self, params: AbandonCartSessionParams) -> Result<(), CartError>;
}
