use async_trait::async_trait;
use chrono::Duration;

use crate::domain::cart::errors::CartError;

pub struct PurgeIdleSessionsParams {
    pub max_idle: Duration,
}

#[async_trait]
pub trait PurgeIdleSessionsUseCase: Send + Sync {
    async fn execute(&self, params: PurgeIdleSessionsParams) -> Result<u64, CartError>;
}
