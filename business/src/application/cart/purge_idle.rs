use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartSessionRepository;
use crate::domain::cart::use_cases::purge_idle::{
    PurgeIdleSessionsParams, PurgeIdleSessionsUseCase,
};
use crate::domain::logger::Logger;

pub struct PurgeIdleSessionsUseCaseImpl {
    pub repository: Arc<dyn CartSessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PurgeIdleSessionsUseCase for PurgeIdleSessionsUseCaseImpl {
    async fn execute(&self, params: PurgeIdleSessionsParams) -> Result<u64, CartError> {
        let Some(cutoff) = Utc::now().checked_sub_signed(params.max_idle) else {
            return Ok(0);
        };
        let count = self.repository.remove_idle_since(cutoff).await?;

        if count > 0 {
            self.logger
                .info(&format!("Purged {} idle cart sessions", count));
        }
        Ok(count)
    }
}
