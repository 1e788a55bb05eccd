use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartSessionRepository;
use crate::domain::cart::use_cases::abandon::{
    AbandonCartSessionParams, AbandonCartSessionUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct AbandonCartSessionUseCaseImpl {
    pub repository: Arc<dyn CartSessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AbandonCartSessionUseCase for AbandonCartSessionUseCaseImpl {
    async fn execute(&self, params: AbandonCartSessionParams) -> Result<(), CartError> {
        let session = self
            .repository
            .remove(params.session_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::SessionNotFound,
                other => CartError::Repository(other),
            })?;

        self.logger.info(&format!(
            "Cart session {} abandoned with {} lines",
            session.id,
            session.cart.line_count()
        ));
        Ok(())
    }
}
