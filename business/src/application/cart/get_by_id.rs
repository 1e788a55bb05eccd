use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSession;
use crate::domain::cart::repository::CartSessionRepository;
use crate::domain::cart::use_cases::get_by_id::{GetCartSessionParams, GetCartSessionUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct GetCartSessionUseCaseImpl {
    pub repository: Arc<dyn CartSessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartSessionUseCase for GetCartSessionUseCaseImpl {
    async fn execute(&self, params: GetCartSessionParams) -> Result<CartSession, CartError> {
        self.logger
            .debug(&format!("Getting cart session: {}", params.session_id));

        self.repository
            .get_by_id(params.session_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::SessionNotFound,
                other => CartError::Repository(other),
            })
    }
}
