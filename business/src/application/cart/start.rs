use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSession;
use crate::domain::cart::repository::CartSessionRepository;
use crate::domain::cart::use_cases::start::StartCartSessionUseCase;
use crate::domain::logger::Logger;

pub struct StartCartSessionUseCaseImpl {
    pub repository: Arc<dyn CartSessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl StartCartSessionUseCase for StartCartSessionUseCaseImpl {
    async fn execute(&self) -> Result<CartSession, CartError> {
        let session = CartSession::start();
        self.repository.create(&session).await?;

        self.logger
            .info(&format!("Cart session started: {}", session.id));
        Ok(session)
    }
}
