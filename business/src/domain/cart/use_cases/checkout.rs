use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Receipt;

pub struct CheckoutParams {
    pub session_id: Uuid,
}

#[async_trait]
pub trait CheckoutUseCase: Send + Sync {
    async fn execute(&self, params: CheckoutParams) -> Result<Receipt, CartError>;
}
