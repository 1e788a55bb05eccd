use async_trait::async_trait;
use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSession;
use crate::domain::shared::value_objects::ProductId;

pub struct AddLineParams {
    pub session_id: Uuid,
    pub product_id: ProductId,
    pub unit_price: BigDecimal,
    pub name: String,
}

pub struct IncrementLineParams {
    pub session_id: Uuid,
    pub product_id: ProductId,
}

#[async_trait]
pub trait AddLineUseCase: Send + Sync {
    async fn execute(&self, params: AddLineParams) -> Result<CartSession, CartError>;

    /// Adds one more unit of a line already in the cart, reusing its stored
    /// price and name. Fails with `LineNotFound` when the line is gone.
    async fn increment(&self, params: IncrementLineParams) -> Result<CartSession, CartError>;
}
