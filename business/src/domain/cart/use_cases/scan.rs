use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSession;
use crate::domain::catalog::model::Product;

pub struct ScanProductParams {
    pub session_id: Uuid,
    pub code: String,
}

/// Outcome of a successful scan: the catalog entry that was resolved and the
/// cart after it was added.
#[derive(Debug, Clone)]
pub struct ScanResult {
    pub product: Product,
    pub session: CartSession,
}

#[async_trait]
pub trait ScanProductUseCase: Send + Sync {
    async fn execute(&self, params: ScanProductParams) -> Result<ScanResult, CartError>;
}
