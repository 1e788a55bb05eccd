use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Receipt;
use crate::domain::cart::repository::CartSessionRepository;
use crate::domain::cart::use_cases::checkout::{CheckoutParams, CheckoutUseCase};
use crate::domain::logger::Logger;

pub struct CheckoutUseCaseImpl {
    pub repository: Arc<dyn CartSessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CheckoutUseCase for CheckoutUseCaseImpl {
    async fn execute(&self, params: CheckoutParams) -> Result<Receipt, CartError> {
        self.logger
            .info(&format!("Checking out cart session: {}", params.session_id));

        let session = self
            .repository
            .remove_non_empty(params.session_id)
            .await
            .inspect_err(|e| {
                self.logger
                    .warn(&format!("Checkout of {} refused: {}", params.session_id, e))
            })?;

        let receipt = Receipt::from(session);
        self.logger.info(&format!(
            "Cart session {} checked out: {} items, total {}",
            receipt.session_id, receipt.item_count, receipt.grand_total
        ));
        Ok(receipt)
    }
}
