use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{CartMutation, CartSession};
use crate::domain::cart::repository::CartSessionRepository;
use crate::domain::cart::use_cases::sub_line::{SubLineParams, SubLineUseCase};
use crate::domain::logger::Logger;

pub struct SubLineUseCaseImpl {
    pub repository: Arc<dyn CartSessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SubLineUseCase for SubLineUseCaseImpl {
    async fn execute(&self, params: SubLineParams) -> Result<CartSession, CartError> {
        self.logger.info(&format!(
            "Removing one {} from cart session {}",
            params.product_id, params.session_id
        ));

        let session = self
            .repository
            .apply(
                params.session_id,
                CartMutation::SubLine {
                    product_id: params.product_id.clone(),
                },
            )
            .await?;

        if session.cart.line(&params.product_id).is_none() {
            self.logger.debug(&format!(
                "Product {} no longer in cart session {}",
                params.product_id, session.id
            ));
        }

        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::ProductId;
    use bigdecimal::BigDecimal;
    use chrono::{DateTime, Utc};
    use mockall::mock;
    use num_traits::Zero;
    use uuid::Uuid;

    mock! {
        pub CartSessionRepo {}

        #[async_trait]
        impl CartSessionRepository for CartSessionRepo {
            async fn create(&self, session: &CartSession) -> Result<(), RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<CartSession, RepositoryError>;
            async fn apply(&self, id: Uuid, mutation: CartMutation) -> Result<CartSession, CartError>;
            async fn remove(&self, id: Uuid) -> Result<CartSession, RepositoryError>;
            async fn remove_non_empty(&self, id: Uuid) -> Result<CartSession, CartError>;
            async fn remove_idle_since(&self, cutoff: DateTime<Utc>) -> Result<u64, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn repo_with_single_widget() -> MockCartSessionRepo {
        let mut mock_repo = MockCartSessionRepo::new();
        mock_repo.expect_apply().returning(|id, mutation| {
            let mut session = CartSession::start();
            session.id = id;
            session
                .cart
                .add_line(ProductId::new("p1"), BigDecimal::from(10), "X")
                .unwrap();
            session.apply(mutation)?;
            Ok(session)
        });
        mock_repo
    }

    #[tokio::test]
    async fn should_remove_line_at_quantity_one() {
        let use_case = SubLineUseCaseImpl {
            repository: Arc::new(repo_with_single_widget()),
            logger: mock_logger(),
        };

        let session = use_case
            .execute(SubLineParams {
                session_id: Uuid::new_v4(),
                product_id: ProductId::new("p1"),
            })
            .await
            .unwrap();

        assert!(session.cart.is_empty());
        assert_eq!(session.cart.total(), &BigDecimal::zero());
    }

    #[tokio::test]
    async fn should_treat_missing_line_as_noop() {
        let use_case = SubLineUseCaseImpl {
            repository: Arc::new(repo_with_single_widget()),
            logger: mock_logger(),
        };

        let session = use_case
            .execute(SubLineParams {
                session_id: Uuid::new_v4(),
                product_id: ProductId::new("nonexistent"),
            })
            .await
            .unwrap();

        assert_eq!(session.cart.line_count(), 1);
        assert_eq!(session.cart.total(), &BigDecimal::from(10));
    }

    #[tokio::test]
    async fn should_return_session_not_found() {
        let mut mock_repo = MockCartSessionRepo::new();
        mock_repo
            .expect_apply()
            .returning(|_, _| Err(CartError::SessionNotFound));

        let use_case = SubLineUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SubLineParams {
                session_id: Uuid::new_v4(),
                product_id: ProductId::new("p1"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::SessionNotFound));
    }
}
