use std::sync::Arc;

use async_trait::async_trait;
use num_traits::Zero;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{CartMutation, CartSession};
use crate::domain::cart::repository::CartSessionRepository;
use crate::domain::cart::use_cases::add_line::{
    AddLineParams, AddLineUseCase, IncrementLineParams,
};
use crate::domain::logger::Logger;

pub struct AddLineUseCaseImpl {
    pub repository: Arc<dyn CartSessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddLineUseCase for AddLineUseCaseImpl {
    async fn execute(&self, params: AddLineParams) -> Result<CartSession, CartError> {
        self.logger.info(&format!(
            "Adding {} to cart session {}",
            params.product_id, params.session_id
        ));

        if params.unit_price < bigdecimal::BigDecimal::zero() {
            self.logger.warn(&format!(
                "Rejected negative unit price for {}",
                params.product_id
            ));
            return Err(CartError::InvalidArgument);
        }

        self.repository
            .apply(
                params.session_id,
                CartMutation::AddLine {
                    product_id: params.product_id,
                    unit_price: params.unit_price,
                    name: params.name,
                },
            )
            .await
    }

    async fn increment(&self, params: IncrementLineParams) -> Result<CartSession, CartError> {
        self.logger.info(&format!(
            "Incrementing {} in cart session {}",
            params.product_id, params.session_id
        ));

        self.repository
            .apply(
                params.session_id,
                CartMutation::Increment {
                    product_id: params.product_id,
                },
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::ProductId;
    use bigdecimal::BigDecimal;
    use chrono::{DateTime, Utc};
    use mockall::mock;
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

    fn price(value: &str) -> BigDecimal {
        BigDecimal::from_str(value).unwrap()
    }

    fn session_with_widget(id: Uuid) -> CartSession {
        let mut session = CartSession::start();
        session.id = id;
        session
            .cart
            .add_line(ProductId::new("p1"), price("5.00"), "Widget")
            .unwrap();
        session
    }

    #[tokio::test]
    async fn should_forward_add_line_mutation() {
        let mut mock_repo = MockCartSessionRepo::new();
        mock_repo
            .expect_apply()
            .withf(|_, mutation| {
                matches!(mutation, CartMutation::AddLine { product_id, .. } if product_id.as_str() == "p1")
            })
            .times(1)
            .returning(|id, mutation| {
                let mut session = CartSession::start();
                session.id = id;
                session.apply(mutation)?;
                Ok(session)
            });

        let use_case = AddLineUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let session = use_case
            .execute(AddLineParams {
                session_id: Uuid::new_v4(),
                product_id: ProductId::new("p1"),
                unit_price: price("5.00"),
                name: "Widget".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(session.cart.total(), &price("5.00"));
    }

    #[tokio::test]
    async fn should_reject_negative_price_before_touching_session() {
        let mut mock_repo = MockCartSessionRepo::new();
        mock_repo.expect_apply().never();

        let use_case = AddLineUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddLineParams {
                session_id: Uuid::new_v4(),
                product_id: ProductId::new("p1"),
                unit_price: price("-1.00"),
                name: "Bad".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::InvalidArgument));
    }

    #[tokio::test]
    async fn should_increment_with_stored_price_and_name() {
        let session_id = Uuid::new_v4();
        let mut mock_repo = MockCartSessionRepo::new();
        mock_repo.expect_get_by_id().never();
        mock_repo
            .expect_apply()
            .withf(|_, mutation| {
                *mutation
                    == CartMutation::Increment {
                        product_id: ProductId::new("p1"),
                    }
            })
            .times(1)
            .returning(|id, mutation| {
                let mut session = session_with_widget(id);
                session.apply(mutation)?;
                Ok(session)
            });

        let use_case = AddLineUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let session = use_case
            .increment(IncrementLineParams {
                session_id,
                product_id: ProductId::new("p1"),
            })
            .await
            .unwrap();

        let line = session.cart.line(&ProductId::new("p1")).unwrap();
        assert_eq!(line.quantity(), 2);
        assert_eq!(line.unit_price(), &price("5.00"));
        assert_eq!(session.cart.total(), &price("10.00"));
    }

    #[tokio::test]
    async fn should_not_recreate_line_removed_before_increment() {
        let mut mock_repo = MockCartSessionRepo::new();
        mock_repo.expect_apply().returning(|id, mutation| {
            let mut session = session_with_widget(id);
            session.cart.sub_line(&ProductId::new("p1"));
            session.apply(mutation)?;
            Ok(session)
        });

        let use_case = AddLineUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .increment(IncrementLineParams {
                session_id: Uuid::new_v4(),
                product_id: ProductId::new("p1"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::LineNotFound));
    }

    #[tokio::test]
    async fn should_return_session_not_found_when_incrementing_closed_session() {
        let mut mock_repo = MockCartSessionRepo::new();
        mock_repo
            .expect_apply()
            .returning(|_, _| Err(CartError::SessionNotFound));

        let use_case = AddLineUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .increment(IncrementLineParams {
                session_id: Uuid::new_v4(),
                product_id: ProductId::new("p1"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::SessionNotFound));
    }
}
