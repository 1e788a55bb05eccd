use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartMutation;
use crate::domain::cart::repository::CartSessionRepository;
use crate::domain::cart::use_cases::scan::{ScanProductParams, ScanProductUseCase, ScanResult};
use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::use_cases::lookup::{LookupProductParams, LookupProductUseCase};
use crate::domain::logger::Logger;

/// Scan pipeline: resolve the code against the catalog, then add one unit to
/// the session's cart. The cart is only touched once the lookup succeeded.
pub struct ScanProductUseCaseImpl {
    pub repository: Arc<dyn CartSessionRepository>,
    pub lookup: Arc<dyn LookupProductUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ScanProductUseCase for ScanProductUseCaseImpl {
    async fn execute(&self, params: ScanProductParams) -> Result<ScanResult, CartError> {
        self.logger.info(&format!(
            "Scanning code for cart session {}",
            params.session_id
        ));

        let product = self
            .lookup
            .execute(LookupProductParams { code: params.code })
            .await
            .map_err(|e| match e {
                CatalogError::InvalidCode => CartError::InvalidCode,
                CatalogError::Repository(other) => CartError::Repository(other),
                CatalogError::NotFound
                | CatalogError::NameEmpty
                | CatalogError::InvalidPrice
                | CatalogError::InvalidStock => {
                    CartError::ProductNotFound
                }
            })
            .inspect_err(|e| self.logger.warn(&format!("Scan lookup failed: {}", e)))?;

        let session = self
            .repository
            .apply(
                params.session_id,
                CartMutation::AddLine {
                    product_id: product.id.clone(),
                    unit_price: product.price.clone(),
                    name: product.name.clone(),
                },
            )
            .await?;

        self.logger.info(&format!(
            "Product {} added to cart session {}",
            product.name, session.id
        ));
        Ok(ScanResult { product, session })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::CartSession;
    use crate::domain::catalog::model::Product;
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
        pub Lookup {}

        #[async_trait]
        impl LookupProductUseCase for Lookup {
            async fn execute(&self, params: LookupProductParams) -> Result<Product, CatalogError>;
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

    fn widget() -> Product {
        Product::from_repository(
            ProductId::new("p1"),
            "Widget".to_string(),
            BigDecimal::from(5),
            10,
            Utc::now(),
            Utc::now(),
        )
    }

    fn applying_repo() -> MockCartSessionRepo {
        let mut mock_repo = MockCartSessionRepo::new();
        mock_repo.expect_apply().returning(|id, mutation| {
            let mut session = CartSession::start();
            session.id = id;
            session.apply(mutation)?;
            Ok(session)
        });
        mock_repo
    }

    #[tokio::test]
    async fn should_add_scanned_product_to_cart() {
        let mut mock_lookup = MockLookup::new();
        mock_lookup
            .expect_execute()
            .withf(|params| params.code == "p1")
            .returning(|_| Ok(widget()));

        let use_case = ScanProductUseCaseImpl {
            repository: Arc::new(applying_repo()),
            lookup: Arc::new(mock_lookup),
            logger: mock_logger(),
        };
        let session_id = Uuid::new_v4();

        let result = use_case
            .execute(ScanProductParams {
                session_id,
                code: "p1".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.product.name, "Widget");
        assert_eq!(result.session.id, session_id);
        let line = result.session.cart.line(&ProductId::new("p1")).unwrap();
        assert_eq!(line.quantity(), 1);
        assert_eq!(result.session.cart.total(), &BigDecimal::from(5));
    }

    #[tokio::test]
    async fn should_not_touch_cart_when_product_not_found() {
        let mut mock_lookup = MockLookup::new();
        mock_lookup
            .expect_execute()
            .returning(|_| Err(CatalogError::NotFound));
        let mut mock_repo = MockCartSessionRepo::new();
        mock_repo.expect_apply().never();

        let use_case = ScanProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            lookup: Arc::new(mock_lookup),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ScanProductParams {
                session_id: Uuid::new_v4(),
                code: "unknown".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::ProductNotFound));
    }

    #[tokio::test]
    async fn should_report_malformed_code() {
        let mut mock_lookup = MockLookup::new();
        mock_lookup
            .expect_execute()
            .returning(|_| Err(CatalogError::InvalidCode));
        let mut mock_repo = MockCartSessionRepo::new();
        mock_repo.expect_apply().never();

        let use_case = ScanProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            lookup: Arc::new(mock_lookup),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ScanProductParams {
                session_id: Uuid::new_v4(),
                code: "???".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::InvalidCode));
    }

    #[tokio::test]
    async fn should_surface_invalid_price_from_catalog() {
        let mut mock_lookup = MockLookup::new();
        mock_lookup.expect_execute().returning(|_| {
            let mut product = widget();
            product.price = BigDecimal::from(-1);
            Ok(product)
        });

        let use_case = ScanProductUseCaseImpl {
            repository: Arc::new(applying_repo()),
            lookup: Arc::new(mock_lookup),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ScanProductParams {
                session_id: Uuid::new_v4(),
                code: "p1".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::InvalidArgument));
    }

    #[tokio::test]
    async fn should_return_session_not_found_for_closed_session() {
        let mut mock_lookup = MockLookup::new();
        mock_lookup.expect_execute().returning(|_| Ok(widget()));
        let mut mock_repo = MockCartSessionRepo::new();
        mock_repo
            .expect_apply()
            .returning(|_, _| Err(CartError::SessionNotFound));

        let use_case = ScanProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            lookup: Arc::new(mock_lookup),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ScanProductParams {
                session_id: Uuid::new_v4(),
                code: "p1".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::SessionNotFound));
    }
}
