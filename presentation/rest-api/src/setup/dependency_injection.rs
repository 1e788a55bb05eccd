use std::sync::Arc;

use logger::TracingLogger;
use persistence::cart_session::repository::CartSessionRepositoryInMemory;
use persistence::catalog::repository::ProductRepositoryPostgres;

use business::application::cart::abandon::AbandonCartSessionUseCaseImpl;
use business::application::cart::add_line::AddLineUseCaseImpl;
use business::application::cart::checkout::CheckoutUseCaseImpl;
use business::application::cart::get_by_id::GetCartSessionUseCaseImpl;
use business::application::cart::purge_idle::PurgeIdleSessionsUseCaseImpl;
use business::application::cart::scan::ScanProductUseCaseImpl;
use business::application::cart::start::StartCartSessionUseCaseImpl;
use business::application::cart::sub_line::SubLineUseCaseImpl;
use business::application::catalog::create::CreateProductUseCaseImpl;
use business::application::catalog::delete::DeleteProductUseCaseImpl;
use business::application::catalog::get_all::GetAllProductsUseCaseImpl;
use business::application::catalog::lookup::LookupProductUseCaseImpl;
use business::domain::cart::use_cases::purge_idle::PurgeIdleSessionsUseCase;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
    pub cart_api: crate::api::cart::routes::CartApi,
    pub purge_idle_use_case: Arc<dyn PurgeIdleSessionsUseCase>,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new(pool.clone());

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool));
        let session_repository = Arc::new(CartSessionRepositoryInMemory::new());

        // Catalog use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let lookup_use_case = Arc::new(LookupProductUseCaseImpl {
            repository: product_repository,
            logger: logger.clone(),
        });

        // Cart use cases
        let start_use_case = Arc::new(StartCartSessionUseCaseImpl {
            repository: session_repository.clone(),
            logger: logger.clone(),
        });
        let get_cart_use_case = Arc::new(GetCartSessionUseCaseImpl {
            repository: session_repository.clone(),
            logger: logger.clone(),
        });
        let scan_use_case = Arc::new(ScanProductUseCaseImpl {
            repository: session_repository.clone(),
            lookup: lookup_use_case.clone(),
            logger: logger.clone(),
        });
        let add_line_use_case = Arc::new(AddLineUseCaseImpl {
            repository: session_repository.clone(),
            logger: logger.clone(),
        });
        let sub_line_use_case = Arc::new(SubLineUseCaseImpl {
            repository: session_repository.clone(),
            logger: logger.clone(),
        });
        let checkout_use_case = Arc::new(CheckoutUseCaseImpl {
            repository: session_repository.clone(),
            logger: logger.clone(),
        });
        let abandon_use_case = Arc::new(AbandonCartSessionUseCaseImpl {
            repository: session_repository.clone(),
            logger: logger.clone(),
        });
        let purge_idle_use_case = Arc::new(PurgeIdleSessionsUseCaseImpl {
            repository: session_repository,
            logger,
        });

        let product_api = crate::api::product::routes::ProductApi::new(
            create_use_case,
            get_all_use_case,
            delete_use_case,
            lookup_use_case,
        );

        let cart_api = crate::api::cart::routes::CartApi::new(
            start_use_case,
            get_cart_use_case,
            scan_use_case,
            add_line_use_case,
            sub_line_use_case,
            checkout_use_case,
            abandon_use_case,
        );

        Self {
            health_api,
            product_api,
            cart_api,
            purge_idle_use_case,
        }
    }
}
