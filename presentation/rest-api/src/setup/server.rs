use std::sync::Arc;

use poem::{EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing};
use poem_openapi::OpenApiService;

use business::domain::cart::use_cases::purge_idle::{
    PurgeIdleSessionsParams, PurgeIdleSessionsUseCase,
};

use crate::config::cart_config::CartConfig;
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();

        spawn_idle_session_purge(container.purge_idle_use_case.clone(), config.cart.clone());

        let api_service = OpenApiService::new(
            (container.health_api, container.product_api, container.cart_api),
            "Point of Sale API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("http://{}", addr));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        let app = Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .with(config.cors)
            .with(Tracing);
        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        tracing::info!("OpenAPI JSON at http://{}/openapi.json", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}

/// Sweeps sessions nobody touched within `max_idle`, forever.
fn spawn_idle_session_purge(use_case: Arc<dyn PurgeIdleSessionsUseCase>, config: CartConfig) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(config.purge_interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let params = PurgeIdleSessionsParams {
                max_idle: config.max_idle,
            };
            if let Err(err) = use_case.execute(params).await {
                tracing::error!(error = %err, "idle cart session purge failed");
            }
        }
    });
}
