//! HTTP API server with observability for the order business core.
//!
//! Provides REST endpoints for order listing, promotion application, status
//! advancement and analytics, with structured logging (tracing) and
//! Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;
pub mod seed;

use std::sync::Arc;
use std::time::Duration;

use analytics::OrderAnalyticsAggregator;
use application::{OrderQueryService, OrderStatusService, PromotionService};
use axum::Router;
use axum::routing::{get, post};
use domain::PromotionEngine;
use metrics_exporter_prometheus::PrometheusHandle;
use order_store::{OrderStore, ProfileLookup};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::orders::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S, P>(state: Arc<AppState<S, P>>, metrics_handle: PrometheusHandle) -> Router
where
    S: OrderStore + 'static,
    P: ProfileLookup + 'static,
{
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/api/orders", get(routes::orders::list::<S, P>))
        .route("/api/orders/analytics", get(routes::orders::get_analytics::<S, P>))
        .route(
            "/api/orders/{id}/apply-discount",
            post(routes::orders::apply_discount::<S, P>),
        )
        .route(
            "/api/orders/{id}/status/advance",
            post(routes::orders::advance_status::<S, P>),
        )
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state over shared stores, with the shipped
/// promotion rules.
pub fn create_default_state<S, P>(
    orders: S,
    profiles: P,
    analytics_ttl: Duration,
) -> Arc<AppState<S, P>>
where
    S: OrderStore + Clone + 'static,
    P: ProfileLookup + Clone + 'static,
{
    let engine = PromotionEngine::with_default_rules();

    Arc::new(AppState {
        status_service: OrderStatusService::new(orders.clone()),
        promotion_service: PromotionService::new(orders.clone(), profiles.clone(), engine.clone()),
        query_service: OrderQueryService::new(orders.clone(), profiles, engine),
        analytics: OrderAnalyticsAggregator::with_ttl(orders, analytics_ttl),
    })
}
