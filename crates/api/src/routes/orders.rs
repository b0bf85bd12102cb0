//! Order listing, analytics, discount and status endpoints.

use std::sync::Arc;

use analytics::{AnalyticsSummary, OrderAnalyticsAggregator};
use application::{
    AdvanceOutcome, DiscountOutcome, OrderQueryService, OrderStatusService, OrderView,
    PromotionService,
};
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use common::OrderId;
use domain::PromotionResult;
use order_store::{OrderStore, ProfileLookup};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<S: OrderStore, P: ProfileLookup> {
    pub status_service: OrderStatusService<S>,
    pub promotion_service: PromotionService<S, P>,
    pub query_service: OrderQueryService<S, P>,
    pub analytics: OrderAnalyticsAggregator<S>,
}

// -- Request types --

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvanceStatusQuery {
    pub new_status: String,
}

// -- Response types --

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: String,
    pub customer_id: String,
    pub total_amount: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub fulfilled_at: Option<DateTime<Utc>>,
    pub discounted_total: f64,
    pub applied_promotions: Vec<String>,
    pub potential_promotions: Vec<String>,
}

impl From<OrderView> for OrderResponse {
    fn from(view: OrderView) -> Self {
        Self {
            id: view.id.to_string(),
            customer_id: view.customer_id.to_string(),
            total_amount: view.total_amount.to_f64(),
            status: view.status.to_string(),
            created_at: view.created_at,
            fulfilled_at: view.fulfilled_at,
            discounted_total: view.discounted_total.to_f64(),
            applied_promotions: view.applied_promotions,
            potential_promotions: view.potential_promotions,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionResponse {
    pub original_total: f64,
    pub discounted_total: f64,
    pub applied_promotions: Vec<String>,
}

impl From<PromotionResult> for PromotionResponse {
    fn from(result: PromotionResult) -> Self {
        Self {
            original_total: result.original_total().to_f64(),
            discounted_total: result.discounted_total().to_f64(),
            applied_promotions: result.into_applied_promotions(),
        }
    }
}

// -- Handlers --

/// GET /api/orders: every order with the promotions it could receive.
#[tracing::instrument(skip(state))]
pub async fn list<S, P>(
    State(state): State<Arc<AppState<S, P>>>,
) -> Result<Json<Vec<OrderResponse>>, ApiError>
where
    S: OrderStore + 'static,
    P: ProfileLookup + 'static,
{
    let orders = state.query_service.list_orders().await?;
    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}

/// GET /api/orders/analytics
#[tracing::instrument(skip(state))]
pub async fn get_analytics<S, P>(
    State(state): State<Arc<AppState<S, P>>>,
) -> Result<Json<AnalyticsSummary>, ApiError>
where
    S: OrderStore + 'static,
    P: ProfileLookup + 'static,
{
    Ok(Json(state.analytics.get_analytics().await?))
}

/// POST /api/orders/{id}/apply-discount: evaluate promotions and save the result.
#[tracing::instrument(skip(state))]
pub async fn apply_discount<S, P>(
    State(state): State<Arc<AppState<S, P>>>,
    Path(id): Path<String>,
) -> Result<Json<PromotionResponse>, ApiError>
where
    S: OrderStore + 'static,
    P: ProfileLookup + 'static,
{
    let order_id = parse_order_id(&id)?;

    match state.promotion_service.apply_to_order(order_id).await? {
        DiscountOutcome::Applied(result) => Ok(Json(result.into())),
        DiscountOutcome::OrderNotFound => Err(ApiError::NotFound(format!("Order {id} not found"))),
        DiscountOutcome::ProfileNotFound => Err(ApiError::NotFound(format!(
            "Customer profile for order {id} not found"
        ))),
    }
}

/// POST /api/orders/{id}/status/advance?newStatus=X: move the order to a new status.
#[tracing::instrument(skip(state, query), fields(new_status = %query.new_status))]
pub async fn advance_status<S, P>(
    State(state): State<Arc<AppState<S, P>>>,
    Path(id): Path<String>,
    Query(query): Query<AdvanceStatusQuery>,
) -> Result<StatusCode, ApiError>
where
    S: OrderStore + 'static,
    P: ProfileLookup + 'static,
{
    let order_id = parse_order_id(&id)?;

    match state
        .status_service
        .try_advance_status(order_id, &query.new_status)
        .await?
    {
        AdvanceOutcome::Advanced { .. } => Ok(StatusCode::NO_CONTENT),
        AdvanceOutcome::NotFound => Err(ApiError::NotFound(format!("Order {id} not found"))),
        AdvanceOutcome::InvalidStatus(name) => {
            Err(ApiError::BadRequest(format!("Unknown order status: {name}")))
        }
        AdvanceOutcome::InvalidTransition { from, to } => Err(ApiError::BadRequest(format!(
            "Invalid status transition from {from} to {to}"
        ))),
    }
}

fn parse_order_id(id: &str) -> Result<OrderId, ApiError> {
    OrderId::parse(id).map_err(|e| ApiError::BadRequest(format!("Invalid ID format: {e}")))
}
