//! Order dropship check endpoint

use axum::{
    body::Bytes,
    extract::{Host, Query, State},
    Json,
};
use serde::Deserialize;

use dropcheck_shared::{OrderClassification, OrderPayload};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use crate::tenancy::{normalize_host, resolve_credentials};

/// Legacy query form: the order JSON-encoded and URL-escaped in `order`
#[derive(Debug, Deserialize)]
pub struct OrderQuery {
    #[serde(default)]
    pub order: Option<String>,
}

/// Check whether an order contains dropship vendors.
///
/// Accepts the order as a JSON request body; legacy callers may instead
/// pass it JSON-encoded in the `order` query parameter. The body wins
/// when both are present.
pub async fn check_order_dropship(
    State(state): State<AppState>,
    host: Option<Host>,
    Query(query): Query<OrderQuery>,
    body: Bytes,
) -> ApiResult<Json<OrderClassification>> {
    let order = parse_order_input(&body, query.order.as_deref())?;

    if order.line_items.is_empty() {
        return Err(ApiError::Validation("Order has no line items".to_string()));
    }

    // A missing Host header degrades to the default tenant, matching the
    // credential fallback policy.
    let hostname = host
        .map(|Host(value)| normalize_host(&value))
        .unwrap_or_default();
    let credential =
        resolve_credentials(&state.directory, &hostname, |key| std::env::var(key).ok());

    tracing::info!(
        tenant = %credential.tenant_id,
        items = order.line_items.len(),
        "classifying order"
    );

    let classification = state
        .classifier
        .classify(&order.line_items, &credential)
        .await;

    Ok(Json(classification))
}

fn parse_order_input(body: &[u8], query_order: Option<&str>) -> Result<OrderPayload, ApiError> {
    if !body.is_empty() {
        return serde_json::from_slice(body)
            .map_err(|e| ApiError::BadRequest(format!("Invalid order payload: {}", e)));
    }

    match query_order {
        Some(raw) => serde_json::from_str(raw)
            .map_err(|e| ApiError::BadRequest(format!("Invalid order payload: {}", e))),
        None => Err(ApiError::BadRequest("Missing order payload".to_string())),
    }
}
