use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{Datelike, Month, NaiveDate};
use serde::Deserialize;
use thiserror::Error;

use crate::api::AppState;
use crate::models::*;

// ============================================================
// Error Handling
// ============================================================

/// Log an internal error and return a sanitized response to the client.
/// The full error is logged server-side for debugging, but clients only
/// see a generic message to avoid leaking internal details.
fn internal_error(e: impl std::fmt::Display) -> (StatusCode, String) {
    tracing::error!("Internal error: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
    )
}

/// Failure modes of the filtered-costs endpoint.
#[derive(Debug, Error)]
enum FilterError {
    /// A query boundary the client sent did not parse.
    #[error("invalid date `{0}`: expected YYYY-MM-DD")]
    Boundary(String),
    /// A stored month label did not parse as a calendar month. This is a
    /// data problem, not a client problem.
    #[error("stored month label `{0}` is not a calendar month")]
    MonthLabel(String),
}

impl From<FilterError> for (StatusCode, String) {
    fn from(e: FilterError) -> Self {
        match e {
            FilterError::Boundary(_) => {
                tracing::warn!("Rejected filter request: {}", e);
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            FilterError::MonthLabel(_) => internal_error(e),
        }
    }
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Dataset reads
// ============================================================

pub async fn get_cloud_costs(State(state): State<AppState>) -> Json<Vec<CostPoint>> {
    Json(state.store.cloud_costs())
}

pub async fn get_service_usage(State(state): State<AppState>) -> Json<UsageSeries> {
    Json(state.store.service_usage())
}

pub async fn get_daily_costs(State(state): State<AppState>) -> Json<UsageSeries> {
    Json(state.store.daily_costs())
}

pub async fn get_resources(State(state): State<AppState>) -> Json<Vec<ResourceEntry>> {
    Json(state.store.resources())
}

// ============================================================
// Cost estimation
// ============================================================

/// Pure computation; touches no state.
pub async fn estimate_cost(Json(params): Json<EstimationParams>) -> Json<EstimationResult> {
    Json(EstimationResult {
        estimated_monthly_cost: params.monthly_cost(),
    })
}

// ============================================================
// Filtered reads
// ============================================================

/// Query parameters for the filtered cost listing.
#[derive(Debug, Deserialize)]
pub struct DateRangeQuery {
    pub start_date: String,
    pub end_date: String,
}

/// Return only the cost points whose month falls inside the boundary
/// months, inclusive.
///
/// Stored month labels carry no year, so only the month components of the
/// boundaries participate in the comparison; a range whose start month is
/// later than its end month matches nothing.
pub async fn get_filtered_costs(
    State(state): State<AppState>,
    Query(range): Query<DateRangeQuery>,
) -> Result<Json<Vec<CostPoint>>, (StatusCode, String)> {
    let start = parse_boundary(&range.start_date)?;
    let end = parse_boundary(&range.end_date)?;

    let mut filtered = Vec::new();
    for point in state.store.cloud_costs() {
        let month = month_number(&point.month)?;
        if month >= start.month() && month <= end.month() {
            filtered.push(point);
        }
    }

    Ok(Json(filtered))
}

fn parse_boundary(value: &str) -> Result<NaiveDate, FilterError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| FilterError::Boundary(value.to_string()))
}

fn month_number(label: &str) -> Result<u32, FilterError> {
    label
        .parse::<Month>()
        .map(|m| m.number_from_month())
        .map_err(|_| FilterError::MonthLabel(label.to_string()))
}

// ============================================================
// Dataset updates
// ============================================================

/// Replace the monthly cost series and notify every listener.
///
/// The store mutation completes before the broadcast is issued; delivery
/// to listeners is not awaited by the HTTP response.
pub async fn update_cloud_costs(
    State(state): State<AppState>,
    Json(updated): Json<Vec<CostPoint>>,
) -> Json<UpdateAck> {
    state.store.replace_cloud_costs(updated.clone());
    state.registry.broadcast(&UpdateMessage::CloudCosts(updated));
    tracing::info!("Cloud costs replaced");
    Json(UpdateAck {
        message: "Cloud costs updated successfully".to_string(),
    })
}

/// Replace the service-usage series and notify every listener.
pub async fn update_service_usage(
    State(state): State<AppState>,
    Json(updated): Json<UsageSeries>,
) -> Json<UpdateAck> {
    state.store.replace_service_usage(updated.clone());
    state
        .registry
        .broadcast(&UpdateMessage::ServiceUsage(updated));
    tracing::info!("Service usage replaced");
    Json(UpdateAck {
        message: "Service usage updated successfully".to_string(),
    })
}
