//! HTTP request handlers for the salary rank API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Query, RawQuery, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::compute_result;
use crate::config::ReferenceTable;
use crate::error::{EngineError, EngineResult};
use crate::models::SalaryQuery;
use crate::presentation::{DistributionPlot, SocialCard, TierView, share_metadata};
use crate::wizard::validate_salary;

use super::request::QueryParams;
use super::response::{
    ApiError, ApiErrorResponse, HealthResponse, IndustriesResponse, RegionEntry, RegionsResponse,
    ResultResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/result", get(result_handler))
        .route("/card", get(card_handler))
        .route("/regions", get(regions_handler))
        .route("/industries", get(industries_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Unwraps query parameters, turning a rejection into a 400 response.
fn read_params(
    params: Result<Query<QueryParams>, QueryRejection>,
    correlation_id: Uuid,
) -> Result<QueryParams, Response> {
    params.map(|Query(params)| params).map_err(|rejection| {
        let body_text = rejection.body_text();
        warn!(
            correlation_id = %correlation_id,
            error = %body_text,
            "Query string rejected"
        );
        (
            StatusCode::BAD_REQUEST,
            Json(ApiError::malformed_query(body_text)),
        )
            .into_response()
    })
}

/// Handler for GET /result.
///
/// Renders a full result. Unlike the estimator, this endpoint is strict: the
/// salary must be within bounds and the region must exist, so a mistyped link
/// yields an error rather than a misleading number.
async fn result_handler(
    State(state): State<AppState>,
    params: Result<Query<QueryParams>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing result request");

    let params = match read_params(params, correlation_id) {
        Ok(params) => params,
        Err(response) => return response,
    };

    let table = state.table();
    let query = params.to_query(table);

    let start_time = Instant::now();
    match build_result(&query, table, state.public_url()) {
        Ok(body) => {
            info!(
                correlation_id = %correlation_id,
                salary = query.salary,
                region = %query.region,
                industry = %query.industry,
                headline_percentile = body.result.headline_percentile,
                duration_us = start_time.elapsed().as_micros(),
                "Result computed"
            );
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                salary = query.salary,
                region = %query.region,
                error = %err,
                "Result request rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Validates a query and assembles the `/result` body.
fn build_result(
    query: &SalaryQuery,
    table: &ReferenceTable,
    public_url: &str,
) -> EngineResult<ResultResponse> {
    validate_salary(query.salary)?;
    if table.region(&query.region).is_none() {
        return Err(EngineError::RegionNotFound {
            region: query.region.clone(),
        });
    }

    let result = compute_result(query, table);
    let tier = TierView::for_percentile(result.headline_percentile);
    let share = share_metadata(query, &result, table, public_url);
    let plot = DistributionPlot::for_percentile(result.headline_percentile);

    Ok(ResultResponse {
        query: query.clone(),
        result,
        tier,
        share,
        plot,
    })
}

/// Handler for GET /card.
///
/// Always answers: the query string is read without rejection, and unusable
/// parameters degrade to the percentile carried in the link.
async fn card_handler(State(state): State<AppState>, RawQuery(raw): RawQuery) -> Response {
    let correlation_id = Uuid::new_v4();
    let params = QueryParams::from_raw_query(raw.as_deref());

    let table = state.table();
    let query = params.to_query(table);
    let card = SocialCard::build(&query, params.percentile(), table);

    debug!(
        correlation_id = %correlation_id,
        salary = query.salary,
        region = %query.region,
        region_known = card.region_known,
        percentile = card.percentile,
        "Social card built"
    );

    (StatusCode::OK, Json(card)).into_response()
}

/// Handler for GET /regions.
async fn regions_handler(State(state): State<AppState>) -> Json<RegionsResponse> {
    let table = state.table();
    Json(RegionsResponse {
        nation: table.dataset().nation.clone(),
        national: *table.national(),
        regions: table
            .regions()
            .iter()
            .map(|(name, means)| RegionEntry {
                name: name.clone(),
                means: *means,
            })
            .collect(),
    })
}

/// Handler for GET /industries.
async fn industries_handler(State(state): State<AppState>) -> Json<IndustriesResponse> {
    let table = state.table();
    Json(IndustriesResponse {
        default_industry: table.default_industry().key.clone(),
        industries: table.industries().to_vec(),
    })
}

/// Handler for GET /health.
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        dataset: state.table().dataset().name.clone(),
    })
}
