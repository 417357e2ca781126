//! HTTP API module for the salary rank engine.
//!
//! This module provides the REST endpoints that compute results, social
//! cards and reference listings from query parameters.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{QueryParams, parse_leading_integer};
pub use response::{
    ApiError, ApiErrorResponse, HealthResponse, IndustriesResponse, RegionEntry, RegionsResponse,
    ResultResponse,
};
pub use state::{AppState, DEFAULT_PUBLIC_URL};
