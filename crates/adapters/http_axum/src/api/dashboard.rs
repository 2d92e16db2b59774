//! JSON handlers for the API root, dashboard statistics and locations.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use stockroom_app::ports::ItemRepository;
use stockroom_domain::dashboard::DashboardStats;

use crate::error::ApiError;
use crate::state::AppState;

/// Body of `GET /api`.
#[derive(Serialize)]
pub struct RootInfo {
    pub message: &'static str,
    pub version: &'static str,
}

/// `GET /api`
pub async fn root() -> Json<RootInfo> {
    Json(RootInfo {
        message: "Stockroom API",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Possible responses from the stats endpoint.
pub enum StatsResponse {
    Ok(Json<DashboardStats>),
}

impl IntoResponse for StatsResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/dashboard`
pub async fn stats<R>(State(state): State<AppState<R>>) -> Result<StatsResponse, ApiError>
where
    R: ItemRepository + Send + Sync + 'static,
{
    let stats = state.item_service.dashboard().await?;
    Ok(StatsResponse::Ok(Json(stats)))
}

/// `GET /api/locations`
pub async fn locations<R>(
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<String>>, ApiError>
where
    R: ItemRepository + Send + Sync + 'static,
{
    let locations = state.item_service.locations().await?;
    Ok(Json(locations))
}
