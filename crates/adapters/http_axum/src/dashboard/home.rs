//! Dashboard home page: stat cards, status breakdown and low-stock alerts.

use askama::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use stockroom_app::ports::ItemRepository;
use stockroom_domain::dashboard::DashboardStats;
use stockroom_domain::item::ItemStatus;

use super::views::BadgeView;
use crate::error::ApiError;
use crate::state::AppState;

pub(crate) struct StatusRow {
    badge: BadgeView,
    count: u64,
}

pub(crate) struct LowStockRow {
    id: i64,
    name: String,
    location: String,
    quantity: u32,
    threshold: u32,
}

/// Home page template.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    error: String,
    total_items: u64,
    total_devices: u64,
    total_parts: u64,
    available_count: u64,
    status_rows: Vec<StatusRow>,
    low_stock: Vec<LowStockRow>,
}

impl HomeTemplate {
    fn loaded(stats: &DashboardStats) -> Self {
        Self {
            error: String::new(),
            total_items: stats.total_items,
            total_devices: stats.total_devices,
            total_parts: stats.total_parts,
            available_count: stats.available_count,
            status_rows: ItemStatus::ALL
                .into_iter()
                .map(|status| StatusRow {
                    badge: status.badge().into(),
                    count: stats.status_count(status),
                })
                .collect(),
            low_stock: stats
                .low_stock_items
                .iter()
                .map(|item| LowStockRow {
                    id: item.id.get(),
                    name: item.name.clone(),
                    location: item
                        .location
                        .clone()
                        .unwrap_or_else(|| "No location".to_string()),
                    quantity: item.quantity,
                    threshold: item.low_stock_threshold,
                })
                .collect(),
        }
    }

    fn failed(message: String) -> Self {
        Self {
            error: message,
            total_items: 0,
            total_devices: 0,
            total_parts: 0,
            available_count: 0,
            status_rows: Vec::new(),
            low_stock: Vec::new(),
        }
    }
}

/// Possible responses from the home page.
pub enum HomeResponse {
    Ok(HomeTemplate),
    Failed(StatusCode, HomeTemplate),
}

impl IntoResponse for HomeResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(page) => Html(page.to_string()).into_response(),
            Self::Failed(status, page) => (status, Html(page.to_string())).into_response(),
        }
    }
}

/// `GET /`: inventory overview.
pub async fn index<R>(State(state): State<AppState<R>>) -> HomeResponse
where
    R: ItemRepository + Send + Sync + 'static,
{
    match state.item_service.dashboard().await {
        Ok(stats) => HomeResponse::Ok(HomeTemplate::loaded(&stats)),
        Err(err) => {
            let (status, message) = ApiError::from(err).status_and_message();
            HomeResponse::Failed(status, HomeTemplate::failed(message))
        }
    }
}
