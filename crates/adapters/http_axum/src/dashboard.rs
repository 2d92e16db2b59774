//! Server-side rendered HTML dashboard (no JavaScript).
//!
//! Forms use POST + redirect (PRG pattern) to avoid double-submission.

pub mod home;
#[allow(clippy::missing_errors_doc)]
pub mod inventory;
mod views;

use askama::Template;
use axum::Router;
use axum::extract::rejection::PathRejection;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};

use stockroom_app::ports::ItemRepository;
use stockroom_domain::error::StockroomError;

use crate::error::ApiError;
use crate::state::AppState;

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: ItemRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(home::index::<R>))
        .route(
            "/inventory",
            get(inventory::list::<R>).post(inventory::create::<R>),
        )
        .route("/inventory/{id}", post(inventory::update::<R>))
        .route("/inventory/{id}/edit", get(inventory::edit::<R>))
        .route(
            "/inventory/{id}/delete",
            get(inventory::confirm_delete::<R>).post(inventory::delete::<R>),
        )
}

/// Error page template.
#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    status: u16,
    message: String,
}

/// A failure that ends a dashboard request on the error page.
#[derive(Debug)]
pub struct DashboardError(ApiError);

impl From<StockroomError> for DashboardError {
    fn from(err: StockroomError) -> Self {
        Self(ApiError::from(err))
    }
}

impl From<PathRejection> for DashboardError {
    fn from(rejection: PathRejection) -> Self {
        Self(ApiError::from(rejection))
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let (status, message) = self.0.status_and_message();
        let page = ErrorTemplate {
            status: status.as_u16(),
            message,
        };
        (status, Html(page.to_string())).into_response()
    }
}
