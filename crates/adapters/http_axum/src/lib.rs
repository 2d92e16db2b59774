//! # stockroom-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON REST API** under `/api` (`/api/items`, `/api/dashboard`,
//!   `/api/locations`)
//! - Serve a **server-side-rendered HTML dashboard** that works with
//!   **zero JavaScript**: the filter bar is a `GET` form so filters live in
//!   the URL, and create/edit/delete are `<form>` posts followed by a redirect
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses (JSON or HTML)
//!
//! ## Dependency rule
//! Depends on `stockroom-app` (for port traits and services) and `stockroom-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;
