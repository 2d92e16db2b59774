//! # stockroom-client
//!
//! Client side of stockroom: everything a front-end needs to talk to the
//! REST API and keep page state, independent of how it renders.
//!
//! ## Modules
//! - [`api`]: the [`InventoryApi`](api::InventoryApi) port
//! - [`http`]: reqwest implementation of the port
//! - [`error`]: [`RequestError`](error::RequestError), the single failure type
//! - [`query`]: list query and inventory URL codecs
//! - [`form`]: item form parsing from `key=value&...` text
//! - [`pages`]: dashboard and inventory page state machines
//!
//! ## Dependency rule
//! Depends on `stockroom-domain` for the wire types. Never on the app or
//! adapter crates: the server is reached over HTTP only.

pub mod api;
pub mod error;
pub mod form;
pub mod http;
pub mod pages;
pub mod query;

#[cfg(test)]
pub(crate) mod test_support;
