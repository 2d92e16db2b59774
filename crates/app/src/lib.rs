//! # stockroom-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ItemRepository`: CRUD, filtered listing and location lookup for items
//! - Define **driving/inbound ports** as use-case structs:
//!   - `ItemService`: create, update, delete, list, dashboard, locations
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `stockroom-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
