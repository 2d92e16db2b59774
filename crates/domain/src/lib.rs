//! # stockroom-domain
//!
//! Pure domain model for the stockroom inventory tracker.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Items** (devices and spare parts) and their create/update payloads
//! - Define the **low-stock** rule and **dashboard statistics** derived from it
//! - Define **filters** and pagination for item listings
//! - Map the closed enumerations to display **badges**
//! - Validate raw **item form** input before it becomes a payload
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` and `client` crates.

pub mod error;
pub mod id;
pub mod time;

pub mod dashboard;
pub mod filter;
pub mod form;
pub mod item;
pub mod presentation;
