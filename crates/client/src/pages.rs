//! Page-level state machines.
//!
//! A page owns its [`InventoryApi`](crate::api::InventoryApi) handle and is
//! driven through `&mut self`, so each command runs to completion before the
//! next one starts and the last response always wins.

pub mod dashboard;
pub mod inventory;

/// Progress of a load that either fully succeeds or fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    Loading,
    /// Human-readable reason, shown in a page banner.
    Failed(String),
    Loaded(T),
}

impl<T> LoadState<T> {
    #[must_use]
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            Self::Loading | Self::Failed(_) => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
