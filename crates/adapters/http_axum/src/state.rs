//! Shared application state for axum handlers.

use std::sync::Arc;

use stockroom_app::ports::ItemRepository;
use stockroom_app::services::item_service::ItemService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not
/// need to be `Clone`; only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Item use-cases.
    pub item_service: Arc<ItemService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            item_service: Arc::clone(&self.item_service),
        }
    }
}

impl<R> AppState<R>
where
    R: ItemRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(item_service: ItemService<R>) -> Self {
        Self {
            item_service: Arc::new(item_service),
        }
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    ///
    /// Use this when the service is also needed outside the HTTP layer,
    /// e.g. for seeding at startup.
    pub fn from_arc(item_service: Arc<ItemService<R>>) -> Self {
        Self { item_service }
    }
}
