//! Storage port: repository traits for persistence.

use std::future::Future;

use stockroom_domain::error::StockroomError;
use stockroom_domain::filter::{ItemFilter, Pagination};
use stockroom_domain::id::ItemId;
use stockroom_domain::item::{Item, NewItem};
use stockroom_domain::time::Timestamp;

/// Repository for persisting and querying [`Item`]s.
pub trait ItemRepository {
    /// Insert a new item, letting storage assign its id.
    ///
    /// `created_at` is also used as the initial `updated_at`.
    fn create(
        &self,
        item: NewItem,
        created_at: Timestamp,
    ) -> impl Future<Output = Result<Item, StockroomError>> + Send;

    /// Get an item by its identifier.
    fn get_by_id(
        &self,
        id: ItemId,
    ) -> impl Future<Output = Result<Option<Item>, StockroomError>> + Send;

    /// List items matching `filter`, most recently updated first.
    ///
    /// `None` pagination returns every match.
    fn list(
        &self,
        filter: &ItemFilter,
        page: Option<Pagination>,
    ) -> impl Future<Output = Result<Vec<Item>, StockroomError>> + Send;

    /// Persist every field of an existing item.
    ///
    /// Fails with [`StockroomError::NotFound`] when the item no longer exists.
    fn update(&self, item: Item) -> impl Future<Output = Result<Item, StockroomError>> + Send;

    /// Delete an item. Returns `false` when nothing was stored under `id`.
    fn delete(&self, id: ItemId) -> impl Future<Output = Result<bool, StockroomError>> + Send;

    /// Distinct non-empty locations, sorted alphabetically.
    fn distinct_locations(
        &self,
    ) -> impl Future<Output = Result<Vec<String>, StockroomError>> + Send;
}
