//! API port: what a front-end can ask the backend.

use std::future::Future;

use stockroom_domain::dashboard::DashboardStats;
use stockroom_domain::filter::ItemFilter;
use stockroom_domain::id::ItemId;
use stockroom_domain::item::{Item, ItemUpdate, NewItem};

use crate::error::RequestError;

/// Remote inventory operations.
///
/// Implementations never retry and never recover: every failure is handed
/// back as a [`RequestError`] for the caller to present.
pub trait InventoryApi {
    /// Aggregate counts and low-stock parts.
    fn fetch_dashboard(
        &self,
    ) -> impl Future<Output = Result<DashboardStats, RequestError>> + Send;

    /// Items matching `filter`, in the order the backend returns them.
    fn fetch_items(
        &self,
        filter: &ItemFilter,
    ) -> impl Future<Output = Result<Vec<Item>, RequestError>> + Send;

    fn fetch_item(&self, id: ItemId) -> impl Future<Output = Result<Item, RequestError>> + Send;

    fn create_item(
        &self,
        payload: NewItem,
    ) -> impl Future<Output = Result<Item, RequestError>> + Send;

    /// Send only the fields set in `payload`.
    fn update_item(
        &self,
        id: ItemId,
        payload: ItemUpdate,
    ) -> impl Future<Output = Result<Item, RequestError>> + Send;

    fn delete_item(&self, id: ItemId) -> impl Future<Output = Result<(), RequestError>> + Send;

    /// Distinct locations in use, sorted.
    fn fetch_locations(&self) -> impl Future<Output = Result<Vec<String>, RequestError>> + Send;
}
