//! Item service: use-cases for managing the inventory.

use stockroom_domain::dashboard::DashboardStats;
use stockroom_domain::error::{NotFoundError, StockroomError};
use stockroom_domain::filter::{ItemFilter, Pagination};
use stockroom_domain::id::ItemId;
use stockroom_domain::item::{Item, ItemUpdate, NewItem};
use stockroom_domain::time::now;

use crate::ports::ItemRepository;

/// Application service for item CRUD, listing and aggregate views.
pub struct ItemService<R> {
    repo: R,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List items matching `filter`, most recently updated first.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_items(
        &self,
        filter: ItemFilter,
        page: Pagination,
    ) -> Result<Vec<Item>, StockroomError> {
        self.repo.list(&filter.normalized(), Some(page)).await
    }

    /// Look up an item by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`StockroomError::NotFound`] when no item with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_item(&self, id: ItemId) -> Result<Item, StockroomError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Create a new item after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`StockroomError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, item), fields(item_name = %item.name))]
    pub async fn create_item(&self, item: NewItem) -> Result<Item, StockroomError> {
        item.validate()?;
        let created = self.repo.create(item, now()).await?;
        tracing::info!(item_id = %created.id, "item created");
        Ok(created)
    }

    /// Apply a partial update to an existing item and stamp `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`StockroomError::NotFound`] if the item does not exist,
    /// [`StockroomError::Validation`] if the result breaks an invariant, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, update))]
    pub async fn update_item(
        &self,
        id: ItemId,
        update: ItemUpdate,
    ) -> Result<Item, StockroomError> {
        let mut item = self.get_item(id).await?;
        update.apply_to(&mut item);
        item.validate()?;
        item.updated_at = now();
        self.repo.update(item).await
    }

    /// Delete an item by id.
    ///
    /// # Errors
    ///
    /// Returns [`StockroomError::NotFound`] if the item does not exist, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_item(&self, id: ItemId) -> Result<(), StockroomError> {
        if self.repo.delete(id).await? {
            tracing::info!(item_id = %id, "item deleted");
            Ok(())
        } else {
            Err(not_found(id))
        }
    }

    /// Compute the dashboard snapshot over every stored item.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn dashboard(&self) -> Result<DashboardStats, StockroomError> {
        let items = self.repo.list(&ItemFilter::default(), None).await?;
        Ok(DashboardStats::from_items(&items))
    }

    /// Distinct known locations, for filter dropdowns.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn locations(&self) -> Result<Vec<String>, StockroomError> {
        self.repo.distinct_locations().await
    }
}

fn not_found(id: ItemId) -> StockroomError {
    NotFoundError {
        entity: "Item",
        id: id.to_string(),
    }
    .into()
}
