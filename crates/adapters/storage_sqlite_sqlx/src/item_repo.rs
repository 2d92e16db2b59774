//! `SQLite` implementation of [`ItemRepository`].

use std::future::Future;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, QueryBuilder, Row, Sqlite, SqlitePool};

use stockroom_app::ports::ItemRepository;
use stockroom_domain::error::{NotFoundError, StockroomError};
use stockroom_domain::filter::{ItemFilter, Pagination};
use stockroom_domain::id::ItemId;
use stockroom_domain::item::{Item, ItemKind, ItemStatus, NewItem};
use stockroom_domain::time::{Timestamp, to_sortable};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Item`].
struct Wrapper(Item);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Item> {
        value.map(|w| w.0)
    }
}

fn not_found(id: ItemId) -> StockroomError {
    NotFoundError {
        entity: "Item",
        id: id.to_string(),
    }
    .into()
}

fn decode_err(err: impl std::error::Error + Send + Sync + 'static) -> sqlx::Error {
    sqlx::Error::Decode(Box::new(err))
}

fn parse_timestamp(value: &str) -> Result<Timestamp, sqlx::Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(decode_err)
}

fn parse_count(value: i64) -> Result<u32, sqlx::Error> {
    u32::try_from(value).map_err(decode_err)
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let kind: String = row.try_get("type")?;
        let location: Option<String> = row.try_get("location")?;
        let status: String = row.try_get("status")?;
        let quantity: i64 = row.try_get("quantity")?;
        let low_stock_threshold: i64 = row.try_get("low_stock_threshold")?;
        let notes: Option<String> = row.try_get("notes")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        Ok(Self(Item {
            id: ItemId::new(id),
            name,
            kind: kind.parse::<ItemKind>().map_err(decode_err)?,
            location,
            status: status.parse::<ItemStatus>().map_err(decode_err)?,
            quantity: parse_count(quantity)?,
            low_stock_threshold: parse_count(low_stock_threshold)?,
            notes,
            created_at: parse_timestamp(&created_at)?,
            updated_at: parse_timestamp(&updated_at)?,
        }))
    }
}

const INSERT: &str = "INSERT INTO items (name, type, location, status, quantity, low_stock_threshold, notes, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM items WHERE id = ?";
const UPDATE: &str = "UPDATE items SET name = ?, type = ?, location = ?, status = ?, quantity = ?, low_stock_threshold = ?, notes = ?, updated_at = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM items WHERE id = ?";
const SELECT_LOCATIONS: &str = "SELECT DISTINCT location FROM items WHERE location IS NOT NULL AND location <> '' ORDER BY location";

/// Turn user text into a `LIKE` pattern matching it as a plain substring.
fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn build_list_query(
    filter: &ItemFilter,
    page: Option<Pagination>,
) -> QueryBuilder<'static, Sqlite> {
    let mut qb = QueryBuilder::new("SELECT * FROM items WHERE 1 = 1");

    if let Some(search) = &filter.search {
        let pattern = like_pattern(search);
        qb.push(" AND (name LIKE ")
            .push_bind(pattern.clone())
            .push(" ESCAPE '\\' OR location LIKE ")
            .push_bind(pattern.clone())
            .push(" ESCAPE '\\' OR notes LIKE ")
            .push_bind(pattern)
            .push(" ESCAPE '\\')");
    }
    if let Some(kind) = filter.kind {
        qb.push(" AND type = ").push_bind(kind.as_str());
    }
    if let Some(status) = filter.status {
        qb.push(" AND status = ").push_bind(status.as_str());
    }
    if let Some(location) = &filter.location {
        qb.push(" AND location LIKE ")
            .push_bind(like_pattern(location))
            .push(" ESCAPE '\\'");
    }

    qb.push(" ORDER BY updated_at DESC, id DESC");

    if let Some(page) = page {
        qb.push(" LIMIT ")
            .push_bind(i64::from(page.limit))
            .push(" OFFSET ")
            .push_bind(i64::from(page.skip));
    }

    qb
}

/// `SQLite`-backed item repository.
pub struct SqliteItemRepository {
    pool: SqlitePool,
}

impl SqliteItemRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ItemRepository for SqliteItemRepository {
    fn create(
        &self,
        item: NewItem,
        created_at: Timestamp,
    ) -> impl Future<Output = Result<Item, StockroomError>> + Send {
        let pool = self.pool.clone();
        async move {
            let stamp = to_sortable(&created_at);
            let result = sqlx::query(INSERT)
                .bind(&item.name)
                .bind(item.kind.as_str())
                .bind(&item.location)
                .bind(item.status.as_str())
                .bind(i64::from(item.quantity))
                .bind(i64::from(item.low_stock_threshold))
                .bind(&item.notes)
                .bind(&stamp)
                .bind(&stamp)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(item.into_item(ItemId::new(result.last_insert_rowid()), created_at))
        }
    }

    fn get_by_id(
        &self,
        id: ItemId,
    ) -> impl Future<Output = Result<Option<Item>, StockroomError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn list(
        &self,
        filter: &ItemFilter,
        page: Option<Pagination>,
    ) -> impl Future<Output = Result<Vec<Item>, StockroomError>> + Send {
        let pool = self.pool.clone();
        let mut qb = build_list_query(&filter.clone().normalized(), page);
        async move {
            let rows: Vec<Wrapper> = qb
                .build_query_as()
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(&self, item: Item) -> impl Future<Output = Result<Item, StockroomError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(&item.name)
                .bind(item.kind.as_str())
                .bind(&item.location)
                .bind(item.status.as_str())
                .bind(i64::from(item.quantity))
                .bind(i64::from(item.low_stock_threshold))
                .bind(&item.notes)
                .bind(to_sortable(&item.updated_at))
                .bind(item.id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(not_found(item.id));
            }
            Ok(item)
        }
    }

    fn delete(&self, id: ItemId) -> impl Future<Output = Result<bool, StockroomError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }

    fn distinct_locations(
        &self,
    ) -> impl Future<Output = Result<Vec<String>, StockroomError>> + Send {
        let pool = self.pool.clone();
        async move {
            let locations: Vec<String> = sqlx::query_scalar(SELECT_LOCATIONS)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(locations)
        }
    }
}
