//! In-memory repository and request helpers for router tests.

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Mutex;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use tower::ServiceExt;

use stockroom_app::ports::ItemRepository;
use stockroom_app::services::item_service::ItemService;
use stockroom_domain::error::StockroomError;
use stockroom_domain::filter::{ItemFilter, Pagination};
use stockroom_domain::id::ItemId;
use stockroom_domain::item::{Item, NewItem};
use stockroom_domain::time::Timestamp;

use crate::state::AppState;

#[derive(Default)]
pub(crate) struct MemoryRepo {
    store: Mutex<BTreeMap<ItemId, Item>>,
}

impl ItemRepository for MemoryRepo {
    fn create(
        &self,
        item: NewItem,
        created_at: Timestamp,
    ) -> impl Future<Output = Result<Item, StockroomError>> + Send {
        let mut store = self.store.lock().unwrap();
        let next = store.keys().last().map_or(1, |id| id.get() + 1);
        let item = item.into_item(ItemId::new(next), created_at);
        store.insert(item.id, item.clone());
        async move { Ok(item) }
    }

    fn get_by_id(
        &self,
        id: ItemId,
    ) -> impl Future<Output = Result<Option<Item>, StockroomError>> + Send {
        let found = self.store.lock().unwrap().get(&id).cloned();
        async move { Ok(found) }
    }

    fn list(
        &self,
        filter: &ItemFilter,
        page: Option<Pagination>,
    ) -> impl Future<Output = Result<Vec<Item>, StockroomError>> + Send {
        let mut items: Vec<Item> = self
            .store
            .lock()
            .unwrap()
            .values()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect();
        items.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(b.id.cmp(&a.id)));
        if let Some(page) = page {
            items = items
                .into_iter()
                .skip(page.skip as usize)
                .take(page.limit as usize)
                .collect();
        }
        async move { Ok(items) }
    }

    fn update(&self, item: Item) -> impl Future<Output = Result<Item, StockroomError>> + Send {
        self.store.lock().unwrap().insert(item.id, item.clone());
        async move { Ok(item) }
    }

    fn delete(&self, id: ItemId) -> impl Future<Output = Result<bool, StockroomError>> + Send {
        let removed = self.store.lock().unwrap().remove(&id).is_some();
        async move { Ok(removed) }
    }

    fn distinct_locations(
        &self,
    ) -> impl Future<Output = Result<Vec<String>, StockroomError>> + Send {
        let mut locations: Vec<String> = self
            .store
            .lock()
            .unwrap()
            .values()
            .filter_map(|item| item.location.clone())
            .collect();
        locations.sort();
        locations.dedup();
        async move { Ok(locations) }
    }
}

/// Repository whose every call fails, for error-path tests.
pub(crate) struct BrokenRepo;

fn broken() -> StockroomError {
    StockroomError::Storage("database is locked".into())
}

impl ItemRepository for BrokenRepo {
    fn create(
        &self,
        _item: NewItem,
        _created_at: Timestamp,
    ) -> impl Future<Output = Result<Item, StockroomError>> + Send {
        async { Err(broken()) }
    }

    fn get_by_id(
        &self,
        _id: ItemId,
    ) -> impl Future<Output = Result<Option<Item>, StockroomError>> + Send {
        async { Err(broken()) }
    }

    fn list(
        &self,
        _filter: &ItemFilter,
        _page: Option<Pagination>,
    ) -> impl Future<Output = Result<Vec<Item>, StockroomError>> + Send {
        async { Err(broken()) }
    }

    fn update(&self, _item: Item) -> impl Future<Output = Result<Item, StockroomError>> + Send {
        async { Err(broken()) }
    }

    fn delete(&self, _id: ItemId) -> impl Future<Output = Result<bool, StockroomError>> + Send {
        async { Err(broken()) }
    }

    fn distinct_locations(
        &self,
    ) -> impl Future<Output = Result<Vec<String>, StockroomError>> + Send {
        async { Err(broken()) }
    }
}

pub(crate) fn memory_state() -> AppState<MemoryRepo> {
    AppState::new(ItemService::new(MemoryRepo::default()))
}

pub(crate) fn app_with(state: AppState<MemoryRepo>) -> Router {
    crate::router::build(state, &[])
}

pub(crate) fn broken_app() -> Router {
    crate::router::build(AppState::new(ItemService::new(BrokenRepo)), &[])
}

pub(crate) async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub(crate) async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub(crate) async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub(crate) async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub(crate) fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub(crate) fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub(crate) async fn seed(state: &AppState<MemoryRepo>, item: NewItem) -> Item {
    state.item_service.create_item(item).await.unwrap()
}
