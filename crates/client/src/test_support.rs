//! Shared test fixtures: a stub HTTP backend and a scripted in-memory API.

use std::collections::HashSet;
use std::future::Future;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::http::{Method, StatusCode, Uri, header};
use serde_json::json;

use stockroom_domain::dashboard::DashboardStats;
use stockroom_domain::filter::ItemFilter;
use stockroom_domain::id::ItemId;
use stockroom_domain::item::{Item, ItemUpdate, NewItem};
use stockroom_domain::time::now;

use crate::api::InventoryApi;
use crate::error::RequestError;
use crate::query::encode_filter;

/// What the stub backend saw.
#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    /// `METHOD /path?query`
    pub line: String,
    pub body: String,
}

/// An axum server on `127.0.0.1:0` answering every request with one fixed
/// status and body, recording each request it receives.
pub(crate) struct StubServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubServer {
    pub(crate) async fn start(status: StatusCode, body: impl Into<String>) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);
        let response_body: String = body.into();

        let app = Router::new().fallback(move |method: Method, uri: Uri, body: String| {
            let recorded = Arc::clone(&recorded);
            let response_body = response_body.clone();
            async move {
                recorded.lock().unwrap().push(RecordedRequest {
                    line: format!("{method} {uri}"),
                    body,
                });
                (
                    status,
                    [(header::CONTENT_TYPE, "application/json")],
                    response_body,
                )
            }
        });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}/api"),
            requests,
        }
    }

    pub(crate) fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn request_lines(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.line).collect()
    }
}

/// JSON for a device as the backend would return it.
pub(crate) fn item_json(id: i64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "type": "device",
        "location": null,
        "status": "available",
        "quantity": 1,
        "low_stock_threshold": 5,
        "notes": null,
        "created_at": "2026-01-15T09:30:00Z",
        "updated_at": "2026-01-15T09:30:00Z",
    })
}

#[derive(Default)]
struct FakeState {
    items: Vec<Item>,
    next_id: i64,
    calls: Vec<String>,
    failing: HashSet<&'static str>,
}

/// In-memory [`InventoryApi`] that logs every call and can be told to fail
/// specific operations. Clones share state.
#[derive(Clone, Default)]
pub(crate) struct FakeApi {
    state: Arc<Mutex<FakeState>>,
}

pub(crate) const FAKE_FAILURE: &str = "Backend unavailable";

impl FakeApi {
    pub(crate) fn with_items(items: impl IntoIterator<Item = NewItem>) -> Self {
        let api = Self::default();
        {
            let mut state = api.state.lock().unwrap();
            for new_item in items {
                state.next_id += 1;
                let item = new_item.into_item(ItemId::new(state.next_id), now());
                state.items.push(item);
            }
        }
        api
    }

    /// Make `operation` (a trait method name) fail from now on.
    pub(crate) fn fail(&self, operation: &'static str) {
        self.state.lock().unwrap().failing.insert(operation);
    }

    /// Let `operation` succeed again.
    pub(crate) fn recover(&self, operation: &'static str) {
        self.state.lock().unwrap().failing.remove(operation);
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub(crate) fn count(&self, operation: &str) -> usize {
        self.calls()
            .iter()
            .filter(|call| call.split(' ').next() == Some(operation))
            .count()
    }

    pub(crate) fn items(&self) -> Vec<Item> {
        self.state.lock().unwrap().items.clone()
    }

    fn call<T>(
        &self,
        operation: &'static str,
        detail: String,
        run: impl FnOnce(&mut FakeState) -> Option<T>,
    ) -> Result<T, RequestError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(format!("{operation} {detail}").trim_end().to_string());
        if state.failing.contains(operation) {
            return Err(RequestError::new(FAKE_FAILURE));
        }
        run(&mut *state).ok_or_else(|| RequestError::new("Item not found"))
    }
}

impl InventoryApi for FakeApi {
    fn fetch_dashboard(
        &self,
    ) -> impl Future<Output = Result<DashboardStats, RequestError>> + Send {
        let result = self.call("fetch_dashboard", String::new(), |state| {
            Some(DashboardStats::from_items(&state.items))
        });
        async move { result }
    }

    fn fetch_items(
        &self,
        filter: &ItemFilter,
    ) -> impl Future<Output = Result<Vec<Item>, RequestError>> + Send {
        let result = self.call("fetch_items", encode_filter(filter), |state| {
            Some(
                state
                    .items
                    .iter()
                    .filter(|item| filter.matches(item))
                    .cloned()
                    .collect(),
            )
        });
        async move { result }
    }

    fn fetch_item(&self, id: ItemId) -> impl Future<Output = Result<Item, RequestError>> + Send {
        let result = self.call("fetch_item", id.to_string(), |state| {
            state.items.iter().find(|item| item.id == id).cloned()
        });
        async move { result }
    }

    fn create_item(
        &self,
        payload: NewItem,
    ) -> impl Future<Output = Result<Item, RequestError>> + Send {
        let result = self.call("create_item", payload.name.clone(), |state| {
            state.next_id += 1;
            let item = payload.into_item(ItemId::new(state.next_id), now());
            state.items.push(item.clone());
            Some(item)
        });
        async move { result }
    }

    fn update_item(
        &self,
        id: ItemId,
        payload: ItemUpdate,
    ) -> impl Future<Output = Result<Item, RequestError>> + Send {
        let result = self.call("update_item", id.to_string(), |state| {
            let item = state.items.iter_mut().find(|item| item.id == id)?;
            payload.apply_to(item);
            item.updated_at = now();
            Some(item.clone())
        });
        async move { result }
    }

    fn delete_item(&self, id: ItemId) -> impl Future<Output = Result<(), RequestError>> + Send {
        let result = self.call("delete_item", id.to_string(), |state| {
            let before = state.items.len();
            state.items.retain(|item| item.id != id);
            (state.items.len() < before).then_some(())
        });
        async move { result }
    }

    fn fetch_locations(&self) -> impl Future<Output = Result<Vec<String>, RequestError>> + Send {
        let result = self.call("fetch_locations", String::new(), |state| {
            let mut locations: Vec<String> = state
                .items
                .iter()
                .filter_map(|item| item.location.clone())
                .collect();
            locations.sort();
            locations.dedup();
            Some(locations)
        });
        async move { result }
    }
}
