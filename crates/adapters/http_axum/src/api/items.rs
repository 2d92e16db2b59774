//! JSON REST handlers for items.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use stockroom_app::ports::ItemRepository;
use stockroom_domain::error::ValidationError;
use stockroom_domain::filter::{ItemFilter, Pagination};
use stockroom_domain::id::ItemId;
use stockroom_domain::item::{Item, ItemKind, ItemStatus, ItemUpdate, NewItem};

use crate::error::ApiError;
use crate::state::AppState;

/// Query string accepted by the list endpoint.
///
/// `type` and `status` arrive as raw text so that a blank value can be
/// ignored while an unknown one is rejected.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub status: Option<String>,
    pub location: Option<String>,
}

impl ListParams {
    fn into_parts(self) -> Result<(ItemFilter, Pagination), ValidationError> {
        let page = Pagination::new(
            self.skip.unwrap_or(0),
            self.limit.unwrap_or(Pagination::DEFAULT_LIMIT),
        )?;
        let filter = ItemFilter {
            search: self.search,
            kind: parse_non_blank::<ItemKind>(self.kind)?,
            status: parse_non_blank::<ItemStatus>(self.status)?,
            location: self.location,
        };
        Ok((filter, page))
    }
}

fn parse_non_blank<T>(value: Option<String>) -> Result<Option<T>, ValidationError>
where
    T: std::str::FromStr<Err = ValidationError>,
{
    value
        .filter(|raw| !raw.trim().is_empty())
        .map(|raw| raw.trim().parse())
        .transpose()
}

/// Body of a successful delete.
#[derive(Serialize)]
pub struct DeletedBody {
    pub message: &'static str,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Item>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum ItemResponse {
    Ok(Json<Item>),
}

impl IntoResponse for ItemResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Item>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Deleted,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Deleted => Json(DeletedBody {
                message: "Item deleted successfully",
            })
            .into_response(),
        }
    }
}

/// `GET /api/items`
pub async fn list<R>(
    State(state): State<AppState<R>>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<ListResponse, ApiError>
where
    R: ItemRepository + Send + Sync + 'static,
{
    let Query(params) = params?;
    let (filter, page) = params.into_parts()?;
    let items = state.item_service.list_items(filter, page).await?;
    Ok(ListResponse::Ok(Json(items)))
}

/// `GET /api/items/:id`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    id: Result<Path<ItemId>, PathRejection>,
) -> Result<ItemResponse, ApiError>
where
    R: ItemRepository + Send + Sync + 'static,
{
    let Path(id) = id?;
    let item = state.item_service.get_item(id).await?;
    Ok(ItemResponse::Ok(Json(item)))
}

/// `POST /api/items`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    body: Result<Json<NewItem>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    R: ItemRepository + Send + Sync + 'static,
{
    let Json(new_item) = body?;
    let created = state.item_service.create_item(new_item).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/items/:id`
pub async fn update<R>(
    State(state): State<AppState<R>>,
    id: Result<Path<ItemId>, PathRejection>,
    body: Result<Json<ItemUpdate>, JsonRejection>,
) -> Result<ItemResponse, ApiError>
where
    R: ItemRepository + Send + Sync + 'static,
{
    let Path(id) = id?;
    let Json(update) = body?;
    let item = state.item_service.update_item(id, update).await?;
    Ok(ItemResponse::Ok(Json(item)))
}

/// `DELETE /api/items/:id`
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    id: Result<Path<ItemId>, PathRejection>,
) -> Result<DeleteResponse, ApiError>
where
    R: ItemRepository + Send + Sync + 'static,
{
    let Path(id) = id?;
    state.item_service.delete_item(id).await?;
    Ok(DeleteResponse::Deleted)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;
    use stockroom_domain::item::{ItemKind, ItemStatus, NewItem};

    use crate::test_support::{
        app_with, body_json, get, json_request, memory_state, seed, send,
    };

    fn part(name: &str, quantity: u32) -> NewItem {
        NewItem::builder()
            .name(name)
            .kind(ItemKind::Part)
            .quantity(quantity)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_item_with_defaults_and_return_201() {
        let response = send(
            app_with(memory_state()),
            json_request("POST", "/api/items", &json!({"name": "Chromebook"})),
        )
        .await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["id"], 1);
        assert_eq!(body["type"], "device");
        assert_eq!(body["status"], "available");
        assert_eq!(body["quantity"], 1);
        assert_eq!(body["low_stock_threshold"], 5);
        assert_eq!(body["location"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn should_reject_blank_name_with_400() {
        let response = send(
            app_with(memory_state()),
            json_request("POST", "/api/items", &json!({"name": "  "})),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["detail"], "Name must not be empty");
    }

    #[tokio::test]
    async fn should_reject_malformed_body_with_422_detail() {
        let response = send(
            app_with(memory_state()),
            json_request("POST", "/api/items", &json!({"name": "X", "quantity": -3})),
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body_json(response).await["detail"].is_string());
    }

    #[tokio::test]
    async fn should_return_404_detail_when_item_missing() {
        let response = get(app_with(memory_state()), "/api/items/42").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({"detail": "Item not found"}));
    }

    #[tokio::test]
    async fn should_reject_non_numeric_id_with_422() {
        let response = get(app_with(memory_state()), "/api/items/abc").await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn should_filter_list_by_search_and_type() {
        let state = memory_state();
        seed(&state, part("USB cable", 10)).await;
        seed(&state, NewItem::builder().name("USB hub").build().unwrap()).await;
        seed(&state, part("Toner", 10)).await;

        let body = body_json(get(app_with(state), "/api/items?search=usb&type=part").await).await;

        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["USB cable"]);
    }

    #[tokio::test]
    async fn should_ignore_blank_type_and_status() {
        let state = memory_state();
        seed(&state, part("Toner", 10)).await;

        let response = get(app_with(state), "/api/items?type=&status=").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_reject_unknown_status_with_400() {
        let response = get(app_with(memory_state()), "/api/items?status=lost").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["detail"],
            "Unknown item status: lost"
        );
    }

    #[tokio::test]
    async fn should_reject_limit_out_of_range() {
        let response = get(app_with(memory_state()), "/api/items?limit=0").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_apply_skip_and_limit() {
        let state = memory_state();
        for name in ["A", "B", "C"] {
            seed(&state, part(name, 10)).await;
        }

        let body = body_json(get(app_with(state), "/api/items?skip=1&limit=1").await).await;

        assert_eq!(body.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_update_only_sent_fields() {
        let state = memory_state();
        let created = seed(
            &state,
            NewItem::builder()
                .name("Laptop")
                .location("Desk 4")
                .build()
                .unwrap(),
        )
        .await;

        let response = send(
            app_with(state),
            json_request(
                "PUT",
                &format!("/api/items/{}", created.id),
                &json!({"status": "checked_out"}),
            ),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], ItemStatus::CheckedOut.as_str());
        assert_eq!(body["location"], "Desk 4");
        assert_eq!(body["name"], "Laptop");
    }

    #[tokio::test]
    async fn should_clear_location_when_update_sends_null() {
        let state = memory_state();
        let created = seed(
            &state,
            NewItem::builder()
                .name("Laptop")
                .location("Room 1")
                .build()
                .unwrap(),
        )
        .await;

        let response = send(
            app_with(state),
            json_request(
                "PUT",
                &format!("/api/items/{}", created.id),
                &json!({"location": null}),
            ),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["location"].is_null());
        assert_eq!(body["name"], "Laptop");
    }

    #[tokio::test]
    async fn should_return_404_when_updating_missing_item() {
        let response = send(
            app_with(memory_state()),
            json_request("PUT", "/api/items/9", &json!({"name": "Ghost"})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_confirm_delete_then_404_on_repeat() {
        let state = memory_state();
        let created = seed(&state, part("Toner", 1)).await;
        let uri = format!("/api/items/{}", created.id);

        let first = send(
            app_with(state.clone()),
            json_request("DELETE", &uri, &json!(null)),
        )
        .await;
        assert_eq!(first.status(), StatusCode::OK);
        assert_eq!(
            body_json(first).await,
            json!({"message": "Item deleted successfully"})
        );

        let second = send(app_with(state), json_request("DELETE", &uri, &json!(null))).await;
        assert_eq!(second.status(), StatusCode::NOT_FOUND);
    }
}
