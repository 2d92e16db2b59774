//! Inventory pages: filtered item grid, create/edit forms and delete confirmation.

use askama::Template;
use axum::extract::rejection::PathRejection;
use axum::extract::{Form, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;

use stockroom_app::ports::ItemRepository;
use stockroom_domain::error::StockroomError;
use stockroom_domain::filter::{ItemFilter, Pagination};
use stockroom_domain::form::ItemForm;
use stockroom_domain::id::ItemId;
use stockroom_domain::presentation::{delete_prompt, empty_state_hint, results_summary};

use super::DashboardError;
use super::views::{
    FormView, ItemCard, SelectOption, inventory_href, kind_filter_options, status_filter_options,
};
use crate::error::ApiError;
use crate::state::AppState;

/// Query string of the inventory page. Filters live in the URL so a
/// filtered view can be bookmarked and shared.
#[derive(Debug, Default, Deserialize)]
pub struct InventoryParams {
    pub search: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "showForm")]
    pub show_form: Option<String>,
}

impl InventoryParams {
    /// Unknown `type`/`status` values in a hand-edited URL are dropped
    /// rather than rejected.
    fn filter(&self) -> ItemFilter {
        ItemFilter {
            search: self.search.clone(),
            kind: self.kind.as_deref().and_then(|raw| raw.parse().ok()),
            status: self.status.as_deref().and_then(|raw| raw.parse().ok()),
            location: None,
        }
        .normalized()
    }

    fn show_form(&self) -> bool {
        self.show_form.as_deref() == Some("true")
    }
}

/// Inventory list page template.
#[derive(Template)]
#[template(path = "inventory.html")]
pub struct InventoryTemplate {
    search: String,
    kind_options: Vec<SelectOption>,
    status_options: Vec<SelectOption>,
    has_filters: bool,
    add_href: String,
    summary: String,
    error: String,
    cards: Vec<ItemCard>,
    empty_hint: &'static str,
    show_form: bool,
    form: FormView,
}

impl InventoryTemplate {
    async fn load<R>(state: &AppState<R>, filter: &ItemFilter, form: Option<FormView>) -> Self
    where
        R: ItemRepository + Send + Sync + 'static,
    {
        let has_filters = filter.is_active();
        let (cards, error): (Vec<ItemCard>, String) = match state
            .item_service
            .list_items(filter.clone(), Pagination::default())
            .await
        {
            Ok(items) => (items.iter().map(ItemCard::from).collect(), String::new()),
            Err(err) => {
                let (_, message) = ApiError::from(err).status_and_message();
                (Vec::new(), message)
            }
        };

        Self {
            search: filter.search.clone().unwrap_or_default(),
            kind_options: kind_filter_options(filter.kind),
            status_options: status_filter_options(filter.status),
            has_filters,
            add_href: inventory_href(filter, true),
            summary: results_summary(cards.len()),
            error,
            cards,
            empty_hint: empty_state_hint(has_filters),
            show_form: form.is_some(),
            form: form.unwrap_or_else(|| FormView::create(filter, ItemForm::default(), None)),
        }
    }
}

/// Edit page template.
#[derive(Template)]
#[template(path = "edit.html")]
pub struct EditTemplate {
    form: FormView,
}

/// Delete confirmation page template.
#[derive(Template)]
#[template(path = "confirm_delete.html")]
pub struct ConfirmDeleteTemplate {
    id: i64,
    prompt: String,
}

/// Response from the form handlers (PRG pattern).
pub enum SubmitResponse {
    /// Saved; go back to the list.
    Redirect(Redirect),
    /// Rejected input; show the inventory page again with the form open.
    InvalidCreate(Box<InventoryTemplate>),
    /// Rejected input; show the edit page again.
    InvalidEdit(Box<EditTemplate>),
}

impl IntoResponse for SubmitResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Redirect(redirect) => redirect.into_response(),
            Self::InvalidCreate(page) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Html(page.to_string())).into_response()
            }
            Self::InvalidEdit(page) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Html(page.to_string())).into_response()
            }
        }
    }
}

impl IntoResponse for InventoryTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

impl IntoResponse for EditTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

impl IntoResponse for ConfirmDeleteTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Split a submission failure into "show the form again" or "error page".
fn rejection_message(err: StockroomError) -> Result<String, DashboardError> {
    match err {
        StockroomError::Validation(err) => Ok(err.to_string()),
        other => Err(other.into()),
    }
}

/// `GET /inventory`: filtered item grid, optionally with the create form open.
pub async fn list<R>(
    State(state): State<AppState<R>>,
    Query(params): Query<InventoryParams>,
) -> InventoryTemplate
where
    R: ItemRepository + Send + Sync + 'static,
{
    let filter = params.filter();
    let form = params
        .show_form()
        .then(|| FormView::create(&filter, ItemForm::default(), None));
    InventoryTemplate::load(&state, &filter, form).await
}

/// `POST /inventory`: create an item (PRG). The query string carries the
/// filters of the page the form was opened from.
pub async fn create<R>(
    State(state): State<AppState<R>>,
    Query(params): Query<InventoryParams>,
    Form(values): Form<ItemForm>,
) -> Result<SubmitResponse, DashboardError>
where
    R: ItemRepository + Send + Sync + 'static,
{
    let filter = params.filter();
    let message = match values.to_new_item() {
        Ok(new_item) => match state.item_service.create_item(new_item).await {
            Ok(_) => {
                let back = inventory_href(&filter, false);
                return Ok(SubmitResponse::Redirect(Redirect::to(&back)));
            }
            Err(err) => rejection_message(err)?,
        },
        Err(err) => err.message,
    };

    let form = FormView::create(&filter, values, Some(message));
    let page = InventoryTemplate::load(&state, &filter, Some(form)).await;
    Ok(SubmitResponse::InvalidCreate(Box::new(page)))
}

/// `GET /inventory/:id/edit`: edit form prefilled from the stored item.
pub async fn edit<R>(
    State(state): State<AppState<R>>,
    id: Result<Path<ItemId>, PathRejection>,
) -> Result<EditTemplate, DashboardError>
where
    R: ItemRepository + Send + Sync + 'static,
{
    let Path(id) = id?;
    let item = state.item_service.get_item(id).await?;
    Ok(EditTemplate {
        form: FormView::edit(id, ItemForm::from_item(&item), None),
    })
}

/// `POST /inventory/:id`: save the edit form (PRG).
pub async fn update<R>(
    State(state): State<AppState<R>>,
    id: Result<Path<ItemId>, PathRejection>,
    Form(values): Form<ItemForm>,
) -> Result<SubmitResponse, DashboardError>
where
    R: ItemRepository + Send + Sync + 'static,
{
    let Path(id) = id?;
    let message = match values.to_update() {
        Ok(update) => match state.item_service.update_item(id, update).await {
            Ok(_) => return Ok(SubmitResponse::Redirect(Redirect::to("/inventory"))),
            Err(err) => rejection_message(err)?,
        },
        Err(err) => err.message,
    };

    Ok(SubmitResponse::InvalidEdit(Box::new(EditTemplate {
        form: FormView::edit(id, values, Some(message)),
    })))
}

/// `GET /inventory/:id/delete`: ask before deleting.
pub async fn confirm_delete<R>(
    State(state): State<AppState<R>>,
    id: Result<Path<ItemId>, PathRejection>,
) -> Result<ConfirmDeleteTemplate, DashboardError>
where
    R: ItemRepository + Send + Sync + 'static,
{
    let Path(id) = id?;
    let item = state.item_service.get_item(id).await?;
    Ok(ConfirmDeleteTemplate {
        id: id.get(),
        prompt: delete_prompt(&item.name),
    })
}

/// `POST /inventory/:id/delete`: delete then return to the list (PRG).
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    id: Result<Path<ItemId>, PathRejection>,
) -> Result<SubmitResponse, DashboardError>
where
    R: ItemRepository + Send + Sync + 'static,
{
    let Path(id) = id?;
    state.item_service.delete_item(id).await?;
    Ok(SubmitResponse::Redirect(Redirect::to("/inventory")))
}
