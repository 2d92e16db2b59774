//! Inventory page: filtered item list, create/edit form and deletion.
//!
//! Front-ends translate user gestures into [`InventoryCommand`] values and
//! hand them to [`InventoryPage::dispatch`]. The page talks to the API,
//! updates its state and keeps [`InventoryPage::location`] in step with the
//! filters so the URL can be rewritten after every change.

use stockroom_domain::filter::ItemFilter;
use stockroom_domain::form::{FormError, ItemForm};
use stockroom_domain::item::{Item, ItemKind, ItemStatus};
use stockroom_domain::presentation::{delete_prompt, empty_state_hint, results_summary};

use crate::api::InventoryApi;
use crate::error::RequestError;
use crate::query::InventoryQuery;

/// Asks the user before a destructive action.
pub trait Confirm {
    /// Return `true` to go ahead.
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Current filter inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search: String,
    pub kind: Option<ItemKind>,
    pub status: Option<ItemStatus>,
}

impl FilterState {
    /// The filter sent with the list request.
    #[must_use]
    pub fn to_filter(&self) -> ItemFilter {
        ItemFilter {
            search: Some(self.search.clone()),
            kind: self.kind,
            status: self.status,
            location: None,
        }
        .normalized()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.to_filter().is_active()
    }
}

/// Whether the item form is shown, and for what.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Closed,
    Creating,
    Editing(Item),
}

/// Everything a user can ask of the inventory page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryCommand {
    SetSearch(String),
    SetType(Option<ItemKind>),
    SetStatus(Option<ItemStatus>),
    ClearFilters,
    OpenCreateForm,
    Edit(Item),
    CancelForm,
    /// Submit the open form, creating or updating depending on [`FormState`].
    Submit(ItemForm),
    /// Delete after asking for confirmation.
    Delete(Item),
    Reload,
    DismissAlert,
}

/// What the item area of the page should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryView<'a> {
    Loading,
    Failed(&'a str),
    Empty { filtered: bool },
    Items(&'a [Item]),
}

/// Copy for the empty view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyState {
    pub hint: &'static str,
    /// Offer an "Add Item" call-to-action.
    pub add_item: bool,
}

impl InventoryView<'_> {
    #[must_use]
    pub fn empty_state(&self) -> Option<EmptyState> {
        match *self {
            Self::Empty { filtered } => Some(EmptyState {
                hint: empty_state_hint(filtered),
                add_item: !filtered,
            }),
            Self::Loading | Self::Failed(_) | Self::Items(_) => None,
        }
    }
}

/// State behind the inventory view.
pub struct InventoryPage<A> {
    api: A,
    items: Vec<Item>,
    loading: bool,
    error: Option<String>,
    filters: FilterState,
    form: FormState,
    alert: Option<String>,
    location: InventoryQuery,
}

impl<A: InventoryApi> InventoryPage<A> {
    /// Build the page from its URL query.
    ///
    /// The query seeds the filters; `showForm=true` opens the create form
    /// and is then dropped from [`location`](Self::location).
    pub fn from_query(api: A, query: &InventoryQuery) -> Self {
        let filters = FilterState {
            search: query.search.clone(),
            kind: query.kind,
            status: query.status,
        };
        let form = if query.show_form {
            FormState::Creating
        } else {
            FormState::Closed
        };
        let mut page = Self {
            api,
            items: Vec::new(),
            loading: true,
            error: None,
            filters,
            form,
            alert: None,
            location: InventoryQuery::default(),
        };
        page.sync_location();
        page
    }

    /// Initial load.
    pub async fn load(&mut self) {
        self.reload().await;
    }

    /// Apply one command.
    ///
    /// `confirm` is consulted only for [`InventoryCommand::Delete`].
    #[tracing::instrument(skip_all)]
    pub async fn dispatch<C: Confirm + ?Sized>(
        &mut self,
        command: InventoryCommand,
        confirm: &mut C,
    ) {
        match command {
            InventoryCommand::SetSearch(search) => {
                self.filters.search = search;
                self.filters_changed().await;
            }
            InventoryCommand::SetType(kind) => {
                self.filters.kind = kind;
                self.filters_changed().await;
            }
            InventoryCommand::SetStatus(status) => {
                self.filters.status = status;
                self.filters_changed().await;
            }
            InventoryCommand::ClearFilters => {
                self.filters = FilterState::default();
                self.filters_changed().await;
            }
            InventoryCommand::OpenCreateForm => self.form = FormState::Creating,
            InventoryCommand::Edit(item) => self.form = FormState::Editing(item),
            InventoryCommand::CancelForm => self.form = FormState::Closed,
            InventoryCommand::Submit(values) => self.submit(&values).await,
            InventoryCommand::Delete(item) => self.delete(&item, confirm).await,
            InventoryCommand::Reload => self.reload().await,
            InventoryCommand::DismissAlert => self.alert = None,
        }
    }

    async fn filters_changed(&mut self) {
        self.sync_location();
        self.reload().await;
    }

    fn sync_location(&mut self) {
        self.location = InventoryQuery {
            search: self.filters.search.clone(),
            kind: self.filters.kind,
            status: self.filters.status,
            show_form: false,
        };
    }

    async fn reload(&mut self) {
        self.loading = true;
        let filter = self.filters.to_filter();
        match self.api.fetch_items(&filter).await {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(err) => self.error = Some(err.message),
        }
        self.loading = false;
    }

    async fn submit(&mut self, values: &ItemForm) {
        let result = match &self.form {
            FormState::Closed => return,
            FormState::Creating => match values.to_new_item() {
                Ok(payload) => self.api.create_item(payload).await,
                Err(err) => Err(invalid(err)),
            },
            FormState::Editing(item) => match values.to_update() {
                Ok(payload) => self.api.update_item(item.id, payload).await,
                Err(err) => Err(invalid(err)),
            },
        };
        match result {
            Ok(saved) => {
                tracing::debug!(id = %saved.id, "item saved");
                self.form = FormState::Closed;
                self.alert = None;
                self.reload().await;
            }
            Err(err) => self.alert = Some(err.message),
        }
    }

    async fn delete<C: Confirm + ?Sized>(&mut self, item: &Item, confirm: &mut C) {
        if !confirm.confirm(&delete_prompt(&item.name)) {
            return;
        }
        match self.api.delete_item(item.id).await {
            Ok(()) => {
                if matches!(&self.form, FormState::Editing(open) if open.id == item.id) {
                    self.form = FormState::Closed;
                }
                self.reload().await;
            }
            Err(err) => self.alert = Some(err.message),
        }
    }

    /// What the item area should show right now.
    #[must_use]
    pub fn view(&self) -> InventoryView<'_> {
        if self.loading {
            InventoryView::Loading
        } else if let Some(message) = &self.error {
            InventoryView::Failed(message)
        } else if self.items.is_empty() {
            InventoryView::Empty {
                filtered: self.filters.is_active(),
            }
        } else {
            InventoryView::Items(&self.items)
        }
    }

    /// "N item(s) found" for the current list.
    #[must_use]
    pub fn summary(&self) -> String {
        results_summary(self.items.len())
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    #[must_use]
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Result of the last failed mutation, until dismissed.
    #[must_use]
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// URL query matching the current filters.
    #[must_use]
    pub fn location(&self) -> &InventoryQuery {
        &self.location
    }
}

fn invalid(err: FormError) -> RequestError {
    RequestError {
        message: err.message,
    }
}
