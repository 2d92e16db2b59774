//! Flat view models handed to the templates.

use url::form_urlencoded;

use stockroom_domain::filter::ItemFilter;
use stockroom_domain::form::ItemForm;
use stockroom_domain::id::ItemId;
use stockroom_domain::item::{Item, ItemKind, ItemStatus};
use stockroom_domain::presentation::Badge;
use stockroom_domain::time::display_date;

pub(crate) struct BadgeView {
    pub label: &'static str,
    pub class: &'static str,
}

impl From<Badge> for BadgeView {
    fn from(badge: Badge) -> Self {
        Self {
            label: badge.label,
            class: badge.tone.css_class(),
        }
    }
}

/// One card in the inventory grid.
pub(crate) struct ItemCard {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub kind: BadgeView,
    pub status: BadgeView,
    pub is_part: bool,
    pub low_stock: bool,
    pub quantity: u32,
    pub threshold: u32,
    pub notes: String,
    pub updated: String,
}

impl From<&Item> for ItemCard {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.get(),
            name: item.name.clone(),
            location: item.location.clone().unwrap_or_default(),
            kind: item.kind.badge().into(),
            status: item.status.badge().into(),
            is_part: item.kind == ItemKind::Part,
            low_stock: item.is_low_stock(),
            quantity: item.quantity,
            threshold: item.low_stock_threshold,
            notes: item.notes.clone().unwrap_or_default(),
            updated: display_date(&item.updated_at),
        }
    }
}

pub(crate) struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Options for the type filter, led by an "All Types" entry.
pub(crate) fn kind_filter_options(selected: Option<ItemKind>) -> Vec<SelectOption> {
    let mut options = vec![SelectOption {
        value: "",
        label: "All Types",
        selected: selected.is_none(),
    }];
    options.extend(ItemKind::ALL.into_iter().map(|kind| SelectOption {
        value: kind.as_str(),
        label: kind.plural_label(),
        selected: selected == Some(kind),
    }));
    options
}

/// Options for the status filter, led by an "All Status" entry.
pub(crate) fn status_filter_options(selected: Option<ItemStatus>) -> Vec<SelectOption> {
    let mut options = vec![SelectOption {
        value: "",
        label: "All Status",
        selected: selected.is_none(),
    }];
    options.extend(ItemStatus::ALL.into_iter().map(|status| SelectOption {
        value: status.as_str(),
        label: status.badge().label,
        selected: selected == Some(status),
    }));
    options
}

/// The item form as rendered, either for creating or for editing.
pub(crate) struct FormView {
    pub title: &'static str,
    pub action: String,
    pub submit_label: &'static str,
    pub values: ItemForm,
    pub kind_options: Vec<SelectOption>,
    pub status_options: Vec<SelectOption>,
    pub error: String,
}

impl FormView {
    /// The create form posts back to the filtered list it was opened from.
    pub(crate) fn create(filter: &ItemFilter, values: ItemForm, error: Option<String>) -> Self {
        Self::build(
            "Add Item",
            inventory_href(filter, false),
            "Create",
            values,
            error,
        )
    }

    pub(crate) fn edit(id: ItemId, values: ItemForm, error: Option<String>) -> Self {
        Self::build(
            "Edit Item",
            format!("/inventory/{id}"),
            "Save Changes",
            values,
            error,
        )
    }

    fn build(
        title: &'static str,
        action: String,
        submit_label: &'static str,
        values: ItemForm,
        error: Option<String>,
    ) -> Self {
        let kind_options = ItemKind::ALL
            .into_iter()
            .map(|kind| SelectOption {
                value: kind.as_str(),
                label: kind.badge().label,
                selected: values.kind == kind.as_str(),
            })
            .collect();
        let status_options = ItemStatus::ALL
            .into_iter()
            .map(|status| SelectOption {
                value: status.as_str(),
                label: status.badge().label,
                selected: values.status == status.as_str(),
            })
            .collect();
        Self {
            title,
            action,
            submit_label,
            values,
            kind_options,
            status_options,
            error: error.unwrap_or_default(),
        }
    }
}

/// Inventory URL carrying the given filters, optionally opening the form.
pub(crate) fn inventory_href(filter: &ItemFilter, show_form: bool) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
        query.append_pair("search", search);
    }
    if let Some(kind) = filter.kind {
        query.append_pair("type", kind.as_str());
    }
    if let Some(status) = filter.status {
        query.append_pair("status", status.as_str());
    }
    if show_form {
        query.append_pair("showForm", "true");
    }
    let query = query.finish();
    if query.is_empty() {
        "/inventory".to_string()
    } else {
        format!("/inventory?{query}")
    }
}
