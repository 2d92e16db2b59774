//! Query string codecs.
//!
//! Two related encodings live here: the list query sent to `GET /items`,
//! and the inventory page URL (`search`, `type`, `status`, `showForm`) that
//! mirrors the page's filters so a link reproduces the same view.

use url::form_urlencoded;

use stockroom_domain::filter::ItemFilter;
use stockroom_domain::item::{ItemKind, ItemStatus};

/// Query string for `GET /items`, including the leading `?`.
///
/// Set, non-blank fields are written in the order `search`, `type`,
/// `status`, `location`. Returns an empty string when nothing is set.
#[must_use]
pub fn encode_filter(filter: &ItemFilter) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    if let Some(search) = non_blank(filter.search.as_deref()) {
        query.append_pair("search", search);
    }
    if let Some(kind) = filter.kind {
        query.append_pair("type", kind.as_str());
    }
    if let Some(status) = filter.status {
        query.append_pair("status", status.as_str());
    }
    if let Some(location) = non_blank(filter.location.as_deref()) {
        query.append_pair("location", location);
    }
    let query = query.finish();
    if query.is_empty() {
        query
    } else {
        format!("?{query}")
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// State carried by the inventory page URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryQuery {
    pub search: String,
    pub kind: Option<ItemKind>,
    pub status: Option<ItemStatus>,
    /// Open the create form on arrival.
    pub show_form: bool,
}

impl InventoryQuery {
    /// Read a query string, with or without its leading `?`.
    ///
    /// Unknown keys and unrecognised `type`/`status` values are ignored, so
    /// a stale or hand-edited link still opens the page.
    #[must_use]
    pub fn decode(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut decoded = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "search" => decoded.search = value.into_owned(),
                "type" => decoded.kind = value.parse().ok(),
                "status" => decoded.status = value.parse().ok(),
                "showForm" => decoded.show_form = value == "true",
                _ => {}
            }
        }
        decoded
    }

    /// Write the query string, without a leading `?`.
    #[must_use]
    pub fn encode(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        if !self.search.trim().is_empty() {
            query.append_pair("search", &self.search);
        }
        if let Some(kind) = self.kind {
            query.append_pair("type", kind.as_str());
        }
        if let Some(status) = self.status {
            query.append_pair("status", status.as_str());
        }
        if self.show_form {
            query.append_pair("showForm", "true");
        }
        query.finish()
    }

    /// The item filter this URL asks for.
    #[must_use]
    pub fn filter(&self) -> ItemFilter {
        ItemFilter {
            search: Some(self.search.clone()),
            kind: self.kind,
            status: self.status,
            location: None,
        }
        .normalized()
    }
}
