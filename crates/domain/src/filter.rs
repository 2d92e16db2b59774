//! Item filter and pagination.

use crate::error::ValidationError;
use crate::item::{Item, ItemKind, ItemStatus};

/// Narrows an item listing. Every criterion is optional; set criteria are
/// combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    /// Case-insensitive substring matched against name, location or notes.
    pub search: Option<String>,
    pub kind: Option<ItemKind>,
    pub status: Option<ItemStatus>,
    /// Case-insensitive substring matched against the location.
    pub location: Option<String>,
}

impl ItemFilter {
    /// Drop blank text criteria so that `Some("")` behaves like `None`.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            search: self.search.filter(|s| !s.trim().is_empty()),
            kind: self.kind,
            status: self.status,
            location: self.location.filter(|s| !s.trim().is_empty()),
        }
    }

    /// Whether any criterion is set.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.clone().normalized() != Self::default()
    }

    /// Reference semantics of the filter, evaluated in memory.
    #[must_use]
    pub fn matches(&self, item: &Item) -> bool {
        let contains = |haystack: Option<&str>, needle: &str| {
            haystack.is_some_and(|h| h.to_lowercase().contains(&needle.to_lowercase()))
        };

        let search_hit = self
            .search
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .is_none_or(|search| {
                contains(Some(&item.name), search)
                    || contains(item.location.as_deref(), search)
                    || contains(item.notes.as_deref(), search)
            });
        let location_hit = self
            .location
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .is_none_or(|location| contains(item.location.as_deref(), location));

        search_hit
            && location_hit
            && self.kind.is_none_or(|kind| kind == item.kind)
            && self.status.is_none_or(|status| status == item.status)
    }
}

/// Offset/limit window over a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub skip: u32,
    pub limit: u32,
}

impl Pagination {
    /// Largest page a caller may request.
    pub const MAX_LIMIT: u32 = 1000;
    /// Page size used when the caller does not ask for one.
    pub const DEFAULT_LIMIT: u32 = 100;

    /// Build a window, rejecting a limit outside `1..=MAX_LIMIT`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPagination`] for an out-of-range limit.
    pub fn new(skip: u32, limit: u32) -> Result<Self, ValidationError> {
        if limit == 0 || limit > Self::MAX_LIMIT {
            return Err(ValidationError::InvalidPagination {
                max: Self::MAX_LIMIT,
            });
        }
        Ok(Self { skip, limit })
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}
