//! Display labels, colour tones and the fixed copy shared by every renderer.
//!
//! The badge mappings are exhaustive `match`es without a wildcard arm, so a
//! new [`ItemStatus`] or [`ItemKind`] variant fails to compile until it is
//! given a badge.

use crate::item::{ItemKind, ItemStatus};

/// Colour family of a badge. Renderers translate it to their own styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Green,
    Blue,
    Red,
    Yellow,
    Purple,
    Gray,
}

impl Tone {
    /// CSS class used by the HTML dashboard.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Green => "badge-green",
            Self::Blue => "badge-blue",
            Self::Red => "badge-red",
            Self::Yellow => "badge-yellow",
            Self::Purple => "badge-purple",
            Self::Gray => "badge-gray",
        }
    }
}

/// A label/tone pair rendered as a small pill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Badge {
    pub label: &'static str,
    pub tone: Tone,
}

impl ItemStatus {
    #[must_use]
    pub const fn badge(self) -> Badge {
        match self {
            Self::Available => Badge {
                label: "Available",
                tone: Tone::Green,
            },
            Self::InUse => Badge {
                label: "In Use",
                tone: Tone::Blue,
            },
            Self::Broken => Badge {
                label: "Broken",
                tone: Tone::Red,
            },
            Self::CheckedOut => Badge {
                label: "Checked Out",
                tone: Tone::Yellow,
            },
        }
    }
}

impl ItemKind {
    #[must_use]
    pub const fn badge(self) -> Badge {
        match self {
            Self::Device => Badge {
                label: "Device",
                tone: Tone::Purple,
            },
            Self::Part => Badge {
                label: "Part",
                tone: Tone::Gray,
            },
        }
    }

    /// Plural heading used by filters and summaries ("Devices", "Parts").
    #[must_use]
    pub const fn plural_label(self) -> &'static str {
        match self {
            Self::Device => "Devices",
            Self::Part => "Parts",
        }
    }
}

/// Results line above the item grid: "1 item found", "3 items found".
#[must_use]
pub fn results_summary(count: usize) -> String {
    let noun = if count == 1 { "item" } else { "items" };
    format!("{count} {noun} found")
}

/// Hint shown when a listing comes back empty.
///
/// With filters applied the user is nudged to change them; otherwise the
/// inventory is genuinely empty and the hint invites a first item.
#[must_use]
pub const fn empty_state_hint(filtered: bool) -> &'static str {
    if filtered {
        "Try adjusting your filters."
    } else {
        "Get started by adding your first item."
    }
}

/// Confirmation question asked before deleting an item.
#[must_use]
pub fn delete_prompt(name: &str) -> String {
    format!("Are you sure you want to delete \"{name}\"?")
}
