//! Items: tracked devices and spare parts.
//!
//! An [`Item`] is what the backend stores and returns. [`NewItem`] is the
//! creation payload and [`ItemUpdate`] the partial-update payload; neither
//! carries an identifier or timestamps, which the backend assigns.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{StockroomError, ValidationError};
use crate::id::ItemId;
use crate::time::Timestamp;

/// Maximum length of [`Item::name`], in characters.
pub const NAME_MAX_LEN: usize = 100;
/// Maximum length of [`Item::location`], in characters.
pub const LOCATION_MAX_LEN: usize = 100;
/// Maximum length of [`Item::notes`], in characters.
pub const NOTES_MAX_LEN: usize = 500;

/// Quantity of a new item when none is given.
pub const DEFAULT_QUANTITY: u32 = 1;
/// Low-stock threshold of a new item when none is given.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 5;

/// What kind of thing an item is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    #[default]
    Device,
    Part,
}

impl ItemKind {
    /// Every variant, in display order.
    pub const ALL: [Self; 2] = [Self::Device, Self::Part];

    /// Wire name, as used in JSON bodies and query strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Device => "device",
            Self::Part => "part",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "device" => Ok(Self::Device),
            "part" => Ok(Self::Part),
            other => Err(ValidationError::InvalidKind(other.to_owned())),
        }
    }
}

/// Operational status of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    #[default]
    Available,
    InUse,
    Broken,
    CheckedOut,
}

impl ItemStatus {
    /// Every variant, in the order the inventory filter lists them.
    pub const ALL: [Self; 4] = [Self::Available, Self::InUse, Self::CheckedOut, Self::Broken];

    /// Wire name, as used in JSON bodies and query strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::InUse => "in_use",
            Self::Broken => "broken",
            Self::CheckedOut => "checked_out",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "in_use" => Ok(Self::InUse),
            "broken" => Ok(Self::Broken),
            "checked_out" => Ok(Self::CheckedOut),
            other => Err(ValidationError::InvalidStatus(other.to_owned())),
        }
    }
}

/// A tracked physical object, as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub location: Option<String>,
    pub status: ItemStatus,
    pub quantity: u32,
    pub low_stock_threshold: u32,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Item {
    /// Whether this item should raise a low-stock alert.
    ///
    /// Only parts are stock-tracked; a device is never low on stock whatever
    /// its quantity and threshold say.
    #[must_use]
    pub fn is_low_stock(&self) -> bool {
        is_low_stock(self.kind, self.quantity, self.low_stock_threshold)
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`StockroomError::Validation`] when the name is blank or a
    /// text field exceeds its maximum length.
    pub fn validate(&self) -> Result<(), StockroomError> {
        validate_fields(&self.name, self.location.as_deref(), self.notes.as_deref())
    }
}

/// Low-stock rule: a part whose quantity has fallen to or below its threshold.
#[must_use]
pub fn is_low_stock(kind: ItemKind, quantity: u32, threshold: u32) -> bool {
    kind == ItemKind::Part && quantity <= threshold
}

fn validate_fields(
    name: &str,
    location: Option<&str>,
    notes: Option<&str>,
) -> Result<(), StockroomError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName.into());
    }
    check_len("name", name, NAME_MAX_LEN)?;
    if let Some(location) = location {
        check_len("location", location, LOCATION_MAX_LEN)?;
    }
    if let Some(notes) = notes {
        check_len("notes", notes, NOTES_MAX_LEN)?;
    }
    Ok(())
}

fn check_len(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

fn default_quantity() -> u32 {
    DEFAULT_QUANTITY
}

fn default_low_stock_threshold() -> u32 {
    DEFAULT_LOW_STOCK_THRESHOLD
}

/// Creation payload for an [`Item`].
///
/// Absent JSON fields fall back to the same defaults the builder uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: ItemKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub status: ItemStatus,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl NewItem {
    /// Create a builder for constructing a [`NewItem`].
    #[must_use]
    pub fn builder() -> NewItemBuilder {
        NewItemBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`StockroomError::Validation`] when the name is blank or a
    /// text field exceeds its maximum length.
    pub fn validate(&self) -> Result<(), StockroomError> {
        validate_fields(&self.name, self.location.as_deref(), self.notes.as_deref())
    }

    /// Materialize the stored item once the backend has assigned an id.
    #[must_use]
    pub fn into_item(self, id: ItemId, created_at: Timestamp) -> Item {
        Item {
            id,
            name: self.name,
            kind: self.kind,
            location: self.location,
            status: self.status,
            quantity: self.quantity,
            low_stock_threshold: self.low_stock_threshold,
            notes: self.notes,
            created_at,
            updated_at: created_at,
        }
    }
}

/// Step-by-step builder for [`NewItem`].
#[derive(Debug, Default)]
pub struct NewItemBuilder {
    name: Option<String>,
    kind: Option<ItemKind>,
    location: Option<String>,
    status: Option<ItemStatus>,
    quantity: Option<u32>,
    low_stock_threshold: Option<u32>,
    notes: Option<String>,
}

impl NewItemBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: ItemKind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn status(mut self, status: ItemStatus) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    #[must_use]
    pub fn low_stock_threshold(mut self, threshold: u32) -> Self {
        self.low_stock_threshold = Some(threshold);
        self
    }

    #[must_use]
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Consume the builder, validate, and return a [`NewItem`].
    ///
    /// # Errors
    ///
    /// Returns [`StockroomError::Validation`] if `name` is missing or blank,
    /// or a text field is too long.
    pub fn build(self) -> Result<NewItem, StockroomError> {
        let item = NewItem {
            name: self.name.unwrap_or_default(),
            kind: self.kind.unwrap_or_default(),
            location: self.location,
            status: self.status.unwrap_or_default(),
            quantity: self.quantity.unwrap_or(DEFAULT_QUANTITY),
            low_stock_threshold: self
                .low_stock_threshold
                .unwrap_or(DEFAULT_LOW_STOCK_THRESHOLD),
            notes: self.notes,
        };
        item.validate()?;
        Ok(item)
    }
}

/// Partial update for an [`Item`]. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ItemKind>,
    /// A blank string or an explicit `null` clears the location.
    #[serde(
        default,
        deserialize_with = "null_as_blank",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ItemStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_stock_threshold: Option<u32>,
    /// A blank string or an explicit `null` clears the notes.
    #[serde(
        default,
        deserialize_with = "null_as_blank",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<String>,
}

impl ItemUpdate {
    /// Whether the update would change nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overwrite the fields of `item` that this update specifies.
    ///
    /// Does not touch `updated_at`; stamping is the caller's concern.
    pub fn apply_to(self, item: &mut Item) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(kind) = self.kind {
            item.kind = kind;
        }
        if let Some(location) = self.location {
            item.location = non_blank(location);
        }
        if let Some(status) = self.status {
            item.status = status;
        }
        if let Some(quantity) = self.quantity {
            item.quantity = quantity;
        }
        if let Some(threshold) = self.low_stock_threshold {
            item.low_stock_threshold = threshold;
        }
        if let Some(notes) = self.notes {
            item.notes = non_blank(notes);
        }
    }
}

/// Only called for keys present in the payload; an explicit `null` becomes
/// a blank string so it clears the field like `""` does.
fn null_as_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Some(Option::<String>::deserialize(deserializer)?.unwrap_or_default()))
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
