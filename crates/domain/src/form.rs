//! Raw item form: the text a user typed, before it becomes a payload.
//!
//! Both the HTML dashboard and the terminal client collect item fields as
//! strings. [`ItemForm`] keeps them verbatim so a rejected submission can be
//! shown again exactly as entered, and converts them into [`NewItem`] or
//! [`ItemUpdate`] once every field checks out.

use serde::{Deserialize, Serialize};

use crate::item::{
    DEFAULT_LOW_STOCK_THRESHOLD, DEFAULT_QUANTITY, Item, ItemKind, ItemStatus, ItemUpdate,
    LOCATION_MAX_LEN, NAME_MAX_LEN, NOTES_MAX_LEN, NewItem,
};

/// A field of [`ItemForm`] failed client-side validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FormError {
    /// Wire name of the offending field.
    pub field: &'static str,
    pub message: String,
}

impl FormError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Item fields as entered, keyed by their wire names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemForm {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub location: String,
    pub quantity: String,
    pub low_stock_threshold: String,
    pub notes: String,
}

impl Default for ItemForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: ItemKind::default().as_str().to_string(),
            status: ItemStatus::default().as_str().to_string(),
            location: String::new(),
            quantity: DEFAULT_QUANTITY.to_string(),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD.to_string(),
            notes: String::new(),
        }
    }
}

impl ItemForm {
    /// Prefill the form from an existing item, for editing.
    #[must_use]
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            kind: item.kind.as_str().to_string(),
            status: item.status.as_str().to_string(),
            location: item.location.clone().unwrap_or_default(),
            quantity: item.quantity.to_string(),
            low_stock_threshold: item.low_stock_threshold.to_string(),
            notes: item.notes.clone().unwrap_or_default(),
        }
    }

    /// Validate every field and build a creation payload.
    ///
    /// # Errors
    ///
    /// Returns the first [`FormError`] found, in field order.
    pub fn to_new_item(&self) -> Result<NewItem, FormError> {
        let fields = self.parse()?;
        Ok(NewItem {
            name: fields.name,
            kind: fields.kind,
            location: fields.location,
            status: fields.status,
            quantity: fields.quantity,
            low_stock_threshold: fields.low_stock_threshold,
            notes: fields.notes,
        })
    }

    /// Validate every field and build a full update.
    ///
    /// Blank optional fields are sent as empty strings so the backend
    /// clears them instead of keeping the old value.
    ///
    /// # Errors
    ///
    /// Returns the first [`FormError`] found, in field order.
    pub fn to_update(&self) -> Result<ItemUpdate, FormError> {
        let fields = self.parse()?;
        Ok(ItemUpdate {
            name: Some(fields.name),
            kind: Some(fields.kind),
            location: Some(fields.location.unwrap_or_default()),
            status: Some(fields.status),
            quantity: Some(fields.quantity),
            low_stock_threshold: Some(fields.low_stock_threshold),
            notes: Some(fields.notes.unwrap_or_default()),
        })
    }

    fn parse(&self) -> Result<ParsedFields, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::new("name", "Name is required"));
        }
        check_len("name", "Name", name, NAME_MAX_LEN)?;

        let kind = self
            .kind
            .trim()
            .parse::<ItemKind>()
            .map_err(|err| FormError::new("type", err.to_string()))?;
        let status = self
            .status
            .trim()
            .parse::<ItemStatus>()
            .map_err(|err| FormError::new("status", err.to_string()))?;

        let location = optional_text(&self.location);
        if let Some(location) = &location {
            check_len("location", "Location", location, LOCATION_MAX_LEN)?;
        }

        let quantity = parse_count("quantity", "Quantity", &self.quantity)?;
        let low_stock_threshold = parse_count(
            "low_stock_threshold",
            "Low stock threshold",
            &self.low_stock_threshold,
        )?;

        let notes = optional_text(&self.notes);
        if let Some(notes) = &notes {
            check_len("notes", "Notes", notes, NOTES_MAX_LEN)?;
        }

        Ok(ParsedFields {
            name: name.to_string(),
            kind,
            status,
            location,
            quantity,
            low_stock_threshold,
            notes,
        })
    }
}

struct ParsedFields {
    name: String,
    kind: ItemKind,
    status: ItemStatus,
    location: Option<String>,
    quantity: u32,
    low_stock_threshold: u32,
    notes: Option<String>,
}

fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn check_len(field: &'static str, label: &str, value: &str, max: usize) -> Result<(), FormError> {
    if value.chars().count() > max {
        return Err(FormError::new(
            field,
            format!("{label} must be at most {max} characters"),
        ));
    }
    Ok(())
}

fn parse_count(field: &'static str, label: &str, value: &str) -> Result<u32, FormError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| {
            FormError::new(
                field,
                format!("{label} must be a whole number of 0 or more"),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::tests::item;

    fn filled() -> ItemForm {
        ItemForm {
            name: "  HDMI cable ".to_string(),
            kind: "part".to_string(),
            quantity: "12".to_string(),
            location: "Drawer 3".to_string(),
            ..ItemForm::default()
        }
    }

    #[test]
    fn should_start_with_creation_defaults() {
        let form = ItemForm::default();
        assert_eq!(form.kind, "device");
        assert_eq!(form.status, "available");
        assert_eq!(form.quantity, "1");
        assert_eq!(form.low_stock_threshold, "5");
    }

    #[test]
    fn should_build_trimmed_new_item() {
        let new_item = filled().to_new_item().unwrap();
        assert_eq!(new_item.name, "HDMI cable");
        assert_eq!(new_item.kind, ItemKind::Part);
        assert_eq!(new_item.quantity, 12);
        assert_eq!(new_item.location.as_deref(), Some("Drawer 3"));
        assert_eq!(new_item.notes, None);
    }

    #[test]
    fn should_require_a_name() {
        let form = ItemForm {
            name: "   ".to_string(),
            ..filled()
        };
        let err = form.to_new_item().unwrap_err();
        assert_eq!(err.field, "name");
        assert_eq!(err.to_string(), "Name is required");
    }

    #[test]
    fn should_reject_negative_quantity() {
        let form = ItemForm {
            quantity: "-1".to_string(),
            ..filled()
        };
        let err = form.to_new_item().unwrap_err();
        assert_eq!(err.field, "quantity");
    }

    #[test]
    fn should_reject_unknown_status() {
        let form = ItemForm {
            status: "lost".to_string(),
            ..filled()
        };
        assert_eq!(form.to_new_item().unwrap_err().field, "status");
    }

    #[test]
    fn should_reject_notes_over_limit() {
        let form = ItemForm {
            notes: "n".repeat(NOTES_MAX_LEN + 1),
            ..filled()
        };
        let err = form.to_new_item().unwrap_err();
        assert_eq!(err.field, "notes");
        assert_eq!(err.to_string(), "Notes must be at most 500 characters");
    }

    #[test]
    fn should_send_blank_optional_fields_as_clearing_update() {
        let form = ItemForm {
            location: "  ".to_string(),
            ..filled()
        };
        let update = form.to_update().unwrap();
        assert_eq!(update.location.as_deref(), Some(""));
        assert_eq!(update.notes.as_deref(), Some(""));

        let mut target = item(1, ItemKind::Part, ItemStatus::Available, 2);
        target.location = Some("Old shelf".to_string());
        update.apply_to(&mut target);
        assert_eq!(target.location, None);
        assert_eq!(target.quantity, 12);
    }

    #[test]
    fn should_prefill_from_existing_item() {
        let mut source = item(4, ItemKind::Part, ItemStatus::CheckedOut, 7);
        source.notes = Some("Loaned to Room 12".to_string());
        let form = ItemForm::from_item(&source);
        assert_eq!(form.status, "checked_out");
        assert_eq!(form.quantity, "7");
        assert_eq!(form.location, "");
        assert_eq!(form.notes, "Loaned to Room 12");
    }
}
