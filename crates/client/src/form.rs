//! Item form input as `key=value&...` text.
//!
//! Terminal front-ends take the form in the same encoding an HTML form
//! posts, e.g. `name=Toner&type=part&quantity=4`.

use url::form_urlencoded;

pub use stockroom_domain::form::{FormError, ItemForm};

/// Parse a fresh form. Fields not mentioned keep their creation defaults.
///
/// # Errors
///
/// Returns a [`FormError`] naming the first unknown key.
pub fn parse(encoded: &str) -> Result<ItemForm, FormError> {
    overlay(ItemForm::default(), encoded)
}

/// Apply the fields in `encoded` on top of `base`, e.g. a form prefilled
/// from the item being edited.
///
/// # Errors
///
/// Returns a [`FormError`] naming the first unknown key.
pub fn overlay(mut base: ItemForm, encoded: &str) -> Result<ItemForm, FormError> {
    for (key, value) in form_urlencoded::parse(encoded.as_bytes()) {
        let slot = match key.as_ref() {
            "name" => &mut base.name,
            "type" => &mut base.kind,
            "status" => &mut base.status,
            "location" => &mut base.location,
            "quantity" => &mut base.quantity,
            "low_stock_threshold" => &mut base.low_stock_threshold,
            "notes" => &mut base.notes,
            other => {
                return Err(FormError {
                    field: "form",
                    message: format!("Unknown field: {other}"),
                });
            }
        };
        *slot = value.into_owned();
    }
    Ok(base)
}
