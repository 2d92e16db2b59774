//! Timestamps and their text forms.

use chrono::{DateTime, SecondsFormat, Utc};

/// UTC timestamp used for `created_at` and `updated_at`.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Fixed-width RFC 3339 form (microseconds, `Z` suffix).
///
/// Every value has the same length, so lexicographic order of the text
/// matches chronological order. Storage adapters rely on this for sorting.
#[must_use]
pub fn to_sortable(ts: &Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Calendar date shown next to "Updated" on item cards.
#[must_use]
pub fn display_date(ts: &Timestamp) -> String {
    ts.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn should_return_current_utc_time() {
        let before = Utc::now();
        let ts = now();
        let after = Utc::now();
        assert!(ts >= before);
        assert!(ts <= after);
    }

    #[test]
    fn should_keep_sortable_form_fixed_width() {
        let whole = Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 0).unwrap();
        let text = to_sortable(&whole);
        assert_eq!(text, "2026-01-15T09:30:00.000000Z");
        assert_eq!(text.len(), to_sortable(&now()).len());
    }

    #[test]
    fn should_order_sortable_strings_chronologically() {
        let earlier = Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 0).unwrap();
        let later = earlier + chrono::Duration::microseconds(1);
        assert!(to_sortable(&earlier) < to_sortable(&later));
    }

    #[test]
    fn should_display_calendar_date() {
        let ts = Utc.with_ymd_and_hms(2026, 3, 4, 23, 59, 0).unwrap();
        assert_eq!(display_date(&ts), "2026-03-04");
    }
}
