//! Dashboard statistics: an aggregate snapshot over every item.

use serde::{Deserialize, Serialize};

use crate::item::{Item, ItemKind, ItemStatus};

/// Read-only aggregate counts plus the parts currently at or below their
/// low-stock threshold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_items: u64,
    pub total_devices: u64,
    pub total_parts: u64,
    pub available_count: u64,
    pub in_use_count: u64,
    pub broken_count: u64,
    pub checked_out_count: u64,
    pub low_stock_items: Vec<Item>,
}

impl DashboardStats {
    /// Fold a full item set into a snapshot.
    ///
    /// Each item lands in exactly one kind bucket and one status bucket, so
    /// both breakdowns always sum to `total_items`. Low-stock items keep the
    /// input order.
    #[must_use]
    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a Item>) -> Self {
        let mut stats = Self::default();
        for item in items {
            stats.total_items += 1;
            match item.kind {
                ItemKind::Device => stats.total_devices += 1,
                ItemKind::Part => stats.total_parts += 1,
            }
            match item.status {
                ItemStatus::Available => stats.available_count += 1,
                ItemStatus::InUse => stats.in_use_count += 1,
                ItemStatus::Broken => stats.broken_count += 1,
                ItemStatus::CheckedOut => stats.checked_out_count += 1,
            }
            if item.is_low_stock() {
                stats.low_stock_items.push(item.clone());
            }
        }
        stats
    }

    /// Count for one status bucket.
    #[must_use]
    pub fn status_count(&self, status: ItemStatus) -> u64 {
        match status {
            ItemStatus::Available => self.available_count,
            ItemStatus::InUse => self.in_use_count,
            ItemStatus::Broken => self.broken_count,
            ItemStatus::CheckedOut => self.checked_out_count,
        }
    }

    /// Whether the kind and status breakdowns both sum to the total.
    ///
    /// Always true for snapshots built by [`from_items`](Self::from_items);
    /// useful for checking snapshots received over the wire.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let by_status: u64 = ItemStatus::ALL.iter().map(|s| self.status_count(*s)).sum();
        self.total_items == self.total_devices + self.total_parts && self.total_items == by_status
    }
}
