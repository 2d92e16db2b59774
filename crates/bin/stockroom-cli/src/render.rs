//! Plain-text renderings of the dashboard and inventory views.

use stockroom_client::pages::inventory::InventoryView;
use stockroom_domain::dashboard::DashboardStats;
use stockroom_domain::item::{Item, ItemKind, ItemStatus};
use stockroom_domain::presentation::Badge;
use stockroom_domain::time::display_date;

fn badge(badge: Badge) -> String {
    format!("[{}]", badge.label)
}

pub fn dashboard(stats: &DashboardStats) -> String {
    let mut lines = vec![
        "Dashboard".to_string(),
        String::new(),
        format!("  Total Items     {}", stats.total_items),
        format!("  Devices         {}", stats.total_devices),
        format!("  Parts / Spares  {}", stats.total_parts),
        format!("  Available       {}", stats.available_count),
        String::new(),
        "Status Breakdown".to_string(),
    ];
    lines.extend(ItemStatus::ALL.into_iter().map(|status| {
        format!(
            "  {:<14}  {}",
            badge(status.badge()),
            stats.status_count(status)
        )
    }));
    lines.push(String::new());
    lines.push("Low Stock Alerts".to_string());
    if stats.low_stock_items.is_empty() {
        lines.push("  All parts are well stocked.".to_string());
    }
    lines.extend(stats.low_stock_items.iter().map(|item| {
        format!(
            "  #{} {} ({}): {} left, Min: {}",
            item.id,
            item.name,
            item.location.as_deref().unwrap_or("No location"),
            item.quantity,
            item.low_stock_threshold
        )
    }));
    lines.join("\n")
}

/// One line per item: id, name, badges, location and stock.
pub fn item_line(item: &Item) -> String {
    let mut line = format!(
        "#{:<4} {}  {} {}",
        item.id,
        item.name,
        badge(item.kind.badge()),
        badge(item.status.badge())
    );
    if let Some(location) = &item.location {
        line.push_str(&format!("  @ {location}"));
    }
    if item.kind == ItemKind::Part {
        line.push_str(&format!(
            "  qty {} (threshold: {})",
            item.quantity, item.low_stock_threshold
        ));
    }
    if item.is_low_stock() {
        line.push_str("  LOW STOCK!");
    }
    line
}

pub fn item_detail(item: &Item) -> String {
    let mut lines = vec![
        format!("#{} {}", item.id, item.name),
        format!("  Type       {}", item.kind.badge().label),
        format!("  Status     {}", item.status.badge().label),
        format!(
            "  Location   {}",
            item.location.as_deref().unwrap_or("No location")
        ),
        format!("  Quantity   {}", item.quantity),
        format!("  Threshold  {}", item.low_stock_threshold),
    ];
    if let Some(notes) = &item.notes {
        lines.push(format!("  Notes      {notes}"));
    }
    if item.is_low_stock() {
        lines.push("  Low Stock!".to_string());
    }
    lines.push(format!("  Updated    {}", display_date(&item.updated_at)));
    lines.join("\n")
}

pub fn inventory(view: InventoryView<'_>, summary: &str) -> String {
    match view {
        InventoryView::Loading => "Loading...".to_string(),
        InventoryView::Failed(message) => message.to_string(),
        InventoryView::Empty { .. } => {
            let mut lines = vec![summary.to_string(), "No items found".to_string()];
            if let Some(empty) = view.empty_state() {
                lines.push(empty.hint.to_string());
                if empty.add_item {
                    lines.push("Add Item: stockroom add 'name=...'".to_string());
                }
            }
            lines.join("\n")
        }
        InventoryView::Items(items) => std::iter::once(summary.to_string())
            .chain(items.iter().map(item_line))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}
