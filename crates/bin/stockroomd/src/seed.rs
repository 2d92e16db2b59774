//! Demo inventory: a school IT closet with a few parts already running low.

use stockroom_app::ports::ItemRepository;
use stockroom_app::services::item_service::ItemService;
use stockroom_domain::error::StockroomError;
use stockroom_domain::filter::{ItemFilter, Pagination};
use stockroom_domain::item::{ItemKind, ItemStatus, NewItem};

/// `(name, location, status, notes)`
const DEVICES: &[(&str, &str, ItemStatus, &str)] = &[
    ("Acer Chromebook 315", "Room 205", ItemStatus::InUse, "Assigned to Ms. Johnson's classroom"),
    ("HP Chromebook 14", "Room 101", ItemStatus::Available, "Recently cleaned and updated"),
    (
        "Lenovo Chromebook C340",
        "IT Closet",
        ItemStatus::Broken,
        "Screen cracked on 1/15/26, warranty claim submitted",
    ),
    (
        "Dell Chromebook 3100",
        "Room 308",
        ItemStatus::CheckedOut,
        "Checked out to Teacher Smith for remote learning",
    ),
    ("Samsung Chromebook 4", "Room 412", ItemStatus::InUse, "Student device for special education"),
    (
        "ASUS Chromebook Flip",
        "Conference Room A",
        ItemStatus::Available,
        "Touchscreen model, for presentations",
    ),
    (
        "MacBook Pro 16\" M2",
        "IT Director Office",
        ItemStatus::InUse,
        "IT Director's primary workstation",
    ),
    (
        "Dell Latitude 5420",
        "Conference Room B",
        ItemStatus::Available,
        "For guest presentations and video conferencing",
    ),
    (
        "HP EliteBook 840 G8",
        "Room 205",
        ItemStatus::InUse,
        "Teacher's laptop for grading and lesson planning",
    ),
    (
        "Lenovo ThinkPad T14",
        "IT Closet",
        ItemStatus::Available,
        "Spare laptop for staff emergencies",
    ),
    ("Dell XPS 13", "Main Office", ItemStatus::InUse, "Administrative assistant workstation"),
    (
        "HP ProBook 450",
        "Storage Room",
        ItemStatus::Broken,
        "Needs OS reinstall, battery replacement recommended",
    ),
    (
        "iPad Air 5th Gen",
        "Media Cart",
        ItemStatus::InUse,
        "For video recording and mobile presentations",
    ),
    (
        "Epson Projector EX3280",
        "Auditorium",
        ItemStatus::InUse,
        "Main auditorium projector, serviced 12/2025",
    ),
    (
        "SMART Board Interactive Display 75\"",
        "Room 101",
        ItemStatus::InUse,
        "Installed 09/2025, under warranty until 09/2028",
    ),
    (
        "Canon Printer imageCLASS MF445dw",
        "Teacher Lounge",
        ItemStatus::InUse,
        "Network printer for staff, check toner monthly",
    ),
    (
        "Logitech Webcam C920",
        "Conference Room A",
        ItemStatus::Available,
        "For remote meetings and video conferences",
    ),
    (
        "Document Camera IPEVO V4K",
        "Room 308",
        ItemStatus::InUse,
        "Science teacher uses for demonstrations",
    ),
];

/// `(name, location, quantity, low_stock_threshold, notes)`
const PARTS: &[(&str, &str, u32, u32, &str)] = &[
    (
        "Chromebook Chargers (45W USB-C)",
        "IT Closet",
        2,
        5,
        "URGENT: Need to reorder, only 2 remaining",
    ),
    ("USB-C Cables (6ft)", "IT Closet", 3, 8, "Running low, order more soon"),
    ("Wireless Mouse (Logitech M170)", "Storage Room", 1, 5, "Last one in stock, reorder ASAP"),
    ("Laptop Batteries (Dell Compatible)", "IT Closet", 3, 4, "For Dell Latitude and XPS models"),
    ("HDMI Cables (10ft)", "IT Closet", 15, 5, "Standard HDMI 2.0, good stock level"),
    (
        "Chromebook Keyboard Replacements",
        "Storage Room",
        8,
        5,
        "Compatible with Acer and HP Chromebooks",
    ),
    ("Screen Protectors (11.6\" Chromebook)", "IT Closet", 25, 10, "Anti-glare, matte finish"),
    ("Ethernet Cables Cat6 (25ft)", "IT Closet", 20, 8, "For wired network connections"),
    (
        "Monitor Stands (Adjustable)",
        "Storage Room",
        12,
        5,
        "Ergonomic stands for teacher workstations",
    ),
    ("USB Hubs (4-Port USB 3.0)", "IT Closet", 10, 4, "Powered hubs with individual switches"),
    ("Laptop Sleeves (13-15\")", "Storage Room", 18, 6, "Protective cases for device transport"),
    ("Cleaning Wipes (Screen Safe)", "IT Closet", 8, 3, "Alcohol-free, 75 wipes per container"),
    ("Stylus Pens (Capacitive)", "IT Closet", 14, 8, "For touchscreen Chromebooks and tablets"),
];

fn demo_items() -> Result<Vec<NewItem>, StockroomError> {
    let devices = DEVICES.iter().map(|&(name, location, status, notes)| {
        NewItem::builder()
            .name(name)
            .location(location)
            .status(status)
            .notes(notes)
            .build()
    });
    let parts = PARTS
        .iter()
        .map(|&(name, location, quantity, threshold, notes)| {
            NewItem::builder()
                .name(name)
                .kind(ItemKind::Part)
                .location(location)
                .quantity(quantity)
                .low_stock_threshold(threshold)
                .notes(notes)
                .build()
        });
    devices.chain(parts).collect()
}

/// Insert the demo inventory unless some item already exists.
///
/// Returns how many items were inserted.
///
/// # Errors
///
/// Returns a storage error from the repository.
pub async fn seed_if_empty<R: ItemRepository>(
    service: &ItemService<R>,
) -> Result<usize, StockroomError> {
    let existing = service
        .list_items(ItemFilter::default(), Pagination::new(0, 1)?)
        .await?;
    if !existing.is_empty() {
        tracing::info!("database already has items, skipping demo data");
        return Ok(0);
    }

    let items = demo_items()?;
    let count = items.len();
    for item in items {
        service.create_item(item).await?;
    }
    tracing::info!(count, "seeded demo inventory");
    Ok(count)
}
