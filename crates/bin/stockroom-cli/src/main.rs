//! # stockroom: terminal client
//!
//! Talks to a running `stockroomd` through the typed client and prints the
//! dashboard and inventory views as text. The server is found through
//! `STOCKROOM_API_URL` (default `http://localhost:8000/api`).

mod render;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use stockroom_client::api::InventoryApi;
use stockroom_client::form;
use stockroom_client::http::HttpInventoryApi;
use stockroom_client::pages::LoadState;
use stockroom_client::pages::dashboard::DashboardPage;
use stockroom_client::pages::inventory::{InventoryCommand, InventoryPage, InventoryView};
use stockroom_client::query::InventoryQuery;
use stockroom_domain::form::ItemForm;
use stockroom_domain::id::ItemId;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "stockroom")]
#[command(about = "Inventory tracker for devices and spare parts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show totals, the status breakdown and low-stock alerts
    Dashboard,
    /// List items, optionally filtered, e.g. `search=usb&type=part`
    List {
        #[arg(default_value = "")]
        query: String,
    },
    /// Show one item
    Show { id: i64 },
    /// Create an item from form fields, e.g. `name=Toner&type=part&quantity=4`
    Add { form: String },
    /// Change the given fields of an item, e.g. `status=broken`
    Edit { id: i64, form: String },
    /// Delete an item after confirmation
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// List the locations in use
    Locations,
}

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let api = HttpInventoryApi::from_env();
    tracing::debug!(base_url = api.base_url(), "using stockroom API");
    match run(cli.command, api).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands, api: HttpInventoryApi) -> anyhow::Result<()> {
    match command {
        Commands::Dashboard => {
            let mut page = DashboardPage::new(api);
            page.load().await;
            match page.state() {
                LoadState::Loaded(stats) => println!("{}", render::dashboard(stats)),
                LoadState::Failed(message) => anyhow::bail!("{message}"),
                LoadState::Loading => {}
            }
        }
        Commands::List { query } => {
            let mut page = InventoryPage::from_query(api, &InventoryQuery::decode(&query));
            page.load().await;
            let view = page.view();
            if let InventoryView::Failed(message) = view {
                anyhow::bail!("{message}");
            }
            println!("{}", render::inventory(view, &page.summary()));
        }
        Commands::Show { id } => {
            let item = api.fetch_item(ItemId::new(id)).await?;
            println!("{}", render::item_detail(&item));
        }
        Commands::Add { form: encoded } => {
            let payload = form::parse(&encoded)?.to_new_item()?;
            let item = api.create_item(payload).await?;
            println!("Created {}", render::item_line(&item));
        }
        Commands::Edit { id, form: encoded } => {
            let current = api.fetch_item(ItemId::new(id)).await?;
            let payload = form::overlay(ItemForm::from_item(&current), &encoded)?.to_update()?;
            let item = api.update_item(current.id, payload).await?;
            println!("Updated {}", render::item_line(&item));
        }
        Commands::Delete { id, yes } => delete(api, ItemId::new(id), yes).await?,
        Commands::Locations => {
            for location in api.fetch_locations().await? {
                println!("{location}");
            }
        }
    }
    Ok(())
}

async fn delete(api: HttpInventoryApi, id: ItemId, yes: bool) -> anyhow::Result<()> {
    let item = api.fetch_item(id).await?;
    let mut page = InventoryPage::from_query(api, &InventoryQuery::default());

    let mut confirmed = false;
    let mut confirm = |prompt: &str| {
        confirmed = yes || ask(prompt);
        confirmed
    };
    page.dispatch(InventoryCommand::Delete(item), &mut confirm).await;

    if let Some(alert) = page.alert() {
        anyhow::bail!("{alert}");
    }
    if confirmed {
        println!("Item deleted");
    } else {
        println!("Cancelled");
    }
    Ok(())
}

fn ask(prompt: &str) -> bool {
    print!("{prompt} [y/N] ");
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    match io::stdin().lock().read_line(&mut answer) {
        Ok(_) => matches!(answer.trim(), "y" | "Y" | "yes"),
        Err(_) => false,
    }
}
