//! Ledgerview main entry point

use clap::Parser;
use ledgerview_client::HttpLedgerApi;
use ledgerview_config::Config;
use ledgerview_core::LedgerView;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;

#[derive(Parser, Debug)]
#[command(name = "ledgerview")]
#[command(author = "Ledgerview Contributors")]
#[command(version = "0.1.0")]
#[command(about = "A lightweight, headless ledger browsing layer for REST accounting backends", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Page to show after the initial load
    #[arg(short, long, default_value_t = 1)]
    page: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();
    let rt = Runtime::new()?;

    rt.block_on(async {
        let config = Config::load(args.config.clone())
            .expect("Failed to load configuration");

        eprintln!("[INFO] Config loaded: base_url={}, page_size={}",
            config.api.base_url, config.pagination.items_per_page);

        let api = Arc::new(HttpLedgerApi::new(
            config.api_root(),
            config.api.timeout_secs,
            config.api.connect_timeout_secs,
        ));
        let view = LedgerView::new(config, api);

        // The two mount fetches are independent and may interleave.
        let (groups_res, page_res) = tokio::join!(view.load_groups(), view.load_page(1));
        if let Err(e) = groups_res {
            eprintln!("[WARN] {}", e);
        }
        if let Err(e) = page_res {
            eprintln!("[WARN] {}", e);
        }

        // Navigation beyond page 1 only once the page count is known.
        if args.page > 1 {
            if let Err(e) = view.go_to_page(args.page).await {
                eprintln!("[WARN] {}", e);
            }
        }

        print_table(&view);
    });

    Ok(())
}

/// Dump the loaded page as a plain table with the page indicator
fn print_table(view: &LedgerView) {
    println!(
        "{:>6}  {:<28}  {:<16}  {:>14}  {:<6}",
        "Id", "Name", "Group", "Opening", "Nature"
    );
    for ledger in view.ledgers() {
        println!(
            "{:>6}  {:<28}  {:<16}  {:>14}  {:<6}",
            ledger.id, ledger.name, ledger.group.name, ledger.opening_balance, ledger.debit_credit
        );
    }
    println!();
    println!("{}  ({} groups)", view.page_indicator(), view.groups().len());

    if let Some(message) = view.error_message() {
        println!("{}", message);
    }
}
