//! Fundboard Demo
//!
//! Drives the table view engine over a canned dataset and logs each slice,
//! showing search, sort toggling, and pagination without a backend.

use anyhow::{bail, Result};
use clap::Parser;
use fundboard::client::{FixtureSource, RecordSource};
use fundboard::model::{derive_round, RoundRecord};
use fundboard::table::{TableRow, TableView};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "fundboard", about = "Funding-round table view demo")]
struct Args {
    /// Free-text search applied to the demo view
    #[arg(long, default_value = "")]
    search: String,

    /// Sort key (name, company, opened_date, closed_date, target_funding,
    /// money_raised, status)
    #[arg(long, default_value = "name")]
    sort: String,

    /// Rows per page
    #[arg(long, default_value_t = 2)]
    page_size: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "fundboard=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Fundboard View Engine v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    if !RoundRecord::sort_keys().contains(&args.sort.as_str()) {
        bail!("Unknown sort key: {}", args.sort);
    }

    // Load the canned dataset and derive table records
    let source = FixtureSource::with_sample_data();
    let now = chrono::Utc::now();
    let records: Vec<RoundRecord> = source
        .fetch_rounds()
        .await?
        .iter()
        .map(|raw| derive_round(raw, now))
        .collect();

    tracing::info!("Loaded {} funding rounds", records.len());

    let mut view: TableView<RoundRecord> = TableView::new(args.page_size);
    view.load(records);

    if args.sort != RoundRecord::default_sort_key() {
        view.set_sort(&args.sort);
    }
    if !args.search.is_empty() {
        view.set_search(&args.search);
    }

    log_slice(&mut view, "initial view");

    // Toggle the sort direction on the active key
    view.set_sort(&args.sort);
    log_slice(&mut view, "after sort toggle");
    view.set_sort(&args.sort);

    // Walk the remaining pages
    let page_count = view.visible().page_count;
    for page in 2..=page_count {
        view.set_page(page);
        log_slice(&mut view, "next page");
    }

    tracing::info!(
        recomputes = view.recompute_count(),
        "Demo complete; slices were recomputed only when the view changed"
    );
    Ok(())
}

fn log_slice(view: &mut TableView<RoundRecord>, label: &str) {
    let slice = view.visible();
    tracing::info!(
        "{}: page {}/{} ({} filtered)",
        label,
        slice.page,
        slice.page_count,
        slice.total_filtered
    );
    for row in &slice.rows {
        tracing::info!(
            "  {} | {} | target {} | raised {} | {:?}",
            row.name,
            row.company,
            row.target_funding.display(),
            row.money_raised.display(),
            row.status
        );
    }
}
