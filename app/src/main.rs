//! FILENAME: app/src/main.rs
//! PURPOSE: CLI entry point. Loads the dataset, applies the selection, and
//! emits every derived view as JSON for an external renderer.

use app_lib::DashboardController;
use clap::Parser;
use engine::DatasetStore;
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hdb-dashboard", about, version)]
struct Args {
    /// Path to the cleaned resale transactions CSV.
    #[arg(default_value = "data/cleaned_data.csv")]
    data: PathBuf,

    /// Select a year (defaults to the earliest year in the dataset).
    #[arg(long)]
    year: Option<u16>,

    /// Select a town (defaults to the first town in domain order).
    #[arg(long)]
    town: Option<String>,

    /// Pretty-print the emitted view JSON.
    #[arg(long)]
    pretty: bool,

    /// Increase output logging verbosity.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    simple_logger::init_with_level(if args.verbose {
        log::Level::Debug
    } else {
        log::Level::Info
    })
    .unwrap();

    if let Err(e) = run(&args) {
        log::error!("Failed: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let records = persistence::load_csv(&args.data)?;
    log::info!(
        "loaded {} transactions from {}",
        records.len(),
        args.data.display()
    );

    let mut controller = DashboardController::new(DatasetStore::new(records))?;
    if let Some(year) = args.year {
        controller.select_year(year)?;
    }
    if let Some(town) = args.town.clone() {
        controller.select_town(town)?;
    }

    let state = controller.filter_state().clone();
    log::info!("selection: year {} / {}", state.year, state.town);

    for result in controller.refresh()? {
        let json = if args.pretty {
            serde_json::to_string_pretty(&result)?
        } else {
            serde_json::to_string(&result)?
        };
        println!("{}", json);
    }

    Ok(())
}
