use std::{path::PathBuf, process::ExitCode, time::Instant};

use anyhow::Result;
use clap::{error::ErrorKind, Parser};
use tracing::debug;

use compute_sales::{aggregate, format, index, into_list, load, logger, save, Input, RESULT_FILE};

/// Computes total sales from a JSON price catalogue and a JSON sales record.
///
/// The results are printed and written to `SalesResults.txt` in the current
/// directory.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// JSON list of products, each with a `title` and a `price`
    catalogue: PathBuf,
    /// JSON list of sales, each with a `Product` and a `Quantity`
    sales: PathBuf,
    /// Show progress logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                return ExitCode::FAILURE;
            }
        },
    };
    logger::init(args.verbose);
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("ERROR: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let start = Instant::now();
    let catalogue = load(&args.catalogue)?;
    let sales = load(&args.sales)?;
    let catalogue = into_list(catalogue, Input::Catalogue)?;
    let sales = into_list(sales, Input::Sales)?;

    let (prices, skipped) = index(&catalogue);
    for skip in skipped {
        println!("ERROR: {skip}");
    }
    let (total, skipped) = aggregate(&sales, &prices);
    for skip in skipped {
        println!("ERROR: {skip}");
    }

    let elapsed = start.elapsed().as_secs_f64();
    debug!(elapsed, "computed total");
    let results = format(
        &args.catalogue.display().to_string(),
        &args.sales.display().to_string(),
        total,
        elapsed,
    );
    println!("{results}");
    save(RESULT_FILE, &results)?;
    debug!(path = RESULT_FILE, "saved results");
    Ok(())
}
