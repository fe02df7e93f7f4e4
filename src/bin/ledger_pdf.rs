//! Build a business export PDF from a JSON request.
//!
//! Usage:
//!   ledger-pdf request.json
//!   ledger-pdf request.json --output report.pdf --start 2024-01-01 --end 2024-03-31
//!   ledger-pdf request.json --account acc-1 --category cat-2 --verify
//!
//! The request file holds the export options (camelCase keys) plus the
//! `transactions`, `accounts`, `categories`, `receipts` and `mileage` arrays.
//! `--start`/`--end` override the request's reporting period and, together
//! with `--account`/`--category`, select the transactions that are exported.
//! Set `RUST_LOG=debug` for per-section page counts.

use ledger_pdf::xref::verify_offsets;
use ledger_pdf::{export_document, Error, ExportRequest, Result, TransactionFilter};
use std::path::PathBuf;
use std::process;

struct CliConfig {
    input: PathBuf,
    output: Option<PathBuf>,
    start_date: Option<String>,
    end_date: Option<String>,
    account_id: Option<String>,
    category_id: Option<String>,
    filter: bool,
    verify: bool,
    verbose: bool,
}

impl CliConfig {
    fn from_args() -> Result<Self> {
        let args: Vec<String> = std::env::args().collect();
        let mut input = None;
        let mut config = CliConfig {
            input: PathBuf::new(),
            output: None,
            start_date: None,
            end_date: None,
            account_id: None,
            category_id: None,
            filter: false,
            verify: false,
            verbose: false,
        };

        let mut i = 1;
        while i < args.len() {
            let value = |i: usize| {
                args.get(i + 1)
                    .cloned()
                    .ok_or_else(|| Error::InvalidArgument(format!("{} needs a value", args[i])))
            };
            match args[i].as_str() {
                "--output" | "-o" => {
                    config.output = Some(PathBuf::from(value(i)?));
                    i += 1;
                },
                "--start" => {
                    config.start_date = Some(value(i)?);
                    i += 1;
                },
                "--end" => {
                    config.end_date = Some(value(i)?);
                    i += 1;
                },
                "--account" => {
                    config.account_id = Some(value(i)?);
                    i += 1;
                },
                "--category" => {
                    config.category_id = Some(value(i)?);
                    i += 1;
                },
                "--filter" => {
                    config.filter = true;
                },
                "--verify" => {
                    config.verify = true;
                },
                "--verbose" | "-v" => {
                    config.verbose = true;
                },
                "--help" | "-h" => {
                    print_usage();
                    process::exit(0);
                },
                other if other.starts_with('-') => {
                    return Err(Error::InvalidArgument(format!("unknown option {}", other)));
                },
                other => {
                    if input.is_some() {
                        return Err(Error::InvalidArgument(format!("unexpected argument {}", other)));
                    }
                    input = Some(PathBuf::from(other));
                },
            }
            i += 1;
        }

        config.input =
            input.ok_or_else(|| Error::InvalidArgument("missing request file".to_string()))?;
        Ok(config)
    }

    /// Whether transactions should be narrowed before export.
    fn wants_filter(&self) -> bool {
        self.filter
            || self.start_date.is_some()
            || self.end_date.is_some()
            || self.account_id.is_some()
            || self.category_id.is_some()
    }
}

fn print_usage() {
    println!("Usage: ledger-pdf <request.json> [options]");
    println!();
    println!("Options:");
    println!("  -o, --output <path>     Output file (default: suggested file name)");
    println!("      --start <date>      Reporting period start (YYYY-MM-DD)");
    println!("      --end <date>        Reporting period end (YYYY-MM-DD)");
    println!("      --account <id>      Only export transactions from this account");
    println!("      --category <id>     Only export transactions in this category");
    println!("      --filter            Apply the request's own period to its transactions");
    println!("      --verify            Re-read the written file and check its xref table");
    println!("  -v, --verbose           Print a summary");
}

fn run(config: &CliConfig) -> Result<()> {
    let mut request = ExportRequest::from_path(&config.input)?;
    log::info!(
        "Loaded {} transactions, {} receipts, {} mileage records from {}",
        request.transactions.len(),
        request.receipts.len(),
        request.mileage.len(),
        config.input.display()
    );

    if let Some(start) = &config.start_date {
        request.options.start_date = start.clone();
    }
    if let Some(end) = &config.end_date {
        request.options.end_date = end.clone();
    }

    if config.wants_filter() {
        let filter = TransactionFilter::new(&request.options.start_date, &request.options.end_date)
            .with_account(config.account_id.clone().unwrap_or_default())
            .with_category(config.category_id.clone().unwrap_or_default());
        let before = request.transactions.len();
        request.transactions = filter.apply(&request.transactions);
        log::debug!("Filter kept {} of {} transactions", request.transactions.len(), before);
    }

    let document = export_document(&request)?;
    let output = config
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&document.filename));
    document.save(&output)?;

    if config.verify {
        let written = std::fs::read(&output)?;
        let table = verify_offsets(&written)?;
        log::info!("Verified {} xref entries in {}", table.len(), output.display());
    }

    if config.verbose {
        println!(
            "Wrote {} ({} bytes, {} transactions){}",
            output.display(),
            document.bytes.len(),
            request.transactions.len(),
            if config.verify { ", xref verified" } else { "" }
        );
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let config = match CliConfig::from_args() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage();
            process::exit(2);
        },
    };

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
