use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::level_filters::LevelFilter;

use transaction_report::io::process_csv;
use transaction_report::report::write_report;

#[derive(Parser)]
struct Args {
    /// Transaction file: header line, then customer_id,transaction_type,amount rows.
    file: PathBuf,

    /// Log verbosity on stderr (error, warn, info, debug, trace).
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() {
    let args = Args::parse();

    // The report goes to stdout, so logs stay on stderr.
    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .init();

    let file = File::open(&args.file).unwrap_or_else(|e| {
        eprintln!("Error opening {}: {e}", args.file.display());
        process::exit(1);
    });

    let report = process_csv(BufReader::new(file)).unwrap_or_else(|e| {
        eprintln!("Error processing {}: {e}", args.file.display());
        process::exit(1);
    });

    let stdout = io::stdout();
    if let Err(e) = write_report(stdout.lock(), &report) {
        eprintln!("Error writing report: {e}");
        process::exit(1);
    }
}
