//! Gateway Requests CLI
//!
//! Reads transaction rows from CSV and prints the serialized request for
//! each valid row, one per line.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- transactions.csv > requests.xml
//! cargo run -- transactions.csv query > requests.txt
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use gateway_requests::{GatewayError, OutputFormat, RequestBatch, Result};
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(GatewayError::MissingArgument);
    }

    let format = match args.get(2) {
        Some(format) => format.parse::<OutputFormat>()?,
        None => OutputFormat::default(),
    };

    let input_path = &args[1];
    let file = File::open(input_path)?;
    let reader = BufReader::new(file);

    let mut batch = RequestBatch::new();
    batch.process_csv(reader)?;

    let stdout = io::stdout();
    let handle = stdout.lock();
    batch.write_output(handle, format)?;

    Ok(())
}
