//! CLI tool to run one stream sample against the built-in records.
//!
//! Usage:
//!   stream-sample                      (same as `stream-sample filter`)
//!   stream-sample filter --school 北京大学
//!   stream-sample limit -n 3 -o out/limit.txt
//!
//! Output is the record names (or ages) joined by the delimiter.

use clap::{Parser, Subcommand};
use record_streams::{
    DEFAULT_COUNT, DEFAULT_DELIMITER, DEFAULT_SCHOOL, RecordStore, Sample,
};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process;
use tracing::debug;

/// Run a collection-pipeline sample over the ten sample records.
#[derive(Parser)]
#[command(name = "stream-sample")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Separator placed between rendered names
    #[arg(short, long, default_value = DEFAULT_DELIMITER)]
    delimiter: String,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Show the sample heading and record counts on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Records from one school (exact match)
    Filter {
        #[arg(long, default_value = DEFAULT_SCHOOL)]
        school: String,
    },
    /// Distinct ages in order of first appearance
    Distinct,
    /// First n records with an even age
    Limit {
        #[arg(short, default_value_t = DEFAULT_COUNT, allow_negative_numbers = true)]
        n: i64,
    },
    /// All records by age, oldest first
    Sorted,
    /// All records after the first n
    Skip {
        #[arg(short, default_value_t = DEFAULT_COUNT, allow_negative_numbers = true)]
        n: i64,
    },
}

impl From<Command> for Sample {
    fn from(cmd: Command) -> Self {
        match cmd {
            Command::Filter { school } => Sample::Filter { school },
            Command::Distinct => Sample::Distinct,
            Command::Limit { n } => Sample::Limit { n },
            Command::Sorted => Sample::Sorted,
            Command::Skip { n } => Sample::Skip { n },
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let sample = cli.command.map(Sample::from).unwrap_or_default();
    let store = RecordStore::sample();
    debug!(sample = %sample, records = store.len(), "running sample");

    if cli.verbose {
        eprintln!("{}", sample.title());
    }

    let result = match sample.run(store.as_slice()) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    let rendered = result.render(&cli.delimiter);

    if let Some(out_path) = &cli.output {
        if let Some(parent) = Path::new(out_path.as_str()).parent()
            && !parent.as_os_str().is_empty()
            && fs::create_dir_all(parent).is_err()
        {
            eprintln!("Error creating output directory for '{out_path}'");
            process::exit(1);
        }
        if let Err(e) = fs::write(out_path, format!("{rendered}\n")) {
            eprintln!("Error writing output file '{out_path}': {e}");
            process::exit(1);
        }
    } else if let Err(e) = writeln!(io::stdout(), "{rendered}") {
        eprintln!("Error writing output: {e}");
        process::exit(1);
    }

    if cli.verbose {
        eprintln!("Processed {} -> {} records", store.len(), result.len());
    }
}
