//! xlsx2json command-line tool
//!
//! Converts one sheet of a spreadsheet into a JSON array of records.

use clap::Parser;
use std::path::PathBuf;
use std::process;
use xlsx2json::{ConverterBuilder, DateFormat, SheetSelector, XlsxToJsonError};

#[derive(Parser, Debug)]
#[command(name = "xlsx2json")]
#[command(about = "Convert a spreadsheet sheet into a JSON array of records")]
#[command(long_about = "Convert a spreadsheet sheet into a JSON array of records.

The first row of the sheet supplies the column names; every following row
becomes one JSON object. Output is UTF-8, indented with 2 spaces.

EXAMPLES:
  xlsx2json items.xlsx                         # writes items.json
  xlsx2json annex.xlsx out.json --sheet-name \"Table 1\"
  xlsx2json report.ods --sheet-index 2
  xlsx2json annex.xlsx --list-sheets")]
#[command(version)]
struct Cli {
    /// Spreadsheet to convert (.xlsx, .xlsm, .xlsb, .xls, .ods)
    source: PathBuf,

    /// Output JSON file (default: source path with a .json extension)
    output: Option<PathBuf>,

    /// Select the sheet by name
    #[arg(long, conflicts_with = "sheet_index")]
    sheet_name: Option<String>,

    /// Select the sheet by zero-based index
    #[arg(long)]
    sheet_index: Option<usize>,

    /// chrono format string for date cells (default: ISO 8601)
    #[arg(long)]
    date_format: Option<String>,

    /// Print the sheet names and exit
    #[arg(long)]
    list_sheets: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "xlsx2json=debug"
    } else {
        "xlsx2json=warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), XlsxToJsonError> {
    if cli.list_sheets {
        for name in xlsx2json::sheet_names(&cli.source)? {
            println!("{}", name);
        }
        return Ok(());
    }

    let written = convert(cli)?;
    println!(
        "Converted: {} -> {}",
        cli.source.display(),
        written.display()
    );
    Ok(())
}

fn convert(cli: &Cli) -> Result<PathBuf, XlsxToJsonError> {
    let mut builder = ConverterBuilder::new();

    if let Some(name) = &cli.sheet_name {
        builder = builder.with_sheet_selector(SheetSelector::Name(name.clone()));
    } else if let Some(index) = cli.sheet_index {
        builder = builder.with_sheet_selector(SheetSelector::Index(index));
    }

    if let Some(output) = &cli.output {
        builder = builder.with_output_path(output);
    }

    if let Some(format) = &cli.date_format {
        builder = builder.with_date_format(DateFormat::Custom(format.clone()));
    }

    builder.build()?.convert(&cli.source)
}
