use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use shift_payroll::config::ConfigLoader;
use shift_payroll::ingest::ReadMode;
use shift_payroll::logging::init_cli_logger;
use shift_payroll::service::{OutputFormat, PayrollService};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Employee log file, one employee per line
    input: PathBuf,

    /// Pay tier table (YAML). Uses the standard table if omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// How the log file is read
    #[arg(long, value_enum, default_value_t = Mode::NonBlocking)]
    mode: Mode,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Blocking,
    NonBlocking,
}

impl From<Mode> for ReadMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Blocking => ReadMode::Blocking,
            Mode::NonBlocking => ReadMode::NonBlocking,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    let loader = match cli.config {
        Some(path) => ConfigLoader::load(path).into_diagnostic()?,
        None => ConfigLoader::standard(),
    };
    let service = PayrollService::from(loader);

    let report = service
        .amount_to_pay_with(&cli.input, cli.mode.into())
        .await
        .into_diagnostic()?;

    let output = report.render(cli.format.into()).into_diagnostic()?;
    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}
