use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use parade_state::config::RosterConfig;
use parade_state::io::messages::{FileSink, StaticHistory};
use parade_state::io::sheet::XlsxSheetSource;
use parade_state::pipeline;
use parade_state::{ParadeError, Result};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(error) = init_tracing() {
        eprintln!("error: {error}");
        std::process::exit(1);
    }

    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Draft(args) => execute_draft(args),
        Command::Send(args) => execute_send(args),
    }
}

fn execute_draft(args: ReportArgs) -> Result<()> {
    let (source, history, config, date) = args.resolve()?;
    let message = pipeline::generate_message(&source, &history, &config, &args.sheet, date)?;
    println!("{message}");
    Ok(())
}

fn execute_send(args: SendArgs) -> Result<()> {
    let (source, history, config, date) = args.report.resolve()?;
    let sink = FileSink::new(&args.output);
    pipeline::send_report(&source, &history, &sink, &config, &args.report.sheet, date)
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| ParadeError::Logging(error.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Assemble and deliver the daily parade state from an attendance workbook."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a draft of the parade state to stdout.
    Draft(ReportArgs),
    /// Render the parade state and deliver it to the output sink.
    Send(SendArgs),
}

#[derive(clap::Args)]
struct ReportArgs {
    /// Attendance workbook to read.
    #[arg(long)]
    workbook: PathBuf,

    /// Worksheet holding the attendance table.
    #[arg(long, default_value = "Sheet1")]
    sheet: String,

    /// Optional roster configuration file (JSON).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Report date as DD/MM/YYYY; defaults to today.
    #[arg(long)]
    date: Option<String>,

    /// Optional file holding the duty-list announcement text.
    #[arg(long)]
    duty_list: Option<PathBuf>,
}

#[derive(clap::Args)]
struct SendArgs {
    #[command(flatten)]
    report: ReportArgs,

    /// File the rendered report is delivered to.
    #[arg(long)]
    output: PathBuf,
}

impl ReportArgs {
    fn resolve(&self) -> Result<(XlsxSheetSource, StaticHistory, RosterConfig, NaiveDate)> {
        if !self.workbook.exists() {
            return Err(ParadeError::MissingInput(self.workbook.clone()));
        }

        let config = match &self.config {
            Some(path) => RosterConfig::load(path)?,
            None => RosterConfig::default(),
        };

        let date = match &self.date {
            Some(raw) => NaiveDate::parse_from_str(raw, "%d/%m/%Y")
                .map_err(|_| ParadeError::InvalidDate(raw.clone()))?,
            None => Local::now().date_naive(),
        };

        let history = match &self.duty_list {
            Some(path) => StaticHistory::from_texts([std::fs::read_to_string(path)?]),
            None => StaticHistory::default(),
        };

        Ok((XlsxSheetSource::new(&self.workbook), history, config, date))
    }
}
