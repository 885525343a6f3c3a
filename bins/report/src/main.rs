//! Salon earnings report
//!
//! Prints or exports the earnings sheet for one period, with an optional
//! expense summary.

mod feed;

use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Datelike;
use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use salon_core::earnings::{EarningsPolicy, EarningsService};
use salon_core::expense::{Expense, ExpenseService, ExpenseSummary};
use salon_core::live::{EarningsView, ViewError};
use salon_core::period::{PeriodSelector, PeriodWindow};
use salon_core::sheet::{DisplayMode, EarningsSheet};
use salon_core::staff::{Roster, StaffMember};
use salon_shared::config::LoggingConfig;
use salon_shared::types::{Currency, Money};
use salon_shared::{AppConfig, AppError};

use feed::{FeedError, FileFeed, read_documents};

const DEFAULT_FILTER: &str = "salon_report=info,salon_core=info";

#[derive(Parser, Debug)]
#[command(
    name = "salon-report",
    about = "Print or export the salon earnings sheet for a period."
)]
struct Args {
    /// JSON array of earnings report documents (defaults to `data.reports_path`)
    #[arg(long)]
    reports: Option<PathBuf>,

    /// JSON array of staff documents; technicians form the roster
    #[arg(long, conflicts_with = "roster")]
    staff: Option<PathBuf>,

    /// Comma-separated technician names, in column order
    #[arg(long, value_delimiter = ',')]
    roster: Vec<String>,

    /// Month name, picker index 0-12, or `this-year`; always within the current year
    /// (defaults to the current month)
    #[arg(short, long)]
    period: Option<String>,

    /// JSON array of expense documents to summarize for the same period
    #[arg(long)]
    expenses: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Screen)]
    format: Format,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Screen,
    Print,
    Csv,
}

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Load configuration before tracing: it carries the logging settings
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            let err = AppError::from(err);
            eprintln!("error: {err}");
            return ExitCode::from(err.exit_code());
        }
    };
    init_tracing(&config.logging);

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err
                .downcast_ref::<AppError>()
                .map_or(70, AppError::exit_code);
            eprintln!("error: {err:#}");
            ExitCode::from(code)
        }
    }
}

/// Logs go to stderr; stdout carries the report.
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.filter.as_deref().unwrap_or(DEFAULT_FILTER).into());
    let registry = tracing_subscriber::registry().with(filter);

    if logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
}

fn run(args: &Args, config: &AppConfig) -> anyhow::Result<()> {
    let selector = match &args.period {
        Some(period) => period
            .parse::<PeriodSelector>()
            .map_err(|e| AppError::Validation(e.to_string()))?,
        None => PeriodSelector::current_month(),
    };
    let roster = load_roster(args, config)?;
    let currency = config.display.currency;

    let reports_path = args
        .reports
        .clone()
        .unwrap_or_else(|| config.data.reports_path.clone());
    let feed = FileFeed::new(reports_path);
    let service = EarningsService::new(EarningsPolicy::from(&config.earnings));

    let view =
        EarningsView::open_current(&feed, service, roster, selector).map_err(view_error)?;
    let reports = feed.snapshot(view.window()).map_err(AppError::from)?;
    let sheet = view.on_snapshot(&reports);
    info!(
        period = %selector,
        year = view.window().start.year(),
        reports = sheet.rows.len(),
        total_earn = %sheet.totals.total_earn,
        "Built earnings sheet"
    );

    write_sheet(&sheet, view.window(), args, currency)?;

    if let Some(path) = args.expenses.as_ref().or(config.data.expenses_path.as_ref()) {
        let expenses = Expense::from_snapshot(&read_documents(path).map_err(AppError::from)?);
        let summary = ExpenseService::summarize(&expenses, view.window());
        info!(count = summary.count, total = %summary.total, "Summarized expenses");

        let text = format_expenses(&summary, currency);
        if args.format == Format::Csv && args.output.is_none() {
            eprint!("{text}");
        } else {
            print!("{text}");
        }
    }

    Ok(())
}

fn load_roster(args: &Args, config: &AppConfig) -> Result<Roster, AppError> {
    if !args.roster.is_empty() {
        return Ok(Roster::new(
            args.roster
                .iter()
                .map(|name| name.trim())
                .filter(|name| !name.is_empty()),
        ));
    }

    let path = args.staff.as_ref().unwrap_or(&config.data.staff_path);
    let staff = StaffMember::from_snapshot(&read_documents(path)?);
    let roster = Roster::from_staff(&staff);
    if roster.is_empty() {
        warn!(path = %path.display(), "No technicians found in staff records");
    }
    Ok(roster)
}

fn view_error(err: ViewError<FeedError>) -> AppError {
    match err {
        ViewError::Period(e) => AppError::Validation(e.to_string()),
        ViewError::Feed(e) => AppError::from(e),
    }
}

fn write_sheet(
    sheet: &EarningsSheet,
    window: &PeriodWindow,
    args: &Args,
    currency: Currency,
) -> Result<(), AppError> {
    let mode = match args.format {
        Format::Csv => {
            let export = |e: salon_core::sheet::ExportError| AppError::Export(e.to_string());
            match &args.output {
                Some(path) => {
                    let file = File::create(path)
                        .map_err(|e| AppError::Export(format!("{}: {e}", path.display())))?;
                    sheet.write_csv(BufWriter::new(file)).map_err(export)?;
                    info!(path = %path.display(), "Wrote CSV export");
                }
                None => sheet.write_csv(io::stdout().lock()).map_err(export)?,
            }
            return Ok(());
        }
        Format::Screen => DisplayMode::Screen,
        Format::Print => DisplayMode::Print,
    };

    let text = format!(
        "Salon Earnings: {} ({} to {})\n\n{}",
        window.selector,
        window.start.format("%m/%d/%Y"),
        window.end.format("%m/%d/%Y"),
        sheet.to_text(mode, currency)
    );
    match &args.output {
        Some(path) => fs::write(path, text)
            .map_err(|e| AppError::Io(format!("{}: {e}", path.display())))?,
        None => print!("{text}"),
    }
    Ok(())
}

fn format_expenses(summary: &ExpenseSummary, currency: Currency) -> String {
    let money = |amount: Decimal| Money::new(amount, currency);
    let mut lines = vec![
        String::new(),
        format!(
            "Expenses: {} totalling {}",
            summary.count,
            money(summary.total)
        ),
    ];
    for (title, groups) in [
        ("By supplier", &summary.by_supplier),
        ("By payment account", &summary.by_payment_account),
    ] {
        if groups.is_empty() {
            continue;
        }
        lines.push(format!("{title}:"));
        lines.extend(
            groups
                .iter()
                .map(|(name, amount)| format!("  {name}: {}", money(*amount))),
        );
    }
    lines.push(String::new());
    lines.join("\n")
}
