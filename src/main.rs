//! Loan EMI Calculator CLI
//!
//! Computes the monthly installment and amortization schedule for a loan and
//! manages the stored theme preference.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn};
use serde::Serialize;

use loan_emi::calculator::{DEFAULT_INTEREST_RATE, DEFAULT_LOAN_AMOUNT, DEFAULT_LOAN_TERM};
use loan_emi::{
    AmortizationSummary, AppConfig, Calculator, CurrencyCode, EmiError, FilePreferenceStore,
    PaymentRow, Theme,
};

#[derive(Parser)]
#[command(name = "emi", author, version, about = "Loan EMI calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the monthly installment and amortization schedule
    Calculate(CalculateArgs),

    /// Show or change the stored light/dark theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
}

#[derive(clap::Args)]
struct CalculateArgs {
    /// Loan amount
    #[arg(long, default_value = DEFAULT_LOAN_AMOUNT, allow_hyphen_values = true)]
    principal: String,

    /// Annual interest rate in percent
    #[arg(long, default_value = DEFAULT_INTEREST_RATE, allow_hyphen_values = true)]
    rate: String,

    /// Loan term in years
    #[arg(long, default_value = DEFAULT_LOAN_TERM, allow_hyphen_values = true)]
    years: String,

    /// Display currency (USD, EUR, GBP, INR); amounts are not converted
    #[arg(long, value_parser = parse_currency)]
    currency: Option<CurrencyCode>,

    /// Schedule page to show (12 payments per page)
    #[arg(long, default_value_t = 1, conflicts_with = "all")]
    page: usize,

    /// Show every payment instead of a single page
    #[arg(long)]
    all: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Also write the full schedule as CSV to this file
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Print the stored theme
    Show,
    /// Switch between light and dark
    Toggle,
    /// Store a specific theme
    Set {
        #[arg(value_parser = parse_theme)]
        theme: Theme,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

fn parse_currency(s: &str) -> Result<CurrencyCode, EmiError> {
    s.parse()
}

fn parse_theme(s: &str) -> Result<Theme, EmiError> {
    s.parse()
}

#[derive(Serialize)]
struct JsonReport<'a> {
    currency: CurrencyCode,
    monthly_payment: f64,
    summary: AmortizationSummary,
    schedule: &'a [PaymentRow],
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::from_env();

    match cli.command {
        Command::Calculate(args) => run_calculate(args, &config),
        Command::Theme { action } => run_theme(action.unwrap_or(ThemeAction::Show), &config),
    }
}

fn run_calculate(args: CalculateArgs, config: &AppConfig) -> Result<()> {
    let mut calc = Calculator::with_currency(args.currency.unwrap_or(config.default_currency));
    calc.set_loan_amount(args.principal);
    calc.set_interest_rate(args.rate);
    calc.set_loan_term(args.years);

    if !calc.calculate() {
        warn!("No schedule computed for {:?}", calc.request());
        eprintln!("No result: principal, interest rate and term must be positive numbers within range.");
        return Ok(());
    }
    calc.set_page(args.page);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Table => print_table(&mut out, &calc, args.all)?,
        OutputFormat::Csv => write_csv(&mut out, calc.schedule())?,
        OutputFormat::Json => {
            let report = JsonReport {
                currency: calc.currency(),
                monthly_payment: calc
                    .monthly_payment()
                    .context("monthly payment missing after calculation")?,
                summary: calc.summary().context("summary missing after calculation")?,
                schedule: calc.schedule(),
            };
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        }
    }

    if let Some(path) = args.output {
        let file = std::fs::File::create(&path)
            .with_context(|| format!("Unable to create {}", path.display()))?;
        write_csv(file, calc.schedule())?;
        info!("Full schedule written to {}", path.display());
        eprintln!("Full schedule written to: {}", path.display());
    }

    Ok(())
}

fn print_table<W: Write>(out: &mut W, calc: &Calculator, all: bool) -> Result<()> {
    let summary = calc.summary().context("summary missing after calculation")?;

    writeln!(out, "Monthly EMI: {}", calc.format(summary.monthly_payment))?;
    writeln!(out, "  Total Payment:  {}", calc.format(summary.total_payment))?;
    writeln!(out, "  Total Interest: {}", calc.format(summary.total_interest))?;
    writeln!(out, "  Loan Amount:    {}", calc.format(summary.loan_amount))?;

    // Terms under half a month have an installment but no rows
    let Some(view) = calc.current_page_view() else {
        return Ok(());
    };
    writeln!(out)?;

    let (rows, footer) = if all {
        (calc.schedule(), None)
    } else {
        writeln!(out, "Amortization Schedule ({})", view.range_label())?;
        let footer = view
            .show_controls()
            .then(|| format!("Page {} of {}", view.page, view.total_pages));
        (view.rows, footer)
    };

    writeln!(out, "{:>5} {:>16} {:>16} {:>16} {:>18}",
        "Month", "Payment", "Principal", "Interest", "Balance")?;
    writeln!(out, "{}", "-".repeat(75))?;

    for row in rows {
        writeln!(out, "{:>5} {:>16} {:>16} {:>16} {:>18}",
            row.month,
            calc.format(row.payment),
            calc.format(row.principal_payment),
            calc.format(row.interest_payment),
            calc.format(row.balance),
        )?;
    }

    if let Some(footer) = footer {
        writeln!(out, "\n{}", footer)?;
    }

    Ok(())
}

fn write_csv<W: Write>(writer: W, schedule: &[PaymentRow]) -> loan_emi::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in schedule {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

fn run_theme(action: ThemeAction, config: &AppConfig) -> Result<()> {
    let mut store = FilePreferenceStore::open(&config.preferences_path)
        .with_context(|| format!("Unable to open {}", config.preferences_path.display()))?;
    let current = Theme::load(&store)?;

    let theme = match action {
        ThemeAction::Show => current,
        ThemeAction::Toggle => {
            let next = current.toggled();
            next.save(&mut store)?;
            next
        }
        ThemeAction::Set { theme } => {
            theme.save(&mut store)?;
            theme
        }
    };

    println!("{}", theme);
    Ok(())
}
