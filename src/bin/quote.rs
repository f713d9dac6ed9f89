//! Tutto quote CLI
//!
//! Usage:
//!   quote --cp 1414 --item sillon_2c_ar --item colchon_1p_ar:2
//!   quote --country BO --item colchon_1p_bo --payment other --json
//!   quote --province Córdoba --city Córdoba --item veh_std_basico_ar --catalog catalog.json

use anyhow::{Context, Result};
use clap::Parser;
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::process::ExitCode;
use tutto_quote::application::{PricingEngine, QuoteService};
use tutto_quote::domain::entities::{Catalog, QuoteInput, QuoteItem, QuoteResult};
use tutto_quote::domain::services::format_amount;
use tutto_quote::domain::value_objects::{Country, PaymentMethod};
use tutto_quote::infrastructure::catalog::{FileCatalogSource, InMemoryCatalogSource};
use tutto_quote::infrastructure::config::AppSettings;
use tutto_quote::infrastructure::logging::init_logging;

/// Quote cleaning services in Argentina and Bolivia
#[derive(Parser)]
#[command(name = "quote")]
#[command(about = "Compute a cleaning service quote", long_about = None)]
#[command(version)]
struct Cli {
    /// Country code (AR or BO)
    #[arg(long, default_value = "AR")]
    country: Country,

    /// Postal code
    #[arg(long)]
    cp: Option<String>,

    /// Province, used with --city when no postal code is given
    #[arg(long)]
    province: Option<String>,

    /// City
    #[arg(long)]
    city: Option<String>,

    /// Requested service as ID or ID:QTY (repeatable)
    #[arg(long = "item", value_parser = parse_item, required = true)]
    items: Vec<(String, Decimal)>,

    /// Payment method: cash_transfer or other
    #[arg(long, default_value = "cash_transfer")]
    payment: PaymentMethod,

    /// Catalog export (JSON or TOML); overrides the settings file
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the full result as JSON
    #[arg(long)]
    json: bool,
}

fn parse_item(raw: &str) -> Result<(String, Decimal), String> {
    match raw.split_once(':') {
        Some((id, qty)) => qty
            .trim()
            .parse::<Decimal>()
            .map(|qty| (id.trim().to_string(), qty))
            .map_err(|e| format!("invalid quantity '{qty}': {e}")),
        None => Ok((raw.trim().to_string(), Decimal::ONE)),
    }
}

impl Cli {
    fn to_input(&self) -> QuoteInput {
        let mut input = QuoteInput::new(self.country).with_payment_method(self.payment);
        input.postal_code = self.cp.clone().unwrap_or_default();
        input.province = self.province.clone().unwrap_or_default();
        input.city = self.city.clone().unwrap_or_default();
        input.items = self
            .items
            .iter()
            .zip(0u64..)
            .map(|((id, qty), key)| QuoteItem::new(key, id.as_str(), *qty))
            .collect();
        input
    }
}

fn print_quote(quote: &QuoteResult, separator: &str) {
    let currency = quote.detail.currency.label();
    println!("{}", quote.summary);
    println!();
    for line in &quote.detail.items {
        println!(
            "  {:<40} x{:<4} {} {:>10}",
            line.service.sub_name(),
            line.quantity.normalize(),
            currency,
            format_amount(line.base_price, separator)
        );
    }
    println!(
        "  {:<46} {} {:>10}",
        "Subtotal",
        currency,
        format_amount(quote.detail.workload_subtotal, separator)
    );
    if let Some(discount) = &quote.detail.applied_discount {
        println!(
            "  {:<46} {} {:>10}",
            discount.description,
            currency,
            format_amount(-discount.amount, separator)
        );
    }
    if quote.detail.minimum_charge_applied > Decimal::ZERO {
        println!(
            "  {:<46} {} {:>10}",
            "Ajuste mínimo",
            currency,
            format_amount(quote.detail.minimum_charge_applied, separator)
        );
    }
    println!(
        "  {:<46} {} {:>10}",
        "Total",
        currency,
        format_amount(quote.final_price(), separator)
    );
    if !quote.is_single_price() {
        println!(
            "  Rango: {currency} {} - {}",
            format_amount(quote.min, separator),
            format_amount(quote.max, separator)
        );
    }
    if let Some(operator) = &quote.detail.operator_name {
        println!("  Operador: {operator}");
    }
    println!();
    for note in &quote.notes {
        println!("- {note}");
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let settings = AppSettings::load(cli.config.as_deref()).context("failed to load settings")?;
    init_logging(&settings.logging)?;

    let engine = PricingEngine::from_settings(settings.countries.clone(), &settings.quote);
    let service = QuoteService::new(engine, Catalog::default());

    match cli.catalog.as_ref().or(settings.catalog.path.as_ref()) {
        Some(path) => service.refresh(&FileCatalogSource::new(path)?).await?,
        None => service.refresh(&InMemoryCatalogSource::seed()).await?,
    }

    let input = cli.to_input();
    match service.calculate(&input) {
        Ok(quote) if cli.json => {
            println!("{}", serde_json::to_string_pretty(&quote)?);
            Ok(ExitCode::SUCCESS)
        }
        Ok(quote) => {
            let separator = settings.countries.get(input.country).thousands_separator();
            print_quote(&quote, separator);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::debug!(error = %e, code = e.code(), "quote failed");
            eprintln!("{}", e.user_message());
            Ok(ExitCode::FAILURE)
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    run(Cli::parse()).await
}
