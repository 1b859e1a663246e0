use clap::Args;
use serde::Serialize;
use serde_json::Value;

use rei_core::{report, Entries, InvestmentLedger, LineItems, Money, RatioConfig};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::input;

/// Arguments for the boxed two-panel report
#[derive(Args)]
pub struct ReportArgs {
    /// Path to the ratio configuration file
    #[arg(long, default_value = "ratios.json")]
    pub config: String,

    /// Path to a JSON line-items file. Without it, piped stdin is read;
    /// with neither, the built-in sample property is used.
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the derived-metrics command
#[derive(Args)]
pub struct MetricsArgs {
    /// Path to the ratio configuration file
    #[arg(long, default_value = "ratios.json")]
    pub config: String,

    /// Path to a JSON line-items file. Without it, piped stdin is read;
    /// with neither, the built-in sample property is used.
    #[arg(long)]
    pub input: Option<String>,
}

#[derive(Debug, Serialize)]
struct MetricsOutput {
    monthly_income: Money,
    monthly_expenses: Money,
    monthly_cash_flow: Money,
    annual_cash_flow: Money,
    total_investment: Money,
    roi: Decimal,
}

pub fn run_report(args: ReportArgs) -> Result<Option<Value>, Box<dyn std::error::Error>> {
    let ledger = build_ledger(&args.config, args.input.as_deref())?;
    print!("{}", report::render(&ledger)?);
    Ok(None)
}

pub fn run_metrics(args: MetricsArgs) -> Result<Option<Value>, Box<dyn std::error::Error>> {
    let ledger = build_ledger(&args.config, args.input.as_deref())?;
    let metrics = MetricsOutput {
        monthly_income: ledger.monthly_income(),
        monthly_expenses: ledger.monthly_expenses(),
        monthly_cash_flow: ledger.monthly_cash_flow(),
        annual_cash_flow: ledger.annual_cash_flow(),
        total_investment: ledger.total_investment(),
        roi: ledger.roi()?,
    };
    Ok(Some(serde_json::to_value(metrics)?))
}

fn build_ledger(
    config_path: &str,
    input_path: Option<&str>,
) -> Result<InvestmentLedger, Box<dyn std::error::Error>> {
    let ratios = RatioConfig::load(config_path)?;
    let items: LineItems = if let Some(path) = input_path {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        sample_items()
    };
    Ok(InvestmentLedger::with_items(ratios, items))
}

/// The illustrative sample property: $2,000/month rental, $1,460 of
/// recurring expenses, $40,000 down, bought for $200,000.
fn sample_items() -> LineItems {
    let mut incomes = Entries::new();
    incomes.insert("rental income".to_string(), dec!(2000));
    incomes.insert("laundry".to_string(), dec!(0));
    incomes.insert("storage".to_string(), dec!(0));
    incomes.insert("misc".to_string(), dec!(0));

    let mut expenses = Entries::new();
    expenses.insert("utilities".to_string(), dec!(0));
    expenses.insert("HOA".to_string(), dec!(0));
    expenses.insert("lawn".to_string(), dec!(0));
    expenses.insert("repairs".to_string(), dec!(100));
    expenses.insert("capital Expenses".to_string(), dec!(100));
    expenses.insert("morgage".to_string(), dec!(860));
    expenses.insert("insurance".to_string(), dec!(100));
    expenses.insert("property managment".to_string(), dec!(200));
    expenses.insert("vacancy".to_string(), dec!(100));

    let mut initial_costs = Entries::new();
    initial_costs.insert("down payment".to_string(), dec!(40000));
    initial_costs.insert("misc others".to_string(), dec!(0));

    LineItems {
        incomes,
        expenses,
        initial_costs,
        house_price: Some(dec!(200000)),
    }
}
