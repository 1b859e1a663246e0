use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::RatioConfig;
use crate::error::LedgerError;
use crate::types::{Entries, Money};
use crate::LedgerResult;

/// Bulk line-item input for seeding a ledger, e.g. from a JSON file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LineItems {
    #[serde(default)]
    pub incomes: Entries,
    #[serde(default)]
    pub expenses: Entries,
    #[serde(default)]
    pub initial_costs: Entries,
    /// Purchase price to expand into tax / rehab / closing-cost entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house_price: Option<Money>,
}

/// The aggregate of named income, expense, and initial-cost entries for one
/// property, plus the ratio configuration used for purchase-price expansion.
///
/// Each instance owns its three collections; nothing is shared across
/// ledgers. Entry names are unique within a collection and insertion order
/// is preserved (it drives report layout). All CRUD operations are silent
/// no-ops on an invalid key: duplicate add, missing change, and missing
/// delete are not errors.
#[derive(Debug, Clone)]
pub struct InvestmentLedger {
    incomes: Entries,
    expenses: Entries,
    initial_costs: Entries,
    ratios: RatioConfig,
}

impl InvestmentLedger {
    /// Create an empty ledger with the given ratio configuration.
    pub fn new(ratios: RatioConfig) -> Self {
        Self {
            incomes: Entries::new(),
            expenses: Entries::new(),
            initial_costs: Entries::new(),
            ratios,
        }
    }

    /// Create an empty ledger, loading ratios from a config file.
    /// Config failures propagate; no defaults are substituted.
    pub fn from_config_file(path: impl AsRef<Path>) -> LedgerResult<Self> {
        Ok(Self::new(RatioConfig::load(path)?))
    }

    /// Create a ledger pre-populated from bulk line items. Applies the
    /// house price, if one is given, after the initial costs are set.
    pub fn with_items(ratios: RatioConfig, items: LineItems) -> Self {
        let mut ledger = Self::new(ratios);
        ledger.set_incomes(items.incomes);
        ledger.set_expenses(items.expenses);
        ledger.set_initial_costs(items.initial_costs);
        if let Some(price) = items.house_price {
            ledger.apply_house_price(price);
        }
        ledger
    }

    pub fn ratios(&self) -> &RatioConfig {
        &self.ratios
    }

    // --- Income CRUD ---

    pub fn add_income(&mut self, name: &str, amount: Money) {
        add_entry(&mut self.incomes, name, amount);
    }

    pub fn change_income(&mut self, name: &str, amount: Money) {
        change_entry(&mut self.incomes, name, amount);
    }

    pub fn delete_income(&mut self, name: &str) {
        delete_entry(&mut self.incomes, name);
    }

    pub fn set_incomes(&mut self, incomes: Entries) {
        self.incomes = incomes;
    }

    pub fn incomes(&self) -> &Entries {
        &self.incomes
    }

    // --- Expense CRUD ---

    pub fn add_expense(&mut self, name: &str, amount: Money) {
        add_entry(&mut self.expenses, name, amount);
    }

    pub fn change_expense(&mut self, name: &str, amount: Money) {
        change_entry(&mut self.expenses, name, amount);
    }

    pub fn delete_expense(&mut self, name: &str) {
        delete_entry(&mut self.expenses, name);
    }

    pub fn set_expenses(&mut self, expenses: Entries) {
        self.expenses = expenses;
    }

    pub fn expenses(&self) -> &Entries {
        &self.expenses
    }

    // --- Initial-cost CRUD ---

    pub fn add_initial_cost(&mut self, name: &str, amount: Money) {
        add_entry(&mut self.initial_costs, name, amount);
    }

    pub fn change_initial_cost(&mut self, name: &str, amount: Money) {
        change_entry(&mut self.initial_costs, name, amount);
    }

    pub fn delete_initial_cost(&mut self, name: &str) {
        delete_entry(&mut self.initial_costs, name);
    }

    pub fn set_initial_costs(&mut self, initial_costs: Entries) {
        self.initial_costs = initial_costs;
    }

    pub fn initial_costs(&self) -> &Entries {
        &self.initial_costs
    }

    // --- Derived metrics ---
    // All pure functions of current state, recomputed on every call.

    /// Gross monthly income: sum of all income entries.
    pub fn monthly_income(&self) -> Money {
        self.incomes.values().copied().sum()
    }

    /// Total monthly expenses: sum of all expense entries.
    pub fn monthly_expenses(&self) -> Money {
        self.expenses.values().copied().sum()
    }

    /// Monthly cash flow: income minus expenses.
    pub fn monthly_cash_flow(&self) -> Money {
        self.monthly_income() - self.monthly_expenses()
    }

    /// Annual cash flow: exactly 12 monthly cash flows.
    pub fn annual_cash_flow(&self) -> Money {
        self.monthly_cash_flow() * dec!(12)
    }

    /// Total investment: sum of all initial-cost entries.
    pub fn total_investment(&self) -> Money {
        self.initial_costs.values().copied().sum()
    }

    /// Cash-on-cash ROI: annual cash flow over total investment.
    ///
    /// A ledger with zero total investment has no defined ROI and returns
    /// a `DivisionByZero` error.
    pub fn roi(&self) -> LedgerResult<Decimal> {
        let total = self.total_investment();
        if total.is_zero() {
            return Err(LedgerError::DivisionByZero {
                context: "cash-on-cash ROI (annual cash flow / total investment)".into(),
            });
        }
        Ok(self.annual_cash_flow() / total)
    }

    // --- Purchase-price expansion ---

    /// Expand a house price into the three configured entries:
    /// expense `tax` = price * tax_rate / 12, initial cost `rehab budget` =
    /// price * rehab_rate, initial cost `closing costs` = price *
    /// closing_rate.
    ///
    /// Unlike `add_*`, this is an unconditional overwrite: calling it again
    /// with a different price replaces all three entries.
    pub fn apply_house_price(&mut self, price: Money) {
        self.expenses
            .insert("tax".to_string(), price * self.ratios.tax / dec!(12));
        self.initial_costs
            .insert("rehab budget".to_string(), price * self.ratios.rehab);
        self.initial_costs
            .insert("closing costs".to_string(), price * self.ratios.closing_costs);
    }
}

fn add_entry(entries: &mut Entries, name: &str, amount: Money) {
    if !entries.contains_key(name) {
        entries.insert(name.to_string(), amount);
    }
}

fn change_entry(entries: &mut Entries, name: &str, amount: Money) {
    if let Some(existing) = entries.get_mut(name) {
        *existing = amount;
    }
}

fn delete_entry(entries: &mut Entries, name: &str) {
    // shift_remove keeps the remaining entries in insertion order
    entries.shift_remove(name);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn test_ratios() -> RatioConfig {
        RatioConfig {
            tax: dec!(0.01),
            rehab: dec!(0.05),
            closing_costs: dec!(0.03),
        }
    }

    #[test]
    fn test_duplicate_add_is_noop() {
        let mut ledger = InvestmentLedger::new(test_ratios());
        ledger.add_income("rental income", dec!(2000));
        ledger.add_income("rental income", dec!(9999));
        assert_eq!(ledger.incomes()["rental income"], dec!(2000));
        assert_eq!(ledger.incomes().len(), 1);
    }

    #[test]
    fn test_change_updates_existing() {
        let mut ledger = InvestmentLedger::new(test_ratios());
        ledger.add_expense("insurance", dec!(100));
        ledger.change_expense("insurance", dec!(125));
        assert_eq!(ledger.expenses()["insurance"], dec!(125));
    }

    #[test]
    fn test_change_missing_is_noop() {
        let mut ledger = InvestmentLedger::new(test_ratios());
        ledger.add_expense("insurance", dec!(100));
        ledger.change_expense("hoa", dec!(50));
        assert_eq!(ledger.expenses().len(), 1);
        assert_eq!(ledger.expenses()["insurance"], dec!(100));
    }

    #[test]
    fn test_delete_present_and_missing() {
        let mut ledger = InvestmentLedger::new(test_ratios());
        ledger.add_initial_cost("down payment", dec!(40000));
        ledger.delete_initial_cost("inspection");
        assert_eq!(ledger.initial_costs().len(), 1);
        ledger.delete_initial_cost("down payment");
        assert!(ledger.initial_costs().is_empty());
    }

    #[test]
    fn test_delete_preserves_order_of_remaining() {
        let mut ledger = InvestmentLedger::new(test_ratios());
        ledger.add_expense("utilities", dec!(0));
        ledger.add_expense("repairs", dec!(100));
        ledger.add_expense("insurance", dec!(100));
        ledger.delete_expense("repairs");
        let names: Vec<&str> = ledger.expenses().keys().map(String::as_str).collect();
        assert_eq!(names, vec!["utilities", "insurance"]);
    }

    #[test]
    fn test_cash_flow_identity() {
        let mut ledger = InvestmentLedger::new(test_ratios());
        ledger.add_income("rental income", dec!(1800.50));
        ledger.add_expense("morgage", dec!(860));
        ledger.add_expense("vacancy", dec!(90.25));
        assert_eq!(
            ledger.monthly_cash_flow(),
            ledger.monthly_income() - ledger.monthly_expenses()
        );
        assert_eq!(ledger.annual_cash_flow(), ledger.monthly_cash_flow() * dec!(12));
    }

    #[test]
    fn test_roi_zero_investment_is_error() {
        let mut ledger = InvestmentLedger::new(test_ratios());
        ledger.add_income("rental income", dec!(2000));
        let err = ledger.roi().unwrap_err();
        match err {
            LedgerError::DivisionByZero { context } => {
                assert!(context.contains("total investment"));
            }
            other => panic!("Expected DivisionByZero, got {other:?}"),
        }
    }

    #[test]
    fn test_apply_house_price_overwrites() {
        let mut ledger = InvestmentLedger::new(test_ratios());
        ledger.apply_house_price(dec!(200000));
        assert_eq!(ledger.initial_costs()["rehab budget"], dec!(10000));
        assert_eq!(ledger.initial_costs()["closing costs"], dec!(6000));

        // A second call replaces all three derived entries
        ledger.apply_house_price(dec!(100000));
        assert_eq!(ledger.expenses()["tax"], dec!(100000) * dec!(0.01) / dec!(12));
        assert_eq!(ledger.initial_costs()["rehab budget"], dec!(5000));
        assert_eq!(ledger.initial_costs()["closing costs"], dec!(3000));
        assert_eq!(ledger.initial_costs().len(), 2);
    }

    #[test]
    fn test_with_items_applies_house_price() {
        let items: LineItems = serde_json::from_str(
            r#"{
                "incomes": {"rental income": 2000},
                "initial_costs": {"down payment": 40000},
                "house_price": 200000
            }"#,
        )
        .unwrap();
        let ledger = InvestmentLedger::with_items(test_ratios(), items);
        assert_eq!(ledger.total_investment(), dec!(56000));
        assert_eq!(ledger.expenses()["tax"], dec!(2000) / dec!(12));
    }
}
