//! Fixed-width two-panel console report for an investment ledger.
//!
//! Each panel is 47 character-columns of content between `|` borders: a
//! 30-column name field, a literal `" = "` separator, and a 14-column
//! right-aligned amount field.

use std::fmt::Write;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::ledger::InvestmentLedger;
use crate::types::{Entries, Money};
use crate::LedgerResult;

const PANEL_WIDTH: usize = 47;
const NAME_WIDTH: usize = 30;
const AMOUNT_WIDTH: usize = 14;

type Row = (String, Option<Money>);

/// Render the ledger as the two-panel report.
///
/// Top panel pair: incomes against the income/expense summary; bottom panel
/// pair: expenses against initial costs and the investment summary. Returns
/// `DivisionByZero` when total investment is zero, since the final ROI line
/// cannot be computed.
pub fn render(ledger: &InvestmentLedger) -> LedgerResult<String> {
    let mut out = String::new();

    // Top section: incomes against the two-row cash flow summary.
    push_border(&mut out);
    push_headings(&mut out, "Gross Income", "Cash Flow");
    let left = entry_rows(ledger.incomes());
    let right = vec![
        ("Income".to_string(), Some(ledger.monthly_income())),
        ("Expenses".to_string(), Some(ledger.monthly_expenses())),
    ];
    push_paired_rows(&mut out, &left, &right);

    push_divider(&mut out);
    push_row(
        &mut out,
        ("Total Monthly Income", Some(ledger.monthly_income())),
        ("Total Monthly Cashflow", Some(ledger.monthly_cash_flow())),
    );

    // Bottom section: expenses against initial costs plus the investment
    // summary rows.
    push_border(&mut out);
    push_headings(&mut out, "Expenses", "Cash on Cash ROI");
    let left = entry_rows(ledger.expenses());
    let mut right = entry_rows(ledger.initial_costs());
    right.push((String::new(), None));
    right.push((
        "Total Investment".to_string(),
        Some(ledger.total_investment()),
    ));
    right.push((
        "Annual Cashflow".to_string(),
        Some(ledger.annual_cash_flow()),
    ));
    push_paired_rows(&mut out, &left, &right);

    push_divider(&mut out);
    let roi = ledger.roi()?;
    out.push('|');
    push_cell(&mut out, "Total Monthly Expenses", Some(ledger.monthly_expenses()));
    let _ = write!(
        out,
        "{:<nw$} = {:>aw$}|",
        "Cash on Cash ROI",
        format_percent(roi),
        nw = NAME_WIDTH,
        aw = AMOUNT_WIDTH
    );
    out.push('\n');
    push_border(&mut out);

    Ok(out)
}

fn entry_rows(entries: &Entries) -> Vec<Row> {
    entries
        .iter()
        .map(|(name, amount)| (name.clone(), Some(*amount)))
        .collect()
}

/// Emit one row per index up to the longer list, blank-padding whichever
/// side runs out of entries first.
fn push_paired_rows(out: &mut String, left: &[Row], right: &[Row]) {
    let rows = left.len().max(right.len());
    for i in 0..rows {
        out.push('|');
        match left.get(i) {
            Some((name, amount)) => push_cell(out, name, *amount),
            None => push_blank_cell(out),
        }
        match right.get(i) {
            Some((name, amount)) => push_cell(out, name, *amount),
            None => push_blank_cell(out),
        }
        out.push('\n');
    }
}

fn push_row(out: &mut String, left: (&str, Option<Money>), right: (&str, Option<Money>)) {
    out.push('|');
    push_cell(out, left.0, left.1);
    push_cell(out, right.0, right.1);
    out.push('\n');
}

/// One 47-column cell plus its right-hand `|` edge. An entirely empty slot
/// (no name, no amount) renders as blank padding, not as an `=` row.
fn push_cell(out: &mut String, name: &str, amount: Option<Money>) {
    if name.is_empty() && amount.is_none() {
        push_blank_cell(out);
        return;
    }
    let amount = amount.map(format_money).unwrap_or_default();
    let _ = write!(
        out,
        "{:<nw$} = {:>aw$}|",
        display_name(name),
        amount,
        nw = NAME_WIDTH,
        aw = AMOUNT_WIDTH
    );
}

fn push_blank_cell(out: &mut String) {
    let _ = write!(out, "{:w$}|", "", w = PANEL_WIDTH);
}

fn push_border(out: &mut String) {
    let dashes = "-".repeat(PANEL_WIDTH);
    let _ = writeln!(out, "+{dashes}+{dashes}+");
}

fn push_divider(out: &mut String) {
    let dashes = "-".repeat(PANEL_WIDTH);
    let _ = writeln!(out, "|{dashes}|{dashes}|");
}

fn push_headings(out: &mut String, left: &str, right: &str) {
    let _ = writeln!(out, "|{left:^w$}|{right:^w$}|", w = PANEL_WIDTH);
}

/// Item names are truncated to 25 characters plus an ellipsis when longer
/// than 30. Only the first character of the whole string is uppercased,
/// never each word; "capital Expenses" renders as "Capital Expenses".
fn display_name(name: &str) -> String {
    let truncated: String = if name.chars().count() > NAME_WIDTH {
        name.chars().take(25).chain("...".chars()).collect()
    } else {
        name.to_string()
    };
    let mut chars = truncated.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => truncated,
    }
}

/// Currency format: `$` sign, thousands separators, two decimal places.
fn format_money(amount: Money) -> String {
    let fixed = format!("{:.2}", amount.round_dp(2));
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${sign}{grouped}.{frac_part}")
}

/// Percentage with two decimal places, e.g. `0.162` renders as `16.20%`.
fn format_percent(value: Decimal) -> String {
    format!("{:.2}%", (value * dec!(100)).round_dp(2))
}
