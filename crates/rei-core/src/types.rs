use indexmap::IndexMap;
use rust_decimal::Decimal;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.05 = 5%). Never as percentages.
pub type Rate = Decimal;

/// Insertion-ordered mapping from line-item name to amount. Report layout
/// depends on insertion order, so this is an `IndexMap`, never a `HashMap`.
pub type Entries = IndexMap<String, Money>;
