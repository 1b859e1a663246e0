use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::LedgerError;
use crate::types::Rate;
use crate::LedgerResult;

/// Ratio configuration used to expand a purchase price into derived
/// tax / rehab / closing-cost entries.
///
/// Loaded once when a ledger is constructed and immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatioConfig {
    /// Annual property tax as a fraction of purchase price
    pub tax: Rate,
    /// Rehab budget as a fraction of purchase price
    pub rehab: Rate,
    /// Closing costs as a fraction of purchase price
    pub closing_costs: Rate,
}

/// On-disk layout: the ratios live under a named `calculations` section.
#[derive(Debug, Deserialize)]
struct RatioFile {
    calculations: RatioConfig,
}

impl RatioConfig {
    /// Load ratios from a JSON config file.
    ///
    /// Fails fast: a missing file, a missing `calculations` section or key,
    /// or a non-numeric ratio is a `Config` error. No partial or default
    /// ratios are ever substituted.
    pub fn load(path: impl AsRef<Path>) -> LedgerResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| LedgerError::Config {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let file: RatioFile = serde_json::from_str(&contents).map_err(|e| LedgerError::Config {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(file.calculations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let file = write_config(
            r#"{"calculations": {"tax": 0.01, "rehab": 0.05, "closing_costs": 0.03}}"#,
        );
        let ratios = RatioConfig::load(file.path()).unwrap();
        assert_eq!(ratios.tax, dec!(0.01));
        assert_eq!(ratios.rehab, dec!(0.05));
        assert_eq!(ratios.closing_costs, dec!(0.03));
    }

    #[test]
    fn test_ledger_construction_from_config_file() {
        let file = write_config(
            r#"{"calculations": {"tax": 0.02, "rehab": 0.04, "closing_costs": 0.025}}"#,
        );
        let ledger = crate::InvestmentLedger::from_config_file(file.path()).unwrap();
        assert_eq!(ledger.ratios().tax, dec!(0.02));
        assert!(ledger.incomes().is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let err = RatioConfig::load("/nonexistent/ratios.json").unwrap_err();
        match err {
            LedgerError::Config { path, .. } => assert!(path.contains("ratios.json")),
            other => panic!("Expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_missing_section() {
        let file = write_config(r#"{"tax": 0.01, "rehab": 0.05, "closing_costs": 0.03}"#);
        assert!(RatioConfig::load(file.path()).is_err());
    }

    #[test]
    fn test_load_missing_key() {
        let file = write_config(r#"{"calculations": {"tax": 0.01, "rehab": 0.05}}"#);
        assert!(RatioConfig::load(file.path()).is_err());
    }

    #[test]
    fn test_load_non_numeric_ratio() {
        let file = write_config(
            r#"{"calculations": {"tax": "lots", "rehab": 0.05, "closing_costs": 0.03}}"#,
        );
        assert!(RatioConfig::load(file.path()).is_err());
    }
}
