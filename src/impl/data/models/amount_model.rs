use std::str::FromStr;

use fractic_server_error::ServerError;
use regex::Regex;
use rust_decimal::Decimal;

use crate::errors::InvalidAmount;

/// Decimal amount as typed in spreadsheets and forms. Accepts plain
/// (`21000.50`) and Brazilian (`21.000,50`, `R$ 21.000,50`) notation, and
/// accounting-style parentheses for negatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AmountModel(pub Decimal);

/// Integer written with '.' between groups of three digits ("1.234.567").
fn thousands_grouped() -> Regex {
    Regex::new(r"^-?[1-9]\d{0,2}(\.\d{3})+$").expect("hardcoded regex should be valid")
}

impl FromStr for AmountModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim().trim_start_matches("R$").trim();
        let is_negative = raw.starts_with('(') && raw.ends_with(')');
        let numeric_part = raw.trim_matches(|c| c == '(' || c == ')').trim();
        // A comma is always the decimal mark, which makes every dot a
        // thousands separator. Without a comma, several dot-separated groups
        // of three are thousands too, while a single one ("21.000") could be
        // read either way and is rejected.
        let normalized = if numeric_part.contains(',') {
            numeric_part.replace('.', "").replace(',', ".")
        } else if thousands_grouped().is_match(numeric_part) {
            if numeric_part.matches('.').count() == 1 {
                return Err(InvalidAmount::new(s));
            }
            numeric_part.replace('.', "")
        } else {
            numeric_part.to_string()
        };
        let amount =
            Decimal::from_str(&normalized).map_err(|e| InvalidAmount::with_debug(s, &e))?;
        Ok(AmountModel(if is_negative { -amount } else { amount }))
    }
}

impl From<AmountModel> for Decimal {
    fn from(model: AmountModel) -> Self {
        model.0
    }
}
