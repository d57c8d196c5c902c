//! Display currencies and monetary formatting
//!
//! Selecting a currency only relabels amounts. Values are never converted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EmiError;

/// Currency used to label monetary amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    INR,
}

impl CurrencyCode {
    pub const ALL: [CurrencyCode; 4] = [
        CurrencyCode::USD,
        CurrencyCode::EUR,
        CurrencyCode::GBP,
        CurrencyCode::INR,
    ];

    /// ISO 4217 code
    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyCode::USD => "USD",
            CurrencyCode::EUR => "EUR",
            CurrencyCode::GBP => "GBP",
            CurrencyCode::INR => "INR",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            CurrencyCode::USD => "$",
            CurrencyCode::EUR => "€",
            CurrencyCode::GBP => "£",
            CurrencyCode::INR => "₹",
        }
    }

    /// Label used in currency pickers, e.g. "EUR (€)"
    pub fn label(&self) -> String {
        format!("{} ({})", self.as_str(), self.symbol())
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurrencyCode {
    type Err = EmiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        CurrencyCode::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(code))
            .ok_or_else(|| EmiError::UnknownCurrency(code.to_string()))
    }
}

/// Format an amount with the currency symbol, thousands separators and two
/// decimal places, e.g. `$1,234.50` or `-€12.00`.
///
/// NaN renders as `$0.00` whatever the selected currency.
pub fn format_currency(value: f64, currency: CurrencyCode) -> String {
    if value.is_nan() {
        return "$0.00".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    if value.is_infinite() {
        return format!("{}{}∞", sign, currency.symbol());
    }

    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    // No sign on amounts that round to zero
    let sign = if fixed == "0.00" { "" } else { sign };

    format!("{}{}{}.{}", sign, currency.symbol(), group_thousands(whole), cents)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
