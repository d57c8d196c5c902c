//! Loan EMI Calculator - fixed monthly installment and amortization schedules
//!
//! This library provides:
//! - The amortization engine (annuity formula plus month-by-month schedule)
//! - Summary totals for a computed schedule
//! - Currency formatting and fixed-size schedule pagination for display
//! - A calculator session holding form inputs and the last result
//! - Injected preference storage for the light/dark theme

pub mod amortization;
pub mod calculator;
pub mod config;
pub mod display;
pub mod error;
pub mod preferences;

// Re-export commonly used types
pub use amortization::{compute_amortization, AmortizationResult, AmortizationSummary, LoanRequest, PaymentRow};
pub use calculator::Calculator;
pub use config::AppConfig;
pub use display::{format_currency, CurrencyCode, SchedulePage};
pub use error::{EmiError, Result};
pub use preferences::{FilePreferenceStore, InMemoryPreferenceStore, PreferenceStore, Theme};
