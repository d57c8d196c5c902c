//! Amortization engine for fixed monthly installment loans

mod engine;
mod schedule;

pub use engine::{annuity_payment, compute_amortization, LoanRequest, MAX_PAYMENTS};
pub use schedule::{AmortizationResult, AmortizationSummary, PaymentRow};
