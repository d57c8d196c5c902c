//! Core amortization engine for fixed-installment loans

use log::debug;
use serde::{Deserialize, Serialize};

use super::schedule::{AmortizationResult, PaymentRow};

/// Longest schedule the engine will build (1000 years of monthly payments)
pub const MAX_PAYMENTS: u32 = 12_000;

/// Loan parameters for one calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanRequest {
    /// Amount borrowed (currency units)
    pub principal: f64,

    /// Annual interest rate in percent (8.5 means 8.5%)
    pub annual_rate_percent: f64,

    /// Loan term in years, may be fractional
    pub term_years: f64,
}

impl LoanRequest {
    pub fn new(principal: f64, annual_rate_percent: f64, term_years: f64) -> Self {
        Self {
            principal,
            annual_rate_percent,
            term_years,
        }
    }

    /// Monthly decimal rate: (annual % / 100) / 12
    pub fn monthly_rate(&self) -> f64 {
        (self.annual_rate_percent / 100.0) / 12.0
    }

    /// Monthly periods before rounding (term_years * 12)
    pub fn payment_periods(&self) -> f64 {
        self.term_years * 12.0
    }

    /// Whether the engine will produce a result for this request.
    ///
    /// All three quantities must be finite and strictly positive. NaN (an
    /// unparseable form field) fails every comparison and is rejected.
    pub fn is_valid(&self) -> bool {
        is_positive(self.principal)
            && is_positive(self.annual_rate_percent)
            && is_positive(self.payment_periods())
    }

    /// Run the amortization for this request
    pub fn amortize(&self) -> Option<AmortizationResult> {
        compute_amortization(self.principal, self.annual_rate_percent, self.term_years)
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Fixed installment that retires `principal` over `n` equal periods at
/// `periodic_rate` per period.
///
/// P * r * (1 + r)^n / ((1 + r)^n - 1)
///
/// `periodic_rate` must be strictly positive; at zero the denominator vanishes.
pub fn annuity_payment(principal: f64, periodic_rate: f64, n: f64) -> f64 {
    let growth = (1.0 + periodic_rate).powf(n);
    principal * periodic_rate * growth / (growth - 1.0)
}

/// Compute the monthly installment and the full amortization schedule.
///
/// Returns `None` without doing any work when the principal, the annual
/// rate or the number of payments is not strictly positive. Callers keep
/// whatever they were showing before. Terms longer than `MAX_PAYMENTS`
/// months and inputs whose installment overflows `f64` also give `None`.
///
/// A term shorter than half a month is valid: the installment is computed
/// but the schedule has no rows.
///
/// # Arguments
/// * `principal` - Amount borrowed
/// * `annual_rate_percent` - Annual interest rate in percent
/// * `term_years` - Term in years (fractional terms are allowed)
pub fn compute_amortization(
    principal: f64,
    annual_rate_percent: f64,
    term_years: f64,
) -> Option<AmortizationResult> {
    let request = LoanRequest::new(principal, annual_rate_percent, term_years);
    if !request.is_valid() {
        debug!(
            "Skipping amortization for invalid input: principal={}, rate={}, term={}",
            principal, annual_rate_percent, term_years
        );
        return None;
    }

    let monthly_rate = request.monthly_rate();
    let n = request.payment_periods();
    if n.round() > MAX_PAYMENTS as f64 {
        debug!("Skipping amortization: {} payments exceeds {}", n.round(), MAX_PAYMENTS);
        return None;
    }

    let payment = annuity_payment(principal, monthly_rate, n);
    if !payment.is_finite() {
        debug!(
            "Skipping amortization: installment not representable for principal={}, rate={}, term={}",
            principal, annual_rate_percent, term_years
        );
        return None;
    }
    let rows = n.round() as u32;

    let mut result = AmortizationResult::new(payment);
    result.schedule.reserve(rows as usize);

    // The unclamped balance carries forward; only the recorded value is clamped
    let mut balance = principal;
    for month in 1..=rows {
        let interest_payment = balance * monthly_rate;
        let principal_payment = payment - interest_payment;
        balance -= principal_payment;

        result.add_row(PaymentRow {
            month,
            payment,
            principal_payment,
            interest_payment,
            balance: if balance > 0.0 { balance } else { 0.0 },
        });
    }

    debug!(
        "Amortized {:.2} at {}% over {} payments: EMI {:.6}",
        principal, annual_rate_percent, rows, payment
    );

    Some(result)
}
