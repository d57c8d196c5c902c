//! Schedule output structures for amortization runs

use serde::{Deserialize, Serialize};

/// A single month of the amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentRow {
    /// Payment number (1-indexed)
    pub month: u32,

    /// Fixed installment, identical on every row
    pub payment: f64,

    /// Part of the installment that reduces the outstanding principal
    pub principal_payment: f64,

    /// Part of the installment that covers interest accrued this month
    pub interest_payment: f64,

    /// Outstanding principal after this payment, never below zero
    pub balance: f64,
}

/// Complete amortization result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationResult {
    /// The equated monthly installment
    pub monthly_payment: f64,

    /// Monthly rows in payment order
    pub schedule: Vec<PaymentRow>,
}

impl AmortizationResult {
    pub fn new(monthly_payment: f64) -> Self {
        Self {
            monthly_payment,
            schedule: Vec::new(),
        }
    }

    /// Add a schedule row
    pub fn add_row(&mut self, row: PaymentRow) {
        self.schedule.push(row);
    }

    /// Number of monthly payments in the schedule
    pub fn number_of_payments(&self) -> usize {
        self.schedule.len()
    }

    /// Balance left after the final payment
    pub fn final_balance(&self) -> f64 {
        self.schedule.last().map(|r| r.balance).unwrap_or(0.0)
    }

    /// Get summary totals for the schedule
    ///
    /// `principal` is the loan amount the schedule was computed from.
    pub fn summary(&self, principal: f64) -> AmortizationSummary {
        let total_payment: f64 = self.schedule.iter().map(|r| r.payment).sum();
        let total_interest: f64 = self.schedule.iter().map(|r| r.interest_payment).sum();

        AmortizationSummary {
            monthly_payment: self.monthly_payment,
            total_payment,
            total_interest,
            loan_amount: principal,
            number_of_payments: self.schedule.len() as u32,
        }
    }
}

/// Summary totals for an amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSummary {
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
    pub loan_amount: f64,
    pub number_of_payments: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn row(month: u32, principal_payment: f64, interest_payment: f64, balance: f64) -> PaymentRow {
        PaymentRow {
            month,
            payment: principal_payment + interest_payment,
            principal_payment,
            interest_payment,
            balance,
        }
    }

    #[test]
    fn test_summary_totals() {
        let mut result = AmortizationResult::new(110.0);
        result.add_row(row(1, 100.0, 10.0, 100.0));
        result.add_row(row(2, 105.0, 5.0, 0.0));

        let summary = result.summary(200.0);
        assert_eq!(summary.number_of_payments, 2);
        assert_abs_diff_eq!(summary.total_payment, 220.0, epsilon = 1e-12);
        assert_abs_diff_eq!(summary.total_interest, 15.0, epsilon = 1e-12);
        assert_eq!(summary.loan_amount, 200.0);
        assert_eq!(summary.monthly_payment, 110.0);
    }

    #[test]
    fn test_empty_schedule() {
        let result = AmortizationResult::new(0.0);
        assert_eq!(result.number_of_payments(), 0);
        assert_eq!(result.final_balance(), 0.0);
        assert_eq!(result.summary(0.0).total_payment, 0.0);
    }
}
