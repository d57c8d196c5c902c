//! Calculator session: form fields, calculate/reset actions and page selection
//!
//! Holds the inputs as free text, the way form controls deliver them, and
//! the last successful result. A calculation that produces no result leaves
//! the previous result on display.

use log::debug;

use crate::amortization::{AmortizationResult, AmortizationSummary, LoanRequest, PaymentRow};
use crate::display::{clamp_page, format_currency, CurrencyCode, SchedulePage};

pub const DEFAULT_LOAN_AMOUNT: &str = "100000";
pub const DEFAULT_INTEREST_RATE: &str = "8.5";
pub const DEFAULT_LOAN_TERM: &str = "5";

/// Parse a free-text numeric field. Unparseable text becomes NaN, which the
/// engine rejects like any other non-positive input.
pub fn parse_field(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}

#[derive(Debug, Clone)]
pub struct Calculator {
    loan_amount: String,
    interest_rate: String,
    loan_term: String,
    currency: CurrencyCode,
    result: Option<AmortizationResult>,
    /// Principal the current result was computed from
    calculated_principal: f64,
    current_page: usize,
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_currency(CurrencyCode::default())
    }

    pub fn with_currency(currency: CurrencyCode) -> Self {
        Self {
            loan_amount: DEFAULT_LOAN_AMOUNT.to_string(),
            interest_rate: DEFAULT_INTEREST_RATE.to_string(),
            loan_term: DEFAULT_LOAN_TERM.to_string(),
            currency,
            result: None,
            calculated_principal: 0.0,
            current_page: 1,
        }
    }

    pub fn loan_amount(&self) -> &str {
        &self.loan_amount
    }

    pub fn interest_rate(&self) -> &str {
        &self.interest_rate
    }

    pub fn loan_term(&self) -> &str {
        &self.loan_term
    }

    pub fn currency(&self) -> CurrencyCode {
        self.currency
    }

    pub fn set_loan_amount(&mut self, text: impl Into<String>) {
        self.loan_amount = text.into();
    }

    pub fn set_interest_rate(&mut self, text: impl Into<String>) {
        self.interest_rate = text.into();
    }

    pub fn set_loan_term(&mut self, text: impl Into<String>) {
        self.loan_term = text.into();
    }

    pub fn set_currency(&mut self, currency: CurrencyCode) {
        self.currency = currency;
    }

    /// Build a request from the current field values
    pub fn request(&self) -> LoanRequest {
        LoanRequest::new(
            parse_field(&self.loan_amount),
            parse_field(&self.interest_rate),
            parse_field(&self.loan_term),
        )
    }

    /// Run the engine on the current fields.
    ///
    /// Returns `true` and replaces the displayed result when the inputs are
    /// valid. Returns `false` and leaves everything untouched otherwise.
    pub fn calculate(&mut self) -> bool {
        let request = self.request();
        match request.amortize() {
            Some(result) => {
                debug!(
                    "Calculated EMI {:.2} over {} payments",
                    result.monthly_payment,
                    result.number_of_payments()
                );
                self.result = Some(result);
                self.calculated_principal = request.principal;
                self.current_page = 1;
                true
            }
            None => {
                debug!("Inputs not valid, keeping previous result");
                false
            }
        }
    }

    /// Restore the default inputs and clear the result. Currency is kept.
    pub fn reset(&mut self) {
        self.loan_amount = DEFAULT_LOAN_AMOUNT.to_string();
        self.interest_rate = DEFAULT_INTEREST_RATE.to_string();
        self.loan_term = DEFAULT_LOAN_TERM.to_string();
        self.result = None;
        self.calculated_principal = 0.0;
        self.current_page = 1;
    }

    pub fn result(&self) -> Option<&AmortizationResult> {
        self.result.as_ref()
    }

    pub fn monthly_payment(&self) -> Option<f64> {
        self.result.as_ref().map(|r| r.monthly_payment)
    }

    pub fn schedule(&self) -> &[PaymentRow] {
        self.result
            .as_ref()
            .map(|r| r.schedule.as_slice())
            .unwrap_or(&[])
    }

    pub fn summary(&self) -> Option<AmortizationSummary> {
        self.result
            .as_ref()
            .map(|r| r.summary(self.calculated_principal))
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Select a schedule page, clamped into the available range
    pub fn set_page(&mut self, page: usize) {
        self.current_page = clamp_page(page, self.schedule().len());
    }

    /// Rows of the selected page, or `None` when there is no schedule
    pub fn current_page_view(&self) -> Option<SchedulePage<'_>> {
        let schedule = self.schedule();
        if schedule.is_empty() {
            None
        } else {
            Some(SchedulePage::new(schedule, self.current_page))
        }
    }

    /// Format an amount in the selected display currency
    pub fn format(&self, value: f64) -> String {
        format_currency(value, self.currency)
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_defaults() {
        let calc = Calculator::new();
        assert_eq!(calc.loan_amount(), "100000");
        assert_eq!(calc.interest_rate(), "8.5");
        assert_eq!(calc.loan_term(), "5");
        assert_eq!(calc.currency(), CurrencyCode::USD);
        assert!(calc.monthly_payment().is_none());
        assert!(calc.schedule().is_empty());
        assert!(calc.current_page_view().is_none());
    }

    #[test]
    fn test_calculate_default_loan() {
        let mut calc = Calculator::new();
        assert!(calc.calculate());

        assert_abs_diff_eq!(calc.monthly_payment().unwrap(), 2051.653133, epsilon = 1e-5);
        assert_eq!(calc.schedule().len(), 60);

        let summary = calc.summary().unwrap();
        assert_eq!(summary.loan_amount, 100_000.0);
        assert_abs_diff_eq!(summary.total_payment, 2051.653132705126 * 60.0, epsilon = 1e-6);
        assert_abs_diff_eq!(
            summary.total_interest,
            summary.total_payment - 100_000.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_invalid_input_keeps_previous_result() {
        let mut calc = Calculator::new();
        assert!(calc.calculate());
        calc.set_page(3);
        let previous = calc.result().cloned();

        calc.set_interest_rate("0");
        assert!(!calc.calculate());
        assert_eq!(calc.result().cloned(), previous);
        assert_eq!(calc.current_page(), 3);

        calc.set_interest_rate("8.5");
        calc.set_loan_amount("abc");
        assert!(!calc.calculate());
        assert_eq!(calc.result().cloned(), previous);
    }

    #[test]
    fn test_invalid_input_without_prior_result_shows_nothing() {
        let mut calc = Calculator::new();
        calc.set_loan_term("");
        assert!(!calc.calculate());
        assert!(calc.result().is_none());
    }

    #[test]
    fn test_recalculate_resets_page() {
        let mut calc = Calculator::new();
        calc.calculate();
        calc.set_page(4);
        assert_eq!(calc.current_page(), 4);

        calc.set_loan_term("10");
        assert!(calc.calculate());
        assert_eq!(calc.current_page(), 1);
        assert_eq!(calc.schedule().len(), 120);
    }

    #[test]
    fn test_page_view_and_clamping() {
        let mut calc = Calculator::new();
        calc.calculate();

        calc.set_page(2);
        let view = calc.current_page_view().unwrap();
        assert_eq!(view.rows[0].month, 13);
        assert_eq!(view.range_label(), "Showing 13-24 of 60 payments");

        calc.set_page(42);
        assert_eq!(calc.current_page(), 5);
        calc.set_page(0);
        assert_eq!(calc.current_page(), 1);
    }

    #[test]
    fn test_reset_restores_defaults_but_keeps_currency() {
        let mut calc = Calculator::new();
        calc.set_currency(CurrencyCode::GBP);
        calc.set_loan_amount("5000");
        calc.calculate();
        calc.set_page(2);

        calc.reset();
        assert_eq!(calc.loan_amount(), "100000");
        assert!(calc.result().is_none());
        assert_eq!(calc.current_page(), 1);
        assert_eq!(calc.currency(), CurrencyCode::GBP);
    }

    #[test]
    fn test_format_uses_selected_currency() {
        let mut calc = Calculator::new();
        calc.set_currency(CurrencyCode::INR);
        assert_eq!(calc.format(2051.653), "₹2,051.65");
    }

    #[test]
    fn test_parse_field() {
        assert_eq!(parse_field(" 12.5 "), 12.5);
        assert!(parse_field("").is_nan());
        assert!(parse_field("ten").is_nan());
    }
}
