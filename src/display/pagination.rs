//! Fixed-size pagination over an amortization schedule

use serde::Serialize;

use crate::amortization::PaymentRow;

/// Rows shown per page (one year of payments)
pub const PAGE_SIZE: usize = 12;

/// Total number of pages needed for `len` rows
pub fn total_pages(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// Clamp a requested 1-based page number into the valid range for `len` rows
pub fn clamp_page(page: usize, len: usize) -> usize {
    page.clamp(1, total_pages(len).max(1))
}

/// One page of schedule rows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchedulePage<'a> {
    /// Rows on this page
    pub rows: &'a [PaymentRow],

    /// Current page number (1-based)
    pub page: usize,

    /// Total number of pages
    pub total_pages: usize,

    /// Total number of rows across all pages
    pub total_rows: usize,
}

impl<'a> SchedulePage<'a> {
    /// Select a page of `schedule`. Out-of-range page numbers are clamped.
    pub fn new(schedule: &'a [PaymentRow], page: usize) -> Self {
        let total_rows = schedule.len();
        let page = clamp_page(page, total_rows);
        let start = ((page - 1) * PAGE_SIZE).min(total_rows);
        let end = (page * PAGE_SIZE).min(total_rows);

        Self {
            rows: &schedule[start..end],
            page,
            total_pages: total_pages(total_rows),
            total_rows,
        }
    }

    /// 1-based position of the first row on this page
    pub fn first_item(&self) -> usize {
        (self.page - 1) * PAGE_SIZE + 1
    }

    /// 1-based position of the last row on this page
    pub fn last_item(&self) -> usize {
        (self.page * PAGE_SIZE).min(self.total_rows)
    }

    /// e.g. "Showing 13-24 of 60 payments"
    pub fn range_label(&self) -> String {
        format!(
            "Showing {}-{} of {} payments",
            self.first_item(),
            self.last_item(),
            self.total_rows
        )
    }

    /// Page controls are only needed when there is more than one page
    pub fn show_controls(&self) -> bool {
        self.total_pages > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule(len: u32) -> Vec<PaymentRow> {
        (1..=len)
            .map(|month| PaymentRow {
                month,
                payment: 100.0,
                principal_payment: 90.0,
                interest_payment: 10.0,
                balance: 0.0,
            })
            .collect()
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(12), 1);
        assert_eq!(total_pages(13), 2);
        assert_eq!(total_pages(60), 5);
    }

    #[test]
    fn test_first_and_last_page() {
        let rows = schedule(60);

        let first = SchedulePage::new(&rows, 1);
        assert_eq!(first.rows.len(), 12);
        assert_eq!(first.rows[0].month, 1);
        assert_eq!(first.range_label(), "Showing 1-12 of 60 payments");
        assert!(first.show_controls());
        assert!(!first.has_previous());

        let last = SchedulePage::new(&rows, 5);
        assert_eq!(last.rows[0].month, 49);
        assert_eq!(last.range_label(), "Showing 49-60 of 60 payments");
        assert!(!last.has_next());
    }

    #[test]
    fn test_partial_last_page() {
        let rows = schedule(30);
        let page = SchedulePage::new(&rows, 3);
        assert_eq!(page.rows.len(), 6);
        assert_eq!(page.range_label(), "Showing 25-30 of 30 payments");
    }

    #[test]
    fn test_out_of_range_pages_clamp() {
        let rows = schedule(60);
        assert_eq!(SchedulePage::new(&rows, 0).page, 1);
        assert_eq!(SchedulePage::new(&rows, 99).page, 5);
    }

    #[test]
    fn test_single_page_hides_controls() {
        let rows = schedule(12);
        let page = SchedulePage::new(&rows, 1);
        assert!(!page.show_controls());

        let empty: Vec<PaymentRow> = Vec::new();
        let page = SchedulePage::new(&empty, 3);
        assert_eq!(page.page, 1);
        assert!(page.rows.is_empty());
    }
}
