//! Presentation helpers: currency formatting and schedule pagination

mod currency;
mod pagination;

pub use currency::{format_currency, CurrencyCode};
pub use pagination::{clamp_page, total_pages, SchedulePage, PAGE_SIZE};
