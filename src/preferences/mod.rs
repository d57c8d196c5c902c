//! User preferences kept outside the calculation core

mod store;
mod theme;

pub use store::{FilePreferenceStore, InMemoryPreferenceStore, PreferenceStore};
pub use theme::{Theme, THEME_KEY};
