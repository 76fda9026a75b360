//! Search module.
//!
//! Contains menu filters, the menu query, and the menu browser.

mod browser;
mod filter;
mod query;

pub use browser::{
    CategoryOption, MenuBrowser, DEFAULT_QUICK_BITE_LIMIT, DEFAULT_QUICK_BITE_MAX_PRICE,
};
pub use filter::Filter;
pub use query::{keyword_search, CategorySelection, MenuQuery, ALL_CATEGORIES_ID};
