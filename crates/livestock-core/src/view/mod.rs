//! Animal list view: search, categorical filters and pagination.
//!
//! Pipeline: Snapshot → Search → Type filter → Sex filter → Page slice
//!
//! [`filter_animals`] and [`paginate`] are pure functions; [`ListState`] and
//! [`AnimalBrowser`] hold the user's current choices and decide when the page
//! goes back to 1.

mod browser;
mod filter;
mod pages;
mod state;

pub use browser::*;
pub use filter::*;
pub use pages::*;
pub use state::*;
