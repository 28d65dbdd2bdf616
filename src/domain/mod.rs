pub mod badge;
pub mod filter;
pub mod gallery;
pub mod inquiry;
pub mod listing;
pub mod pager;
pub mod viewport;
