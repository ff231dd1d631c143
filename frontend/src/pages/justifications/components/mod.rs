pub mod filter;
pub mod list;
pub mod review_panel;
