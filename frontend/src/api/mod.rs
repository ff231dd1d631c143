mod auth;
pub mod client;
pub mod dashboard;
mod justifications;
pub mod reports;
mod schools;
mod students;
pub mod types;

pub use client::*;
pub use dashboard::DashboardQuery;
pub use reports::ReportQuery;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
