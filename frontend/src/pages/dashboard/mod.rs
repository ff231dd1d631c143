pub mod components;
pub mod model;
pub mod panel;
pub mod polling;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use panel::DashboardPage;
