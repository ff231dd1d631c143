mod clock;
mod filters;
mod justifications;
mod profile;
mod stats;
mod status;
mod tables;

pub use clock::Clock;
pub use filters::FilterBar;
pub use justifications::PendingJustifications;
pub use profile::StudentProfile;
pub use stats::StatsCards;
pub use status::StatusBanner;
pub use tables::{AbsentTable, CheckInTable, LateTable};
