mod analytics;
mod filters;
mod history;
mod statistics;
mod summary;
mod tardiness;

pub use analytics::AnalyticsReport;
pub use filters::ReportFilters;
pub use history::HistoryReport;
pub use statistics::StatisticsReport;
pub use tardiness::TardinessReport;
