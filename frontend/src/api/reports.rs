use chrono::NaiveDate;

use super::{
    client::ApiClient,
    types::{
        ApiError, AttendanceHistory, AttendanceStatistics, HistoricalAnalytics, TardinessAnalysis,
    },
};

/// Date range and optional school every report is scoped to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportQuery {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub school_id: Option<i64>,
}

impl ReportQuery {
    fn range(&self) -> [(&'static str, Option<String>); 3] {
        [
            ("start_date", Some(self.start.format("%Y-%m-%d").to_string())),
            ("end_date", Some(self.end.format("%Y-%m-%d").to_string())),
            ("school_id", self.school_id.map(|id| id.to_string())),
        ]
    }
}

impl ApiClient {
    pub async fn get_statistics(&self, query: &ReportQuery) -> Result<AttendanceStatistics, ApiError> {
        let [start, end, school] = query.range();
        self.get_json(
            "/api/reports/statistics",
            &[("period", Some("monthly".into())), start, end, school],
        )
        .await
    }

    pub async fn get_attendance_history(&self, query: &ReportQuery) -> Result<AttendanceHistory, ApiError> {
        self.get_json("/api/reports/attendance-history", &query.range())
            .await
    }

    pub async fn get_tardiness_analysis(&self, query: &ReportQuery) -> Result<TardinessAnalysis, ApiError> {
        self.get_json("/api/reports/tardiness-analysis", &query.range())
            .await
    }

    pub async fn get_historical_analytics(
        &self,
        query: &ReportQuery,
    ) -> Result<HistoricalAnalytics, ApiError> {
        self.get_json("/api/reports/historical-analytics", &query.range())
            .await
    }
}
