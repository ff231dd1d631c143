use crate::api::{
    ApiClient, ApiError, AttendanceHistory, AttendanceStatistics, HistoricalAnalytics, ReportQuery,
    School, TardinessAnalysis,
};
use crate::pages::reports::utils::ReportKind;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// One generated report, tagged by the view it fills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReportData {
    Statistics(AttendanceStatistics),
    History(AttendanceHistory),
    Tardiness(TardinessAnalysis),
    Analytics(Box<HistoricalAnalytics>),
}

impl ReportData {
    pub fn kind(&self) -> ReportKind {
        match self {
            ReportData::Statistics(_) => ReportKind::Statistics,
            ReportData::History(_) => ReportKind::History,
            ReportData::Tardiness(_) => ReportKind::Tardiness,
            ReportData::Analytics(_) => ReportKind::Analytics,
        }
    }
}

#[derive(Clone)]
pub struct ReportsRepository {
    client: Rc<ApiClient>,
}

impl ReportsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn generate(&self, kind: ReportKind, query: ReportQuery) -> Result<ReportData, ApiError> {
        match kind {
            ReportKind::Statistics => self
                .client
                .get_statistics(&query)
                .await
                .map(ReportData::Statistics),
            ReportKind::History => self
                .client
                .get_attendance_history(&query)
                .await
                .map(ReportData::History),
            ReportKind::Tardiness => self
                .client
                .get_tardiness_analysis(&query)
                .await
                .map(ReportData::Tardiness),
            ReportKind::Analytics => self
                .client
                .get_historical_analytics(&query)
                .await
                .map(|analytics| ReportData::Analytics(Box::new(analytics))),
        }
    }

    pub async fn fetch_schools(&self) -> Vec<School> {
        self.client.get_schools().await.unwrap_or_else(|err| {
            log::warn!("Could not load schools for the report filter: {}", err);
            Vec::new()
        })
    }
}
