use chrono::NaiveDate;

use super::{
    client::ApiClient,
    types::{ApiError, DashboardSnapshot},
};

/// Scope of one dashboard fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardQuery {
    pub date: NaiveDate,
    pub class_name: Option<String>,
    pub school_id: Option<i64>,
}

impl ApiClient {
    pub async fn get_dashboard(&self, query: &DashboardQuery) -> Result<DashboardSnapshot, ApiError> {
        self.get_json(
            "/api/checkin/dashboard",
            &[
                ("date_filter", Some(query.date.format("%Y-%m-%d").to_string())),
                ("class_filter", query.class_name.clone()),
                ("school_id", query.school_id.map(|id| id.to_string())),
            ],
        )
        .await
    }

    pub async fn get_classes(&self) -> Result<Vec<String>, ApiError> {
        self.get_json("/api/checkin/classes", &[]).await
    }
}
