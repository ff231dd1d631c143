use chrono::NaiveDate;
use reqwest::Method;

use super::{
    client::ApiClient,
    types::{
        ApiError, CreateJustificationRequest, Justification, JustificationStatus,
        ParentEmailValidation, UpdateJustificationRequest,
    },
};

impl ApiClient {
    pub async fn list_justifications(
        &self,
        date: Option<NaiveDate>,
        status: Option<JustificationStatus>,
    ) -> Result<Vec<Justification>, ApiError> {
        self.get_json(
            "/api/justifications/",
            &[
                ("date", date.map(|d| d.format("%Y-%m-%d").to_string())),
                ("status", status.map(|s| s.as_str().to_string())),
            ],
        )
        .await
    }

    pub async fn get_justification(&self, id: i64) -> Result<Justification, ApiError> {
        self.get_json(&format!("/api/justifications/{}", id), &[])
            .await
    }

    pub async fn update_justification(
        &self,
        id: i64,
        update: &UpdateJustificationRequest,
    ) -> Result<Justification, ApiError> {
        self.send_json(
            Method::PUT,
            &format!("/api/justifications/{}", id),
            update,
            true,
        )
        .await
    }

    /// Public endpoint: parents submit without a session.
    pub async fn create_justification(
        &self,
        request: &CreateJustificationRequest,
    ) -> Result<Justification, ApiError> {
        self.send_json(Method::POST, "/api/justifications/", request, false)
            .await
    }

    pub async fn validate_parent_email(&self, email: &str) -> Result<ParentEmailValidation, ApiError> {
        self.get_public_json(
            "/api/justifications/validate-email",
            &[("email", Some(email.trim().to_string()))],
        )
        .await
    }
}
