use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, School, SchoolRequest},
};

impl ApiClient {
    /// Administrators get every school; everyone else only their own.
    pub async fn get_schools(&self) -> Result<Vec<School>, ApiError> {
        self.get_json("/api/schools/", &[]).await
    }

    pub async fn get_school(&self, id: i64) -> Result<School, ApiError> {
        self.get_json(&format!("/api/schools/{}", id), &[]).await
    }

    pub async fn create_school(&self, request: &SchoolRequest) -> Result<School, ApiError> {
        self.send_json(Method::POST, "/api/schools/", request, true)
            .await
    }

    pub async fn update_school(&self, id: i64, request: &SchoolRequest) -> Result<School, ApiError> {
        self.send_json(Method::PUT, &format!("/api/schools/{}", id), request, true)
            .await
    }
}
