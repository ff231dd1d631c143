use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, CreateStudentRequest, Student},
};

impl ApiClient {
    pub async fn list_students(&self) -> Result<Vec<Student>, ApiError> {
        self.get_json("/api/students/", &[]).await
    }

    pub async fn get_student(&self, id: i64) -> Result<Student, ApiError> {
        self.get_json(&format!("/api/students/{}", id), &[]).await
    }

    pub async fn create_student(&self, request: &CreateStudentRequest) -> Result<Student, ApiError> {
        self.send_json(Method::POST, "/api/students/", request, true)
            .await
    }

    pub async fn delete_student(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/api/students/{}", id)).await
    }
}
