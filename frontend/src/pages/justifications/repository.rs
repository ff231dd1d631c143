use crate::api::{
    ApiClient, ApiError, Justification, JustificationStatus, Student, UpdateJustificationRequest,
};
use futures::future::join;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// What the review list needs: the justifications plus the student roster
/// used to name them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewList {
    pub justifications: Vec<Justification>,
    pub students: Vec<Student>,
}

#[derive(Clone)]
pub struct JustificationsRepository {
    client: Rc<ApiClient>,
}

impl JustificationsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    /// The roster only improves names, so its failure is logged and ignored.
    pub async fn load(&self, status: Option<JustificationStatus>) -> Result<ReviewList, ApiError> {
        let (justifications, students) = join(
            self.client.list_justifications(None, status),
            self.client.list_students(),
        )
        .await;
        let students = students.unwrap_or_else(|err| {
            log::warn!("Could not load students for justification names: {}", err);
            Vec::new()
        });
        Ok(ReviewList {
            justifications: justifications?,
            students,
        })
    }

    pub async fn fetch_one(&self, id: i64) -> Result<Justification, ApiError> {
        self.client.get_justification(id).await
    }

    pub async fn review(
        &self,
        id: i64,
        status: JustificationStatus,
        notes: Option<String>,
    ) -> Result<Justification, ApiError> {
        self.client
            .update_justification(id, &UpdateJustificationRequest { status, notes })
            .await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::{justification_json, signed_in_client, student_json};
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn load_combines_justifications_and_students() {
        let server = MockServer::start_async().await;
        let list = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/justifications/")
                    .query_param("status", "pending");
                then.status(200)
                    .json_body(json!([justification_json(1, 7, "pending")]));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/students/");
                then.status(200).json_body(json!([student_json(7, "Luis Gil")]));
            })
            .await;

        let client = signed_in_client(&server.base_url());
        let repo = JustificationsRepository::new(client.api.clone());
        let loaded = repo.load(Some(JustificationStatus::Pending)).await.unwrap();

        list.assert_async().await;
        assert_eq!(loaded.justifications.len(), 1);
        assert_eq!(loaded.students[0].name, "Luis Gil");
    }

    #[tokio::test]
    async fn load_survives_a_failing_roster() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/justifications/");
                then.status(200)
                    .json_body(json!([justification_json(1, 7, "approved")]));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/students/");
                then.status(500);
            })
            .await;

        let client = signed_in_client(&server.base_url());
        let repo = JustificationsRepository::new(client.api.clone());
        let loaded = repo.load(None).await.unwrap();

        assert_eq!(loaded.justifications.len(), 1);
        assert!(loaded.students.is_empty());
    }

    #[tokio::test]
    async fn fetch_one_reads_the_detail_endpoint() {
        let server = MockServer::start_async().await;
        let detail = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/justifications/5");
                then.status(200)
                    .json_body(justification_json(5, 7, "pending"));
            })
            .await;

        let client = signed_in_client(&server.base_url());
        let repo = JustificationsRepository::new(client.api.clone());
        let fetched = repo.fetch_one(5).await.unwrap();

        detail.assert_async().await;
        assert_eq!(fetched.id, 5);
        assert_eq!(fetched.reason, "Fiebre");
    }

    #[tokio::test]
    async fn review_sends_status_and_notes() {
        let server = MockServer::start_async().await;
        let update = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path("/api/justifications/3")
                    .json_body(json!({ "status": "rejected", "notes": "Sin justificante" }));
                then.status(200)
                    .json_body(justification_json(3, 7, "rejected"));
            })
            .await;

        let client = signed_in_client(&server.base_url());
        let repo = JustificationsRepository::new(client.api.clone());
        let updated = repo
            .review(3, JustificationStatus::Rejected, Some("Sin justificante".into()))
            .await
            .unwrap();

        update.assert_async().await;
        assert_eq!(updated.status, JustificationStatus::Rejected);
    }
}
