use futures::future::join;

use crate::{
    api::{ApiClient, ApiError, DashboardQuery, JustificationStatus, School, Student},
    pages::dashboard::model::RefreshOutcome,
};

/// Fetches the snapshot and the pending justifications for `query` concurrently.
pub async fn refresh(api: &ApiClient, query: &DashboardQuery) -> RefreshOutcome {
    let (snapshot, justifications) = join(
        api.get_dashboard(query),
        api.list_justifications(Some(query.date), Some(JustificationStatus::Pending)),
    )
    .await;
    RefreshOutcome {
        snapshot,
        justifications,
    }
}

pub async fn load_classes(api: &ApiClient) -> Vec<String> {
    api.get_classes().await.unwrap_or_else(|err| {
        log::error!("Error loading classes: {}", err);
        Vec::new()
    })
}

pub async fn load_schools(api: &ApiClient) -> Vec<School> {
    api.get_schools().await.unwrap_or_else(|err| {
        log::error!("Error loading schools: {}", err);
        Vec::new()
    })
}

pub async fn load_student(api: &ApiClient, id: i64) -> Result<Student, ApiError> {
    api.get_student(id).await
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::*;
    use crate::pages::dashboard::model::DashboardState;
    use chrono::{NaiveDate, NaiveTime};
    use httpmock::prelude::*;
    use serde_json::json;

    fn query() -> DashboardQuery {
        DashboardQuery {
            date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
            class_name: None,
            school_id: None,
        }
    }

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[tokio::test]
    async fn refresh_merges_snapshot_and_pending_justifications() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/checkin/dashboard");
                then.status(200).json_body(snapshot_json());
            })
            .await;
        let pending = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/justifications/")
                    .query_param("date", "2025-01-02")
                    .query_param("status", "pending");
                then.status(200)
                    .json_body(json!([justification_json(1, 7, "pending")]));
            })
            .await;

        let client = signed_in_client(&server.base_url());
        let mut state = DashboardState::default();
        assert!(state.apply(refresh(&client.api, &query()).await, at(9, 0)));

        pending.assert_async().await;
        let metrics = state.metrics();
        assert_eq!(metrics.present, 20);
        assert_eq!(metrics.justified, 1);
        assert_eq!(metrics.unjustified_absent, 1);
    }

    #[tokio::test]
    async fn justification_failure_degrades_to_empty_index() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/checkin/dashboard");
                then.status(200).json_body(snapshot_json());
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/justifications/");
                then.status(500);
            })
            .await;

        let client = signed_in_client(&server.base_url());
        let mut state = DashboardState::default();
        assert!(state.apply(refresh(&client.api, &query()).await, at(9, 0)));

        assert!(state.justifications.is_empty());
        assert_eq!(state.metrics().unjustified_absent, 2);
        assert!(state.status.is_none());
    }

    #[tokio::test]
    async fn dashboard_failure_keeps_previous_render() {
        let server = MockServer::start_async().await;
        let mut ok = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/checkin/dashboard");
                then.status(200).json_body(snapshot_json());
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/justifications/");
                then.status(200).json_body(json!([]));
            })
            .await;

        let client = signed_in_client(&server.base_url());
        let mut state = DashboardState::default();
        state.apply(refresh(&client.api, &query()).await, at(9, 0));
        let before = state.metrics();

        ok.delete_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/checkin/dashboard");
                then.status(503);
            })
            .await;

        assert!(!state.apply(refresh(&client.api, &query()).await, at(9, 1)));
        assert_eq!(state.metrics(), before);
        assert!(state.status.is_some());
        assert_eq!(state.last_updated, Some(at(9, 0)));
    }

    #[tokio::test]
    async fn option_lists_fall_back_to_empty() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/checkin/classes");
                then.status(200).json_body(json!(["5A", "5B"]));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/schools/");
                then.status(403).json_body(json!({ "detail": "Not enough permissions" }));
            })
            .await;

        let client = signed_in_client(&server.base_url());
        assert_eq!(load_classes(&client.api).await, vec!["5A", "5B"]);
        assert!(load_schools(&client.api).await.is_empty());
    }

    #[tokio::test]
    async fn profile_reads_the_student_record() {
        let server = MockServer::start_async().await;
        let detail = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/students/7");
                then.status(200).json_body(student_json(7, "Luis Gil"));
            })
            .await;

        let client = signed_in_client(&server.base_url());
        let student = load_student(&client.api, 7).await.unwrap();

        detail.assert_async().await;
        assert_eq!(student.student_id, "007");
        assert_eq!(
            student.created_at.map(|d| d.format("%d/%m/%Y").to_string()).as_deref(),
            Some("01/09/2024")
        );
    }
}
