use std::rc::Rc;

use serde_json::{json, Value};

use crate::{
    api::ApiClient,
    state::session::{Session, DASHBOARD_PATH, TOKEN_KEY},
    utils::{
        navigation::RecordingNavigator,
        storage::{KeyValueStore, MemoryStorage},
    },
};

/// Mock matcher for public endpoints: the request carries no bearer token.
pub fn without_authorization(req: &httpmock::prelude::HttpMockRequest) -> bool {
    !req.headers
        .as_ref()
        .is_some_and(|headers| headers.iter().any(|(name, _)| name.eq_ignore_ascii_case("authorization")))
}

/// Mock matcher for unscoped reports: no `school_id` in the query.
pub fn without_school_scope(req: &httpmock::prelude::HttpMockRequest) -> bool {
    !req.query_params
        .as_ref()
        .is_some_and(|params| params.iter().any(|(name, _)| name == "school_id"))
}

pub struct TestClient {
    pub api: ApiClient,
    pub storage: MemoryStorage,
    pub navigator: RecordingNavigator,
}

/// Client backed by in-memory storage, sitting on `path`, with no token.
pub fn anonymous_client(base_url: &str, path: &str) -> TestClient {
    let storage = MemoryStorage::default();
    let navigator = RecordingNavigator::at(path);
    let session = Session::new(Rc::new(storage.clone()), Rc::new(navigator.clone()));
    TestClient {
        api: ApiClient::with_session(base_url, session),
        storage,
        navigator,
    }
}

/// Client holding a bearer token `test-token`, sitting on the dashboard.
pub fn signed_in_client(base_url: &str) -> TestClient {
    let client = anonymous_client(base_url, DASHBOARD_PATH);
    client
        .api
        .session()
        .store("test-token", "director")
        .expect("memory storage");
    client
}

impl TestClient {
    pub fn token(&self) -> Option<String> {
        self.storage.get_item(TOKEN_KEY)
    }
}

pub fn snapshot_json() -> Value {
    json!({
        "stats": { "total_present": 20, "total_absent": 2, "total_late": 5, "date": "02/01/2025" },
        "checkins": [
            { "checkin_time": "02/01/2025 08:50:00", "student_name": "Juan Pérez", "school_name": "CEIP Sol", "checkout_time": null },
            { "checkin_time": "02/01/2025 08:55:00", "student_name": "María García", "school_name": "CEIP Sol", "checkout_time": "02/01/2025 14:00:00" }
        ],
        "late_students": [
            { "name": "Ana Ruiz", "time": "02/01/2025 09:12:00", "school_name": "CEIP Sol", "email_sent": true }
        ],
        "absent_students": [
            { "id": 7, "name": "Luis Gil", "class_name": "5A", "school_name": "CEIP Sol", "email_sent": false },
            { "id": 8, "name": "Eva Sanz", "class_name": "5B", "school_name": "CEIP Sol", "email_sent": true }
        ]
    })
}

pub fn justification_json(id: i64, student_id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "student_id": student_id,
        "justification_type": "absence",
        "date": "2025-01-02T00:00:00",
        "reason": "Fiebre",
        "status": status,
        "submitted_by": "familia@example.com",
        "submitted_at": "2025-01-02T07:45:00",
        "notes": null,
        "student_name": null
    })
}

pub fn user_json(role: &str) -> Value {
    json!({
        "id": 1,
        "email": "director@example.com",
        "username": "director",
        "full_name": "Marta López",
        "role": role,
        "is_admin": role == "admin",
        "is_active": true,
        "school_id": 1,
        "created_at": "2024-09-01T08:00:00"
    })
}

pub fn student_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "student_id": format!("{:03}", id),
        "name": name,
        "class_name": "5A",
        "parent_email": "familia@example.com",
        "school_id": 1,
        "qr_code_path": null,
        "is_active": true,
        "created_at": "2024-09-01T08:00:00",
        "school": { "id": 1, "name": "CEIP Sol", "timezone": "Europe/Madrid", "is_active": true }
    })
}
