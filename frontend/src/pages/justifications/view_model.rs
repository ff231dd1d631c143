use crate::api::{ApiError, Justification, JustificationStatus};
use crate::pages::justifications::{
    repository::{JustificationsRepository, ReviewList},
    utils::{decision_message, normalize_notes, parse_status_filter, DETAIL_LOAD_FAILED},
};
use crate::state::auth::use_api_client;
use crate::utils::message::MessageState;
use leptos::*;

#[derive(Clone, Debug, PartialEq)]
pub struct ReviewPayload {
    pub id: i64,
    pub status: JustificationStatus,
    pub notes: Option<String>,
}

#[derive(Clone, Copy)]
pub struct JustificationsViewModel {
    pub status_filter: RwSignal<String>,
    pub message: RwSignal<MessageState>,
    pub selected: RwSignal<Option<Justification>>,
    pub notes: RwSignal<String>,
    pub list_resource: Resource<(u32, String), Result<ReviewList, ApiError>>,
    pub review_action: Action<ReviewPayload, Result<JustificationStatus, ApiError>>,
    pub detail_action: Action<i64, Result<Justification, ApiError>>,
    reload: RwSignal<u32>,
}

fn apply_review_result(
    result: Option<Result<JustificationStatus, ApiError>>,
    message: RwSignal<MessageState>,
    selected: RwSignal<Option<Justification>>,
    notes: RwSignal<String>,
    reload: RwSignal<u32>,
) {
    if let Some(result) = result {
        match result {
            Ok(status) => {
                message.update(|msg| msg.set_success(decision_message(status)));
                selected.set(None);
                notes.set(String::new());
                reload.update(|value| *value = value.wrapping_add(1));
            }
            // The panel stays open so the reviewer can retry with the same notes.
            Err(err) => message.update(|msg| msg.set_error(err)),
        }
    }
}

/// Swaps the list copy for the fresh record while the same review is still open.
/// Notes the reviewer already edited are kept.
fn apply_detail_result(
    result: Option<Result<Justification, ApiError>>,
    message: RwSignal<MessageState>,
    selected: RwSignal<Option<Justification>>,
    notes: RwSignal<String>,
) {
    let Some(result) = result else {
        return;
    };
    match result {
        Ok(fresh) => {
            let Some(current) = selected
                .get_untracked()
                .filter(|current| current.id == fresh.id)
            else {
                return;
            };
            if notes.get_untracked() == current.notes.unwrap_or_default() {
                notes.set(fresh.notes.clone().unwrap_or_default());
            }
            selected.set(Some(fresh));
        }
        Err(err) => {
            log::error!("Error loading justification: {}", err);
            message.update(|msg| msg.set_error(ApiError::unknown(DETAIL_LOAD_FAILED)));
        }
    }
}

impl JustificationsViewModel {
    pub fn new() -> Self {
        let repository = store_value(JustificationsRepository::new(use_api_client()));
        let status_filter = create_rw_signal(String::new());
        let message = create_rw_signal(MessageState::default());
        let selected = create_rw_signal(None::<Justification>);
        let notes = create_rw_signal(String::new());
        let reload = create_rw_signal(0u32);

        let list_resource = create_resource(
            move || (reload.get(), status_filter.get()),
            move |(_, status)| {
                let repo = repository.get_value();
                async move { repo.load(parse_status_filter(&status)).await }
            },
        );

        let review_action = create_action(move |payload: &ReviewPayload| {
            let repo = repository.get_value();
            let payload = payload.clone();
            async move {
                repo.review(payload.id, payload.status, payload.notes)
                    .await
                    .map(|updated| updated.status)
            }
        });

        let detail_action = create_action(move |id: &i64| {
            let repo = repository.get_value();
            let id = *id;
            async move { repo.fetch_one(id).await }
        });

        create_effect(move |_| {
            apply_review_result(review_action.value().get(), message, selected, notes, reload);
        });
        create_effect(move |_| {
            apply_detail_result(detail_action.value().get(), message, selected, notes);
        });

        Self {
            status_filter,
            message,
            selected,
            notes,
            list_resource,
            review_action,
            detail_action,
            reload,
        }
    }

    /// Opens with the list copy right away, then refreshes it from the detail endpoint.
    pub fn open_review(&self, justification: Justification) {
        self.message.update(|msg| msg.clear());
        self.notes
            .set(justification.notes.clone().unwrap_or_default());
        let id = justification.id;
        self.selected.set(Some(justification));
        self.detail_action.dispatch(id);
    }

    pub fn close_review(&self) {
        self.selected.set(None);
        self.notes.set(String::new());
    }

    pub fn decide(&self, status: JustificationStatus) {
        if self.review_action.pending().get_untracked() {
            return;
        }
        let Some(id) = self.selected.with_untracked(|s| s.as_ref().map(|j| j.id)) else {
            return;
        };
        self.review_action.dispatch(ReviewPayload {
            id,
            status,
            notes: normalize_notes(&self.notes.get_untracked()),
        });
    }

    pub fn reload(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::justification_json;
    use crate::test_support::ssr::{wait_until, with_local_runtime_async, with_runtime};
    use httpmock::prelude::*;
    use serde_json::json;

    fn pending() -> Justification {
        let mut j: Justification =
            serde_json::from_value(justification_json(4, 7, "pending")).unwrap();
        j.notes = Some("Llamar a la familia".into());
        j
    }

    #[test]
    fn opening_a_review_prefills_then_refreshes() {
        with_local_runtime_async(|| async {
            let server = MockServer::start_async().await;
            let detail = server
                .mock_async(|when, then| {
                    let mut fresh = justification_json(4, 7, "pending");
                    fresh["notes"] = json!("Trae justificante médico");
                    fresh["reason"] = json!("Fiebre alta");
                    when.method(GET).path("/api/justifications/4");
                    then.status(200).json_body(fresh);
                })
                .await;
            let client = crate::api::test_support::signed_in_client(&server.base_url());
            provide_context(client.api.clone());
            leptos_reactive::suppress_resource_load(true);
            let vm = JustificationsViewModel::new();
            leptos_reactive::suppress_resource_load(false);

            vm.open_review(pending());
            assert_eq!(vm.notes.get(), "Llamar a la familia");
            assert_eq!(vm.selected.get().map(|j| j.id), Some(4));

            assert!(wait_until(|| vm.detail_action.value().get().is_some()).await);
            apply_detail_result(
                vm.detail_action.value().get_untracked(),
                vm.message,
                vm.selected,
                vm.notes,
            );
            detail.assert_async().await;
            assert_eq!(vm.notes.get(), "Trae justificante médico");
            assert_eq!(vm.selected.get().map(|j| j.reason).as_deref(), Some("Fiebre alta"));

            vm.close_review();
            assert!(vm.selected.get().is_none());
            assert!(vm.notes.get().is_empty());
        });
    }

    #[test]
    fn late_detail_keeps_edited_notes_and_ignores_other_reviews() {
        with_runtime(|| {
            let message = create_rw_signal(MessageState::default());
            let selected = create_rw_signal(Some(pending()));
            let notes = create_rw_signal("Ya he hablado con la madre".to_string());
            let mut fresh = pending();
            fresh.reason = "Fiebre alta".into();
            fresh.notes = Some("otra nota".into());

            apply_detail_result(Some(Ok(fresh.clone())), message, selected, notes);
            assert_eq!(notes.get(), "Ya he hablado con la madre");
            assert_eq!(selected.get().map(|j| j.reason).as_deref(), Some("Fiebre alta"));

            fresh.id = 99;
            fresh.reason = "Otra".into();
            apply_detail_result(Some(Ok(fresh)), message, selected, notes);
            assert_eq!(selected.get().map(|j| j.id), Some(4));
        });
    }

    #[test]
    fn failed_detail_reports_an_error() {
        with_runtime(|| {
            let message = create_rw_signal(MessageState::default());
            let selected = create_rw_signal(Some(pending()));
            let notes = create_rw_signal(String::new());

            apply_detail_result(
                Some(Err(ApiError::from_response(404, None))),
                message,
                selected,
                notes,
            );

            assert_eq!(
                message.get().error.map(|e| e.error).as_deref(),
                Some(DETAIL_LOAD_FAILED)
            );
            assert!(selected.get().is_some());
        });
    }

    #[test]
    fn successful_review_closes_panel_and_reloads() {
        with_runtime(|| {
            let message = create_rw_signal(MessageState::default());
            let selected = create_rw_signal(Some(pending()));
            let notes = create_rw_signal("ok".to_string());
            let reload = create_rw_signal(0u32);

            apply_review_result(
                Some(Ok(JustificationStatus::Approved)),
                message,
                selected,
                notes,
                reload,
            );

            assert_eq!(
                message.get().success.as_deref(),
                Some("Justificación aprobada correctamente")
            );
            assert!(selected.get().is_none());
            assert_eq!(reload.get(), 1);
        });
    }

    #[test]
    fn failed_review_keeps_panel_open() {
        with_runtime(|| {
            let message = create_rw_signal(MessageState::default());
            let selected = create_rw_signal(Some(pending()));
            let notes = create_rw_signal("ok".to_string());
            let reload = create_rw_signal(0u32);

            apply_review_result(
                Some(Err(ApiError::unknown("No se pudo actualizar"))),
                message,
                selected,
                notes,
                reload,
            );

            assert_eq!(
                message.get().error.map(|e| e.error).as_deref(),
                Some("No se pudo actualizar")
            );
            assert!(selected.get().is_some());
            assert_eq!(notes.get(), "ok");
            assert_eq!(reload.get(), 0);
        });
    }

    #[test]
    fn decide_sends_trimmed_notes() {
        with_local_runtime_async(|| async {
            let server = MockServer::start_async().await;
            let update = server
                .mock_async(|when, then| {
                    when.method(PUT)
                        .path("/api/justifications/4")
                        .json_body(json!({ "status": "approved", "notes": null }));
                    then.status(200)
                        .json_body(justification_json(4, 7, "approved"));
                })
                .await;
            let client = crate::api::test_support::signed_in_client(&server.base_url());
            provide_context(client.api.clone());
            leptos_reactive::suppress_resource_load(true);
            let vm = JustificationsViewModel::new();
            leptos_reactive::suppress_resource_load(false);

            vm.open_review(pending());
            vm.notes.set("   ".into());
            vm.decide(JustificationStatus::Approved);

            assert!(
                wait_until(|| vm.review_action.value().get().is_some()).await,
                "review should complete"
            );
            assert_eq!(
                vm.review_action.value().get(),
                Some(Ok(JustificationStatus::Approved))
            );
            update.assert_async().await;
        });
    }
}
