use super::{
    repository::{ReportData, ReportsRepository},
    utils::{ReportForm, ReportKind, GENERATE_FAILED},
};
use crate::{
    api::{ApiError, ReportQuery, School, UserResponse},
    state::auth::{use_api_client, use_auth},
    utils::{message::MessageState, time::today_in_app_tz},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct ReportsViewModel {
    pub is_admin: Memo<bool>,
    pub form: RwSignal<ReportForm>,
    pub message: RwSignal<MessageState>,
    pub report: RwSignal<Option<ReportData>>,
    pub schools_resource: Resource<bool, Vec<School>>,
    pub generate_action: Action<(ReportKind, ReportQuery), Result<ReportData, ApiError>>,
}

/// A failed report keeps the previous one on screen.
fn apply_generate_result(
    result: Option<Result<ReportData, ApiError>>,
    report: RwSignal<Option<ReportData>>,
    message: RwSignal<MessageState>,
) {
    match result {
        Some(Ok(data)) => report.set(Some(data)),
        Some(Err(err)) => {
            log::error!("Error generating report: {}", err);
            message.update(|state| state.set_error(ApiError::unknown(GENERATE_FAILED)));
        }
        None => {}
    }
}

impl ReportsViewModel {
    pub fn new() -> Self {
        let (auth, _) = use_auth();
        let repository = store_value(ReportsRepository::new(use_api_client()));

        let is_admin = create_memo(move |_| {
            auth.with(|state| {
                state
                    .user
                    .as_ref()
                    .is_some_and(UserResponse::is_administrator)
            })
        });
        let form = create_rw_signal(ReportForm::new(today_in_app_tz()));
        let message = create_rw_signal(MessageState::default());
        let report = create_rw_signal(None::<ReportData>);

        let schools_resource = create_resource(
            move || is_admin.get(),
            move |allowed| {
                let repo = repository.get_value();
                async move {
                    if allowed {
                        repo.fetch_schools().await
                    } else {
                        Vec::new()
                    }
                }
            },
        );

        let generate_action = create_action(move |(kind, query): &(ReportKind, ReportQuery)| {
            let repo = repository.get_value();
            let (kind, query) = (*kind, query.clone());
            async move { repo.generate(kind, query).await }
        });

        create_effect(move |_| {
            apply_generate_result(generate_action.value().get(), report, message);
        });

        Self {
            is_admin,
            form,
            message,
            report,
            schools_resource,
            generate_action,
        }
    }

    /// The generated report, while it still matches the selected view.
    pub fn current_report(&self) -> Signal<Option<ReportData>> {
        let report = self.report;
        let form = self.form;
        Signal::derive(move || {
            let kind = form.with(|f| f.kind);
            report.get().filter(|data| data.kind() == kind)
        })
    }

    pub fn set_kind(&self, raw: &str) {
        if let Some(kind) = ReportKind::parse(raw) {
            self.form.update(|f| f.kind = kind);
        }
    }

    pub fn generate(&self) {
        if self.generate_action.pending().get_untracked() {
            return;
        }
        self.message.update(MessageState::clear);
        let is_admin = self.is_admin.get_untracked();
        let (kind, query) = self.form.with_untracked(|form| (form.kind, form.query(is_admin)));
        match query {
            Ok(query) => self.generate_action.dispatch((kind, query)),
            Err(msg) => self
                .message
                .update(|state| state.set_error(ApiError::validation(msg))),
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::signed_in_client;
    use crate::api::AttendanceStatistics;
    use crate::pages::reports::utils::DATE_RANGE_REQUIRED;
    use crate::test_support::helpers::{admin_user, director_user, provide_auth, provide_test_client};
    use crate::test_support::ssr::{wait_until, with_local_runtime_async, with_runtime};
    use httpmock::prelude::*;
    use serde_json::json;

    fn new_vm() -> ReportsViewModel {
        leptos_reactive::suppress_resource_load(true);
        let vm = ReportsViewModel::new();
        leptos_reactive::suppress_resource_load(false);
        vm
    }

    #[test]
    fn empty_range_never_dispatches() {
        with_runtime(|| {
            provide_test_client();
            provide_auth(Some(director_user()));
            let vm = new_vm();
            vm.form.update(|f| f.end = String::new());
            vm.generate();
            assert_eq!(
                vm.message.get().error.map(|e| e.error).as_deref(),
                Some(DATE_RANGE_REQUIRED)
            );
            assert!(vm.generate_action.value().get().is_none());
        });
    }

    #[test]
    fn switching_views_hides_a_report_of_another_kind() {
        with_runtime(|| {
            provide_test_client();
            provide_auth(Some(director_user()));
            let vm = new_vm();
            vm.report
                .set(Some(ReportData::Statistics(AttendanceStatistics::default())));
            assert!(vm.current_report().get().is_some());
            vm.set_kind("history");
            assert_eq!(vm.form.get().kind, ReportKind::History);
            assert!(vm.current_report().get().is_none());
            vm.set_kind("unknown");
            assert_eq!(vm.form.get().kind, ReportKind::History);
        });
    }

    #[test]
    fn failed_report_keeps_the_previous_one() {
        with_runtime(|| {
            let previous = ReportData::Statistics(AttendanceStatistics::default());
            let report = create_rw_signal(Some(previous.clone()));
            let message = create_rw_signal(MessageState::default());
            apply_generate_result(
                Some(Err(ApiError::from_response(500, None))),
                report,
                message,
            );
            assert_eq!(report.get(), Some(previous));
            assert_eq!(
                message.get().error.map(|e| e.error).as_deref(),
                Some(GENERATE_FAILED)
            );
        });
    }

    #[test]
    fn admin_report_is_scoped_to_the_chosen_school() {
        with_local_runtime_async(|| async {
            let server = MockServer::start_async().await;
            let tardiness = server
                .mock_async(|when, then| {
                    when.method(GET)
                        .path("/api/reports/tardiness-analysis")
                        .query_param("school_id", "2");
                    then.status(200).json_body(json!({
                        "top_tardy_students": [
                            { "student_name": "Ana Ruiz", "total_attendance": 20, "late_count": 12, "late_percentage": 60.0 }
                        ],
                        "weekly_trends": []
                    }));
                })
                .await;
            let client = signed_in_client(&server.base_url());
            provide_context(client.api.clone());
            provide_auth(Some(admin_user()));
            let vm = new_vm();

            vm.form.update(|f| {
                f.kind = ReportKind::Tardiness;
                f.school_id = "2".into();
            });
            vm.generate();
            assert!(wait_until(|| vm.generate_action.value().get().is_some()).await);
            apply_generate_result(vm.generate_action.value().get_untracked(), vm.report, vm.message);

            tardiness.assert_async().await;
            match vm.current_report().get() {
                Some(ReportData::Tardiness(analysis)) => {
                    assert_eq!(analysis.top_tardy_students[0].late_count, 12)
                }
                other => panic!("unexpected report: {:?}", other),
            }
        });
    }
}
