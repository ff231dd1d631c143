use super::{
    repository::StudentsRepository,
    utils::{filter_students, students_csv, students_file_name, StudentFormState},
};
use crate::{
    api::{ApiError, CreateStudentRequest, School, Student, UserResponse},
    state::auth::{use_api_client, use_auth},
    utils::{
        download::{self, NOTHING_TO_EXPORT},
        message::MessageState,
        time::today_in_app_tz,
    },
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct StudentsViewModel {
    pub user: Signal<Option<UserResponse>>,
    pub is_admin: Memo<bool>,
    pub search: RwSignal<String>,
    pub form: RwSignal<StudentFormState>,
    pub form_messages: RwSignal<MessageState>,
    pub list_messages: RwSignal<MessageState>,
    pub pending_delete: RwSignal<Option<Student>>,
    pub students_reload: RwSignal<u32>,
    pub students_resource: Resource<u32, Result<Vec<Student>, ApiError>>,
    pub schools_resource: Resource<bool, Vec<School>>,
    pub create_action: Action<CreateStudentRequest, Result<Student, ApiError>>,
    pub delete_action: Action<i64, Result<(), ApiError>>,
}

fn apply_create_result(
    result: Option<Result<Student, ApiError>>,
    form: RwSignal<StudentFormState>,
    form_messages: RwSignal<MessageState>,
    students_reload: RwSignal<u32>,
) {
    if let Some(result) = result {
        match result {
            Ok(student) => {
                form_messages.update(|state| {
                    state.set_success(format!("Alumno '{}' añadido correctamente", student.name))
                });
                form.update(|state| state.reset());
                students_reload.update(|value| *value = value.wrapping_add(1));
            }
            Err(err) => form_messages.update(|state| state.set_error(err)),
        }
    }
}

fn apply_delete_result(
    result: Option<Result<(), ApiError>>,
    list_messages: RwSignal<MessageState>,
    pending_delete: RwSignal<Option<Student>>,
    students_reload: RwSignal<u32>,
) {
    if let Some(result) = result {
        match result {
            Ok(()) => {
                list_messages.update(|state| state.set_success("Alumno eliminado correctamente"));
                students_reload.update(|value| *value = value.wrapping_add(1));
            }
            Err(err) => list_messages.update(|state| state.set_error(err)),
        }
        pending_delete.set(None);
    }
}

impl StudentsViewModel {
    pub fn new() -> Self {
        let (auth, _) = use_auth();
        let repository = store_value(StudentsRepository::new(use_api_client()));

        let user = Signal::derive(move || auth.get().user);
        let is_admin = create_memo(move |_| {
            auth.with(|state| {
                state
                    .user
                    .as_ref()
                    .is_some_and(UserResponse::is_administrator)
            })
        });
        let search = create_rw_signal(String::new());
        let form = create_rw_signal(StudentFormState::default());
        let form_messages = create_rw_signal(MessageState::default());
        let list_messages = create_rw_signal(MessageState::default());
        let pending_delete = create_rw_signal(None::<Student>);
        let students_reload = create_rw_signal(0u32);

        let students_resource = create_resource(
            move || students_reload.get(),
            move |_| {
                let repo = repository.get_value();
                async move { repo.fetch_students().await }
            },
        );

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

        let create = create_action(move |payload: &CreateStudentRequest| {
            let repo = repository.get_value();
            let payload = payload.clone();
            async move { repo.create_student(payload).await }
        });

        let delete_action = create_action(move |id: &i64| {
            let repo = repository.get_value();
            let id = *id;
            async move { repo.delete_student(id).await }
        });

        create_effect(move |_| {
            apply_create_result(create.value().get(), form, form_messages, students_reload);
        });
        create_effect(move |_| {
            apply_delete_result(
                delete_action.value().get(),
                list_messages,
                pending_delete,
                students_reload,
            );
        });

        Self {
            user,
            is_admin,
            search,
            form,
            form_messages,
            list_messages,
            pending_delete,
            students_reload,
            students_resource,
            schools_resource,
            create_action: create,
            delete_action,
        }
    }

    pub fn filtered_students(&self) -> Signal<Vec<Student>> {
        let resource = self.students_resource;
        let search = self.search;
        Signal::derive(move || {
            let term = search.get();
            resource
                .get()
                .and_then(|result| result.ok())
                .map(|students| filter_students(&students, &term))
                .unwrap_or_default()
        })
    }

    /// Local checks first so a bad form never reaches the backend.
    pub fn submit(&self) {
        if self.create_action.pending().get_untracked() {
            return;
        }
        self.form_messages.update(MessageState::clear);
        let user = self.user.get_untracked();
        match self.form.with_untracked(|form| form.to_request(user.as_ref())) {
            Ok(request) => self.create_action.dispatch(request),
            Err(msg) => self
                .form_messages
                .update(|state| state.set_error(ApiError::validation(msg))),
        }
    }

    pub fn request_delete(&self, student: Student) {
        self.list_messages.update(MessageState::clear);
        self.pending_delete.set(Some(student));
    }

    pub fn cancel_delete(&self) {
        if !self.delete_action.pending().get_untracked() {
            self.pending_delete.set(None);
        }
    }

    pub fn confirm_delete(&self) {
        if self.delete_action.pending().get_untracked() {
            return;
        }
        if let Some(id) = self.pending_delete.with_untracked(|s| s.as_ref().map(|s| s.id)) {
            self.delete_action.dispatch(id);
        }
    }

    pub fn export_csv(&self) {
        let students = self.filtered_students().get_untracked();
        if students.is_empty() {
            self.list_messages
                .update(|state| state.set_error(ApiError::unknown(NOTHING_TO_EXPORT)));
            return;
        }
        let result = students_csv(&students)
            .and_then(|csv| download::save_csv(&students_file_name(today_in_app_tz()), &csv));
        if let Err(err) = result {
            log::error!("Student export failed: {}", err);
            self.list_messages.update(|state| {
                state.set_error(ApiError::unknown(format!("No se pudo exportar: {}", err)))
            });
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::{signed_in_client, student_json};
    use crate::test_support::helpers::{admin_user, director_user, provide_auth, provide_test_client};
    use crate::test_support::ssr::{wait_until, with_local_runtime_async, with_runtime};
    use httpmock::prelude::*;
    use serde_json::json;

    fn student(id: i64, name: &str) -> Student {
        serde_json::from_value(student_json(id, name)).unwrap()
    }

    fn new_vm() -> StudentsViewModel {
        leptos_reactive::suppress_resource_load(true);
        let vm = StudentsViewModel::new();
        leptos_reactive::suppress_resource_load(false);
        vm
    }

    #[test]
    fn invalid_form_never_dispatches() {
        with_runtime(|| {
            provide_test_client();
            provide_auth(Some(admin_user()));
            let vm = new_vm();
            vm.form.set(StudentFormState {
                student_id: "042".into(),
                name: "Nora Vidal".into(),
                class_name: "3B".into(),
                parent_email: "vidal@example.com".into(),
                school_id: String::new(),
            });
            vm.submit();
            let error = vm.form_messages.get().error.unwrap();
            assert_eq!(error.error, "Selecciona un colegio");
            assert_eq!(vm.form.get().name, "Nora Vidal");
            assert!(vm.is_admin.get());
        });
    }

    #[test]
    fn created_student_resets_form_and_reloads() {
        with_runtime(|| {
            let form = create_rw_signal(StudentFormState {
                name: "Nora Vidal".into(),
                ..StudentFormState::default()
            });
            let messages = create_rw_signal(MessageState::default());
            let reload = create_rw_signal(0u32);
            apply_create_result(Some(Ok(student(42, "Nora Vidal"))), form, messages, reload);
            assert_eq!(form.get(), StudentFormState::default());
            assert_eq!(
                messages.get().success.as_deref(),
                Some("Alumno 'Nora Vidal' añadido correctamente")
            );
            assert_eq!(reload.get(), 1);
        });
    }

    #[test]
    fn rejected_student_keeps_input() {
        with_runtime(|| {
            let filled = StudentFormState {
                name: "Nora Vidal".into(),
                ..StudentFormState::default()
            };
            let form = create_rw_signal(filled.clone());
            let messages = create_rw_signal(MessageState::default());
            let reload = create_rw_signal(0u32);
            let error = ApiError::from_response(
                422,
                Some(&json!({ "detail": [{ "loc": ["body", "class_name"], "msg": "field required" }] })),
            );
            apply_create_result(Some(Err(error)), form, messages, reload);
            assert_eq!(form.get(), filled);
            assert_eq!(
                messages.get().error.map(|e| e.error).as_deref(),
                Some("body.class_name: field required")
            );
            assert_eq!(reload.get(), 0);
        });
    }

    #[test]
    fn delete_flow_needs_confirmation() {
        with_local_runtime_async(|| async {
            let server = MockServer::start_async().await;
            let delete = server
                .mock_async(|when, then| {
                    when.method(DELETE).path("/api/students/7");
                    then.status(204);
                })
                .await;
            let client = signed_in_client(&server.base_url());
            provide_context(client.api.clone());
            provide_auth(Some(director_user()));
            let vm = new_vm();

            vm.request_delete(student(7, "Luis Gil"));
            vm.cancel_delete();
            assert!(vm.pending_delete.get().is_none());

            vm.request_delete(student(7, "Luis Gil"));
            vm.confirm_delete();
            assert!(wait_until(|| vm.delete_action.value().get().is_some()).await);
            apply_delete_result(
                vm.delete_action.value().get_untracked(),
                vm.list_messages,
                vm.pending_delete,
                vm.students_reload,
            );

            delete.assert_async().await;
            assert!(vm.pending_delete.get().is_none());
            assert_eq!(vm.students_reload.get(), 1);
        });
    }

    #[test]
    fn empty_export_reports_nothing_to_export() {
        with_runtime(|| {
            provide_test_client();
            provide_auth(Some(director_user()));
            let vm = new_vm();
            vm.export_csv();
            assert_eq!(
                vm.list_messages.get().error.map(|e| e.error).as_deref(),
                Some(NOTHING_TO_EXPORT)
            );
        });
    }
}
