use super::{
    repository::{SaveOutcome, SchoolsRepository},
    utils::{save_error, SchoolFormState, CREATED, CREATE_FAILED, LOAD_FAILED, UPDATED, UPDATE_FAILED},
};
use crate::{
    api::{ApiError, School, SchoolRequest},
    state::auth::use_api_client,
    utils::message::MessageState,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct SchoolsViewModel {
    pub editor: RwSignal<Option<SchoolFormState>>,
    pub form_messages: RwSignal<MessageState>,
    pub list_messages: RwSignal<MessageState>,
    pub schools_reload: RwSignal<u32>,
    pub schools_resource: Resource<u32, Result<Vec<School>, ApiError>>,
    pub load_action: Action<i64, Result<School, ApiError>>,
    pub save_action: Action<(Option<i64>, SchoolRequest), Result<SaveOutcome, ApiError>>,
}

/// A school that arrives after another form was opened is dropped.
fn apply_load_result(
    result: Option<Result<School, ApiError>>,
    editor: RwSignal<Option<SchoolFormState>>,
    list_messages: RwSignal<MessageState>,
) {
    match result {
        Some(Ok(school)) => {
            if editor.with_untracked(Option::is_none) {
                editor.set(Some(SchoolFormState::from_school(&school)));
            }
        }
        Some(Err(err)) => {
            log::error!("Error loading school: {}", err);
            list_messages.update(|state| state.set_error(ApiError::unknown(LOAD_FAILED)));
        }
        None => {}
    }
}

fn apply_save_result(
    result: Option<Result<SaveOutcome, ApiError>>,
    editor: RwSignal<Option<SchoolFormState>>,
    form_messages: RwSignal<MessageState>,
    list_messages: RwSignal<MessageState>,
    schools_reload: RwSignal<u32>,
) {
    match result {
        Some(Ok(outcome)) => {
            let message = match outcome {
                SaveOutcome::Created(_) => CREATED,
                SaveOutcome::Updated(_) => UPDATED,
            };
            list_messages.update(|state| state.set_success(message));
            editor.set(None);
            schools_reload.update(|value| *value = value.wrapping_add(1));
        }
        Some(Err(err)) => {
            let editing = editor.with_untracked(|e| e.as_ref().is_some_and(SchoolFormState::is_edit));
            let fallback = if editing { UPDATE_FAILED } else { CREATE_FAILED };
            form_messages.update(|state| state.set_error(save_error(err, fallback)));
        }
        None => {}
    }
}

impl SchoolsViewModel {
    pub fn new() -> Self {
        let repository = store_value(SchoolsRepository::new(use_api_client()));

        let editor = create_rw_signal(None::<SchoolFormState>);
        let form_messages = create_rw_signal(MessageState::default());
        let list_messages = create_rw_signal(MessageState::default());
        let schools_reload = create_rw_signal(0u32);

        let schools_resource = create_resource(
            move || schools_reload.get(),
            move |_| {
                let repo = repository.get_value();
                async move { repo.fetch_schools().await }
            },
        );

        let load_action = create_action(move |id: &i64| {
            let repo = repository.get_value();
            let id = *id;
            async move { repo.fetch_school(id).await }
        });

        let save_action = create_action(move |(id, request): &(Option<i64>, SchoolRequest)| {
            let repo = repository.get_value();
            let (id, request) = (*id, request.clone());
            async move { repo.save(id, request).await }
        });

        create_effect(move |_| {
            apply_load_result(load_action.value().get(), editor, list_messages);
        });
        create_effect(move |_| {
            apply_save_result(
                save_action.value().get(),
                editor,
                form_messages,
                list_messages,
                schools_reload,
            );
        });

        Self {
            editor,
            form_messages,
            list_messages,
            schools_reload,
            schools_resource,
            load_action,
            save_action,
        }
    }

    pub fn open_create(&self) {
        self.form_messages.update(MessageState::clear);
        self.list_messages.update(MessageState::clear);
        self.editor.set(Some(SchoolFormState::default()));
    }

    /// The edit form fills from a fresh copy of the school.
    pub fn open_edit(&self, id: i64) {
        self.form_messages.update(MessageState::clear);
        self.list_messages.update(MessageState::clear);
        self.editor.set(None);
        self.load_action.dispatch(id);
    }

    pub fn close_editor(&self) {
        if !self.save_action.pending().get_untracked() {
            self.editor.set(None);
        }
    }

    pub fn update_form(&self, f: impl FnOnce(&mut SchoolFormState)) {
        self.editor.update(|editor| {
            if let Some(form) = editor.as_mut() {
                f(form);
            }
        });
    }

    pub fn submit(&self) {
        if self.save_action.pending().get_untracked() {
            return;
        }
        self.form_messages.update(MessageState::clear);
        let Some(prepared) = self
            .editor
            .with_untracked(|e| e.as_ref().map(|form| (form.id, form.to_request())))
        else {
            return;
        };
        match prepared {
            (id, Ok(request)) => self.save_action.dispatch((id, request)),
            (_, Err(msg)) => self
                .form_messages
                .update(|state| state.set_error(ApiError::validation(msg))),
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::signed_in_client;
    use crate::pages::schools::utils::NAME_REQUIRED;
    use crate::test_support::helpers::{admin_user, provide_auth, provide_test_client};
    use crate::test_support::ssr::{wait_until, with_local_runtime_async, with_runtime};
    use httpmock::prelude::*;
    use serde_json::json;

    fn new_vm() -> SchoolsViewModel {
        leptos_reactive::suppress_resource_load(true);
        let vm = SchoolsViewModel::new();
        leptos_reactive::suppress_resource_load(false);
        vm
    }

    fn luna() -> School {
        serde_json::from_value(json!({ "id": 5, "name": "CEIP Luna", "timezone": "Europe/Madrid" })).unwrap()
    }

    #[test]
    fn blank_name_never_dispatches() {
        with_runtime(|| {
            provide_test_client();
            provide_auth(Some(admin_user()));
            let vm = new_vm();
            vm.open_create();
            vm.submit();
            assert_eq!(
                vm.form_messages.get().error.map(|e| e.error).as_deref(),
                Some(NAME_REQUIRED)
            );
            assert!(vm.save_action.value().get().is_none());
        });
    }

    #[test]
    fn saved_school_closes_the_form_and_reloads() {
        with_runtime(|| {
            let editor = create_rw_signal(Some(SchoolFormState::default()));
            let form_messages = create_rw_signal(MessageState::default());
            let list_messages = create_rw_signal(MessageState::default());
            let reload = create_rw_signal(0u32);
            apply_save_result(
                Some(Ok(SaveOutcome::Created(luna()))),
                editor,
                form_messages,
                list_messages,
                reload,
            );
            assert!(editor.get().is_none());
            assert_eq!(list_messages.get().success.as_deref(), Some(CREATED));
            assert_eq!(reload.get(), 1);
        });
    }

    #[test]
    fn failed_update_keeps_the_form_open() {
        with_runtime(|| {
            let form = SchoolFormState::from_school(&luna());
            let editor = create_rw_signal(Some(form.clone()));
            let form_messages = create_rw_signal(MessageState::default());
            let list_messages = create_rw_signal(MessageState::default());
            let reload = create_rw_signal(0u32);
            apply_save_result(
                Some(Err(ApiError::request_failed("offline"))),
                editor,
                form_messages,
                list_messages,
                reload,
            );
            assert_eq!(editor.get(), Some(form));
            assert_eq!(
                form_messages.get().error.map(|e| e.error).as_deref(),
                Some(UPDATE_FAILED)
            );
            assert_eq!(reload.get(), 0);
        });
    }

    #[test]
    fn late_school_does_not_replace_a_newer_form() {
        with_runtime(|| {
            let editor = create_rw_signal(Some(SchoolFormState::default()));
            let list_messages = create_rw_signal(MessageState::default());
            apply_load_result(Some(Ok(luna())), editor, list_messages);
            assert_eq!(editor.get(), Some(SchoolFormState::default()));

            apply_load_result(
                Some(Err(ApiError::from_response(404, None))),
                editor,
                list_messages,
            );
            assert_eq!(
                list_messages.get().error.map(|e| e.error).as_deref(),
                Some(LOAD_FAILED)
            );
        });
    }

    #[test]
    fn editing_fetches_the_school_then_fills_the_form() {
        with_local_runtime_async(|| async {
            let server = MockServer::start_async().await;
            let detail = server
                .mock_async(|when, then| {
                    when.method(GET).path("/api/schools/5");
                    then.status(200).json_body(json!({
                        "id": 5,
                        "name": "CEIP Luna",
                        "contact_phone": "912345678",
                        "timezone": "Atlantic/Canary",
                        "is_active": false
                    }));
                })
                .await;
            let client = signed_in_client(&server.base_url());
            provide_context(client.api.clone());
            provide_auth(Some(admin_user()));
            let vm = new_vm();

            vm.open_edit(5);
            assert!(wait_until(|| vm.load_action.value().get().is_some()).await);
            apply_load_result(vm.load_action.value().get_untracked(), vm.editor, vm.list_messages);

            detail.assert_async().await;
            let form = vm.editor.get().unwrap();
            assert_eq!(form.id, Some(5));
            assert_eq!(form.contact_phone, "912345678");
            assert_eq!(form.timezone, "Atlantic/Canary");
            assert!(!form.is_active);
        });
    }
}
