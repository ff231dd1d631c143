use super::utils::{validate_credentials, LoginFormState};
use crate::api::{ApiError, LoginRequest};
use crate::state::{auth, auth::use_api_client, session::DASHBOARD_PATH};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
}

impl LoginViewModel {
    /// Validates locally before dispatching; input is kept on every failure.
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        let username = self.form.username.get_untracked();
        let password = self.form.password.get_untracked();
        if let Err(msg) = validate_credentials(&username, &password) {
            self.error.set(Some(ApiError::validation(msg)));
            return;
        }
        self.error.set(None);
        self.login_action.dispatch(LoginRequest {
            username: username.trim().to_string(),
            password,
        });
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let form = LoginFormState::default();
    let error = create_rw_signal(None::<ApiError>);
    let login_action = auth::use_login_action();
    let session = use_api_client().session().clone();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    session.navigate(DASHBOARD_PATH);
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    LoginViewModel {
        form,
        error,
        login_action,
    }
}
