use crate::api::{ApiError, CreateJustificationRequest, Justification, ParentEmailValidation};
use crate::pages::parent_justification::{
    repository::ParentJustificationRepository,
    utils::{
        email_check_notice, is_valid_email, success_message, validation_notice, Notice,
        ParentFormState, CHECKING_EMAIL, INVALID_EMAIL,
    },
};
use crate::state::auth::use_api_client;
use crate::utils::time::today_in_app_tz;
use leptos::*;

type ValidationResult = (String, Result<ParentEmailValidation, ApiError>);

#[derive(Clone, Copy)]
pub struct ParentJustificationViewModel {
    pub form: ParentFormState,
    pub notice: RwSignal<Option<Notice>>,
    pub validate_action: Action<String, ValidationResult>,
    pub submit_action: Action<CreateJustificationRequest, Result<Justification, ApiError>>,
}

fn apply_validation_result(
    result: Option<ValidationResult>,
    form: ParentFormState,
    notice: RwSignal<Option<Notice>>,
) {
    let Some((email, result)) = result else {
        return;
    };
    // A slower check for an address the parent has since changed is stale.
    if form.email.get_untracked().trim() != email {
        return;
    }
    match result {
        Ok(validation) => {
            let problem = validation_notice(&validation);
            if problem.is_some() {
                form.forget_email();
            } else {
                form.validated_email.set(Some(email));
                form.students.set(validation.students);
                form.student_id.set(String::new());
            }
            notice.set(problem);
        }
        Err(err) => {
            log::warn!("Parent email check failed: {}", err);
            form.forget_email();
            notice.set(Some(email_check_notice(&err)));
        }
    }
}

fn apply_submit_result(
    result: Option<Result<Justification, ApiError>>,
    form: ParentFormState,
    notice: RwSignal<Option<Notice>>,
) {
    let Some(result) = result else {
        return;
    };
    match result {
        Ok(created) => {
            let name = form
                .student_name(created.student_id)
                .unwrap_or_else(|| format!("Alumno #{}", created.student_id));
            form.reset(today_in_app_tz());
            notice.set(Some(Notice::Success(success_message(&name))));
        }
        Err(err) => notice.set(Some(Notice::Error(err.error))),
    }
}

impl ParentJustificationViewModel {
    pub fn new() -> Self {
        let repository = store_value(ParentJustificationRepository::new(use_api_client()));
        let form = ParentFormState::new(today_in_app_tz());
        let notice = create_rw_signal(None::<Notice>);

        let validate_action = create_action(move |email: &String| {
            let repo = repository.get_value();
            let email = email.clone();
            async move {
                let result = repo.validate_email(&email).await;
                (email, result)
            }
        });

        let submit_action = create_action(move |request: &CreateJustificationRequest| {
            let repo = repository.get_value();
            let request = request.clone();
            async move { repo.submit(request).await }
        });

        create_effect(move |_| {
            apply_validation_result(validate_action.value().get(), form, notice);
        });
        create_effect(move |_| {
            apply_submit_result(submit_action.value().get(), form, notice);
        });

        Self {
            form,
            notice,
            validate_action,
            submit_action,
        }
    }

    /// Runs when the email field loses focus.
    pub fn check_email(&self) {
        let email = self.form.email.get_untracked().trim().to_string();
        if email.is_empty() {
            return;
        }
        if self.form.validated_email.get_untracked().as_deref() == Some(email.as_str()) {
            return;
        }
        if !is_valid_email(&email) {
            self.form.forget_email();
            self.notice.set(Some(Notice::Error(INVALID_EMAIL.into())));
            return;
        }
        self.notice.set(Some(Notice::Info(CHECKING_EMAIL.into())));
        self.validate_action.dispatch(email);
    }

    pub fn submit(&self) {
        if self.submit_action.pending().get_untracked() {
            return;
        }
        match self.form.to_request() {
            Ok(request) => {
                self.notice.set(None);
                self.submit_action.dispatch(request);
            }
            Err(msg) => self.notice.set(Some(Notice::Error(msg))),
        }
    }
}
