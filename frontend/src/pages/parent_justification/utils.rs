use chrono::NaiveDate;
use leptos::*;
use regex::Regex;
use std::sync::OnceLock;

use crate::api::{
    ApiError, CreateJustificationRequest, JustificationType, ParentEmailValidation, ParentStudent,
};

pub const INVALID_EMAIL: &str = "Por favor ingrese un correo electrónico válido";
pub const CHECKING_EMAIL: &str = "Verificando correo electrónico...";
pub const UNKNOWN_EMAIL: &str =
    "Este correo electrónico no está registrado en el sistema. Por favor contacte con el colegio.";
pub const NO_STUDENTS: &str = "No se encontraron alumnos asociados a este correo electrónico";
pub const EMAIL_CHECK_FAILED: &str = "Error al verificar el correo. Por favor intente nuevamente.";
pub const EMAIL_NOT_VERIFIED: &str =
    "Por favor verifique el correo electrónico primero (presione Tab o haga clic fuera del campo)";
pub const STUDENT_REQUIRED: &str = "Por favor seleccione un alumno/a";
pub const REASON_REQUIRED: &str = "Por favor indique el motivo";
pub const DATE_REQUIRED: &str = "Por favor indique una fecha válida";

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: OnceLock<Option<Regex>> = OnceLock::new();

pub fn is_valid_email(raw: &str) -> bool {
    EMAIL_RE
        .get_or_init(|| {
            Regex::new(EMAIL_PATTERN)
                .map_err(|err| log::error!("Invalid email pattern: {}", err))
                .ok()
        })
        .as_ref()
        .is_some_and(|re| re.is_match(raw))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
    Success(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Info(text) | Notice::Error(text) | Notice::Success(text) => text,
        }
    }
}

/// Maps a failed email check to what the parent sees.
pub fn email_check_notice(error: &ApiError) -> Notice {
    if error.code == "HTTP_404" {
        Notice::Error(UNKNOWN_EMAIL.into())
    } else {
        Notice::Error(EMAIL_CHECK_FAILED.into())
    }
}

/// Notice for a successful email check; `None` means the form can continue.
pub fn validation_notice(validation: &ParentEmailValidation) -> Option<Notice> {
    validation
        .students
        .is_empty()
        .then(|| Notice::Error(NO_STUDENTS.into()))
}

pub fn student_option_label(student: &ParentStudent) -> String {
    match student.class_name.as_deref().filter(|c| !c.is_empty()) {
        Some(class_name) => format!("{} - {}", student.name, class_name),
        None => student.name.clone(),
    }
}

pub fn success_message(student_name: &str) -> String {
    format!(
        "Notificación enviada correctamente para {}. El colegio ha sido informado.",
        student_name
    )
}

#[derive(Clone, Copy)]
pub struct ParentFormState {
    pub email: RwSignal<String>,
    pub validated_email: RwSignal<Option<String>>,
    pub students: RwSignal<Vec<ParentStudent>>,
    pub student_id: RwSignal<String>,
    pub justification_type: RwSignal<String>,
    pub date: RwSignal<String>,
    pub reason: RwSignal<String>,
}

impl ParentFormState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            email: create_rw_signal(String::new()),
            validated_email: create_rw_signal(None),
            students: create_rw_signal(Vec::new()),
            student_id: create_rw_signal(String::new()),
            justification_type: create_rw_signal(JustificationType::Absence.as_str().to_string()),
            date: create_rw_signal(today.format("%Y-%m-%d").to_string()),
            reason: create_rw_signal(String::new()),
        }
    }

    pub fn reset(&self, today: NaiveDate) {
        self.email.set(String::new());
        self.forget_email();
        self.justification_type
            .set(JustificationType::Absence.as_str().to_string());
        self.date.set(today.format("%Y-%m-%d").to_string());
        self.reason.set(String::new());
    }

    pub fn forget_email(&self) {
        self.validated_email.set(None);
        self.students.set(Vec::new());
        self.student_id.set(String::new());
    }

    pub fn student_name(&self, id: i64) -> Option<String> {
        self.students
            .with_untracked(|students| students.iter().find(|s| s.id == id).map(|s| s.name.clone()))
    }

    /// Builds the submission, or the message explaining what is missing.
    pub fn to_request(&self) -> Result<CreateJustificationRequest, String> {
        let email = self.email.get_untracked().trim().to_string();
        if self.validated_email.get_untracked().as_deref() != Some(email.as_str()) {
            return Err(EMAIL_NOT_VERIFIED.into());
        }
        let student_id = self
            .student_id
            .get_untracked()
            .parse::<i64>()
            .map_err(|_| STUDENT_REQUIRED.to_string())?;
        let date = NaiveDate::parse_from_str(&self.date.get_untracked(), "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .ok_or_else(|| DATE_REQUIRED.to_string())?;
        let reason = self.reason.get_untracked().trim().to_string();
        if reason.is_empty() {
            return Err(REASON_REQUIRED.into());
        }
        let justification_type = JustificationType::parse(&self.justification_type.get_untracked())
            .unwrap_or(JustificationType::Absence);
        Ok(CreateJustificationRequest {
            student_id,
            justification_type,
            date,
            reason,
            submitted_by: email,
        })
    }
}
