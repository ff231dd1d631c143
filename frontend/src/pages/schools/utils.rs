use chrono::{Datelike, NaiveDateTime};

use crate::{
    api::{ApiError, School, SchoolRequest},
    config,
};

pub const NAME_REQUIRED: &str = "El nombre del colegio es obligatorio";
pub const INVALID_TIME_ZONE: &str = "Selecciona una zona horaria válida";
pub const CREATE_FAILED: &str = "Error al crear el colegio";
pub const UPDATE_FAILED: &str = "Error al actualizar el colegio";
pub const LOAD_FAILED: &str = "Error al cargar los datos del colegio";
pub const LIST_FAILED: &str = "Error al cargar los colegios";
pub const CREATED: &str = "Colegio creado exitosamente";
pub const UPDATED: &str = "Colegio actualizado exitosamente";
pub const NO_SCHOOLS: &str = "No hay colegios registrados";
pub const NO_SCHOOLS_HINT: &str = "Haz clic en \"Añadir Colegio\" para crear uno";

pub const DEFAULT_TIME_ZONE: &str = "Europe/Madrid";
pub const TIME_ZONES: [&str; 5] = [
    "Europe/Madrid",
    "Atlantic/Canary",
    "Africa/Ceuta",
    "Europe/Lisbon",
    "Europe/London",
];

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Add and edit share one form; `id` is set while editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchoolFormState {
    pub id: Option<i64>,
    pub name: String,
    pub address: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub timezone: String,
    pub is_active: bool,
}

impl Default for SchoolFormState {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            address: String::new(),
            contact_email: String::new(),
            contact_phone: String::new(),
            timezone: DEFAULT_TIME_ZONE.into(),
            is_active: true,
        }
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl SchoolFormState {
    pub fn from_school(school: &School) -> Self {
        Self {
            id: Some(school.id),
            name: school.name.clone(),
            address: school.address.clone().unwrap_or_default(),
            contact_email: school.contact_email.clone().unwrap_or_default(),
            contact_phone: school.contact_phone.clone().unwrap_or_default(),
            timezone: school
                .timezone
                .clone()
                .unwrap_or_else(|| DEFAULT_TIME_ZONE.into()),
            is_active: school.is_active,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Empty optional fields go out as null; the active flag only on edit.
    pub fn to_request(&self) -> Result<SchoolRequest, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(NAME_REQUIRED.into());
        }
        let timezone = self.timezone.trim();
        if config::parse_time_zone(timezone).is_none() {
            return Err(INVALID_TIME_ZONE.into());
        }
        Ok(SchoolRequest {
            name: name.to_string(),
            address: optional(&self.address),
            contact_email: optional(&self.contact_email),
            contact_phone: optional(&self.contact_phone),
            timezone: timezone.to_string(),
            is_active: self.is_edit().then_some(self.is_active),
        })
    }
}

/// Backend rejections keep their detail; transport failures get the generic text.
pub fn save_error(err: ApiError, fallback: &str) -> ApiError {
    match err.code.as_str() {
        "REQUEST_FAILED" | "PARSE_ERROR" => ApiError::unknown(fallback),
        _ => err,
    }
}

/// `3 de septiembre de 2024`.
pub fn long_date(value: &NaiveDateTime) -> String {
    let month = usize::try_from(value.month0())
        .ok()
        .and_then(|i| MONTHS.get(i))
        .copied()
        .unwrap_or_default();
    format!("{} de {} de {}", value.day(), month, value.year())
}

/// Time zone choices, keeping an unlisted current value selectable.
pub fn time_zone_options(current: &str) -> Vec<String> {
    let mut options: Vec<String> = TIME_ZONES.iter().map(|tz| tz.to_string()).collect();
    if !current.is_empty() && !TIME_ZONES.contains(&current) {
        options.push(current.to_string());
    }
    options
}
