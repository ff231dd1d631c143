use chrono::NaiveDateTime;

use crate::api::{Justification, JustificationStatus, Student};

use super::repository::ReviewList;

/// Select options for the status filter; the empty value means every status.
pub const DETAIL_LOAD_FAILED: &str = "Error al cargar la justificación";

pub const STATUS_OPTIONS: [(&str, &str); 4] = [
    ("", "Todas"),
    ("pending", "Pendientes"),
    ("approved", "Aprobadas"),
    ("rejected", "Rechazadas"),
];

pub fn parse_status_filter(raw: &str) -> Option<JustificationStatus> {
    JustificationStatus::parse(raw.trim())
}

#[derive(Clone, Debug, PartialEq)]
pub struct JustificationRow {
    pub justification: Justification,
    pub student_name: String,
}

/// Server-provided name first, then the roster, then a placeholder.
pub fn student_name(justification: &Justification, students: &[Student]) -> String {
    justification
        .student_name
        .clone()
        .filter(|name| !name.trim().is_empty())
        .or_else(|| {
            students
                .iter()
                .find(|s| s.id == justification.student_id)
                .map(|s| s.name.clone())
        })
        .unwrap_or_else(|| format!("Alumno #{}", justification.student_id))
}

pub fn rows(list: &ReviewList) -> Vec<JustificationRow> {
    list.justifications
        .iter()
        .map(|j| JustificationRow {
            student_name: student_name(j, &list.students),
            justification: j.clone(),
        })
        .collect()
}

pub fn normalize_notes(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn decision_message(status: JustificationStatus) -> &'static str {
    match status {
        JustificationStatus::Approved => "Justificación aprobada correctamente",
        JustificationStatus::Rejected => "Justificación rechazada correctamente",
        JustificationStatus::Pending => "Justificación actualizada",
    }
}

pub fn format_day(value: &NaiveDateTime) -> String {
    value.format("%d/%m/%Y").to_string()
}

pub fn format_timestamp(value: &NaiveDateTime) -> String {
    value.format("%d/%m/%Y %H:%M").to_string()
}

pub fn status_badge_class(status: JustificationStatus) -> &'static str {
    match status {
        JustificationStatus::Pending => "bg-status-warning-bg text-status-warning-text",
        JustificationStatus::Approved => "bg-status-success-bg text-status-success-text",
        JustificationStatus::Rejected => "bg-status-error-bg text-status-error-text",
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::api::test_support::{justification_json, student_json};

    fn justification(student_id: i64) -> Justification {
        serde_json::from_value(justification_json(1, student_id, "pending")).unwrap()
    }

    #[test]
    fn names_come_from_the_server_then_the_roster() {
        let students: Vec<Student> =
            vec![serde_json::from_value(student_json(7, "Luis Gil")).unwrap()];

        let mut named = justification(7);
        named.student_name = Some("Luis G.".into());
        assert_eq!(student_name(&named, &students), "Luis G.");
        assert_eq!(student_name(&justification(7), &students), "Luis Gil");
        assert_eq!(student_name(&justification(9), &students), "Alumno #9");
    }

    #[test]
    fn blank_notes_become_none() {
        assert_eq!(normalize_notes("   "), None);
        assert_eq!(normalize_notes(" ok "), Some("ok".to_string()));
    }

    #[test]
    fn status_filter_accepts_known_values_only() {
        assert_eq!(parse_status_filter("approved"), Some(JustificationStatus::Approved));
        assert_eq!(parse_status_filter(""), None);
        assert_eq!(parse_status_filter("cancelled"), None);
    }

    #[test]
    fn dates_render_day_first() {
        let j = justification(7);
        assert_eq!(format_day(&j.date), "02/01/2025");
        assert_eq!(format_timestamp(&j.submitted_at), "02/01/2025 07:45");
    }
}
