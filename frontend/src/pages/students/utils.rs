use chrono::NaiveDate;

use crate::api::{CreateStudentRequest, Student, UserResponse};

pub const FIELDS_REQUIRED: &str = "Completa todos los campos obligatorios";
pub const SCHOOL_REQUIRED: &str = "Selecciona un colegio";
pub const NO_SCHOOL_ASSIGNED: &str = "Tu usuario no tiene un colegio asignado";
pub const NO_STUDENTS: &str = "No se encontraron estudiantes";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentFormState {
    pub student_id: String,
    pub name: String,
    pub class_name: String,
    pub parent_email: String,
    pub school_id: String,
}

impl StudentFormState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Administrators pick the school; everyone else files under their own.
    pub fn to_request(&self, user: Option<&UserResponse>) -> Result<CreateStudentRequest, String> {
        let required = [
            &self.student_id,
            &self.name,
            &self.class_name,
            &self.parent_email,
        ];
        if required.iter().any(|value| value.trim().is_empty()) {
            return Err(FIELDS_REQUIRED.into());
        }
        let is_admin = user.is_some_and(UserResponse::is_administrator);
        let school_id = if is_admin {
            self.school_id
                .trim()
                .parse::<i64>()
                .map_err(|_| SCHOOL_REQUIRED.to_string())?
        } else {
            user.and_then(|u| u.school_id)
                .ok_or_else(|| NO_SCHOOL_ASSIGNED.to_string())?
        };
        Ok(CreateStudentRequest {
            student_id: self.student_id.trim().to_string(),
            name: self.name.trim().to_string(),
            class_name: self.class_name.trim().to_string(),
            parent_email: self.parent_email.trim().to_string(),
            school_id,
        })
    }
}

/// Case-insensitive match on name, student code or parent email.
pub fn matches_search(student: &Student, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    [
        Some(student.name.as_str()),
        Some(student.student_id.as_str()),
        student.parent_email.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(&term))
}

pub fn filter_students(students: &[Student], term: &str) -> Vec<Student> {
    students
        .iter()
        .filter(|s| matches_search(s, term))
        .cloned()
        .collect()
}

pub fn school_name(student: &Student) -> String {
    student
        .school
        .as_ref()
        .map(|s| s.name.clone())
        .unwrap_or_else(|| "N/A".into())
}

pub fn status_label(is_active: bool) -> &'static str {
    if is_active {
        "Activo"
    } else {
        "Inactivo"
    }
}

/// Quoted, BOM-prefixed so spreadsheet apps pick up the accents.
pub fn students_csv(students: &[Student]) -> Result<String, String> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer
        .write_record(["Nombre", "ID Estudiante", "Email", "Clase", "Colegio", "Estado"])
        .map_err(|e| e.to_string())?;
    for student in students {
        let school = student.school.as_ref().map(|s| s.name.as_str()).unwrap_or("");
        writer
            .write_record([
                student.name.as_str(),
                student.student_id.as_str(),
                student.parent_email.as_deref().unwrap_or(""),
                student.class_name.as_str(),
                school,
                status_label(student.is_active),
            ])
            .map_err(|e| e.to_string())?;
    }
    let bytes = writer.into_inner().map_err(|e| e.to_string())?;
    let body = String::from_utf8(bytes).map_err(|e| e.to_string())?;
    Ok(format!("\u{feff}{}", body))
}

pub fn students_file_name(date: NaiveDate) -> String {
    format!("alumnos_{}.csv", date.format("%Y-%m-%d"))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::api::test_support::student_json;
    use crate::test_support::helpers::{admin_user, director_user};

    fn student(id: i64, name: &str) -> Student {
        serde_json::from_value(student_json(id, name)).unwrap()
    }

    fn filled() -> StudentFormState {
        StudentFormState {
            student_id: " 042 ".into(),
            name: "Nora Vidal".into(),
            class_name: "3B".into(),
            parent_email: "vidal@example.com".into(),
            school_id: String::new(),
        }
    }

    #[test]
    fn staff_file_students_under_their_school() {
        let request = filled().to_request(Some(&director_user())).unwrap();
        assert_eq!(request.school_id, 1);
        assert_eq!(request.student_id, "042");
    }

    #[test]
    fn admins_must_pick_a_school() {
        assert_eq!(
            filled().to_request(Some(&admin_user())),
            Err(SCHOOL_REQUIRED.to_string())
        );
        let form = StudentFormState {
            school_id: "3".into(),
            ..filled()
        };
        assert_eq!(form.to_request(Some(&admin_user())).unwrap().school_id, 3);
    }

    #[test]
    fn missing_school_is_a_local_error() {
        let mut user = director_user();
        user.school_id = None;
        assert_eq!(
            filled().to_request(Some(&user)),
            Err(NO_SCHOOL_ASSIGNED.to_string())
        );
    }

    #[test]
    fn blank_fields_are_rejected() {
        let form = StudentFormState {
            name: "  ".into(),
            ..filled()
        };
        assert_eq!(
            form.to_request(Some(&director_user())),
            Err(FIELDS_REQUIRED.to_string())
        );
    }

    #[test]
    fn search_covers_name_code_and_email() {
        let students = vec![student(1, "Juan Pérez"), student(2, "María García")];
        assert_eq!(filter_students(&students, "jua").len(), 1);
        assert_eq!(filter_students(&students, "002")[0].name, "María García");
        assert_eq!(filter_students(&students, "FAMILIA@").len(), 2);
        assert_eq!(filter_students(&students, "").len(), 2);
    }

    #[test]
    fn csv_quotes_every_cell() {
        let csv = students_csv(&[student(1, "Pérez, Juan")]).unwrap();
        let mut lines = csv.trim_start_matches('\u{feff}').lines();
        assert_eq!(
            lines.next(),
            Some("\"Nombre\",\"ID Estudiante\",\"Email\",\"Clase\",\"Colegio\",\"Estado\"")
        );
        assert_eq!(
            lines.next(),
            Some("\"Pérez, Juan\",\"001\",\"familia@example.com\",\"5A\",\"CEIP Sol\",\"Activo\"")
        );
        assert!(csv.starts_with('\u{feff}'));
    }

    #[test]
    fn export_name_carries_the_date() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        assert_eq!(students_file_name(date), "alumnos_2025-01-02.csv");
    }
}
