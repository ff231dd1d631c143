use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};

use crate::{
    api::{
        AbsentStudent, ApiError, CheckInLog, DashboardQuery, DashboardSnapshot, DashboardStats,
        Justification, JustificationStatus, LateStudent, Student,
    },
    utils::time::day_before,
};

pub const LOAD_FAILED_MESSAGE: &str = "Error al cargar los datos. Reintentando...";
pub const PROFILE_LOAD_FAILED: &str = "Error al cargar el perfil del alumno";

/// Pending justification per student for the selected date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JustificationIndex {
    entries: BTreeMap<i64, Justification>,
}

impl JustificationIndex {
    /// Keeps pending entries only; a later entry for the same student replaces an earlier one.
    pub fn from_pending(justifications: impl IntoIterator<Item = Justification>) -> Self {
        let entries = justifications
            .into_iter()
            .filter(|j| j.status == JustificationStatus::Pending)
            .map(|j| (j.student_id, j))
            .collect();
        Self { entries }
    }

    pub fn get(&self, student_id: i64) -> Option<&Justification> {
        self.entries.get(&student_id)
    }

    pub fn contains(&self, student_id: i64) -> bool {
        self.entries.contains_key(&student_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Justification> {
        self.entries.values()
    }
}

/// Rounded percentage, 0 when `whole` is 0.
pub fn percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    (f64::from(part) / f64::from(whole) * 100.0).round() as u32
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardMetrics {
    pub present: u32,
    pub absent: u32,
    pub late: u32,
    pub total_students: u32,
    pub attendance_rate: u32,
    pub on_time: u32,
    pub on_time_rate: u32,
    pub unjustified_absent: usize,
    pub justified: usize,
}

impl DashboardMetrics {
    pub fn derive(
        stats: &DashboardStats,
        absent_students: &[AbsentStudent],
        index: &JustificationIndex,
    ) -> Self {
        let total_students = stats.total_present + stats.total_absent;
        let on_time = stats.total_present.saturating_sub(stats.total_late);
        Self {
            present: stats.total_present,
            absent: stats.total_absent,
            late: stats.total_late,
            total_students,
            attendance_rate: percent(stats.total_present, total_students),
            on_time,
            on_time_rate: percent(on_time, stats.total_present),
            unjustified_absent: absent_students
                .iter()
                .filter(|student| !index.contains(student.id))
                .count(),
            justified: index.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub date: NaiveDate,
    pub search: String,
    pub class_name: Option<String>,
    pub school_id: Option<i64>,
}

impl FilterState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            date: today,
            search: String::new(),
            class_name: None,
            school_id: None,
        }
    }

    pub fn query(&self) -> DashboardQuery {
        DashboardQuery {
            date: self.date,
            class_name: self.class_name.clone().filter(|c| !c.is_empty()),
            school_id: self.school_id,
        }
    }
}

/// Case-insensitive substring match; an empty term matches everything.
pub fn name_matches(name: &str, term: &str) -> bool {
    term.is_empty() || name.to_lowercase().contains(&term.to_lowercase())
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredRows {
    pub checkins: Vec<CheckInLog>,
    pub late_students: Vec<LateStudent>,
    pub absent_students: Vec<AbsentStudent>,
}

/// Rows as displayed: check-ins and late arrivals newest first, absences in server order.
pub fn filter_rows(snapshot: &DashboardSnapshot, term: &str) -> FilteredRows {
    FilteredRows {
        checkins: snapshot
            .checkins
            .iter()
            .rev()
            .filter(|c| name_matches(&c.student_name, term))
            .cloned()
            .collect(),
        late_students: snapshot
            .late_students
            .iter()
            .rev()
            .filter(|s| name_matches(&s.name, term))
            .cloned()
            .collect(),
        absent_students: snapshot
            .absent_students
            .iter()
            .filter(|s| name_matches(&s.name, term))
            .cloned()
            .collect(),
    }
}

/// Name shown for a justification in the widget.
pub fn justification_student_name(justification: &Justification, absent: &[AbsentStudent]) -> String {
    justification
        .student_name
        .clone()
        .filter(|name| !name.trim().is_empty())
        .or_else(|| {
            absent
                .iter()
                .find(|s| s.id == justification.student_id)
                .map(|s| s.name.clone())
        })
        .unwrap_or_else(|| format!("Alumno #{}", justification.student_id))
}

/// Watches the calendar date and tells when a selection pinned to the
/// previous day should follow the new day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayTracker {
    observed: NaiveDate,
}

impl DayTracker {
    pub fn new(today: NaiveDate) -> Self {
        Self { observed: today }
    }

    pub fn observed(&self) -> NaiveDate {
        self.observed
    }

    /// Returns the date to select when the selection has to advance.
    pub fn observe(&mut self, today: NaiveDate, selected: NaiveDate) -> Option<NaiveDate> {
        if today == self.observed {
            return None;
        }
        let previous = std::mem::replace(&mut self.observed, today);
        (selected == day_before(previous)).then_some(today)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

pub struct RefreshOutcome {
    pub snapshot: Result<DashboardSnapshot, ApiError>,
    pub justifications: Result<Vec<Justification>, ApiError>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub snapshot: Option<DashboardSnapshot>,
    pub justifications: JustificationIndex,
    pub last_updated: Option<NaiveTime>,
    pub status: Option<StatusMessage>,
}

impl DashboardState {
    /// Folds one refresh into the state. Returns whether the snapshot was replaced.
    pub fn apply(&mut self, outcome: RefreshOutcome, now: NaiveTime) -> bool {
        let snapshot = match outcome.snapshot {
            Ok(snapshot) => snapshot,
            Err(err) if err.is_unauthorized() => return false,
            Err(err) => {
                log::error!("Dashboard refresh failed: {}", err);
                self.status = Some(StatusMessage::error(LOAD_FAILED_MESSAGE));
                return false;
            }
        };
        self.justifications = match outcome.justifications {
            Ok(list) => JustificationIndex::from_pending(list),
            Err(err) => {
                log::warn!("Pending justifications unavailable: {}", err);
                JustificationIndex::default()
            }
        };
        self.snapshot = Some(snapshot);
        self.last_updated = Some(now);
        self.status = None;
        true
    }

    pub fn metrics(&self) -> DashboardMetrics {
        self.snapshot
            .as_ref()
            .map(|s| DashboardMetrics::derive(&s.stats, &s.absent_students, &self.justifications))
            .unwrap_or_default()
    }

    pub fn rows(&self, term: &str) -> FilteredRows {
        self.snapshot
            .as_ref()
            .map(|s| filter_rows(s, term))
            .unwrap_or_default()
    }

    pub fn last_updated_label(&self) -> Option<String> {
        self.last_updated
            .map(|t| format!("Última actualización {}", t.format("%H:%M")))
    }
}

/// Student profile dialog opened from the absence table.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileState {
    Loading(i64),
    Loaded(Box<Student>),
    Failed(String),
}

impl ProfileState {
    /// A response only lands if its dialog is still waiting for it.
    pub fn resolve(current: &mut Option<Self>, student_id: i64, result: Result<Student, ApiError>) {
        if *current != Some(Self::Loading(student_id)) {
            return;
        }
        *current = Some(match result {
            Ok(student) => Self::Loaded(Box::new(student)),
            Err(err) => {
                log::error!("Error loading student profile: {}", err);
                Self::Failed(PROFILE_LOAD_FAILED.into())
            }
        });
    }
}
