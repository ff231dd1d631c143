use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::api::{AttendanceStatistics, ReportQuery};

pub const DATE_RANGE_REQUIRED: &str = "Por favor selecciona un rango de fechas";
pub const GENERATE_FAILED: &str = "Error al generar el reporte. Por favor intenta de nuevo.";
pub const NO_PERIOD_DATA: &str = "No hay datos para este período";
pub const NO_HISTORY: &str = "No hay registros para este período";
pub const NO_CHRONIC_ABSENTEES: &str = "🎉 ¡No hay estudiantes con ausentismo crónico!";
pub const NO_IMPROVEMENT_DATA: &str = "No hay datos suficientes para comparar";

const DEFAULT_RANGE_DAYS: i64 = 30;
const WEEKDAYS: [&str; 5] = ["Lunes", "Martes", "Miércoles", "Jueves", "Viernes"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportKind {
    #[default]
    Statistics,
    History,
    Tardiness,
    Analytics,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        ReportKind::Statistics,
        ReportKind::History,
        ReportKind::Tardiness,
        ReportKind::Analytics,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Statistics => "statistics",
            ReportKind::History => "history",
            ReportKind::Tardiness => "tardiness",
            ReportKind::Analytics => "analytics",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportKind::Statistics => "Estadísticas",
            ReportKind::History => "Historial de asistencia",
            ReportKind::Tardiness => "Análisis de tardanzas",
            ReportKind::Analytics => "Análisis histórico",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }
}

/// Raw report filters as typed into the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportForm {
    pub kind: ReportKind,
    pub start: String,
    pub end: String,
    pub school_id: String,
}

impl ReportForm {
    /// The last thirty days, ending today.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            kind: ReportKind::default(),
            start: (today - Duration::days(DEFAULT_RANGE_DAYS))
                .format("%Y-%m-%d")
                .to_string(),
            end: today.format("%Y-%m-%d").to_string(),
            school_id: String::new(),
        }
    }

    /// The school filter only applies to administrators.
    pub fn query(&self, is_admin: bool) -> Result<ReportQuery, String> {
        let parse = |raw: &str| NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok();
        let (Some(start), Some(end)) = (parse(&self.start), parse(&self.end)) else {
            return Err(DATE_RANGE_REQUIRED.into());
        };
        let school_id = if is_admin {
            self.school_id.trim().parse().ok()
        } else {
            None
        };
        Ok(ReportQuery {
            start,
            end,
            school_id,
        })
    }
}

/// One decimal, the way rates are printed throughout the reports.
pub fn one_decimal(value: f64) -> String {
    format!("{:.1}", value)
}

/// Late share of a day as `12.5%`; `0%` for days without check-ins.
pub fn late_share(late: u32, total: u32) -> String {
    if total == 0 {
        return "0%".into();
    }
    format!("{}%", one_decimal(f64::from(late) / f64::from(total) * 100.0))
}

pub fn rate_label(rate: f64) -> String {
    format!("{}%", rate)
}

/// Presentes, Tardanzas and Salidas Tempranas; present excludes the late arrivals.
pub fn distribution(stats: &AttendanceStatistics) -> [(&'static str, u32); 3] {
    [
        ("Presentes", stats.present.saturating_sub(stats.late)),
        ("Tardanzas", stats.late),
        ("Salidas Tempranas", stats.early_checkout),
    ]
}

pub fn tardy_badge_class(late_percentage: f64) -> &'static str {
    if late_percentage > 50.0 {
        "bg-status-error-bg text-status-error-text"
    } else if late_percentage > 25.0 {
        "bg-status-warning-bg text-status-warning-text"
    } else {
        "bg-status-info-bg text-status-info-text"
    }
}

/// Risk level of a chronic absentee and the badge it is shown with.
pub fn absentee_risk(attendance_rate: f64) -> (&'static str, &'static str) {
    if attendance_rate < 50.0 {
        ("Crítico", "bg-status-error-bg text-status-error-text")
    } else if attendance_rate < 70.0 {
        ("Alto", "bg-status-warning-bg text-status-warning-text")
    } else {
        ("Moderado", "bg-status-info-bg text-status-info-text")
    }
}

pub fn improvement_badge(improvement: f64) -> (&'static str, &'static str) {
    if improvement > 20.0 {
        ("bg-status-success-bg text-status-success-text", "🌟")
    } else if improvement > 10.0 {
        ("bg-status-info-bg text-status-info-text", "")
    } else {
        ("bg-surface-muted text-fg-muted", "")
    }
}

/// Direction icon plus magnitude, e.g. `📉 3.2%`.
pub fn trend_label(value: f64) -> String {
    let icon = if value > 0.0 {
        "📈"
    } else if value < 0.0 {
        "📉"
    } else {
        "➡️"
    };
    format!("{} {}%", icon, one_decimal(value.abs()))
}

pub fn weekday_name(index: u32) -> &'static str {
    usize::try_from(index)
        .ok()
        .and_then(|i| WEEKDAYS.get(i))
        .copied()
        .unwrap_or("-")
}

pub fn history_day(value: &NaiveDateTime) -> String {
    value.format("%d/%m/%Y").to_string()
}

pub fn history_time(value: &NaiveDateTime) -> String {
    value.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 2).unwrap()
    }

    #[test]
    fn form_defaults_to_the_last_thirty_days() {
        let form = ReportForm::new(today());
        assert_eq!(form.start, "2024-12-03");
        assert_eq!(form.end, "2025-01-02");
        assert_eq!(form.kind, ReportKind::Statistics);
    }

    #[test]
    fn missing_dates_are_a_local_error() {
        let form = ReportForm {
            start: String::new(),
            ..ReportForm::new(today())
        };
        assert_eq!(form.query(false), Err(DATE_RANGE_REQUIRED.to_string()));
    }

    #[test]
    fn school_filter_only_counts_for_admins() {
        let form = ReportForm {
            school_id: "3".into(),
            ..ReportForm::new(today())
        };
        assert_eq!(form.query(true).unwrap().school_id, Some(3));
        assert_eq!(form.query(false).unwrap().school_id, None);
        let all = ReportForm {
            school_id: String::new(),
            ..form
        };
        assert_eq!(all.query(true).unwrap().school_id, None);
    }

    #[test]
    fn report_kinds_round_trip_through_select_values() {
        for kind in ReportKind::ALL {
            assert_eq!(ReportKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(ReportKind::parse("pdf"), None);
    }

    #[test]
    fn late_share_guards_empty_days() {
        assert_eq!(late_share(0, 0), "0%");
        assert_eq!(late_share(1, 8), "12.5%");
        assert_eq!(late_share(1, 3), "33.3%");
    }

    #[test]
    fn distribution_splits_late_from_present() {
        let stats = AttendanceStatistics {
            present: 10,
            late: 3,
            early_checkout: 1,
            ..AttendanceStatistics::default()
        };
        assert_eq!(
            distribution(&stats),
            [("Presentes", 7), ("Tardanzas", 3), ("Salidas Tempranas", 1)]
        );
    }

    #[test]
    fn thresholds_pick_badges() {
        assert!(tardy_badge_class(60.0).contains("error"));
        assert!(tardy_badge_class(30.0).contains("warning"));
        assert!(tardy_badge_class(25.0).contains("info"));
        assert_eq!(absentee_risk(45.0).0, "Crítico");
        assert_eq!(absentee_risk(50.0).0, "Alto");
        assert_eq!(absentee_risk(79.9).0, "Moderado");
        assert_eq!(improvement_badge(25.0).1, "🌟");
    }

    #[test]
    fn trends_show_direction_and_magnitude() {
        assert_eq!(trend_label(-3.26), "📉 3.3%");
        assert_eq!(trend_label(4.0), "📈 4.0%");
        assert_eq!(trend_label(0.0), "➡️ 0.0%");
        assert_eq!(rate_label(95.5), "95.5%");
        assert_eq!(rate_label(100.0), "100%");
    }

    #[test]
    fn weekdays_are_monday_based() {
        assert_eq!(weekday_name(0), "Lunes");
        assert_eq!(weekday_name(4), "Viernes");
        assert_eq!(weekday_name(6), "-");
    }
}
