use chrono::{DateTime, Datelike, NaiveDate, Weekday};
use chrono_tz::Tz;

use crate::{api::CheckInLog, utils::time::day_before};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateShortcut {
    Today,
    Yesterday,
}

impl DateShortcut {
    pub fn label(&self) -> &'static str {
        match self {
            DateShortcut::Today => "Hoy",
            DateShortcut::Yesterday => "Ayer",
        }
    }

    pub fn date(&self, today: NaiveDate) -> NaiveDate {
        match self {
            DateShortcut::Today => today,
            DateShortcut::Yesterday => day_before(today),
        }
    }

    /// Shortcut highlighted for `selected`, if any.
    pub fn active_for(selected: NaiveDate, today: NaiveDate) -> Option<Self> {
        [DateShortcut::Today, DateShortcut::Yesterday]
            .into_iter()
            .find(|shortcut| shortcut.date(today) == selected)
    }
}

/// `Timestamp,StudentName` rows in server order.
pub fn checkins_csv(checkins: &[CheckInLog]) -> Result<String, String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer
        .write_record(["Timestamp", "StudentName"])
        .map_err(|e| e.to_string())?;
    for checkin in checkins {
        writer
            .write_record([checkin.checkin_time.as_str(), checkin.student_name.as_str()])
            .map_err(|e| e.to_string())?;
    }
    let bytes = writer.into_inner().map_err(|e| e.to_string())?;
    String::from_utf8(bytes).map_err(|e| e.to_string())
}

pub fn export_file_name(date: NaiveDate) -> String {
    format!("arrivapp_registro_{}.csv", date.format("%Y-%m-%d"))
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "lunes",
        Weekday::Tue => "martes",
        Weekday::Wed => "miércoles",
        Weekday::Thu => "jueves",
        Weekday::Fri => "viernes",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    }
}

fn month_name(month: u32) -> &'static str {
    const MONTHS: [&str; 12] = [
        "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto",
        "septiembre", "octubre", "noviembre", "diciembre",
    ];
    MONTHS
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or_default()
}

/// e.g. "jueves, 2 de enero de 2025".
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{}, {} de {} de {}",
        weekday_name(date.weekday()),
        date.day(),
        month_name(date.month()),
        date.year()
    )
}

pub fn format_clock(now: &DateTime<Tz>) -> String {
    now.format("%H:%M:%S").to_string()
}
