use chrono::{DateTime, NaiveDate, NaiveDateTime};
use leptos::*;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Director,
    Teacher,
}

impl UserRole {
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "Administrador",
            UserRole::Director => "Director",
            UserRole::Teacher => "Profesor",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    #[serde(default)]
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub role: UserRole,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub school_id: Option<i64>,
}

impl UserResponse {
    pub fn is_administrator(&self) -> bool {
        self.is_admin || self.role == UserRole::Admin
    }

    /// Everyone except plain teachers may review justifications.
    pub fn can_review_justifications(&self) -> bool {
        self.is_admin || self.role != UserRole::Teacher
    }

    pub fn display_name(&self) -> String {
        self.full_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.username)
            .to_string()
    }

    pub fn initials(&self) -> String {
        let initials: String = self.username.chars().take(2).collect();
        if initials.is_empty() {
            "U".into()
        } else {
            initials.to_uppercase()
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct School {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub created_at: Option<NaiveDateTime>,
}

/// Body of both school create and update; `is_active` only goes out on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolRequest {
    pub name: String,
    pub address: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub timezone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_present: u32,
    pub total_absent: u32,
    pub total_late: u32,
    #[serde(default)]
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckInLog {
    pub checkin_time: String,
    pub student_name: String,
    pub school_name: String,
    #[serde(default)]
    pub checkout_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LateStudent {
    pub name: String,
    pub time: String,
    pub school_name: String,
    #[serde(default)]
    pub email_sent: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbsentStudent {
    pub id: i64,
    pub name: String,
    pub class_name: String,
    pub school_name: String,
    #[serde(default)]
    pub email_sent: bool,
}

/// One `/checkin/dashboard` response, replaced wholesale on every poll.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub stats: DashboardStats,
    #[serde(default)]
    pub checkins: Vec<CheckInLog>,
    #[serde(default)]
    pub late_students: Vec<LateStudent>,
    #[serde(default)]
    pub absent_students: Vec<AbsentStudent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JustificationType {
    Absence,
    Tardiness,
    EarlyDismissal,
}

impl JustificationType {
    pub const ALL: [JustificationType; 3] = [
        JustificationType::Absence,
        JustificationType::Tardiness,
        JustificationType::EarlyDismissal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JustificationType::Absence => "absence",
            JustificationType::Tardiness => "tardiness",
            JustificationType::EarlyDismissal => "early_dismissal",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            JustificationType::Absence => "Ausencia",
            JustificationType::Tardiness => "Llegada tarde",
            JustificationType::EarlyDismissal => "Salida anticipada",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JustificationStatus {
    Pending,
    Approved,
    Rejected,
}

impl JustificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JustificationStatus::Pending => "pending",
            JustificationStatus::Approved => "approved",
            JustificationStatus::Rejected => "rejected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            JustificationStatus::Pending => "Pendiente",
            JustificationStatus::Approved => "Aprobada",
            JustificationStatus::Rejected => "Rechazada",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(JustificationStatus::Pending),
            "approved" => Some(JustificationStatus::Approved),
            "rejected" => Some(JustificationStatus::Rejected),
            _ => None,
        }
    }
}

/// Accepts both naive timestamps and RFC 3339 ones; offsets are dropped.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}")))
}

fn deserialize_optional_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(raw) => parse_timestamp(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}"))),
    }
}

pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.naive_utc());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Justification {
    pub id: i64,
    pub student_id: i64,
    pub justification_type: JustificationType,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub date: NaiveDateTime,
    pub reason: String,
    pub status: JustificationStatus,
    pub submitted_by: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub submitted_at: NaiveDateTime,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub reviewed_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub student_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateJustificationRequest {
    pub student_id: i64,
    pub justification_type: JustificationType,
    pub date: NaiveDateTime,
    pub reason: String,
    pub submitted_by: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateJustificationRequest {
    pub status: JustificationStatus,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParentStudent {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub class_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParentEmailValidation {
    pub email: String,
    pub students: Vec<ParentStudent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub student_id: String,
    pub name: String,
    pub class_name: String,
    #[serde(default)]
    pub parent_email: Option<String>,
    pub school_id: i64,
    #[serde(default)]
    pub qr_code_path: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub school: Option<School>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateStudentRequest {
    pub student_id: String,
    pub name: String,
    pub class_name: String,
    pub parent_email: String,
    pub school_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBreakdown {
    pub date: String,
    pub total: u32,
    #[serde(default)]
    pub late: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceStatistics {
    pub total_students: u32,
    pub total_attendance: u32,
    pub attendance_rate: f64,
    pub late_rate: f64,
    #[serde(default)]
    pub present: u32,
    #[serde(default)]
    pub late: u32,
    #[serde(default)]
    pub early_checkout: u32,
    #[serde(default)]
    pub daily_breakdown: Vec<DailyBreakdown>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub checkin_time: NaiveDateTime,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub checkout_time: Option<NaiveDateTime>,
    pub student_name: String,
    #[serde(default)]
    pub school_name: Option<String>,
    #[serde(default)]
    pub is_late: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceHistory {
    pub total: u32,
    #[serde(default)]
    pub records: Vec<HistoryRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TardyStudent {
    pub student_name: String,
    pub total_attendance: u32,
    pub late_count: u32,
    pub late_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyTrend {
    pub week: String,
    pub total: u32,
    #[serde(default)]
    pub late: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TardinessAnalysis {
    #[serde(default)]
    pub top_tardy_students: Vec<TardyStudent>,
    #[serde(default)]
    pub weekly_trends: Vec<WeeklyTrend>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTrend {
    pub month: String,
    pub attendance_rate: f64,
    pub total_attendance: u32,
    pub late_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyComparison {
    pub month: String,
    pub present: u32,
    pub late: u32,
    pub absent: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChronicAbsentee {
    pub student_name: String,
    #[serde(default)]
    pub school_name: Option<String>,
    pub expected_days: u32,
    pub attended_days: u32,
    pub attendance_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekdayPattern {
    /// Monday is 0.
    pub weekday: u32,
    pub attendance_rate: f64,
    pub punctuality_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImprovedStudent {
    pub student_name: String,
    pub first_month_rate: f64,
    pub last_month_rate: f64,
    pub improvement: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoricalAnalytics {
    #[serde(default)]
    pub monthly_trends: Vec<MonthlyTrend>,
    #[serde(default)]
    pub monthly_comparison: Vec<MonthlyComparison>,
    #[serde(default)]
    pub chronic_absentees: Vec<ChronicAbsentee>,
    #[serde(default)]
    pub chronic_absentee_count: u32,
    #[serde(default)]
    pub weekday_patterns: Vec<WeekdayPattern>,
    #[serde(default)]
    pub top_improved_students: Vec<ImprovedStudent>,
    #[serde(default)]
    pub avg_monthly_attendance: f64,
    #[serde(default)]
    pub overall_trend: f64,
    #[serde(default)]
    pub punctuality_improvement: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    fn new(code: &str, msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", msg)
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::new("UNKNOWN", msg)
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::new("REQUEST_FAILED", msg)
    }

    pub fn parse_error(msg: impl Into<String>) -> Self {
        Self::new("PARSE_ERROR", msg)
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::new("STORAGE_ERROR", msg)
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::new("UNAUTHORIZED", msg)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code == "UNAUTHORIZED"
    }

    /// Builds an error from a non-success status and its (FastAPI style) body.
    pub fn from_response(status: u16, body: Option<&Value>) -> Self {
        let detail = body.and_then(|b| b.get("detail"));
        let fallback = || format!("HTTP error! status: {}", status);
        if status == 401 {
            let message = detail
                .and_then(|d| d.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| "Sesión expirada. Inicia sesión de nuevo.".into());
            return Self::unauthorized(message);
        }
        match detail {
            Some(Value::String(message)) => Self::new(&format!("HTTP_{}", status), message.clone()),
            Some(Value::Array(entries)) => {
                let errors: Vec<String> = entries.iter().map(describe_validation_entry).collect();
                Self {
                    error: errors.join(", "),
                    code: "VALIDATION_ERROR".into(),
                    details: Some(serde_json::json!({ "errors": errors })),
                }
            }
            Some(other) => Self::new(&format!("HTTP_{}", status), other.to_string()),
            None => Self::new(&format!("HTTP_{}", status), fallback()),
        }
    }
}

fn describe_validation_entry(entry: &Value) -> String {
    let msg = entry
        .get("msg")
        .and_then(|m| m.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| entry.to_string());
    let loc = entry.get("loc").and_then(|l| l.as_array()).map(|parts| {
        parts
            .iter()
            .map(|p| match p {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(".")
    });
    match loc {
        Some(loc) if !loc.is_empty() => format!("{}: {}", loc, msg),
        _ => msg,
    }
}
