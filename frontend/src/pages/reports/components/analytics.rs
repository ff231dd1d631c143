use leptos::*;

use super::summary::{badge, empty_row, ReportTable, SummaryCard, CELL, MUTED_CELL};
use crate::{
    api::HistoricalAnalytics,
    pages::reports::utils::{
        absentee_risk, improvement_badge, one_decimal, trend_label, weekday_name,
        NO_CHRONIC_ABSENTEES, NO_IMPROVEMENT_DATA, NO_PERIOD_DATA,
    },
};

fn percent(value: f64) -> String {
    format!("{}%", one_decimal(value))
}

#[component]
pub fn AnalyticsReport(analytics: HistoricalAnalytics) -> impl IntoView {
    let HistoricalAnalytics {
        monthly_trends,
        monthly_comparison,
        chronic_absentees,
        chronic_absentee_count,
        weekday_patterns,
        top_improved_students,
        avg_monthly_attendance,
        overall_trend,
        punctuality_improvement,
    } = analytics;

    view! {
        <div class="space-y-6">
            <div class="grid grid-cols-2 gap-4 lg:grid-cols-4">
                <SummaryCard label="Asistencia media mensual" value=one_decimal(avg_monthly_attendance) />
                <SummaryCard label="Ausentismo crónico" value=chronic_absentee_count.to_string() />
                <SummaryCard label="Tendencia general" value=trend_label(overall_trend) />
                <SummaryCard label="Puntualidad" value=trend_label(punctuality_improvement) />
            </div>
            <ReportTable
                title="Evolución mensual"
                headers=vec!["Mes", "Tasa de asistencia", "Asistencias", "Tardanzas", "Presentes", "Ausencias"]
            >
                {if monthly_trends.is_empty() {
                    empty_row(6, NO_PERIOD_DATA)
                } else {
                    monthly_trends.into_iter().map(|trend| {
                        let compared = monthly_comparison.iter().find(|c| c.month == trend.month);
                        let present = compared.map(|c| c.present.to_string()).unwrap_or_else(|| "-".into());
                        let absent = compared.map(|c| c.absent.to_string()).unwrap_or_else(|| "-".into());
                        view! {
                            <tr class="hover:bg-surface-muted">
                                <td class=CELL>{trend.month}</td>
                                <td class=CELL>{percent(trend.attendance_rate)}</td>
                                <td class=CELL>{trend.total_attendance}</td>
                                <td class=CELL>{trend.late_count}</td>
                                <td class=CELL>{present}</td>
                                <td class=CELL>{absent}</td>
                            </tr>
                        }
                    }).collect_view()
                }}
            </ReportTable>
            <ReportTable
                title="Ausentismo crónico"
                headers=vec!["Alumno", "Colegio", "Días esperados", "Días asistidos", "Tasa", "Riesgo"]
            >
                {if chronic_absentees.is_empty() {
                    empty_row(6, NO_CHRONIC_ABSENTEES)
                } else {
                    chronic_absentees.into_iter().map(|student| {
                        let (risk, class) = absentee_risk(student.attendance_rate);
                        view! {
                            <tr class="hover:bg-surface-muted">
                                <td class=CELL>{student.student_name}</td>
                                <td class=MUTED_CELL>{student.school_name.unwrap_or_else(|| "-".into())}</td>
                                <td class=CELL>{student.expected_days}</td>
                                <td class=CELL>{student.attended_days}</td>
                                <td class="px-6 py-4 whitespace-nowrap text-sm">{badge(class, percent(student.attendance_rate))}</td>
                                <td class="px-6 py-4 whitespace-nowrap text-sm">{badge(class, risk.to_string())}</td>
                            </tr>
                        }
                    }).collect_view()
                }}
            </ReportTable>
            <ReportTable title="Patrón semanal" headers=vec!["Día", "Tasa de asistencia", "Tasa de puntualidad"]>
                {if weekday_patterns.is_empty() {
                    empty_row(3, NO_PERIOD_DATA)
                } else {
                    weekday_patterns.into_iter().map(|day| view! {
                        <tr class="hover:bg-surface-muted">
                            <td class=CELL>{weekday_name(day.weekday)}</td>
                            <td class=CELL>{percent(day.attendance_rate)}</td>
                            <td class=CELL>{percent(day.punctuality_rate)}</td>
                        </tr>
                    }).collect_view()
                }}
            </ReportTable>
            <ReportTable
                title="Alumnos que más han mejorado"
                headers=vec!["Alumno", "Primer mes", "Último mes", "Mejora", ""]
            >
                {if top_improved_students.is_empty() {
                    empty_row(5, NO_IMPROVEMENT_DATA)
                } else {
                    top_improved_students.into_iter().map(|student| {
                        let (class, icon) = improvement_badge(student.improvement);
                        view! {
                            <tr class="hover:bg-surface-muted">
                                <td class=CELL>{student.student_name}</td>
                                <td class=CELL>{percent(student.first_month_rate)}</td>
                                <td class=CELL>{percent(student.last_month_rate)}</td>
                                <td class="px-6 py-4 whitespace-nowrap text-sm">
                                    {badge(class, format!("+{}", percent(student.improvement)))}
                                </td>
                                <td class="px-6 py-4 whitespace-nowrap text-2xl">{icon}</td>
                            </tr>
                        }
                    }).collect_view()
                }}
            </ReportTable>
        </div>
    }
}
