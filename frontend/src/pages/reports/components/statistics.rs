use leptos::*;

use super::summary::{empty_row, ReportTable, SummaryCard, CELL};
use crate::{
    api::AttendanceStatistics,
    pages::reports::utils::{distribution, late_share, rate_label, NO_PERIOD_DATA},
};

#[component]
pub fn StatisticsReport(stats: AttendanceStatistics) -> impl IntoView {
    let shares = distribution(&stats);
    let days = stats.daily_breakdown;
    view! {
        <div class="space-y-6">
            <div class="grid grid-cols-2 gap-4 lg:grid-cols-4">
                <SummaryCard label="Total alumnos" value=stats.total_students.to_string() />
                <SummaryCard label="Total asistencias" value=stats.total_attendance.to_string() />
                <SummaryCard label="Tasa de asistencia" value=rate_label(stats.attendance_rate) />
                <SummaryCard label="Tasa de tardanzas" value=rate_label(stats.late_rate) />
            </div>
            <div class="grid grid-cols-3 gap-4">
                {shares.into_iter().map(|(label, value)| view! {
                    <SummaryCard label=label value=value.to_string() />
                }).collect_view()}
            </div>
            <ReportTable title="Desglose diario" headers=vec!["Fecha", "Total", "Tardanzas", "% Tardanzas"]>
                {if days.is_empty() {
                    empty_row(4, NO_PERIOD_DATA)
                } else {
                    days.into_iter().map(|day| view! {
                        <tr class="hover:bg-surface-muted">
                            <td class=CELL>{day.date}</td>
                            <td class=CELL>{day.total}</td>
                            <td class="px-6 py-4 whitespace-nowrap text-sm text-status-warning-text">{day.late}</td>
                            <td class=CELL>{late_share(day.late, day.total)}</td>
                        </tr>
                    }).collect_view()
                }}
            </ReportTable>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[test]
    fn cards_and_daily_rows() {
        let html = render_to_string(move || {
            let stats: AttendanceStatistics = serde_json::from_value(json!({
                "total_students": 40,
                "total_attendance": 760,
                "attendance_rate": 95.5,
                "late_rate": 4.21,
                "present": 760,
                "late": 32,
                "daily_breakdown": [{ "date": "2025-01-02", "total": 8, "late": 1 }]
            }))
            .unwrap();
            view! { <StatisticsReport stats=stats /> }
        });
        assert!(html.contains("95.5%"));
        assert!(html.contains("4.21%"));
        assert!(html.contains("2025-01-02"));
        assert!(html.contains("12.5%"));
        assert!(html.contains("728"));
        assert!(html.contains("Salidas Tempranas"));
    }

    #[test]
    fn empty_period_has_a_placeholder_row() {
        let html = render_to_string(move || {
            view! { <StatisticsReport stats=AttendanceStatistics::default() /> }
        });
        assert!(html.contains(NO_PERIOD_DATA));
        assert!(html.contains("0%"));
    }
}
