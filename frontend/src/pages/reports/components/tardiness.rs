use leptos::*;

use super::summary::{badge, empty_row, ReportTable, CELL};
use crate::{
    api::TardinessAnalysis,
    pages::reports::utils::{late_share, rate_label, tardy_badge_class, NO_PERIOD_DATA},
};

#[component]
pub fn TardinessReport(analysis: TardinessAnalysis) -> impl IntoView {
    let students = analysis.top_tardy_students;
    let weeks = analysis.weekly_trends;
    view! {
        <div class="space-y-6">
            <ReportTable
                title="Alumnos con más tardanzas"
                headers=vec!["#", "Alumno", "Asistencias", "Tardanzas", "% Tardanzas"]
            >
                {if students.is_empty() {
                    empty_row(5, NO_PERIOD_DATA)
                } else {
                    students.into_iter().enumerate().map(|(index, student)| view! {
                        <tr class="hover:bg-surface-muted">
                            <td class="px-6 py-4 whitespace-nowrap text-sm font-semibold text-fg">{index + 1}</td>
                            <td class=CELL>{student.student_name}</td>
                            <td class=CELL>{student.total_attendance}</td>
                            <td class="px-6 py-4 whitespace-nowrap text-sm font-semibold text-status-warning-text">{student.late_count}</td>
                            <td class="px-6 py-4 whitespace-nowrap text-sm">
                                {badge(tardy_badge_class(student.late_percentage), rate_label(student.late_percentage))}
                            </td>
                        </tr>
                    }).collect_view()
                }}
            </ReportTable>
            <ReportTable title="Tendencia semanal" headers=vec!["Semana", "Asistencias", "Tardanzas", "% Tardanzas"]>
                {if weeks.is_empty() {
                    empty_row(4, NO_PERIOD_DATA)
                } else {
                    weeks.into_iter().map(|week| view! {
                        <tr class="hover:bg-surface-muted">
                            <td class=CELL>{week.week}</td>
                            <td class=CELL>{week.total}</td>
                            <td class=CELL>{week.late}</td>
                            <td class=CELL>{late_share(week.late, week.total)}</td>
                        </tr>
                    }).collect_view()
                }}
            </ReportTable>
        </div>
    }
}
