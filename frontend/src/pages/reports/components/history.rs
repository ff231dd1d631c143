use leptos::*;

use super::summary::{badge, empty_row, ReportTable, SummaryCard, CELL, MUTED_CELL};
use crate::{
    api::AttendanceHistory,
    pages::reports::utils::{history_day, history_time, NO_HISTORY},
    utils::time::utc_to_app_tz,
};

#[component]
pub fn HistoryReport(history: AttendanceHistory) -> impl IntoView {
    let records = history.records;
    view! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                <SummaryCard label="Total de registros" value=history.total.to_string() />
            </div>
            <ReportTable
                title="Historial de asistencia"
                headers=vec!["Fecha", "Alumno", "Colegio", "Entrada", "Salida", "Estado"]
            >
                {if records.is_empty() {
                    empty_row(6, NO_HISTORY)
                } else {
                    records.into_iter().map(|record| {
                        let checkin = utc_to_app_tz(record.checkin_time);
                        let checkout = record
                            .checkout_time
                            .map(|t| history_time(&utc_to_app_tz(t)))
                            .unwrap_or_else(|| "-".into());
                        let status = if record.is_late {
                            badge("bg-status-warning-bg text-status-warning-text", "Tarde".into())
                        } else {
                            badge("bg-status-success-bg text-status-success-text", "✓ Puntual".into())
                        };
                        view! {
                            <tr class="hover:bg-surface-muted">
                                <td class=CELL>{history_day(&checkin)}</td>
                                <td class=CELL>{record.student_name}</td>
                                <td class=MUTED_CELL>{record.school_name.unwrap_or_else(|| "-".into())}</td>
                                <td class=CELL>{history_time(&checkin)}</td>
                                <td class=CELL>{checkout}</td>
                                <td class="px-6 py-4 whitespace-nowrap text-sm">{status}</td>
                            </tr>
                        }
                    }).collect_view()
                }}
            </ReportTable>
        </div>
    }
}
