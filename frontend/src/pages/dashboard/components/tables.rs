use leptos::*;

use crate::{
    api::{AbsentStudent, CheckInLog, LateStudent},
    pages::dashboard::model::JustificationIndex,
};

pub const NO_CHECKINS: &str = "No hay registros para la fecha o búsqueda seleccionada.";
pub const NO_LATE: &str = "Ningún alumno ha llegado con retraso.";
pub const NO_ABSENT: &str = "¡Todos los alumnos han llegado!";

#[component]
fn TableCard(title: &'static str, headers: [&'static str; 4], children: Children) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg overflow-hidden">
            <h3 class="px-6 py-4 text-base font-semibold text-fg border-b border-border">{title}</h3>
            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-border">
                    <thead class="bg-surface-muted">
                        <tr>
                            {headers.into_iter().map(|h| view! {
                                <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">{h}</th>
                            }).collect_view()}
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">{children()}</tbody>
                </table>
            </div>
        </div>
    }
}

fn empty_row(message: &'static str) -> View {
    view! {
        <tr>
            <td colspan="4" class="text-center p-10 text-fg-muted">{message}</td>
        </tr>
    }
    .into_view()
}

fn email_badge(sent: bool, pending_label: &'static str) -> View {
    if sent {
        view! {
            <span class="inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium bg-status-success-bg text-status-success-text">"✓ Enviado"</span>
        }
        .into_view()
    } else {
        view! {
            <span class="inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium bg-surface-muted text-fg-muted">{pending_label}</span>
        }
        .into_view()
    }
}

#[component]
pub fn CheckInTable(rows: Signal<Vec<CheckInLog>>) -> impl IntoView {
    view! {
        <TableCard title="Entradas" headers=["Hora", "Alumno", "Colegio", "Salida"]>
            {move || {
                let rows = rows.get();
                if rows.is_empty() {
                    return empty_row(NO_CHECKINS);
                }
                rows.into_iter().map(|row| view! {
                    <tr class="hover:bg-surface-muted">
                        <td class="px-6 py-4 text-sm font-medium text-fg">{row.checkin_time}</td>
                        <td class="px-6 py-4 text-sm text-fg-muted">{row.student_name}</td>
                        <td class="px-6 py-4 text-sm text-action-primary-bg">{row.school_name}</td>
                        <td class="px-6 py-4 text-sm">
                            {match row.checkout_time {
                                Some(time) => view! { <span class="font-medium text-status-success-text">{time}</span> }.into_view(),
                                None => view! { <span class="italic text-fg-muted">"En el colegio"</span> }.into_view(),
                            }}
                        </td>
                    </tr>
                }).collect_view()
            }}
        </TableCard>
    }
}

#[component]
pub fn LateTable(rows: Signal<Vec<LateStudent>>) -> impl IntoView {
    view! {
        <TableCard title="Retrasos" headers=["Hora", "Alumno", "Colegio", "Aviso"]>
            {move || {
                let rows = rows.get();
                if rows.is_empty() {
                    return empty_row(NO_LATE);
                }
                rows.into_iter().map(|row| view! {
                    <tr class="hover:bg-surface-muted">
                        <td class="px-6 py-4 text-sm font-medium text-status-error-text">{row.time}</td>
                        <td class="px-6 py-4 text-sm text-fg-muted">{row.name}</td>
                        <td class="px-6 py-4 text-sm text-action-primary-bg">{row.school_name}</td>
                        <td class="px-6 py-4">{email_badge(row.email_sent, "✗ No enviado")}</td>
                    </tr>
                }).collect_view()
            }}
        </TableCard>
    }
}

#[component]
pub fn AbsentTable(
    rows: Signal<Vec<AbsentStudent>>,
    justifications: Signal<JustificationIndex>,
    on_select: Callback<i64>,
) -> impl IntoView {
    view! {
        <TableCard title="Ausencias" headers=["Alumno", "Clase", "Colegio", "Aviso"]>
            {move || {
                let rows = rows.get();
                if rows.is_empty() {
                    return empty_row(NO_ABSENT);
                }
                let index = justifications.get();
                rows.into_iter().map(|row| {
                    let reason = index.get(row.id).map(|j| j.reason.clone());
                    let student_id = row.id;
                    view! {
                        <tr class="hover:bg-surface-muted">
                            <td class="px-6 py-4">
                                <div class="text-sm flex items-center font-medium text-fg">
                                    <button
                                        type="button"
                                        class="text-action-primary-bg hover:underline font-medium"
                                        on:click=move |_| on_select.call(student_id)
                                    >
                                        {row.name}
                                    </button>
                                    {reason.clone().map(|reason| view! {
                                        <span
                                            class="inline-flex items-center px-2 py-1 rounded-md text-xs font-medium bg-status-warning-bg text-status-warning-text ml-2"
                                            title=reason
                                        >
                                            "Justificado"
                                        </span>
                                    })}
                                </div>
                                {reason.map(|reason| view! {
                                    <div class="text-xs text-fg-muted mt-1">{format!("Motivo: {}", reason)}</div>
                                })}
                            </td>
                            <td class="px-6 py-4 text-sm text-fg-muted">{row.class_name}</td>
                            <td class="px-6 py-4 text-sm text-action-primary-bg">{row.school_name}</td>
                            <td class="px-6 py-4">{email_badge(row.email_sent, "Pendiente 9:10")}</td>
                        </tr>
                    }
                }).collect_view()
            }}
        </TableCard>
    }
}
