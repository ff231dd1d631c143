use crate::api::{Justification, JustificationStatus};
use crate::pages::justifications::utils::{
    format_day, format_timestamp, status_badge_class, JustificationRow,
};
use leptos::*;

pub const NO_JUSTIFICATIONS: &str = "No hay justificaciones para revisar";

#[component]
pub fn JustificationList(
    rows: Signal<Vec<JustificationRow>>,
    on_review: Callback<Justification>,
) -> impl IntoView {
    view! {
        <div class="space-y-3">
            {move || {
                let rows = rows.get();
                if rows.is_empty() {
                    return view! {
                        <p class="text-fg-muted text-center py-8">{NO_JUSTIFICATIONS}</p>
                    }
                    .into_view();
                }
                rows.into_iter()
                    .map(|row| view! { <JustificationCard row=row on_review=on_review /> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn JustificationCard(row: JustificationRow, on_review: Callback<Justification>) -> impl IntoView {
    let j = row.justification;
    let is_pending = j.status == JustificationStatus::Pending;
    let review_target = j.clone();
    view! {
        <div class="border border-border rounded-lg p-4 bg-surface-elevated">
            <div class="flex justify-between items-start mb-2">
                <div class="flex-1">
                    <h4 class="font-semibold text-lg text-fg">{row.student_name}</h4>
                    <p class="text-sm text-fg-muted">
                        {format!("{} - {}", j.justification_type.label(), format_day(&j.date))}
                    </p>
                    <p class="text-sm text-fg-muted">{format!("Email: {}", j.submitted_by)}</p>
                </div>
                <span class=format!("px-2 py-1 rounded-full text-xs font-medium {}", status_badge_class(j.status))>
                    {j.status.label()}
                </span>
            </div>
            <p class="text-fg mb-2">{format!("Motivo: {}", j.reason)}</p>
            <p class="text-xs text-fg-muted">{format!("Enviado: {}", format_timestamp(&j.submitted_at))}</p>
            {j.notes.clone().filter(|n| !n.is_empty()).map(|notes| view! {
                <p class="text-sm text-fg-muted mt-2 p-2 bg-surface-muted rounded">{format!("Notas: {}", notes)}</p>
            })}
            {is_pending.then(|| view! {
                <button
                    class="mt-3 px-4 py-2 bg-action-primary-bg text-action-primary-text rounded-md text-sm hover:bg-action-primary-bg-hover"
                    on:click=move |_| on_review.call(review_target.clone())
                >
                    "Revisar"
                </button>
            })}
        </div>
    }
}
