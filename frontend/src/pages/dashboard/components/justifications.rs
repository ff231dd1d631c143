use leptos::*;

use crate::{
    api::AbsentStudent,
    pages::dashboard::model::{justification_student_name, JustificationIndex},
};

/// Pending justifications for the selected day; hidden when there are none.
#[component]
pub fn PendingJustifications(
    justifications: Signal<JustificationIndex>,
    absent: Signal<Vec<AbsentStudent>>,
) -> impl IntoView {
    view! {
        <Show when=move || !justifications.get().is_empty()>
            <div class="bg-status-warning-bg border border-status-warning-border rounded-lg p-4 space-y-3">
                <div class="flex items-center justify-between">
                    <h3 class="text-base font-semibold text-status-warning-text">"Justificaciones pendientes"</h3>
                    <span class="text-xs px-2 py-1 rounded-full bg-status-warning-border text-status-warning-text">
                        {move || justifications.get().len()}
                    </span>
                </div>
                {move || {
                    let absent = absent.get();
                    justifications.get().iter().map(|j| view! {
                        <div class="bg-surface-elevated rounded-lg p-3 border border-status-warning-border">
                            <div class="flex items-start justify-between">
                                <div class="flex-1">
                                    <p class="font-semibold text-fg">{justification_student_name(j, &absent)}</p>
                                    <p class="text-sm text-fg-muted mt-1">{j.justification_type.label()}</p>
                                    <p class="text-xs text-fg-muted mt-1">{j.reason.clone()}</p>
                                    <p class="text-xs text-status-warning-text mt-1">{format!("Por: {}", j.submitted_by)}</p>
                                </div>
                                <span class="text-xs px-2 py-1 rounded-full bg-status-warning-bg text-status-warning-text">
                                    {j.status.label()}
                                </span>
                            </div>
                        </div>
                    }).collect_view()
                }}
            </div>
        </Show>
    }
}
