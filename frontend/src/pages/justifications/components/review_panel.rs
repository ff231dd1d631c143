use crate::api::JustificationStatus;
use crate::components::error::InlineErrorMessage;
use crate::pages::justifications::{
    utils::{format_day, format_timestamp},
    view_model::JustificationsViewModel,
};
use leptos::*;

/// Review dialog for the selected pending justification.
#[component]
pub fn ReviewPanel(vm: JustificationsViewModel, student_name: Signal<String>) -> impl IntoView {
    let pending = vm.review_action.pending();
    let error = Signal::derive(move || vm.message.get().error);

    view! {
        <Show when=move || vm.selected.get().is_some()>
            <div class="fixed inset-0 z-50 flex items-end sm:items-center justify-center">
                <div class="fixed inset-0 bg-overlay-backdrop" on:click=move |_| vm.close_review()></div>
                <div
                    class="relative bg-surface-elevated rounded-t-2xl sm:rounded-lg shadow-xl w-full sm:max-w-lg p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                >
                    <h3 class="text-lg font-semibold text-fg">"Revisar justificación"</h3>
                    {move || vm.selected.get().map(|j| view! {
                        <dl class="space-y-2 text-sm text-fg">
                            <div><span class="font-semibold">"Alumno: "</span>{student_name.get()}</div>
                            <div><span class="font-semibold">"Tipo: "</span>{j.justification_type.label()}</div>
                            <div><span class="font-semibold">"Fecha: "</span>{format_day(&j.date)}</div>
                            <div><span class="font-semibold">"Motivo: "</span>{j.reason.clone()}</div>
                            <div><span class="font-semibold">"Enviado por: "</span>{j.submitted_by.clone()}</div>
                            <div><span class="font-semibold">"Fecha de envío: "</span>{format_timestamp(&j.submitted_at)}</div>
                        </dl>
                    })}
                    <label class="block text-sm font-medium text-fg" for="review-notes">"Notas (opcional)"</label>
                    <textarea
                        id="review-notes"
                        rows="3"
                        class="w-full border border-form-control-border rounded-md px-3 py-2 text-sm bg-form-control-bg"
                        prop:value=move || vm.notes.get()
                        on:input=move |ev| vm.notes.set(event_target_value(&ev))
                    ></textarea>
                    <InlineErrorMessage error=error />
                    <div class="flex justify-end gap-2">
                        <button
                            class="px-4 py-2 rounded-md border border-border text-fg hover:bg-surface-muted"
                            on:click=move |_| vm.close_review()
                        >
                            "Cancelar"
                        </button>
                        <button
                            class="px-4 py-2 rounded-md bg-action-danger-bg text-action-danger-text disabled:opacity-50"
                            disabled=move || pending.get()
                            on:click=move |_| vm.decide(JustificationStatus::Rejected)
                        >
                            "Rechazar"
                        </button>
                        <button
                            class="px-4 py-2 rounded-md bg-status-success-bg text-status-success-text border border-status-success-border disabled:opacity-50"
                            disabled=move || pending.get()
                            on:click=move |_| vm.decide(JustificationStatus::Approved)
                        >
                            "Aprobar"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
