use crate::api::JustificationType;
use crate::pages::parent_justification::{
    utils::{student_option_label, Notice},
    view_model::ParentJustificationViewModel,
};
use leptos::*;

const FIELD: &str = "w-full border border-form-control-border rounded-md px-3 py-2 text-sm bg-form-control-bg text-fg";
const LABEL: &str = "block text-sm font-medium text-fg mb-1";

#[component]
fn NoticeBox(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|notice| {
            let tone = match notice {
                Notice::Info(_) => "bg-status-info-bg border-status-info-border text-status-info-text",
                Notice::Error(_) => "bg-status-error-bg border-status-error-border text-status-error-text",
                Notice::Success(_) => "bg-status-success-bg border-status-success-border text-status-success-text",
            };
            view! {
                <div role="status" class=format!("border p-4 rounded-lg {}", tone)>
                    {notice.text().to_string()}
                </div>
            }
        })
    }
}

/// Public form; parents do not sign in.
#[component]
pub fn ParentJustificationPage() -> impl IntoView {
    let vm = ParentJustificationViewModel::new();
    let form = vm.form;
    let submitting = vm.submit_action.pending();
    let checking = vm.validate_action.pending();
    let has_students = move || form.validated_email.get().is_some();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="min-h-screen bg-surface py-10 px-4">
            <div class="max-w-xl mx-auto bg-surface-elevated shadow rounded-lg p-6 space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-fg">"Notificar ausencia o retraso"</h1>
                    <p class="text-sm text-fg-muted mt-1">
                        "Introduce el correo electrónico registrado en el colegio para ver a tus hijos."
                    </p>
                </div>
                <NoticeBox notice=vm.notice />
                <form class="space-y-4" on:submit=on_submit>
                    <div>
                        <label class=LABEL for="parent-email">"Correo electrónico"</label>
                        <input
                            id="parent-email"
                            type="email"
                            autocomplete="email"
                            class=FIELD
                            prop:value=form.email
                            on:input=move |ev| form.email.set(event_target_value(&ev))
                            on:blur=move |_| vm.check_email()
                        />
                        <Show when=move || checking.get()>
                            <p class="text-xs text-fg-muted mt-1">"Verificando..."</p>
                        </Show>
                    </div>
                    <Show when=has_students>
                        <div class="space-y-4">
                            <div>
                                <label class=LABEL for="student">"Alumno/a"</label>
                                <select
                                    id="student"
                                    class=FIELD
                                    prop:value=form.student_id
                                    on:change=move |ev| form.student_id.set(event_target_value(&ev))
                                >
                                    <option value="">"Selecciona un alumno/a"</option>
                                    {move || form.students.get().into_iter().map(|student| view! {
                                        <option value=student.id.to_string()>{student_option_label(&student)}</option>
                                    }).collect_view()}
                                </select>
                            </div>
                            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                                <div>
                                    <label class=LABEL for="justification-type">"Tipo"</label>
                                    <select
                                        id="justification-type"
                                        class=FIELD
                                        prop:value=form.justification_type
                                        on:change=move |ev| form.justification_type.set(event_target_value(&ev))
                                    >
                                        {JustificationType::ALL.into_iter().map(|kind| view! {
                                            <option value=kind.as_str()>{kind.label()}</option>
                                        }).collect_view()}
                                    </select>
                                </div>
                                <div>
                                    <label class=LABEL for="justification-date">"Fecha"</label>
                                    <input
                                        id="justification-date"
                                        type="date"
                                        class=FIELD
                                        prop:value=form.date
                                        on:input=move |ev| form.date.set(event_target_value(&ev))
                                    />
                                </div>
                            </div>
                            <div>
                                <label class=LABEL for="reason">"Motivo"</label>
                                <textarea
                                    id="reason"
                                    rows="3"
                                    class=FIELD
                                    prop:value=form.reason
                                    on:input=move |ev| form.reason.set(event_target_value(&ev))
                                ></textarea>
                            </div>
                            <button
                                type="submit"
                                class="w-full py-2 px-4 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                                disabled=move || submitting.get()
                            >
                                {move || if submitting.get() { "Enviando..." } else { "Enviar Notificación" }}
                            </button>
                        </div>
                    </Show>
                </form>
            </div>
        </div>
    }
}
