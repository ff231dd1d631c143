use crate::{
    api::School,
    components::{
        common::ButtonVariant,
        error::InlineErrorMessage,
        layout::SuccessMessage,
    },
    pages::students::{utils::StudentFormState, view_model::StudentsViewModel},
};
use leptos::{ev::SubmitEvent, *};

const INPUT_CLASS: &str =
    "w-full border border-form-control-border rounded px-3 py-2 text-sm bg-form-control-bg text-fg";

#[component]
fn TextField(
    label: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
    form: RwSignal<StudentFormState>,
    get: fn(&StudentFormState) -> String,
    set: fn(&mut StudentFormState, String),
) -> impl IntoView {
    view! {
        <label class="block space-y-1">
            <span class="text-sm font-medium text-fg">{label}</span>
            <input
                type=input_type.unwrap_or("text")
                class=INPUT_CLASS
                prop:value=move || form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|state| set(state, value));
                }
            />
        </label>
    }
}

#[component]
pub fn StudentForm(vm: StudentsViewModel, schools: Signal<Vec<School>>) -> impl IntoView {
    let form = vm.form;
    let pending = vm.create_action.pending();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <form class="bg-surface-elevated shadow rounded-lg p-6 space-y-4" on:submit=on_submit>
            <h3 class="text-lg font-semibold text-fg">"Añadir alumno"</h3>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <TextField
                    label="ID Estudiante"
                    form=form
                    get=|s| s.student_id.clone()
                    set=|s, v| s.student_id = v
                />
                <TextField label="Nombre" form=form get=|s| s.name.clone() set=|s, v| s.name = v />
                <TextField
                    label="Clase"
                    form=form
                    get=|s| s.class_name.clone()
                    set=|s, v| s.class_name = v
                />
                <TextField
                    label="Email de la familia"
                    input_type="email"
                    form=form
                    get=|s| s.parent_email.clone()
                    set=|s, v| s.parent_email = v
                />
                <Show when=move || vm.is_admin.get()>
                    <label class="block space-y-1">
                        <span class="text-sm font-medium text-fg">"Colegio"</span>
                        <select
                            class=INPUT_CLASS
                            prop:value=move || form.with(|s| s.school_id.clone())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|s| s.school_id = value);
                            }
                        >
                            <option value="">"Selecciona un colegio"</option>
                            {move || {
                                schools
                                    .get()
                                    .into_iter()
                                    .map(|school| view! {
                                        <option value=school.id.to_string()>{school.name}</option>
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </label>
                </Show>
            </div>
            {move || vm.form_messages.get().success.map(|msg| view! { <SuccessMessage message=msg /> })}
            <InlineErrorMessage error=Signal::derive(move || vm.form_messages.get().error) />
            <div class="flex justify-end">
                <button
                    type="submit"
                    class=format!("inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold disabled:opacity-50 {}", ButtonVariant::Primary.classes())
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Guardando..." } else { "Añadir alumno" }}
                </button>
            </div>
        </form>
    }
}
