use leptos::{ev::SubmitEvent, *};

use crate::{
    components::{common::ButtonVariant, error::InlineErrorMessage},
    pages::schools::{
        utils::{time_zone_options, SchoolFormState},
        view_model::SchoolsViewModel,
    },
};

const INPUT_CLASS: &str =
    "w-full border border-form-control-border rounded px-3 py-2 text-sm bg-form-control-bg text-fg";

#[component]
fn TextField(
    label: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
    vm: SchoolsViewModel,
    get: fn(&SchoolFormState) -> String,
    set: fn(&mut SchoolFormState, String),
) -> impl IntoView {
    view! {
        <label class="block space-y-1">
            <span class="text-sm font-medium text-fg">{label}</span>
            <input
                type=input_type.unwrap_or("text")
                class=INPUT_CLASS
                prop:value=move || vm.editor.with(|e| e.as_ref().map(get).unwrap_or_default())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    vm.update_form(|form| set(form, value));
                }
            />
        </label>
    }
}

/// Add and edit modal; hidden while no form is open.
#[component]
pub fn SchoolEditor(vm: SchoolsViewModel) -> impl IntoView {
    let pending = vm.save_action.pending();
    let is_edit = move || vm.editor.with(|e| e.as_ref().is_some_and(SchoolFormState::is_edit));
    let timezone = move || vm.editor.with(|e| e.as_ref().map(|f| f.timezone.clone()).unwrap_or_default());
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <Show when=move || vm.editor.with(Option::is_some)>
            <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
                <div class="fixed inset-0 bg-overlay-backdrop" on:click=move |_| vm.close_editor()></div>
                <form
                    class="relative bg-surface-elevated rounded-lg shadow-xl w-full max-w-lg p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    on:submit=on_submit
                >
                    <h3 class="text-lg font-semibold text-fg">
                        {move || if is_edit() { "Editar Colegio" } else { "Añadir Colegio" }}
                    </h3>
                    <TextField label="Nombre" vm=vm get=|f| f.name.clone() set=|f, v| f.name = v />
                    <TextField label="Dirección" vm=vm get=|f| f.address.clone() set=|f, v| f.address = v />
                    <TextField
                        label="Email de contacto"
                        input_type="email"
                        vm=vm
                        get=|f| f.contact_email.clone()
                        set=|f, v| f.contact_email = v
                    />
                    <TextField
                        label="Teléfono"
                        input_type="tel"
                        vm=vm
                        get=|f| f.contact_phone.clone()
                        set=|f, v| f.contact_phone = v
                    />
                    <label class="block space-y-1">
                        <span class="text-sm font-medium text-fg">"Zona horaria"</span>
                        <select
                            class=INPUT_CLASS
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                vm.update_form(|f| f.timezone = value);
                            }
                        >
                            {move || {
                                let current = timezone();
                                time_zone_options(&current)
                                    .into_iter()
                                    .map(|tz| {
                                        let selected = tz == current;
                                        view! { <option value=tz.clone() selected=selected>{tz}</option> }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </label>
                    <Show when=is_edit>
                        <label class="flex items-center gap-2">
                            <input
                                type="checkbox"
                                prop:checked=move || vm.editor.with(|e| e.as_ref().is_some_and(|f| f.is_active))
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    vm.update_form(|f| f.is_active = checked);
                                }
                            />
                            <span class="text-sm text-fg">"Colegio activo"</span>
                        </label>
                    </Show>
                    <InlineErrorMessage error=Signal::derive(move || vm.form_messages.get().error) />
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class=format!("inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold {}", ButtonVariant::Secondary.classes())
                            on:click=move |_| vm.close_editor()
                        >
                            "Cancelar"
                        </button>
                        <button
                            type="submit"
                            class=format!("inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold disabled:opacity-50 {}", ButtonVariant::Primary.classes())
                            disabled=move || pending.get()
                        >
                            {move || if pending.get() { "Guardando..." } else { "Guardar" }}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
