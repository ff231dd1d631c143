use leptos::*;

use crate::{
    api::School,
    components::common::ButtonVariant,
    pages::reports::{utils::ReportKind, view_model::ReportsViewModel},
};

const CONTROL: &str = "border border-border rounded-md px-3 py-1.5 text-sm bg-surface";

#[component]
pub fn ReportFilters(vm: ReportsViewModel, schools: Signal<Vec<School>>) -> impl IntoView {
    let pending = vm.generate_action.pending();
    view! {
        <form
            class="bg-surface-elevated shadow rounded-lg p-4 flex flex-wrap items-end gap-3"
            on:submit=move |ev| {
                ev.prevent_default();
                vm.generate();
            }
        >
            <label class="flex flex-col text-sm text-fg-muted gap-1">
                "Tipo de reporte"
                <select class=CONTROL on:change=move |ev| vm.set_kind(&event_target_value(&ev))>
                    {ReportKind::ALL.into_iter().map(|kind| view! {
                        <option
                            value=kind.as_str()
                            selected=move || vm.form.with(|f| f.kind == kind)
                        >
                            {kind.label()}
                        </option>
                    }).collect_view()}
                </select>
            </label>
            <label class="flex flex-col text-sm text-fg-muted gap-1">
                "Desde"
                <input
                    type="date"
                    class=CONTROL
                    prop:value=move || vm.form.with(|f| f.start.clone())
                    on:input=move |ev| vm.form.update(|f| f.start = event_target_value(&ev))
                />
            </label>
            <label class="flex flex-col text-sm text-fg-muted gap-1">
                "Hasta"
                <input
                    type="date"
                    class=CONTROL
                    prop:value=move || vm.form.with(|f| f.end.clone())
                    on:input=move |ev| vm.form.update(|f| f.end = event_target_value(&ev))
                />
            </label>
            <Show when=move || vm.is_admin.get()>
                <label class="flex flex-col text-sm text-fg-muted gap-1">
                    "Colegio"
                    <select
                        class=CONTROL
                        on:change=move |ev| vm.form.update(|f| f.school_id = event_target_value(&ev))
                    >
                        <option value="">"Todos los colegios"</option>
                        {move || schools.get().into_iter().map(|school| view! {
                            <option value=school.id.to_string()>{school.name}</option>
                        }).collect_view()}
                    </select>
                </label>
            </Show>
            <button
                type="submit"
                class=format!("inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold disabled:opacity-50 {}", ButtonVariant::Primary.classes())
                disabled=move || pending.get()
            >
                {move || if pending.get() { "Generando..." } else { "Generar reporte" }}
            </button>
        </form>
    }
}
