use crate::pages::justifications::utils::STATUS_OPTIONS;
use leptos::*;

#[component]
pub fn StatusFilter(status: RwSignal<String>, on_reload: Callback<()>) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-4 flex flex-col gap-3 md:flex-row md:items-center md:justify-between">
            <div>
                <h3 class="text-sm font-semibold text-fg">"Filtrar justificaciones"</h3>
                <p class="text-xs text-fg-muted">"Elige un estado para acotar la lista."</p>
            </div>
            <div class="flex items-center gap-2">
                <select
                    class="border border-form-control-border rounded px-2 py-1 text-sm bg-form-control-bg"
                    prop:value=move || status.get()
                    on:change=move |ev| status.set(event_target_value(&ev))
                >
                    {STATUS_OPTIONS
                        .into_iter()
                        .map(|(value, label)| view! { <option value=value>{label}</option> })
                        .collect_view()}
                </select>
                <button
                    class="text-sm text-fg-muted underline"
                    on:click=move |_| on_reload.call(())
                >
                    "Actualizar"
                </button>
            </div>
        </div>
    }
}
