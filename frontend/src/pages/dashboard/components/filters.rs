use chrono::NaiveDate;
use leptos::*;
use web_sys::{HtmlInputElement, HtmlSelectElement};

use crate::pages::dashboard::{utils::DateShortcut, view_model::DashboardViewModel};

const SHORTCUT_BASE: &str = "px-3 py-1.5 rounded-md text-sm font-medium border";
const SHORTCUT_ACTIVE: &str = "bg-action-primary-bg text-action-primary-text border-action-primary-bg";
const SHORTCUT_IDLE: &str = "bg-surface-elevated text-fg border-border hover:bg-surface-muted";

#[component]
pub fn FilterBar(vm: DashboardViewModel) -> impl IntoView {
    let selected = move || vm.filters.get().date;
    let active = move || DateShortcut::active_for(selected(), vm.today());
    let shortcut_button = move |shortcut: DateShortcut| {
        view! {
            <button
                type="button"
                class=move || {
                    let tone = if active() == Some(shortcut) { SHORTCUT_ACTIVE } else { SHORTCUT_IDLE };
                    format!("{} {}", SHORTCUT_BASE, tone)
                }
                on:click=move |_| vm.select_shortcut(shortcut)
            >
                {shortcut.label()}
            </button>
        }
    };

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-4 flex flex-col gap-3 lg:flex-row lg:items-center lg:justify-between">
            <div class="flex flex-wrap items-center gap-2">
                {shortcut_button(DateShortcut::Today)}
                {shortcut_button(DateShortcut::Yesterday)}
                <input
                    type="date"
                    class="border border-border rounded-md px-3 py-1.5 text-sm bg-surface"
                    prop:value=move || selected().format("%Y-%m-%d").to_string()
                    on:change=move |ev| {
                        let raw = event_target::<HtmlInputElement>(&ev).value();
                        if let Ok(date) = NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
                            vm.set_date(date);
                        }
                    }
                />
                <select
                    class="border border-border rounded-md px-3 py-1.5 text-sm bg-surface"
                    on:change=move |ev| vm.set_class(event_target::<HtmlSelectElement>(&ev).value())
                >
                    <option value="">"Todas las clases"</option>
                    {move || vm.classes.get().into_iter().map(|class_name| {
                        let value = class_name.clone();
                        view! { <option value=value>{class_name}</option> }
                    }).collect_view()}
                </select>
                <Show when=move || vm.is_admin()>
                    <select
                        class="border border-border rounded-md px-3 py-1.5 text-sm bg-surface"
                        on:change=move |ev| vm.set_school(event_target::<HtmlSelectElement>(&ev).value())
                    >
                        <option value="">"Todos los colegios"</option>
                        {move || vm.schools.get().into_iter().map(|school| view! {
                            <option value=school.id.to_string()>{school.name}</option>
                        }).collect_view()}
                    </select>
                </Show>
            </div>
            <div class="flex items-center gap-2">
                <input
                    type="search"
                    placeholder="Buscar alumno..."
                    class="border border-border rounded-md px-3 py-1.5 text-sm bg-surface w-56"
                    prop:value=move || vm.filters.get().search
                    on:input=move |ev| vm.set_search(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="px-3 py-1.5 rounded-md text-sm font-medium bg-surface-muted text-fg border border-border hover:bg-surface-elevated"
                    on:click=move |_| vm.export_csv()
                >
                    <i class="fas fa-file-csv mr-1"></i>
                    "Exportar CSV"
                </button>
            </div>
        </div>
    }
}
