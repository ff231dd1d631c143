use crate::{
    api::Student,
    components::empty_state::EmptyState,
    pages::students::utils::{school_name, status_label, NO_STUDENTS},
};
use leptos::*;

#[component]
pub fn StudentList(
    students: Signal<Vec<Student>>,
    on_delete: Callback<Student>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !students.get().is_empty()
            fallback=|| view! { <EmptyState title=NO_STUDENTS /> }
        >
            <div class="bg-surface-elevated shadow rounded-lg overflow-x-auto">
                <table class="min-w-full divide-y divide-border">
                    <thead class="bg-surface-muted">
                        <tr>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Nombre"</th>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"ID"</th>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Clase"</th>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Email"</th>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Colegio"</th>
                            <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Estado"</th>
                            <th class="px-4 py-2"></th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        <For
                            each=move || students.get()
                            key=|student| student.id
                            children=move |student: Student| {
                                let badge = if student.is_active {
                                    "bg-status-success-bg text-status-success-text"
                                } else {
                                    "bg-surface-muted text-fg-muted"
                                };
                                let school = school_name(&student);
                                let email = student.parent_email.clone().unwrap_or_default();
                                let target = student.clone();
                                view! {
                                    <tr>
                                        <td class="px-4 py-2 text-sm font-medium text-fg">{student.name}</td>
                                        <td class="px-4 py-2 text-sm text-fg-muted">{student.student_id}</td>
                                        <td class="px-4 py-2 text-sm text-fg-muted">{student.class_name}</td>
                                        <td class="px-4 py-2 text-sm text-fg-muted">{email}</td>
                                        <td class="px-4 py-2 text-sm text-fg-muted">{school}</td>
                                        <td class="px-4 py-2 text-sm">
                                            <span class=format!("px-2 py-1 rounded-full text-xs {}", badge)>
                                                {status_label(student.is_active)}
                                            </span>
                                        </td>
                                        <td class="px-4 py-2 text-right">
                                            <button
                                                class="text-sm text-action-danger-bg hover:underline"
                                                on:click=move |_| on_delete.call(target.clone())
                                            >
                                                "Eliminar"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </Show>
    }
}
