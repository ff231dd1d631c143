use leptos::*;

use crate::{api::Student, components::layout::LoadingSpinner, pages::dashboard::model::ProfileState};

fn field(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div>
            <p class="text-sm font-semibold text-fg-muted">{label}</p>
            <p class="text-lg text-fg">{value}</p>
        </div>
    }
}

fn profile_body(student: Student) -> View {
    let school = student
        .school
        .as_ref()
        .map(|s| s.name.clone())
        .unwrap_or_else(|| "N/A".into());
    let (badge, status) = if student.is_active {
        ("bg-status-success-bg text-status-success-text", "✓ Activo")
    } else {
        ("bg-status-error-bg text-status-error-text", "✗ Inactivo")
    };
    let registered = student
        .created_at
        .map(|d| d.format("%d/%m/%Y").to_string());
    view! {
        <div class="space-y-4">
            <div class="border-b border-border pb-4">
                <h4 class="text-2xl font-bold text-fg">{student.name}</h4>
                <p class="text-sm text-fg-muted">{format!("ID: {}", student.student_id)}</p>
            </div>
            <div class="grid grid-cols-2 gap-4">
                {field("Clase", student.class_name)}
                {field("Colegio", school)}
            </div>
            {field("Email del Padre/Madre", student.parent_email.unwrap_or_default())}
            <div>
                <p class="text-sm font-semibold text-fg-muted">"Estado"</p>
                <span class=format!("inline-flex items-center px-3 py-1 rounded-full text-sm font-medium {}", badge)>
                    {status}
                </span>
            </div>
            {registered.map(|date| field("Fecha de Registro", date))}
        </div>
    }
    .into_view()
}

#[component]
pub fn StudentProfile(profile: RwSignal<Option<ProfileState>>) -> impl IntoView {
    let close = move |_| profile.set(None);
    view! {
        <Show when=move || profile.with(Option::is_some)>
            <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
                <div class="fixed inset-0 bg-overlay-backdrop" on:click=close></div>
                <div
                    class="relative bg-surface-elevated rounded-lg shadow-xl w-full max-w-lg p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                >
                    <div class="flex items-center justify-between">
                        <h3 class="text-lg font-semibold text-fg">"Perfil del alumno"</h3>
                        <button type="button" aria-label="Cerrar" class="text-fg-muted hover:text-fg" on:click=close>
                            "✕"
                        </button>
                    </div>
                    {move || match profile.get() {
                        Some(ProfileState::Loaded(student)) => profile_body(*student),
                        Some(ProfileState::Failed(message)) => view! {
                            <p class="text-status-error-text text-center py-4">{message}</p>
                        }
                        .into_view(),
                        Some(ProfileState::Loading(_)) => view! { <LoadingSpinner /> }.into_view(),
                        None => ().into_view(),
                    }}
                </div>
            </div>
        </Show>
    }
}
