use leptos::*;

use crate::{
    api::School,
    components::common::{Button, ButtonVariant},
    pages::schools::utils::{long_date, NO_SCHOOLS, NO_SCHOOLS_HINT},
};

fn detail(icon: &'static str, content: View) -> View {
    view! {
        <div class="flex items-start gap-2 text-fg-muted">
            <span>{icon}</span>
            <span class="text-sm">{content}</span>
        </div>
    }
    .into_view()
}

fn school_card(school: School, on_edit: Callback<i64>) -> impl IntoView {
    let id = school.id;
    let (badge, status) = if school.is_active {
        ("bg-status-success-bg text-status-success-text", "Activo")
    } else {
        ("bg-status-error-bg text-status-error-text", "Inactivo")
    };
    view! {
        <div class="bg-surface-elevated rounded-lg shadow p-6 space-y-3">
            <div class="flex items-start justify-between">
                <div>
                    <h3 class="text-xl font-bold text-fg">{school.name}</h3>
                    <p class="text-sm text-fg-muted">{format!("ID: {}", id)}</p>
                </div>
                <span class=format!("px-3 py-1 rounded-full text-xs font-semibold {}", badge)>{status}</span>
            </div>
            {school.address.map(|address| detail("📍", address.into_view()))}
            {school.contact_email.map(|email| {
                let href = format!("mailto:{}", email);
                detail("✉️", view! { <a href=href class="text-link hover:underline">{email}</a> }.into_view())
            })}
            {school.contact_phone.map(|phone| detail("📞", phone.into_view()))}
            {school.timezone.map(|tz| detail("🕐", tz.into_view()))}
            {school.created_at.map(|created| view! {
                <p class="text-xs text-fg-muted">{format!("Creado: {}", long_date(&created))}</p>
            })}
            <div class="pt-2 border-t border-border">
                <Button variant=ButtonVariant::Secondary on:click=move |_| on_edit.call(id)>
                    "✏️ Editar"
                </Button>
            </div>
        </div>
    }
}

#[component]
pub fn SchoolCards(schools: Signal<Vec<School>>, on_edit: Callback<i64>) -> impl IntoView {
    view! {
        {move || {
            let schools = schools.get();
            if schools.is_empty() {
                view! {
                    <div class="text-center py-12 bg-surface-elevated rounded-lg shadow">
                        <p class="text-lg text-fg">{NO_SCHOOLS}</p>
                        <p class="text-sm text-fg-muted">{NO_SCHOOLS_HINT}</p>
                    </div>
                }
                .into_view()
            } else {
                view! {
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        {schools.into_iter().map(|school| school_card(school, on_edit)).collect_view()}
                    </div>
                }
                .into_view()
            }
        }}
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    fn render(schools: Vec<School>) -> String {
        render_to_string(move || {
            let schools = Signal::derive(move || schools.clone());
            view! { <SchoolCards schools=schools on_edit=Callback::new(|_| {}) /> }
        })
    }

    #[test]
    fn cards_show_contact_details_and_status() {
        let school: School = serde_json::from_value(json!({
            "id": 2,
            "name": "CEIP Luna",
            "address": "Calle Mayor 1",
            "contact_email": "luna@example.com",
            "timezone": "Europe/Madrid",
            "is_active": false,
            "created_at": "2024-09-03T10:00:00"
        }))
        .unwrap();
        let html = render(vec![school]);
        assert!(html.contains("CEIP Luna"));
        assert!(html.contains("ID: 2"));
        assert!(html.contains("mailto:luna@example.com"));
        assert!(html.contains("Inactivo"));
        assert!(html.contains("Creado: 3 de septiembre de 2024"));
        assert!(!html.contains("📞"));
    }

    #[test]
    fn empty_list_points_at_the_add_button() {
        let html = render(Vec::new());
        assert!(html.contains(NO_SCHOOLS));
        assert!(html.contains("Añadir Colegio"));
    }
}
