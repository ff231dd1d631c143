use crate::components::{
    error::InlineErrorMessage,
    layout::{Layout, LoadingSpinner, SuccessMessage},
};
use crate::pages::justifications::{
    components::{filter::StatusFilter, list::JustificationList, review_panel::ReviewPanel},
    utils::{rows, student_name},
    view_model::JustificationsViewModel,
};
use leptos::*;

#[component]
pub fn JustificationsPage() -> impl IntoView {
    let vm = JustificationsViewModel::new();
    let resource = vm.list_resource;
    let load_error = Signal::derive(move || resource.get().and_then(|r| r.err()));
    let loaded_rows = Signal::derive(move || {
        resource
            .get()
            .and_then(|r| r.ok())
            .map(|list| rows(&list))
            .unwrap_or_default()
    });
    let selected_name = Signal::derive(move || {
        let students = resource
            .get()
            .and_then(|r| r.ok())
            .map(|list| list.students)
            .unwrap_or_default();
        vm.selected
            .get()
            .map(|j| student_name(&j, &students))
            .unwrap_or_default()
    });
    let success = move || vm.message.get().success;

    view! {
        <Layout>
            <div class="px-4 sm:px-0 space-y-4">
                <h2 class="text-2xl font-bold text-fg">"Justificaciones"</h2>
                <StatusFilter status=vm.status_filter on_reload=Callback::new(move |_| vm.reload()) />
                {move || success().map(|msg| view! { <SuccessMessage message=msg /> })}
                <Show when=move || vm.selected.get().is_none()>
                    <InlineErrorMessage error=Signal::derive(move || vm.message.get().error) />
                </Show>
                <Suspense fallback=move || view! { <LoadingSpinner /> }>
                    <Show
                        when=move || load_error.get().is_none()
                        fallback=move || view! {
                            <div class="space-y-2">
                                <p class="text-status-error-text text-center py-4">"Error al cargar justificaciones"</p>
                                <InlineErrorMessage error=load_error />
                            </div>
                        }
                    >
                        <JustificationList
                            rows=loaded_rows
                            on_review=Callback::new(move |j| vm.open_review(j))
                        />
                    </Show>
                </Suspense>
                <ReviewPanel vm=vm student_name=selected_name />
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{director_user, provide_auth, provide_test_client};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn page_renders_filter_and_title() {
        let html = render_to_string(move || {
            provide_test_client();
            provide_auth(Some(director_user()));
            view! { <JustificationsPage /> }
        });
        assert!(html.contains("Justificaciones"));
        assert!(html.contains("Pendientes"));
        assert!(html.contains("Rechazadas"));
        assert!(!html.contains("Revisar justificación"));
    }
}
