use crate::components::{
    common::{Button, ButtonVariant},
    error::InlineErrorMessage,
    layout::{Layout, LoadingSpinner, SuccessMessage},
};
use crate::pages::schools::{
    components::{SchoolCards, SchoolEditor},
    utils::LIST_FAILED,
    view_model::SchoolsViewModel,
};
use leptos::*;

#[component]
pub fn SchoolsPage() -> impl IntoView {
    let vm = SchoolsViewModel::new();
    let resource = vm.schools_resource;
    let load_error = Signal::derive(move || resource.get().and_then(|r| r.err()));
    let schools = Signal::derive(move || resource.get().and_then(|r| r.ok()).unwrap_or_default());

    view! {
        <Layout>
            <div class="px-4 sm:px-0 space-y-6">
                <div class="flex items-center justify-between">
                    <div>
                        <h2 class="text-2xl font-bold text-fg">"Colegios"</h2>
                        <p class="text-sm text-fg-muted">
                            {move || format!("{} colegios", schools.get().len())}
                        </p>
                    </div>
                    <Button variant=ButtonVariant::Primary on:click=move |_| vm.open_create()>
                        "+ Añadir Colegio"
                    </Button>
                </div>
                {move || vm.list_messages.get().success.map(|msg| view! { <SuccessMessage message=msg /> })}
                <InlineErrorMessage error=Signal::derive(move || vm.list_messages.get().error) />
                <Show when=move || vm.load_action.pending().get()>
                    <LoadingSpinner />
                </Show>
                <Suspense fallback=move || view! { <LoadingSpinner /> }>
                    <Show
                        when=move || load_error.get().is_none()
                        fallback=move || view! {
                            <div class="space-y-2">
                                <p class="text-status-error-text text-center py-4">{LIST_FAILED}</p>
                                <InlineErrorMessage error=load_error />
                            </div>
                        }
                    >
                        <SchoolCards
                            schools=schools
                            on_edit=Callback::new(move |id| vm.open_edit(id))
                        />
                    </Show>
                </Suspense>
            </div>
            <SchoolEditor vm=vm />
        </Layout>
    }
}
