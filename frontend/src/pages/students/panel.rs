use crate::components::{
    common::{Button, ButtonVariant},
    confirm_dialog::ConfirmDialog,
    error::InlineErrorMessage,
    layout::{Layout, LoadingSpinner, SuccessMessage},
};
use crate::pages::students::{
    components::{form::StudentForm, list::StudentList},
    view_model::StudentsViewModel,
};
use leptos::*;

#[component]
pub fn StudentsPage() -> impl IntoView {
    let vm = StudentsViewModel::new();
    let resource = vm.students_resource;
    let load_error = Signal::derive(move || resource.get().and_then(|r| r.err()));
    let students = vm.filtered_students();
    let schools = Signal::derive(move || vm.schools_resource.get().unwrap_or_default());
    let delete_pending = vm.delete_action.pending();
    let delete_message = Signal::derive(move || {
        vm.pending_delete
            .get()
            .map(|s| format!("¿Seguro que quieres eliminar a {}? Esta acción no se puede deshacer.", s.name))
            .unwrap_or_default()
    });

    view! {
        <Layout>
            <div class="px-4 sm:px-0 space-y-6">
                <div class="flex flex-col gap-2 md:flex-row md:items-center md:justify-between">
                    <div>
                        <h2 class="text-2xl font-bold text-fg">"Alumnos"</h2>
                        <p class="text-sm text-fg-muted">
                            {move || format!("{} alumnos", students.get().len())}
                        </p>
                    </div>
                    <div class="flex items-center gap-2">
                        <input
                            type="search"
                            placeholder="Buscar por nombre, ID o email..."
                            class="border border-form-control-border rounded px-3 py-2 text-sm bg-form-control-bg"
                            prop:value=move || vm.search.get()
                            on:input=move |ev| vm.search.set(event_target_value(&ev))
                        />
                        <Button variant=ButtonVariant::Secondary on:click=move |_| vm.export_csv()>
                            "Exportar CSV"
                        </Button>
                    </div>
                </div>
                <StudentForm vm=vm schools=schools />
                {move || vm.list_messages.get().success.map(|msg| view! { <SuccessMessage message=msg /> })}
                <InlineErrorMessage error=Signal::derive(move || vm.list_messages.get().error) />
                <Suspense fallback=move || view! { <LoadingSpinner /> }>
                    <Show
                        when=move || load_error.get().is_none()
                        fallback=move || view! {
                            <div class="space-y-2">
                                <p class="text-status-error-text text-center py-4">"Error al cargar alumnos"</p>
                                <InlineErrorMessage error=load_error />
                            </div>
                        }
                    >
                        <StudentList
                            students=students
                            on_delete=Callback::new(move |student| vm.request_delete(student))
                        />
                    </Show>
                </Suspense>
            </div>
            <ConfirmDialog
                is_open=Signal::derive(move || vm.pending_delete.get().is_some())
                title="Eliminar alumno"
                message=delete_message
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.cancel_delete())
                pending=delete_pending
            />
        </Layout>
    }
}
