use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    components::guard::{RequireAdmin, RequireAuth, RequireStaff},
    pages::{
        dashboard::DashboardPage, justifications::JustificationsPage, login::LoginPage,
        parent_justification::ParentJustificationPage, reports::ReportsPage,
        schools::SchoolsPage, students::StudentsPage,
    },
    state::auth::AuthProvider,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/dashboard",
    "/justificaciones",
    "/justificar",
    "/alumnos",
    "/informes",
    "/colegios",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/dashboard",
    "/justificaciones",
    "/alumnos",
    "/informes",
    "/colegios",
];

pub const STAFF_ROUTE_PATHS: &[&str] = &["/justificaciones"];

pub const ADMIN_ROUTE_PATHS: &[&str] = &["/colegios"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login", "/justificar"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    provide_meta_context();
    view! {
        <Title text="ArrivApp · Panel de administración"/>
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=|| view! { <Redirect path="/dashboard"/> }/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/dashboard" view=ProtectedDashboard/>
                    <Route path="/justificaciones" view=ProtectedJustifications/>
                    <Route path="/justificar" view=ParentJustificationPage/>
                    <Route path="/alumnos" view=ProtectedStudents/>
                    <Route path="/informes" view=ProtectedReports/>
                    <Route path="/colegios" view=ProtectedSchools/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}

#[component]
fn ProtectedJustifications() -> impl IntoView {
    view! { <RequireStaff><JustificationsPage/></RequireStaff> }
}

#[component]
fn ProtectedStudents() -> impl IntoView {
    view! { <RequireAuth><StudentsPage/></RequireAuth> }
}

#[component]
fn ProtectedReports() -> impl IntoView {
    view! { <RequireAuth><ReportsPage/></RequireAuth> }
}

#[component]
fn ProtectedSchools() -> impl IntoView {
    view! { <RequireAdmin><SchoolsPage/></RequireAdmin> }
}
