use crate::components::layout::Layout;
use crate::pages::dashboard::{
    components::{
        AbsentTable, CheckInTable, Clock, FilterBar, LateTable, PendingJustifications, StatsCards,
        StatusBanner, StudentProfile,
    },
    view_model::use_dashboard_view_model,
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();
    // Effects only run in the browser, so timers and fetches never start during SSR tests.
    create_effect(move |started: Option<()>| {
        if started.is_none() {
            vm.start();
        }
    });

    let state = vm.state;
    let rows = create_memo(move |_| {
        let term = vm.filters.with(|f| f.search.clone());
        state.with(|s| s.rows(&term))
    });
    let metrics = Signal::derive(move || state.with(|s| s.metrics()));
    let justifications = Signal::derive(move || state.with(|s| s.justifications.clone()));
    let absent_all = Signal::derive(move || {
        state.with(|s| {
            s.snapshot
                .as_ref()
                .map(|snap| snap.absent_students.clone())
                .unwrap_or_default()
        })
    });

    view! {
        <Layout>
            <div class="px-4 sm:px-0 space-y-6">
                <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                    <div class="lg:col-span-2 space-y-4">
                        <StatusBanner
                            status=Signal::derive(move || state.with(|s| s.status.clone()))
                            last_updated=Signal::derive(move || state.with(|s| s.last_updated_label()))
                        />
                        <StatsCards metrics=metrics />
                    </div>
                    <div class="space-y-4">
                        <Clock now=vm.now.into() />
                        <PendingJustifications justifications=justifications absent=absent_all />
                    </div>
                </div>
                <FilterBar vm=vm />
                <CheckInTable rows=Signal::derive(move || rows.with(|r| r.checkins.clone())) />
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                    <LateTable rows=Signal::derive(move || rows.with(|r| r.late_students.clone())) />
                    <AbsentTable
                        rows=Signal::derive(move || rows.with(|r| r.absent_students.clone()))
                        justifications=justifications
                        on_select=Callback::new(move |id| vm.show_profile(id))
                    />
                </div>
            </div>
            <StudentProfile profile=vm.profile />
        </Layout>
    }
}
