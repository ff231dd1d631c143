use crate::components::{
    error::InlineErrorMessage,
    layout::{Layout, LoadingSpinner},
};
use crate::pages::reports::{
    components::{AnalyticsReport, HistoryReport, ReportFilters, StatisticsReport, TardinessReport},
    repository::ReportData,
    view_model::ReportsViewModel,
};
use leptos::*;

fn report_view(data: ReportData) -> View {
    match data {
        ReportData::Statistics(stats) => view! { <StatisticsReport stats=stats /> }.into_view(),
        ReportData::History(history) => view! { <HistoryReport history=history /> }.into_view(),
        ReportData::Tardiness(analysis) => view! { <TardinessReport analysis=analysis /> }.into_view(),
        ReportData::Analytics(analytics) => view! { <AnalyticsReport analytics=*analytics /> }.into_view(),
    }
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let vm = ReportsViewModel::new();
    let schools = Signal::derive(move || vm.schools_resource.get().unwrap_or_default());
    let report = vm.current_report();
    let pending = vm.generate_action.pending();

    view! {
        <Layout>
            <div class="px-4 sm:px-0 space-y-6">
                <div>
                    <h2 class="text-2xl font-bold text-fg">"Informes"</h2>
                    <p class="text-sm text-fg-muted">"Estadísticas y análisis de asistencia"</p>
                </div>
                <ReportFilters vm=vm schools=schools />
                <InlineErrorMessage error=Signal::derive(move || vm.message.get().error) />
                <Show when=move || pending.get()>
                    <LoadingSpinner />
                </Show>
                {move || match report.get() {
                    Some(data) => report_view(data),
                    None => view! {
                        <p class="text-center text-fg-muted py-8">
                            "Selecciona un rango de fechas y pulsa «Generar reporte»."
                        </p>
                    }
                    .into_view(),
                }}
            </div>
        </Layout>
    }
}
