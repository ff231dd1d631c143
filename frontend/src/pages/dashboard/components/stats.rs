use leptos::*;

use crate::pages::dashboard::model::DashboardMetrics;

#[component]
pub fn StatsCards(metrics: Signal<DashboardMetrics>) -> impl IntoView {
    let value = move |f: fn(&DashboardMetrics) -> String| move || f(&metrics.get());
    view! {
        <div class="space-y-4">
            <div class="grid grid-cols-1 gap-4 sm:grid-cols-3">
                <Metric label="Presentes" tone="text-status-success-text" value=value(|m| m.present.to_string()) />
                <Metric label="Ausentes" tone="text-status-error-text" value=value(|m| m.absent.to_string()) />
                <Metric label="Retrasos" tone="text-status-warning-text" value=value(|m| m.late.to_string()) />
            </div>
            <div class="grid grid-cols-1 gap-4 sm:grid-cols-3">
                <Metric label="Tasa de asistencia" value=value(|m| format!("{}%", m.attendance_rate)) />
                <Metric label="Puntualidad" value=value(|m| format!("{}%", m.on_time_rate)) />
                <Metric label="Requieren atención" value=value(|m| m.unjustified_absent.to_string()) />
            </div>
            <div class="grid grid-cols-1 gap-4 sm:grid-cols-3">
                <Metric label="Total alumnos" value=value(|m| m.total_students.to_string()) />
                <Metric label="Llegaron a tiempo" value=value(|m| m.on_time.to_string()) />
                <Metric label="Justificadas" value=value(|m| m.justified.to_string()) />
            </div>
        </div>
    }
}

#[component]
fn Metric<F>(
    label: &'static str,
    value: F,
    #[prop(optional)] tone: &'static str,
) -> impl IntoView
where
    F: Fn() -> String + 'static,
{
    let tone = if tone.is_empty() { "text-fg" } else { tone };
    view! {
        <div class="p-5 rounded-lg bg-surface-elevated border border-border shadow-sm">
            <p class="text-xs font-bold text-fg-muted uppercase tracking-widest">{label}</p>
            <p class=format!("mt-2 text-3xl font-extrabold {}", tone)>{value}</p>
        </div>
    }
}
