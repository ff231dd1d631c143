use leptos::*;

#[component]
pub fn SummaryCard(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="p-5 rounded-lg bg-surface-elevated border border-border shadow-sm">
            <p class="text-sm font-medium text-fg-muted">{label}</p>
            <p class="mt-1 text-2xl font-semibold text-fg">{value}</p>
        </div>
    }
}

#[component]
pub fn ReportTable(title: &'static str, headers: Vec<&'static str>, children: Children) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg overflow-hidden">
            <h3 class="px-6 py-4 text-base font-semibold text-fg border-b border-border">{title}</h3>
            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-border">
                    <thead class="bg-surface-muted">
                        <tr>
                            {headers.into_iter().map(|h| view! {
                                <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">{h}</th>
                            }).collect_view()}
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">{children()}</tbody>
                </table>
            </div>
        </div>
    }
}

pub fn empty_row(colspan: u8, message: &'static str) -> View {
    view! {
        <tr>
            <td colspan=colspan.to_string() class="px-6 py-4 text-center text-fg-muted">{message}</td>
        </tr>
    }
    .into_view()
}

pub fn badge(class: &'static str, text: String) -> impl IntoView {
    view! {
        <span class=format!("px-2 py-1 text-xs font-semibold rounded-full {}", class)>{text}</span>
    }
}

pub const CELL: &str = "px-6 py-4 whitespace-nowrap text-sm text-fg";
pub const MUTED_CELL: &str = "px-6 py-4 whitespace-nowrap text-sm text-fg-muted";
