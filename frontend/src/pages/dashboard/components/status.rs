use leptos::*;

use crate::pages::dashboard::model::{StatusKind, StatusMessage};

#[component]
pub fn StatusBanner(
    status: Signal<Option<StatusMessage>>,
    last_updated: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-2">
            {move || status.get().map(|message| {
                let tone = match message.kind {
                    StatusKind::Info => "bg-status-info-bg border-status-info-border text-status-info-text",
                    StatusKind::Error => "bg-status-error-bg border-status-error-border text-status-error-text",
                };
                view! {
                    <div role="status" class=format!("border px-4 py-2 rounded text-sm {}", tone)>
                        {message.text}
                    </div>
                }
            })}
            <p class="text-xs text-fg-muted text-right">
                {move || last_updated.get().unwrap_or_default()}
            </p>
        </div>
    }
}
