use crate::api::ApiError;
use leptos::*;

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || error.get().map(|e| {
                    let errors = (e.code == "VALIDATION_ERROR")
                        .then(|| validation_entries(&e))
                        .flatten();
                    match errors {
                        Some(entries) => view! {
                            <ul class="list-disc list-inside text-sm">
                                {entries.into_iter().map(|entry| view! { <li>{entry}</li> }).collect_view()}
                            </ul>
                        }.into_view(),
                        None if e.code != "UNKNOWN" && !e.code.is_empty() => view! {
                            <div class="text-xs opacity-75">{"Código: "}{e.code.clone()}</div>
                        }.into_view(),
                        None => ().into_view(),
                    }
                }).unwrap_or_else(|| ().into_view())}
            </div>
        </Show>
    }
}

fn validation_entries(error: &ApiError) -> Option<Vec<String>> {
    let errors = error.details.as_ref()?.get("errors")?.as_array()?;
    Some(
        errors
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
    )
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[test]
    fn inline_error_lists_each_validation_entry() {
        let html = render_to_string(move || {
            let error = ApiError {
                error: "body.name: field required, body.class_name: field required".into(),
                code: "VALIDATION_ERROR".into(),
                details: Some(json!({
                    "errors": ["body.name: field required", "body.class_name: field required"]
                })),
            };
            let signal = create_rw_signal(Some(error));
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(html.contains("body.name: field required"));
        assert!(html.contains("<ul"));
        assert!(html.contains("body.class_name: field required"));
    }

    #[test]
    fn inline_error_shows_code_for_plain_errors() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some(ApiError::request_failed("Error de conexión")));
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(html.contains("Error de conexión"));
        assert!(html.contains("Código: REQUEST_FAILED"));
        assert!(!html.contains("<ul"));
    }

    #[test]
    fn inline_error_renders_nothing_without_error() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(None::<ApiError>);
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(!html.contains("bg-status-error-bg"));
    }
}
