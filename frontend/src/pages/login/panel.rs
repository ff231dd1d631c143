use crate::pages::login::{components::form::LoginForm, view_model::use_login_view_model};
use leptos::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    let vm = use_login_view_model();
    view! { <LoginForm vm=vm /> }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::provide_test_client;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn login_page_renders_form() {
        let html = render_to_string(move || {
            provide_test_client();
            view! { <LoginPage /> }
        });
        assert!(html.contains("ArrivApp"));
        assert!(html.contains("Usuario"));
        assert!(html.contains("Contraseña"));
        assert!(html.contains("Entrar"));
    }
}
