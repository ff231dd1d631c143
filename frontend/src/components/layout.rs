use crate::{
    api::UserResponse,
    state::{
        auth::{self, use_api_client, use_auth},
        session::LOGIN_PATH,
    },
};
use leptos::*;

const NAV_LINK: &str =
    "text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";
const MOBILE_NAV_LINK: &str =
    "block text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct NavItem {
    href: &'static str,
    label: &'static str,
}

fn nav_items(user: Option<&UserResponse>) -> Vec<NavItem> {
    let mut items = vec![NavItem {
        href: "/dashboard",
        label: "Panel",
    }];
    if user.is_some_and(UserResponse::can_review_justifications) {
        items.push(NavItem {
            href: "/justificaciones",
            label: "Justificaciones",
        });
    }
    items.push(NavItem {
        href: "/alumnos",
        label: "Alumnos",
    });
    items.push(NavItem {
        href: "/informes",
        label: "Informes",
    });
    if user.is_some_and(UserResponse::is_administrator) {
        items.push(NavItem {
            href: "/colegios",
            label: "Colegios",
        });
    }
    items
}

#[component]
pub fn UserBadge() -> impl IntoView {
    let (auth, _) = use_auth();
    let session = use_api_client().session().clone();
    let user = create_memo(move |_| auth.get().user);
    // Until /me answers, the name saved at login is all we have.
    let fallback_name = move || {
        session
            .stored_user_name()
            .map(|name| view! { <p class="text-sm font-medium text-fg">{name}</p> })
    };
    view! {
        <Show when=move || user.get().is_some() fallback=fallback_name>
            {move || user.get().map(|user| view! {
                <div class="flex items-center gap-2">
                    <span class="inline-flex h-8 w-8 items-center justify-center rounded-full bg-action-primary-bg text-action-primary-text text-xs font-bold">
                        {user.initials()}
                    </span>
                    <div class="hidden sm:block leading-tight">
                        <p class="text-sm font-medium text-fg">{user.display_name()}</p>
                        <p class="text-xs text-fg-muted">{user.role.label()}</p>
                    </div>
                </div>
            })}
        </Show>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let (menu_open, set_menu_open) = create_signal(false);
    let items = create_memo(move |_| nav_items(auth.get().user.as_ref()));
    let session = use_api_client().session().clone();
    let logout_action = auth::use_logout_action();
    let logout_pending = logout_action.pending();
    create_effect(move |_| {
        if logout_action.value().get().is_some() {
            session.navigate(LOGIN_PATH);
        }
    });
    let on_logout = move |_| {
        if logout_pending.get_untracked() {
            return;
        }
        set_menu_open.set(false);
        logout_action.dispatch(());
    };
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center">
                        <h1 class="text-xl font-semibold text-fg">"ArrivApp"</h1>
                    </div>
                    <div class="flex items-center gap-4">
                        <nav class="hidden lg:flex space-x-4">
                            {move || items.get().into_iter().map(|item| view! {
                                <a href=item.href class=NAV_LINK>{item.label}</a>
                            }).collect_view()}
                            <button
                                on:click=on_logout
                                class=format!("{} disabled:opacity-50", NAV_LINK)
                                disabled=move || logout_pending.get()
                            >
                                "Salir"
                            </button>
                        </nav>
                        <UserBadge/>
                        <button
                            type="button"
                            class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            on:click=toggle_menu
                            aria-expanded=move || menu_open.get()
                            aria-controls="mobile-nav"
                        >
                            <span class="sr-only">
                                {move || if menu_open.get() { "Cerrar menú" } else { "Abrir menú" }}
                            </span>
                            <svg class="h-6 w-6" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                            </svg>
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <div id="mobile-nav" class="lg:hidden border-t border-border">
                        <nav class="px-4 py-3 space-y-2">
                            {move || items.get().into_iter().map(|item| view! {
                                <a
                                    href=item.href
                                    class=MOBILE_NAV_LINK
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    {item.label}
                                </a>
                            }).collect_view()}
                            <button
                                on:click=on_logout
                                class=format!("w-full text-left {} disabled:opacity-50", MOBILE_NAV_LINK)
                                disabled=move || logout_pending.get()
                            >
                                "Salir"
                            </button>
                        </nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-check-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{director_user, provide_auth, provide_test_client};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn header_shows_user_and_role() {
        let html = render_to_string(move || {
            provide_test_client();
            provide_auth(Some(director_user()));
            view! { <Header /> }
        });
        assert!(html.contains("Marta López"));
        assert!(html.contains("Director"));
        assert!(html.contains("DI"));
        assert!(html.contains("Justificaciones"));
        assert!(html.contains("Salir"));
    }

    #[test]
    fn badge_falls_back_to_stored_name() {
        let html = render_to_string(move || {
            provide_test_client();
            provide_auth(None);
            view! { <UserBadge /> }
        });
        assert!(html.contains("director"));
    }

    #[test]
    fn layout_renders_children() {
        let html = render_to_string(move || {
            provide_test_client();
            provide_auth(Some(director_user()));
            view! { <Layout><div>"child"</div></Layout> }
        });
        assert!(html.contains("child"));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner />
                    <SuccessMessage message="hecho" />
                </div>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(html.contains("hecho"));
    }
}
