use crate::{
    api::UserResponse,
    components::layout::LoadingSpinner,
    state::{
        auth::{use_api_client, use_auth},
        session::DASHBOARD_PATH,
    },
};
use leptos::*;

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let session = use_api_client().session().clone();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let is_loading = create_memo(move |_| auth.get().loading);
    create_effect(move |_| {
        let state = auth.get();
        if state.loading || state.is_authenticated {
            return;
        }
        session.redirect_to_login();
    });
    view! {
        <Show
            when=move || should_render_children(is_authenticated.get(), is_loading.get())
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_children(is_authenticated: bool, is_loading: bool) -> bool {
    is_authenticated && !is_loading
}

/// Directors and administrators; teachers are sent back to the dashboard.
#[component]
pub fn RequireStaff(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let session = use_api_client().session().clone();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let is_loading = create_memo(move |_| auth.get().loading);
    let is_staff = create_memo(move |_| is_staff_user(auth.get().user.as_ref()));
    create_effect(move |_| {
        let state = auth.get();
        if state.loading {
            return;
        }
        if !state.is_authenticated {
            session.redirect_to_login();
        } else if state.user.is_some() && !is_staff_user(state.user.as_ref()) {
            session.navigate(DASHBOARD_PATH);
        }
    });
    view! {
        <Show
            when=move || {
                should_render_staff_children(is_authenticated.get(), is_loading.get(), is_staff.get())
            }
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

/// Administrators only; anyone else signed in goes back to the dashboard.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let session = use_api_client().session().clone();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let is_loading = create_memo(move |_| auth.get().loading);
    let is_admin = create_memo(move |_| is_admin_user(auth.get().user.as_ref()));
    create_effect(move |_| {
        let state = auth.get();
        if state.loading {
            return;
        }
        if !state.is_authenticated {
            session.redirect_to_login();
        } else if state.user.is_some() && !is_admin_user(state.user.as_ref()) {
            session.navigate(DASHBOARD_PATH);
        }
    });
    view! {
        <Show
            when=move || {
                should_render_staff_children(is_authenticated.get(), is_loading.get(), is_admin.get())
            }
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn is_admin_user(user: Option<&UserResponse>) -> bool {
    user.is_some_and(UserResponse::is_administrator)
}

fn is_staff_user(user: Option<&UserResponse>) -> bool {
    user.map(UserResponse::can_review_justifications)
        .unwrap_or(false)
}

fn should_render_staff_children(is_authenticated: bool, is_loading: bool, is_staff: bool) -> bool {
    is_authenticated && is_staff && !is_loading
}

#[cfg(test)]
mod tests {
    use super::{is_admin_user, is_staff_user, should_render_children, should_render_staff_children};
    use crate::api::{UserResponse, UserRole};

    fn user(role: UserRole, is_admin: bool) -> UserResponse {
        UserResponse {
            id: 1,
            email: "profe@example.com".into(),
            username: "profe".into(),
            full_name: None,
            role,
            is_admin,
            is_active: true,
            school_id: Some(1),
        }
    }

    #[test]
    fn guard_blocks_until_authenticated() {
        assert!(!should_render_children(false, true));
        assert!(!should_render_children(false, false));
        assert!(!should_render_children(true, true));
        assert!(should_render_children(true, false));
    }

    #[test]
    fn staff_guard_excludes_teachers() {
        assert!(!is_staff_user(None));
        assert!(!is_staff_user(Some(&user(UserRole::Teacher, false))));
        assert!(is_staff_user(Some(&user(UserRole::Teacher, true))));
        assert!(is_staff_user(Some(&user(UserRole::Director, false))));
        assert!(is_staff_user(Some(&user(UserRole::Admin, false))));
    }

    #[test]
    fn admin_guard_accepts_the_flag_or_the_role() {
        assert!(!is_admin_user(None));
        assert!(!is_admin_user(Some(&user(UserRole::Director, false))));
        assert!(is_admin_user(Some(&user(UserRole::Director, true))));
        assert!(is_admin_user(Some(&user(UserRole::Admin, false))));
    }

    #[test]
    fn staff_guard_blocks_until_loaded() {
        assert!(!should_render_staff_children(true, true, true));
        assert!(!should_render_staff_children(true, false, false));
        assert!(should_render_staff_children(true, false, true));
    }
}
