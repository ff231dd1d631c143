use crate::api::{ApiClient, ApiError, LoginRequest, UserResponse};
use leptos::*;

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user: Option<UserResponse>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl AuthState {
    fn signed_in(user: Option<UserResponse>) -> Self {
        Self {
            user,
            is_authenticated: true,
            loading: false,
        }
    }

    fn signed_out() -> Self {
        Self::default()
    }
}

/// Client from context, falling back to a browser-backed one.
pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(ApiClient::new)
}

fn create_auth_context(api_client: ApiClient) -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState::default());
    if !api_client.session().is_active() {
        return (auth_state, set_auth_state);
    }

    set_auth_state.update(|state| state.loading = true);
    spawn_local(async move {
        match api_client.get_me().await {
            Ok(user) => set_auth_state.set(AuthState::signed_in(Some(user))),
            Err(err) => {
                log::warn!("Session check failed: {}", err);
                set_auth_state.set(AuthState::signed_out());
            }
        }
    });

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context(use_api_client());
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn login_request(
    request: LoginRequest,
    api_client: &ApiClient,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    set_auth_state.update(|state| state.loading = true);

    if let Err(error) = api_client.login(request).await {
        set_auth_state.update(|state| state.loading = false);
        return Err(error);
    }

    // The header can live without the profile; the dashboard asks again.
    let user = match api_client.get_me().await {
        Ok(user) => Some(user),
        Err(err) => {
            log::warn!("Could not load the signed-in user: {}", err);
            None
        }
    };
    set_auth_state.set(AuthState::signed_in(user));
    Ok(())
}

pub async fn logout(
    api_client: &ApiClient,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let result = api_client.logout().await;
    set_auth_state.set(AuthState::signed_out());
    result
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_api_client();

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let api = api.clone();
        async move { login_request(payload, &api, set_auth).await }
    })
}

pub fn use_logout_action() -> Action<(), Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_api_client();

    create_action(move |_: &()| {
        let api = api.clone();
        async move { logout(&api, set_auth).await }
    })
}
