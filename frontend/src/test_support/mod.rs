#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{UserResponse, UserRole};
    use crate::state::auth::AuthState;
    use leptos::*;

    fn user(role: UserRole) -> UserResponse {
        UserResponse {
            id: 1,
            email: "direccion@example.com".into(),
            username: "director".into(),
            full_name: Some("Marta López".into()),
            role,
            is_admin: role == UserRole::Admin,
            is_active: true,
            school_id: Some(1),
        }
    }

    pub fn admin_user() -> UserResponse {
        UserResponse {
            username: "admin".into(),
            full_name: Some("Admin Central".into()),
            school_id: None,
            ..user(UserRole::Admin)
        }
    }

    pub fn director_user() -> UserResponse {
        user(UserRole::Director)
    }

    pub fn teacher_user() -> UserResponse {
        UserResponse {
            username: "profe".into(),
            full_name: Some("Pablo Ruiz".into()),
            ..user(UserRole::Teacher)
        }
    }

    pub fn provide_auth(
        user: Option<UserResponse>,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            user,
            is_authenticated: true,
            loading: false,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }

    /// Puts a client with in-memory session storage into context so that
    /// rendered components never touch browser APIs.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn provide_test_client() -> crate::api::test_support::TestClient {
        let client = crate::api::test_support::signed_in_client("http://127.0.0.1:9");
        provide_context(client.api.clone());
        client
    }
}
