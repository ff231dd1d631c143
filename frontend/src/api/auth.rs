use reqwest::Method;
use serde_json::{json, Value};

use super::{
    client::ApiClient,
    types::{ApiError, LoginRequest, TokenResponse, UserResponse},
};

impl ApiClient {
    /// Exchanges credentials for a bearer token and stores it in the session.
    pub async fn login(&self, request: LoginRequest) -> Result<TokenResponse, ApiError> {
        let token: TokenResponse = self
            .send_json(Method::POST, "/api/auth/login", &request, false)
            .await?;
        self.session()
            .store(&token.access_token, &request.username)?;
        log::info!("Signed in as {}", request.username);
        Ok(token)
    }

    pub async fn get_me(&self) -> Result<UserResponse, ApiError> {
        self.get_json("/api/auth/me", &[]).await
    }

    /// Best-effort server logout; the local session is cleared regardless.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let result = if self.session().is_active() {
            self.send_json::<_, Value>(Method::POST, "/api/auth/logout", &json!({}), true)
                .await
                .map(|_| ())
        } else {
            Ok(())
        };
        if let Err(err) = &result {
            log::error!("Logout error: {}", err);
        }
        self.session().clear();
        result
    }
}
