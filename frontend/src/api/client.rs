use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{header::HeaderMap, Client, Method, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{api::types::ApiError, config, state::session::Session};

// Same set `encodeURIComponent` leaves untouched.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Query parameters; `None` and empty values are left out of the URL.
pub type QueryParams<'a> = [(&'a str, Option<String>)];

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    session: Session,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            session: Session::browser(),
        }
    }

    pub fn with_session(base_url: impl Into<String>, session: Session) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&base_url.into())),
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    fn get_auth_headers(&self) -> Result<HeaderMap, ApiError> {
        let Some(token) = self.session.token() else {
            self.session.force_logout();
            return Err(ApiError::unauthorized("No hay una sesión activa"));
        };
        let mut headers = HeaderMap::new();
        headers.insert(
            reqwest::header::AUTHORIZATION,
            format!("Bearer {}", token)
                .parse()
                .map_err(|_| ApiError::unauthorized("Token con formato inválido"))?,
        );
        Ok(headers)
    }

    fn handle_unauthorized_status(&self, status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            self.session.force_logout();
        }
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        query: &QueryParams<'_>,
        authenticated: bool,
    ) -> Result<RequestBuilder, ApiError> {
        let base_url = self.resolved_base_url().await;
        let url = build_url(&base_url, path, query);
        let builder = self.http_client().request(method, url);
        if authenticated {
            Ok(builder.headers(self.get_auth_headers()?))
        } else {
            Ok(builder)
        }
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        builder.send().await.map_err(|e| {
            log::error!("Request failed: {}", e);
            ApiError::request_failed(format!("Error de conexión: {}", e))
        })
    }

    /// Every response passes through here, so a 401 from any endpoint ends the session.
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> Result<T, ApiError> {
        let status = response.status();
        self.handle_unauthorized_status(status);
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::request_failed(format!("Error de conexión: {}", e)))?;
        if status.is_success() {
            let payload = if body.trim().is_empty() { "null" } else { body.as_str() };
            serde_json::from_str(payload)
                .map_err(|e| ApiError::parse_error(format!("Failed to parse response: {}", e)))
        } else {
            let parsed = serde_json::from_str::<Value>(&body).ok();
            Err(ApiError::from_response(status.as_u16(), parsed.as_ref()))
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &QueryParams<'_>,
    ) -> Result<T, ApiError> {
        let builder = self.request(Method::GET, path, query, true).await?;
        let response = self.execute(builder).await?;
        self.handle_response(response).await
    }

    pub(crate) async fn get_public_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &QueryParams<'_>,
    ) -> Result<T, ApiError> {
        let builder = self.request(Method::GET, path, query, false).await?;
        let response = self.execute(builder).await?;
        self.handle_response(response).await
    }

    pub(crate) async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        authenticated: bool,
    ) -> Result<T, ApiError> {
        let builder = self.request(method, path, &[], authenticated).await?;
        let response = self.execute(builder.json(body)).await?;
        self.handle_response(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let builder = self.request(Method::DELETE, path, &[], true).await?;
        let response = self.execute(builder).await?;
        self.handle_response::<Value>(response).await.map(|_| ())
    }
}

pub fn build_url(base_url: &str, path: &str, query: &QueryParams<'_>) -> String {
    let mut url = format!("{}{}", base_url, path);
    let pairs: Vec<String> = query
        .iter()
        .filter_map(|(key, value)| {
            let value = value.as_deref()?;
            if value.is_empty() {
                return None;
            }
            Some(format!(
                "{}={}",
                key,
                utf8_percent_encode(value, QUERY_VALUE)
            ))
        })
        .collect();
    if !pairs.is_empty() {
        url.push('?');
        url.push_str(&pairs.join("&"));
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_skips_missing_and_empty_values() {
        let url = build_url(
            "http://api.test",
            "/api/checkin/dashboard",
            &[
                ("date_filter", Some("2025-01-02".into())),
                ("class_filter", Some(String::new())),
                ("school_id", None),
            ],
        );
        assert_eq!(url, "http://api.test/api/checkin/dashboard?date_filter=2025-01-02");
    }

    #[test]
    fn build_url_encodes_values() {
        let url = build_url(
            "http://api.test",
            "/api/checkin/dashboard",
            &[("class_filter", Some("5º A".into()))],
        );
        assert_eq!(url, "http://api.test/api/checkin/dashboard?class_filter=5%C2%BA%20A");
    }

    #[test]
    fn build_url_without_query_is_plain_path() {
        assert_eq!(build_url("http://api.test", "/api/schools/", &[]), "http://api.test/api/schools/");
    }
}
