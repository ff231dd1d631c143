use std::rc::Rc;

use crate::{
    api::ApiError,
    utils::{
        navigation::{BrowserNavigator, Navigator},
        storage::{BrowserStorage, KeyValueStore},
    },
};

pub const TOKEN_KEY: &str = "arrivapp_token";
pub const USER_KEY: &str = "arrivapp_user";
pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Bearer token persisted in client storage, plus the way back to the login page.
#[derive(Clone)]
pub struct Session {
    storage: Rc<dyn KeyValueStore>,
    navigator: Rc<dyn Navigator>,
}

impl Session {
    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserStorage), Rc::new(BrowserNavigator))
    }

    pub fn new(storage: Rc<dyn KeyValueStore>, navigator: Rc<dyn Navigator>) -> Self {
        Self { storage, navigator }
    }

    pub fn token(&self) -> Option<String> {
        self.storage
            .get_item(TOKEN_KEY)
            .filter(|token| !token.is_empty())
    }

    pub fn is_active(&self) -> bool {
        self.token().is_some()
    }

    pub fn stored_user_name(&self) -> Option<String> {
        self.storage.get_item(USER_KEY)
    }

    pub fn store(&self, token: &str, user_name: &str) -> Result<(), ApiError> {
        self.storage
            .set_item(TOKEN_KEY, token)
            .map_err(ApiError::storage)?;
        self.storage
            .set_item(USER_KEY, user_name)
            .map_err(ApiError::storage)
    }

    pub fn clear(&self) {
        self.storage.remove_item(TOKEN_KEY);
        self.storage.remove_item(USER_KEY);
    }

    pub fn navigate(&self, path: &str) {
        self.navigator.navigate(path);
    }

    pub fn redirect_to_login(&self) {
        if self.navigator.current_path().as_deref() == Some(LOGIN_PATH) {
            return;
        }
        self.navigator.navigate(LOGIN_PATH);
    }

    /// Drops the session and sends the browser to the login page.
    pub fn force_logout(&self) {
        log::warn!("Session rejected by the server, signing out");
        self.clear();
        self.redirect_to_login();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{navigation::RecordingNavigator, storage::MemoryStorage};

    fn session_at(path: &str) -> (Session, MemoryStorage, RecordingNavigator) {
        let storage = MemoryStorage::default();
        let navigator = RecordingNavigator::at(path);
        let session = Session::new(Rc::new(storage.clone()), Rc::new(navigator.clone()));
        (session, storage, navigator)
    }

    #[test]
    fn store_then_clear_removes_token_and_user() {
        let (session, storage, _) = session_at(DASHBOARD_PATH);
        session.store("tok", "director").unwrap();
        assert!(session.is_active());
        assert_eq!(session.stored_user_name().as_deref(), Some("director"));

        session.clear();
        assert!(!session.is_active());
        assert!(storage.is_empty());
    }

    #[test]
    fn empty_token_is_not_a_session() {
        let (session, storage, _) = session_at(DASHBOARD_PATH);
        storage.set_item(TOKEN_KEY, "").unwrap();
        assert!(!session.is_active());
    }

    #[test]
    fn force_logout_redirects_to_login() {
        let (session, storage, navigator) = session_at(DASHBOARD_PATH);
        session.store("tok", "director").unwrap();
        session.force_logout();
        assert!(storage.is_empty());
        assert_eq!(navigator.visits(), vec![LOGIN_PATH.to_string()]);
    }

    #[test]
    fn force_logout_on_login_page_does_not_navigate() {
        let (session, _, navigator) = session_at(LOGIN_PATH);
        session.force_logout();
        assert!(navigator.visits().is_empty());
    }
}
