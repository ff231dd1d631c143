use crate::api::ApiError;

/// Outcome of the last form or list operation; at most one side is set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<ApiError>,
}

impl MessageState {
    pub fn set_success(&mut self, msg: impl Into<String>) {
        self.success = Some(msg.into());
        self.error = None;
    }

    pub fn set_error(&mut self, msg: ApiError) {
        self.error = Some(msg);
        self.success = None;
    }

    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_state_keeps_one_outcome() {
        let mut state = MessageState::default();
        state.set_error(ApiError::unknown("x"));
        state.set_success("ok");
        assert!(state.error.is_none());
        state.set_error(ApiError::unknown("y"));
        assert!(state.success.is_none());
        state.clear();
        assert_eq!(state, MessageState::default());
    }
}
