use std::{cell::RefCell, rc::Rc};

pub trait Navigator {
    fn current_path(&self) -> Option<String>;
    fn navigate(&self, path: &str);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn current_path(&self) -> Option<String> {
        web_sys::window()?.location().pathname().ok()
    }

    fn navigate(&self, path: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
}

/// Records navigations instead of performing them.
#[derive(Clone, Debug, Default)]
pub struct RecordingNavigator {
    path: Rc<RefCell<Option<String>>>,
    visits: Rc<RefCell<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn at(path: &str) -> Self {
        let navigator = Self::default();
        *navigator.path.borrow_mut() = Some(path.to_string());
        navigator
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> Option<String> {
        self.path.borrow().clone()
    }

    fn navigate(&self, path: &str) {
        *self.path.borrow_mut() = Some(path.to_string());
        self.visits.borrow_mut().push(path.to_string());
    }
}
