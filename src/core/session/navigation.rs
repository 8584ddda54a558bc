//! Navigation effect of ending a session
//!
//! Session transitions only *describe* the redirect. Whoever owns the
//! environment (the browser adapter, a test) carries it out.

/// Route of the login screen
pub const LOGIN_PATH: &str = "/login";

/// Route shown after a successful login
pub const HOME_PATH: &str = "/dashboard";

/// Performs a navigation
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// The session has ended and the login screen must replace the current page
#[must_use = "the login screen has to be shown once the session ends"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginRedirect;

impl LoginRedirect {
    pub fn path(self) -> &'static str {
        LOGIN_PATH
    }

    pub fn follow<N: Navigator + ?Sized>(self, navigator: &N) {
        navigator.navigate(self.path());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<String>>);

    impl Navigator for Recorder {
        fn navigate(&self, path: &str) {
            self.0.borrow_mut().push(path.to_string());
        }
    }

    #[test]
    fn test_redirect_follows_to_login() {
        let recorder = Recorder::default();
        LoginRedirect.follow(&recorder);
        assert_eq!(recorder.0.borrow().as_slice(), ["/login"]);
    }
}
