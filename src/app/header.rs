use crate::domain::model::HeaderState;
use crate::domain::ports::{Navigator, SessionKey, SessionStore};

/// Header/navigation shell. Decides authenticated vs. anonymous rendering
/// from the session store and forwards route changes to the navigator.
pub struct Header<S: SessionStore, N: Navigator> {
    session: S,
    nav: N,
}

impl<S: SessionStore, N: Navigator> Header<S, N> {
    pub fn new(session: S, nav: N) -> Self {
        Self { session, nav }
    }

    pub fn state(&self) -> HeaderState {
        match self.session.get(SessionKey::Token) {
            Some(_) => HeaderState::Authenticated {
                username: self.session.get(SessionKey::Username).unwrap_or_default(),
            },
            None => HeaderState::Anonymous,
        }
    }

    pub fn home(&self) {
        self.nav.navigate_to("/");
    }

    pub fn sign_in(&self) {
        self.nav.navigate_to("/login");
    }

    pub fn register(&self) {
        self.nav.navigate_to("/register");
    }

    /// Clears the session, then lands on the home route.
    pub fn logout(&self) {
        self.session.clear();
        self.nav.navigate_to("/");
    }
}
