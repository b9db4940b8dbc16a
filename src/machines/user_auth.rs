//! User session: log in, log out, nothing twice in a row.

use crate::core::{StateHistory, StateMachine, Transitions};
use crate::machines::respond;

/// Replies to successful session operations.
pub const LOGIN_SUCCESSFUL: &str = "Login successful.";
pub const LOGOUT_SUCCESSFUL: &str = "Logout successful.";

crate::state_enum! {
    /// Session state of a [`UserAuthentication`].
    pub enum SessionState {
        LoggedOut => "Logged Out",
        LoggedIn => "Logged In",
    }
}

crate::label_enum! {
    /// Operations on a session.
    pub enum SessionEvent {
        Login => "login",
        Logout => "logout",
    }
}

impl Transitions for SessionState {
    type Event = SessionEvent;

    fn on(&self, event: SessionEvent) -> Option<Self> {
        match (self, event) {
            (Self::LoggedOut, SessionEvent::Login) => Some(Self::LoggedIn),
            (Self::LoggedIn, SessionEvent::Logout) => Some(Self::LoggedOut),
            _ => None,
        }
    }
}

/// Tracks whether a single user is logged in.
#[derive(Clone, Debug)]
pub struct UserAuthentication {
    machine: StateMachine<SessionState>,
}

impl UserAuthentication {
    /// A logged-out session.
    pub fn new() -> Self {
        Self {
            machine: StateMachine::new("user_authentication", SessionState::LoggedOut),
        }
    }

    /// Current session state.
    pub fn state(&self) -> SessionState {
        *self.machine.current_state()
    }

    /// Log in. Rejected when already logged in.
    pub fn login(&mut self) -> &'static str {
        respond(&mut self.machine, SessionEvent::Login, LOGIN_SUCCESSFUL)
    }

    /// Log out. Rejected when already logged out.
    pub fn logout(&mut self) -> &'static str {
        respond(&mut self.machine, SessionEvent::Logout, LOGOUT_SUCCESSFUL)
    }

    /// Every accepted login and logout, oldest first.
    pub fn history(&self) -> &StateHistory<SessionState> {
        self.machine.history()
    }
}

impl Default for UserAuthentication {
    fn default() -> Self {
        Self::new()
    }
}
