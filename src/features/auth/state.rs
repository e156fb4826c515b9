//! Auth session state shared by the page controller. The session is an enum so
//! a teacher identity can only exist together with the token that proved it.
//! Only the token and non-sensitive teacher metadata are held in memory.

use super::types::Teacher;
use parking_lot::RwLock;
use secrecy::SecretString;
use std::{fmt, sync::Arc};

#[derive(Clone, Default)]
pub enum Session {
    #[default]
    Anonymous,
    Teacher {
        token: SecretString,
        teacher: Teacher,
    },
}

impl Session {
    #[must_use]
    pub const fn teacher(&self) -> Option<&Teacher> {
        match self {
            Session::Anonymous => None,
            Session::Teacher { teacher, .. } => Some(teacher),
        }
    }

    #[must_use]
    pub const fn token(&self) -> Option<&SecretString> {
        match self {
            Session::Anonymous => None,
            Session::Teacher { token, .. } => Some(token),
        }
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Session::Teacher { .. })
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Session::Anonymous => f.write_str("Anonymous"),
            Session::Teacher { teacher, .. } => f
                .debug_struct("Teacher")
                .field("token", &"***")
                .field("teacher", teacher)
                .finish(),
        }
    }
}

/// Session context handed to every operation that reads or changes auth state.
#[derive(Clone, Debug, Default)]
pub struct AuthContext {
    session: Arc<RwLock<Session>>,
}

impl AuthContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the in-memory session after login or token validation.
    pub fn set_session(&self, token: SecretString, teacher: Teacher) {
        *self.session.write() = Session::Teacher { token, teacher };
    }

    /// Clears the in-memory session, typically on logout.
    pub fn clear_session(&self) {
        *self.session.write() = Session::Anonymous;
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    #[must_use]
    pub fn teacher(&self) -> Option<Teacher> {
        self.session.read().teacher().cloned()
    }

    #[must_use]
    pub fn bearer_token(&self) -> Option<SecretString> {
        self.session.read().token().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn teacher() -> Teacher {
        Teacher {
            email: "hughes@mergington.edu".to_string(),
            name: "Ms. Hughes".to_string(),
            role: Some("teacher".to_string()),
        }
    }

    #[test]
    fn starts_anonymous() {
        let auth = AuthContext::new();
        assert!(!auth.is_authenticated());
        assert!(auth.teacher().is_none());
        assert!(auth.bearer_token().is_none());
    }

    #[test]
    fn teacher_and_token_move_together() {
        let auth = AuthContext::new();
        auth.set_session(SecretString::from("abc".to_string()), teacher());

        assert!(auth.is_authenticated());
        assert_eq!(auth.teacher(), Some(teacher()));
        assert_eq!(
            auth.bearer_token().map(|t| t.expose_secret().to_string()),
            Some("abc".to_string())
        );

        auth.clear_session();
        assert!(auth.teacher().is_none());
        assert!(auth.bearer_token().is_none());
    }

    #[test]
    fn clones_share_state() {
        let auth = AuthContext::new();
        let other = auth.clone();
        auth.set_session(SecretString::from("abc".to_string()), teacher());
        assert!(other.is_authenticated());
    }

    #[test]
    fn debug_redacts_token() {
        let session = Session::Teacher {
            token: SecretString::from("super-secret".to_string()),
            teacher: teacher(),
        };
        let rendered = format!("{session:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("Ms. Hughes"));
    }
}
