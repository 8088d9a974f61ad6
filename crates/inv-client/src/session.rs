//! Caller-supplied authentication state.

use std::fmt;

use crate::error::{ClientError, Result};

/// Authentication state handed to the client.
///
/// There is no built-in credential. A client holding an anonymous session
/// refuses every request with [`ClientError::Unauthenticated`].
#[derive(Clone, PartialEq, Eq, Default)]
pub enum Session {
    /// No token is available.
    #[default]
    Anonymous,
    /// Bearer token plus the user recorded as `updated_by` on writes.
    Authenticated { token: String, user: String },
}

impl Session {
    pub fn authenticated(token: impl Into<String>, user: impl Into<String>) -> Self {
        Self::Authenticated {
            token: token.into(),
            user: user.into(),
        }
    }

    /// Builds a session from an optional token; a missing or blank token
    /// yields [`Session::Anonymous`].
    pub fn from_token(token: Option<String>, user: impl Into<String>) -> Self {
        match token {
            Some(token) if !token.trim().is_empty() => {
                Self::authenticated(token.trim().to_string(), user)
            }
            _ => Self::Anonymous,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    pub fn user(&self) -> Option<&str> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated { user, .. } => Some(user.as_str()),
        }
    }

    pub(crate) fn token(&self) -> Result<&str> {
        match self {
            Self::Anonymous => Err(ClientError::Unauthenticated),
            Self::Authenticated { token, .. } => Ok(token.as_str()),
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Anonymous => f.write_str("Anonymous"),
            Self::Authenticated { user, .. } => f
                .debug_struct("Authenticated")
                .field("token", &"[REDACTED]")
                .field("user", user)
                .finish(),
        }
    }
}
