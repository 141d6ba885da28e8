//! Signed-in user gate.
//!
//! Credentials are owned by an external provider; this module only asks
//! whether somebody is signed in and picks the first screen accordingly.

use crate::viewmodel::Destination;

/// Identity reported by the authentication provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    pub uid: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
}

impl UserIdentity {
    /// Name to greet the user with
    pub fn greeting_name(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or(&self.uid)
    }
}

/// Source of the signed-in user, if any
pub trait AuthProvider {
    fn current_user(&self) -> Option<UserIdentity>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Authenticated(UserIdentity),
    Unauthenticated,
}

impl AuthState {
    pub fn from_provider(provider: &impl AuthProvider) -> Self {
        provider
            .current_user()
            .map_or(Self::Unauthenticated, Self::Authenticated)
    }

    /// Screen to open on launch
    pub const fn start_destination(&self) -> Destination {
        match self {
            Self::Authenticated(_) => Destination::ReminderList,
            Self::Unauthenticated => Destination::Authentication,
        }
    }
}
