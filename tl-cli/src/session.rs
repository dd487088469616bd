use tl_core::Identity;
use tl_identity::AuthenticatedUser;

/// The current identity and bearer token, owned by one command invocation.
///
/// Constructed from a login/register/restore result and passed explicitly
/// into every screen call; torn down by process exit or `logout`. There is
/// no ambient global session.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub identity: Identity,
    pub token: String,
}

impl SessionState {
    /// The caller email every role derivation runs against
    pub fn email(&self) -> &str {
        &self.identity.email
    }
}

impl From<AuthenticatedUser> for SessionState {
    fn from(user: AuthenticatedUser) -> Self {
        Self {
            identity: user.identity,
            token: user.token,
        }
    }
}
