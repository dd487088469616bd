use crate::provider::ProviderClient;
use crate::snapshot::{SessionSnapshot, SnapshotStore};
use crate::{AuthError, Result as AuthErrorResult};

use tl_core::{Identity, UserProfile, validate_email};
use tl_store::DocumentStore;

use log::{info, warn};
use reqwest::Client as ReqwestClient;

/// Fallback for a profile record that carries no role
const DEFAULT_ROLE: &str = "user";

/// The `(identity, token)` pair for an established session.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub identity: Identity,
    pub token: String,
}

/// Identity facade: register / login / restore / logout flows.
///
/// Every flow that establishes a session persists the snapshot; every flow
/// that tears one down clears it. The companion profile record in the
/// document store is an app-level invariant: a provider account without a
/// profile is treated as invalid.
pub struct IdentityService {
    provider: ProviderClient,
    store_base_url: String,
    snapshot: SnapshotStore,
    http: ReqwestClient,
}

impl IdentityService {
    pub fn new(provider: ProviderClient, store_base_url: &str, snapshot: SnapshotStore) -> Self {
        Self::with_client(provider, store_base_url, snapshot, ReqwestClient::new())
    }

    pub fn with_client(
        provider: ProviderClient,
        store_base_url: &str,
        snapshot: SnapshotStore,
        http: ReqwestClient,
    ) -> Self {
        Self {
            provider,
            store_base_url: store_base_url.to_string(),
            snapshot,
            http,
        }
    }

    /// Store facade bound to a fresh token
    fn store(&self, token: &str) -> DocumentStore {
        DocumentStore::with_client(&self.store_base_url, token, self.http.clone())
    }

    /// Create a provider account, then write the companion profile record.
    ///
    /// Not transactional: if the profile write fails, the provider account
    /// already exists with no profile (the login invariant then rejects it
    /// until the user re-registers).
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: &str,
    ) -> AuthErrorResult<AuthenticatedUser> {
        validate_email(email).map_err(|e| AuthError::registration(e.to_string()))?;
        if name.trim().is_empty() {
            return Err(AuthError::registration("Name cannot be empty"));
        }
        if password.trim().is_empty() {
            return Err(AuthError::registration("Password cannot be empty"));
        }

        let account = self.provider.signup(email, password).await.map_err(|e| {
            match e {
                AuthError::Provider { code, message, .. } => {
                    AuthError::registration(format!("{message} (code: {code})"))
                }
                other => other,
            }
        })?;

        let profile = UserProfile {
            uid: account.uid.clone(),
            email: email.to_string(),
            name: name.to_string(),
            role: role.to_string(),
        };
        self.store(&account.token)
            .put_user(&profile)
            .await
            .map_err(|e| AuthError::registration(e.to_string()))?;

        let identity = Identity {
            uid: account.uid,
            email: email.to_string(),
            role: Some(role.to_string()),
        };
        self.snapshot.save(&SessionSnapshot::new(
            account.token.clone(),
            Some(identity.clone()),
        ))?;

        info!("Registered {email}");
        Ok(AuthenticatedUser {
            identity,
            token: account.token,
        })
    }

    /// Authenticate, then require the companion profile to exist.
    /// A valid credential with no profile record establishes no session.
    pub async fn login(&self, email: &str, password: &str) -> AuthErrorResult<AuthenticatedUser> {
        let credential = self.provider.login(email, password).await?;

        let profile = self
            .store(&credential.token)
            .get_user(&credential.uid)
            .await
            .map_err(|e| AuthError::profile(e.to_string()))?
            .ok_or_else(AuthError::missing_profile)?;

        let role = if profile.role.is_empty() {
            DEFAULT_ROLE.to_string()
        } else {
            profile.role
        };
        let identity = Identity {
            uid: credential.uid,
            email: credential.email,
            role: Some(role),
        };

        self.snapshot.save(&SessionSnapshot::new(
            credential.token.clone(),
            Some(identity.clone()),
        ))?;

        info!("Logged in {email}");
        Ok(AuthenticatedUser {
            identity,
            token: credential.token,
        })
    }

    /// Restore the session persisted by a previous invocation.
    ///
    /// No snapshot means signed out, with no error and no network. With a
    /// snapshot, the provider is asked whether the token is still good; the
    /// cached identity is preferred over a fresh profile fetch.
    pub async fn restore_session(&self) -> AuthErrorResult<Option<AuthenticatedUser>> {
        let Some(snapshot) = self.snapshot.load()? else {
            return Ok(None);
        };

        let Some(principal) = self.provider.session(&snapshot.token).await? else {
            info!("Stored token no longer valid, clearing snapshot");
            self.snapshot.clear()?;
            return Ok(None);
        };

        let identity = match snapshot.identity {
            Some(identity) => identity,
            None => {
                // Older snapshot without a cached identity: fetch the profile
                let profile = self
                    .store(&snapshot.token)
                    .get_user(&principal.uid)
                    .await
                    .map_err(|e| AuthError::profile(e.to_string()))?;

                let Some(profile) = profile else {
                    warn!("Signed-in principal {} has no profile record", principal.uid);
                    self.snapshot.clear()?;
                    return Ok(None);
                };

                let identity = Identity {
                    uid: profile.uid,
                    email: profile.email,
                    role: Some(if profile.role.is_empty() {
                        DEFAULT_ROLE.to_string()
                    } else {
                        profile.role
                    }),
                };
                // Re-cache so the next start skips the fetch
                self.snapshot.save(&SessionSnapshot::new(
                    snapshot.token.clone(),
                    Some(identity.clone()),
                ))?;
                identity
            }
        };

        Ok(Some(AuthenticatedUser {
            identity,
            token: snapshot.token,
        }))
    }

    /// Sign out whatever session is persisted locally, if any.
    /// Returns whether a session was actually present.
    pub async fn logout_current(&self) -> AuthErrorResult<bool> {
        match self.snapshot.load()? {
            Some(snapshot) => {
                self.logout(&snapshot.token).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Invalidate the provider session and clear the local snapshot.
    /// A dead provider must not leave the client permanently signed in, so
    /// sign-out failure is logged and the snapshot is cleared anyway.
    pub async fn logout(&self, token: &str) -> AuthErrorResult<()> {
        if let Err(e) = self.provider.logout(token).await {
            warn!("Provider sign-out failed: {e}");
        }

        self.snapshot.clear()
    }
}
