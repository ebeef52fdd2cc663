//! Session reader: credential store -> typed session snapshot.
//!
//! SYSTEM CONTEXT
//! ==============
//! Multiple UI surfaces (navbar, admin shell, route guards) independently
//! decide whether a visitor is signed in and what role they hold. They all
//! go through this reader so the rules live in one place.
//!
//! Two credential namespaces coexist: the general pair (`token`/`user`) and
//! the admin pair (`adminToken`/`adminUser`). The admin scope accepts either
//! as proof of session, preferring the admin pair, so a shopper session and
//! an admin session can live side by side without collision.
//!
//! Role truth is the profile's explicit `role == "admin"` field. A token
//! with a missing or unreadable role is never treated as admin.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::AuthUser;
use crate::util::storage::{
    ADMIN_TOKEN_KEY, ADMIN_USER_KEY, CredentialStore, TOKEN_KEY, USER_KEY,
};

/// Which credential namespace a surface trusts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    /// Shopper-facing surfaces: `token` / `user` only.
    General,
    /// Admin surfaces: prefer `adminToken` / `adminUser`, fall back to the
    /// general pair.
    Admin,
}

/// Advisory role derived from the persisted profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
}

/// Ephemeral, derived view of the credential record. Never persisted and
/// never cached beyond a single render cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// True iff a non-empty token is present. Role and profile are advisory
    /// and may legitimately be stale relative to the server.
    pub authenticated: bool,
    pub role: Option<Role>,
    pub profile: Option<AuthUser>,
}

impl SessionSnapshot {
    /// The logged-out snapshot.
    pub fn anonymous() -> Self {
        Self { authenticated: false, role: None, profile: None }
    }

    pub fn is_admin(&self) -> bool {
        self.authenticated && self.role == Some(Role::Admin)
    }

    /// Best display name for the session: profile name, then email, then a
    /// generic label when the profile is missing or unnamed.
    pub fn display_name(&self) -> String {
        match &self.profile {
            Some(user) if !user.name.is_empty() => user.name.clone(),
            Some(user) if !user.email.is_empty() => user.email.clone(),
            _ => "Account".to_owned(),
        }
    }

    /// Fold an in-place profile update into this snapshot. Ignored when the
    /// session is no longer authenticated (the update raced a logout).
    pub fn with_profile_update(&self, user: &AuthUser) -> SessionSnapshot {
        if !self.authenticated {
            return self.clone();
        }
        SessionSnapshot {
            authenticated: true,
            role: Some(role_of(user)),
            profile: Some(user.clone()),
        }
    }
}

/// How a mounted session-aware surface reacts to one notifier event:
/// a profile update is applied directly from the payload (no redundant store
/// read); anything else re-derives the snapshot from the store.
pub fn snapshot_after_event(
    store: &dyn CredentialStore,
    scope: Scope,
    current: &SessionSnapshot,
    event: &crate::util::events::SessionEvent,
) -> SessionSnapshot {
    use crate::util::events::SessionEvent;
    match event {
        SessionEvent::ProfileUpdated { user } => current.with_profile_update(user),
        SessionEvent::ExternalChange { .. } | SessionEvent::Logout => {
            read_session(store, scope).snapshot()
        }
    }
}

/// Outcome of reading one scope of the credential store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// No token in any namespace this scope trusts.
    Anonymous,
    /// A token is present; profile/role are whatever could be derived.
    Active(SessionSnapshot),
    /// Admin scope only: a token is present but the paired profile is
    /// unparseable. Admin identity must never be ambiguous, so this is a
    /// hard failure the caller must recover from (purge + redirect), not a
    /// silent drop to anonymous.
    Corrupt,
}

impl SessionState {
    /// Collapse to a displayable snapshot. `Corrupt` maps to anonymous for
    /// rendering purposes; guards handle the recovery separately.
    pub fn snapshot(&self) -> SessionSnapshot {
        match self {
            SessionState::Active(snapshot) => snapshot.clone(),
            SessionState::Anonymous | SessionState::Corrupt => SessionSnapshot::anonymous(),
        }
    }
}

/// Read `key` as a token, treating an empty string the same as absent.
fn read_token(store: &dyn CredentialStore, key: &str) -> Option<String> {
    store.get(key).filter(|token| !token.is_empty())
}

fn role_of(user: &AuthUser) -> Role {
    if user.is_admin() { Role::Admin } else { Role::User }
}

/// Derive the session state for `scope` from the ambient store.
pub fn read_session(store: &dyn CredentialStore, scope: Scope) -> SessionState {
    let pair = match scope {
        Scope::General => read_token(store, TOKEN_KEY).map(|t| (t, USER_KEY)),
        Scope::Admin => read_token(store, ADMIN_TOKEN_KEY)
            .map(|t| (t, ADMIN_USER_KEY))
            .or_else(|| read_token(store, TOKEN_KEY).map(|t| (t, USER_KEY))),
    };
    let Some((_token, profile_key)) = pair else {
        return SessionState::Anonymous;
    };

    let raw_profile = store.get(profile_key);
    let parsed = raw_profile
        .as_deref()
        .map(|raw| serde_json::from_str::<AuthUser>(raw));

    match (scope, parsed) {
        // Authenticated with a readable profile.
        (_, Some(Ok(user))) => SessionState::Active(SessionSnapshot {
            authenticated: true,
            role: Some(role_of(&user)),
            profile: Some(user),
        }),
        // General surfaces tolerate a missing or corrupted profile: the
        // visitor stays signed in, just without identity details.
        (Scope::General, None | Some(Err(_))) => SessionState::Active(SessionSnapshot {
            authenticated: true,
            role: None,
            profile: None,
        }),
        // Admin surfaces must not guess who the admin is.
        (Scope::Admin, None | Some(Err(_))) => SessionState::Corrupt,
    }
}
