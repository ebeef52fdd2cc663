//! Route-guard decisions: session snapshot -> allow or redirect.
//!
//! DESIGN
//! ======
//! Decisions are synchronous reads of ambient state with no network
//! re-validation; a stale ALLOW is acceptable because the next navigation
//! re-evaluates. The two guards are intentionally asymmetric:
//!
//! - the private guard never mutates the store and preserves the attempted
//!   location so sign-in can return the visitor;
//! - the admin guard purges both credential namespaces when the admin
//!   profile is unreadable (a corrupt session is not merely unauthenticated,
//!   so the attempted location is not preserved), and sends a legitimately
//!   authenticated non-admin back home rather than to sign-in.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::session::{Scope, SessionState, read_session};
use crate::util::storage::{CredentialStore, TOKEN_KEY, clear_credentials};

/// Result of evaluating a guard at render time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render the protected subtree.
    Allow,
    /// Not signed in: replace-navigate to the sign-in page.
    RedirectSignin {
        /// Whether the attempted location should ride along so sign-in can
        /// return to it.
        preserve_location: bool,
    },
    /// Signed in but unauthorized: replace-navigate to the home route.
    RedirectHome,
    /// Corrupt admin session: clear both credential namespaces, then
    /// replace-navigate to sign-in without preserving the location.
    PurgeAndRedirectSignin,
}

/// Gate for any-authenticated-user routes. Pure: never mutates the store.
pub fn evaluate_private(store: &dyn CredentialStore) -> GuardOutcome {
    let has_token = store.get(TOKEN_KEY).is_some_and(|token| !token.is_empty());
    if has_token {
        GuardOutcome::Allow
    } else {
        GuardOutcome::RedirectSignin { preserve_location: true }
    }
}

/// Gate for admin routes. Pure decision; the caller applies the purge for
/// [`GuardOutcome::PurgeAndRedirectSignin`] via [`purge_credentials`].
pub fn evaluate_admin(store: &dyn CredentialStore) -> GuardOutcome {
    match read_session(store, Scope::Admin) {
        SessionState::Anonymous => GuardOutcome::RedirectSignin { preserve_location: true },
        SessionState::Corrupt => GuardOutcome::PurgeAndRedirectSignin,
        SessionState::Active(snapshot) => {
            if snapshot.is_admin() {
                GuardOutcome::Allow
            } else {
                GuardOutcome::RedirectHome
            }
        }
    }
}

/// Recovery step for a corrupt admin session: drop every credential key so
/// the ambiguous identity cannot be trusted by any surface afterwards.
pub fn purge_credentials(store: &dyn CredentialStore) {
    #[cfg(feature = "csr")]
    log::warn!("purging unreadable credential record before redirecting to sign-in");
    clear_credentials(store);
}

/// Evaluate the admin guard and apply its side effect in one step.
pub fn enforce_admin(store: &dyn CredentialStore) -> GuardOutcome {
    let outcome = evaluate_admin(store);
    if outcome == GuardOutcome::PurgeAndRedirectSignin {
        purge_credentials(store);
    }
    outcome
}

/// Sign-in route for a guard denial, carrying the attempted location when
/// the outcome asked for it and the attempt was a real page.
pub fn signin_redirect_target(preserve_location: bool, attempted: &str) -> String {
    if preserve_location && !attempted.is_empty() && attempted != "/" && attempted != "/signin" {
        format!("/signin?redirect={attempted}")
    } else {
        "/signin".to_owned()
    }
}
