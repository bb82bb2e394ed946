//! Viewer identity capability
//!
//! The auth collaborator owns sign-in; the resolver only asks who is
//! looking right now.

use lore_model::Viewer;
use parking_lot::RwLock;

/// Source of the current viewer
pub trait IdentityProvider: Send + Sync {
    /// Signed-in viewer, if any
    fn current_user(&self) -> Option<Viewer>;

    /// Check if the current viewer holds the admin role
    fn is_admin(&self) -> bool {
        self.current_user().is_some_and(|viewer| viewer.is_admin)
    }
}

/// Fixed identity
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity(Option<Viewer>);

impl StaticIdentity {
    /// Identity for the given viewer (or nobody)
    #[inline]
    #[must_use]
    pub fn new(viewer: Option<Viewer>) -> Self {
        Self(viewer)
    }

    /// Nobody signed in
    #[inline]
    #[must_use]
    pub fn anonymous() -> Self {
        Self(None)
    }
}

impl IdentityProvider for StaticIdentity {
    fn current_user(&self) -> Option<Viewer> {
        self.0.clone()
    }
}

/// Identity updated by the auth collaborator at runtime
#[derive(Debug, Default)]
pub struct SharedIdentity {
    current: RwLock<Option<Viewer>>,
}

impl SharedIdentity {
    /// Start signed out
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a sign-in
    pub fn sign_in(&self, viewer: Viewer) {
        tracing::debug!(admin = viewer.is_admin, "viewer signed in");
        *self.current.write() = Some(viewer);
    }

    /// Record a sign-out
    pub fn sign_out(&self) {
        tracing::debug!("viewer signed out");
        *self.current.write() = None;
    }
}

impl IdentityProvider for SharedIdentity {
    fn current_user(&self) -> Option<Viewer> {
        self.current.read().clone()
    }
}
