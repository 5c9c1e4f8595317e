//! Session Context
//!
//! Holds the identity of the logged-in user and hands it to every screen
//! that needs it. The context is created once at startup and passed
//! explicitly to its consumers; clones share the same state.
//!
//! Writes are last-write-wins: a later successful login simply replaces the
//! published user.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use crate::shared::credentials::AuthenticatedUser;

#[derive(Debug)]
struct SessionInner {
    current_user: watch::Sender<Option<AuthenticatedUser>>,
    logged_in: AtomicBool,
    logged_in_at: std::sync::RwLock<Option<DateTime<Utc>>>,
}

/// Shared holder of the authenticated identity.
#[derive(Debug, Clone)]
pub struct SessionContext {
    inner: Arc<SessionInner>,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionContext {
    /// An empty session: no user, not logged in.
    pub fn new() -> Self {
        let (current_user, _) = watch::channel(None);
        Self {
            inner: Arc::new(SessionInner {
                current_user,
                logged_in: AtomicBool::new(false),
                logged_in_at: std::sync::RwLock::new(None),
            }),
        }
    }

    /// Publish a new current user to all subscribers.
    pub fn publish(&self, user: AuthenticatedUser) {
        tracing::debug!(user_id = user.id, "publishing current user");
        self.inner.current_user.send_replace(Some(user));
    }

    pub fn current_user(&self) -> Option<AuthenticatedUser> {
        self.inner.current_user.borrow().clone()
    }

    /// Receiver that observes every change of the current user.
    pub fn subscribe(&self) -> watch::Receiver<Option<AuthenticatedUser>> {
        self.inner.current_user.subscribe()
    }

    pub fn mark_logged_in(&self) {
        self.inner.logged_in.store(true, Ordering::SeqCst);
        if let Ok(mut at) = self.inner.logged_in_at.write() {
            *at = Some(Utc::now());
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.inner.logged_in.load(Ordering::SeqCst)
    }

    /// When the current session was established, if logged in.
    pub fn logged_in_at(&self) -> Option<DateTime<Utc>> {
        self.inner.logged_in_at.read().ok().and_then(|at| *at)
    }

    /// Forget the current user.
    pub fn logout(&self) {
        self.inner.logged_in.store(false, Ordering::SeqCst);
        if let Ok(mut at) = self.inner.logged_in_at.write() {
            *at = None;
        }
        self.inner.current_user.send_replace(None);
        tracing::info!("session cleared");
    }
}
