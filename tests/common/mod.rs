//! Common test utilities
//!
//! Scripted collaborators for driving the login controller without a
//! network or a UI.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use secrecy::ExposeSecret;
use onboarding::egui_app::{
    AuthClient, LoginController, NavigationOptions, Navigator, Route, SessionContext,
};
use onboarding::shared::{AuthError, Credentials, UserId};

/// Auth client that answers every call with the same result.
pub struct MockAuthClient {
    result: Result<UserId, AuthError>,
    calls: AtomicUsize,
    seen: Mutex<Vec<(String, String)>>,
}

impl MockAuthClient {
    pub fn succeeding(id: UserId) -> Arc<Self> {
        Self::with_result(Ok(id))
    }

    pub fn failing(error: AuthError) -> Arc<Self> {
        Self::with_result(Err(error))
    }

    pub fn with_result(result: Result<UserId, AuthError>) -> Arc<Self> {
        Arc::new(Self {
            result,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Login and password of every request, in call order.
    pub fn seen(&self) -> Vec<(String, String)> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuthClient for MockAuthClient {
    async fn login(&self, credentials: &Credentials) -> Result<UserId, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push((
            credentials.login.clone(),
            credentials.password.expose_secret().to_string(),
        ));
        self.result.clone()
    }
}

/// Navigator that records every navigation request.
#[derive(Default)]
pub struct RecordingNavigator {
    calls: Mutex<Vec<(Route, NavigationOptions)>>,
}

impl RecordingNavigator {
    pub fn calls(&self) -> Vec<(Route, NavigationOptions)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, route: Route) -> usize {
        self.calls().iter().filter(|(r, _)| *r == route).count()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route, options: NavigationOptions) {
        self.calls.lock().unwrap().push((route, options));
    }
}

pub struct Harness {
    pub controller: LoginController,
    pub client: Arc<MockAuthClient>,
    pub navigator: Arc<RecordingNavigator>,
    pub session: SessionContext,
}

pub fn harness(client: Arc<MockAuthClient>) -> Harness {
    let navigator = Arc::new(RecordingNavigator::default());
    let session = SessionContext::new();
    let controller = LoginController::new(client.clone(), session.clone(), navigator.clone());
    Harness { controller, client, navigator, session }
}

/// Harness with a form that passes validation.
pub fn filled_harness(client: Arc<MockAuthClient>) -> Harness {
    let mut harness = harness(client);
    harness.controller.set_login("Max Mustermann");
    harness.controller.set_password("geheim123");
    harness
}
