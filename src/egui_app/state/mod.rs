use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

use tokio::runtime::Builder;

use crate::egui_app::auth::{AuthClient, HttpAuthClient};
use crate::egui_app::login::LoginController;
use crate::egui_app::router::{AppRouter, NavigationOptions, Navigator, Route};
use crate::egui_app::session::SessionContext;
use crate::egui_app::Config;
use crate::shared::credentials::{Credentials, UserId};
use crate::shared::error::AuthError;

/// Result of one worker-thread login, tagged with the generation it was started in.
struct AuthOutcome {
    generation: u64,
    credentials: Credentials,
    result: Result<UserId, AuthError>,
}

/// Shown on the login screen after an explicit logout.
pub const LOGGED_OUT_MESSAGE: &str = "Sie wurden abgemeldet.";

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    pub session: SessionContext,
    pub router: Arc<AppRouter>,
    pub login: LoginController,
    auth_tx: Sender<AuthOutcome>,
    auth_rx: Receiver<AuthOutcome>,
    in_flight: usize,
    generation: u64,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let client = HttpAuthClient::new(&config)?;
        Ok(Self::with_client(config, Arc::new(client)))
    }

    /// State wired to an arbitrary auth client.
    pub fn with_client(config: Config, client: Arc<dyn AuthClient>) -> Self {
        let session = SessionContext::new();
        let router = Arc::new(AppRouter::new());
        let login = LoginController::new(client, session.clone(), router.clone());
        let (auth_tx, auth_rx) = channel();
        tracing::info!(server = config.server_url(), "app state initialized");

        Self {
            config,
            session,
            router,
            login,
            auth_tx,
            auth_rx,
            in_flight: 0,
            generation: 0,
        }
    }

    pub fn current_route(&self) -> Route {
        self.router.current()
    }

    /// Number of login requests still waiting for a response
    pub fn pending_logins(&self) -> usize {
        self.in_flight
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight > 0
    }

    /// Start a login request on a worker thread if the form is valid.
    ///
    /// Every press issues its own request; results are applied in the order
    /// they arrive.
    pub fn handle_login(&mut self) {
        let Some(credentials) = self.login.begin_submit() else {
            return;
        };

        if self.in_flight > 0 {
            tracing::warn!(pending = self.in_flight, "overlapping login submission");
        }
        self.in_flight += 1;

        let client = self.login.auth_client();
        let tx = self.auth_tx.clone();
        let generation = self.generation;
        std::thread::spawn(move || {
            let result = match Builder::new_current_thread().enable_all().build() {
                Ok(rt) => rt.block_on(client.login(&credentials)),
                Err(e) => Err(AuthError::unreachable(format!("failed to create runtime: {}", e))),
            };
            let _ = tx.send(AuthOutcome { generation, credentials, result });
        });
    }

    /// Apply every finished login request. Called once per frame.
    ///
    /// Requests started before the last logout are discarded.
    pub fn poll_auth_results(&mut self) {
        while let Ok(outcome) = self.auth_rx.try_recv() {
            if outcome.generation != self.generation {
                tracing::info!(
                    generation = outcome.generation,
                    "discarding login result from before logout"
                );
                continue;
            }
            self.in_flight = self.in_flight.saturating_sub(1);
            self.login.complete(outcome.credentials, outcome.result);
        }
    }

    /// Navigate back to the login screen from a secondary view.
    pub fn show_login(&mut self) {
        self.router
            .navigate(Route::Login, NavigationOptions::skip_location_change());
    }

    /// End the session. Login requests still pending are abandoned.
    pub fn logout(&mut self) {
        self.generation += 1;
        self.in_flight = 0;
        self.session.logout();
        self.login.reset();
        self.login.set_response_message(LOGGED_OUT_MESSAGE);
        self.show_login();
    }
}
