//! Login Controller
//!
//! Drives the login form: validates the two fields, exchanges the
//! credentials through an [`AuthClient`], publishes the identity to the
//! [`SessionContext`] and navigates on.
//!
//! # Lifecycle
//!
//! ```text
//! Idle --submit--> Submitting --ok--> Success
//!                             \--err--> Failed
//! Success | Failed --field edit--> Idle
//! ```
//!
//! A submission is split into [`LoginController::begin_submit`] and
//! [`LoginController::complete`] so the egui app can run the request on a
//! worker thread; [`LoginController::submit`] chains both for async callers.
//! Failures never leave the controller: they end up in
//! [`LoginController::error`].

use std::sync::Arc;

use secrecy::{ExposeSecret, ExposeSecretMut, SecretBox};

use crate::egui_app::auth::AuthClient;
use crate::egui_app::router::{NavigationOptions, Navigator, Route};
use crate::egui_app::session::SessionContext;
use crate::shared::credentials::{Credentials, UserId};
use crate::shared::error::AuthError;
use crate::shared::validation::{self, Field, Violation};

/// Where the controller is in a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed,
}

/// Raw field values plus whether the user has interacted with each field.
///
/// The password stays a growable `String` so the text widget can edit it in
/// place, but only behind a zeroizing secret.
#[derive(Debug)]
pub struct LoginForm {
    pub login: String,
    pub password: SecretBox<String>,
    pub login_touched: bool,
    pub password_touched: bool,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            login: String::new(),
            password: empty_secret(),
            login_touched: false,
            password_touched: false,
        }
    }
}

fn empty_secret() -> SecretBox<String> {
    SecretBox::new(Box::default())
}

impl LoginForm {
    pub fn violations(&self) -> Vec<Violation> {
        validation::validate(&self.login, self.password.expose_secret())
    }

    pub fn has_password(&self) -> bool {
        !self.password.expose_secret().is_empty()
    }

    pub fn is_valid(&self) -> bool {
        self.violations().is_empty()
    }

    /// Violations for one field, empty until that field was touched.
    pub fn visible_violations(&self, field: Field) -> Vec<Violation> {
        let touched = match field {
            Field::Login => self.login_touched,
            Field::Password => self.password_touched,
        };
        if !touched {
            return Vec::new();
        }
        self.violations().into_iter().filter(|v| v.field == field).collect()
    }
}

pub struct LoginController {
    form: LoginForm,
    state: SubmitState,
    error: Option<String>,
    response_message: Option<String>,
    auth: Arc<dyn AuthClient>,
    session: SessionContext,
    navigator: Arc<dyn Navigator>,
}

impl LoginController {
    pub fn new(
        auth: Arc<dyn AuthClient>,
        session: SessionContext,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            form: LoginForm::default(),
            state: SubmitState::Idle,
            error: None,
            response_message: None,
            auth,
            session,
            navigator,
        }
    }

    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// Message shown above the form after a failed login.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn response_message(&self) -> Option<&str> {
        self.response_message.as_deref()
    }

    /// Informational text shown above the form, such as the logout notice.
    pub fn set_response_message(&mut self, message: impl Into<String>) {
        self.response_message = Some(message.into());
    }

    pub fn auth_client(&self) -> Arc<dyn AuthClient> {
        Arc::clone(&self.auth)
    }

    pub fn set_login(&mut self, login: impl Into<String>) {
        self.form.login = login.into();
        self.touch(Field::Login);
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.form.password = SecretBox::new(Box::new(password.into()));
        self.touch(Field::Password);
    }

    /// Binding for the login text widget; callers report edits via [`Self::touch`].
    pub fn login_mut(&mut self) -> &mut String {
        &mut self.form.login
    }

    /// Binding for the password text widget.
    pub fn password_mut(&mut self) -> &mut String {
        self.form.password.expose_secret_mut()
    }

    /// Record an interaction with `field`; a finished submission returns to idle.
    pub fn touch(&mut self, field: Field) {
        match field {
            Field::Login => self.form.login_touched = true,
            Field::Password => self.form.password_touched = true,
        }
        if matches!(self.state, SubmitState::Success | SubmitState::Failed) {
            self.state = SubmitState::Idle;
        }
    }

    /// Validate and build the credentials for a new request.
    ///
    /// Returns `None` without side effects beyond marking both fields touched
    /// when the form is invalid.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        self.form.login_touched = true;
        self.form.password_touched = true;

        let violations = self.form.violations();
        if !violations.is_empty() {
            tracing::debug!(count = violations.len(), "login form invalid, submission blocked");
            return None;
        }

        if self.state == SubmitState::Submitting {
            tracing::warn!("login submitted again while a request is still pending");
        }
        self.state = SubmitState::Submitting;
        Some(Credentials::new(
            self.form.login.clone(),
            self.form.password.expose_secret(),
        ))
    }

    /// Apply the outcome of a request started by [`Self::begin_submit`].
    pub fn complete(&mut self, credentials: Credentials, result: Result<UserId, AuthError>) {
        match result {
            Ok(id) => {
                self.error = None;
                let user = credentials.into_authenticated(id);
                self.form.password = empty_secret();
                tracing::info!(user_id = user.id, login = %user.login, "login successful");

                self.session.publish(user);
                self.session.mark_logged_in();
                self.state = SubmitState::Success;
                self.navigator
                    .navigate(Route::Main, NavigationOptions::skip_location_change());
            }
            Err(err) => {
                drop(credentials);
                self.response_message = None;
                tracing::warn!(status = err.status(), error = %err, "login failed");
                self.error = Some(err.user_message());
                self.state = SubmitState::Failed;
            }
        }
    }

    /// Validate, call the auth client once, and apply the result.
    pub async fn submit(&mut self) {
        let Some(credentials) = self.begin_submit() else {
            return;
        };
        let auth = self.auth_client();
        let result = auth.login(&credentials).await;
        self.complete(credentials, result);
    }

    pub fn register(&self) {
        self.navigator
            .navigate(Route::Register, NavigationOptions::skip_location_change());
    }

    pub fn reset_password(&self) {
        self.navigator
            .navigate(Route::ResetPassword, NavigationOptions::skip_location_change());
    }

    /// Fresh form for the next visit to the login screen.
    pub fn reset(&mut self) {
        self.form = LoginForm::default();
        self.state = SubmitState::Idle;
        self.error = None;
        self.response_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::egui_app::router::AppRouter;
    use async_trait::async_trait;

    struct Unused;

    #[async_trait]
    impl AuthClient for Unused {
        async fn login(&self, _: &Credentials) -> Result<UserId, AuthError> {
            panic!("auth client must not be called");
        }
    }

    fn controller() -> (LoginController, Arc<AppRouter>, SessionContext) {
        let router = Arc::new(AppRouter::new());
        let session = SessionContext::new();
        let controller = LoginController::new(Arc::new(Unused), session.clone(), router.clone());
        (controller, router, session)
    }

    #[test]
    fn test_new_controller_is_idle() {
        let (controller, _, _) = controller();
        assert_eq!(controller.state(), SubmitState::Idle);
        assert!(controller.error().is_none());
        assert!(!controller.form().login_touched);
    }

    #[test]
    fn test_invalid_form_blocks_submission() {
        let (mut controller, _, _) = controller();
        controller.set_login("Max");
        controller.set_password("kurz");
        assert!(controller.begin_submit().is_none());
        assert_eq!(controller.state(), SubmitState::Idle);
    }

    #[test]
    fn test_begin_submit_marks_fields_touched() {
        let (mut controller, _, _) = controller();
        assert!(controller.begin_submit().is_none());
        assert_eq!(controller.form().visible_violations(Field::Login).len(), 1);
        assert_eq!(controller.form().visible_violations(Field::Password).len(), 1);
    }

    #[test]
    fn test_untouched_field_hides_violations() {
        let form = LoginForm::default();
        assert!(form.visible_violations(Field::Login).is_empty());
        assert!(!form.is_valid());
    }

    #[test]
    fn test_begin_submit_builds_credentials() {
        let (mut controller, _, _) = controller();
        controller.set_login("Max Mustermann");
        controller.set_password("geheim123");
        let credentials = controller.begin_submit().unwrap();
        assert_eq!(credentials.login, "Max Mustermann");
        assert_eq!(credentials.password.expose_secret(), "geheim123");
        assert_eq!(controller.state(), SubmitState::Submitting);
    }

    #[test]
    fn test_complete_success_clears_form_password() {
        let (mut controller, router, session) = controller();
        controller.set_login("Max Mustermann");
        controller.set_password("geheim123");
        let credentials = controller.begin_submit().unwrap();
        controller.complete(credentials, Ok(42));

        assert_eq!(controller.state(), SubmitState::Success);
        assert!(!controller.form().has_password());
        assert_eq!(session.current_user().map(|u| u.id), Some(42));
        assert_eq!(router.current(), Route::Main);
    }

    #[test]
    fn test_complete_failure_clears_response_message() {
        let (mut controller, _, _) = controller();
        controller.set_response_message("Registrierung erfolgreich");
        controller.set_login("Max Mustermann");
        controller.set_password("geheim123");
        let credentials = controller.begin_submit().unwrap();
        controller.complete(credentials, Err(AuthError::rejected(401, None)));

        assert_eq!(controller.state(), SubmitState::Failed);
        assert!(controller.response_message().is_none());
        assert!(controller.error().is_some());
    }

    #[test]
    fn test_edit_after_failure_returns_to_idle() {
        let (mut controller, _, _) = controller();
        controller.set_login("Max Mustermann");
        controller.set_password("geheim123");
        let credentials = controller.begin_submit().unwrap();
        controller.complete(credentials, Err(AuthError::unreachable("refused")));

        controller.set_password("geheim1234");
        assert_eq!(controller.state(), SubmitState::Idle);
    }

    #[test]
    fn test_register_and_reset_password_navigate() {
        let (controller, router, _) = controller();
        controller.register();
        assert_eq!(router.current(), Route::Register);
        controller.reset_password();
        assert_eq!(router.current(), Route::ResetPassword);
    }

    #[test]
    fn test_form_debug_hides_password() {
        let (mut controller, _, _) = controller();
        controller.set_login("Max Mustermann");
        controller.set_password("geheim123");
        let debug = format!("{:?}", controller.form());
        assert!(debug.contains("Max Mustermann"));
        assert!(!debug.contains("geheim123"));
    }

    #[test]
    fn test_password_binding_edits_secret() {
        let (mut controller, _, _) = controller();
        controller.password_mut().push_str("geheim123");
        assert!(controller.form().has_password());
        assert_eq!(controller.form().password.expose_secret(), "geheim123");
    }

    #[test]
    fn test_reset_clears_form() {
        let (mut controller, _, _) = controller();
        controller.set_login("Max Mustermann");
        controller.set_password("geheim123");
        controller.reset();
        assert!(controller.form().login.is_empty());
        assert!(!controller.form().has_password());
        assert_eq!(controller.state(), SubmitState::Idle);
    }
}
