//! Onboarding - Login Client Library
//!
//! The login front door of the onboarding business app: a native desktop
//! client that validates a login form, exchanges the credentials with the
//! authentication server and routes the user on.
//!
//! # Module Structure
//!
//! - **`shared`** - Types with no UI dependency
//!   - Credentials and the authenticated identity
//!   - Login form validation rules
//!   - Configuration and error types
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - HTTP authentication client
//!   - Session context (current user, logged-in flag)
//!   - Router and login controller
//!   - Views
//!
//! # Usage
//!
//! The controller can be driven without any UI, which is how the tests use it:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use onboarding::egui_app::{AppRouter, Config, HttpAuthClient, LoginController, SessionContext};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::load()?;
//! let session = SessionContext::new();
//! let router = Arc::new(AppRouter::new());
//! let client = Arc::new(HttpAuthClient::new(&config)?);
//!
//! let mut controller = LoginController::new(client, session.clone(), router.clone());
//! controller.set_login("Max Mustermann");
//! controller.set_password("geheim123");
//! controller.submit().await;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `Result<T, E>` with `thiserror` enums for fallible operations
//! - Login failures never propagate: the controller turns them into the
//!   message shown on the form

/// Shared types and data structures
pub mod shared;

/// egui native desktop app
pub mod egui_app;
