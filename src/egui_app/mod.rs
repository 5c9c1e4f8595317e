//! egui Native Desktop App Module
//!
//! The desktop client hosting the login flow.
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs      - Module exports and documentation
//! ├── main.rs     - Application entry point (binary)
//! ├── config.rs   - Client configuration (server URL, login path)
//! ├── auth.rs     - AuthClient trait and HTTP implementation
//! ├── session.rs  - Session context (current user, logged-in flag)
//! ├── router.rs   - Routes and the Navigator trait
//! ├── login.rs    - Login controller
//! ├── state/      - App state and worker-thread bridging
//! ├── views/      - egui screens
//! └── theme/      - Colors and styles
//! ```

pub mod config;
pub mod auth;
pub mod session;
pub mod router;
pub mod login;
pub mod state;
pub mod views;
pub mod theme;

// Re-export commonly used types
pub use config::Config;
pub use auth::{AuthClient, HttpAuthClient};
pub use session::SessionContext;
pub use router::{AppRouter, NavigationOptions, Navigator, Route};
pub use login::{LoginController, LoginForm, SubmitState};
pub use state::AppState;
