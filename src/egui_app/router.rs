/**
 * Router Module
 *
 * Screen routing for the desktop client. Controllers only see the
 * `Navigator` trait; `AppRouter` is the implementation the views render from.
 */

use std::fmt;
use std::sync::RwLock;

/// Screens of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Login form
    Login,
    /// Main view after a successful login
    Main,
    /// Account registration
    Register,
    /// Password reset request
    ResetPassword,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "login",
            Route::Main => "main",
            Route::Register => "register",
            Route::ResetPassword => "reset-password",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationOptions {
    /// Navigation that must not show up as a location change
    pub skip_location_change: bool,
}

impl NavigationOptions {
    pub fn skip_location_change() -> Self {
        Self { skip_location_change: true }
    }
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route, options: NavigationOptions);
}

/// In-process router backing the egui views.
#[derive(Debug)]
pub struct AppRouter {
    current: RwLock<Route>,
}

impl Default for AppRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl AppRouter {
    /// Router starting on the login screen
    pub fn new() -> Self {
        Self::starting_at(Route::Login)
    }

    pub fn starting_at(route: Route) -> Self {
        Self {
            current: RwLock::new(route),
        }
    }

    pub fn current(&self) -> Route {
        self.current.read().map(|r| *r).unwrap_or(Route::Login)
    }
}

impl Navigator for AppRouter {
    fn navigate(&self, route: Route, options: NavigationOptions) {
        let Ok(mut current) = self.current.write() else {
            tracing::error!(%route, "router state poisoned, navigation dropped");
            return;
        };
        let from = *current;
        tracing::info!(
            %from,
            to = %route,
            skip_location_change = options.skip_location_change,
            "navigate"
        );
        *current = route;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_starts_at_login() {
        let router = AppRouter::new();
        assert_eq!(router.current(), Route::Login);
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Main.path(), "main");
        assert_eq!(Route::Register.to_string(), "register");
        assert_eq!(Route::ResetPassword.to_string(), "reset-password");
    }

    #[test]
    fn test_navigate_replaces_current_route() {
        let router = AppRouter::new();
        router.navigate(Route::Main, NavigationOptions::skip_location_change());
        assert_eq!(router.current(), Route::Main);
        router.navigate(Route::Register, NavigationOptions::default());
        assert_eq!(router.current(), Route::Register);
    }

    #[test]
    fn test_starting_at() {
        assert_eq!(AppRouter::starting_at(Route::Main).current(), Route::Main);
    }
}
