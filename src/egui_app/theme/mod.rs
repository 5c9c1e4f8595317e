//! Theme Module
//!
//! Color scheme and styling helpers for the onboarding client.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::egui_app::theme::{colors, styles};
//!
//! styles::apply_global_theme(ctx);
//! styles::card_frame().show(ui, |ui| {
//!     ui.colored_label(colors::TEXT_LIGHT, "Anmelden");
//! });
//! ```

pub mod colors;
pub mod styles;
