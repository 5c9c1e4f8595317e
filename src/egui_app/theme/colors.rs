//! Color Constants
//!
//! Palette of the onboarding client: dark slate panels with a teal accent.

use eframe::egui::Color32;

/// Dark background for main areas
pub const BG_DARK: Color32 = Color32::from_rgb(0x1E, 0x26, 0x2E);

/// Top bar background
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x26, 0x32, 0x3C);

/// Card behind the login form
pub const CARD_BG: Color32 = Color32::from_rgb(0x2B, 0x38, 0x44);

/// Card border
pub const CARD_BORDER: Color32 = Color32::from_rgb(0x3D, 0x4E, 0x5C);

/// Text input background
pub const INPUT_BG: Color32 = Color32::from_rgb(0x35, 0x44, 0x52);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xEC, 0xF0, 0xF3);

/// Secondary text color (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x9A, 0xA8, 0xB4);

/// Accent color for the primary action
pub const ACCENT: Color32 = Color32::from_rgb(0x1F, 0x8A, 0x85);

pub const ACCENT_HOVER: Color32 = Color32::from_rgb(0x26, 0xA1, 0x9B);

/// Link-style buttons
pub const LINK: Color32 = Color32::from_rgb(0x6F, 0xC7, 0xC1);

/// Success color - Green
pub const SUCCESS: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

/// Error color - Red
pub const ERROR: Color32 = Color32::from_rgb(0xE5, 0x73, 0x73);
