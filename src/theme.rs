//! Color theme definitions.
//!
//! Semantic color assignments used throughout the lanwarden UI, over a
//! muted slate palette with aurora-style status colors.

#![allow(dead_code)]
use ratatui::style::Color;

// === Base Palette ===

/// Main background color.
pub const BG_COLOR: Color = Color::Rgb(24, 26, 32);
/// Panel/border base shade.
pub const SLATE_DARK: Color = Color::Rgb(58, 64, 78);
/// Muted foreground shade.
pub const SLATE_LIGHT: Color = Color::Rgb(96, 106, 126);

// === Status Colors ===

/// Success, VPN holding, LOW risk.
pub const GREEN: Color = Color::Rgb(152, 195, 121);
/// Caution, indeterminate, MEDIUM risk.
pub const YELLOW: Color = Color::Rgb(229, 192, 123);
/// Errors, bypass detected, HIGH risk.
pub const RED: Color = Color::Rgb(224, 108, 117);
/// Informational accents.
pub const CYAN: Color = Color::Rgb(86, 182, 194);

// === Semantic Aliases ===

/// Primary text color.
pub const TEXT_PRIMARY: Color = Color::Rgb(212, 218, 230);
/// Secondary/muted text color.
pub const TEXT_SECONDARY: Color = SLATE_LIGHT;
/// Primary accent color.
pub const ACCENT_PRIMARY: Color = CYAN;
/// Default border color.
pub const BORDER_DEFAULT: Color = SLATE_DARK;
/// Focused element border color.
pub const BORDER_FOCUSED: Color = CYAN;
