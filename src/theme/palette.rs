//! Color constants and font size tokens for consistent UI theming.

use bevy::prelude::*;

// === Text Colors ===

/// Header/title text color (white).
pub const HEADER_TEXT: Color = Color::WHITE;

/// Body/subtitle text color (light gray).
pub const BODY_TEXT: Color = Color::srgb(0.7, 0.7, 0.7);

/// Button label text color.
pub const BUTTON_TEXT: Color = Color::srgb(0.925, 0.925, 0.925);

/// Countdown digits (yellow).
pub const COUNTDOWN_TEXT: Color = Color::srgb(1.0, 0.92, 0.016);

/// HUD warning (low time / almost out of tomatoes).
pub const HUD_DANGER: Color = Color::srgb(1.0, 0.0, 0.0);

/// HUD caution (running low on tomatoes).
pub const HUD_CAUTION: Color = Color::srgb(1.0, 0.92, 0.016);

/// HUD default text.
pub const HUD_NORMAL: Color = Color::WHITE;

/// Victory title accent (green).
pub const VICTORY_TEXT: Color = Color::srgb(0.1, 0.9, 0.1);

/// Game over title accent (red).
pub const GAME_OVER_TEXT: Color = Color::srgb(0.9, 0.2, 0.2);

// === UI Backgrounds ===

/// Semi-transparent dark overlay for modal screens.
pub const OVERLAY_BACKGROUND: Color = Color::srgba(0.0, 0.0, 0.0, 0.7);

/// Panel background (dark blue-gray, nearly opaque).
pub const PANEL_BACKGROUND: Color = Color::srgba(0.1, 0.1, 0.15, 0.95);

/// Panel border (light blue-gray, semi-transparent).
pub const PANEL_BORDER: Color = Color::srgba(0.5, 0.5, 0.6, 0.8);

/// HUD strip along the top of the screen.
pub const HUD_BACKGROUND: Color = Color::srgba(0.0, 0.0, 0.0, 0.4);

// === Button Colors ===

pub const BUTTON_BACKGROUND: Color = Color::srgb(0.275, 0.4, 0.75);
pub const BUTTON_HOVERED_BACKGROUND: Color = Color::srgb(0.384, 0.6, 0.82);
pub const BUTTON_PRESSED_BACKGROUND: Color = Color::srgb(0.239, 0.286, 0.6);

// === Play Field Colors ===

/// Clear color behind the field.
pub const BACKGROUND: Color = Color::srgb(0.1, 0.1, 0.12);
/// Ground support disc.
pub const GROUND: Color = Color::srgb(0.22, 0.35, 0.18);

// === Entity Colors ===

/// Unpainted smurf.
pub const SMURF_BLUE: Color = Color::srgb(0.2, 0.4, 1.0);
/// Painted smurf.
pub const SMURF_RED: Color = Color::srgb(1.0, 0.0, 0.0);
/// Tomato in flight.
pub const TOMATO: Color = Color::srgb(0.9, 0.15, 0.1);

// === Font Size Tokens ===

pub const FONT_SIZE_COUNTDOWN: f32 = 200.0;
pub const FONT_SIZE_TITLE: f32 = 80.0;
pub const FONT_SIZE_HEADER: f32 = 64.0;
pub const FONT_SIZE_TIMER: f32 = 60.0;
pub const FONT_SIZE_LABEL: f32 = 32.0;
pub const FONT_SIZE_HUD: f32 = 40.0;
