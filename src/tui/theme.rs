//! Theme configuration for the player and CLI
//!
//! Centralizes all color and style definitions, including the field palette
//! the trajectory renderer paints with. Provides both ratatui styles (for the
//! player) and ANSI escape codes (for plain CLI output).

use once_cell::sync::OnceCell;
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Selectable theme names, as written in the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Broadcast,
    Classic,
    Mono,
}

/// Colors used to paint the field and the play.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldPalette {
    pub grass: Color,
    /// End zone behind the offense's starting side
    pub own_end_zone: Color,
    /// End zone the offense is attacking
    pub opponent_end_zone: Color,
    /// Yard lines, numbers and hash ticks
    pub lines: Color,
    /// Dashed start-to-end reference line
    pub path: Color,
    /// Ball carrier marker and its ghosts
    pub marker: Color,
    /// The other ten offensive players
    pub offense: Color,
    pub defense: Color,
    pub ball: Color,
    pub touchdown: Color,
    pub tackle: Color,
    /// Yardage label and name tags
    pub label: Color,
}

impl FieldPalette {
    pub fn broadcast() -> Self {
        Self {
            grass: Color::Rgb(0x19, 0x6F, 0x0C),
            own_end_zone: Color::Rgb(0x1F, 0x3A, 0x93),
            opponent_end_zone: Color::Rgb(0xB3, 0x1B, 0x1B),
            lines: Color::Rgb(0xFF, 0xFF, 0xFF),
            path: Color::Rgb(0xFF, 0xFF, 0xFF),
            marker: Color::Rgb(0xFF, 0xD7, 0x00),
            offense: Color::Rgb(0x5B, 0x9B, 0xFF),
            defense: Color::Rgb(0xF0, 0x6A, 0x5A),
            ball: Color::Rgb(0x8B, 0x45, 0x13),
            touchdown: Color::Rgb(0xFF, 0xD7, 0x00),
            tackle: Color::Rgb(0xFF, 0x45, 0x45),
            label: Color::Rgb(0xFF, 0xFF, 0xFF),
        }
    }

    pub fn classic() -> Self {
        Self {
            grass: Color::Rgb(0x2E, 0x7D, 0x32),
            own_end_zone: Color::Rgb(0x0D, 0x2B, 0x52),
            opponent_end_zone: Color::Rgb(0x6D, 0x10, 0x1A),
            lines: Color::Rgb(0xF5, 0xF5, 0xF5),
            path: Color::Rgb(0xE0, 0xE0, 0xE0),
            marker: Color::Rgb(0xFF, 0xA5, 0x00),
            offense: Color::Rgb(0x42, 0x75, 0xC8),
            defense: Color::Rgb(0xC6, 0x28, 0x28),
            ball: Color::Rgb(0x6B, 0x3A, 0x1E),
            touchdown: Color::Rgb(0xFF, 0xEB, 0x3B),
            tackle: Color::Rgb(0xE5, 0x39, 0x35),
            label: Color::Rgb(0xF5, 0xF5, 0xF5),
        }
    }

    pub fn mono() -> Self {
        Self {
            grass: Color::Rgb(0x20, 0x20, 0x20),
            own_end_zone: Color::Rgb(0x40, 0x40, 0x40),
            opponent_end_zone: Color::Rgb(0x50, 0x50, 0x50),
            lines: Color::Rgb(0xC0, 0xC0, 0xC0),
            path: Color::Rgb(0x90, 0x90, 0x90),
            marker: Color::Rgb(0xFF, 0xFF, 0xFF),
            offense: Color::Rgb(0xD0, 0xD0, 0xD0),
            defense: Color::Rgb(0x70, 0x70, 0x70),
            ball: Color::Rgb(0xA0, 0xA0, 0xA0),
            touchdown: Color::Rgb(0xFF, 0xFF, 0xFF),
            tackle: Color::Rgb(0xE0, 0xE0, 0xE0),
            label: Color::Rgb(0xFF, 0xFF, 0xFF),
        }
    }
}

impl Default for FieldPalette {
    fn default() -> Self {
        Self::broadcast()
    }
}

/// Theme configuration for the player.
///
/// All colors and styles are defined here for easy customization.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (used for most content)
    pub text_primary: Color,
    /// Secondary/dimmed text color
    pub text_secondary: Color,
    /// Accent color for highlights and important elements
    pub accent: Color,
    /// Error/warning color
    pub error: Color,
    /// Success color
    pub success: Color,
    /// Background color (usually default/transparent)
    pub background: Color,
    /// Field and play colors
    pub field: FieldPalette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::broadcast()
    }
}

impl Theme {
    /// Broadcast theme - gray text, green accent, TV-style field.
    /// Uses standard ANSI colors for the chrome so it matches the terminal.
    pub fn broadcast() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Green,
            error: Color::Red,
            success: Color::Green,
            background: Color::Reset,
            field: FieldPalette::broadcast(),
        }
    }

    /// Classic theme - white text, darker turf.
    pub fn classic() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            accent: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
            background: Color::Reset,
            field: FieldPalette::classic(),
        }
    }

    /// Grayscale theme for terminals with poor color support.
    pub fn mono() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            accent: Color::White,
            error: Color::White,
            success: Color::White,
            background: Color::Reset,
            field: FieldPalette::mono(),
        }
    }

    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Broadcast => Self::broadcast(),
            ThemeName::Classic => Self::classic(),
            ThemeName::Mono => Self::mono(),
        }
    }

    // Style helpers

    /// Style for primary text content.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary/dimmed text.
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for accented/highlighted text.
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for bold accented text (keybindings, titles).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    // ANSI color helpers for CLI output

    /// Format text with the accent color (for CLI output).
    pub fn accent_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.accent), text, ansi::RESET)
    }

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.text_primary), text, ansi::RESET)
    }

    /// Format text with the secondary color (for CLI output).
    pub fn secondary_text(&self, text: &str) -> String {
        format!(
            "{}{}{}",
            color_to_ansi(self.text_secondary),
            text,
            ansi::RESET
        )
    }

    /// Format text with the error color (for CLI output).
    pub fn error_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.error), text, ansi::RESET)
    }

    /// Format text with the success color (for CLI output).
    pub fn success_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.success), text, ansi::RESET)
    }
}

/// Raw ANSI sequences for hand-built CLI output.
pub mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const GREEN: &str = "\x1b[32m";
}

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // For RGB and indexed colors, fall back to reset (no color)
        _ => "",
    }
}

/// RGB components of a color, for the named colors too.
pub fn rgb_of(color: Color) -> Option<(u8, u8, u8)> {
    let rgb = match color {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Black => (0, 0, 0),
        Color::Red => (0x80, 0, 0),
        Color::Green => (0, 0x80, 0),
        Color::Yellow => (0x80, 0x80, 0),
        Color::Blue => (0, 0, 0x80),
        Color::Magenta => (0x80, 0, 0x80),
        Color::Cyan => (0, 0x80, 0x80),
        Color::Gray => (0xC0, 0xC0, 0xC0),
        Color::DarkGray => (0x80, 0x80, 0x80),
        Color::LightRed => (0xFF, 0, 0),
        Color::LightGreen => (0, 0xFF, 0),
        Color::LightYellow => (0xFF, 0xFF, 0),
        Color::LightBlue => (0, 0, 0xFF),
        Color::LightMagenta => (0xFF, 0, 0xFF),
        Color::LightCyan => (0, 0xFF, 0xFF),
        Color::White => (0xFF, 0xFF, 0xFF),
        _ => return None,
    };
    Some(rgb)
}

/// Mix `fg` over `bg` at `opacity` (0 = `bg`, 1 = `fg`).
///
/// Terminals have no alpha channel, so translucent shapes are drawn in the
/// blended color instead.
pub fn blend(fg: Color, bg: Color, opacity: f64) -> Color {
    let opacity = if opacity.is_nan() { 1.0 } else { opacity.clamp(0.0, 1.0) };
    match (rgb_of(fg), rgb_of(bg)) {
        (Some((fr, fg_, fb)), Some((br, bg_, bb))) => {
            let mix = |f: u8, b: u8| {
                (f64::from(b) + (f64::from(f) - f64::from(b)) * opacity).round() as u8
            };
            Color::Rgb(mix(fr, br), mix(fg_, bg_), mix(fb, bb))
        }
        _ => fg,
    }
}

static THEME: OnceCell<Theme> = OnceCell::new();

/// Install the theme chosen in the config. Only the first call wins.
pub fn init_theme(name: ThemeName) {
    let _ = THEME.set(Theme::from_name(name));
}

/// The active theme, or the default when none was installed.
pub fn current_theme() -> Theme {
    THEME.get().cloned().unwrap_or_default()
}
