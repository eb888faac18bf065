//! Screen styling.
//!
//! One [`Palette`] is built at start-up from the color configuration and
//! handed to every render function. With colors disabled every style keeps
//! its modifiers (bold, reversed) so selection stays visible.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Fixed color setting, ignoring the environment.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Palette =====

/// Styles shared by all screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen and section headings.
    pub heading: Style,
    /// Secondary text: hints, metadata labels.
    pub muted: Style,
    /// Category badge on cards.
    pub badge: Style,
    /// "★ Featured" marker.
    pub featured: Style,
    /// Border of the selected card.
    pub selected: Style,
    /// Border of unselected cards.
    pub border: Style,
    /// Lookup, load and validation errors.
    pub error: Style,
    /// Success banner.
    pub banner: Style,
    /// Key names in hints and the help overlay.
    pub key: Style,
    /// Current screen in the navigation bar, current page number.
    pub active: Style,
    /// Buttons and links that cannot be used right now.
    pub disabled: Style,
}

impl Palette {
    /// Build the palette for `config`.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        if config.colors_enabled() {
            Self {
                heading: bold.fg(Color::Cyan),
                muted: Style::default().fg(Color::Gray),
                badge: Style::default().fg(Color::Black).bg(Color::Magenta),
                featured: bold.fg(Color::Yellow),
                selected: bold.fg(Color::Yellow),
                border: Style::default().fg(Color::DarkGray),
                error: Style::default().fg(Color::Red),
                banner: bold.fg(Color::Black).bg(Color::Green),
                key: bold.fg(Color::Yellow),
                active: Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                disabled: Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM),
            }
        } else {
            Self {
                heading: bold,
                muted: Style::default(),
                badge: Style::default().add_modifier(Modifier::REVERSED),
                featured: bold,
                selected: bold,
                border: Style::default(),
                error: bold,
                banner: Style::default().add_modifier(Modifier::REVERSED),
                key: bold,
                active: Style::default().add_modifier(Modifier::REVERSED),
                disabled: Style::default().add_modifier(Modifier::DIM),
            }
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
