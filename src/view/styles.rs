//! Widget styling configuration.

use ratatui::style::{Color, Modifier, Style};

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
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

/// Styles shared by the listing widgets.
///
/// With colors disabled, every accent degrades to modifiers only so the UI
/// stays legible on monochrome terminals.
#[derive(Debug, Clone, Copy)]
pub struct ListingStyles {
    colors: ColorConfig,
}

impl ListingStyles {
    /// Create styles honoring the given color configuration.
    pub fn new(colors: ColorConfig) -> Self {
        Self { colors }
    }

    fn colored(self, style: Style, color: Color) -> Style {
        if self.colors.colors_enabled() {
            style.fg(color)
        } else {
            style
        }
    }

    /// Section titles and table headers.
    pub fn header(self) -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    /// The selected filter-form row.
    pub fn selected(self) -> Style {
        self.colored(Style::default().add_modifier(Modifier::REVERSED), Color::Cyan)
    }

    /// Secondary text: hints, counts, placeholders.
    pub fn dim(self) -> Style {
        self.colored(Style::default().add_modifier(Modifier::DIM), Color::DarkGray)
    }

    /// An available vehicle's status cell.
    pub fn available(self) -> Style {
        self.colored(Style::default(), Color::Green)
    }

    /// A rented-out vehicle's status cell.
    pub fn unavailable(self) -> Style {
        self.colored(Style::default(), Color::Red)
    }

    /// The fetch-failure banner.
    pub fn error(self) -> Style {
        self.colored(Style::default().add_modifier(Modifier::BOLD), Color::Red)
    }

    /// The current page number in the pagination bar.
    pub fn current_page(self) -> Style {
        self.colored(Style::default().add_modifier(Modifier::BOLD), Color::Cyan)
    }
}

impl Default for ListingStyles {
    fn default() -> Self {
        Self::new(ColorConfig::from_env_and_args(false))
    }
}
