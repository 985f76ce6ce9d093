//! Centralized theme module for TUI color constants and styles

use ratatui::prelude::*;

use crate::config::ThemeMode;
use crate::scoring::RiskTier;

/// Resolved light/dark choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Complete color palette for the TUI
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Tier badge colors (traffic light pattern)
    pub tier_high: Color,
    pub tier_moderate: Color,
    pub tier_slightly_elevated: Color,
    pub tier_standard: Color,

    // Reduction badge
    pub reduction: Color,

    // Table colors
    pub row_alt_bg: Color,
    pub checkbox_on: Color,
    pub checkbox_off: Color,
    pub row_selected: Style,
    pub header_style: Style,

    // General colors
    pub muted: Color,
    pub title_color: Color,
    pub score_value: Style,

    // Tab colors
    pub tab_active_style: Style,
    pub tab_inactive_style: Style,

    // Status bar colors
    pub status_bar_bg: Color,
    pub status_key_color: Color,
    pub flash_success: Color,
    pub flash_error: Color,

    // Popup overlay colors
    pub popup_border: Color,
    pub popup_title: Style,
    pub popup_bg: Color,
}

impl ThemeColors {
    pub fn dark() -> Self {
        Self {
            tier_high: Color::Red,
            tier_moderate: Color::LightRed,
            tier_slightly_elevated: Color::Yellow,
            tier_standard: Color::Green,
            reduction: Color::Cyan,
            row_alt_bg: Color::Indexed(235),
            checkbox_on: Color::Green,
            checkbox_off: Color::DarkGray,
            row_selected: Style::new().reversed(),
            header_style: Style::new().bold(),
            muted: Color::Gray,
            title_color: Color::Cyan,
            score_value: Style::new().bold(),
            tab_active_style: Style::new().fg(Color::Cyan).bold().reversed(),
            tab_inactive_style: Style::new().fg(Color::DarkGray),
            status_bar_bg: Color::Indexed(236),
            status_key_color: Color::Cyan,
            flash_success: Color::Green,
            flash_error: Color::Red,
            popup_border: Color::Cyan,
            popup_title: Style::new().fg(Color::Cyan).bold(),
            popup_bg: Color::Indexed(234),
        }
    }

    pub fn light() -> Self {
        Self {
            tier_high: Color::Red,
            tier_moderate: Color::Rgb(200, 90, 0),
            tier_slightly_elevated: Color::Rgb(160, 120, 0),
            tier_standard: Color::Rgb(0, 120, 0),
            reduction: Color::Blue,
            row_alt_bg: Color::Indexed(254),
            checkbox_on: Color::Rgb(0, 120, 0),
            checkbox_off: Color::Gray,
            row_selected: Style::new().reversed(),
            header_style: Style::new().bold(),
            muted: Color::DarkGray,
            title_color: Color::Blue,
            score_value: Style::new().bold(),
            tab_active_style: Style::new().fg(Color::Blue).bold().reversed(),
            tab_inactive_style: Style::new().fg(Color::Gray),
            status_bar_bg: Color::Indexed(252),
            status_key_color: Color::Blue,
            flash_success: Color::Rgb(0, 120, 0),
            flash_error: Color::Red,
            popup_border: Color::Blue,
            popup_title: Style::new().fg(Color::Blue).bold(),
            popup_bg: Color::Indexed(255),
        }
    }

    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::dark(),
            Theme::Light => Self::light(),
        }
    }

    /// Badge color for a risk tier
    pub fn tier_color(&self, tier: RiskTier) -> Color {
        match tier {
            RiskTier::High => self.tier_high,
            RiskTier::Moderate => self.tier_moderate,
            RiskTier::SlightlyElevated => self.tier_slightly_elevated,
            RiskTier::Standard => self.tier_standard,
        }
    }
}

/// Pick dark or light. `Auto` asks the terminal for its background
/// luminance and falls back to dark when it does not answer.
pub fn resolve_theme(mode: ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::Dark,
        ThemeMode::Light => Theme::Light,
        ThemeMode::Auto => match terminal_light::luma() {
            Ok(luma) if luma > 0.6 => Theme::Light,
            _ => Theme::Dark,
        },
    }
}
