//! Theme system for the TUI.
//!
//! Provides semantic color roles that map to ratatui `Style` values.
//! The `ThemeVariant` enum selects between Dark and Light palettes,
//! and `StyleMap` resolves role names to concrete styles.

use ratatui::style::{Color, Modifier, Style};
use std::collections::HashMap;

// ============================================================================
// Theme Variant
// ============================================================================

/// Available theme variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    Dark,
    Light,
}

impl ThemeVariant {
    /// Parse a variant name from a string (case-insensitive).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Build the `ColorPalette` for this variant.
    pub fn palette(self) -> ColorPalette {
        match self {
            Self::Dark => ColorPalette::dark(),
            Self::Light => ColorPalette::light(),
        }
    }

    /// Cycle to the next variant: Dark → Light → Dark.
    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Human-readable name for status display.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

// ============================================================================
// Color Palette — semantic roles to Style
// ============================================================================

/// A complete color palette mapping every semantic UI role to a `Style`.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    // -- Header --
    pub header_title: Style,
    pub header_tagline: Style,

    // -- Cards --
    pub card_border: Style,
    pub card_border_selected: Style,
    pub card_title: Style,
    pub card_category: Style,
    pub card_rating: Style,
    pub card_description: Style,
    pub card_brand: Style,
    pub card_id: Style,

    // -- States --
    pub skeleton: Style,
    pub error_text: Style,
    pub error_hint: Style,
    pub empty_text: Style,

    // -- Dialog --
    pub dialog_border: Style,
    pub dialog_title: Style,
    pub dialog_body: Style,
    pub dialog_metadata: Style,
    pub dialog_tag: Style,

    // -- Chrome --
    pub status_bar: Style,
}

impl ColorPalette {
    /// Dark palette for dark terminal backgrounds.
    fn dark() -> Self {
        Self {
            header_title: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            header_tagline: Style::default().fg(Color::DarkGray),

            card_border: Style::default().fg(Color::DarkGray),
            card_border_selected: Style::default().fg(Color::Magenta),
            card_title: Style::default().add_modifier(Modifier::BOLD),
            card_category: Style::default().fg(Color::Magenta),
            card_rating: Style::default().fg(Color::Yellow),
            card_description: Style::default(),
            card_brand: Style::default().fg(Color::Cyan),
            card_id: Style::default().fg(Color::DarkGray),

            skeleton: Style::default().fg(Color::DarkGray),
            error_text: Style::default().fg(Color::Red),
            error_hint: Style::default().fg(Color::DarkGray),
            empty_text: Style::default().fg(Color::DarkGray),

            dialog_border: Style::default().fg(Color::Magenta),
            dialog_title: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            dialog_body: Style::default(),
            dialog_metadata: Style::default().fg(Color::DarkGray),
            dialog_tag: Style::default().fg(Color::Magenta),

            status_bar: Style::default().bg(Color::DarkGray).fg(Color::White),
        }
    }

    /// Light palette — adapted for light terminal backgrounds.
    fn light() -> Self {
        Self {
            header_title: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            header_tagline: Style::default().fg(Color::DarkGray),

            card_border: Style::default().fg(Color::DarkGray),
            card_border_selected: Style::default().fg(Color::Blue),
            card_title: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            card_category: Style::default().fg(Color::Blue),
            card_rating: Style::default().fg(Color::Magenta),
            card_description: Style::default().fg(Color::Black),
            card_brand: Style::default().fg(Color::Blue),
            card_id: Style::default().fg(Color::DarkGray),

            skeleton: Style::default().fg(Color::Gray),
            error_text: Style::default().fg(Color::Red),
            error_hint: Style::default().fg(Color::DarkGray),
            empty_text: Style::default().fg(Color::DarkGray),

            dialog_border: Style::default().fg(Color::Blue),
            dialog_title: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            dialog_body: Style::default().fg(Color::Black),
            dialog_metadata: Style::default().fg(Color::DarkGray),
            dialog_tag: Style::default().fg(Color::Blue),

            status_bar: Style::default().bg(Color::White).fg(Color::Black),
        }
    }
}

// ============================================================================
// Style Map — string-keyed lookup
// ============================================================================

/// String-keyed style lookup, built from a `ColorPalette`, resolving role
/// names (e.g. `"card_title"`) to their concrete `Style` at runtime.
#[derive(Debug, Clone)]
pub struct StyleMap {
    map: HashMap<&'static str, Style>,
}

/// All semantic role names, in declaration order.
const ROLE_NAMES: [&str; 20] = [
    "header_title",
    "header_tagline",
    "card_border",
    "card_border_selected",
    "card_title",
    "card_category",
    "card_rating",
    "card_description",
    "card_brand",
    "card_id",
    "skeleton",
    "error_text",
    "error_hint",
    "empty_text",
    "dialog_border",
    "dialog_title",
    "dialog_body",
    "dialog_metadata",
    "dialog_tag",
    "status_bar",
];

impl StyleMap {
    /// Build a `StyleMap` from a `ColorPalette`.
    pub fn from_palette(p: &ColorPalette) -> Self {
        let styles: [Style; 20] = [
            p.header_title,
            p.header_tagline,
            p.card_border,
            p.card_border_selected,
            p.card_title,
            p.card_category,
            p.card_rating,
            p.card_description,
            p.card_brand,
            p.card_id,
            p.skeleton,
            p.error_text,
            p.error_hint,
            p.empty_text,
            p.dialog_border,
            p.dialog_title,
            p.dialog_body,
            p.dialog_metadata,
            p.dialog_tag,
            p.status_bar,
        ];

        let mut map = HashMap::with_capacity(ROLE_NAMES.len());
        for (name, style) in ROLE_NAMES.iter().zip(styles.iter()) {
            map.insert(*name, *style);
        }

        Self { map }
    }

    /// Resolve a role name to its `Style`. Returns `Style::default()` for unknown roles.
    pub fn resolve(&self, role: &str) -> Style {
        self.map.get(role).copied().unwrap_or_default()
    }
}
