//! Colour tokens for the portal, one palette per theme mode.
//!
//! # Palette
//! - **Background / surface**: page and card layers
//! - **Primary**: brand blue (links, active tab, focus)
//! - **Secondary**: teal accents (dates, categories)
//! - **Warning / negative**: important notices and errors
//! - **Muted**: secondary text and disabled controls

use ratatui::style::{Color, Modifier, Style};

use campus_core::theme::ThemeMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub primary: Color,
    pub secondary: Color,
    pub positive: Color,
    pub warning: Color,
    pub negative: Color,
    pub muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    pub fn light() -> Self {
        Self {
            background: Color::Rgb(248, 250, 252),
            surface: Color::Rgb(255, 255, 255),
            primary: Color::Rgb(37, 99, 235),
            secondary: Color::Rgb(13, 148, 136),
            positive: Color::Rgb(22, 163, 74),
            warning: Color::Rgb(217, 119, 6),
            negative: Color::Rgb(220, 38, 38),
            muted: Color::Rgb(100, 116, 139),
            text_primary: Color::Rgb(15, 23, 42),
            text_secondary: Color::Rgb(71, 85, 105),
            border: Color::Rgb(203, 213, 225),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(15, 23, 42),
            surface: Color::Rgb(30, 41, 59),
            primary: Color::Rgb(96, 165, 250),
            secondary: Color::Rgb(45, 212, 191),
            positive: Color::Rgb(74, 222, 128),
            warning: Color::Rgb(251, 191, 36),
            negative: Color::Rgb(248, 113, 113),
            muted: Color::Rgb(148, 163, 184),
            text_primary: Color::Rgb(241, 245, 249),
            text_secondary: Color::Rgb(203, 213, 225),
            border: Color::Rgb(51, 65, 85),
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text_primary).bg(self.background)
    }

    pub fn card(&self) -> Style {
        Style::default().fg(self.text_primary).bg(self.surface)
    }

    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.primary)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn body(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.primary)
        } else {
            Style::default().fg(self.border)
        }
    }

    pub fn tab(&self, active: bool) -> Style {
        if active {
            Style::default()
                .fg(self.surface)
                .bg(self.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.text_secondary)
        }
    }

    /// Colour for a category token (a name such as `blue`, or `#rrggbb`),
    /// else the secondary.
    pub fn category_color(&self, token: Option<&str>) -> Color {
        token
            .and_then(|t| named(t).or_else(|| parse_hex(t)))
            .unwrap_or(self.secondary)
    }
}

fn named(token: &str) -> Option<Color> {
    let color = match token {
        "blue" => Color::Rgb(59, 130, 246),
        "green" => Color::Rgb(34, 197, 94),
        "purple" => Color::Rgb(168, 85, 247),
        "orange" => Color::Rgb(249, 115, 22),
        "red" => Color::Rgb(239, 68, 68),
        "teal" => Color::Rgb(20, 184, 166),
        _ => return None,
    };
    Some(color)
}

fn parse_hex(token: &str) -> Option<Color> {
    let hex = token.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}
