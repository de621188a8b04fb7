//! Colour themes for the calculator UI
//!
//! A theme is a small palette plus a border style. Three are built in
//! (`dark`, `light`, `nord`); others can be loaded from a TOML file whose
//! colours are named (`"red"`), hex (`"#1e1e2e"`) or palette indexed
//! (`"indexed:4"`).

use std::fs;
use std::path::Path;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Complete theme definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Theme {
    /// Theme display name
    pub name: String,
    /// Color palette
    pub colors: ThemeColors,
    /// Border styling
    pub borders: BorderStyle,
}

/// Color palette for the theme
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThemeColors {
    #[serde(with = "color_serde")]
    pub background: Color,
    #[serde(with = "color_serde")]
    pub foreground: Color,
    /// Title, primary button and labels
    #[serde(with = "color_serde")]
    pub accent: Color,
    /// Border of the focused field or button
    #[serde(with = "color_serde")]
    pub focus: Color,
    /// Status bar and secondary button background
    #[serde(with = "color_serde")]
    pub surface: Color,
    #[serde(with = "color_serde")]
    pub error: Color,
    #[serde(with = "color_serde")]
    pub success: Color,
    /// Placeholders, hints and the sum restatement
    #[serde(with = "color_serde")]
    pub muted: Color,
}

/// Border style for panels and widgets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    #[default]
    Rounded,
    Square,
    Double,
    /// Fields and card are drawn without frames
    None,
}

impl BorderStyle {
    /// ratatui border set, `None` when borders are disabled.
    pub fn border_type(self) -> Option<ratatui::widgets::BorderType> {
        use ratatui::widgets::BorderType;
        match self {
            BorderStyle::Rounded => Some(BorderType::Rounded),
            BorderStyle::Square => Some(BorderType::Plain),
            BorderStyle::Double => Some(BorderType::Double),
            BorderStyle::None => None,
        }
    }
}

/// Parses a colour string: a ratatui colour name, `#rrggbb`, or `indexed:N`.
///
/// # Example
///
/// ```
/// use ratatui::style::Color;
/// use sumcalc_core::theme::parse_color;
///
/// assert_eq!(parse_color("DarkGrey"), Ok(Color::DarkGray));
/// assert_eq!(parse_color("#ff8000"), Ok(Color::Rgb(255, 128, 0)));
/// assert!(parse_color("#ff80").is_err());
/// ```
pub fn parse_color(text: &str) -> Result<Color, String> {
    let lowered = text.trim().to_lowercase();
    let named = match lowered.as_str() {
        "reset" => Some(Color::Reset),
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "lightred" => Some(Color::LightRed),
        "lightgreen" => Some(Color::LightGreen),
        "lightyellow" => Some(Color::LightYellow),
        "lightblue" => Some(Color::LightBlue),
        "lightmagenta" => Some(Color::LightMagenta),
        "lightcyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        _ => None,
    };
    if let Some(color) = named {
        return Ok(color);
    }

    if let Some(hex) = lowered.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("invalid hex color: {text}"));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| format!("invalid hex color: {text}"))
        };
        return Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?));
    }

    if let Some(index) = lowered.strip_prefix("indexed:") {
        return index
            .parse::<u8>()
            .map(Color::Indexed)
            .map_err(|_| format!("invalid indexed color: {text}"));
    }

    Err(format!("unknown color: {text}"))
}

/// Inverse of [`parse_color`].
pub fn format_color(color: Color) -> String {
    match color {
        Color::Rgb(r, g, b) => format!("#{r:02x}{g:02x}{b:02x}"),
        Color::Indexed(i) => format!("indexed:{i}"),
        // Named variants debug-print as their name.
        named => format!("{named:?}").to_lowercase(),
    }
}

mod color_serde {
    use ratatui::style::Color;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(color: &Color, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_color(*color))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Color, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_color(&s).map_err(serde::de::Error::custom)
    }
}

impl Theme {
    /// Names accepted by [`Theme::by_name`].
    pub const BUILTIN: [&'static str; 3] = ["dark", "light", "nord"];

    /// Creates the default dark theme
    pub fn dark() -> Self {
        Theme {
            name: "Dark".to_string(),
            colors: ThemeColors {
                background: Color::Rgb(30, 30, 46),    // Catppuccin base
                foreground: Color::Rgb(205, 214, 244), // Catppuccin text
                accent: Color::Rgb(137, 180, 250),     // Catppuccin blue
                focus: Color::Rgb(203, 166, 247),      // Catppuccin mauve
                surface: Color::Rgb(69, 71, 90),       // Catppuccin surface1
                error: Color::Rgb(243, 139, 168),      // Catppuccin red
                success: Color::Rgb(166, 227, 161),    // Catppuccin green
                muted: Color::Rgb(147, 153, 178),      // Catppuccin subtext1
            },
            borders: BorderStyle::Rounded,
        }
    }

    /// Creates a light theme
    pub fn light() -> Self {
        Theme {
            name: "Light".to_string(),
            colors: ThemeColors {
                background: Color::Rgb(239, 241, 245), // Catppuccin latte base
                foreground: Color::Rgb(76, 79, 105),   // Catppuccin latte text
                accent: Color::Rgb(30, 102, 245),      // Catppuccin latte blue
                focus: Color::Rgb(136, 57, 239),       // Catppuccin latte mauve
                surface: Color::Rgb(204, 208, 218),    // Catppuccin latte surface0
                error: Color::Rgb(210, 15, 57),        // Catppuccin latte red
                success: Color::Rgb(64, 160, 43),      // Catppuccin latte green
                muted: Color::Rgb(108, 111, 133),      // Catppuccin latte subtext1
            },
            borders: BorderStyle::Rounded,
        }
    }

    /// Creates a Nord theme
    pub fn nord() -> Self {
        Theme {
            name: "Nord".to_string(),
            colors: ThemeColors {
                background: Color::Rgb(46, 52, 64),    // Nord polar night
                foreground: Color::Rgb(236, 239, 244), // Nord snow storm
                accent: Color::Rgb(136, 192, 208),     // Nord frost
                focus: Color::Rgb(180, 142, 173),      // Nord aurora purple
                surface: Color::Rgb(67, 76, 94),       // Nord polar night lighter
                error: Color::Rgb(191, 97, 106),       // Nord aurora red
                success: Color::Rgb(163, 190, 140),    // Nord aurora green
                muted: Color::Rgb(129, 161, 193),      // Nord frost dim
            },
            borders: BorderStyle::Square,
        }
    }

    /// Looks up a built-in theme, ignoring case.
    pub fn by_name(name: &str) -> CoreResult<Self> {
        match name.trim().to_lowercase().as_str() {
            "dark" => Ok(Theme::dark()),
            "light" => Ok(Theme::light()),
            "nord" => Ok(Theme::nord()),
            _ => Err(CoreError::UnknownTheme(name.to_string())),
        }
    }

    /// Parses a theme from TOML string
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML string is malformed or contains invalid values.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Serializes the theme to TOML string
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Loads a theme file.
    pub fn from_file(path: &Path) -> CoreResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| CoreError::ThemeFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Theme::from_toml(&contents).map_err(|e| CoreError::ThemeFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::dark()
    }
}
