//! Lattice configuration system
//!
//! Loads widget, display and demo settings from `lattice.toml`, with
//! environment variables taking precedence over file values.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Default configuration file name, looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "lattice.toml";

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LatticeConfig {
    /// Widget appearance and slot count
    pub widget: WidgetConfig,
    /// Device display settings
    pub display: DisplayConfig,
    /// Font used for glyph measurement
    pub font: FontConfig,
    /// Demo host settings
    pub demo: DemoConfig,
}

/// Widget configuration. Colors left unset fall back to the widget defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Number of character slots
    pub item_count: usize,
    /// Underline color while focused
    pub bottom_color: Option<ColorValue>,
    /// Underline color while unfocused
    pub bottom_color_static: Option<ColorValue>,
    /// Glyph color
    pub text_color: Option<ColorValue>,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Device pixels per density-independent unit
    pub density: f32,
}

/// Font configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FontConfig {
    /// Path to a font file (.ttf/.otf); fixed metrics are used when unset
    pub path: Option<PathBuf>,
}

/// Demo host configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Width constraint handed to the widget
    pub width: Constraint,
    /// Height constraint handed to the widget
    pub height: Constraint,
    /// Initial content
    pub text: String,
    /// Whether the widget starts focused
    pub focused: bool,
}

/// A parent-imposed size constraint, in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Constraint {
    Exact { px: u32 },
    AtMost { px: u32 },
    #[default]
    Unspecified,
}

/// A color given either as a packed `0xAARRGGBB` integer or as a CSS color string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Argb(u32),
    Css(String),
}

impl ColorValue {
    /// Packed ARGB value, or `None` when the string is not a color.
    pub fn to_argb(&self) -> Option<u32> {
        match self {
            ColorValue::Argb(v) => Some(*v),
            ColorValue::Css(s) => {
                let c = csscolorparser::Color::from_str(s.trim()).ok()?;
                let to_u8 = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;
                Some(u32::from_be_bytes([to_u8(c.a), to_u8(c.r), to_u8(c.g), to_u8(c.b)]))
            }
        }
    }

    /// Parse an environment value: `0x`-prefixed hex is ARGB, anything else is CSS.
    pub fn parse_env(val: &str) -> Self {
        let val = val.trim();
        match val
            .strip_prefix("0x")
            .or_else(|| val.strip_prefix("0X"))
            .and_then(|hex| u32::from_str_radix(hex, 16).ok())
        {
            Some(argb) => ColorValue::Argb(argb),
            None => ColorValue::Css(val.to_string()),
        }
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            item_count: 6,
            bottom_color: None,
            bottom_color_static: None,
            text_color: None,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { density: 1.0 }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: Constraint::Unspecified,
            height: Constraint::Unspecified,
            text: String::new(),
            focused: true,
        }
    }
}

fn env_flag(val: &str) -> bool {
    val == "1" || val.eq_ignore_ascii_case("true")
}

impl LatticeConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from `lattice.toml` in the current directory,
    /// or return the defaults if it is missing or invalid.
    pub fn load_or_default() -> Self {
        match Self::load_from_file(DEFAULT_CONFIG_FILE) {
            Ok(config) => config,
            Err(ConfigError::Read { .. }) => Self::default(),
            Err(e) => {
                log::warn!("{e}; using default configuration");
                Self::default()
            }
        }
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    /// Unparseable numeric values are ignored.
    pub fn merge_with_env(&mut self) {
        if let Ok(val) = std::env::var("LATTICE_ITEM_COUNT") {
            match val.parse::<usize>() {
                Ok(count) => self.widget.item_count = count,
                Err(_) => log::warn!("ignoring LATTICE_ITEM_COUNT={val:?}"),
            }
        }
        if let Ok(val) = std::env::var("LATTICE_BOTTOM_COLOR") {
            self.widget.bottom_color = Some(ColorValue::parse_env(&val));
        }
        if let Ok(val) = std::env::var("LATTICE_BOTTOM_COLOR_STATIC") {
            self.widget.bottom_color_static = Some(ColorValue::parse_env(&val));
        }
        if let Ok(val) = std::env::var("LATTICE_TEXT_COLOR") {
            self.widget.text_color = Some(ColorValue::parse_env(&val));
        }

        if let Ok(val) = std::env::var("LATTICE_DENSITY") {
            match val.parse::<f32>() {
                Ok(density) => self.display.density = density,
                Err(_) => log::warn!("ignoring LATTICE_DENSITY={val:?}"),
            }
        }

        if let Ok(font) = std::env::var("LATTICE_FONT") {
            self.font.path = Some(PathBuf::from(font));
        }

        if let Ok(text) = std::env::var("LATTICE_TEXT") {
            self.demo.text = text;
        }
        if let Ok(val) = std::env::var("LATTICE_FOCUSED") {
            self.demo.focused = env_flag(&val);
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. Load from lattice.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}
