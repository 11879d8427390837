//! Declarative style attributes.
//!
//! Attribute lookups go through a scoped [`StyledAttributes`] handle obtained
//! from an [`AttributeSet`]. The handle is released when dropped, on every
//! path, and the set counts handles still outstanding.

use std::cell::Cell;
use std::collections::HashMap;

use lattice_config::{ColorValue, WidgetConfig};

/// Focused underline color.
pub const ATTR_BOTTOM_COLOR: &str = "bottomColor";
/// Unfocused underline color.
pub const ATTR_BOTTOM_COLOR_STATIC: &str = "bottomColorStatic";
/// Glyph color.
pub const ATTR_TEXT_COLOR: &str = "textColor";

pub const DEFAULT_BOTTOM_COLOR: u32 = 0xFFFF_0000;
pub const DEFAULT_BOTTOM_COLOR_STATIC: u32 = 0xFF88_8888;
pub const DEFAULT_TEXT_COLOR: u32 = 0xFF00_0000;

/// Named ARGB attribute values.
#[derive(Debug, Default)]
pub struct AttributeSet {
    values: HashMap<String, u32>,
    outstanding: Cell<usize>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, argb: u32) -> Self {
        self.set(name, argb);
        self
    }

    pub fn set(&mut self, name: &str, argb: u32) {
        self.values.insert(name.to_string(), argb);
    }

    /// Build from configuration. Colors that do not parse are left unset.
    pub fn from_config(config: &WidgetConfig) -> Self {
        let mut set = Self::new();
        let entries: [(&str, Option<&ColorValue>); 3] = [
            (ATTR_BOTTOM_COLOR, config.bottom_color.as_ref()),
            (ATTR_BOTTOM_COLOR_STATIC, config.bottom_color_static.as_ref()),
            (ATTR_TEXT_COLOR, config.text_color.as_ref()),
        ];
        for (name, value) in entries {
            let Some(value) = value else { continue };
            match value.to_argb() {
                Some(argb) => set.set(name, argb),
                None => log::warn!("attribute {name}: unrecognized color {value:?}, using default"),
            }
        }
        set
    }

    /// Begin a scoped lookup.
    pub fn obtain(&self) -> StyledAttributes<'_> {
        self.outstanding.set(self.outstanding.get() + 1);
        StyledAttributes { set: self }
    }

    /// Lookups obtained and not yet released.
    pub fn outstanding(&self) -> usize {
        self.outstanding.get()
    }
}

/// Scoped view over an [`AttributeSet`], released on drop.
#[derive(Debug)]
pub struct StyledAttributes<'a> {
    set: &'a AttributeSet,
}

impl StyledAttributes<'_> {
    /// Color for `name`; missing or zero values yield `default`.
    pub fn color(&self, name: &str, default: u32) -> u32 {
        match self.set.values.get(name) {
            Some(&argb) if argb != 0 => argb,
            _ => default,
        }
    }
}

impl Drop for StyledAttributes<'_> {
    fn drop(&mut self) {
        let n = self.set.outstanding.get();
        self.set.outstanding.set(n.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_missing_fall_back() {
        let set = AttributeSet::new().with(ATTR_BOTTOM_COLOR, 0);
        let attrs = set.obtain();
        assert_eq!(attrs.color(ATTR_BOTTOM_COLOR, DEFAULT_BOTTOM_COLOR), DEFAULT_BOTTOM_COLOR);
        assert_eq!(
            attrs.color(ATTR_BOTTOM_COLOR_STATIC, DEFAULT_BOTTOM_COLOR_STATIC),
            DEFAULT_BOTTOM_COLOR_STATIC
        );
    }

    #[test]
    fn set_values_win() {
        let set = AttributeSet::new().with(ATTR_BOTTOM_COLOR_STATIC, 0xFF00_00FF);
        let attrs = set.obtain();
        assert_eq!(attrs.color(ATTR_BOTTOM_COLOR_STATIC, DEFAULT_BOTTOM_COLOR_STATIC), 0xFF00_00FF);
    }

    #[test]
    fn handles_release_on_drop() {
        let set = AttributeSet::new();
        {
            let _a = set.obtain();
            let _b = set.obtain();
            assert_eq!(set.outstanding(), 2);
        }
        assert_eq!(set.outstanding(), 0);
    }

    #[test]
    fn from_config_skips_bad_colors() {
        let config = WidgetConfig {
            bottom_color: Some(ColorValue::Css("nope".into())),
            bottom_color_static: Some(ColorValue::Css("blue".into())),
            ..WidgetConfig::default()
        };
        let set = AttributeSet::from_config(&config);
        let attrs = set.obtain();
        assert_eq!(attrs.color(ATTR_BOTTOM_COLOR, DEFAULT_BOTTOM_COLOR), DEFAULT_BOTTOM_COLOR);
        assert_eq!(attrs.color(ATTR_BOTTOM_COLOR_STATIC, 0), 0xFF00_00FF);
        assert_eq!(attrs.color(ATTR_TEXT_COLOR, DEFAULT_TEXT_COLOR), DEFAULT_TEXT_COLOR);
    }
}
