//! Text measurement providers.
//!
//! Widgets only need two answers from a font: the vertical line metrics at a
//! given pixel size, and the ink bounds of a short piece of text. Both are
//! exposed through [`TextProvider`] so layout code stays independent of the
//! font backend.
//!
//! # Example
//! ```no_run
//! use engine_core::{FontdueProvider, TextProvider};
//!
//! let provider = FontdueProvider::from_file("fonts/Inter-Regular.ttf")
//!     .expect("Failed to load font");
//! let bounds = provider.text_bounds("8", 36.0);
//! let metrics = provider.line_metrics(36.0);
//! ```

use std::path::Path;

use anyhow::Context;

/// Simplified line metrics. `ascent` and `descent` are positive magnitudes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LineMetrics {
    pub ascent: f32,
    pub descent: f32,
    pub line_gap: f32,
}

/// Tight ink bounds of rendered text relative to its baseline origin (y-down).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextBounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Text measurement interface.
pub trait TextProvider: Send + Sync {
    fn line_metrics(&self, px: f32) -> Option<LineMetrics>;

    /// Ink bounds for `text` at `px`. Returns `None` when nothing would be drawn.
    fn text_bounds(&self, text: &str, px: f32) -> Option<TextBounds>;
}

/// fontdue-backed provider.
pub struct FontdueProvider {
    font: fontdue::Font,
}

impl FontdueProvider {
    pub fn from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| anyhow::anyhow!(e))?;
        Ok(Self { font })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("failed to read font file {}", path.display()))?;
        Self::from_bytes(&bytes).with_context(|| format!("failed to parse font {}", path.display()))
    }
}

impl TextProvider for FontdueProvider {
    fn line_metrics(&self, px: f32) -> Option<LineMetrics> {
        self.font.horizontal_line_metrics(px).map(|lm| LineMetrics {
            ascent: lm.ascent,
            // fontdue reports descent as a negative number; normalize to positive magnitude.
            descent: lm.descent.abs(),
            line_gap: lm.line_gap.max(0.0),
        })
    }

    fn text_bounds(&self, text: &str, px: f32) -> Option<TextBounds> {
        let px = px.max(1.0);
        let mut pen = 0.0f32;
        let mut left = f32::INFINITY;
        let mut right = f32::NEG_INFINITY;
        let mut top = f32::INFINITY;
        let mut bottom = f32::NEG_INFINITY;
        for ch in text.chars() {
            let m = self.font.metrics(ch, px);
            if m.width > 0 && m.height > 0 {
                let x0 = pen + m.xmin as f32;
                // ymin is the offset of the bitmap bottom from the baseline, y-up.
                let y1 = -(m.ymin as f32);
                left = left.min(x0);
                right = right.max(x0 + m.width as f32);
                top = top.min(y1 - m.height as f32);
                bottom = bottom.max(y1);
            }
            pen += m.advance_width;
        }
        if !left.is_finite() {
            return None;
        }
        Some(TextBounds {
            left,
            top,
            width: right - left,
            height: bottom - top,
        })
    }
}

/// Deterministic provider that derives every metric from the pixel size.
///
/// Useful for headless hosts without font files and for layout tests.
#[derive(Clone, Copy, Debug)]
pub struct FixedMetricsProvider {
    pub advance_ratio: f32,
    pub ink_width_ratio: f32,
    pub ascent_ratio: f32,
    pub descent_ratio: f32,
}

impl Default for FixedMetricsProvider {
    fn default() -> Self {
        Self {
            advance_ratio: 0.6,
            ink_width_ratio: 0.5,
            ascent_ratio: 0.8,
            descent_ratio: 0.2,
        }
    }
}

impl TextProvider for FixedMetricsProvider {
    fn line_metrics(&self, px: f32) -> Option<LineMetrics> {
        Some(LineMetrics {
            ascent: px * self.ascent_ratio,
            descent: px * self.descent_ratio,
            line_gap: 0.0,
        })
    }

    fn text_bounds(&self, text: &str, px: f32) -> Option<TextBounds> {
        let inked = text.chars().filter(|c| !c.is_whitespace()).count();
        if inked == 0 {
            return None;
        }
        let n = text.chars().count() as f32;
        let inset = px * (self.advance_ratio - self.ink_width_ratio) * 0.5;
        Some(TextBounds {
            left: inset,
            top: -px * self.ascent_ratio,
            width: px * self.advance_ratio * (n - 1.0) + px * self.ink_width_ratio,
            height: px * self.ascent_ratio,
        })
    }
}
