//! Cell metrics and per-slot draw positions.

use engine_core::TextProvider;
use engine_core::dpi::{dp_to_px, sanitize_density};

pub const DEFAULT_TEXT_SIZE_DP: f32 = 36.0;
pub const DEFAULT_ITEM_WIDTH_DP: f32 = 50.0;
pub const DEFAULT_ITEM_HEIGHT_DP: f32 = 70.0;
pub const DEFAULT_ITEM_LINE_WIDTH_DP: f32 = 30.0;
pub const UNDERLINE_STROKE_DP: f32 = 1.0;

/// Extra drop from the ascent line to the glyph baseline, in pixels at scale 1.
pub const BASELINE_OFFSET_PX: f32 = 30.0;
/// Distance of the underline above the cell bottom, in pixels at scale 1.
pub const UNDERLINE_INSET_PX: f32 = 6.0;

/// A point in widget-local device pixels.
pub type Point = [f32; 2];

/// Unscaled cell metrics in device pixels, fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BaseMetrics {
    pub text_size: f32,
    pub item_width: f32,
    pub item_height: f32,
    pub line_width: f32,
    pub stroke_width: f32,
}

impl BaseMetrics {
    pub fn from_density(density: f32) -> Self {
        Self {
            text_size: dp_to_px(DEFAULT_TEXT_SIZE_DP, density),
            item_width: dp_to_px(DEFAULT_ITEM_WIDTH_DP, density),
            item_height: dp_to_px(DEFAULT_ITEM_HEIGHT_DP, density),
            line_width: dp_to_px(DEFAULT_ITEM_LINE_WIDTH_DP, density),
            stroke_width: UNDERLINE_STROKE_DP * sanitize_density(density),
        }
    }

    /// Natural (scale 1) widget width for `item_count` slots.
    pub fn natural_width(&self, item_count: usize) -> f32 {
        self.item_width * item_count as f32
    }

    pub fn natural_height(&self) -> f32 {
        self.item_height
    }

    /// Apply a uniform scale. Cell lengths are truncated to whole pixels;
    /// the text size stays fractional.
    pub fn scaled(&self, scale: f32) -> Metrics {
        Metrics {
            text_size: self.text_size * scale,
            item_width: (self.item_width * scale).trunc(),
            item_height: (self.item_height * scale).trunc(),
            line_width: (self.line_width * scale).trunc(),
        }
    }
}

/// Scale-adjusted metrics used for drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metrics {
    pub text_size: f32,
    pub item_width: f32,
    pub item_height: f32,
    pub line_width: f32,
}

/// Glyph baseline positions, one entry per slot. Slots without a character are `None`.
pub fn text_positions(
    provider: &dyn TextProvider,
    content: &str,
    item_count: usize,
    metrics: &Metrics,
    scale: f32,
) -> Vec<Option<Point>> {
    let mut out = vec![None; item_count];
    if content.is_empty() {
        return out;
    }
    let size = metrics.text_size;
    let ascent = provider
        .line_metrics(size)
        .map(|m| m.ascent)
        .unwrap_or(size * 0.8);
    let y = ascent.trunc() + (BASELINE_OFFSET_PX * scale).trunc();
    let mut buf = [0u8; 4];
    for (i, ch) in content.chars().take(item_count).enumerate() {
        let glyph = ch.encode_utf8(&mut buf);
        let glyph_width = provider
            .text_bounds(glyph, size)
            .map(|b| b.width)
            .unwrap_or(0.0);
        let offset_x = ((metrics.item_width - glyph_width) / 2.0).trunc();
        out[i] = Some([i as f32 * metrics.item_width + offset_x, y]);
    }
    out
}

/// Underline start positions, one entry per slot, independent of content.
pub fn underline_positions(item_count: usize, metrics: &Metrics, scale: f32) -> Vec<Point> {
    let offset_x = ((metrics.item_width - metrics.line_width) / 2.0).trunc();
    let y = metrics.item_height - (UNDERLINE_INSET_PX * scale).trunc();
    (0..item_count)
        .map(|i| [i as f32 * metrics.item_width + offset_x, y])
        .collect()
}
