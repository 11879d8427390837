use std::sync::Arc;

use engine_core::{ColorLinPremul, Painter, Stroke, TextProvider, TextRun, Transform2D};
use engine_core::dpi::sanitize_density;
use lattice_config::LatticeConfig;

use crate::attrs::{
    ATTR_BOTTOM_COLOR, ATTR_BOTTOM_COLOR_STATIC, ATTR_TEXT_COLOR, AttributeSet,
    DEFAULT_BOTTOM_COLOR, DEFAULT_BOTTOM_COLOR_STATIC, DEFAULT_TEXT_COLOR,
};
use crate::error::{LatticeError, Result};
use crate::filter::LengthFilter;
use crate::metrics::{self, BaseMetrics, Metrics, Point};
use crate::widget::{Invalidation, MeasureSpec, Size, Widget};

pub const DEFAULT_ITEM_COUNT: usize = 6;
/// Largest accepted slot count.
pub const MAX_ITEM_COUNT: usize = 256;

fn check_item_count(count: usize) -> Result<()> {
    if (1..=MAX_ITEM_COUNT).contains(&count) {
        Ok(())
    } else {
        Err(LatticeError::InvalidItemCount(count))
    }
}

/// Below this scale the whole drawing is shifted down to hide a baseline
/// error that grows as the widget shrinks.
pub const SMALL_SCALE_SHIFT_THRESHOLD: f32 = 0.7;
/// Shift magnitude, multiplied by `(1 - scale)²`.
pub const SMALL_SCALE_SHIFT_PX: f32 = 50.0;

/// Vertical correction applied at draw time for a given scale.
pub fn small_scale_shift(scale: f32) -> f32 {
    if scale < SMALL_SCALE_SHIFT_THRESHOLD {
        let d = 1.0 - scale;
        SMALL_SCALE_SHIFT_PX * d * d
    } else {
        0.0
    }
}

/// Construction parameters. Colors are packed `0xAARRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatticeStyle {
    /// Device pixels per density-independent unit.
    pub density: f32,
    pub item_count: usize,
    pub bottom_color: u32,
    pub bottom_color_static: u32,
    pub text_color: u32,
}

impl Default for LatticeStyle {
    fn default() -> Self {
        Self {
            density: 1.0,
            item_count: DEFAULT_ITEM_COUNT,
            bottom_color: DEFAULT_BOTTOM_COLOR,
            bottom_color_static: DEFAULT_BOTTOM_COLOR_STATIC,
            text_color: DEFAULT_TEXT_COLOR,
        }
    }
}

impl LatticeStyle {
    /// Read colors from a scoped attribute lookup; the lookup is released
    /// before this returns.
    pub fn from_attributes(attrs: &AttributeSet, density: f32) -> Self {
        let styled = attrs.obtain();
        Self {
            density,
            item_count: DEFAULT_ITEM_COUNT,
            bottom_color: styled.color(ATTR_BOTTOM_COLOR, DEFAULT_BOTTOM_COLOR),
            bottom_color_static: styled
                .color(ATTR_BOTTOM_COLOR_STATIC, DEFAULT_BOTTOM_COLOR_STATIC),
            text_color: styled.color(ATTR_TEXT_COLOR, DEFAULT_TEXT_COLOR),
        }
    }
}

/// Behaviour hints for the host text field the widget is bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputTraits {
    pub single_line: bool,
    pub long_clickable: bool,
    pub selectable: bool,
    pub draws_background: bool,
}

/// Fixed-slot text entry: one character per cell, an underline under every
/// cell, uniformly scaled to the size the parent grants.
pub struct LatticeInput {
    provider: Arc<dyn TextProvider>,
    content: String,
    filter: LengthFilter,
    item_count: usize,
    focused: bool,

    base: BaseMetrics,
    metrics: Metrics,
    scale: f32,
    measured: Option<Size>,

    bottom_color: ColorLinPremul,
    bottom_color_static: ColorLinPremul,
    text_color: ColorLinPremul,

    text_positions: Vec<Option<Point>>,
    underline_positions: Vec<Point>,

    invalidation: Invalidation,
}

impl LatticeInput {
    pub fn new(style: LatticeStyle, provider: Arc<dyn TextProvider>) -> Result<Self> {
        check_item_count(style.item_count)?;
        let base = BaseMetrics::from_density(sanitize_density(style.density));
        let mut input = Self {
            provider,
            content: String::new(),
            filter: LengthFilter::new(style.item_count),
            item_count: style.item_count,
            focused: false,
            base,
            metrics: base.scaled(1.0),
            scale: 1.0,
            measured: None,
            bottom_color: ColorLinPremul::from_argb(style.bottom_color),
            bottom_color_static: ColorLinPremul::from_argb(style.bottom_color_static),
            text_color: ColorLinPremul::from_argb(style.text_color),
            text_positions: Vec::new(),
            underline_positions: Vec::new(),
            invalidation: Invalidation { layout: true, paint: true },
        };
        input.recompute_underline_positions();
        input.recompute_text_positions();
        Ok(input)
    }

    pub fn from_attributes(
        attrs: &AttributeSet,
        density: f32,
        provider: Arc<dyn TextProvider>,
    ) -> Result<Self> {
        Self::new(LatticeStyle::from_attributes(attrs, density), provider)
    }

    pub fn from_config(config: &LatticeConfig, provider: Arc<dyn TextProvider>) -> Result<Self> {
        let attrs = AttributeSet::from_config(&config.widget);
        let mut input = Self::from_attributes(&attrs, config.display.density, provider)?;
        input.set_item_count(config.widget.item_count)?;
        Ok(input)
    }

    /// Change the number of slots. Installs a matching length filter and
    /// drops content beyond the new count.
    pub fn set_item_count(&mut self, count: usize) -> Result<()> {
        check_item_count(count)?;
        self.item_count = count;
        self.filter = LengthFilter::new(count);
        let kept = self.filter.apply(&self.content).len();
        self.content.truncate(kept);
        self.recompute_underline_positions();
        self.recompute_text_positions();
        self.invalidation.layout = true;
        self.invalidation.paint = true;
        Ok(())
    }

    /// Replace the content programmatically.
    pub fn set_text(&mut self, text: &str) {
        self.update_content(text);
    }

    fn update_content(&mut self, text: &str) {
        let accepted = self.filter.apply(text);
        if accepted.len() < text.len() {
            log::trace!("content clamped to {} characters", self.item_count);
        }
        self.content.clear();
        self.content.push_str(accepted);
        self.recompute_text_positions();
        self.invalidation.paint = true;
    }

    fn recompute_text_positions(&mut self) {
        self.text_positions = metrics::text_positions(
            self.provider.as_ref(),
            &self.content,
            self.item_count,
            &self.metrics,
            self.scale,
        );
    }

    fn recompute_underline_positions(&mut self) {
        self.underline_positions =
            metrics::underline_positions(self.item_count, &self.metrics, self.scale);
    }

    pub fn text(&self) -> &str {
        &self.content
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Length constraint hosts apply to edits before committing them.
    pub fn filter(&self) -> LengthFilter {
        self.filter
    }

    pub fn has_focus(&self) -> bool {
        self.focused
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn base_metrics(&self) -> &BaseMetrics {
        &self.base
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Size reported by the last measurement, if any.
    pub fn measured_size(&self) -> Option<Size> {
        self.measured
    }

    pub fn text_positions(&self) -> &[Option<Point>] {
        &self.text_positions
    }

    pub fn underline_positions(&self) -> &[Point] {
        &self.underline_positions
    }

    pub fn underline_color(&self) -> ColorLinPremul {
        if self.focused {
            self.bottom_color
        } else {
            self.bottom_color_static
        }
    }

    /// Return and clear pending layout/paint requests.
    pub fn take_invalidation(&mut self) -> Invalidation {
        std::mem::take(&mut self.invalidation)
    }

    pub fn input_traits(&self) -> InputTraits {
        InputTraits {
            single_line: true,
            long_clickable: false,
            selectable: false,
            draws_background: false,
        }
    }

    /// Resolve the scale and size for a pair of constraints without mutating state.
    fn resolve(&self, width: MeasureSpec, height: MeasureSpec) -> (f32, Size) {
        let natural_w = self.base.natural_width(self.item_count);
        let natural_h = self.base.natural_height();

        let (scale, w, h) = match (width.exact(), height.exact()) {
            (Some(w), Some(h)) => {
                let (w, h) = (w as f32, h as f32);
                if w / h > natural_w / natural_h {
                    let s = h / natural_h;
                    (Some(s), (natural_w * s).trunc(), h)
                } else {
                    let s = w / natural_w;
                    (Some(s), w, (natural_h * s).trunc())
                }
            }
            (Some(w), None) => {
                let s = w as f32 / natural_w;
                (Some(s), w as f32, (natural_h * s).trunc())
            }
            (None, Some(h)) => {
                let s = h as f32 / natural_h;
                (Some(s), (natural_w * s).trunc(), h as f32)
            }
            (None, None) => (None, natural_w, natural_h),
        };

        match scale {
            Some(s) if s.is_finite() && s > 0.0 => (s, Size::new(w as u32, h as u32)),
            Some(s) => {
                log::warn!(
                    "rejecting scale {s} for constraints {width:?} x {height:?}; keeping {}",
                    self.scale
                );
                let keep = self.scale;
                let size = Size::new(
                    (natural_w * keep).trunc() as u32,
                    (natural_h * keep).trunc() as u32,
                );
                (keep, size)
            }
            None => (self.scale, Size::new(natural_w as u32, natural_h as u32)),
        }
    }
}

impl Widget for LatticeInput {
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        let (scale, size) = self.resolve(width, height);
        self.scale = scale;
        self.metrics = self.base.scaled(scale);
        self.recompute_underline_positions();
        self.recompute_text_positions();
        self.measured = Some(size);
        self.invalidation.layout = false;
        log::debug!(
            "lattice measured: scale={} size={}x{} text_size={}",
            scale,
            size.width,
            size.height,
            self.metrics.text_size
        );
        size
    }

    fn draw(&self, painter: &mut Painter, z: i32) {
        if self.measured.is_none() {
            log::debug!("drawing lattice before measurement; using natural metrics");
        }
        let shift = small_scale_shift(self.scale);
        if shift != 0.0 {
            painter.push_transform(Transform2D::translate(0.0, shift));
        }

        let stroke = Stroke { width: self.base.stroke_width };
        let line_color = self.underline_color();
        let mut chars = self.content.chars();
        for i in 0..self.item_count {
            if let (Some(ch), Some(pos)) = (chars.next(), self.text_positions[i]) {
                painter.text(
                    TextRun {
                        text: ch.to_string(),
                        pos,
                        size: self.metrics.text_size,
                        color: self.text_color,
                    },
                    z + 1,
                );
            }
            let [x, y] = self.underline_positions[i];
            painter.line([x, y], [x + self.metrics.line_width, y], stroke, line_color, z);
        }

        if shift != 0.0 {
            painter.pop_transform();
        }
    }

    fn on_content_changed(&mut self, text: &str) {
        self.update_content(text);
    }

    fn on_focus_changed(&mut self, focused: bool) {
        if self.focused != focused {
            self.focused = focused;
            self.invalidation.paint = true;
        }
    }
}
