//! Host-facing widget contract.
//!
//! The host runs a two-pass cycle: `measure` with the parent's constraints,
//! then `draw` into a [`Painter`]. Content and focus changes arrive as
//! callbacks between passes. Toolkit glue lives in the host adapter.

use engine_core::Painter;

/// One dimension of a parent-imposed size constraint, in device pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MeasureSpec {
    /// The parent decided the size.
    Exactly(u32),
    /// The child may be as large as it wants up to this size.
    AtMost(u32),
    /// No constraint.
    #[default]
    Unspecified,
}

impl MeasureSpec {
    /// The exact size, if the parent imposed one.
    pub fn exact(self) -> Option<u32> {
        match self {
            MeasureSpec::Exactly(px) => Some(px),
            _ => None,
        }
    }
}

impl From<lattice_config::Constraint> for MeasureSpec {
    fn from(c: lattice_config::Constraint) -> Self {
        match c {
            lattice_config::Constraint::Exact { px } => MeasureSpec::Exactly(px),
            lattice_config::Constraint::AtMost { px } => MeasureSpec::AtMost(px),
            lattice_config::Constraint::Unspecified => MeasureSpec::Unspecified,
        }
    }
}

/// Measured size in device pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Pending requests a widget raises towards its host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Invalidation {
    /// Measurement inputs changed; the host should measure again.
    pub layout: bool,
    /// Visual state changed; the host should draw again.
    pub paint: bool,
}

impl Invalidation {
    pub fn is_clean(&self) -> bool {
        !self.layout && !self.paint
    }
}

/// Capability interface a host drives.
pub trait Widget {
    /// Compute the final size for the given constraints.
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size;

    /// Record draw commands in local coordinates (origin at the top-left corner).
    fn draw(&self, painter: &mut Painter, z: i32);

    /// The displayed text changed.
    fn on_content_changed(&mut self, text: &str);

    /// Input focus moved to or away from the widget.
    fn on_focus_changed(&mut self, focused: bool);
}
