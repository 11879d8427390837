//! lattice-input: a fixed-slot text entry widget (PIN-code style).
//!
//! Each character occupies one cell with an underline beneath it. The widget
//! measures itself against parent constraints, scales uniformly to fit, and
//! records its drawing into an `engine_core::Painter`.

pub mod attrs;
pub mod error;
pub mod filter;
pub mod metrics;
pub mod widget;

mod lattice_input;
mod provider;

pub use attrs::{AttributeSet, StyledAttributes};
pub use error::{LatticeError, Result};
pub use filter::LengthFilter;
pub use lattice_input::{
    DEFAULT_ITEM_COUNT, InputTraits, LatticeInput, LatticeStyle, MAX_ITEM_COUNT,
    SMALL_SCALE_SHIFT_PX, SMALL_SCALE_SHIFT_THRESHOLD, small_scale_shift,
};
pub use metrics::{BaseMetrics, Metrics, Point};
pub use provider::text_provider_from_config;
pub use widget::{Invalidation, MeasureSpec, Size, Widget};
