//! Error types for the lattice widget.

use lattice_config::ConfigError;
use thiserror::Error;

/// Result type for widget operations.
pub type Result<T> = std::result::Result<T, LatticeError>;

/// Errors that can occur while configuring a lattice widget.
#[derive(Error, Debug)]
pub enum LatticeError {
    /// Slot counts must lie in `1..=MAX_ITEM_COUNT`.
    #[error("invalid item count {0}: expected 1 to {max} slots", max = crate::MAX_ITEM_COUNT)]
    InvalidItemCount(usize),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Font could not be loaded.
    #[error("font error: {0}")]
    Font(String),
}
