use std::sync::Arc;

use engine_core::{FixedMetricsProvider, FontdueProvider, TextProvider};
use lattice_config::FontConfig;

use crate::error::{LatticeError, Result};

/// Text provider for the configured font, or fixed metrics when none is set.
pub fn text_provider_from_config(font: &FontConfig) -> Result<Arc<dyn TextProvider>> {
    match &font.path {
        Some(path) => {
            let provider = FontdueProvider::from_file(path)
                .map_err(|e| LatticeError::Font(format!("{e:#}")))?;
            log::info!("measuring glyphs with {}", path.display());
            Ok(Arc::new(provider))
        }
        None => Ok(Arc::new(FixedMetricsProvider::default())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_font_uses_fixed_metrics() {
        let provider = text_provider_from_config(&FontConfig::default()).unwrap();
        let fixed = FixedMetricsProvider::default();
        assert_eq!(provider.line_metrics(36.0), fixed.line_metrics(36.0));
        assert_eq!(provider.text_bounds("5", 36.0), fixed.text_bounds("5", 36.0));
    }

    #[test]
    fn missing_font_is_a_font_error() {
        let config = FontConfig {
            path: Some("/nonexistent/lattice.ttf".into()),
        };
        match text_provider_from_config(&config) {
            Err(LatticeError::Font(msg)) => assert!(msg.contains("lattice.ttf")),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("expected a font error"),
        }
    }
}
