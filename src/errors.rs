//! Error types with diagnostics using miette
//!
//! Layout itself never fails: degenerate geometry resolves to zero vectors or
//! missing connectors. Errors only come from bad configuration or a viewport
//! that cannot carry a layout.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

// ============================================================================
// Configuration Errors
// ============================================================================

/// A configuration field failed validation
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
#[error("invalid config field `{field}`: {source}")]
#[diagnostic(
    code(tooltip_layout::config::invalid_field),
    help("layout parameters must be finite; counts and divisors must also be positive")
)]
pub struct ConfigError {
    pub field: &'static str,
    #[source]
    pub source: NumericError,
}

impl ConfigError {
    pub fn new(field: &'static str, source: NumericError) -> Self {
        Self { field, source }
    }
}

// ============================================================================
// Layout Errors
// ============================================================================

/// Errors surfaced by [`crate::LayoutEngine`]
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    InvalidConfig(#[from] ConfigError),

    #[error("invalid viewport: {width}x{height} px")]
    #[diagnostic(
        code(tooltip_layout::viewport::invalid_size),
        help("the host must report a finite, non-empty viewport before a layout pass")
    )]
    InvalidViewport { width: f64, height: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_message_names_field() {
        let err = ConfigError::new("spread_radius", NumericError::Negative);
        insta::assert_snapshot!(err.to_string(), @"invalid config field `spread_radius`: value is negative");
    }

    #[test]
    fn viewport_error_message() {
        let err = LayoutError::InvalidViewport { width: 0.0, height: 600.0 };
        insta::assert_snapshot!(err.to_string(), @"invalid viewport: 0x600 px");
    }

    #[test]
    fn config_error_converts_transparently() {
        let err: LayoutError = ConfigError::new("max_working_set", NumericError::Zero).into();
        insta::assert_snapshot!(err.to_string(), @"invalid config field `max_working_set`: value is zero");
        assert_eq!(
            err.code().map(|c| c.to_string()).as_deref(),
            Some("tooltip_layout::config::invalid_field")
        );
    }
}
