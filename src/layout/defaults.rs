//! Default layout parameters (pixels unless stated otherwise)

use crate::types::Color;

/// Radius of the initial label spread around each anchor.
pub const SPREAD_RADIUS: f64 = 50.0;
/// Number of angular sectors the initial spread cycles through.
pub const SPREAD_SECTORS: usize = 6;
/// Labels beyond this registry index are left out of forces and clamping.
pub const MAX_WORKING_SET: usize = 400;
/// Up to this many labels, anneal with `FULL_STEPS`.
pub const FULL_STEPS_MAX_LABELS: usize = 200;
/// From this many labels on, anneal with `MINIMAL_STEPS`.
pub const MINIMAL_STEPS_MIN_LABELS: usize = 400;
pub const FULL_STEPS: usize = 50;
pub const REDUCED_STEPS: usize = 10;
pub const MINIMAL_STEPS: usize = 1;
/// Starting temperature is `ceil(viewport_width / TEMPERATURE_DIVISOR)`.
pub const TEMPERATURE_DIVISOR: f64 = 10.0;
/// Force-model area is `viewport_width * viewport_height / AREA_DIVISOR`.
pub const AREA_DIVISOR: f64 = 10.0;
/// Connector endpoint inset from the label's top-left corner.
pub const CONNECTOR_INSET_X: f64 = -5.0;
pub const CONNECTOR_INSET_Y: f64 = 2.0;
pub const CONNECTOR_COLOR: Color = Color::Rgb(0x00, 0x0F, 0xFF);
pub const CONNECTOR_HIGHLIGHT_COLOR: Color = Color::Rgb(0xFF, 0x00, 0x00);
/// CSS class the host applies to labels bound for layout.
pub const LABEL_CLASS_NAME: &str = "tooltip-layout";
