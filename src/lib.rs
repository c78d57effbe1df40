//! Force-directed placement of marker labels on interactive maps.
//!
//! Labels repel each other and are pulled toward their own marker; a short
//! annealing run settles them, a viewport clamp keeps them readable at the
//! edges, and each label gets a connector line back to its marker.
//!
//! The map itself stays outside the crate. A host implements the traits in
//! [`host`] (projection, label elements, connector lines) and drives a
//! [`LayoutEngine`]:
//!
//! ```no_run
//! use tooltip_layout::{LayoutConfig, LayoutEngine, MapEvent, headless::HeadlessMap};
//!
//! # fn main() -> Result<(), tooltip_layout::LayoutError> {
//! let mut map = HeadlessMap::new(800.0, 600.0);
//! let marker = map.add_marker(48.85, 2.35, "Paris");
//!
//! let mut engine = LayoutEngine::initialize(map, LayoutConfig::default())?;
//! engine.register_pair(marker);
//! engine.run_layout_pass()?;
//! // next turn of the host's event loop, once labels are rendered:
//! engine.run_deferred();
//!
//! engine.handle_event(MapEvent::ZoomStart)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod engine;
pub mod errors;
pub mod headless;
pub mod host;
pub mod layout;
pub mod log;
pub mod registry;
pub mod types;

pub use config::{LayoutConfig, StepPolicy};
pub use engine::LayoutEngine;
pub use errors::{ConfigError, LayoutError};
pub use host::{ConnectorLayer, ConnectorStyle, LabelBinding, LabelDirection, LabelSurface, MapEvent, MapHost, MapView};
pub use layout::PassReport;
pub use types::{Color, LatLng, NumericError, Point, Px, PtPx, Size, SizePx, Viewport};
