//! Capabilities the layout engine consumes from the map host.
//!
//! The engine never renders anything. Projection, label elements and
//! connector lines all belong to the host; these traits are the seam.

use std::hash::Hash;

use crate::types::{Color, LatLng, PtPx, SizePx, Viewport};

/// Viewport projection and extent.
pub trait MapView {
    /// Marker handle. Two handles that compare equal are the same marker.
    type Marker: Clone + Eq + Hash;

    /// Geographic position of a marker.
    fn marker_lat_lng(&self, marker: &Self::Marker) -> LatLng;

    /// Project a geographic coordinate to layer pixels under the current view.
    fn project(&self, lat_lng: LatLng) -> PtPx;

    /// Visible bounds in layer pixels.
    fn viewport_bounds(&self) -> Viewport;

    /// Size of the window the map is displayed in. Drives the force-model
    /// area and the starting temperature.
    fn viewport_size(&self) -> SizePx;
}

/// How a label is rebound when its marker is registered for layout.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelBinding {
    /// Class name the host adds to the label element
    pub class_name: String,
    /// Label stays visible without hover
    pub permanent: bool,
    /// Label receives pointer events
    pub interactive: bool,
    /// Side the host anchors the element to before the engine moves it
    pub direction: LabelDirection,
    /// Label follows the pointer
    pub sticky: bool,
}

/// Side the host would place a label on by itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelDirection {
    Left,
    Right,
    Top,
    Bottom,
    Center,
    Auto,
}

/// Label elements attached to markers.
pub trait LabelSurface: MapView {
    /// Whether the marker currently has a label bound.
    fn has_label(&self, marker: &Self::Marker) -> bool;

    /// Replace the marker's label binding, keeping its content, pane, offset
    /// and opacity. Returns true when the new label element exists.
    fn rebind_label(&mut self, marker: &Self::Marker, binding: &LabelBinding) -> bool;

    /// Current top-left of the label element in layer pixels.
    fn label_position(&self, marker: &Self::Marker) -> Option<PtPx>;

    fn set_label_position(&mut self, marker: &Self::Marker, position: PtPx);

    /// Rendered size of the label. None until the element has been through a
    /// render pass.
    fn label_size(&self, marker: &Self::Marker) -> Option<SizePx>;

    fn bring_label_to_front(&mut self, marker: &Self::Marker);
}

/// Stroke style of a connector line.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorStyle {
    pub color: Color,
}

/// Connector lines drawn by the host.
pub trait ConnectorLayer {
    type Connector: Clone + PartialEq;

    /// Create a line from `from` to `to` (layer pixels). Not yet visible.
    fn create_line(&mut self, from: PtPx, to: PtPx) -> Self::Connector;

    fn add_to_view(&mut self, connector: &Self::Connector);

    fn remove_from_view(&mut self, connector: &Self::Connector);

    fn set_style(&mut self, connector: &Self::Connector, style: &ConnectorStyle);
}

/// Everything a [`crate::LayoutEngine`] needs from its host.
pub trait MapHost: LabelSurface + ConnectorLayer {}

impl<T: LabelSurface + ConnectorLayer> MapHost for T {}

/// Host events the engine reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent<M> {
    /// A zoom animation is starting; connectors are about to be stale.
    ZoomStart,
    /// Zoom settled; positions must be recomputed.
    ZoomEnd,
    /// View was reset or resized.
    ViewReset,
    MouseOver(M),
    MouseOut(M),
}
