//! In-memory map host.
//!
//! `HeadlessMap` implements every host trait without a renderer: a linear
//! projection around a fixed centre, labels with a text-derived size, and
//! connector lines kept in a list. It backs the integration tests and the
//! demo, and is a starting point for hosts that do their own drawing.

use crate::host::{ConnectorLayer, ConnectorStyle, LabelBinding, LabelSurface, MapView};
use crate::types::{LatLng, Offset, Point, Px, PtPx, Size, SizePx, Viewport};

/// Approximate advance of one label character
const CHAR_WIDTH: f64 = 7.0;
/// Horizontal padding inside a label box
const LABEL_PADDING: f64 = 12.0;
const LABEL_HEIGHT: f64 = 18.0;
/// World width in pixels at zoom 0
const TILE_SIZE: f64 = 256.0;

/// Marker handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerId(pub usize);

/// Connector handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineId(pub usize);

#[derive(Debug, Clone)]
pub struct HeadlessMarker {
    pub lat_lng: LatLng,
    pub label: Option<HeadlessLabel>,
}

#[derive(Debug, Clone)]
pub struct HeadlessLabel {
    pub text: String,
    /// Top-left in layer pixels; None until first positioned
    pub position: Option<PtPx>,
    /// Whether the element has been through a render pass
    pub rendered: bool,
    pub binding: Option<LabelBinding>,
    /// Stacking order; higher is in front
    pub z_index: u32,
}

impl HeadlessLabel {
    fn new(text: String, rendered: bool) -> Self {
        Self { text, position: None, rendered, binding: None, z_index: 0 }
    }

    /// Box size derived from the text length.
    pub fn size(&self) -> SizePx {
        let chars = self.text.chars().count() as f64;
        Size::new(Px(chars * CHAR_WIDTH + LABEL_PADDING), Px(LABEL_HEIGHT))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessLine {
    pub from: PtPx,
    pub to: PtPx,
    pub style: Option<ConnectorStyle>,
    pub in_view: bool,
}

/// A map without a screen.
#[derive(Debug, Clone)]
pub struct HeadlessMap {
    window: SizePx,
    center: LatLng,
    zoom: f64,
    pan: Offset<Px>,
    measure_on_bind: bool,
    markers: Vec<HeadlessMarker>,
    lines: Vec<HeadlessLine>,
    next_z: u32,
}

impl HeadlessMap {
    /// A `width` x `height` window centred on (0, 0) at zoom 0.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            window: Size::new(Px(width), Px(height)),
            center: LatLng::default(),
            zoom: 0.0,
            pan: Offset::new(Px(0.0), Px(0.0)),
            measure_on_bind: true,
            markers: Vec::new(),
            lines: Vec::new(),
            next_z: 0,
        }
    }

    pub fn with_center(mut self, center: LatLng, zoom: f64) -> Self {
        self.center = center;
        self.zoom = zoom;
        self
    }

    /// When false, rebound labels report no size until [`render`](Self::render).
    pub fn with_measure_on_bind(mut self, measure: bool) -> Self {
        self.measure_on_bind = measure;
        self
    }

    /// Add a marker with a rendered label. Returns its handle.
    pub fn add_marker(&mut self, lat: f64, lng: f64, text: impl Into<String>) -> MarkerId {
        self.markers.push(HeadlessMarker {
            lat_lng: LatLng::new(lat, lng),
            label: Some(HeadlessLabel::new(text.into(), true)),
        });
        MarkerId(self.markers.len() - 1)
    }

    /// Add a marker with no label bound.
    pub fn add_bare_marker(&mut self, lat: f64, lng: f64) -> MarkerId {
        self.markers.push(HeadlessMarker { lat_lng: LatLng::new(lat, lng), label: None });
        MarkerId(self.markers.len() - 1)
    }

    pub fn remove_label(&mut self, marker: MarkerId) {
        if let Some(m) = self.markers.get_mut(marker.0) {
            m.label = None;
        }
    }

    /// Complete a render pass: every label becomes measurable.
    pub fn render(&mut self) {
        for label in self.markers.iter_mut().filter_map(|m| m.label.as_mut()) {
            label.rendered = true;
        }
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom;
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan = Offset::new(self.pan.dx + Px(dx), self.pan.dy + Px(dy));
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.window = Size::new(Px(width), Px(height));
    }

    pub fn marker(&self, marker: MarkerId) -> Option<&HeadlessMarker> {
        self.markers.get(marker.0)
    }

    pub fn label(&self, marker: MarkerId) -> Option<&HeadlessLabel> {
        self.marker(marker).and_then(|m| m.label.as_ref())
    }

    /// Top-left and size of a positioned label.
    pub fn label_box(&self, marker: MarkerId) -> Option<(PtPx, SizePx)> {
        let label = self.label(marker)?;
        Some((label.position?, label.size()))
    }

    pub fn line(&self, line: LineId) -> Option<&HeadlessLine> {
        self.lines.get(line.0)
    }

    pub fn lines_in_view(&self) -> impl Iterator<Item = &HeadlessLine> {
        self.lines.iter().filter(|l| l.in_view)
    }

    /// Pixels per degree at the current zoom.
    fn scale(&self) -> f64 {
        TILE_SIZE * self.zoom.exp2() / 360.0
    }

    fn label_mut(&mut self, marker: &MarkerId) -> Option<&mut HeadlessLabel> {
        self.markers.get_mut(marker.0).and_then(|m| m.label.as_mut())
    }
}

impl MapView for HeadlessMap {
    type Marker = MarkerId;

    fn marker_lat_lng(&self, marker: &MarkerId) -> LatLng {
        self.markers.get(marker.0).map(|m| m.lat_lng).unwrap_or_default()
    }

    fn project(&self, lat_lng: LatLng) -> PtPx {
        let scale = self.scale();
        Point::new(
            Px((lat_lng.lng - self.center.lng) * scale) + self.window.w / 2.0,
            Px((self.center.lat - lat_lng.lat) * scale) + self.window.h / 2.0,
        )
    }

    fn viewport_bounds(&self) -> Viewport {
        let nw = Point::new(self.pan.dx, self.pan.dy);
        let se = Point::new(self.pan.dx + self.window.w, self.pan.dy + self.window.h);
        Viewport::new(nw, se)
    }

    fn viewport_size(&self) -> SizePx {
        self.window
    }
}

impl LabelSurface for HeadlessMap {
    fn has_label(&self, marker: &MarkerId) -> bool {
        self.label(*marker).is_some()
    }

    fn rebind_label(&mut self, marker: &MarkerId, binding: &LabelBinding) -> bool {
        let rendered = self.measure_on_bind;
        let Some(label) = self.label_mut(marker) else {
            return false;
        };
        let mut rebound = HeadlessLabel::new(std::mem::take(&mut label.text), rendered);
        rebound.binding = Some(binding.clone());
        *label = rebound;
        true
    }

    fn label_position(&self, marker: &MarkerId) -> Option<PtPx> {
        self.label(*marker).and_then(|l| l.position)
    }

    fn set_label_position(&mut self, marker: &MarkerId, position: PtPx) {
        if let Some(label) = self.label_mut(marker) {
            label.position = Some(position);
        }
    }

    fn label_size(&self, marker: &MarkerId) -> Option<SizePx> {
        self.label(*marker).filter(|l| l.rendered).map(HeadlessLabel::size)
    }

    fn bring_label_to_front(&mut self, marker: &MarkerId) {
        self.next_z += 1;
        let z = self.next_z;
        if let Some(label) = self.label_mut(marker) {
            label.z_index = z;
        }
    }
}

impl ConnectorLayer for HeadlessMap {
    type Connector = LineId;

    fn create_line(&mut self, from: PtPx, to: PtPx) -> LineId {
        self.lines.push(HeadlessLine { from, to, style: None, in_view: false });
        LineId(self.lines.len() - 1)
    }

    fn add_to_view(&mut self, connector: &LineId) {
        if let Some(line) = self.lines.get_mut(connector.0) {
            line.in_view = true;
        }
    }

    fn remove_from_view(&mut self, connector: &LineId) {
        if let Some(line) = self.lines.get_mut(connector.0) {
            line.in_view = false;
        }
    }

    fn set_style(&mut self, connector: &LineId, style: &ConnectorStyle) {
        if let Some(line) = self.lines.get_mut(connector.0) {
            line.style = Some(style.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::LabelDirection;
    use crate::types::px;

    fn binding() -> LabelBinding {
        LabelBinding {
            class_name: "tooltip-layout".into(),
            permanent: true,
            interactive: true,
            direction: LabelDirection::Left,
            sticky: false,
        }
    }

    #[test]
    fn centre_projects_to_window_middle() {
        let map = HeadlessMap::new(800.0, 600.0).with_center(LatLng::new(10.0, 20.0), 3.0);
        assert_eq!(map.project(LatLng::new(10.0, 20.0)), px(400.0, 300.0));
    }

    #[test]
    fn north_is_up_and_east_is_right() {
        let map = HeadlessMap::new(800.0, 600.0);
        let p = map.project(LatLng::new(1.0, 1.0));
        assert!(p.x > Px(400.0));
        assert!(p.y < Px(300.0));
    }

    #[test]
    fn zoom_doubles_distances() {
        let mut map = HeadlessMap::new(800.0, 600.0);
        let a = map.project(LatLng::new(0.0, 10.0)).x - Px(400.0);
        map.set_zoom(1.0);
        let b = map.project(LatLng::new(0.0, 10.0)).x - Px(400.0);
        assert!((b.raw() - 2.0 * a.raw()).abs() < 1e-9);
    }

    #[test]
    fn pan_moves_bounds() {
        let mut map = HeadlessMap::new(800.0, 600.0);
        map.pan_by(50.0, -20.0);
        assert_eq!(map.viewport_bounds(), Viewport::new(px(50.0, -20.0), px(850.0, 580.0)));
    }

    #[test]
    fn rebind_keeps_text_and_resets_position() {
        let mut map = HeadlessMap::new(800.0, 600.0).with_measure_on_bind(false);
        let m = map.add_marker(0.0, 0.0, "Lyon");
        map.set_label_position(&m, px(1.0, 2.0));
        assert!(map.rebind_label(&m, &binding()));

        let label = map.label(m).unwrap();
        assert_eq!(label.text, "Lyon");
        assert_eq!(label.position, None);
        assert_eq!(label.binding.as_ref().map(|b| b.class_name.as_str()), Some("tooltip-layout"));
        assert_eq!(map.label_size(&m), None);

        map.render();
        assert_eq!(map.label_size(&m), Some(Size::new(Px(40.0), Px(18.0))));
    }

    #[test]
    fn rebind_without_label_fails() {
        let mut map = HeadlessMap::new(800.0, 600.0);
        let m = map.add_bare_marker(0.0, 0.0);
        assert!(!map.rebind_label(&m, &binding()));
        assert!(!map.has_label(&m));
    }

    #[test]
    fn lines_track_view_membership() {
        let mut map = HeadlessMap::new(800.0, 600.0);
        let line = map.create_line(px(0.0, 0.0), px(5.0, 5.0));
        assert_eq!(map.lines_in_view().count(), 0);
        map.add_to_view(&line);
        assert_eq!(map.lines_in_view().count(), 1);
        map.remove_from_view(&line);
        assert_eq!(map.lines_in_view().count(), 0);
    }
}
