//! Layout engine - the session object that ties a host to its tracked pairs

use crate::config::LayoutConfig;
use crate::errors::LayoutError;
use crate::host::{ConnectorStyle, LabelBinding, LabelDirection, MapEvent, MapHost};
use crate::layout::{self, DeferredConnectors, PassReport, connector};
use crate::log::debug;
use crate::registry::{Registry, TrackedPair};

type ConnectorHook<H> = Box<dyn FnMut(&mut H, &<H as crate::host::ConnectorLayer>::Connector)>;

/// Label layout session bound to one map host.
///
/// A pass has two phases. [`run_layout_pass`](Self::run_layout_pass) settles
/// every label synchronously and queues connector construction;
/// [`run_deferred`](Self::run_deferred) builds the connectors once the host
/// has rendered the labels, typically on its next scheduling turn.
pub struct LayoutEngine<H: MapHost> {
    host: H,
    config: LayoutConfig,
    registry: Registry<H::Marker, H::Connector>,
    /// Connectors currently in the view, in creation order
    connectors: Vec<H::Connector>,
    deferred: DeferredConnectors<H::Marker>,
    passes: u64,
    on_created: Option<ConnectorHook<H>>,
}

impl<H: MapHost> LayoutEngine<H> {
    /// Bind an engine to `host` and run the first pass.
    pub fn initialize(host: H, config: LayoutConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        let mut engine = Self {
            host,
            config,
            registry: Registry::new(),
            connectors: Vec::new(),
            deferred: DeferredConnectors::new(),
            passes: 0,
            on_created: None,
        };
        engine.run_layout_pass()?;
        Ok(engine)
    }

    /// Clear the previous pass's connectors, cancel its pending work, lay out
    /// every tracked label and queue connector construction.
    pub fn run_layout_pass(&mut self) -> Result<PassReport, LayoutError> {
        self.clear_all_connectors();
        self.passes += 1;

        let settled = layout::settle(&mut self.host, &self.registry, &self.config)?;
        self.deferred.schedule(self.passes, settled.requests);
        Ok(settled.report)
    }

    /// Build the queued connectors whose labels can be measured now.
    /// Returns how many were created; the rest stay queued.
    pub fn run_deferred(&mut self) -> usize {
        let host = &self.host;
        let ready = self.deferred.take_ready(|marker| host.label_size(marker));
        let normal = ConnectorStyle { color: self.config.connector_color.clone() };

        let mut built = 0;
        for (request, size) in ready {
            let Some(pair) = self.registry.get_mut(&request.marker) else {
                continue;
            };
            let end = connector::resolve_endpoint(request.candidate, request.anchor, size);
            let handle = self.host.create_line(request.anchor, end);
            self.host.set_style(&handle, &normal);
            if let Some(hook) = self.on_created.as_mut() {
                hook(&mut self.host, &handle);
            }
            self.host.add_to_view(&handle);
            pair.connector = Some(handle.clone());
            self.connectors.push(handle);
            built += 1;
        }

        if built > 0 {
            debug!(pass = self.deferred.pass(), built, pending = self.deferred.len(), "connectors built");
        }
        built
    }

    /// Whether connector construction from the last pass is still queued.
    pub fn has_pending_connectors(&self) -> bool {
        !self.deferred.is_empty()
    }

    /// Rebind the marker's label for layout and track the pair.
    ///
    /// Returns false when the marker is already tracked or the host could not
    /// produce a label element for it.
    pub fn register_pair(&mut self, marker: H::Marker) -> bool {
        if self.registry.contains(&marker) {
            return false;
        }
        let binding = self.label_binding();
        if !self.host.rebind_label(&marker, &binding) {
            debug!("label did not render; marker not tracked");
            return false;
        }
        self.registry.insert(marker)
    }

    /// Track a marker whose label is already bound, without rebinding it.
    ///
    /// Returns false when the marker is already tracked or has no label.
    pub fn track_marker(&mut self, marker: H::Marker) -> bool {
        if !self.host.has_label(&marker) {
            return false;
        }
        self.registry.insert(marker)
    }

    fn label_binding(&self) -> LabelBinding {
        LabelBinding {
            class_name: self.config.label_class_name.clone(),
            permanent: true,
            interactive: true,
            direction: LabelDirection::Left,
            sticky: false,
        }
    }

    pub fn tracked_markers(&self) -> impl Iterator<Item = &H::Marker> {
        self.registry.markers()
    }

    pub fn tracked_pairs(&self) -> &[TrackedPair<H::Marker, H::Connector>] {
        self.registry.pairs()
    }

    pub fn all_connectors(&self) -> &[H::Connector] {
        &self.connectors
    }

    pub fn connector_for(&self, marker: &H::Marker) -> Option<&H::Connector> {
        self.registry.get(marker).and_then(|p| p.connector.as_ref())
    }

    /// Remove every connector from the view and cancel pending construction.
    pub fn clear_all_connectors(&mut self) {
        for connector in self.connectors.drain(..) {
            self.host.remove_from_view(&connector);
        }
        self.registry.clear_connectors();
        let dropped = self.deferred.cancel();
        if dropped > 0 {
            debug!(dropped, "pending connectors cancelled");
        }
    }

    /// Forget every tracked pair along with its connector.
    pub fn clear_all_tracked_markers(&mut self) {
        self.clear_all_connectors();
        self.registry.clear();
    }

    /// Hook called once for every connector created, after the default style
    /// is applied and before the line is added to the view, so a style set
    /// here replaces the default.
    pub fn on_connector_created<F>(&mut self, hook: F)
    where
        F: FnMut(&mut H, &H::Connector) + 'static,
    {
        self.on_created = Some(Box::new(hook));
    }

    /// React to a host event. Returns the pass report when the event caused
    /// a relayout.
    pub fn handle_event(&mut self, event: MapEvent<H::Marker>) -> Result<Option<PassReport>, LayoutError> {
        match event {
            MapEvent::ZoomStart => {
                self.clear_all_connectors();
                Ok(None)
            }
            MapEvent::ZoomEnd | MapEvent::ViewReset => self.run_layout_pass().map(Some),
            MapEvent::MouseOver(marker) => {
                self.highlight(&marker, true);
                Ok(None)
            }
            MapEvent::MouseOut(marker) => {
                self.highlight(&marker, false);
                Ok(None)
            }
        }
    }

    fn highlight(&mut self, marker: &H::Marker, on: bool) {
        if !self.host.has_label(marker) {
            return;
        }
        let color = if on {
            &self.config.connector_highlight_color
        } else {
            &self.config.connector_color
        };
        let style = ConnectorStyle { color: color.clone() };
        if let Some(connector) = self.registry.get(marker).and_then(|p| p.connector.as_ref()) {
            self.host.set_style(connector, &style);
        }
        if on {
            self.host.bring_label_to_front(marker);
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Number of layout passes run so far.
    pub fn pass_count(&self) -> u64 {
        self.passes
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }
}
