//! Connector builder: endpoints for the line from a marker to its label, and
//! the queue of connectors waiting for their label to be measured.
//!
//! Building is split in two phases. At the end of a layout pass the candidate
//! endpoint is derived from the settled label position and queued. On the
//! host's next scheduling turn the queue is drained: each label is measured,
//! the endpoint is moved to the far side of the box when needed, and the line
//! is created.

use crate::types::{Offset, Px, PtPx, SizePx};

/// Candidate endpoint: the label's top-left shifted by `inset`.
///
/// Returns None when the candidate sits exactly on the anchor; such a pair
/// gets no connector.
pub fn candidate_endpoint(label: PtPx, anchor: PtPx, inset: Offset<Px>) -> Option<PtPx> {
    let candidate = label + inset;
    if candidate == anchor { None } else { Some(candidate) }
}

/// Final endpoint once the label size is known. When the whole box lies
/// before the anchor on an axis, the endpoint moves to the box's far edge so
/// the line does not cross the label.
pub fn resolve_endpoint(candidate: PtPx, anchor: PtPx, size: SizePx) -> PtPx {
    let mut end = candidate;
    if end.x + size.w < anchor.x {
        end.x += size.w;
    }
    if end.y + size.h < anchor.y {
        end.y += size.h;
    }
    end
}

/// A connector waiting for phase two.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorRequest<M> {
    pub marker: M,
    pub anchor: PtPx,
    pub candidate: PtPx,
}

/// Pending phase-two work of the most recent layout pass.
#[derive(Debug)]
pub struct DeferredConnectors<M> {
    pass: u64,
    queue: Vec<ConnectorRequest<M>>,
}

impl<M> Default for DeferredConnectors<M> {
    fn default() -> Self {
        Self { pass: 0, queue: Vec::new() }
    }
}

impl<M> DeferredConnectors<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any pending work with the requests of `pass`.
    /// Returns how many stale requests were dropped.
    pub fn schedule(&mut self, pass: u64, requests: Vec<ConnectorRequest<M>>) -> usize {
        let dropped = self.queue.len();
        self.pass = pass;
        self.queue = requests;
        dropped
    }

    /// Drop all pending requests. Returns how many were dropped.
    pub fn cancel(&mut self) -> usize {
        let dropped = self.queue.len();
        self.queue.clear();
        dropped
    }

    /// Pass that queued the pending requests.
    pub fn pass(&self) -> u64 {
        self.pass
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Take every request whose label can be measured now, paired with the
    /// measured size. Unmeasured requests stay queued for the next turn.
    pub fn take_ready<F>(&mut self, mut measure: F) -> Vec<(ConnectorRequest<M>, SizePx)>
    where
        F: FnMut(&M) -> Option<SizePx>,
    {
        let mut ready = Vec::new();
        let mut waiting = Vec::new();
        for request in self.queue.drain(..) {
            match measure(&request.marker) {
                Some(size) => ready.push((request, size)),
                None => waiting.push(request),
            }
        }
        self.queue = waiting;
        ready
    }
}
