//! Tracked marker/label pairs.

use std::collections::HashMap;
use std::hash::Hash;

/// One marker under layout, with the connector of the last pass if any.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedPair<M, C> {
    pub marker: M,
    pub connector: Option<C>,
}

/// Ordered set of tracked pairs. Registry order decides the initial spread
/// angle and which pairs fall inside the working-set cap. Lookups by marker go
/// through an index so per-marker work stays linear over a pass.
#[derive(Debug, Clone)]
pub struct Registry<M, C> {
    pairs: Vec<TrackedPair<M, C>>,
    index: HashMap<M, usize>,
}

impl<M, C> Default for Registry<M, C> {
    fn default() -> Self {
        Self { pairs: Vec::new(), index: HashMap::new() }
    }
}

impl<M: Clone + Eq + Hash, C> Registry<M, C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track `marker`. Returns false if it was already tracked.
    pub fn insert(&mut self, marker: M) -> bool {
        if self.contains(&marker) {
            return false;
        }
        self.index.insert(marker.clone(), self.pairs.len());
        self.pairs.push(TrackedPair { marker, connector: None });
        true
    }

    pub fn contains(&self, marker: &M) -> bool {
        self.index.contains_key(marker)
    }

    pub fn get(&self, marker: &M) -> Option<&TrackedPair<M, C>> {
        self.index.get(marker).map(|&i| &self.pairs[i])
    }

    pub fn get_mut(&mut self, marker: &M) -> Option<&mut TrackedPair<M, C>> {
        self.index.get(marker).map(|&i| &mut self.pairs[i])
    }

    pub fn pairs(&self) -> &[TrackedPair<M, C>] {
        &self.pairs
    }

    pub fn markers(&self) -> impl Iterator<Item = &M> {
        self.pairs.iter().map(|p| &p.marker)
    }

    /// The first `cap` pairs, which take part in forces and clamping.
    pub fn working_set(&self, cap: usize) -> &[TrackedPair<M, C>] {
        &self.pairs[..self.pairs.len().min(cap)]
    }

    /// Forget every pair's connector; the pairs stay tracked.
    pub fn clear_connectors(&mut self) {
        for pair in &mut self.pairs {
            pair.connector = None;
        }
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
        self.index.clear();
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_idempotent() {
        let mut registry: Registry<&str, u32> = Registry::new();
        assert!(registry.insert("a"));
        assert!(registry.insert("b"));
        assert!(!registry.insert("a"));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.markers().copied().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn working_set_is_capped_prefix() {
        let mut registry: Registry<u32, ()> = Registry::new();
        for m in 0..5 {
            registry.insert(m);
        }
        assert_eq!(registry.working_set(3).len(), 3);
        assert_eq!(registry.working_set(3)[2].marker, 2);
        assert_eq!(registry.working_set(10).len(), 5);
    }

    #[test]
    fn clear_connectors_keeps_pairs() {
        let mut registry: Registry<u32, u32> = Registry::new();
        registry.insert(1);
        registry.insert(2);
        registry.get_mut(&1).unwrap().connector = Some(10);
        registry.clear_connectors();
        assert!(registry.get(&1).unwrap().connector.is_none());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn lookups_follow_insertion_slots() {
        let mut registry: Registry<u32, &str> = Registry::new();
        for m in [7, 3, 9] {
            registry.insert(m);
        }
        registry.get_mut(&3).unwrap().connector = Some("three");
        assert_eq!(registry.pairs()[1].connector, Some("three"));
        assert_eq!(registry.get(&9).map(|p| p.marker), Some(9));
        assert!(registry.get(&4).is_none());
    }

    #[test]
    fn clear_resets_the_index() {
        let mut registry: Registry<u32, ()> = Registry::new();
        registry.insert(1);
        registry.clear();
        assert!(!registry.contains(&1));
        assert!(registry.insert(1));
        assert_eq!(registry.get(&1).map(|p| p.marker), Some(1));
    }
}
