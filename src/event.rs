use std::collections::HashMap;

use crate::prelude::InputTag;

/// [Event] is the minimal view of a processed event
/// the [HitMatcher](crate::prelude::HitMatcher) relies on.
pub trait Event<H, P> {
    /// True when this [Event] was recorded by the detector,
    /// in which case no simulated truth exists.
    fn is_real_data(&self) -> bool;

    /// Hits produced by `tag`, if such collection exists.
    fn hits(&self, tag: &InputTag) -> Option<&[H]>;

    /// Simulated particles produced by `tag`, if such collection exists.
    fn particles(&self, tag: &InputTag) -> Option<&[P]>;
}

/// [MemoryEvent] holds its collections in memory.
#[derive(Debug, Clone)]
pub struct MemoryEvent<H, P> {
    real_data: bool,
    hits: HashMap<InputTag, Vec<H>>,
    particles: HashMap<InputTag, Vec<P>>,
}

impl<H, P> Default for MemoryEvent<H, P> {
    fn default() -> Self {
        Self {
            real_data: false,
            hits: HashMap::new(),
            particles: HashMap::new(),
        }
    }
}

impl<H, P> MemoryEvent<H, P> {
    /// Builds a new simulated [MemoryEvent], without any collection.
    pub fn simulated() -> Self {
        Self::default()
    }

    /// Builds a new real data [MemoryEvent], without any collection.
    pub fn real_data() -> Self {
        Self {
            real_data: true,
            ..Default::default()
        }
    }

    /// Returns [MemoryEvent] with this hits collection.
    pub fn with_hits(mut self, tag: InputTag, hits: Vec<H>) -> Self {
        self.hits.insert(tag, hits);
        self
    }

    /// Returns [MemoryEvent] with this particles collection.
    pub fn with_particles(mut self, tag: InputTag, particles: Vec<P>) -> Self {
        self.particles.insert(tag, particles);
        self
    }
}

impl<H, P> Event<H, P> for MemoryEvent<H, P> {
    fn is_real_data(&self) -> bool {
        self.real_data
    }

    fn hits(&self, tag: &InputTag) -> Option<&[H]> {
        self.hits.get(tag).map(Vec::as_slice)
    }

    fn particles(&self, tag: &InputTag) -> Option<&[P]> {
        self.particles.get(tag).map(Vec::as_slice)
    }
}
