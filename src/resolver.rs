use std::collections::HashMap;

use log::trace;

use crate::prelude::{TrackId, TruthParticle};

/// [ParticleResolver] locates the particle carrying a given [TrackId].
/// Each [TrackId] is searched for once per event: both found and
/// missing particles are memorized.
#[derive(Debug, Default)]
pub(crate) struct ParticleResolver {
    lookup: HashMap<TrackId, Option<usize>>,
}

impl ParticleResolver {
    /// Prepare for new event
    pub fn reset(&mut self) {
        self.lookup.clear();
    }

    /// Returns position of the first particle carrying this [TrackId],
    /// if it exists.
    pub fn resolve<P: TruthParticle>(
        &mut self,
        track_id: TrackId,
        particles: &[P],
    ) -> Option<usize> {
        *self.lookup.entry(track_id).or_insert_with(|| {
            let pos = particles.iter().position(|p| p.track_id() == track_id);
            if pos.is_none() {
                trace!("{} - no matching particle", track_id);
            }
            pos
        })
    }

    /// Number of [TrackId]s searched for, since last reset.
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    /// Number of [TrackId]s that did not match any particle, since last reset.
    pub fn unresolved(&self) -> usize {
        self.lookup.values().filter(|pos| pos.is_none()).count()
    }
}
