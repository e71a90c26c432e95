use thiserror::Error;

use crate::prelude::InputTag;

/// Input [Collection]s the [HitMatcher](crate::prelude::HitMatcher) reads from the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    /// Reconstructed hits
    Hits,
    /// Simulated truth particles
    Particles,
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hits => write!(f, "hits"),
            Self::Particles => write!(f, "particles"),
        }
    }
}

#[derive(Debug, PartialEq, Error)]
pub enum Error {
    /// The requested [Collection] is not available in this event.
    /// Matching of this event is aborted and no association is produced.
    #[error("missing {0} collection \"{1}\"")]
    MissingInput(Collection, InputTag),
}
