#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::prelude::TrackId;

/// Energy deposited by one simulated particle in one hit.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Contribution {
    /// [TrackId] of the depositing particle
    pub track_id: TrackId,
    /// Deposited energy (MeV)
    pub energy: f64,
    /// Number of ionization electrons reaching the readout,
    /// which is the deposited charge.
    pub num_electrons: f64,
}

impl Contribution {
    pub fn new(track_id: TrackId, energy: f64, num_electrons: f64) -> Self {
        Self {
            track_id,
            energy,
            num_electrons,
        }
    }
}

/// The [BackTracker] traces a hit back to the simulated
/// particles that deposited energy in it.
pub trait BackTracker<H> {
    /// Returns all [Contribution]s to this hit.
    ///
    /// `index` is the position of `hit` within its collection.
    /// The same [TrackId] may appear several times, in which case
    /// the [Contribution]s are summed up. Order matters: when two particles
    /// contribute equally, the first reported one is the dominant one.
    fn contributions(&self, index: usize, hit: &H) -> Vec<Contribution>;
}

impl<H, F> BackTracker<H> for F
where
    F: Fn(usize, &H) -> Vec<Contribution>,
{
    fn contributions(&self, index: usize, hit: &H) -> Vec<Contribution> {
        self(index, hit)
    }
}
