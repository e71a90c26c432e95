#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [TrackId] is the stable identifier the detector simulation
/// assigns to each particle it tracks. Energy deposits refer to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrackId(pub i32);

impl std::fmt::Display for TrackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "trk#{}", self.0)
    }
}

impl From<i32> for TrackId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

/// Any simulated particle should implement [TruthParticle]
/// so it can be matched to the hits it contributed to.
pub trait TruthParticle {
    /// [TrackId] of this particle.
    fn track_id(&self) -> TrackId;
}

/// Simulated (Monte Carlo) particle, as stored by the detector simulation.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct McParticle {
    /// [TrackId]
    pub track_id: TrackId,
    /// PDG particle code
    pub pdg: i32,
    /// [TrackId] of the parent particle, none for primaries.
    pub mother: Option<TrackId>,
    /// Creation process
    pub process: String,
    /// Initial energy (GeV)
    pub energy: f64,
}

impl McParticle {
    /// Builds a primary [McParticle].
    pub fn new(track_id: TrackId, pdg: i32) -> Self {
        Self {
            track_id,
            pdg,
            process: "primary".to_string(),
            ..Default::default()
        }
    }

    /// Copies and returns [McParticle] as a secondary particle,
    /// created by `process` from `mother`.
    pub fn with_mother(&self, mother: TrackId, process: &str) -> Self {
        let mut s = self.clone();
        s.mother = Some(mother);
        s.process = process.to_string();
        s
    }

    /// Copies and returns [McParticle] with initial energy (GeV).
    pub fn with_energy(&self, energy: f64) -> Self {
        let mut s = self.clone();
        s.energy = energy;
        s
    }

    /// Returns true if this [McParticle] was produced by the generator.
    pub fn is_primary(&self) -> bool {
        self.mother.is_none()
    }
}

impl TruthParticle for McParticle {
    fn track_id(&self) -> TrackId {
        self.track_id
    }
}

impl<P: TruthParticle> TruthParticle for &P {
    fn track_id(&self) -> TrackId {
        (*self).track_id()
    }
}
