use itertools::Itertools;

#[cfg(feature = "serde")]
use serde::Serialize;

/// [MatchingData] describes how much a particle contributed to a hit.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MatchingData {
    /// Fraction of the hit energy deposited by this particle
    pub energy_fraction: f64,
    /// True if this particle deposited the most energy in this hit
    pub is_max_energy: bool,
    /// Fraction of the hit charge (number of electrons) deposited by this particle
    pub charge_fraction: f64,
    /// True if this particle deposited the most charge in this hit
    pub is_max_charge: bool,
    /// Energy deposited by this particle
    pub energy: f64,
    /// Number of electrons deposited by this particle
    pub num_electrons: f64,
}

/// [Association] between one hit and one particle,
/// both designated by their position in their respective collection.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Association {
    /// Hit index
    pub hit: usize,
    /// Particle index
    pub particle: usize,
    /// [MatchingData]
    pub data: MatchingData,
}

/// All [Association]s produced for one event, sorted by hit.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Associations {
    inner: Vec<Association>,
}

impl Associations {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn add_single(&mut self, hit: usize, particle: usize, data: MatchingData) {
        self.inner.push(Association {
            hit,
            particle,
            data,
        });
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Association> {
        self.inner.iter()
    }

    /// Distinct hits that were matched to at least one particle.
    pub fn hits(&self) -> impl Iterator<Item = usize> + '_ {
        self.inner.iter().map(|assn| assn.hit).dedup()
    }

    /// All [Association]s of this hit.
    pub fn for_hit(&self, hit: usize) -> impl Iterator<Item = &Association> + '_ {
        self.inner.iter().filter(move |assn| assn.hit == hit)
    }

    /// All [Association]s of this particle.
    pub fn for_particle(&self, particle: usize) -> impl Iterator<Item = &Association> + '_ {
        self.inner.iter().filter(move |assn| assn.particle == particle)
    }

    /// [Association] of this hit with the particle that deposited the most energy.
    /// None if that particle did not resolve.
    pub fn dominant_by_energy(&self, hit: usize) -> Option<&Association> {
        self.for_hit(hit).find(|assn| assn.data.is_max_energy)
    }

    /// [Association] of this hit with the particle that deposited the most charge.
    /// None if that particle did not resolve.
    pub fn dominant_by_charge(&self, hit: usize) -> Option<&Association> {
        self.for_hit(hit).find(|assn| assn.data.is_max_charge)
    }
}

impl IntoIterator for Associations {
    type Item = Association;
    type IntoIter = std::vec::IntoIter<Association>;
    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a> IntoIterator for &'a Associations {
    type Item = &'a Association;
    type IntoIter = std::slice::Iter<'a, Association>;
    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
