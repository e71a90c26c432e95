use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod tag;
pub use tag::InputTag;

/// Configuration Error
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid input tag \"{0}\"")]
    InvalidInputTag(String),
}

fn default_hit_tag() -> InputTag {
    InputTag::new("hitfinder")
}

fn default_particle_tag() -> InputTag {
    InputTag::new("largeant")
}

/// [HitMatcher](crate::prelude::HitMatcher) configuration:
/// which producers supply the hits and the truth particles.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// [InputTag] of the reconstructed hits collection.
    #[cfg_attr(feature = "serde", serde(default = "default_hit_tag"))]
    pub hit_tag: InputTag,
    /// [InputTag] of the simulated particles collection,
    /// usually the detector simulation stage.
    #[cfg_attr(feature = "serde", serde(default = "default_particle_tag"))]
    pub particle_tag: InputTag,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hit_tag: default_hit_tag(),
            particle_tag: default_particle_tag(),
        }
    }
}

impl Config {
    /// Builds a new [Config] from both [InputTag]s.
    pub fn new(hit_tag: InputTag, particle_tag: InputTag) -> Self {
        Self {
            hit_tag,
            particle_tag,
        }
    }

    /// Builds a new [Config] from both [InputTag] descriptions,
    /// for example `("gaushit", "largeant::G4")`.
    pub fn from_labels(hit_tag: &str, particle_tag: &str) -> Result<Self, Error> {
        Ok(Self::new(hit_tag.parse()?, particle_tag.parse()?))
    }
}
