#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

// private modules
mod association;
mod backtracker;
mod cfg;
mod deposit;
mod error;
mod event;
mod matcher;
mod particle;
mod resolver;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::association::{Association, Associations, MatchingData};
    pub use crate::backtracker::{BackTracker, Contribution};
    pub use crate::cfg::{Config, Error as ConfigError, InputTag};
    pub use crate::error::{Collection, Error};
    pub use crate::event::{Event, MemoryEvent};
    pub use crate::matcher::HitMatcher;
    pub use crate::particle::{McParticle, TrackId, TruthParticle};
}

// pub export
pub use error::Error;
