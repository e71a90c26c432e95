//! Per hit deposit accumulation
use std::collections::HashMap;

use crate::prelude::{Contribution, TrackId};

/// Summed [Deposit] of one particle in one hit.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct Deposit {
    /// Summed energy
    pub energy: f64,
    /// Summed number of electrons
    pub num_electrons: f64,
}

/// Running maximum. Only a strictly greater value takes over,
/// so the first encountered maximum wins ties.
#[derive(Debug, Clone, Copy)]
struct Maximum {
    value: f64,
    track_id: Option<TrackId>,
}

impl Default for Maximum {
    fn default() -> Self {
        // below any physical deposit: a lone null deposit is still the maximum
        Self {
            value: -1.0,
            track_id: None,
        }
    }
}

impl Maximum {
    fn update(&mut self, track_id: TrackId, value: f64) {
        if value > self.value {
            self.value = value;
            self.track_id = Some(track_id);
        }
    }
}

/// [Accumulator] collects all [Contribution]s of a single hit.
#[derive(Debug, Default)]
pub(crate) struct Accumulator {
    /// [Deposit]s, in order of first appearance
    deposits: Vec<(TrackId, Deposit)>,
    /// Position of each [TrackId] in the deposits
    positions: HashMap<TrackId, usize>,
    /// Total energy, all particles
    total_energy: f64,
    /// Total number of electrons, all particles
    total_electrons: f64,
    max_energy: Maximum,
    max_electrons: Maximum,
}

impl Accumulator {
    /// Accumulates all [Contribution]s of a hit.
    pub fn new(contributions: &[Contribution]) -> Self {
        let mut s = Self::default();
        for contribution in contributions {
            s.add(contribution);
        }
        s
    }

    /// Adds one [Contribution] to the running sums.
    pub fn add(&mut self, contribution: &Contribution) {
        let track_id = contribution.track_id;

        let pos = match self.positions.get(&track_id) {
            Some(pos) => *pos,
            None => {
                let pos = self.deposits.len();
                self.deposits.push((track_id, Deposit::default()));
                self.positions.insert(track_id, pos);
                pos
            },
        };

        let deposit = &mut self.deposits[pos].1;

        deposit.energy += contribution.energy;
        self.total_energy += contribution.energy;
        self.max_energy.update(track_id, deposit.energy);

        deposit.num_electrons += contribution.num_electrons;
        self.total_electrons += contribution.num_electrons;
        self.max_electrons.update(track_id, deposit.num_electrons);
    }

    pub fn is_empty(&self) -> bool {
        self.deposits.is_empty()
    }

    /// Number of distinct contributing particles
    pub fn len(&self) -> usize {
        self.deposits.len()
    }

    /// Iterates over each distinct [TrackId] and its summed [Deposit],
    /// in order of first appearance.
    pub fn deposits(&self) -> impl Iterator<Item = &(TrackId, Deposit)> + '_ {
        self.deposits.iter()
    }

    pub fn total_energy(&self) -> f64 {
        self.total_energy
    }

    pub fn total_electrons(&self) -> f64 {
        self.total_electrons
    }

    /// [TrackId] that deposited the most energy, if any.
    pub fn max_energy_track(&self) -> Option<TrackId> {
        self.max_energy.track_id
    }

    /// [TrackId] that deposited the most charge, if any.
    pub fn max_charge_track(&self) -> Option<TrackId> {
        self.max_electrons.track_id
    }
}
