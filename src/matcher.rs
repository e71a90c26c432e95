//! Hit to truth particle matcher
use log::{debug, error, info};

use crate::{
    association::{Associations, MatchingData},
    deposit::Accumulator,
    error::Collection,
    prelude::{BackTracker, Config, Error, Event, TruthParticle},
    resolver::ParticleResolver,
};

/// [HitMatcher] associates each hit with the simulated particles
/// that deposited energy in it, using a [BackTracker].
#[derive(Debug, Default)]
pub struct HitMatcher {
    /// Matcher parametrization
    pub cfg: Config,
    /// Particle lookup, reset for each event
    resolver: ParticleResolver,
}

impl HitMatcher {
    /// Builds a new [HitMatcher].
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            resolver: ParticleResolver::default(),
        }
    }

    /// Processes one [Event]: fetches the hits and particles designated by
    /// [Config] and associates them.
    ///
    /// Real data events are passed through, returning `Ok(None)`.
    /// A missing collection aborts processing of this event.
    pub fn process<H, P, E, B>(
        &mut self,
        event: &E,
        backtracker: &B,
    ) -> Result<Option<Associations>, Error>
    where
        P: TruthParticle,
        E: Event<H, P>,
        B: BackTracker<H>,
    {
        if event.is_real_data() {
            debug!("real data event: no simulated truth to match");
            return Ok(None);
        }

        let particles = event.particles(&self.cfg.particle_tag).ok_or_else(|| {
            error!("particle collection \"{}\" is not available", self.cfg.particle_tag);
            Error::MissingInput(Collection::Particles, self.cfg.particle_tag.clone())
        })?;

        let hits = event.hits(&self.cfg.hit_tag).ok_or_else(|| {
            error!("hit collection \"{}\" is not available", self.cfg.hit_tag);
            Error::MissingInput(Collection::Hits, self.cfg.hit_tag.clone())
        })?;

        let assns = self.attribute(hits, particles, backtracker);

        info!(
            "{} hits - {} particles: {} associations ({} matched hits, {} unresolved tracks)",
            hits.len(),
            particles.len(),
            assns.len(),
            assns.hits().count(),
            self.resolver.unresolved(),
        );

        Ok(Some(assns))
    }

    /// Associates `hits` with `particles`, all hits being processed together.
    ///
    /// For each hit, the [BackTracker] contributions are summed per particle.
    /// Each contributing particle that exists in `particles` gets
    /// one association, carrying its energy and charge fractions, and
    /// whether it is the dominant contributor. Contributions of particles
    /// that do not exist still count in the total energy and charge of the hit.
    ///
    /// When a hit has contributions but zero total energy (or charge),
    /// the fractions are NaN.
    pub fn attribute<H, P, B>(
        &mut self,
        hits: &[H],
        particles: &[P],
        backtracker: &B,
    ) -> Associations
    where
        P: TruthParticle,
        B: BackTracker<H>,
    {
        self.resolver.reset();

        let mut assns = Associations::with_capacity(hits.len());

        for (index, hit) in hits.iter().enumerate() {
            let contributions = backtracker.contributions(index, hit);
            let acc = Accumulator::new(&contributions);

            if acc.is_empty() {
                continue;
            }

            debug!(
                "hit #{} - {} contributions from {} particles - e={} n_e={}",
                index,
                contributions.len(),
                acc.len(),
                acc.total_energy(),
                acc.total_electrons(),
            );

            let max_energy_track = acc.max_energy_track();
            let max_charge_track = acc.max_charge_track();

            for (track_id, deposit) in acc.deposits() {
                let Some(particle) = self.resolver.resolve(*track_id, particles) else {
                    continue;
                };

                let data = MatchingData {
                    energy_fraction: deposit.energy / acc.total_energy(),
                    is_max_energy: Some(*track_id) == max_energy_track,
                    charge_fraction: deposit.num_electrons / acc.total_electrons(),
                    is_max_charge: Some(*track_id) == max_charge_track,
                    energy: deposit.energy,
                    num_electrons: deposit.num_electrons,
                };

                assns.add_single(index, particle, data);
            }
        }

        assns
    }
}
