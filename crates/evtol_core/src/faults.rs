use bevy_ecs::prelude::Resource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded fault sampler. Faults are purely a recorded statistic; a fault
/// never grounds the aircraft or alters its schedule.
#[derive(Resource)]
pub struct FaultModel {
    rng: StdRng,
}

impl FaultModel {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Sample one fault check for a flight of `duration_hours` at
    /// `fault_prob_per_hour`. Linear approximation; only meaningful while
    /// `rate × duration` stays below 1.
    pub fn sample_fault(&mut self, fault_prob_per_hour: f64, duration_hours: f64) -> bool {
        self.rng.gen::<f64>() < fault_prob_per_hour * duration_hours
    }
}
