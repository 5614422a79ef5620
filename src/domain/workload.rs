use rand::prelude::*;

use crate::domain::process::Ticks;
use crate::error::{Error, Result};

/// Generates `count` burst lengths uniformly drawn from `1..=max_burst`.
///
/// The same seed always yields the same workload.
pub fn random_bursts(count: usize, max_burst: Ticks, seed: u64) -> Result<Vec<Ticks>> {
    if max_burst == 0 {
        return Err(Error::ContractViolation("max_burst for random workloads must be at least 1".to_string()));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let bursts: Vec<Ticks> = (0..count).map(|_| rng.random_range(1..=max_burst)).collect();

    log::debug!("Generated {} random bursts (max {}, seed {}).", count, max_burst, seed);
    Ok(bursts)
}
