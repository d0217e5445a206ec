use anyhow::Result;
use rand::{prelude::*, rngs::StdRng};

/// Random number generator for a match, seeded from `seed` when given.
pub fn make_rng(seed: Option<u64>) -> Result<StdRng> {
    let seed = match seed {
        Some(seed) => seed,
        None => default_seed()?,
    };
    Ok(StdRng::seed_from_u64(seed))
}

#[cfg(debug_assertions)]
fn default_seed() -> Result<u64> {
    const SEED: u64 = 63;
    Ok(SEED)
}

#[cfg(not(debug_assertions))]
fn default_seed() -> Result<u64> {
    use rand::{rngs::SysRng, TryRng};
    SysRng::try_next_u64(&mut SysRng).map_err(|err| anyhow::anyhow!("failed to seed from the OS: {:?}", err))
}
