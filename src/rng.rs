use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;

use crate::error::Error;

/// Builds the generator for a run: deterministic when `seed` is given,
/// otherwise seeded from the operating system's entropy source.
pub fn build(seed: Option<u64>) -> Result<ChaCha20Rng, Error> {
    match seed {
        Some(s) => {
            log::info!("random source: ChaCha20 (seed {})", s);
            Ok(ChaCha20Rng::seed_from_u64(s))
        }
        None => {
            log::info!("random source: ChaCha20 (OS entropy)");
            ChaCha20Rng::try_from_os_rng()
                .map_err(|e| Error::Entropy(format!("failed to seed from OS: {}", e)))
        }
    }
}
