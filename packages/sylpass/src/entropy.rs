//! Seeding from the operating system random source
//!
//! A single 64-bit seed is read once from the OS CSPRNG and used to seed a
//! deterministic generator that serves every later draw. The strength of a
//! generated password is therefore bounded by this seed and by the
//! index-selection distribution of the walk, not by fresh entropy per
//! character.

use crate::{PwgenError, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;
use zeroize::Zeroizing;

/// Number of bytes read from the OS random source
pub const SEED_BYTES: usize = 8;

/// Read a fresh seed from the operating system random source
///
/// # Errors
///
/// Returns [`PwgenError::RandomSourceUnavailable`] if the OS source cannot
/// be read.
pub fn read_seed() -> Result<u64> {
    let mut bytes = Zeroizing::new([0u8; SEED_BYTES]);
    getrandom::fill(&mut bytes[..]).map_err(|e| PwgenError::random_source(e.to_string()))?;
    let seed = seed_from_bytes(&bytes[..])?;
    debug!("read {SEED_BYTES} seed bytes from OS random source");
    Ok(seed)
}

/// Interpret the first [`SEED_BYTES`] bytes as a little-endian seed
///
/// # Errors
///
/// Returns [`PwgenError::RandomSourceUnavailable`] if fewer than
/// [`SEED_BYTES`] bytes are supplied.
pub fn seed_from_bytes(bytes: &[u8]) -> Result<u64> {
    let head: [u8; SEED_BYTES] = bytes
        .get(..SEED_BYTES)
        .and_then(|head| <[u8; SEED_BYTES]>::try_from(head).ok())
        .ok_or_else(|| {
            PwgenError::random_source(format!(
                "need {SEED_BYTES} bytes of seed material, got {}",
                bytes.len()
            ))
        })?;
    let head = Zeroizing::new(head);
    Ok(u64::from_le_bytes(*head))
}

/// Deterministic generator seeded with `seed`
#[must_use]
pub fn rng_from_seed(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Deterministic generator seeded from the OS random source
///
/// # Errors
///
/// See [`read_seed`].
pub fn seeded_rng() -> Result<StdRng> {
    read_seed().map(rng_from_seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_seed_is_little_endian() {
        let seed = seed_from_bytes(&[1, 0, 0, 0, 0, 0, 0, 0]).expect("eight bytes");
        assert_eq!(seed, 1);
        let seed = seed_from_bytes(&[0, 0, 0, 0, 0, 0, 0, 0x80, 0xff]).expect("extra bytes ignored");
        assert_eq!(seed, 1 << 63);
    }

    #[test]
    fn test_short_seed_material_is_rejected() {
        let err = seed_from_bytes(&[1, 2, 3]).expect_err("three bytes");
        assert!(matches!(err, PwgenError::RandomSourceUnavailable(_)));
    }

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = rng_from_seed(42);
        let mut b = rng_from_seed(42);
        for _ in 0..32 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn test_os_seed_is_available() {
        assert!(seeded_rng().is_ok());
    }
}
