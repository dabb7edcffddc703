//! Password generator context
//!
//! [`PasswordGenerator`] owns the active phoneme table and the random
//! source, so separate generators never share mutable state.

use crate::config::GeneratorConfig;
use crate::entropy;
use crate::table::{PhonemeTable, TableVariant};
use crate::walk;
use crate::Result;
use rand::Rng;
use rand::rngs::StdRng;
use tracing::debug;

/// Generates pronounceable passwords from the active table
#[derive(Debug, Clone)]
pub struct PasswordGenerator<R = StdRng> {
    variant: TableVariant,
    table: PhonemeTable,
    rng: R,
}

impl PasswordGenerator<StdRng> {
    /// Generator seeded from the OS random source, using the standard table
    ///
    /// # Errors
    ///
    /// Returns [`crate::PwgenError::RandomSourceUnavailable`] if the seed
    /// cannot be read.
    pub fn from_os_seed() -> Result<Self> {
        Ok(Self::with_rng(entropy::seeded_rng()?))
    }

    /// Generator with a fixed seed, for reproducible output
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(entropy::rng_from_seed(seed))
    }

    /// Generator set up from a configuration
    ///
    /// Uses the configured seed when present and the OS random source
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the OS seed
    /// cannot be read.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let mut generator = match config.seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::from_os_seed()?,
        };
        generator.activate(config.variant);
        Ok(generator)
    }
}

impl<R: Rng> PasswordGenerator<R> {
    /// Generator drawing from `rng`, using the standard table
    pub fn with_rng(rng: R) -> Self {
        Self {
            variant: TableVariant::Standard,
            table: TableVariant::Standard.table(),
            rng,
        }
    }

    /// Select the table used by subsequent calls
    pub fn activate(&mut self, variant: TableVariant) {
        if self.variant != variant {
            debug!(from = %self.variant, to = %variant, "switching phoneme table");
        }
        self.variant = variant;
        self.table = variant.table();
    }

    /// Switch to the unambiguous table; calling it again has no effect
    pub fn activate_unambiguous(&mut self) {
        self.activate(TableVariant::Unambiguous);
    }

    /// Currently active variant
    #[must_use]
    pub fn variant(&self) -> TableVariant {
        self.variant
    }

    /// Currently active table
    #[must_use]
    pub fn table(&self) -> &PhonemeTable {
        &self.table
    }

    /// Number of units in the active table
    #[must_use]
    pub fn size(&self) -> usize {
        self.table.size()
    }

    /// Generate one password of `length` characters
    ///
    /// # Errors
    ///
    /// See [`walk::visit`].
    pub fn generate(&mut self, length: usize) -> Result<String> {
        walk::run(&self.table, length, &mut self.rng)
    }

    /// Generate `count` passwords of `length` characters each
    ///
    /// # Errors
    ///
    /// Stops at the first failed walk and returns its error.
    pub fn generate_many(&mut self, length: usize, count: usize) -> Result<Vec<String>> {
        (0..count).map(|_| self.generate(length)).collect()
    }

    /// Consume the generator and return its random source
    pub fn into_rng(self) -> R {
        self.rng
    }
}
