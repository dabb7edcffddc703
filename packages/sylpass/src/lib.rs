//! # sylpass
//!
//! Pronounceable password generation.
//!
//! Passwords are assembled from short phonetic units ("a", "ch", "oo", ...)
//! by a constrained random walk that alternates consonant and vowel sounds,
//! never starts with clusters such as "gh" or "ng", never stacks vowel
//! clusters, and occasionally injects a digit. Output is always exactly the
//! requested number of characters.
//!
//! ## Quick Start
//!
//! ```rust
//! use sylpass::PasswordGenerator;
//!
//! # fn main() -> sylpass::Result<()> {
//! let mut generator = PasswordGenerator::from_os_seed()?;
//! generator.activate_unambiguous();
//!
//! let password = generator.generate(13)?;
//! assert_eq!(password.len(), 13);
//! # Ok(())
//! # }
//! ```
//!
//! ## Randomness
//!
//! Eight bytes from the OS random source seed a deterministic generator that
//! serves every draw. This is fine for memorable passwords, but the entropy of
//! the result is bounded by that 64-bit seed and by the shape of the walk, not
//! by per-character cryptographic randomness.

#![forbid(unsafe_code)]

pub mod config;
pub mod entropy;
pub mod error;
pub mod generator;
pub mod logging;
pub mod table;
pub mod walk;

// Re-export core types
pub use config::GeneratorConfig;
pub use error::{PwgenError, Result};
pub use generator::PasswordGenerator;
pub use logging::LoggingInit;
pub use table::{Category, PhonemeTable, PhoneticUnit, TableVariant};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Category, GeneratorConfig, PasswordGenerator, PhonemeTable, PhoneticUnit, PwgenError,
        Result, TableVariant,
    };
}
