//! Phonetic unit tables
//!
//! Each unit is a short ASCII fragment tagged with a set of [`Category`]
//! flags. Two fixed tables ship with the crate: the standard English phoneme
//! set and an unambiguous set without `i` and `l`, which are easily confused
//! with `1`, `I` and `|` in many fonts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::BitOr;

const C: u8 = 0x1;
const V: u8 = 0x2;
const D: u8 = 0x4;
const NF: u8 = 0x8;

/// Flag set describing how a phonetic unit may be used
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Category(u8);

impl Category {
    /// No flags set
    pub const NONE: Self = Self(0);
    /// Consonant sound
    pub const CONSONANT: Self = Self(C);
    /// Vowel sound
    pub const VOWEL: Self = Self(V);
    /// Multi-letter cluster
    pub const DIPTHONG: Self = Self(D);
    /// Must not start a password
    pub const NOT_FIRST: Self = Self(NF);

    /// Build a flag set from raw bits
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & (C | V | D | NF))
    }

    /// Raw bit representation
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// True when any flag of `other` is also set in `self`
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// True when every flag of `other` is set in `self`
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// True when no flag is set
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Flags set in either `self` or `other`
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl BitOr for Category {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl fmt::Debug for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("NONE");
        }
        let names = [
            (Self::CONSONANT, "CONSONANT"),
            (Self::VOWEL, "VOWEL"),
            (Self::DIPTHONG, "DIPTHONG"),
            (Self::NOT_FIRST, "NOT_FIRST"),
        ];
        let mut sep = "";
        for (flag, name) in names {
            if self.contains(flag) {
                write!(f, "{sep}{name}")?;
                sep = " | ";
            }
        }
        Ok(())
    }
}

impl fmt::Binary for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

/// A phonetic fragment and its category flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneticUnit {
    /// Fragment text, non-empty ASCII
    pub text: &'static str,
    /// Category flags
    pub categories: Category,
}

impl PhoneticUnit {
    const fn new(text: &'static str, bits: u8) -> Self {
        Self {
            text,
            categories: Category::from_bits(bits),
        }
    }

    /// Length of the fragment in characters
    #[must_use]
    pub const fn len(&self) -> usize {
        self.text.len()
    }

    /// Fragments are never empty; provided for API completeness
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether the unit carries any flag of `category`
    #[must_use]
    pub const fn is(&self, category: Category) -> bool {
        self.categories.intersects(category)
    }
}

const STANDARD_UNITS: [PhoneticUnit; 40] = [
    PhoneticUnit::new("a", V),
    PhoneticUnit::new("ae", V | D),
    PhoneticUnit::new("ah", V | D),
    PhoneticUnit::new("ai", V | D),
    PhoneticUnit::new("b", C),
    PhoneticUnit::new("c", C),
    PhoneticUnit::new("ch", C | D),
    PhoneticUnit::new("d", C),
    PhoneticUnit::new("e", V),
    PhoneticUnit::new("ee", V | D),
    PhoneticUnit::new("ei", V | D),
    PhoneticUnit::new("f", C),
    PhoneticUnit::new("g", C),
    PhoneticUnit::new("gh", C | D | NF),
    PhoneticUnit::new("h", C),
    PhoneticUnit::new("i", V),
    PhoneticUnit::new("ie", V | D),
    PhoneticUnit::new("j", C),
    PhoneticUnit::new("k", C),
    PhoneticUnit::new("l", C),
    PhoneticUnit::new("m", C),
    PhoneticUnit::new("n", C),
    PhoneticUnit::new("ng", C | D | NF),
    PhoneticUnit::new("o", V),
    PhoneticUnit::new("oh", V | D),
    PhoneticUnit::new("oo", V | D),
    PhoneticUnit::new("p", C),
    PhoneticUnit::new("ph", C | D),
    PhoneticUnit::new("qu", C | D),
    PhoneticUnit::new("r", C),
    PhoneticUnit::new("s", C),
    PhoneticUnit::new("sh", C | D),
    PhoneticUnit::new("t", C),
    PhoneticUnit::new("th", C | D),
    PhoneticUnit::new("u", V),
    PhoneticUnit::new("v", C),
    PhoneticUnit::new("w", C),
    PhoneticUnit::new("x", C),
    PhoneticUnit::new("y", C),
    PhoneticUnit::new("z", C),
];

const UNAMBIGUOUS_UNITS: [PhoneticUnit; 40] = [
    PhoneticUnit::new("a", V),
    PhoneticUnit::new("ae", V | D),
    PhoneticUnit::new("ah", V | D),
    PhoneticUnit::new("ay", V | D),
    PhoneticUnit::new("b", C),
    PhoneticUnit::new("c", C),
    PhoneticUnit::new("ch", C | D),
    PhoneticUnit::new("d", C),
    PhoneticUnit::new("e", V),
    PhoneticUnit::new("ee", V | D),
    PhoneticUnit::new("eh", V | D),
    PhoneticUnit::new("ey", V | D),
    PhoneticUnit::new("f", C),
    PhoneticUnit::new("g", C),
    PhoneticUnit::new("gh", C | D | NF),
    PhoneticUnit::new("h", C),
    PhoneticUnit::new("ye", V | D),
    PhoneticUnit::new("j", C),
    PhoneticUnit::new("k", C),
    PhoneticUnit::new("m", C),
    PhoneticUnit::new("n", C),
    PhoneticUnit::new("ng", C | D | NF),
    PhoneticUnit::new("o", V),
    PhoneticUnit::new("oh", V | D),
    PhoneticUnit::new("oo", V | D),
    PhoneticUnit::new("p", C),
    PhoneticUnit::new("ph", C | D),
    PhoneticUnit::new("qu", C | D),
    PhoneticUnit::new("r", C),
    PhoneticUnit::new("s", C),
    PhoneticUnit::new("sh", C | D),
    PhoneticUnit::new("t", C),
    PhoneticUnit::new("th", C | D),
    PhoneticUnit::new("u", V),
    PhoneticUnit::new("uo", V | D),
    PhoneticUnit::new("v", C),
    PhoneticUnit::new("w", C),
    PhoneticUnit::new("x", C),
    PhoneticUnit::new("y", C),
    PhoneticUnit::new("z", C),
];

/// Selects one of the built-in tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableVariant {
    /// Full English phoneme set
    #[default]
    Standard,
    /// Phoneme set without `i` and `l`
    Unambiguous,
}

impl TableVariant {
    /// The table for this variant
    #[must_use]
    pub const fn table(self) -> PhonemeTable {
        match self {
            Self::Standard => PhonemeTable::STANDARD,
            Self::Unambiguous => PhonemeTable::UNAMBIGUOUS,
        }
    }

    /// Lowercase name used in configuration and output
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Unambiguous => "unambiguous",
        }
    }
}

impl fmt::Display for TableVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable, ordered view over a set of phonetic units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhonemeTable {
    units: &'static [PhoneticUnit],
}

impl PhonemeTable {
    /// Standard English phoneme table
    pub const STANDARD: Self = Self {
        units: &STANDARD_UNITS,
    };

    /// Table without the visually confusable `i` and `l`
    pub const UNAMBIGUOUS: Self = Self {
        units: &UNAMBIGUOUS_UNITS,
    };

    /// Wrap a caller-provided unit list
    #[must_use]
    pub const fn new(units: &'static [PhoneticUnit]) -> Self {
        Self { units }
    }

    /// Build a unit for use in a caller-provided table
    #[must_use]
    pub const fn unit(text: &'static str, categories: Category) -> PhoneticUnit {
        PhoneticUnit { text, categories }
    }

    /// All units in table order
    #[must_use]
    pub const fn units(&self) -> &'static [PhoneticUnit] {
        self.units
    }

    /// Number of units in the table
    #[must_use]
    pub const fn size(&self) -> usize {
        self.units.len()
    }

    /// Unit at `index`, if any
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'static PhoneticUnit> {
        self.units.get(index)
    }

    /// Look up a unit by its text
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&'static PhoneticUnit> {
        self.units.iter().find(|unit| unit.text == text)
    }
}
