//! Syllable walk
//!
//! Assembles one password by drawing units from a [`PhonemeTable`] and
//! rejecting any draw that breaks the adjacency or length rules. Rejected
//! draws are silent: the walk simply draws again. Every random decision is
//! taken from the caller's generator in a fixed order, so the output is a
//! pure function of the table, the target length and the draw sequence.

use crate::table::{Category, PhonemeTable, PhoneticUnit};
use crate::{PwgenError, Result};
use rand::Rng;
use std::fmt::Write;
use tracing::warn;

/// Consecutive rejected draws tolerated before the walk gives up
pub const MAX_CONSECUTIVE_REJECTIONS: usize = 100_000;

/// Probability, in tenths, of injecting a digit after an accepted unit
const DIGIT_CHANCE: u8 = 3;

const DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// One step of output produced by the walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emitted {
    /// An accepted phonetic unit
    Unit(&'static PhoneticUnit),
    /// An injected decimal digit
    Digit(char),
}

impl Emitted {
    /// Number of characters this step adds to the output
    #[must_use]
    pub const fn len(&self) -> usize {
        match self {
            Self::Unit(unit) => unit.len(),
            Self::Digit(_) => 1,
        }
    }

    /// Steps always add at least one character
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

/// Walk state between draws
struct Syllables {
    emitted: usize,
    first: bool,
    prev: Category,
    required: Category,
}

impl Syllables {
    fn start<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            emitted: 0,
            first: true,
            prev: Category::NONE,
            required: coin_flip(rng),
        }
    }

    fn accepts(&self, unit: &PhoneticUnit, target: usize) -> bool {
        if !unit.is(self.required) {
            return false;
        }
        if self.first && unit.is(Category::NOT_FIRST) {
            return false;
        }
        // no vowel cluster directly after a vowel sound
        if self.prev.intersects(Category::VOWEL)
            && unit.categories.contains(Category::VOWEL | Category::DIPTHONG)
        {
            return false;
        }
        unit.len() <= target - self.emitted
    }

    fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.first = true;
        self.prev = Category::NONE;
        self.emitted += 1;
        self.required = coin_flip(rng);
    }

    fn advance<R: Rng + ?Sized>(&mut self, unit: &PhoneticUnit, rng: &mut R) {
        self.required = if self.required == Category::CONSONANT {
            Category::VOWEL
        } else if self.prev.intersects(Category::VOWEL)
            || unit.is(Category::DIPTHONG)
            || rng.random_range(0..10u8) > 3
        {
            Category::CONSONANT
        } else {
            Category::VOWEL
        };
        self.prev = unit.categories;
        self.first = false;
    }
}

fn coin_flip<R: Rng + ?Sized>(rng: &mut R) -> Category {
    if rng.random_range(0..2u8) == 1 {
        Category::VOWEL
    } else {
        Category::CONSONANT
    }
}

/// Drive one walk, handing each emitted step to `emit`
///
/// # Errors
///
/// Returns an error if:
/// - `target` is zero
/// - the table is empty
/// - `emit` fails
/// - [`MAX_CONSECUTIVE_REJECTIONS`] draws in a row are rejected
pub fn visit<R, F>(table: &PhonemeTable, target: usize, rng: &mut R, mut emit: F) -> Result<()>
where
    R: Rng + ?Sized,
    F: FnMut(Emitted) -> Result<()>,
{
    if target == 0 {
        return Err(PwgenError::InvalidLength(target));
    }
    let units = table.units();
    if units.is_empty() {
        return Err(PwgenError::EmptyTable);
    }

    let mut state = Syllables::start(rng);
    let mut rejections = 0usize;

    while state.emitted < target {
        let unit = &units[rng.random_range(0..units.len())];
        if !state.accepts(unit, target) {
            rejections += 1;
            if rejections >= MAX_CONSECUTIVE_REJECTIONS {
                warn!(
                    target_length = target,
                    rejections,
                    "syllable walk hit the rejection ceiling"
                );
                return Err(PwgenError::RejectionLimit { target, rejections });
            }
            continue;
        }
        rejections = 0;

        emit(Emitted::Unit(unit))?;
        state.emitted += unit.len();
        if state.emitted >= target {
            break;
        }

        if !state.first && rng.random_range(0..10u8) < DIGIT_CHANCE {
            let digit = DIGITS[rng.random_range(0..DIGITS.len())];
            emit(Emitted::Digit(digit))?;
            state.restart(rng);
            continue;
        }

        state.advance(unit, rng);
    }
    Ok(())
}

/// Run one walk and collect the password
///
/// # Errors
///
/// See [`visit`].
pub fn run<R: Rng + ?Sized>(table: &PhonemeTable, target: usize, rng: &mut R) -> Result<String> {
    let mut password = String::with_capacity(target);
    visit(table, target, rng, |step| {
        match step {
            Emitted::Unit(unit) => password.write_str(unit.text)?,
            Emitted::Digit(digit) => password.write_char(digit)?,
        }
        Ok(())
    })?;
    Ok(password)
}

/// Run one walk and record every emitted step
///
/// # Errors
///
/// See [`visit`].
pub fn trace<R: Rng + ?Sized>(
    table: &PhonemeTable,
    target: usize,
    rng: &mut R,
) -> Result<Vec<Emitted>> {
    let mut steps = Vec::new();
    visit(table, target, rng, |step| {
        steps.push(step);
        Ok(())
    })?;
    Ok(steps)
}
