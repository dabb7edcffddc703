//! Output formatting for generated passwords

use serde_json::{Value, json};
use std::error::Error;
use std::io::{self, Write};
use sylpass::{Category, PhonemeTable, TableVariant};

/// Write `count` passwords, one per line, as `next` produces them
pub fn stream_plain<W, F>(out: &mut W, count: usize, mut next: F) -> Result<(), Box<dyn Error>>
where
    W: Write,
    F: FnMut() -> sylpass::Result<String>,
{
    for _ in 0..count {
        let password = next()?;
        writeln!(out, "{password}")?;
    }
    Ok(())
}

/// Dump flag values and the units of `table`
pub fn write_table(out: &mut impl Write, table: &PhonemeTable) -> io::Result<()> {
    writeln!(out, "Element flags:")?;
    writeln!(out, " Vowel:     {:08b}", Category::VOWEL)?;
    writeln!(out, " Consonant: {:08b}", Category::CONSONANT)?;
    writeln!(out, " Dipthong:  {:08b}", Category::DIPTHONG)?;
    writeln!(out, " NotFirst:  {:08b}", Category::NOT_FIRST)?;
    writeln!(out)?;
    for unit in table.units() {
        writeln!(out, "{:>3}: flags: {:08b}", unit.text, unit.categories)?;
    }
    writeln!(out)
}

/// JSON document describing a run
pub fn to_json(
    variant: TableVariant,
    length: usize,
    passwords: &[String],
    table: Option<&PhonemeTable>,
) -> Value {
    let mut doc = json!({
        "success": true,
        "variant": variant.name(),
        "length": length,
        "passwords": passwords,
    });
    if let Some(table) = table {
        doc["table"] = table
            .units()
            .iter()
            .map(|unit| json!({ "text": unit.text, "flags": unit.categories.bits() }))
            .collect();
    }
    doc
}
