//! Test that both phoneme tables carry the exact published units and flags

use std::collections::BTreeSet;
use sylpass::{Category, PhonemeTable, TableVariant};

const C: u8 = 0x1;
const V: u8 = 0x2;
const D: u8 = 0x4;
const NF: u8 = 0x8;

const STANDARD: [(&str, u8); 40] = [
    ("a", V),
    ("ae", V | D),
    ("ah", V | D),
    ("ai", V | D),
    ("b", C),
    ("c", C),
    ("ch", C | D),
    ("d", C),
    ("e", V),
    ("ee", V | D),
    ("ei", V | D),
    ("f", C),
    ("g", C),
    ("gh", C | D | NF),
    ("h", C),
    ("i", V),
    ("ie", V | D),
    ("j", C),
    ("k", C),
    ("l", C),
    ("m", C),
    ("n", C),
    ("ng", C | D | NF),
    ("o", V),
    ("oh", V | D),
    ("oo", V | D),
    ("p", C),
    ("ph", C | D),
    ("qu", C | D),
    ("r", C),
    ("s", C),
    ("sh", C | D),
    ("t", C),
    ("th", C | D),
    ("u", V),
    ("v", C),
    ("w", C),
    ("x", C),
    ("y", C),
    ("z", C),
];

const UNAMBIGUOUS: [(&str, u8); 40] = [
    ("a", V),
    ("ae", V | D),
    ("ah", V | D),
    ("ay", V | D),
    ("b", C),
    ("c", C),
    ("ch", C | D),
    ("d", C),
    ("e", V),
    ("ee", V | D),
    ("eh", V | D),
    ("ey", V | D),
    ("f", C),
    ("g", C),
    ("gh", C | D | NF),
    ("h", C),
    ("ye", V | D),
    ("j", C),
    ("k", C),
    ("m", C),
    ("n", C),
    ("ng", C | D | NF),
    ("o", V),
    ("oh", V | D),
    ("oo", V | D),
    ("p", C),
    ("ph", C | D),
    ("qu", C | D),
    ("r", C),
    ("s", C),
    ("sh", C | D),
    ("t", C),
    ("th", C | D),
    ("u", V),
    ("uo", V | D),
    ("v", C),
    ("w", C),
    ("x", C),
    ("y", C),
    ("z", C),
];

fn flatten(table: &PhonemeTable) -> Vec<(&'static str, u8)> {
    table
        .units()
        .iter()
        .map(|unit| (unit.text, unit.categories.bits()))
        .collect()
}

fn texts(table: &PhonemeTable) -> BTreeSet<&'static str> {
    table.units().iter().map(|unit| unit.text).collect()
}

#[test]
fn test_standard_table_is_exact() {
    assert_eq!(flatten(&PhonemeTable::STANDARD), STANDARD.to_vec());
    assert_eq!(PhonemeTable::STANDARD.size(), 40);
}

#[test]
fn test_unambiguous_table_is_exact() {
    assert_eq!(flatten(&PhonemeTable::UNAMBIGUOUS), UNAMBIGUOUS.to_vec());
    assert_eq!(PhonemeTable::UNAMBIGUOUS.size(), 40);
}

#[test]
fn test_unambiguous_differs_only_in_confusable_units() {
    let standard = texts(&PhonemeTable::STANDARD);
    let unambiguous = texts(&PhonemeTable::UNAMBIGUOUS);

    let removed: Vec<_> = standard.difference(&unambiguous).copied().collect();
    let added: Vec<_> = unambiguous.difference(&standard).copied().collect();
    assert_eq!(removed, vec!["ai", "ei", "i", "ie", "l"]);
    assert_eq!(added, vec!["ay", "eh", "ey", "uo", "ye"]);

    for text in added {
        let unit = PhonemeTable::UNAMBIGUOUS
            .find(text)
            .expect("added unit is present");
        assert_eq!(unit.categories, Category::VOWEL | Category::DIPTHONG);
    }
}

#[test]
fn test_units_are_short_lowercase_ascii() {
    for variant in [TableVariant::Standard, TableVariant::Unambiguous] {
        for unit in variant.table().units() {
            assert!(!unit.is_empty(), "{variant}: empty unit");
            assert!(unit.len() <= 2, "{variant}: {} too long", unit.text);
            assert!(unit.text.bytes().all(|b| b.is_ascii_lowercase()));
            assert!(
                unit.is(Category::CONSONANT) != unit.is(Category::VOWEL),
                "{variant}: {} must be exactly one of consonant or vowel",
                unit.text
            );
        }
    }
}

#[test]
fn test_unambiguous_table_has_no_confusable_letters() {
    for unit in PhonemeTable::UNAMBIGUOUS.units() {
        assert!(!unit.text.contains('l'), "{} contains l", unit.text);
        assert!(!unit.text.contains('i'), "{} contains i", unit.text);
    }
}

#[test]
fn test_not_first_units() {
    for variant in [TableVariant::Standard, TableVariant::Unambiguous] {
        let not_first: Vec<_> = variant
            .table()
            .units()
            .iter()
            .filter(|unit| unit.is(Category::NOT_FIRST))
            .map(|unit| unit.text)
            .collect();
        assert_eq!(not_first, vec!["gh", "ng"]);
    }
}
