// File: src/core/zillion.rs
use crate::core::latin::{correct_units_stem, HUNDREDS, TENS, UNITS};
use crate::core::types::ZillionIndex;

/// The named zillions, 10^3 through 10^30.
const SCALE_WORDS: [&str; 10] = [
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
    "sextillion",
    "septillion",
    "octillion",
    "nonillion",
];

/// Partial prefixes for single-digit zillion groups, i.e. the scale words
/// from "million" up with their trailing "on" removed.
const SMALL_PREFIXES: [&str; 10] = [
    "nilli",
    "milli",
    "billi",
    "trilli",
    "quadrilli",
    "quintilli",
    "sextilli",
    "septilli",
    "octilli",
    "nonilli",
];

/// Builds the partial name, ending in "illi", for a zillion group `value`
/// in 0..=999. A zero group (padding inside a larger index) is "nilli".
pub fn partial_prefix(value: u16) -> String {
    debug_assert!(value < 1000, "zillion group out of range: {value}");
    if value < 10 {
        return SMALL_PREFIXES[usize::from(value)].to_string();
    }

    let hundreds = HUNDREDS[usize::from(value / 100 % 10)];
    let tens = TENS[usize::from(value / 10 % 10)];
    let units = UNITS[usize::from(value % 10)];

    let neighbor = if !tens.is_empty() { tens } else { hundreds };
    let units = if units.is_empty() || neighbor.is_empty() {
        units.to_string()
    } else {
        correct_units_stem(units, neighbor)
    };

    // Least significant stem first; the last stem loses its final vowel.
    let mut prefix = units;
    prefix.push_str(tens);
    prefix.push_str(hundreds);
    prefix.pop();
    prefix.push_str("illi");
    prefix
}

/// The scale word for 10^(3n + 3), synthesizing names past "nonillion".
pub fn suffix_for(n: ZillionIndex) -> String {
    suffix_with(n, partial_prefix)
}

/// Like [`suffix_for`], but sources each group's partial prefix from
/// `prefix_of`, so callers can memoize the prefixes.
pub fn suffix_with(n: ZillionIndex, mut prefix_of: impl FnMut(u16) -> String) -> String {
    if n < SCALE_WORDS.len() as ZillionIndex {
        return SCALE_WORDS[n as usize].to_string();
    }

    let mut groups = Vec::new();
    let mut rest = n;
    while rest > 0 {
        groups.push((rest % 1000) as u16);
        rest /= 1000;
    }

    let mut suffix: String = groups.into_iter().rev().map(&mut prefix_of).collect();
    suffix.push_str("on");
    suffix
}
