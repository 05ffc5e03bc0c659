// File: src/core/units.rs
use crate::core::types::DigitGroup;

const UNIT_NAMES: [&str; 10] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

const TEEN_NAMES: [&str; 10] = [
    "", "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen",
    "eighteen", "nineteen",
];

const TENS_NAMES: [&str; 10] = [
    "", "ten", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Names a three-digit group, e.g. `105` is "one hundred and five".
/// The all-zero group has the empty name.
pub fn name_group(group: DigitGroup) -> String {
    let (h, t, u) = (
        usize::from(group.hundreds()),
        usize::from(group.tens()),
        usize::from(group.units()),
    );
    let mut name = String::new();

    if h != 0 {
        name.push_str(UNIT_NAMES[h]);
        name.push_str(" hundred");
        if t != 0 || u != 0 {
            name.push_str(" and ");
        }
    }

    if t == 1 && u != 0 {
        name.push_str(TEEN_NAMES[u]);
    } else {
        let tens = TENS_NAMES[t];
        name.push_str(tens);
        if u != 0 {
            if !tens.is_empty() {
                name.push(' ');
            }
            name.push_str(UNIT_NAMES[u]);
        }
    }

    name
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(s: &str) -> String {
        name_group(s.parse().unwrap())
    }

    #[test]
    fn empty_group() {
        assert_eq!(named("000"), "");
    }

    #[test]
    fn units_and_teens() {
        assert_eq!(named("005"), "five");
        assert_eq!(named("010"), "ten");
        assert_eq!(named("011"), "eleven");
        assert_eq!(named("015"), "fifteen");
        assert_eq!(named("019"), "nineteen");
    }

    #[test]
    fn tens_compose_with_a_space() {
        assert_eq!(named("020"), "twenty");
        assert_eq!(named("021"), "twenty one");
        assert_eq!(named("099"), "ninety nine");
    }

    #[test]
    fn hundreds() {
        assert_eq!(named("100"), "one hundred");
        assert_eq!(named("105"), "one hundred and five");
        assert_eq!(named("110"), "one hundred and ten");
        assert_eq!(named("115"), "one hundred and fifteen");
        assert_eq!(named("999"), "nine hundred and ninety nine");
    }
}
