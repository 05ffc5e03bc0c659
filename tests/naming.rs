use numbernames_core::core::{units, zillion};
use numbernames_core::{DigitGroup, NamingError, NumberNamer, INVALID_INPUT_SENTINEL};
use proptest::prelude::*;

#[test]
fn end_to_end_examples() {
    let namer = NumberNamer::new();
    assert_eq!(
        namer.name_of("1002051", " ").unwrap(),
        "one million two thousand and fifty one"
    );
    assert_eq!(namer.name_of("7", " ").unwrap(), "seven");
    assert_eq!(namer.name_of("0", " ").unwrap(), "zero");
    assert_eq!(
        namer.name_of("1000000000000000000000000000000", " ").unwrap(),
        "one nonillion"
    );
    assert_eq!(
        namer.name_of("999999", " ").unwrap(),
        "nine hundred and ninety nine thousand nine hundred and ninety nine"
    );
}

#[test]
fn newline_separator_has_no_blank_lines() {
    let name = NumberNamer::new().name_of("1002051", "\n").unwrap();
    let lines: Vec<&str> = name.lines().collect();
    assert_eq!(lines, ["one million", "two thousand", "and fifty one"]);
    assert!(!name.starts_with('\n') && !name.ends_with('\n'));
}

#[test]
fn group_boundary_cases() {
    let group = |s: &str| units::name_group(s.parse::<DigitGroup>().unwrap());
    assert_eq!(group("000"), "");
    assert_eq!(group("005"), "five");
    assert_eq!(group("015"), "fifteen");
    assert_eq!(group("105"), "one hundred and five");
    assert_eq!(group("100"), "one hundred");
}

#[test]
fn zillion_fixed_points_and_synthesis() {
    assert_eq!(zillion::suffix_for(0), "thousand");
    assert_eq!(zillion::suffix_for(9), "nonillion");
    assert_eq!(zillion::suffix_for(10), "decillion");
    assert_eq!(zillion::suffix_for(11), "undecillion");
    assert_eq!(zillion::suffix_for(26), "sesvigintillion");
    assert_eq!(zillion::suffix_for(27), "septemvigintillion");
    assert_eq!(zillion::suffix_for(86), "sexoctogintillion");
    assert_eq!(zillion::suffix_for(1000), "millinillion");
}

#[test]
fn cached_namer_suffixes_agree_with_pure_ones() {
    let namer = NumberNamer::new();
    for n in [0, 9, 10, 26, 999, 1000, 123_456_789] {
        assert_eq!(namer.suffix_for(n), zillion::suffix_for(n));
        assert_eq!(namer.suffix_for(n), zillion::suffix_for(n));
    }
}

#[test]
fn invalid_input_is_reported() {
    let namer = NumberNamer::new();
    for bad in ["abc", "12 3", "1.5", "-1", "١٢"] {
        assert!(matches!(
            namer.name_of(bad, " "),
            Err(NamingError::InvalidInput { .. })
        ));
        assert_eq!(namer.name_or_sentinel(bad, " "), INVALID_INPUT_SENTINEL);
    }
}

proptest! {
    #[test]
    fn prop_all_zero_strings_are_zero(len in 1usize..200) {
        let zeros = "0".repeat(len);
        prop_assert_eq!(NumberNamer::new().name_of(&zeros, " ").unwrap(), "zero");
    }

    #[test]
    fn prop_non_digit_input_never_panics(s in "[0-9]{0,10}[^0-9][0-9a-z ]{0,10}") {
        let namer = NumberNamer::new();
        prop_assert!(namer.name_of(&s, " ").is_err());
        prop_assert_eq!(namer.name_or_sentinel(&s, " "), INVALID_INPUT_SENTINEL);
    }

    #[test]
    fn prop_cache_never_changes_a_name(digits in "[0-9]{1,120}") {
        let cached = NumberNamer::new();
        let uncached = NumberNamer::uncached();
        let first = cached.name_of(&digits, " ").unwrap();
        prop_assert_eq!(&first, &cached.name_of(&digits, " ").unwrap());
        prop_assert_eq!(&first, &uncached.name_of(&digits, " ").unwrap());
    }

    #[test]
    fn prop_one_line_per_nonzero_group(digits in "[1-9][0-9]{0,60}") {
        let name = NumberNamer::new().name_of(&digits, "\n").unwrap();
        let padded = format!("{}{}", "0".repeat((3 - digits.len() % 3) % 3), digits);
        let nonzero = padded.as_bytes().chunks(3).filter(|g| *g != b"000").count();
        prop_assert_eq!(name.lines().count(), nonzero);
        prop_assert!(name.lines().all(|line| !line.is_empty()));
    }

    #[test]
    fn prop_synthesized_suffixes_end_in_illion(n in 10u64..u64::MAX) {
        prop_assert!(zillion::suffix_for(n).ends_with("illion"));
    }
}
