// File: src/core/latin.rs
//! Latin number stems used to build zillion names, after Conway & Guy,
//! *The Book of Numbers*, pp. 14-15.

/// Stems for the units digit of a zillion group.
pub const UNITS: [&str; 10] = [
    "", "un", "duo", "tre", "quattuor", "quinqua", "se", "septe", "octo", "nove",
];

/// Stems for the tens digit of a zillion group.
pub const TENS: [&str; 10] = [
    "",
    "deci",
    "viginti",
    "triginta",
    "quadraginta",
    "quinquaginta",
    "sexaginta",
    "septuaginta",
    "octoginta",
    "nonaginta",
];

/// Stems for the hundreds digit of a zillion group.
pub const HUNDREDS: [&str; 10] = [
    "",
    "centi",
    "ducenti",
    "trecenti",
    "quadringenti",
    "quingenti",
    "sescenti",
    "septingenti",
    "octingenti",
    "nongenti",
];

/// Neighbors that turn "tre" into "tres" and "se" into "ses".
pub const S: &[&str] = &[
    "viginti",
    "triginta",
    "quadraginta",
    "quinquaginta",
    "trecenti",
    "quadringenti",
    "quingenti",
];

/// Neighbors that turn "tre" into "tres" and "se" into "sex".
pub const X: &[&str] = &["octoginta", "centi", "octingenti"];

/// Neighbors that give "septe" and "nove" a trailing "m".
pub const M: &[&str] = &["viginti", "octoginta", "octingenti"];

/// Neighbors that give "septe" and "nove" a trailing "n".
pub const N: &[&str] = &[
    "deci",
    "triginta",
    "quadraginta",
    "quinquaginta",
    "sexaginta",
    "septuaginta",
    "centi",
    "ducenti",
    "trecenti",
    "quadringenti",
    "quingenti",
    "sescenti",
    "septingenti",
];

/// Applies the euphonic change a units stem undergoes in front of `neighbor`,
/// the next nonempty stem above it. Stems without a rule come back unchanged.
pub fn correct_units_stem(units: &str, neighbor: &str) -> String {
    let mut stem = units.to_string();
    match units {
        "tre" if S.contains(&neighbor) || X.contains(&neighbor) => stem.push('s'),
        "se" if S.contains(&neighbor) => stem.push('s'),
        "se" if X.contains(&neighbor) => stem.push('x'),
        "septe" | "nove" if M.contains(&neighbor) => stem.push('m'),
        "septe" | "nove" if N.contains(&neighbor) => stem.push('n'),
        _ => {}
    }
    stem
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_digit_is_empty_in_every_table() {
        assert_eq!(UNITS[0], "");
        assert_eq!(TENS[0], "");
        assert_eq!(HUNDREDS[0], "");
    }

    #[test]
    fn classification_sets_only_name_real_stems() {
        for stem in S.iter().chain(X).chain(M).chain(N) {
            assert!(
                TENS.contains(stem) || HUNDREDS.contains(stem),
                "{stem} is not a tens or hundreds stem"
            );
        }
    }

    #[test]
    fn corrections() {
        assert_eq!(correct_units_stem("tre", "viginti"), "tres");
        assert_eq!(correct_units_stem("tre", "centi"), "tres");
        assert_eq!(correct_units_stem("tre", "deci"), "tre");
        assert_eq!(correct_units_stem("se", "viginti"), "ses");
        assert_eq!(correct_units_stem("se", "octoginta"), "sex");
        assert_eq!(correct_units_stem("se", "deci"), "se");
        assert_eq!(correct_units_stem("septe", "viginti"), "septem");
        assert_eq!(correct_units_stem("nove", "deci"), "noven");
        assert_eq!(correct_units_stem("nove", "nonaginta"), "nove");
        assert_eq!(correct_units_stem("duo", "viginti"), "duo");
    }
}
