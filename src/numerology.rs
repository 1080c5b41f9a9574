//! Numeric derivation: bhagyank, mulank, name number and friends.
//!
//! All reductions share [`reduce_number`], which stops at a single digit or
//! at one of the master numbers 11, 22 and 33.

use chrono::{Datelike, NaiveDate};

use crate::error::{AstrologyError, Result};
use crate::Relationship;

pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];

/// Parse a birth date in `YYYY-MM-DD` or `DD/MM/YYYY` form.
pub fn parse_birth_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AstrologyError::invalid("dateOfBirth is required"));
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| {
            AstrologyError::invalid(format!(
                "invalid date '{trimmed}', expected YYYY-MM-DD or DD/MM/YYYY"
            ))
        })
}

pub fn is_master_number(n: u32) -> bool {
    MASTER_NUMBERS.contains(&n)
}

pub fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Repeated digit sum that keeps master numbers intact. `0` stays `0`.
pub fn reduce_number(mut n: u32) -> u32 {
    while n > 9 && !is_master_number(n) {
        n = digit_sum(n);
    }
    n
}

/// Sum of every digit in the date string.
fn sum_of_digits(text: &str) -> u32 {
    text.chars().filter_map(|c| c.to_digit(10)).sum()
}

/// Destiny number: every digit of the date, reduced.
pub fn bhagyank(date_of_birth: &str) -> Result<u32> {
    parse_birth_date(date_of_birth)?;
    Ok(reduce_number(sum_of_digits(date_of_birth)))
}

/// Root number: the day of the month, reduced.
pub fn mulank(date_of_birth: &str) -> Result<u32> {
    let date = parse_birth_date(date_of_birth)?;
    Ok(reduce_number(date.day()))
}

/// Chaldean value of a letter. No letter carries 9.
pub fn chaldean_value(letter: char) -> Option<u32> {
    let value = match letter.to_ascii_uppercase() {
        'A' | 'I' | 'J' | 'Q' | 'Y' => 1,
        'B' | 'K' | 'R' => 2,
        'C' | 'G' | 'L' | 'S' => 3,
        'D' | 'M' | 'T' => 4,
        'E' | 'H' | 'N' | 'X' => 5,
        'U' | 'V' | 'W' => 6,
        'O' | 'Z' => 7,
        'F' | 'P' => 8,
        _ => return None,
    };
    Some(value)
}

pub fn name_number(full_name: &str) -> Result<u32> {
    let values: Vec<u32> = full_name.chars().filter_map(chaldean_value).collect();
    if values.is_empty() {
        return Err(AstrologyError::invalid(
            "fullName must contain at least one letter A-Z",
        ));
    }
    Ok(reduce_number(values.iter().sum()))
}

/// Personal year cycle for `year`, using the birth day and month.
pub fn personal_year(date: NaiveDate, year: i32) -> u32 {
    let raw = digit_sum(date.day()) + digit_sum(date.month()) + digit_sum(year.unsigned_abs());
    reduce_number(raw)
}

/// Master numbers relate through their root digit.
pub fn root_digit(n: u32) -> u32 {
    let mut n = n;
    while n > 9 {
        n = digit_sum(n);
    }
    n
}

/// Friendship between two numbers, following their ruling planets.
pub fn number_compatibility(a: u32, b: u32) -> Relationship {
    let (a, b) = (root_digit(a), root_digit(b));
    if a == b {
        return Relationship::Friend;
    }
    let friends: &[u32] = match a {
        1 => &[2, 3, 9],
        2 => &[1, 3, 5],
        3 => &[1, 2, 9],
        4 => &[5, 6, 8],
        5 => &[2, 4, 6],
        6 => &[4, 5, 8],
        7 => &[1, 2, 4],
        8 => &[4, 5, 6],
        9 => &[1, 3, 6],
        _ => &[],
    };
    let enemies: &[u32] = match a {
        1 => &[6, 8],
        2 => &[4, 8, 9],
        3 => &[5, 6],
        4 => &[1, 2, 9],
        5 => &[9],
        6 => &[1, 3],
        7 => &[8, 9],
        8 => &[1, 2, 7],
        9 => &[2, 4, 5],
        _ => &[],
    };

    if friends.contains(&b) {
        Relationship::Friend
    } else if enemies.contains(&b) {
        Relationship::Enemy
    } else {
        Relationship::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("1990-05-15", 3)]
    #[case("15/05/1990", 3)]
    #[case("1985-12-29", 1)]
    #[case("2000-01-01", 4)]
    #[case("1992-09-29", 5)]
    fn bhagyank_reduces_all_digits(#[case] date: &str, #[case] expected: u32) {
        assert_eq!(bhagyank(date).unwrap(), expected);
    }

    #[test]
    fn bhagyank_keeps_master_numbers() {
        // 38 -> 11
        assert_eq!(bhagyank("1991-09-09").unwrap(), 11);
        assert_eq!(bhagyank("1990-01-11").unwrap(), 22);
    }

    #[rstest]
    #[case("1990-05-15", 6)]
    #[case("1990-05-29", 11)]
    #[case("1990-05-22", 22)]
    #[case("1990-05-09", 9)]
    #[case("1990-05-31", 4)]
    fn mulank_reduces_day(#[case] date: &str, #[case] expected: u32) {
        assert_eq!(mulank(date).unwrap(), expected);
    }

    #[test]
    fn name_number_uses_chaldean_values() {
        assert_eq!(name_number("RAM").unwrap(), 7);
        assert_eq!(name_number("ram").unwrap(), 7);
        assert_eq!(name_number("R. A-M!").unwrap(), 7);
    }

    #[test]
    fn name_without_letters_is_rejected() {
        assert!(matches!(name_number("1234 !!"), Err(AstrologyError::InvalidInput(_))));
        assert!(matches!(name_number(""), Err(AstrologyError::InvalidInput(_))));
    }

    #[rstest]
    #[case("")]
    #[case("15-05-1990")]
    #[case("1990/05/15")]
    #[case("1990-02-30")]
    #[case("yesterday")]
    fn unparseable_dates_fail(#[case] input: &str) {
        assert!(matches!(parse_birth_date(input), Err(AstrologyError::InvalidInput(_))));
        assert!(bhagyank(input).is_err());
        assert!(mulank(input).is_err());
    }

    #[test]
    fn personal_year_combines_day_month_and_year() {
        let date = parse_birth_date("1990-05-15").unwrap();
        // 1+5 + 5 + 2+0+2+6 = 21 -> 3
        assert_eq!(personal_year(date, 2026), 3);
    }

    #[test]
    fn compatibility_is_reflexive_and_uses_roots() {
        assert_eq!(number_compatibility(4, 4), Relationship::Friend);
        assert_eq!(number_compatibility(11, 2), Relationship::Friend);
        assert_eq!(number_compatibility(1, 8), Relationship::Enemy);
        assert_eq!(number_compatibility(1, 4), Relationship::Neutral);
    }

    proptest! {
        #[test]
        fn reduction_lands_in_valid_set(n in 1u32..10_000_000) {
            let reduced = reduce_number(n);
            prop_assert!((1..=9).contains(&reduced) || is_master_number(reduced));
            prop_assert_eq!(reduce_number(reduced), reduced);
        }

        #[test]
        fn date_numbers_are_in_range(year in 1900i32..2100, month in 1u32..=12, day in 1u32..=28) {
            let date = format!("{year:04}-{month:02}-{day:02}");
            let b = bhagyank(&date).unwrap();
            let m = mulank(&date).unwrap();
            prop_assert!((1..=9).contains(&b) || is_master_number(b));
            prop_assert!((1..=9).contains(&m) || is_master_number(m));
        }

        #[test]
        fn names_reduce_into_range(name in "[A-Za-z]{1,12}( [A-Za-z]{1,12}){0,2}") {
            let n = name_number(&name).unwrap();
            prop_assert!((1..=9).contains(&n) || is_master_number(n));
        }
    }
}
