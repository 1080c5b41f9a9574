//! Known numerology readings and the invariants every reading keeps.

use aztro_predict::loshu::lo_shu_grid;
use aztro_predict::numerology::{bhagyank, mulank, name_number, reduce_number, MASTER_NUMBERS};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

fn in_range(n: u32) -> bool {
    (1..=9).contains(&n) || MASTER_NUMBERS.contains(&n)
}

#[rstest]
#[case("1990-05-15", 3, 6)]
#[case("15/05/1990", 3, 6)]
#[case("1985-12-29", 1, 11)]
#[case("2000-01-01", 4, 1)]
#[case(" 1992-09-29 ", 5, 11)]
fn golden_dates(#[case] dob: &str, #[case] destiny: u32, #[case] root: u32) {
    assert_eq!(bhagyank(dob).unwrap(), destiny);
    assert_eq!(mulank(dob).unwrap(), root);
}

#[rstest]
#[case("RAM", 7)]
#[case("Ram", 7)]
#[case("Asha", 1)]
fn golden_names(#[case] name: &str, #[case] expected: u32) {
    assert_eq!(name_number(name).unwrap(), expected);
}

#[test]
fn lo_shu_for_1990_05_15() {
    let grid = lo_shu_grid("1990-05-15").unwrap();
    assert_eq!(grid.count(1), 2);
    assert_eq!(grid.count(5), 2);
    assert_eq!(grid.count(9), 2);
    assert_eq!(grid.zero_count, 2);
    assert_eq!(grid.digit_count, 6);
    assert_eq!(grid.analysis.repeated_numbers, vec![1, 5, 9]);
    assert_eq!(grid.analysis.missing_numbers, vec![2, 3, 4, 6, 7, 8]);
}

proptest! {
    #[test]
    fn reduction_lands_in_range_and_is_idempotent(n in 1u32..1_000_000) {
        let reduced = reduce_number(n);
        prop_assert!(in_range(reduced));
        prop_assert_eq!(reduce_number(reduced), reduced);
    }

    #[test]
    fn every_valid_date_reduces_into_range(y in 1900i32..2100, m in 1u32..=12, d in 1u32..=28) {
        let dob = format!("{y:04}-{m:02}-{d:02}");
        prop_assert!(in_range(bhagyank(&dob).unwrap()));
        prop_assert!(in_range(mulank(&dob).unwrap()));

        let grid = lo_shu_grid(&dob).unwrap();
        let counted: u32 = (1..=9).map(|digit| grid.count(digit)).sum();
        prop_assert_eq!(counted, grid.digit_count);
        for digit in &grid.analysis.missing_numbers {
            prop_assert!(!grid.analysis.repeated_numbers.contains(digit));
        }
    }
}
