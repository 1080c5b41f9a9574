//! Charts and readings are pure functions of the birth data and options.

use aztro_predict::dosha::mangal_dosha;
use aztro_predict::report::{comprehensive_chart, ChartReading};
use aztro_predict::{calculate_chart, BirthProfile, ChartOptions, House};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn profile(dob: &str, time: &str, location: &str) -> BirthProfile {
    BirthProfile::parse(dob, Some(time), Some(location), Some("Test Person"), "12:00", "delhi").unwrap()
}

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

#[rstest]
#[case("1990-05-15", "06:30", "mumbai")]
#[case("1969-07-20", "20:17", "new-york")]
#[case("2004-02-29", "00:05", "kathmandu")]
fn identical_input_identical_output(#[case] dob: &str, #[case] time: &str, #[case] location: &str) {
    let render = || {
        let reading = ChartReading::compute(profile(dob, time, location), &ChartOptions::default(), as_of());
        serde_json::to_string(&comprehensive_chart(&reading)).unwrap()
    };
    assert_eq!(render(), render());
}

#[test]
fn chart_fields_stay_in_range() {
    let chart = calculate_chart(&profile("1975-11-30", "14:45", "kolkata"), &ChartOptions::default());
    for position in &chart.planets {
        assert!((0.0..360.0).contains(&position.longitude));
        assert!((0.0..30.0).contains(&position.degree));
        assert!(position.strength <= 100);
        assert!((1..=4).contains(&position.nakshatra.pada));
    }
    let occupants: usize = chart.houses.iter().map(|h| h.planets.len()).sum();
    assert_eq!(occupants, 9);
    for house in &chart.houses {
        if house.planets.is_empty() {
            assert_eq!(house.aggregate_strength, 0.0);
        }
    }
}

#[test]
fn jitter_zero_removes_seed_dependence_from_strength() {
    let options = ChartOptions {
        strength_jitter: 0,
        ..ChartOptions::default()
    };
    // Same instant and place, different names: only the seed differs.
    let a = BirthProfile::parse("1990-05-15", Some("06:30"), Some("pune"), Some("A"), "12:00", "delhi").unwrap();
    let b = BirthProfile::parse("1990-05-15", Some("06:30"), Some("pune"), Some("B"), "12:00", "delhi").unwrap();
    let (ca, cb) = (calculate_chart(&a, &options), calculate_chart(&b, &options));
    for (pa, pb) in ca.planets.iter().zip(cb.planets.iter()) {
        assert_eq!(pa.strength, pb.strength);
        assert_eq!(pa.house, pb.house);
    }
}

#[test]
fn ayanamsa_shifts_longitudes() {
    let p = profile("1990-05-15", "06:30", "mumbai");
    let lahiri = calculate_chart(&p, &ChartOptions::default());
    let shifted = calculate_chart(
        &p,
        &ChartOptions {
            ayanamsa: 23.14,
            ..ChartOptions::default()
        },
    );
    let sun_a = lahiri.planets[0].longitude;
    let sun_b = shifted.planets[0].longitude;
    assert!(((sun_b - sun_a).rem_euclid(360.0) - 1.0).abs() < 1e-9);
}

#[test]
fn mangal_dosha_reports_three_references() {
    let chart = calculate_chart(&profile("1982-04-04", "04:04", "chennai"), &ChartOptions::default());
    let dosha = mangal_dosha(&chart);
    assert_eq!(dosha.references.len(), 3);
    assert_eq!(dosha.present, dosha.references.iter().any(|r| r.afflicted));
    for reference in &dosha.references {
        assert!((House::First..=House::Twelfth).contains(&reference.house));
    }
}
