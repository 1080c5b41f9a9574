//! Vimshottari dasha periods.
//!
//! The 120-year cycle starts from the lord of the Moon's nakshatra. The first
//! mahadasha is shortened by the part of the nakshatra the Moon has already
//! crossed.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::tables::planet_profile;
use crate::{CelestialBody, Nakshatra, NAKSHATRA_SPAN};

pub const CYCLE_YEARS: f64 = 120.0;
const DAYS_PER_YEAR: f64 = 365.25;

/// Mahadasha lords in sequence, with their length in years.
pub const DASHA_YEARS: [(CelestialBody, f64); 9] = [
    (CelestialBody::Ketu, 7.0),
    (CelestialBody::Venus, 20.0),
    (CelestialBody::Sun, 6.0),
    (CelestialBody::Moon, 10.0),
    (CelestialBody::Mars, 7.0),
    (CelestialBody::Rahu, 18.0),
    (CelestialBody::Jupiter, 16.0),
    (CelestialBody::Saturn, 19.0),
    (CelestialBody::Mercury, 17.0),
];

pub fn dasha_years(lord: CelestialBody) -> f64 {
    DASHA_YEARS
        .iter()
        .find(|(body, _)| *body == lord)
        .map(|(_, years)| *years)
        .unwrap_or(0.0)
}

fn sequence_from(lord: CelestialBody) -> impl Iterator<Item = (CelestialBody, f64)> {
    let start = DASHA_YEARS
        .iter()
        .position(|(body, _)| *body == lord)
        .unwrap_or(0);
    DASHA_YEARS.iter().copied().cycle().skip(start).take(DASHA_YEARS.len())
}

fn add_years(date: NaiveDate, years: f64) -> NaiveDate {
    let days = (years * DAYS_PER_YEAR).round() as i64;
    date.checked_add_signed(Duration::days(days))
        .unwrap_or(if days < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashaPeriod {
    pub lord: CelestialBody,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub years: f64,
}

impl DashaPeriod {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    /// Sub-periods, each lasting `mahadasha × antardasha / 120` years.
    ///
    /// `nominal_offset` is where the full period would have begun, in years
    /// from `anchor`. Sub-periods ending before `self.start` are dropped and
    /// the first kept one is clipped.
    fn split(&self, anchor: NaiveDate, nominal_offset: f64) -> Vec<DashaPeriod> {
        let full_years = dasha_years(self.lord);
        let mut offset = nominal_offset;
        let mut start = add_years(anchor, offset);
        let mut periods = Vec::with_capacity(DASHA_YEARS.len());
        for (i, (lord, years)) in sequence_from(self.lord).enumerate() {
            let length = full_years * years / CYCLE_YEARS;
            offset += length;
            let end = if i == DASHA_YEARS.len() - 1 {
                self.end
            } else {
                add_years(anchor, offset)
            };
            if end > self.start {
                periods.push(DashaPeriod {
                    lord,
                    start: start.max(self.start),
                    end,
                    years: length,
                });
            }
            start = end;
        }
        periods
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MahaDasha {
    #[serde(flatten)]
    pub period: DashaPeriod,
    pub theme: String,
    pub antardashas: Vec<DashaPeriod>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentDasha {
    pub mahadasha: DashaPeriod,
    pub antardasha: Option<DashaPeriod>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashaTimeline {
    pub moon_nakshatra: Nakshatra,
    pub starting_lord: CelestialBody,
    pub balance_years: f64,
    pub as_of: NaiveDate,
    pub mahadashas: Vec<MahaDasha>,
    pub current: Option<CurrentDasha>,
}

impl DashaTimeline {
    pub fn mahadasha_at(&self, date: NaiveDate) -> Option<&MahaDasha> {
        self.mahadashas.iter().find(|m| m.period.contains(date))
    }
}

fn theme(lord: CelestialBody) -> String {
    let profile = planet_profile(lord);
    format!(
        "{} period: matters of {} come to the fore.",
        lord.name(),
        profile.significations.join(", ")
    )
}

/// Build the timeline from the Moon's sidereal longitude at birth.
pub fn vimshottari(moon_longitude: f64, birth: NaiveDate, as_of: NaiveDate) -> DashaTimeline {
    let nakshatra = Nakshatra::from_longitude(moon_longitude);
    let starting_lord = nakshatra.lord();
    let within = moon_longitude.rem_euclid(360.0) - nakshatra.index() as f64 * NAKSHATRA_SPAN;
    let fraction_elapsed = (within / NAKSHATRA_SPAN).clamp(0.0, 1.0);
    let first_years = dasha_years(starting_lord);
    let balance_years = first_years * (1.0 - fraction_elapsed);

    let mut mahadashas = Vec::with_capacity(DASHA_YEARS.len());
    let mut offset = -(first_years - balance_years);
    let mut start = birth;
    for (i, (lord, years)) in sequence_from(starting_lord).enumerate() {
        let nominal_offset = offset;
        offset += years;
        let end = add_years(birth, offset);
        let period = DashaPeriod {
            lord,
            start,
            end,
            years: if i == 0 { balance_years } else { years },
        };
        let antardashas = period.split(birth, nominal_offset);
        mahadashas.push(MahaDasha {
            period,
            theme: theme(lord),
            antardashas,
        });
        start = end;
    }

    let current = mahadashas
        .iter()
        .find(|m| m.period.contains(as_of))
        .map(|m| {
            let antardasha = m.antardashas.iter().find(|a| a.contains(as_of)).cloned();
            let description = match &antardasha {
                Some(sub) => format!(
                    "Running {} mahadasha with {} antardasha until {}.",
                    m.period.lord, sub.lord, sub.end
                ),
                None => format!("Running {} mahadasha until {}.", m.period.lord, m.period.end),
            };
            CurrentDasha {
                mahadasha: m.period.clone(),
                antardasha,
                description,
            }
        });

    DashaTimeline {
        moon_nakshatra: nakshatra,
        starting_lord,
        balance_years,
        as_of,
        mahadashas,
        current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn cycle_totals_120_years() {
        let total: f64 = DASHA_YEARS.iter().map(|(_, y)| y).sum();
        assert_abs_diff_eq!(total, CYCLE_YEARS);
    }

    #[test]
    fn start_of_nakshatra_gives_full_first_period() {
        // 0° sidereal is the start of Ashwini, ruled by Ketu.
        let timeline = vimshottari(0.0, date(2000, 1, 1), date(2000, 6, 1));
        assert_eq!(timeline.starting_lord, CelestialBody::Ketu);
        assert_abs_diff_eq!(timeline.balance_years, 7.0);
        assert_eq!(timeline.mahadashas.len(), 9);
        assert_eq!(timeline.mahadashas[1].period.lord, CelestialBody::Venus);
        assert_eq!(timeline.mahadashas[0].antardashas[0].lord, CelestialBody::Ketu);
        assert_eq!(timeline.mahadashas[0].antardashas.len(), 9);
    }

    #[test]
    fn midpoint_halves_the_balance() {
        // Middle of Bharani (Venus): ten of twenty years remain.
        let timeline = vimshottari(NAKSHATRA_SPAN * 1.5, date(1990, 5, 15), date(1990, 5, 15));
        assert_eq!(timeline.starting_lord, CelestialBody::Venus);
        assert_abs_diff_eq!(timeline.balance_years, 10.0, epsilon = 1e-9);
        let first = &timeline.mahadashas[0].period;
        assert_eq!(first.start, date(1990, 5, 15));
        let expected_end = add_years(date(1990, 5, 15), 10.0);
        assert!((first.end - expected_end).num_days().abs() <= 1);
        // Antardashas of the partial period begin part-way through the sequence.
        let subs = &timeline.mahadashas[0].antardashas;
        assert!(subs.len() < 9);
        assert_eq!(subs[0].start, date(1990, 5, 15));
        assert_eq!(subs.last().map(|s| s.end), Some(first.end));
    }

    #[test]
    fn periods_are_contiguous() {
        let timeline = vimshottari(200.0, date(1985, 12, 29), date(2026, 10, 19));
        for pair in timeline.mahadashas.windows(2) {
            assert_eq!(pair[0].period.end, pair[1].period.start);
        }
        for maha in &timeline.mahadashas {
            for pair in maha.antardashas.windows(2) {
                assert_eq!(pair[0].end, pair[1].start);
            }
        }
    }

    #[test]
    fn current_period_contains_as_of() {
        let as_of = date(2026, 10, 19);
        let timeline = vimshottari(123.4, date(1990, 5, 15), as_of);
        let current = timeline.current.as_ref().unwrap();
        assert!(current.mahadasha.contains(as_of));
        assert!(current.antardasha.as_ref().unwrap().contains(as_of));
        assert_eq!(
            timeline.mahadasha_at(as_of).map(|m| m.period.lord),
            Some(current.mahadasha.lord)
        );
    }

    #[test]
    fn before_birth_has_no_current_period() {
        let timeline = vimshottari(10.0, date(1990, 5, 15), date(1980, 1, 1));
        assert!(timeline.current.is_none());
    }
}
