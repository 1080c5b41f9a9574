//! Narrative readings assembled from chart facts and the static tables.
//!
//! Wherever a reading has several equivalent phrasings, the variant is chosen
//! from the birth profile's seed, so the same profile always reads the same.

mod career;
mod general;
mod marriage;

pub use career::{career_analysis, CareerAnalysis, FavourablePeriod};
pub use general::{general_predictions, MAX_GENERAL_PREDICTIONS};
pub use marriage::{marriage_analysis, MarriageAnalysis, MarriageTiming, SpouseProfile};

use serde::Serialize;
use xxhash_rust::xxh64::xxh64;

use crate::dasha::DashaTimeline;
use crate::dosha::MangalDosha;
use crate::ephemeris::Chart;
use crate::profile::BirthProfile;
use crate::remedies::{suggest_remedies, RemedyReport};
use crate::yogas::YogaInfo;

/// Everything a reading is derived from.
#[derive(Debug, Clone, Copy)]
pub struct ReadingContext<'a> {
    pub profile: &'a BirthProfile,
    pub chart: &'a Chart,
    pub dasha: &'a DashaTimeline,
    pub dosha: &'a MangalDosha,
    pub yogas: &'a [YogaInfo],
}

impl ReadingContext<'_> {
    /// Phrase variant for `slot`; stable for a given profile.
    pub(crate) fn pick<'p>(&self, slot: &str, options: &[&'p str]) -> &'p str {
        pick(self.profile.seed(), slot, options)
    }
}

pub(crate) fn pick<'p>(seed: u64, slot: &str, options: &[&'p str]) -> &'p str {
    if options.is_empty() {
        return "";
    }
    let index = xxh64(slot.as_bytes(), seed) % options.len() as u64;
    options[index as usize]
}

pub(crate) fn ordinal(n: u8) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionReport {
    pub career: CareerAnalysis,
    pub marriage: MarriageAnalysis,
    pub general: Vec<String>,
    pub remedies: RemedyReport,
}

pub fn predict(ctx: &ReadingContext<'_>) -> PredictionReport {
    let _span = tracing::debug_span!("predict").entered();
    PredictionReport {
        career: career_analysis(ctx),
        marriage: marriage_analysis(ctx),
        general: general_predictions(ctx),
        remedies: suggest_remedies(ctx.chart, ctx.dosha),
    }
}

#[cfg(test)]
pub(crate) mod fixture {
    use chrono::NaiveDate;

    use crate::dasha::{vimshottari, DashaTimeline};
    use crate::dosha::{mangal_dosha, MangalDosha};
    use crate::ephemeris::{calculate_chart, whole_sign_house, Chart, ChartOptions};
    use crate::profile::BirthProfile;
    use crate::yogas::{detect_yogas, YogaInfo};
    use crate::{CelestialBody, House};

    pub struct Fixture {
        pub profile: BirthProfile,
        pub chart: Chart,
        pub dasha: DashaTimeline,
        pub dosha: MangalDosha,
        pub yogas: Vec<YogaInfo>,
    }

    impl Fixture {
        pub fn new(dob: &str, time: &str, location: &str) -> Self {
            let profile =
                BirthProfile::parse(dob, Some(time), Some(location), Some("Asha Verma"), "12:00", "delhi")
                    .unwrap();
            let chart = calculate_chart(&profile, &ChartOptions::default());
            Self::from_chart(profile, chart)
        }

        pub fn from_chart(profile: BirthProfile, chart: Chart) -> Self {
            let as_of = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
            let dasha = vimshottari(chart.position(CelestialBody::Moon).longitude, profile.date, as_of);
            let dosha = mangal_dosha(&chart);
            let yogas = detect_yogas(&chart);
            Fixture {
                profile,
                chart,
                dasha,
                dosha,
                yogas,
            }
        }

        pub fn ctx(&self) -> super::ReadingContext<'_> {
            super::ReadingContext {
                profile: &self.profile,
                chart: &self.chart,
                dasha: &self.dasha,
                dosha: &self.dosha,
                yogas: &self.yogas,
            }
        }

        /// Move `body` into `house`, keeping sign and house consistent.
        pub fn place(&mut self, body: CelestialBody, house: House) {
            let sign = self.chart.sign_of_house(house);
            let ascendant = self.chart.ascendant.sign;
            let position = &mut self.chart.planets[body.index()];
            position.sign = sign;
            position.house = whole_sign_house(sign, ascendant);
            position.longitude = sign.index() as f64 * 30.0 + 15.0;
            self.dosha = mangal_dosha(&self.chart);
        }

        pub fn set_strength(&mut self, body: CelestialBody, strength: u32) {
            self.chart.planets[body.index()].strength = strength;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixture::Fixture;
    use super::*;

    #[test]
    fn pick_is_stable_and_in_range() {
        let options = ["a", "b", "c"];
        let first = pick(42, "slot", &options);
        assert_eq!(first, pick(42, "slot", &options));
        assert!(options.contains(&first));
        assert_eq!(pick(42, "slot", &[]), "");
    }

    #[test]
    fn ordinals() {
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(12), "12th");
    }

    #[test]
    fn identical_profiles_read_identically() {
        let a = Fixture::new("1990-05-15", "06:30", "mumbai");
        let b = Fixture::new("1990-05-15", "06:30", "mumbai");
        let first = predict(&a.ctx());
        assert_eq!(first, predict(&b.ctx()));
        let json_a = serde_json::to_string(&first).unwrap();
        let json_b = serde_json::to_string(&predict(&b.ctx())).unwrap();
        assert_eq!(json_a, json_b);
    }
}
