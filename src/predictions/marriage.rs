use serde::Serialize;

use super::{FavourablePeriod, ReadingContext};
use crate::dosha::MangalDosha;
use crate::ephemeris::Chart;
use crate::scoring::Scorecard;
use crate::tables::{planet_profile, sign_profile};
use crate::{CelestialBody, House, ZodiacSign};

const MARRIAGE_AGE: std::ops::Range<f64> = 21.0..40.0;
const MAX_TIMING_PERIODS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarriageTiming {
    pub favourable_periods: Vec<FavourablePeriod>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpouseProfile {
    pub seventh_sign: ZodiacSign,
    pub seventh_lord: CelestialBody,
    pub traits: Vec<&'static str>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarriageAnalysis {
    pub likelihood: Scorecard,
    pub quality: Scorecard,
    pub timing: MarriageTiming,
    pub spouse: SpouseProfile,
    pub mangal_dosha: MangalDosha,
    pub recommendations: Vec<String>,
}

/// Likelihood and quality cards, scored side by side.
pub(crate) fn marriage_scores(chart: &Chart, dosha: &MangalDosha) -> (Scorecard, Scorecard) {
    use CelestialBody::*;

    let seventh_lord = chart.house_lord(House::Seventh);
    let venus = chart.strength(Venus);
    let in_seventh = |body| chart.is_in(body, House::Seventh);
    let rules: [(bool, &str, i32, i32); 10] = [
        (in_seventh(Jupiter), "Jupiter in the 7th", 20, 25),
        (venus > 80, "Strong Venus", 20, 15),
        (venus < 40, "Weak Venus", -10, -10),
        (in_seventh(Venus), "Venus in the 7th", 15, 10),
        (chart.strength(seventh_lord) > 70, "Strong 7th lord", 10, 10),
        (in_seventh(Saturn), "Saturn in the 7th", -15, -5),
        (in_seventh(Mars), "Mars in the 7th", -10, -15),
        (in_seventh(Rahu), "Rahu in the 7th", -10, -10),
        (in_seventh(Ketu), "Ketu in the 7th", -10, -5),
        (dosha.is_effective(), "Mangal Dosha", -15, -10),
    ];

    let mut likelihood = Scorecard::new(70);
    let mut quality = Scorecard::new(65);
    for (applies, factor, on_likelihood, on_quality) in rules {
        likelihood.adjust_if(applies, factor, on_likelihood);
        quality.adjust_if(applies, factor, on_quality);
    }
    let cancelled = dosha.present && dosha.cancelled;
    likelihood.adjust_if(cancelled, "Cancelled Mangal Dosha", -5);
    quality
        .adjust_if(cancelled, "Cancelled Mangal Dosha", -5)
        .adjust_if(chart.strength(Moon) > 70, "Strong Moon", 5);
    (likelihood, quality)
}

fn timing(ctx: &ReadingContext<'_>) -> MarriageTiming {
    let chart = ctx.chart;
    let seventh_lord = chart.house_lord(House::Seventh);
    let promising = |lord: CelestialBody| {
        matches!(lord, CelestialBody::Venus | CelestialBody::Jupiter) || lord == seventh_lord
    };
    let age_at = |date: chrono::NaiveDate| (date - ctx.profile.date).num_days() as f64 / 365.25;

    let favourable_periods: Vec<FavourablePeriod> = ctx
        .dasha
        .mahadashas
        .iter()
        .flat_map(|maha| {
            maha.antardashas
                .iter()
                .map(move |antar| (maha.period.lord, antar))
        })
        .filter(|(maha, antar)| promising(*maha) || promising(antar.lord))
        .filter(|(_, antar)| MARRIAGE_AGE.contains(&age_at(antar.start)))
        .take(MAX_TIMING_PERIODS)
        .map(|(maha, antar)| FavourablePeriod {
            lord: antar.lord,
            start: antar.start,
            end: antar.end,
            reason: format!("{maha} mahadasha with {} antardasha", antar.lord),
        })
        .collect();

    let mut description = match favourable_periods.first() {
        Some(first) => format!(
            "The first promising window opens around {} (age {:.0}).",
            first.start.format("%Y"),
            age_at(first.start).floor()
        ),
        None => "No strongly indicated window between ages 21 and 40; transits decide the timing."
            .to_string(),
    };
    if chart.is_in(CelestialBody::Saturn, House::Seventh) {
        description.push_str(" Saturn in the 7th tends to delay marriage; after 28 is steadier.");
    }
    MarriageTiming {
        favourable_periods,
        description,
    }
}

fn spouse(ctx: &ReadingContext<'_>) -> SpouseProfile {
    let chart = ctx.chart;
    let seventh_sign = chart.sign_of_house(House::Seventh);
    let seventh_lord = seventh_sign.lord();
    let mut traits: Vec<&'static str> = sign_profile(seventh_sign).spouse_traits.to_vec();
    for occupant in chart.planets_in(House::Seventh) {
        for t in planet_profile(occupant.planet).traits.iter().copied().take(2) {
            if !traits.contains(&t) {
                traits.push(t);
            }
        }
    }

    let lead = ctx.pick(
        "marriage.spouse",
        &[
            "Your partner is likely to be",
            "Expect a spouse who is",
            "The chart describes a partner who is",
        ],
    );
    let description = format!(
        "{lead} {}, as shown by {} on the 7th house.",
        traits.iter().take(3).copied().collect::<Vec<_>>().join(", "),
        seventh_sign
    );
    SpouseProfile {
        seventh_sign,
        seventh_lord,
        traits,
        description,
    }
}

fn recommendations(ctx: &ReadingContext<'_>) -> Vec<String> {
    let chart = ctx.chart;
    let mut out = Vec::new();
    if ctx.dosha.is_effective() {
        out.push(
            "Match with a partner who also has Mangal Dosha, or complete the dosha remedies first."
                .to_string(),
        );
    }
    if chart.strength(CelestialBody::Venus) < 40 {
        let venus = planet_profile(CelestialBody::Venus);
        out.push(format!("Strengthen Venus: chant \"{}\" on {}s.", venus.mantra, venus.day));
    }
    if chart.strength(CelestialBody::Jupiter) < 40 {
        out.push("Seek Jupiter's blessings with Thursday prayers and respect for teachers.".to_string());
    }
    if chart.is_in(CelestialBody::Saturn, House::Seventh) {
        out.push("Do not rush; a later marriage brings more stability.".to_string());
    }
    out.push(
        ctx.pick(
            "marriage.general",
            &[
                "Compare kundlis before finalising a match.",
                "Open communication keeps the partnership strong.",
                "Choose an auspicious muhurta for the ceremony.",
            ],
        )
        .to_string(),
    );
    out
}

pub fn marriage_analysis(ctx: &ReadingContext<'_>) -> MarriageAnalysis {
    let (likelihood, quality) = marriage_scores(ctx.chart, ctx.dosha);
    MarriageAnalysis {
        likelihood,
        quality,
        timing: timing(ctx),
        spouse: spouse(ctx),
        mangal_dosha: ctx.dosha.clone(),
        recommendations: recommendations(ctx),
    }
}
