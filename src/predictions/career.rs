use chrono::NaiveDate;
use serde::Serialize;

use super::{ordinal, ReadingContext};
use crate::ephemeris::Chart;
use crate::scoring::Scorecard;
use crate::tables::{planet_profile, sign_profile};
use crate::yogas::Realm;
use crate::{CelestialBody, House, ZodiacSign};

pub const MAX_CAREER_FIELDS: usize = 8;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavourablePeriod {
    pub lord: CelestialBody,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerAnalysis {
    pub tenth_sign: ZodiacSign,
    pub tenth_lord: CelestialBody,
    pub fields: Vec<&'static str>,
    pub potential: Scorecard,
    pub narrative: Vec<String>,
    pub favourable_periods: Vec<FavourablePeriod>,
}

fn push_unique(fields: &mut Vec<&'static str>, candidates: &[&'static str]) {
    for field in candidates {
        if fields.len() >= MAX_CAREER_FIELDS {
            return;
        }
        if !fields.contains(field) {
            fields.push(field);
        }
    }
}

/// Fields suggested by the 10th house occupants, its lord, its sign and the
/// strongest graha, in that order.
fn career_fields(chart: &Chart) -> Vec<&'static str> {
    let mut occupants: Vec<_> = chart.planets_in(House::Tenth).collect();
    occupants.sort_by(|a, b| b.strength.cmp(&a.strength));

    let mut fields = Vec::with_capacity(MAX_CAREER_FIELDS);
    for occupant in occupants {
        push_unique(&mut fields, planet_profile(occupant.planet).career_fields);
    }
    push_unique(&mut fields, planet_profile(chart.house_lord(House::Tenth)).career_fields);
    push_unique(&mut fields, sign_profile(chart.sign_of_house(House::Tenth)).career_fields);
    if let Some(strongest) = chart.planets.iter().max_by_key(|p| p.strength) {
        push_unique(&mut fields, planet_profile(strongest.planet).career_fields);
    }
    fields
}

pub(crate) fn career_potential(chart: &Chart) -> Scorecard {
    let tenth_lord = chart.house_lord(House::Tenth);
    let mut card = Scorecard::new(60);
    card.adjust_if(chart.strength(CelestialBody::Sun) > 70, "Strong Sun", 10)
        .adjust_if(chart.is_in(CelestialBody::Jupiter, House::Tenth), "Jupiter in the 10th", 15)
        .adjust_if(chart.is_in(CelestialBody::Saturn, House::Tenth), "Saturn in the 10th", 10)
        .adjust_if(chart.strength(CelestialBody::Mars) > 70, "Strong Mars", 5)
        .adjust_if(
            chart.house_of(tenth_lord).is_dusthana(),
            "10th lord in a dusthana",
            -10,
        )
        .adjust_if(chart.strength(tenth_lord) > 70, "Strong 10th lord", 10)
        .adjust_if(chart.is_in(CelestialBody::Rahu, House::Tenth), "Rahu in the 10th", 5);
    card
}

fn narrative(ctx: &ReadingContext<'_>, potential: &Scorecard) -> Vec<String> {
    let chart = ctx.chart;
    let tenth_sign = chart.sign_of_house(House::Tenth);
    let tenth_lord = chart.house_lord(House::Tenth);
    let lord_house = chart.house_of(tenth_lord);

    let opener = ctx.pick(
        "career.opener",
        &[
            "Your profession is shaped by",
            "The direction of your work life comes from",
            "Career matters are coloured by",
        ],
    );
    let mut lines = vec![format!(
        "{opener} {} on the 10th house, ruled by {}.",
        tenth_sign, tenth_lord
    )];

    let sun = planet_profile(CelestialBody::Sun);
    lines.push(if chart.strength(CelestialBody::Sun) > 70 {
        sun.strong.to_string()
    } else {
        sun.weak.to_string()
    });

    let mut placement = format!(
        "The 10th lord {} sits in the {} house",
        tenth_lord,
        ordinal(lord_house.number())
    );
    if lord_house.is_dusthana() {
        placement.push_str(", so recognition comes after sustained effort.");
    } else if lord_house.is_kendra() || lord_house.is_trikona() {
        placement.push_str(", a supportive placement for advancement.");
    } else {
        placement.push('.');
    }
    lines.push(placement);

    lines.push(if chart.strength(CelestialBody::Saturn) > 70 {
        "Saturn rewards discipline with steady, long-term growth.".to_string()
    } else {
        ctx.pick(
            "career.saturn",
            &[
                "Patience matters: avoid frequent job changes and build depth.",
                "Progress is gradual; consistency pays more than speed.",
            ],
        )
        .to_string()
    });

    for yoga in ctx.yogas {
        if yoga
            .impacts
            .iter()
            .any(|impact| impact.realm == Realm::Career && impact.weight > 0)
        {
            lines.push(format!("{} supports your professional rise.", yoga.name));
        }
    }

    lines.push(format!(
        "Overall career potential is {} ({}/100).",
        potential.band(),
        potential.score()
    ));
    lines
}

fn favourable_periods(ctx: &ReadingContext<'_>) -> Vec<FavourablePeriod> {
    let chart = ctx.chart;
    let tenth_lord = chart.house_lord(House::Tenth);
    ctx.dasha
        .mahadashas
        .iter()
        .filter(|maha| maha.period.end > ctx.dasha.as_of)
        .filter_map(|maha| {
            let lord = maha.period.lord;
            let reason = if lord == tenth_lord {
                format!("{lord} rules the 10th house")
            } else if chart.is_in(lord, House::Tenth) {
                format!("{lord} occupies the 10th house")
            } else if matches!(
                lord,
                CelestialBody::Sun | CelestialBody::Jupiter | CelestialBody::Saturn
            ) && chart.strength(lord) > 70
            {
                format!("a strong {lord} favours professional growth")
            } else {
                return None;
            };
            Some(FavourablePeriod {
                lord,
                start: maha.period.start,
                end: maha.period.end,
                reason,
            })
        })
        .collect()
}

pub fn career_analysis(ctx: &ReadingContext<'_>) -> CareerAnalysis {
    let chart = ctx.chart;
    let potential = career_potential(chart);
    CareerAnalysis {
        tenth_sign: chart.sign_of_house(House::Tenth),
        tenth_lord: chart.house_lord(House::Tenth),
        fields: career_fields(chart),
        narrative: narrative(ctx, &potential),
        favourable_periods: favourable_periods(ctx),
        potential,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predictions::fixture::Fixture;

    fn neutral_fixture() -> Fixture {
        let mut f = Fixture::new("1988-03-21", "10:45", "chennai");
        // Keep every conditional off, then switch them on one by one.
        for body in CelestialBody::iter() {
            f.set_strength(body, 50);
            f.place(body, House::Third);
        }
        f
    }

    #[test]
    fn fields_are_unique_and_capped() {
        let f = Fixture::new("1975-07-04", "23:10", "jaipur");
        let fields = career_fields(&f.chart);
        assert!(!fields.is_empty());
        assert!(fields.len() <= MAX_CAREER_FIELDS);
        for (i, field) in fields.iter().enumerate() {
            assert!(!fields[i + 1..].contains(field));
        }
    }

    #[test]
    fn potential_starts_from_sixty() {
        let f = neutral_fixture();
        // Third-house planets: the 10th lord sits in the 3rd, no dusthana.
        assert_eq!(career_potential(&f.chart).score(), 60);
    }

    #[test]
    fn potential_rewards_tenth_house_placements() {
        let mut f = neutral_fixture();
        f.place(CelestialBody::Jupiter, House::Tenth);
        f.place(CelestialBody::Saturn, House::Tenth);
        f.place(CelestialBody::Rahu, House::Tenth);
        f.set_strength(CelestialBody::Sun, 80);
        let card = career_potential(&f.chart);
        let lord = f.chart.house_lord(House::Tenth);
        let mut expected = 60 + 15 + 10 + 5 + 10;
        if f.chart.strength(lord) > 70 {
            expected += 10;
        }
        if f.chart.house_of(lord).is_dusthana() {
            expected -= 10;
        }
        assert_eq!(card.raw(), expected);
    }

    #[test]
    fn favourable_periods_are_not_in_the_past() {
        let f = Fixture::new("1965-01-26", "05:00", "delhi");
        let analysis = career_analysis(&f.ctx());
        for period in &analysis.favourable_periods {
            assert!(period.end > f.dasha.as_of);
        }
        assert!(analysis.narrative.last().unwrap().contains("/100"));
    }
}
