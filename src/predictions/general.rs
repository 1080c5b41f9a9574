use super::{ordinal, ReadingContext};
use crate::tables::{nakshatra_profile, planet_profile, sign_profile};
use crate::CelestialBody;

pub const MAX_GENERAL_PREDICTIONS: usize = 10;

/// Short life-reading sentences, most significant first.
pub fn general_predictions(ctx: &ReadingContext<'_>) -> Vec<String> {
    let chart = ctx.chart;
    let mut lines = Vec::with_capacity(MAX_GENERAL_PREDICTIONS);

    let lagna = sign_profile(chart.ascendant.sign);
    lines.push(format!(
        "With {} rising you come across as {}.",
        chart.ascendant.sign,
        lagna.traits.iter().take(2).copied().collect::<Vec<_>>().join(" and ")
    ));

    let moon_sign = chart.moon_sign();
    lines.push(format!(
        "{} {}. {}",
        ctx.pick(
            "general.moon",
            &["Your rashi is", "The Moon occupies", "Your Moon sign is"]
        ),
        moon_sign,
        sign_profile(moon_sign).description
    ));

    let nakshatra = chart.moon_nakshatra();
    let profile = nakshatra_profile(nakshatra.name);
    lines.push(format!(
        "Born under {} (pada {}), guided by {}, you are {}.",
        nakshatra.name,
        nakshatra.pada,
        profile.deity,
        profile.traits.first().copied().unwrap_or("self-directed")
    ));

    if let Some(strongest) = chart.planets.iter().max_by_key(|p| p.strength) {
        lines.push(format!(
            "{} is your strongest graha, placed in the {} house. {}",
            strongest.planet,
            ordinal(strongest.house.number()),
            planet_profile(strongest.planet).strong
        ));
    }
    if let Some(weakest) = chart
        .planets
        .iter()
        .filter(|p| !matches!(p.planet, CelestialBody::Rahu | CelestialBody::Ketu))
        .min_by_key(|p| p.strength)
    {
        if weakest.strength < 50 {
            lines.push(planet_profile(weakest.planet).weak.to_string());
        }
    }

    for yoga in ctx.yogas.iter().filter(|y| y.auspicious) {
        lines.push(format!("{}: {}", yoga.name, yoga.description));
    }
    for yoga in ctx.yogas.iter().filter(|y| !y.auspicious) {
        lines.push(format!("{} is present: {}", yoga.name, yoga.description));
    }

    if let Some(current) = &ctx.dasha.current {
        lines.push(current.description.clone());
    }
    if ctx.dosha.is_effective() {
        lines.push(ctx.dosha.description.clone());
    }

    lines.truncate(MAX_GENERAL_PREDICTIONS);
    lines
}
