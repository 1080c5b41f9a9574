// ---------------------------
// ## Remedial Measures
// ---------------------------

use serde::Serialize;

use crate::dosha::MangalDosha;
use crate::ephemeris::Chart;
use crate::tables::planet_profile;
use crate::{CelestialBody, Dignity};

pub const WEAK_STRENGTH: u32 = 40;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemedialMeasure {
    pub planet: CelestialBody,
    pub strength: u32,
    pub reason: String,
    pub mantra: &'static str,
    pub charity: &'static str,
    pub practice: &'static str,
    pub gemstone: Option<&'static str>,
    pub color: &'static str,
    pub day: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemedyReport {
    pub planetary: Vec<RemedialMeasure>,
    pub dosha: Vec<&'static str>,
    pub general: Vec<&'static str>,
}

const GENERAL_PRACTICES: [&str; 4] = [
    "Meditate for a few minutes at sunrise",
    "Respect parents, teachers and elders",
    "Feed birds or animals regularly",
    "Keep the North-East corner of the home clean and lit",
];

pub fn is_weak(strength: u32, dignity: Dignity) -> bool {
    strength < WEAK_STRENGTH || dignity == Dignity::Debilitated
}

/// Remedies for every weak graha, the Mangal Dosha and general upkeep.
pub fn suggest_remedies(chart: &Chart, dosha: &MangalDosha) -> RemedyReport {
    let planetary = chart
        .planets
        .iter()
        .filter(|p| is_weak(p.strength, p.dignity))
        .map(|p| {
            let profile = planet_profile(p.planet);
            let reason = if p.dignity == Dignity::Debilitated {
                format!("{} is debilitated in {}", p.planet, p.sign)
            } else {
                format!("{} is weak with strength {}", p.planet, p.strength)
            };
            // Gemstones for a debilitated graha amplify the wrong signal.
            let gemstone = (p.dignity != Dignity::Debilitated).then_some(profile.gemstone);
            RemedialMeasure {
                planet: p.planet,
                strength: p.strength,
                reason,
                mantra: profile.mantra,
                charity: profile.charity,
                practice: profile.practice,
                gemstone,
                color: profile.color,
                day: profile.day,
            }
        })
        .collect();

    RemedyReport {
        planetary,
        dosha: dosha.remedies.clone(),
        general: GENERAL_PRACTICES.to_vec(),
    }
}
