// ---------------------------
// ## Assembled Reports
// ---------------------------

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::dasha::{vimshottari, DashaTimeline};
use crate::dosha::{mangal_dosha, MangalDosha};
use crate::ephemeris::{calculate_chart, Ascendant, Chart, ChartOptions, HouseAnalysis, PlanetPosition};
use crate::error::Result;
use crate::locations::Location;
use crate::loshu::{lo_shu_grid, LoShuGrid};
use crate::numerology::{bhagyank, mulank, name_number, parse_birth_date, personal_year, root_digit};
use crate::predictions::{predict, PredictionReport, ReadingContext};
use crate::profile::BirthProfile;
use crate::remedies::{suggest_remedies, RemedyReport};
use crate::tables::{
    nakshatra_profile, number_profile, sign_profile, Element, Gana, Nadi, Quality, Yoni, FALLBACK,
};
use crate::yogas::{detect_yogas, YogaInfo};
use crate::{CelestialBody, Nakshatra, ZodiacSign};

// ---------------------------
// ## Numerology
// ---------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberInsight {
    pub number: u32,
    pub planet: Option<CelestialBody>,
    pub title: &'static str,
    pub description: &'static str,
    pub meaning: &'static str,
    pub traits: &'static [&'static str],
    pub strengths: &'static [&'static str],
    pub challenges: &'static [&'static str],
}

impl NumberInsight {
    pub fn of(number: u32) -> Self {
        match number_profile(number) {
            Some(p) => NumberInsight {
                number,
                planet: Some(p.planet),
                title: p.title,
                description: p.description,
                meaning: p.meaning,
                traits: p.traits,
                strengths: p.strengths,
                challenges: p.challenges,
            },
            None => NumberInsight {
                number,
                planet: None,
                title: FALLBACK,
                description: FALLBACK,
                meaning: FALLBACK,
                traits: &[],
                strengths: &[],
                challenges: &[],
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalYear {
    pub year: i32,
    pub number: u32,
    pub theme: &'static str,
}

fn personal_year_theme(number: u32) -> &'static str {
    match root_digit(number) {
        1 => "A year of new beginnings; start what you have been postponing.",
        2 => "A year of patience and partnership; cooperate rather than push.",
        3 => "A year of expression; creative and social ventures flourish.",
        4 => "A year of foundations; disciplined work pays off later.",
        5 => "A year of change; travel and new experiences open doors.",
        6 => "A year of responsibility; home and family need attention.",
        7 => "A year of reflection; study, rest and inner work.",
        8 => "A year of achievement; finances and career move forward.",
        9 => "A year of completion; let go of what no longer serves you.",
        _ => FALLBACK,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LuckyFactors {
    pub colors: Vec<&'static str>,
    pub gemstones: Vec<&'static str>,
    pub days: Vec<&'static str>,
    pub numbers: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumerologyReport {
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub bhagyank: NumberInsight,
    pub mulank: NumberInsight,
    pub name_number: NumberInsight,
    pub lo_shu: LoShuGrid,
    pub personal_year: PersonalYear,
    pub career_insights: Vec<String>,
    pub relationship_insights: Vec<String>,
    pub lucky: LuckyFactors,
}

fn push_unique<T: PartialEq + Copy>(into: &mut Vec<T>, values: impl IntoIterator<Item = T>) {
    for value in values {
        if !into.contains(&value) {
            into.push(value);
        }
    }
}

pub fn numerology_report(full_name: &str, date_of_birth: &str, as_of: NaiveDate) -> Result<NumerologyReport> {
    let date = parse_birth_date(date_of_birth)?;
    let destiny = bhagyank(date_of_birth)?;
    let root = mulank(date_of_birth)?;
    let name = name_number(full_name)?;
    let lo_shu = lo_shu_grid(date_of_birth)?;

    let year_number = personal_year(date, as_of.year());
    let personal_year = PersonalYear {
        year: as_of.year(),
        number: year_number,
        theme: personal_year_theme(year_number),
    };

    let profiles: Vec<_> = [destiny, root, name]
        .iter()
        .filter_map(|n| number_profile(*n))
        .collect();

    let mut career_fields = Vec::new();
    for p in &profiles {
        push_unique(&mut career_fields, p.career_fields.iter().copied());
    }
    let mut career_insights = vec![format!(
        "Destiny number {} favours {}.",
        destiny,
        career_fields.iter().take(4).copied().collect::<Vec<_>>().join(", ")
    )];
    if lo_shu.count(8) == 0 {
        career_insights.push("With 8 missing from the grid, money management needs conscious effort.".to_string());
    }
    if lo_shu.analysis.complete_arrows.contains(&"Arrow of Determination") {
        career_insights.push("The Arrow of Determination gives staying power in long projects.".to_string());
    }

    let mut relationship_insights: Vec<String> = profiles
        .iter()
        .take(2)
        .map(|p| p.relationships.to_string())
        .collect();
    relationship_insights.dedup();
    if lo_shu.count(2) == 0 {
        relationship_insights.push("Missing 2 asks for patience and sensitivity with a partner.".to_string());
    }

    let mut lucky = LuckyFactors {
        colors: Vec::new(),
        gemstones: Vec::new(),
        days: Vec::new(),
        numbers: Vec::new(),
    };
    for p in &profiles {
        push_unique(&mut lucky.colors, [p.lucky_color]);
        push_unique(&mut lucky.gemstones, [p.lucky_gemstone]);
        push_unique(&mut lucky.days, [p.lucky_day]);
        push_unique(&mut lucky.numbers, p.lucky_numbers.iter().copied());
    }

    Ok(NumerologyReport {
        full_name: full_name.trim().to_string(),
        date_of_birth: date,
        bhagyank: NumberInsight::of(destiny),
        mulank: NumberInsight::of(root),
        name_number: NumberInsight::of(name),
        lo_shu,
        personal_year,
        career_insights,
        relationship_insights,
        lucky,
    })
}

// ---------------------------
// ## Jyotish
// ---------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RashiReading {
    pub sign: ZodiacSign,
    pub vedic_name: &'static str,
    pub lord: CelestialBody,
    pub element: Element,
    pub quality: Quality,
    pub description: &'static str,
    pub traits: &'static [&'static str],
    pub strengths: &'static [&'static str],
    pub challenges: &'static [&'static str],
    pub lucky_color: &'static str,
    pub lucky_gemstone: &'static str,
    pub lucky_day: &'static str,
}

impl RashiReading {
    pub fn of(sign: ZodiacSign) -> Self {
        let p = sign_profile(sign);
        RashiReading {
            sign,
            vedic_name: sign.vedic_name(),
            lord: sign.lord(),
            element: p.element,
            quality: p.quality,
            description: p.description,
            traits: p.traits,
            strengths: p.strengths,
            challenges: p.challenges,
            lucky_color: p.lucky_color,
            lucky_gemstone: p.lucky_gemstone,
            lucky_day: p.lucky_day,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NakshatraReading {
    pub name: Nakshatra,
    pub pada: u8,
    pub lord: CelestialBody,
    pub deity: &'static str,
    pub symbol: &'static str,
    pub gana: Gana,
    pub nadi: Nadi,
    pub yoni: Yoni,
    pub traits: &'static [&'static str],
}

impl NakshatraReading {
    pub fn of(chart: &Chart) -> Self {
        let placement = chart.moon_nakshatra();
        let p = nakshatra_profile(placement.name);
        NakshatraReading {
            name: placement.name,
            pada: placement.pada,
            lord: placement.lord,
            deity: p.deity,
            symbol: p.symbol,
            gana: p.gana,
            nadi: p.nadi,
            yoni: p.yoni,
            traits: p.traits,
        }
    }
}

/// A chart with every derived facet, computed once per request.
#[derive(Debug, Clone)]
pub struct ChartReading {
    pub profile: BirthProfile,
    pub chart: Chart,
    pub dasha: DashaTimeline,
    pub dosha: MangalDosha,
    pub yogas: Vec<YogaInfo>,
}

impl ChartReading {
    pub fn compute(profile: BirthProfile, options: &ChartOptions, as_of: NaiveDate) -> Self {
        let chart = calculate_chart(&profile, options);
        let dasha = vimshottari(
            chart.position(CelestialBody::Moon).longitude,
            profile.date,
            as_of,
        );
        let dosha = mangal_dosha(&chart);
        let yogas = detect_yogas(&chart);
        ChartReading {
            profile,
            chart,
            dasha,
            dosha,
            yogas,
        }
    }

    pub fn context(&self) -> ReadingContext<'_> {
        ReadingContext {
            profile: &self.profile,
            chart: &self.chart,
            dasha: &self.dasha,
            dosha: &self.dosha,
            yogas: &self.yogas,
        }
    }

    pub fn remedies(&self) -> RemedyReport {
        suggest_remedies(&self.chart, &self.dosha)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthDetails {
    pub full_name: Option<String>,
    pub date_of_birth: NaiveDate,
    pub time_of_birth: String,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComprehensiveChart {
    pub birth_details: BirthDetails,
    pub ayanamsa: f64,
    pub ascendant: Ascendant,
    pub planets: Vec<PlanetPosition>,
    pub houses: Vec<HouseAnalysis>,
    pub rashi: RashiReading,
    pub nakshatra: NakshatraReading,
    pub dasha: DashaTimeline,
    pub yogas: Vec<YogaInfo>,
    pub mangal_dosha: MangalDosha,
    pub predictions: PredictionReport,
}

pub fn comprehensive_chart(reading: &ChartReading) -> ComprehensiveChart {
    let profile = &reading.profile;
    let chart = &reading.chart;
    ComprehensiveChart {
        birth_details: BirthDetails {
            full_name: profile.full_name.clone(),
            date_of_birth: profile.date,
            time_of_birth: profile.time.format("%H:%M").to_string(),
            location: profile.location.clone(),
        },
        ayanamsa: chart.ayanamsa,
        ascendant: chart.ascendant.clone(),
        planets: chart.planets.to_vec(),
        houses: chart.houses.clone(),
        rashi: RashiReading::of(chart.moon_sign()),
        nakshatra: NakshatraReading::of(chart),
        dasha: reading.dasha.clone(),
        yogas: reading.yogas.clone(),
        mangal_dosha: reading.dosha.clone(),
        predictions: predict(&reading.context()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn numerology_report_collects_numbers() {
        let report = numerology_report("Ram", "1990-05-15", as_of()).unwrap();
        assert_eq!(report.bhagyank.number, 3);
        assert_eq!(report.mulank.number, 6);
        assert_eq!(report.name_number.number, 7);
        assert_eq!(report.bhagyank.planet, Some(CelestialBody::Jupiter));
        // 1+5 + 5 + 2+0+2+6 = 21 -> 3
        assert_eq!(report.personal_year.number, 3);
        assert!(!report.career_insights.is_empty());
        assert!(!report.lucky.colors.is_empty());
        let distinct: std::collections::BTreeSet<_> = report.lucky.numbers.iter().collect();
        assert_eq!(distinct.len(), report.lucky.numbers.len());
    }

    #[test]
    fn overlapping_lucky_numbers_are_merged() {
        // Destiny 1, root 11 and name 2 share 2, 11 and 29.
        let report = numerology_report("B", "1985-12-29", as_of()).unwrap();
        assert_eq!(report.mulank.number, 11);
        assert_eq!(report.name_number.number, 2);
        assert_eq!(report.lucky.numbers, vec![1, 10, 19, 28, 2, 11, 29, 20]);
    }

    #[test]
    fn numerology_report_validates_inputs() {
        assert!(numerology_report("Ram", "1990-02-30", as_of()).is_err());
        assert!(numerology_report("42", "1990-05-15", as_of()).is_err());
    }

    #[test]
    fn unknown_number_falls_back() {
        let insight = NumberInsight::of(44);
        assert_eq!(insight.planet, None);
        assert_eq!(insight.meaning, FALLBACK);
    }

    #[test]
    fn comprehensive_chart_is_deterministic() {
        let build = || {
            let profile =
                BirthProfile::parse("1990-05-15", Some("06:30"), Some("mumbai"), Some("Ram"), "12:00", "delhi")
                    .unwrap();
            let reading = ChartReading::compute(profile, &ChartOptions::default(), as_of());
            serde_json::to_value(comprehensive_chart(&reading)).unwrap()
        };
        let first = build();
        assert_eq!(first, build());
        assert_eq!(first["planets"].as_array().map(Vec::len), Some(9));
        assert_eq!(first["houses"].as_array().map(Vec::len), Some(12));
        assert_eq!(first["birthDetails"]["timeOfBirth"], "06:30");
        assert!(first["predictions"]["general"].as_array().unwrap().len() <= 10);
    }
}
