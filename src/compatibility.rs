//! Partner matching.
//!
//! Ashtakoota (36-point) guna matching from the two Moon placements, blended
//! with numerology and Mangal Dosha into a single compatibility score.

use serde::Serialize;

use crate::dosha::MangalDosha;
use crate::ephemeris::{whole_sign_house, Chart};
use crate::error::Result;
use crate::numerology::{bhagyank, mulank, name_number, number_compatibility};
use crate::profile::BirthProfile;
use crate::scoring::Scorecard;
use crate::tables::{nakshatra_profile, sign_profile, Element, Gana};
use crate::{Nakshatra, Relationship, ZodiacSign};

pub const MAX_GUNA_POINTS: f64 = 36.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Koota {
    Varna,
    Vasya,
    Tara,
    Yoni,
    GrahaMaitri,
    Gana,
    Bhakut,
    Nadi,
}

impl Koota {
    pub const fn max_points(self) -> f64 {
        match self {
            Koota::Varna => 1.0,
            Koota::Vasya => 2.0,
            Koota::Tara => 3.0,
            Koota::Yoni => 4.0,
            Koota::GrahaMaitri => 5.0,
            Koota::Gana => 6.0,
            Koota::Bhakut => 7.0,
            Koota::Nadi => 8.0,
        }
    }

    pub const fn area(self) -> &'static str {
        match self {
            Koota::Varna => "spiritual temperament",
            Koota::Vasya => "mutual attraction",
            Koota::Tara => "destiny and wellbeing",
            Koota::Yoni => "physical harmony",
            Koota::GrahaMaitri => "mental friendship",
            Koota::Gana => "nature and behaviour",
            Koota::Bhakut => "family welfare",
            Koota::Nadi => "health and progeny",
        }
    }
}

/// Moon sign and nakshatra, the only inputs to guna matching.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoonPlacement {
    pub sign: ZodiacSign,
    pub nakshatra: Nakshatra,
}

impl MoonPlacement {
    pub fn of(chart: &Chart) -> Self {
        MoonPlacement {
            sign: chart.moon_sign(),
            nakshatra: chart.moon_nakshatra().name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KootaScore {
    pub koota: Koota,
    pub area: &'static str,
    pub points: f64,
    pub max_points: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ashtakoota {
    pub kootas: Vec<KootaScore>,
    pub total: f64,
    pub max_points: f64,
    pub nadi_dosha: bool,
    pub bhakut_dosha: bool,
}

impl Ashtakoota {
    pub fn points(&self, koota: Koota) -> f64 {
        self.kootas
            .iter()
            .find(|k| k.koota == koota)
            .map(|k| k.points)
            .unwrap_or(0.0)
    }
}

fn varna_rank(sign: ZodiacSign) -> u8 {
    match sign_profile(sign).element {
        Element::Water => 4,
        Element::Fire => 3,
        Element::Earth => 2,
        Element::Air => 1,
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum VasyaGroup {
    Quadruped,
    Human,
    Water,
    Wild,
    Insect,
}

fn vasya_group(sign: ZodiacSign) -> VasyaGroup {
    use ZodiacSign::*;
    match sign {
        Aries | Taurus | Capricorn => VasyaGroup::Quadruped,
        Gemini | Virgo | Libra | Sagittarius | Aquarius => VasyaGroup::Human,
        Cancer | Pisces => VasyaGroup::Water,
        Leo => VasyaGroup::Wild,
        Scorpio => VasyaGroup::Insect,
    }
}

fn vasya_points(a: ZodiacSign, b: ZodiacSign) -> f64 {
    use VasyaGroup::*;
    let (a, b) = (vasya_group(a), vasya_group(b));
    if a == b {
        return 2.0;
    }
    match (a, b) {
        (Wild, _) | (_, Wild) => 0.0,
        (Human, Quadruped) | (Quadruped, Human) => 1.0,
        (Human, Water) | (Water, Human) => 1.0,
        (Quadruped, Water) | (Water, Quadruped) => 1.0,
        _ => 0.5,
    }
}

/// Taras 3, 5 and 7 (Vipat, Pratyari, Vadha) are inauspicious.
fn tara_is_auspicious(from: Nakshatra, to: Nakshatra) -> bool {
    let count = (to.index() + 27 - from.index()) % 27 + 1;
    let tara = match count % 9 {
        0 => 9,
        t => t,
    };
    !matches!(tara, 3 | 5 | 7)
}

fn tara_points(a: Nakshatra, b: Nakshatra) -> f64 {
    [tara_is_auspicious(a, b), tara_is_auspicious(b, a)]
        .iter()
        .filter(|ok| **ok)
        .count() as f64
        * 1.5
}

fn yoni_points(a: Nakshatra, b: Nakshatra) -> f64 {
    let (a, b) = (nakshatra_profile(a).yoni, nakshatra_profile(b).yoni);
    if a == b {
        4.0
    } else if a.is_enemy_of(b) {
        0.0
    } else {
        2.0
    }
}

fn maitri_points(a: ZodiacSign, b: ZodiacSign) -> f64 {
    use Relationship::*;
    let (lord_a, lord_b) = (a.lord(), b.lord());
    if lord_a == lord_b {
        return 5.0;
    }
    match (lord_a.relationship_to(lord_b), lord_b.relationship_to(lord_a)) {
        (Friend, Friend) => 5.0,
        (Friend, Neutral) | (Neutral, Friend) => 4.0,
        (Neutral, Neutral) => 3.0,
        (Friend, Enemy) | (Enemy, Friend) => 1.0,
        (Neutral, Enemy) | (Enemy, Neutral) => 0.5,
        (Enemy, Enemy) => 0.0,
    }
}

fn gana_points(a: Nakshatra, b: Nakshatra) -> f64 {
    use Gana::*;
    match (nakshatra_profile(a).gana, nakshatra_profile(b).gana) {
        (x, y) if x == y => 6.0,
        (Deva, Manushya) | (Manushya, Deva) => 5.0,
        (Deva, Rakshasa) | (Rakshasa, Deva) => 1.0,
        _ => 0.0,
    }
}

/// 2/12, 5/9 and 6/8 Moon-sign relations break Bhakut.
fn bhakut_dosha(a: ZodiacSign, b: ZodiacSign) -> bool {
    matches!(whole_sign_house(b, a).number(), 2 | 5 | 6 | 8 | 9 | 12)
}

pub fn ashtakoota(first: MoonPlacement, second: MoonPlacement) -> Ashtakoota {
    let nadi_dosha = nakshatra_profile(first.nakshatra).nadi == nakshatra_profile(second.nakshatra).nadi;
    let bhakut_dosha = bhakut_dosha(first.sign, second.sign);

    let points = [
        (
            Koota::Varna,
            if varna_rank(first.sign) >= varna_rank(second.sign) { 1.0 } else { 0.0 },
        ),
        (Koota::Vasya, vasya_points(first.sign, second.sign)),
        (Koota::Tara, tara_points(first.nakshatra, second.nakshatra)),
        (Koota::Yoni, yoni_points(first.nakshatra, second.nakshatra)),
        (Koota::GrahaMaitri, maitri_points(first.sign, second.sign)),
        (Koota::Gana, gana_points(first.nakshatra, second.nakshatra)),
        (Koota::Bhakut, if bhakut_dosha { 0.0 } else { 7.0 }),
        (Koota::Nadi, if nadi_dosha { 0.0 } else { 8.0 }),
    ];

    let kootas: Vec<KootaScore> = points
        .into_iter()
        .map(|(koota, points)| KootaScore {
            koota,
            area: koota.area(),
            points,
            max_points: koota.max_points(),
        })
        .collect();
    let total = kootas.iter().map(|k| k.points).sum();

    Ashtakoota {
        kootas,
        total,
        max_points: MAX_GUNA_POINTS,
        nadi_dosha,
        bhakut_dosha,
    }
}

// ---------------------------
// ## Numerology Matching
// ---------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberPair {
    pub first: u32,
    pub second: u32,
    pub relationship: Relationship,
}

impl NumberPair {
    fn new(first: u32, second: u32) -> Self {
        NumberPair {
            first,
            second,
            relationship: number_compatibility(first, second),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumerologyMatch {
    pub bhagyank: NumberPair,
    pub mulank: NumberPair,
    pub name_number: Option<NumberPair>,
    pub compatibility: Scorecard,
    pub summary: String,
}

fn relationship_delta(relationship: Relationship, friend: i32, enemy: i32) -> i32 {
    match relationship {
        Relationship::Friend => friend,
        Relationship::Neutral => 0,
        Relationship::Enemy => enemy,
    }
}

/// Numbers-only match from two birth dates and optional names.
pub fn numerology_match(
    first_dob: &str,
    first_name: Option<&str>,
    second_dob: &str,
    second_name: Option<&str>,
) -> Result<NumerologyMatch> {
    let bhagyank = NumberPair::new(bhagyank(first_dob)?, bhagyank(second_dob)?);
    let mulank = NumberPair::new(mulank(first_dob)?, mulank(second_dob)?);
    let name_number = match (first_name, second_name) {
        (Some(a), Some(b)) => Some(NumberPair::new(name_number(a)?, name_number(b)?)),
        _ => None,
    };

    let mut card = Scorecard::new(50);
    card.adjust(
        "Bhagyank relationship",
        relationship_delta(bhagyank.relationship, 20, -15),
    )
    .adjust(
        "Mulank relationship",
        relationship_delta(mulank.relationship, 10, -10),
    );
    if let Some(pair) = &name_number {
        card.adjust(
            "Name number relationship",
            relationship_delta(pair.relationship, 10, -5),
        );
    }

    let summary = format!(
        "Destiny numbers {} and {} are {}; the match is {}.",
        bhagyank.first,
        bhagyank.second,
        relationship_word(bhagyank.relationship),
        card.band()
    );

    Ok(NumerologyMatch {
        bhagyank,
        mulank,
        name_number,
        compatibility: card,
        summary,
    })
}

fn relationship_word(relationship: Relationship) -> &'static str {
    match relationship {
        Relationship::Friend => "friendly",
        Relationship::Neutral => "neutral",
        Relationship::Enemy => "challenging",
    }
}

// ---------------------------
// ## Kundli Matching
// ---------------------------

/// One side of a kundli match.
pub struct Partner<'a> {
    pub profile: &'a BirthProfile,
    pub chart: &'a Chart,
    pub dosha: &'a MangalDosha,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerSummary {
    pub name: Option<String>,
    pub moon: MoonPlacement,
    pub bhagyank: u32,
    pub mulank: u32,
    pub mangal_dosha: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityReport {
    pub first: PartnerSummary,
    pub second: PartnerSummary,
    pub ashtakoota: Ashtakoota,
    pub compatibility: Scorecard,
    pub observations: Vec<String>,
}

fn summarize(partner: &Partner<'_>) -> Result<PartnerSummary> {
    let dob = partner.profile.date.format("%Y-%m-%d").to_string();
    Ok(PartnerSummary {
        name: partner.profile.full_name.clone(),
        moon: MoonPlacement::of(partner.chart),
        bhagyank: bhagyank(&dob)?,
        mulank: mulank(&dob)?,
        mangal_dosha: partner.dosha.is_effective(),
    })
}

/// Base 50, adjusted for guna points, numbers and doshas.
pub fn match_scorecard(a: &PartnerSummary, b: &PartnerSummary, gunas: &Ashtakoota) -> Scorecard {
    let numbers = number_compatibility(a.bhagyank, b.bhagyank);
    let mut card = Scorecard::new(50);
    let guna_delta = if gunas.total >= 28.0 {
        20
    } else if gunas.total >= 18.0 {
        10
    } else {
        -10
    };
    card.adjust(format!("Guna milan {}/36", gunas.total), guna_delta)
        .adjust_if(numbers == Relationship::Friend, "Friendly bhagyanks", 10)
        .adjust_if(numbers == Relationship::Enemy, "Challenging bhagyanks", -10)
        .adjust_if(a.mulank == b.mulank, "Same mulank", 5)
        .adjust_if(gunas.nadi_dosha, "Nadi dosha", -15)
        .adjust_if(gunas.bhakut_dosha, "Bhakut dosha", -10)
        .adjust_if(a.mangal_dosha != b.mangal_dosha, "Mangal Dosha on one side", -10)
        .adjust_if(a.mangal_dosha && b.mangal_dosha, "Mangal Dosha on both sides", 5);
    card
}

pub fn kundli_match(first: &Partner<'_>, second: &Partner<'_>) -> Result<CompatibilityReport> {
    let a = summarize(first)?;
    let b = summarize(second)?;
    let gunas = ashtakoota(a.moon, b.moon);
    let card = match_scorecard(&a, &b, &gunas);

    let mut observations = vec![format!(
        "{} of {} gunas match.",
        gunas.total, MAX_GUNA_POINTS
    )];
    for koota in &gunas.kootas {
        if koota.points >= koota.max_points {
            observations.push(format!("Full agreement in {}.", koota.area));
        } else if koota.points == 0.0 {
            observations.push(format!("No agreement in {}.", koota.area));
        }
    }
    if gunas.nadi_dosha {
        observations.push("Nadi dosha: both Moons share a nadi; a Nadi Nivaran puja is advised.".to_string());
    }
    if a.mangal_dosha != b.mangal_dosha {
        observations.push("Only one partner carries Mangal Dosha.".to_string());
    }
    tracing::debug!(total = gunas.total, score = card.score(), "kundli match");

    Ok(CompatibilityReport {
        first: a,
        second: b,
        ashtakoota: gunas,
        compatibility: card,
        observations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ScoreBand;
    use approx::assert_abs_diff_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn moon(sign: ZodiacSign, nakshatra: Nakshatra) -> MoonPlacement {
        MoonPlacement { sign, nakshatra }
    }

    fn summary(bhagyank: u32, mulank: u32, mangal_dosha: bool) -> PartnerSummary {
        PartnerSummary {
            name: None,
            moon: moon(ZodiacSign::Aries, Nakshatra::Ashwini),
            bhagyank,
            mulank,
            mangal_dosha,
        }
    }

    fn gunas(total: f64, nadi_dosha: bool, bhakut_dosha: bool) -> Ashtakoota {
        Ashtakoota {
            kootas: Vec::new(),
            total,
            max_points: MAX_GUNA_POINTS,
            nadi_dosha,
            bhakut_dosha,
        }
    }

    fn deltas(card: &Scorecard) -> Vec<i32> {
        card.adjustments().iter().map(|a| a.delta).collect()
    }

    #[rstest]
    #[case(36.0, 20)]
    #[case(28.0, 20)]
    #[case(27.5, 10)]
    #[case(18.0, 10)]
    #[case(17.5, -10)]
    #[case(0.0, -10)]
    fn guna_points_set_the_first_adjustment(#[case] total: f64, #[case] expected: i32) {
        // 1 and 4 are neutral numbers, so only the guna rule applies.
        let card = match_scorecard(&summary(1, 1, false), &summary(4, 4, false), &gunas(total, false, false));
        assert_eq!(deltas(&card), vec![expected]);
        assert_eq!(card.score() as i32, 50 + expected);
    }

    #[rstest]
    #[case(1, 2, 10)]
    #[case(2, 2, 10)]
    #[case(1, 6, -10)]
    fn bhagyank_relationship(#[case] first: u32, #[case] second: u32, #[case] expected: i32) {
        let card = match_scorecard(&summary(first, 1, false), &summary(second, 4, false), &gunas(20.0, false, false));
        assert_eq!(deltas(&card), vec![10, expected]);
    }

    #[test]
    fn same_mulank_and_doshas() {
        let card = match_scorecard(&summary(1, 5, false), &summary(4, 5, false), &gunas(20.0, true, true));
        assert_eq!(deltas(&card), vec![10, 5, -15, -10]);
        assert_eq!(card.score(), 40);
    }

    #[rstest]
    #[case(true, false, -10)]
    #[case(false, true, -10)]
    #[case(true, true, 5)]
    fn mangal_dosha_sides(#[case] first: bool, #[case] second: bool, #[case] expected: i32) {
        let card = match_scorecard(&summary(1, 1, first), &summary(4, 4, second), &gunas(20.0, false, false));
        assert_eq!(deltas(&card), vec![10, expected]);
    }

    #[test]
    fn score_bands_at_the_edges() {
        // 50 + 20 + 10 + 5 = 85 is not above 85.
        let strong = match_scorecard(&summary(1, 3, false), &summary(2, 3, false), &gunas(30.0, false, false));
        assert_eq!(strong.score(), 85);
        assert_eq!(strong.band(), ScoreBand::VeryGood);

        let both = match_scorecard(&summary(1, 3, true), &summary(2, 3, true), &gunas(30.0, false, false));
        assert_eq!(both.score(), 90);
        assert_eq!(both.band(), ScoreBand::Excellent);

        let weak = match_scorecard(&summary(1, 1, true), &summary(6, 4, false), &gunas(10.0, true, true));
        assert_eq!(weak.raw(), -5);
        assert_eq!(weak.score(), 0);
        assert_eq!(weak.band(), ScoreBand::Challenging);
    }

    #[test]
    fn identical_moons_lose_only_nadi() {
        let m = moon(ZodiacSign::Aries, Nakshatra::from_longitude(1.0));
        let result = ashtakoota(m, m);
        assert!(result.nadi_dosha);
        assert!(!result.bhakut_dosha);
        assert_abs_diff_eq!(result.points(Koota::Nadi), 0.0);
        assert_abs_diff_eq!(result.total, 28.0);
    }

    #[test]
    fn koota_maxima_sum_to_36() {
        let total: f64 = [
            Koota::Varna,
            Koota::Vasya,
            Koota::Tara,
            Koota::Yoni,
            Koota::GrahaMaitri,
            Koota::Gana,
            Koota::Bhakut,
            Koota::Nadi,
        ]
        .iter()
        .map(|k| k.max_points())
        .sum();
        assert_abs_diff_eq!(total, MAX_GUNA_POINTS);
    }

    #[rstest]
    #[case(ZodiacSign::Aries, ZodiacSign::Taurus, true)]
    #[case(ZodiacSign::Aries, ZodiacSign::Leo, true)]
    #[case(ZodiacSign::Aries, ZodiacSign::Virgo, true)]
    #[case(ZodiacSign::Aries, ZodiacSign::Libra, false)]
    #[case(ZodiacSign::Aries, ZodiacSign::Gemini, false)]
    #[case(ZodiacSign::Aries, ZodiacSign::Pisces, true)]
    fn bhakut_pairs(#[case] a: ZodiacSign, #[case] b: ZodiacSign, #[case] dosha: bool) {
        assert_eq!(bhakut_dosha(a, b), dosha);
        assert_eq!(bhakut_dosha(b, a), dosha);
    }

    #[test]
    fn every_score_stays_within_koota_maximum() {
        for a in crate::ALL_NAKSHATRAS {
            for b in crate::ALL_NAKSHATRAS {
                let first = moon(ZodiacSign::from_index(a.index() * 4 / 9), a);
                let second = moon(ZodiacSign::from_index(b.index() * 4 / 9), b);
                let result = ashtakoota(first, second);
                for koota in &result.kootas {
                    assert!(koota.points >= 0.0 && koota.points <= koota.max_points);
                }
                assert!(result.total <= MAX_GUNA_POINTS);
            }
        }
    }

    #[test]
    fn tara_counts_inclusively() {
        let ashwini = Nakshatra::from_longitude(1.0);
        // Krittika is the third from Ashwini (Vipat).
        let krittika = Nakshatra::from_longitude(crate::NAKSHATRA_SPAN * 2.0 + 1.0);
        assert!(!tara_is_auspicious(ashwini, krittika));
        assert!(tara_is_auspicious(ashwini, ashwini));
    }

    #[test]
    fn numerology_match_scores_relationships() {
        // Bhagyank 3 and 3, mulank 6 and 6: both friendly.
        let result = numerology_match("1990-05-15", None, "1990-05-15", None).unwrap();
        assert_eq!(result.bhagyank.relationship, Relationship::Friend);
        assert_eq!(result.compatibility.score(), 80);
        assert!(result.name_number.is_none());
    }

    #[test]
    fn numerology_match_rejects_bad_dates() {
        assert!(numerology_match("1990-13-45", None, "1990-05-15", None).is_err());
    }
}
