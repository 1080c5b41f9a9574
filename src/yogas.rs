use serde::Serialize;

use crate::ephemeris::Chart;
use crate::{CelestialBody, House};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum Yoga {
    Gajakesari,
    Budhaditya,
    Ruchaka,
    Bhadra,
    Hamsa,
    Malavya,
    Shasha,
    Adhi,
    ChandraMangala,
    Kemadruma,
}

impl Yoga {
    pub const fn name(self) -> &'static str {
        match self {
            Yoga::Gajakesari => "Gajakesari Yoga",
            Yoga::Budhaditya => "Budhaditya Yoga",
            Yoga::Ruchaka => "Ruchaka Yoga",
            Yoga::Bhadra => "Bhadra Yoga",
            Yoga::Hamsa => "Hamsa Yoga",
            Yoga::Malavya => "Malavya Yoga",
            Yoga::Shasha => "Shasha Yoga",
            Yoga::Adhi => "Adhi Yoga",
            Yoga::ChandraMangala => "Chandra-Mangala Yoga",
            Yoga::Kemadruma => "Kemadruma Yoga",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Yoga::Gajakesari => "Jupiter in a kendra from the Moon brings wisdom, reputation and lasting prosperity.",
            Yoga::Budhaditya => "Sun and Mercury together sharpen intellect and give skill in communication.",
            Yoga::Ruchaka => "Mars strong in a kendra gives courage, command and physical vigour.",
            Yoga::Bhadra => "Mercury strong in a kendra gives eloquence, learning and business acumen.",
            Yoga::Hamsa => "Jupiter strong in a kendra gives virtue, good counsel and respect.",
            Yoga::Malavya => "Venus strong in a kendra gives charm, comfort and artistic refinement.",
            Yoga::Shasha => "Saturn strong in a kendra gives authority over people and resources.",
            Yoga::Adhi => "Benefics in the 6th, 7th and 8th from the Moon bring leadership and a comfortable life.",
            Yoga::ChandraMangala => "Moon with Mars gives enterprise and the ability to earn through effort.",
            Yoga::Kemadruma => "No planets flank the Moon; periods of loneliness or financial strain need care.",
        }
    }

    pub const fn is_auspicious(self) -> bool {
        !matches!(self, Yoga::Kemadruma)
    }
}

/// Life area a yoga colours.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Realm {
    Wealth,
    Career,
    Intellect,
    Relationships,
    Health,
    Spirituality,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Impact {
    pub realm: Realm,
    /// -100 to 100
    pub weight: i8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YogaInfo {
    pub yoga: Yoga,
    pub name: &'static str,
    pub description: &'static str,
    pub auspicious: bool,
    pub strength: u32,
    pub involved_planets: Vec<CelestialBody>,
    pub impacts: Vec<Impact>,
}

struct YogaDefinition {
    yoga: Yoga,
    detect: fn(&Chart) -> Option<Vec<CelestialBody>>,
    impacts: &'static [(Realm, i8)],
}

fn kendra_from_moon(chart: &Chart, body: CelestialBody) -> bool {
    chart.house_from(CelestialBody::Moon, body).is_kendra()
}

fn conjunct(chart: &Chart, a: CelestialBody, b: CelestialBody) -> bool {
    chart.position(a).sign == chart.position(b).sign
}

fn mahapurusha(chart: &Chart, body: CelestialBody) -> Option<Vec<CelestialBody>> {
    let position = chart.position(body);
    let dignified = position.sign == body.exaltation_sign() || body.own_signs().contains(&position.sign);
    (dignified && position.house.is_kendra()).then(|| vec![body])
}

fn ruchaka(chart: &Chart) -> Option<Vec<CelestialBody>> {
    mahapurusha(chart, CelestialBody::Mars)
}

fn bhadra(chart: &Chart) -> Option<Vec<CelestialBody>> {
    mahapurusha(chart, CelestialBody::Mercury)
}

fn hamsa(chart: &Chart) -> Option<Vec<CelestialBody>> {
    mahapurusha(chart, CelestialBody::Jupiter)
}

fn malavya(chart: &Chart) -> Option<Vec<CelestialBody>> {
    mahapurusha(chart, CelestialBody::Venus)
}

fn shasha(chart: &Chart) -> Option<Vec<CelestialBody>> {
    mahapurusha(chart, CelestialBody::Saturn)
}

fn gajakesari(chart: &Chart) -> Option<Vec<CelestialBody>> {
    kendra_from_moon(chart, CelestialBody::Jupiter)
        .then(|| vec![CelestialBody::Moon, CelestialBody::Jupiter])
}

fn budhaditya(chart: &Chart) -> Option<Vec<CelestialBody>> {
    conjunct(chart, CelestialBody::Sun, CelestialBody::Mercury)
        .then(|| vec![CelestialBody::Sun, CelestialBody::Mercury])
}

fn adhi(chart: &Chart) -> Option<Vec<CelestialBody>> {
    let benefics: Vec<CelestialBody> = CelestialBody::iter()
        .filter(|body| body.is_natural_benefic() && *body != CelestialBody::Moon)
        .filter(|body| {
            matches!(
                chart.house_from(CelestialBody::Moon, *body),
                House::Sixth | House::Seventh | House::Eighth
            )
        })
        .collect();
    (benefics.len() >= 2).then_some(benefics)
}

fn chandra_mangala(chart: &Chart) -> Option<Vec<CelestialBody>> {
    conjunct(chart, CelestialBody::Moon, CelestialBody::Mars)
        .then(|| vec![CelestialBody::Moon, CelestialBody::Mars])
}

/// Sun and the nodes do not break Kemadruma.
fn kemadruma(chart: &Chart) -> Option<Vec<CelestialBody>> {
    let flanked = CelestialBody::iter()
        .filter(|body| {
            !matches!(
                body,
                CelestialBody::Moon | CelestialBody::Sun | CelestialBody::Rahu | CelestialBody::Ketu
            )
        })
        .any(|body| {
            matches!(
                chart.house_from(CelestialBody::Moon, body),
                House::First | House::Second | House::Twelfth
            )
        });
    (!flanked).then(|| vec![CelestialBody::Moon])
}

static DEFINITIONS: [YogaDefinition; 10] = [
    YogaDefinition {
        yoga: Yoga::Gajakesari,
        detect: gajakesari,
        impacts: &[(Realm::Wealth, 40), (Realm::Intellect, 30), (Realm::Career, 20)],
    },
    YogaDefinition {
        yoga: Yoga::Budhaditya,
        detect: budhaditya,
        impacts: &[(Realm::Intellect, 40), (Realm::Career, 20)],
    },
    YogaDefinition {
        yoga: Yoga::Ruchaka,
        detect: ruchaka,
        impacts: &[(Realm::Career, 40), (Realm::Health, 30)],
    },
    YogaDefinition {
        yoga: Yoga::Bhadra,
        detect: bhadra,
        impacts: &[(Realm::Intellect, 40), (Realm::Wealth, 20)],
    },
    YogaDefinition {
        yoga: Yoga::Hamsa,
        detect: hamsa,
        impacts: &[(Realm::Spirituality, 40), (Realm::Wealth, 20)],
    },
    YogaDefinition {
        yoga: Yoga::Malavya,
        detect: malavya,
        impacts: &[(Realm::Relationships, 40), (Realm::Wealth, 20)],
    },
    YogaDefinition {
        yoga: Yoga::Shasha,
        detect: shasha,
        impacts: &[(Realm::Career, 40), (Realm::Wealth, 20)],
    },
    YogaDefinition {
        yoga: Yoga::Adhi,
        detect: adhi,
        impacts: &[(Realm::Career, 30), (Realm::Wealth, 30)],
    },
    YogaDefinition {
        yoga: Yoga::ChandraMangala,
        detect: chandra_mangala,
        impacts: &[(Realm::Wealth, 30)],
    },
    YogaDefinition {
        yoga: Yoga::Kemadruma,
        detect: kemadruma,
        impacts: &[(Realm::Wealth, -30), (Realm::Relationships, -20)],
    },
];

/// Every yoga present in the chart, in a fixed order.
pub fn detect_yogas(chart: &Chart) -> Vec<YogaInfo> {
    DEFINITIONS
        .iter()
        .filter_map(|definition| {
            let involved = (definition.detect)(chart)?;
            let strength = involved.iter().map(|b| chart.strength(*b)).sum::<u32>()
                / involved.len().max(1) as u32;
            Some(YogaInfo {
                yoga: definition.yoga,
                name: definition.yoga.name(),
                description: definition.yoga.description(),
                auspicious: definition.yoga.is_auspicious(),
                strength,
                involved_planets: involved,
                impacts: definition
                    .impacts
                    .iter()
                    .map(|&(realm, weight)| Impact { realm, weight })
                    .collect(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::{calculate_chart, whole_sign_house, ChartOptions};
    use crate::profile::BirthProfile;
    use crate::ZodiacSign;

    fn chart(dob: &str) -> Chart {
        let profile = BirthProfile::parse(dob, Some("10:00"), Some("delhi"), None, "12:00", "delhi").unwrap();
        calculate_chart(&profile, &ChartOptions::default())
    }

    /// Move `body` into `sign`, keeping houses consistent.
    fn place(chart: &mut Chart, body: CelestialBody, sign: ZodiacSign) {
        let ascendant = chart.ascendant.sign;
        let position = &mut chart.planets[body.index()];
        position.sign = sign;
        position.longitude = sign.index() as f64 * 30.0 + 15.0;
        position.house = whole_sign_house(sign, ascendant);
    }

    #[test]
    fn gajakesari_when_jupiter_in_kendra_from_moon() {
        let mut c = chart("1990-05-15");
        place(&mut c, CelestialBody::Moon, ZodiacSign::Aries);
        place(&mut c, CelestialBody::Jupiter, ZodiacSign::Cancer);
        assert!(detect_yogas(&c).iter().any(|y| y.yoga == Yoga::Gajakesari));

        place(&mut c, CelestialBody::Jupiter, ZodiacSign::Taurus);
        assert!(!detect_yogas(&c).iter().any(|y| y.yoga == Yoga::Gajakesari));
    }

    #[test]
    fn hamsa_needs_dignity_and_kendra() {
        let mut c = chart("1990-05-15");
        let fourth = c.ascendant.sign.offset(3);
        place(&mut c, CelestialBody::Jupiter, fourth);
        let expected = fourth == ZodiacSign::Cancer || CelestialBody::Jupiter.own_signs().contains(&fourth);
        assert_eq!(detect_yogas(&c).iter().any(|y| y.yoga == Yoga::Hamsa), expected);
    }

    #[test]
    fn kemadruma_when_moon_is_isolated() {
        let mut c = chart("1990-05-15");
        place(&mut c, CelestialBody::Moon, ZodiacSign::Aries);
        for body in [
            CelestialBody::Mars,
            CelestialBody::Mercury,
            CelestialBody::Jupiter,
            CelestialBody::Venus,
            CelestialBody::Saturn,
        ] {
            place(&mut c, body, ZodiacSign::Libra);
        }
        let yogas = detect_yogas(&c);
        let kemadruma = yogas.iter().find(|y| y.yoga == Yoga::Kemadruma).unwrap();
        assert!(!kemadruma.auspicious);
        assert!(kemadruma.impacts.iter().all(|i| i.weight < 0));
        // Venus, Mercury and Jupiter in the 7th from the Moon also form Adhi.
        assert!(yogas.iter().any(|y| y.yoga == Yoga::Adhi));
    }

    #[test]
    fn strength_is_mean_of_involved() {
        let mut c = chart("1990-05-15");
        place(&mut c, CelestialBody::Sun, ZodiacSign::Gemini);
        place(&mut c, CelestialBody::Mercury, ZodiacSign::Gemini);
        let yoga = detect_yogas(&c)
            .into_iter()
            .find(|y| y.yoga == Yoga::Budhaditya)
            .unwrap();
        let expected = (c.strength(CelestialBody::Sun) + c.strength(CelestialBody::Mercury)) / 2;
        assert_eq!(yoga.strength, expected);
    }
}
