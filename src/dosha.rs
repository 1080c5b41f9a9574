//! Mangal (Kuja) Dosha.
//!
//! Mars in the 1st, 2nd, 4th, 7th, 8th or 12th house counted from the
//! Ascendant, the Moon or Venus. The more references it afflicts, the heavier
//! the dosha. Mars in its own or exaltation sign cancels it.

use serde::Serialize;

use crate::ephemeris::{whole_sign_house, Chart};
use crate::{CelestialBody, House, ZodiacSign};

pub const DOSHA_HOUSES: [House; 6] = [
    House::First,
    House::Second,
    House::Fourth,
    House::Seventh,
    House::Eighth,
    House::Twelfth,
];

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DoshaSeverity {
    None,
    Mild,
    Moderate,
    Severe,
}

impl DoshaSeverity {
    fn from_matches(matches: usize) -> Self {
        match matches {
            0 => DoshaSeverity::None,
            1 => DoshaSeverity::Mild,
            2 => DoshaSeverity::Moderate,
            _ => DoshaSeverity::Severe,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferencePoint {
    pub reference: &'static str,
    pub house: House,
    pub afflicted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MangalDosha {
    pub present: bool,
    pub cancelled: bool,
    pub severity: DoshaSeverity,
    pub mars_sign: ZodiacSign,
    pub references: Vec<ReferencePoint>,
    pub cancellation_reasons: Vec<String>,
    pub description: String,
    pub remedies: Vec<&'static str>,
}

impl MangalDosha {
    /// Present and not cancelled.
    pub fn is_effective(&self) -> bool {
        self.present && !self.cancelled
    }
}

const REMEDIES: [&str; 5] = [
    "Recite the Hanuman Chalisa on Tuesdays",
    "Chant \"Om Angarakaya Namah\" 108 times on Tuesdays",
    "Fast on Tuesdays and donate red lentils",
    "Perform Kumbh Vivah or Mangal Shanti puja before marriage",
    "Prefer a partner whose chart also carries Mangal Dosha",
];

pub fn mangal_dosha(chart: &Chart) -> MangalDosha {
    let mars = chart.position(CelestialBody::Mars);
    let references: Vec<ReferencePoint> = [
        ("Ascendant", chart.ascendant.sign),
        ("Moon", chart.position(CelestialBody::Moon).sign),
        ("Venus", chart.position(CelestialBody::Venus).sign),
    ]
    .into_iter()
    .map(|(reference, sign)| {
        let house = whole_sign_house(mars.sign, sign);
        ReferencePoint {
            reference,
            house,
            afflicted: DOSHA_HOUSES.contains(&house),
        }
    })
    .collect();

    let matches = references.iter().filter(|r| r.afflicted).count();
    let present = matches > 0;
    let severity = DoshaSeverity::from_matches(matches);

    let mut cancellation_reasons = Vec::new();
    if present {
        if CelestialBody::Mars.own_signs().contains(&mars.sign) {
            cancellation_reasons.push(format!("Mars is in its own sign {}", mars.sign));
        }
        if mars.sign == CelestialBody::Mars.exaltation_sign() {
            cancellation_reasons.push(format!("Mars is exalted in {}", mars.sign));
        }
    }
    let cancelled = !cancellation_reasons.is_empty();

    let description = if !present {
        "Mars does not occupy a dosha house from the Ascendant, Moon or Venus.".to_string()
    } else {
        let afflicted: Vec<&str> = references
            .iter()
            .filter(|r| r.afflicted)
            .map(|r| r.reference)
            .collect();
        let mut text = format!(
            "Mars in {} afflicts the marriage houses counted from the {}.",
            mars.sign,
            afflicted.join(", ")
        );
        if cancelled {
            text.push_str(" The dosha is cancelled and its effect is minimal.");
        }
        text
    };

    MangalDosha {
        present,
        cancelled,
        severity,
        mars_sign: mars.sign,
        references,
        cancellation_reasons,
        description,
        remedies: if present && !cancelled {
            REMEDIES.to_vec()
        } else {
            Vec::new()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::{calculate_chart, ChartOptions};
    use crate::profile::BirthProfile;

    fn chart() -> Chart {
        let profile =
            BirthProfile::parse("1992-09-29", Some("08:15"), Some("pune"), None, "12:00", "delhi").unwrap();
        calculate_chart(&profile, &ChartOptions::default())
    }

    fn set_sign(chart: &mut Chart, body: CelestialBody, sign: ZodiacSign) {
        let ascendant = chart.ascendant.sign;
        let position = &mut chart.planets[body.index()];
        position.sign = sign;
        position.house = whole_sign_house(sign, ascendant);
    }

    #[test]
    fn severity_counts_afflicted_references() {
        let mut c = chart();
        let asc = c.ascendant.sign;
        // Mars in the 7th from all three references.
        set_sign(&mut c, CelestialBody::Moon, asc);
        set_sign(&mut c, CelestialBody::Venus, asc);
        set_sign(&mut c, CelestialBody::Mars, asc.offset(6));
        let dosha = mangal_dosha(&c);
        assert!(dosha.present);
        assert_eq!(dosha.severity, DoshaSeverity::Severe);
        assert_eq!(dosha.references.iter().filter(|r| r.afflicted).count(), 3);
    }

    #[test]
    fn absent_when_mars_in_benign_houses() {
        let mut c = chart();
        let asc = c.ascendant.sign;
        set_sign(&mut c, CelestialBody::Moon, asc);
        set_sign(&mut c, CelestialBody::Venus, asc);
        set_sign(&mut c, CelestialBody::Mars, asc.offset(2)); // 3rd
        let dosha = mangal_dosha(&c);
        assert!(!dosha.present);
        assert_eq!(dosha.severity, DoshaSeverity::None);
        assert!(dosha.remedies.is_empty());
    }

    #[test]
    fn own_or_exalted_mars_cancels() {
        let mut c = chart();
        set_sign(&mut c, CelestialBody::Mars, ZodiacSign::Capricorn);
        let mars_sign = ZodiacSign::Capricorn;
        set_sign(&mut c, CelestialBody::Moon, mars_sign);
        let dosha = mangal_dosha(&c);
        assert!(dosha.present);
        assert!(dosha.cancelled);
        assert!(!dosha.is_effective());
        assert!(dosha.remedies.is_empty());
    }
}
