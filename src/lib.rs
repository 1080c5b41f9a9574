//! aztro prediction core.
//!
//! Numerology, simplified Jyotish charts, Vastu scoring and the narrative
//! readings built on top of them. Every reading is a pure function of the
//! birth data and the configuration, so identical requests produce identical
//! output.

use serde::{Serialize, Serializer};
use std::fmt;

pub mod compatibility;
pub mod config;
pub mod dasha;
pub mod dosha;
pub mod ephemeris;
pub mod error;
pub mod locations;
pub mod loshu;
pub mod numerology;
pub mod predictions;
pub mod profile;
pub mod remedies;
pub mod report;
pub mod scoring;
pub mod server;
pub mod tables;
pub mod vastu;
pub mod yogas;

pub use config::{AppConfig, ChartConfig, ConfigError, LogConfig, ServerConfig};
pub use ephemeris::{calculate_chart, Chart, ChartOptions, HouseAnalysis, PlanetPosition};
pub use error::AstrologyError;
pub use locations::Location;
pub use profile::BirthProfile;
pub use scoring::{Adjustment, ScoreBand, Scorecard};

// ---------------------------
// ## Enumerations
// ---------------------------

/// The nine grahas of Jyotish, in the order charts list them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CelestialBody {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    Rahu,
    Ketu,
}

pub const ALL_BODIES: [CelestialBody; 9] = [
    CelestialBody::Sun,
    CelestialBody::Moon,
    CelestialBody::Mars,
    CelestialBody::Mercury,
    CelestialBody::Jupiter,
    CelestialBody::Venus,
    CelestialBody::Saturn,
    CelestialBody::Rahu,
    CelestialBody::Ketu,
];

/// Natural relationship of one graha towards another.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Relationship {
    Friend,
    Neutral,
    Enemy,
}

/// Placement quality of a graha in a sign.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Dignity {
    Exalted,
    OwnSign,
    Friendly,
    Neutral,
    Enemy,
    Debilitated,
}

impl CelestialBody {
    pub fn iter() -> impl Iterator<Item = CelestialBody> {
        ALL_BODIES.iter().copied()
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mars => 2,
            Self::Mercury => 3,
            Self::Jupiter => 4,
            Self::Venus => 5,
            Self::Saturn => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Mercury => "Mercury",
            Self::Jupiter => "Jupiter",
            Self::Venus => "Venus",
            Self::Saturn => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::Sun => "Surya",
            Self::Moon => "Chandra",
            Self::Mars => "Mangal",
            Self::Mercury => "Budh",
            Self::Jupiter => "Guru",
            Self::Venus => "Shukra",
            Self::Saturn => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Accepts English or Sanskrit names, case-insensitive.
    pub fn from_name(name: &str) -> Option<CelestialBody> {
        let wanted = name.trim();
        CelestialBody::iter().find(|body| {
            body.name().eq_ignore_ascii_case(wanted)
                || body.sanskrit_name().eq_ignore_ascii_case(wanted)
        })
    }

    pub const fn is_natural_benefic(self) -> bool {
        matches!(
            self,
            Self::Moon | Self::Mercury | Self::Jupiter | Self::Venus
        )
    }

    pub const fn exaltation_sign(self) -> ZodiacSign {
        match self {
            Self::Sun => ZodiacSign::Aries,
            Self::Moon => ZodiacSign::Taurus,
            Self::Mars => ZodiacSign::Capricorn,
            Self::Mercury => ZodiacSign::Virgo,
            Self::Jupiter => ZodiacSign::Cancer,
            Self::Venus => ZodiacSign::Pisces,
            Self::Saturn => ZodiacSign::Libra,
            Self::Rahu => ZodiacSign::Gemini,
            Self::Ketu => ZodiacSign::Sagittarius,
        }
    }

    /// Always the sign opposite the exaltation sign.
    pub fn debilitation_sign(self) -> ZodiacSign {
        self.exaltation_sign().offset(6)
    }

    pub fn own_signs(self) -> &'static [ZodiacSign] {
        match self {
            Self::Sun => &[ZodiacSign::Leo],
            Self::Moon => &[ZodiacSign::Cancer],
            Self::Mars => &[ZodiacSign::Aries, ZodiacSign::Scorpio],
            Self::Mercury => &[ZodiacSign::Gemini, ZodiacSign::Virgo],
            Self::Jupiter => &[ZodiacSign::Sagittarius, ZodiacSign::Pisces],
            Self::Venus => &[ZodiacSign::Taurus, ZodiacSign::Libra],
            Self::Saturn => &[ZodiacSign::Capricorn, ZodiacSign::Aquarius],
            Self::Rahu => &[ZodiacSign::Aquarius],
            Self::Ketu => &[ZodiacSign::Scorpio],
        }
    }

    /// Naisargika (natural) friendship table.
    pub fn relationship_to(self, other: CelestialBody) -> Relationship {
        use CelestialBody::*;

        if self == other {
            return Relationship::Friend;
        }
        let (friends, enemies): (&[CelestialBody], &[CelestialBody]) = match self {
            Sun => (&[Moon, Mars, Jupiter], &[Venus, Saturn, Rahu, Ketu]),
            Moon => (&[Sun, Mercury], &[Rahu, Ketu]),
            Mars => (&[Sun, Moon, Jupiter], &[Mercury]),
            Mercury => (&[Sun, Venus], &[Moon]),
            Jupiter => (&[Sun, Moon, Mars], &[Mercury, Venus]),
            Venus => (&[Mercury, Saturn], &[Sun, Moon]),
            Saturn => (&[Mercury, Venus], &[Sun, Moon, Mars]),
            Rahu => (&[Mercury, Venus, Saturn], &[Sun, Moon, Mars]),
            Ketu => (&[Mars, Jupiter], &[Sun, Moon]),
        };

        if friends.contains(&other) {
            Relationship::Friend
        } else if enemies.contains(&other) {
            Relationship::Enemy
        } else {
            Relationship::Neutral
        }
    }

    pub fn dignity_in(self, sign: ZodiacSign) -> Dignity {
        if sign == self.exaltation_sign() {
            Dignity::Exalted
        } else if sign == self.debilitation_sign() {
            Dignity::Debilitated
        } else if self.own_signs().contains(&sign) {
            Dignity::OwnSign
        } else {
            match self.relationship_to(sign.lord()) {
                Relationship::Friend => Dignity::Friendly,
                Relationship::Neutral => Dignity::Neutral,
                Relationship::Enemy => Dignity::Enemy,
            }
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum House {
    First = 1,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Eighth,
    Ninth,
    Tenth,
    Eleventh,
    Twelfth,
}

impl House {
    pub fn from_index(index: usize) -> Option<House> {
        match index {
            1 => Some(House::First),
            2 => Some(House::Second),
            3 => Some(House::Third),
            4 => Some(House::Fourth),
            5 => Some(House::Fifth),
            6 => Some(House::Sixth),
            7 => Some(House::Seventh),
            8 => Some(House::Eighth),
            9 => Some(House::Ninth),
            10 => Some(House::Tenth),
            11 => Some(House::Eleventh),
            12 => Some(House::Twelfth),
            _ => None,
        }
    }

    pub fn all() -> impl Iterator<Item = House> {
        (1..=12).filter_map(House::from_index)
    }

    pub const fn number(self) -> u8 {
        self as u8
    }

    /// The house `count` places from this one, counting this house as the first.
    pub fn counted(self, count: u8) -> House {
        let zero_based = (self.number() as usize - 1 + count as usize + 11) % 12;
        House::from_index(zero_based + 1).unwrap_or(House::First)
    }

    pub const fn is_kendra(self) -> bool {
        matches!(self, House::First | House::Fourth | House::Seventh | House::Tenth)
    }

    pub const fn is_trikona(self) -> bool {
        matches!(self, House::Fifth | House::Ninth)
    }

    pub const fn is_dusthana(self) -> bool {
        matches!(self, House::Sixth | House::Eighth | House::Twelfth)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ZodiacSign {
    Aries = 0,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    pub fn from_index(index: usize) -> ZodiacSign {
        ALL_SIGNS[index % 12]
    }

    pub fn from_longitude(longitude: f64) -> Self {
        let normalized_longitude = longitude.rem_euclid(360.0);
        Self::from_index((normalized_longitude / 30.0).floor() as usize)
    }

    pub fn from_name(name: &str) -> Option<ZodiacSign> {
        let wanted = name.trim();
        ALL_SIGNS.iter().copied().find(|sign| {
            sign.name().eq_ignore_ascii_case(wanted) || sign.vedic_name().eq_ignore_ascii_case(wanted)
        })
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// The sign `steps` places forward in the zodiac.
    pub fn offset(self, steps: usize) -> ZodiacSign {
        Self::from_index(self.index() + steps)
    }

    pub const fn name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }

    pub const fn vedic_name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Mesha",
            ZodiacSign::Taurus => "Vrishabha",
            ZodiacSign::Gemini => "Mithuna",
            ZodiacSign::Cancer => "Karka",
            ZodiacSign::Leo => "Simha",
            ZodiacSign::Virgo => "Kanya",
            ZodiacSign::Libra => "Tula",
            ZodiacSign::Scorpio => "Vrischika",
            ZodiacSign::Sagittarius => "Dhanu",
            ZodiacSign::Capricorn => "Makara",
            ZodiacSign::Aquarius => "Kumbha",
            ZodiacSign::Pisces => "Meena",
        }
    }

    pub const fn lord(self) -> CelestialBody {
        match self {
            ZodiacSign::Aries | ZodiacSign::Scorpio => CelestialBody::Mars,
            ZodiacSign::Taurus | ZodiacSign::Libra => CelestialBody::Venus,
            ZodiacSign::Gemini | ZodiacSign::Virgo => CelestialBody::Mercury,
            ZodiacSign::Cancer => CelestialBody::Moon,
            ZodiacSign::Leo => CelestialBody::Sun,
            ZodiacSign::Sagittarius | ZodiacSign::Pisces => CelestialBody::Jupiter,
            ZodiacSign::Capricorn | ZodiacSign::Aquarius => CelestialBody::Saturn,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Moola,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishta,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Moola,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishta,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

/// 13°20' of arc.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

impl Nakshatra {
    pub fn from_longitude(longitude: f64) -> Nakshatra {
        let normalized_longitude = longitude.rem_euclid(360.0);
        let nakshatra_index = (normalized_longitude / NAKSHATRA_SPAN).floor() as usize;
        ALL_NAKSHATRAS[nakshatra_index.min(26)]
    }

    pub fn from_name(name: &str) -> Option<Nakshatra> {
        let wanted: String = name.chars().filter(|c| !c.is_whitespace()).collect();
        ALL_NAKSHATRAS.iter().copied().find(|nakshatra| {
            let compact: String = nakshatra.name().chars().filter(|c| !c.is_whitespace()).collect();
            compact.eq_ignore_ascii_case(&wanted)
        })
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Nakshatra::Ashwini => "Ashwini",
            Nakshatra::Bharani => "Bharani",
            Nakshatra::Krittika => "Krittika",
            Nakshatra::Rohini => "Rohini",
            Nakshatra::Mrigashira => "Mrigashira",
            Nakshatra::Ardra => "Ardra",
            Nakshatra::Punarvasu => "Punarvasu",
            Nakshatra::Pushya => "Pushya",
            Nakshatra::Ashlesha => "Ashlesha",
            Nakshatra::Magha => "Magha",
            Nakshatra::PurvaPhalguni => "Purva Phalguni",
            Nakshatra::UttaraPhalguni => "Uttara Phalguni",
            Nakshatra::Hasta => "Hasta",
            Nakshatra::Chitra => "Chitra",
            Nakshatra::Swati => "Swati",
            Nakshatra::Vishakha => "Vishakha",
            Nakshatra::Anuradha => "Anuradha",
            Nakshatra::Jyeshtha => "Jyeshtha",
            Nakshatra::Moola => "Moola",
            Nakshatra::PurvaAshadha => "Purva Ashadha",
            Nakshatra::UttaraAshadha => "Uttara Ashadha",
            Nakshatra::Shravana => "Shravana",
            Nakshatra::Dhanishta => "Dhanishta",
            Nakshatra::Shatabhisha => "Shatabhisha",
            Nakshatra::PurvaBhadrapada => "Purva Bhadrapada",
            Nakshatra::UttaraBhadrapada => "Uttara Bhadrapada",
            Nakshatra::Revati => "Revati",
        }
    }

    /// Vimshottari lord; the nine lords repeat three times from Ashwini.
    pub const fn lord(self) -> CelestialBody {
        const LORDS: [CelestialBody; 9] = [
            CelestialBody::Ketu,
            CelestialBody::Venus,
            CelestialBody::Sun,
            CelestialBody::Moon,
            CelestialBody::Mars,
            CelestialBody::Rahu,
            CelestialBody::Jupiter,
            CelestialBody::Saturn,
            CelestialBody::Mercury,
        ];
        LORDS[self.index() % 9]
    }
}

// ---------------------------
// ## Display & Serialization
// ---------------------------

macro_rules! named_enum {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.name())
                }
            }

            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.serialize_str(self.name())
                }
            }
        )+
    };
}

named_enum!(CelestialBody, ZodiacSign, Nakshatra);

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "House {}", self.number())
    }
}

impl Serialize for House {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nakshatra_lords_follow_vimshottari_order() {
        assert_eq!(Nakshatra::Ashwini.lord(), CelestialBody::Ketu);
        assert_eq!(Nakshatra::Rohini.lord(), CelestialBody::Moon);
        assert_eq!(Nakshatra::Magha.lord(), CelestialBody::Ketu);
        assert_eq!(Nakshatra::Revati.lord(), CelestialBody::Mercury);
    }

    #[test]
    fn longitude_maps_to_sign_and_nakshatra() {
        assert_eq!(ZodiacSign::from_longitude(0.0), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(359.99), ZodiacSign::Pisces);
        assert_eq!(ZodiacSign::from_longitude(-15.0), ZodiacSign::Pisces);
        assert_eq!(Nakshatra::from_longitude(40.0), Nakshatra::Rohini);
        assert_eq!(Nakshatra::from_longitude(359.999), Nakshatra::Revati);
    }

    #[test]
    fn house_counting_wraps() {
        assert_eq!(House::First.counted(7), House::Seventh);
        assert_eq!(House::Tenth.counted(4), House::First);
        assert_eq!(House::Twelfth.counted(2), House::First);
        assert_eq!(House::Third.counted(1), House::Third);
    }

    #[test]
    fn dignity_uses_exaltation_before_relationship() {
        assert_eq!(CelestialBody::Sun.dignity_in(ZodiacSign::Aries), Dignity::Exalted);
        assert_eq!(CelestialBody::Sun.dignity_in(ZodiacSign::Libra), Dignity::Debilitated);
        assert_eq!(CelestialBody::Mars.dignity_in(ZodiacSign::Scorpio), Dignity::OwnSign);
        assert_eq!(CelestialBody::Jupiter.dignity_in(ZodiacSign::Leo), Dignity::Friendly);
        assert_eq!(CelestialBody::Saturn.dignity_in(ZodiacSign::Leo), Dignity::Enemy);
    }

    #[test]
    fn natural_benefics() {
        let benefics: Vec<CelestialBody> = CelestialBody::iter().filter(|b| b.is_natural_benefic()).collect();
        assert_eq!(
            benefics,
            vec![CelestialBody::Moon, CelestialBody::Mercury, CelestialBody::Jupiter, CelestialBody::Venus]
        );
    }

    #[test]
    fn names_parse_in_both_languages() {
        assert_eq!(CelestialBody::from_name("shani"), Some(CelestialBody::Saturn));
        assert_eq!(ZodiacSign::from_name("Karka"), Some(ZodiacSign::Cancer));
        assert_eq!(Nakshatra::from_name("purvaphalguni"), Some(Nakshatra::PurvaPhalguni));
        assert_eq!(Nakshatra::from_name("Uttara Bhadrapada"), Some(Nakshatra::UttaraBhadrapada));
        assert_eq!(CelestialBody::from_name("Pluto"), None);
    }
}
