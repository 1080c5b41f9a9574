//! Mean-element planetary positions and whole-sign houses.
//!
//! Positions come from linear mean longitudes projected onto circular orbits.
//! They are good to a few degrees, which is enough to place a graha in its
//! sign most of the time. Nothing here reads a clock or a random source: a
//! chart is a pure function of the [`BirthProfile`] and [`ChartOptions`].

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use xxhash_rust::xxh64::xxh64;

use crate::config::ChartConfig;
use crate::profile::BirthProfile;
use crate::{CelestialBody, Dignity, House, Nakshatra, ZodiacSign, ALL_BODIES, NAKSHATRA_SPAN};

pub type JulianDay = f64;

pub const J2000: JulianDay = 2_451_545.0;
pub const DAYS_PER_CENTURY: f64 = 36_525.0;
pub const LAHIRI_AYANAMSA: f64 = 24.14;
pub const DEFAULT_STRENGTH_JITTER: u32 = 5;

// ---------------------------
// ## Time
// ---------------------------

/// Julian Day for a Gregorian date at `hour_ut` decimal hours.
pub fn julian_day(date: NaiveDate, hour_ut: f64) -> JulianDay {
    let (mut year, mut month) = (date.year() as f64, date.month() as f64);
    if month <= 2.0 {
        year -= 1.0;
        month += 12.0;
    }
    let a = (year / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (year + 4716.0)).floor() + (30.6001 * (month + 1.0)).floor() + date.day() as f64
        + b
        - 1524.5
        + hour_ut / 24.0
}

/// Julian centuries since J2000.0.
pub fn centuries(jd: JulianDay) -> f64 {
    (jd - J2000) / DAYS_PER_CENTURY
}

/// Greenwich mean sidereal time in degrees.
pub fn greenwich_sidereal_time(jd: JulianDay) -> f64 {
    let t = centuries(jd);
    (280.460_618_37 + 360.985_647_366_29 * (jd - J2000) + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0)
        .rem_euclid(360.0)
}

pub fn obliquity(t: f64) -> f64 {
    23.439_291_1 - 0.013_004_2 * t
}

// ---------------------------
// ## Longitudes
// ---------------------------

/// Heliocentric mean elements: longitude at J2000, degrees per century and
/// semi-major axis in AU.
struct MeanElements {
    base: f64,
    rate: f64,
    axis: f64,
}

fn heliocentric_elements(body: CelestialBody) -> Option<MeanElements> {
    let (base, rate, axis) = match body {
        CelestialBody::Mercury => (252.250_906, 149_472.674_635_8, 0.387_098),
        CelestialBody::Venus => (181.979_801, 58_517.815_676_0, 0.723_330),
        CelestialBody::Mars => (355.433_275, 19_140.299_331_3, 1.523_679),
        CelestialBody::Jupiter => (34.351_484, 3_034.905_674_6, 5.202_603),
        CelestialBody::Saturn => (50.077_471, 1_222.113_794_3, 9.554_909),
        _ => return None,
    };
    Some(MeanElements { base, rate, axis })
}

fn sun_longitude(t: f64) -> f64 {
    let mean = 280.466_46 + 36_000.769_83 * t;
    let anomaly = (357.529_11 + 35_999.050_29 * t).to_radians();
    let center = 1.914_602 * anomaly.sin() + 0.019_993 * (2.0 * anomaly).sin();
    (mean + center).rem_euclid(360.0)
}

fn moon_longitude(t: f64) -> f64 {
    let mean = 218.316_447_7 + 481_267.881_234_21 * t;
    let anomaly = (134.963_396_4 + 477_198.867_505_5 * t).to_radians();
    (mean + 6.289 * anomaly.sin()).rem_euclid(360.0)
}

fn mean_node_longitude(t: f64) -> f64 {
    (125.044_52 - 1_934.136_261 * t).rem_euclid(360.0)
}

/// Tropical geocentric longitude in degrees.
pub fn tropical_longitude(body: CelestialBody, jd: JulianDay) -> f64 {
    let t = centuries(jd);
    match body {
        CelestialBody::Sun => sun_longitude(t),
        CelestialBody::Moon => moon_longitude(t),
        CelestialBody::Rahu => mean_node_longitude(t),
        CelestialBody::Ketu => (mean_node_longitude(t) + 180.0).rem_euclid(360.0),
        planet => match heliocentric_elements(planet) {
            Some(elements) => {
                let helio = (elements.base + elements.rate * t).to_radians();
                let earth = (sun_longitude(t) + 180.0).to_radians();
                let x = elements.axis * helio.cos() - earth.cos();
                let y = elements.axis * helio.sin() - earth.sin();
                y.atan2(x).to_degrees().rem_euclid(360.0)
            }
            None => 0.0,
        },
    }
}

pub fn sidereal_longitude(body: CelestialBody, jd: JulianDay, ayanamsa: f64) -> f64 {
    (tropical_longitude(body, jd) - ayanamsa).rem_euclid(360.0)
}

/// Signed daily motion from a centred one-day difference.
pub fn daily_motion(body: CelestialBody, jd: JulianDay) -> f64 {
    let before = tropical_longitude(body, jd - 0.5);
    let after = tropical_longitude(body, jd + 0.5);
    let delta = (after - before).rem_euclid(360.0);
    if delta > 180.0 {
        delta - 360.0
    } else {
        delta
    }
}

/// Sidereal longitude of the rising degree.
pub fn ascendant_longitude(jd: JulianDay, latitude: f64, longitude: f64, ayanamsa: f64) -> f64 {
    let local_sidereal = (greenwich_sidereal_time(jd) + longitude).to_radians();
    let epsilon = obliquity(centuries(jd)).to_radians();
    let latitude = latitude.clamp(-89.9, 89.9).to_radians();
    let tropical = local_sidereal.cos().atan2(
        -(local_sidereal.sin() * epsilon.cos() + latitude.tan() * epsilon.sin()),
    );
    (tropical.to_degrees() - ayanamsa).rem_euclid(360.0)
}

/// Whole-sign house of `sign` counted from the ascendant sign.
pub fn whole_sign_house(sign: ZodiacSign, ascendant: ZodiacSign) -> House {
    let number = (sign.index() + 12 - ascendant.index()) % 12 + 1;
    House::from_index(number).unwrap_or(House::First)
}

// ---------------------------
// ## Strength
// ---------------------------

pub fn dignity_base(dignity: Dignity) -> i32 {
    match dignity {
        Dignity::Exalted => 90,
        Dignity::OwnSign => 80,
        Dignity::Friendly => 60,
        Dignity::Neutral => 50,
        Dignity::Enemy => 35,
        Dignity::Debilitated => 20,
    }
}

pub fn house_modifier(house: House) -> i32 {
    if house.is_kendra() {
        10
    } else if house.is_trikona() {
        8
    } else if house.is_dusthana() {
        -10
    } else {
        0
    }
}

/// Offset in `[-jitter, +jitter]` fixed by the profile seed and the body.
fn seeded_jitter(seed: u64, body: CelestialBody, jitter: u32) -> i32 {
    if jitter == 0 {
        return 0;
    }
    let mut bytes = seed.to_le_bytes().to_vec();
    bytes.extend_from_slice(body.name().as_bytes());
    let span = 2 * jitter as u64 + 1;
    (xxh64(&bytes, 0) % span) as i32 - jitter as i32
}

// ---------------------------
// ## Chart
// ---------------------------

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ChartOptions {
    pub ayanamsa: f64,
    pub strength_jitter: u32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        ChartOptions {
            ayanamsa: LAHIRI_AYANAMSA,
            strength_jitter: DEFAULT_STRENGTH_JITTER,
        }
    }
}

impl From<&ChartConfig> for ChartOptions {
    fn from(config: &ChartConfig) -> Self {
        ChartOptions {
            ayanamsa: config.ayanamsa,
            strength_jitter: config.strength_jitter,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NakshatraPlacement {
    pub name: Nakshatra,
    pub pada: u8,
    pub lord: CelestialBody,
}

impl NakshatraPlacement {
    pub fn from_longitude(longitude: f64) -> Self {
        let nakshatra = Nakshatra::from_longitude(longitude);
        let within = longitude.rem_euclid(360.0) - nakshatra.index() as f64 * NAKSHATRA_SPAN;
        let pada = ((within / (NAKSHATRA_SPAN / 4.0)).floor() as u8 + 1).clamp(1, 4);
        NakshatraPlacement {
            name: nakshatra,
            pada,
            lord: nakshatra.lord(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetPosition {
    pub planet: CelestialBody,
    pub longitude: f64,
    pub sign: ZodiacSign,
    pub degree: f64,
    pub house: House,
    pub strength: u32,
    pub dignity: Dignity,
    pub retrograde: bool,
    pub speed: f64,
    pub nakshatra: NakshatraPlacement,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseAnalysis {
    pub house: House,
    pub sign: ZodiacSign,
    pub lord: CelestialBody,
    pub planets: Vec<CelestialBody>,
    pub aggregate_strength: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ascendant {
    pub longitude: f64,
    pub sign: ZodiacSign,
    pub degree: f64,
    pub nakshatra: NakshatraPlacement,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    pub julian_day: JulianDay,
    pub ayanamsa: f64,
    pub ascendant: Ascendant,
    pub planets: [PlanetPosition; 9],
    pub houses: Vec<HouseAnalysis>,
}

impl Chart {
    pub fn position(&self, body: CelestialBody) -> &PlanetPosition {
        &self.planets[body.index()]
    }

    pub fn house_of(&self, body: CelestialBody) -> House {
        self.position(body).house
    }

    pub fn strength(&self, body: CelestialBody) -> u32 {
        self.position(body).strength
    }

    pub fn is_in(&self, body: CelestialBody, house: House) -> bool {
        self.house_of(body) == house
    }

    pub fn sign_of_house(&self, house: House) -> ZodiacSign {
        self.ascendant.sign.offset(house.number() as usize - 1)
    }

    pub fn house_lord(&self, house: House) -> CelestialBody {
        self.sign_of_house(house).lord()
    }

    pub fn planets_in(&self, house: House) -> impl Iterator<Item = &PlanetPosition> + '_ {
        self.planets.iter().filter(move |p| p.house == house)
    }

    /// House of `body` counted from the sign of `reference`.
    pub fn house_from(&self, reference: CelestialBody, body: CelestialBody) -> House {
        whole_sign_house(self.position(body).sign, self.position(reference).sign)
    }

    pub fn moon_sign(&self) -> ZodiacSign {
        self.position(CelestialBody::Moon).sign
    }

    pub fn moon_nakshatra(&self) -> NakshatraPlacement {
        self.position(CelestialBody::Moon).nakshatra
    }
}

fn analyze_houses(ascendant: ZodiacSign, planets: &[PlanetPosition]) -> Vec<HouseAnalysis> {
    House::all()
        .map(|house| {
            let sign = ascendant.offset(house.number() as usize - 1);
            let occupants: Vec<&PlanetPosition> =
                planets.iter().filter(|p| p.house == house).collect();
            let aggregate_strength = if occupants.is_empty() {
                0.0
            } else {
                occupants.iter().map(|p| p.strength as f64).sum::<f64>() / occupants.len() as f64
            };
            HouseAnalysis {
                house,
                sign,
                lord: sign.lord(),
                planets: occupants.iter().map(|p| p.planet).collect(),
                aggregate_strength,
            }
        })
        .collect()
}

/// Compute the sidereal chart for a birth profile.
pub fn calculate_chart(profile: &BirthProfile, options: &ChartOptions) -> Chart {
    let jd = julian_day(profile.date, profile.hour_ut());
    let seed = profile.seed();
    let _span = tracing::debug_span!("chart", jd, location = profile.location.id).entered();

    let ascendant_lon = ascendant_longitude(
        jd,
        profile.location.latitude,
        profile.location.longitude,
        options.ayanamsa,
    );
    let ascendant_sign = ZodiacSign::from_longitude(ascendant_lon);

    let planets = ALL_BODIES.map(|body| {
        let longitude = sidereal_longitude(body, jd, options.ayanamsa);
        let sign = ZodiacSign::from_longitude(longitude);
        let house = whole_sign_house(sign, ascendant_sign);
        let dignity = body.dignity_in(sign);
        let speed = daily_motion(body, jd);
        let retrograde = matches!(body, CelestialBody::Rahu | CelestialBody::Ketu) || speed < 0.0;
        let raw = dignity_base(dignity)
            + house_modifier(house)
            + seeded_jitter(seed, body, options.strength_jitter);

        PlanetPosition {
            planet: body,
            longitude,
            sign,
            degree: longitude.rem_euclid(30.0),
            house,
            strength: raw.clamp(0, 100) as u32,
            dignity,
            retrograde,
            speed,
            nakshatra: NakshatraPlacement::from_longitude(longitude),
        }
    });

    let houses = analyze_houses(ascendant_sign, &planets);
    tracing::debug!(ascendant = %ascendant_sign, moon = %planets[1].sign, "chart calculated");

    Chart {
        julian_day: jd,
        ayanamsa: options.ayanamsa,
        ascendant: Ascendant {
            longitude: ascendant_lon,
            sign: ascendant_sign,
            degree: ascendant_lon.rem_euclid(30.0),
            nakshatra: NakshatraPlacement::from_longitude(ascendant_lon),
        },
        planets,
        houses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn profile(dob: &str, time: &str, location: &str) -> BirthProfile {
        BirthProfile::parse(dob, Some(time), Some(location), None, "12:00", "delhi").unwrap()
    }

    #[rstest]
    #[case(2000, 1, 1, 12.0, 2_451_545.0)]
    #[case(1987, 4, 10, 0.0, 2_446_895.5)]
    #[case(1957, 10, 4, 19.44, 2_436_116.31)]
    fn julian_day_matches_reference(
        #[case] y: i32,
        #[case] m: u32,
        #[case] d: u32,
        #[case] hour: f64,
        #[case] expected: f64,
    ) {
        assert_abs_diff_eq!(julian_day(date(y, m, d), hour), expected, epsilon = 1e-2);
    }

    #[test]
    fn sun_and_moon_at_epoch() {
        assert_abs_diff_eq!(tropical_longitude(CelestialBody::Sun, J2000), 280.382, epsilon = 1e-2);
        assert_abs_diff_eq!(tropical_longitude(CelestialBody::Moon, J2000), 222.766, epsilon = 1e-2);
        assert_abs_diff_eq!(tropical_longitude(CelestialBody::Rahu, J2000), 125.045, epsilon = 1e-2);
    }

    #[test]
    fn ayanamsa_shifts_longitude() {
        let tropical = tropical_longitude(CelestialBody::Sun, J2000);
        let sidereal = sidereal_longitude(CelestialBody::Sun, J2000, LAHIRI_AYANAMSA);
        assert_abs_diff_eq!(tropical - sidereal, LAHIRI_AYANAMSA, epsilon = 1e-9);
    }

    #[test]
    fn equatorial_ascendant_leads_sidereal_time_by_a_quadrant() {
        let jd = J2000;
        let asc = ascendant_longitude(jd, 0.0, 0.0, 0.0);
        let lst = greenwich_sidereal_time(jd);
        // At the equator the ecliptic still tilts, so allow for the obliquity.
        let diff = (asc - lst).rem_euclid(360.0);
        assert!((66.0..=114.0).contains(&diff), "diff = {diff}");
    }

    #[test]
    fn whole_sign_houses_wrap() {
        assert_eq!(whole_sign_house(ZodiacSign::Leo, ZodiacSign::Leo), House::First);
        assert_eq!(whole_sign_house(ZodiacSign::Cancer, ZodiacSign::Leo), House::Twelfth);
        assert_eq!(whole_sign_house(ZodiacSign::Aquarius, ZodiacSign::Leo), House::Seventh);
    }

    #[test]
    fn charts_are_deterministic() {
        let a = calculate_chart(&profile("1990-05-15", "06:30", "delhi"), &ChartOptions::default());
        let b = calculate_chart(&profile("1990-05-15", "06:30", "delhi"), &ChartOptions::default());
        assert_eq!(a, b);
    }

    #[test]
    fn nodes_are_opposite_and_retrograde() {
        let chart = calculate_chart(&profile("1985-12-29", "23:10", "kochi"), &ChartOptions::default());
        let rahu = chart.position(CelestialBody::Rahu);
        let ketu = chart.position(CelestialBody::Ketu);
        assert_abs_diff_eq!((ketu.longitude - rahu.longitude).rem_euclid(360.0), 180.0, epsilon = 1e-9);
        assert!(rahu.retrograde && ketu.retrograde);
        assert_eq!(whole_sign_house(ketu.sign, rahu.sign), House::Seventh);
        assert!(!chart.position(CelestialBody::Sun).retrograde);
        assert!(!chart.position(CelestialBody::Moon).retrograde);
    }

    #[test]
    fn zero_jitter_gives_table_strength() {
        let options = ChartOptions {
            strength_jitter: 0,
            ..ChartOptions::default()
        };
        let chart = calculate_chart(&profile("2001-07-04", "14:00", "mumbai"), &options);
        for position in &chart.planets {
            let expected = (dignity_base(position.dignity) + house_modifier(position.house)).clamp(0, 100);
            assert_eq!(position.strength as i32, expected, "{}", position.planet);
        }
    }

    #[test]
    fn houses_partition_the_planets() {
        let chart = calculate_chart(&profile("1975-03-21", "09:45", "chennai"), &ChartOptions::default());
        let total: usize = chart.houses.iter().map(|h| h.planets.len()).sum();
        assert_eq!(total, 9);
        for analysis in &chart.houses {
            if analysis.planets.is_empty() {
                assert_eq!(analysis.aggregate_strength, 0.0);
            }
            assert_eq!(analysis.lord, chart.house_lord(analysis.house));
        }
        assert_eq!(chart.houses[0].sign, chart.ascendant.sign);
    }

    #[test]
    fn positions_stay_in_range() {
        for (dob, time, place) in [
            ("1950-01-01", "00:00", "london"),
            ("1999-12-31", "23:59", "new-york"),
            ("2024-02-29", "12:00", "singapore"),
        ] {
            let chart = calculate_chart(&profile(dob, time, place), &ChartOptions::default());
            for p in &chart.planets {
                assert!((0.0..360.0).contains(&p.longitude));
                assert!((0.0..30.0).contains(&p.degree));
                assert!(p.strength <= 100);
                assert!((1..=4).contains(&p.nakshatra.pada));
            }
        }
    }

    #[test]
    fn pada_boundaries() {
        assert_eq!(NakshatraPlacement::from_longitude(0.0).pada, 1);
        assert_eq!(NakshatraPlacement::from_longitude(NAKSHATRA_SPAN - 0.01).pada, 4);
        let second = NakshatraPlacement::from_longitude(NAKSHATRA_SPAN + 0.01);
        assert_eq!(second.name, Nakshatra::Bharani);
        assert_eq!(second.lord, CelestialBody::Venus);
    }
}
