use chrono::{NaiveDate, NaiveTime, Timelike};
use xxhash_rust::xxh64::xxh64;

use crate::error::{AstrologyError, Result};
use crate::locations::{self, Location};
use crate::numerology::parse_birth_date;

const TIME_FORMATS: [&str; 3] = ["%H:%M", "%H:%M:%S", "%I:%M %p"];

/// Birth data as supplied by a caller. Never mutated once built.
#[derive(Debug, Clone, PartialEq)]
pub struct BirthProfile {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: Location,
    pub full_name: Option<String>,
}

pub fn parse_birth_time(input: &str) -> Result<NaiveTime> {
    let trimmed = input.trim();
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| {
            AstrologyError::invalid(format!("invalid time '{trimmed}', expected HH:MM"))
        })
}

impl BirthProfile {
    /// Build a profile from request strings.
    ///
    /// A missing time or location falls back to the supplied defaults.
    pub fn parse(
        date_of_birth: &str,
        time_of_birth: Option<&str>,
        location_id: Option<&str>,
        full_name: Option<&str>,
        default_time: &str,
        default_location_id: &str,
    ) -> Result<Self> {
        let date = parse_birth_date(date_of_birth)?;
        let time = match time_of_birth.map(str::trim).filter(|t| !t.is_empty()) {
            Some(time) => parse_birth_time(time)?,
            None => parse_birth_time(default_time)?,
        };
        let location_id = location_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .unwrap_or(default_location_id);
        let location = locations::resolve(location_id)?.clone();
        let full_name = full_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string);

        Ok(BirthProfile {
            date,
            time,
            location,
            full_name,
        })
    }

    /// Decimal hours in UT; may fall outside `[0, 24)` near midnight.
    pub fn hour_ut(&self) -> f64 {
        let local = self.time.hour() as f64
            + self.time.minute() as f64 / 60.0
            + self.time.second() as f64 / 3600.0;
        local - self.location.utc_offset_hours
    }

    /// Stable 64-bit seed for every derived choice about this profile.
    pub fn seed(&self) -> u64 {
        let canonical = format!(
            "{}|{}|{:.4}|{:.4}|{}",
            self.date.format("%Y-%m-%d"),
            self.time.format("%H:%M:%S"),
            self.location.latitude,
            self.location.longitude,
            self.full_name.as_deref().unwrap_or("").to_lowercase()
        );
        xxh64(canonical.as_bytes(), 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(time: Option<&str>, name: Option<&str>) -> BirthProfile {
        BirthProfile::parse("1990-05-15", time, Some("delhi"), name, "12:00", "delhi").unwrap()
    }

    #[test]
    fn defaults_fill_missing_fields() {
        let p = BirthProfile::parse("15/05/1990", None, None, None, "06:30", "mumbai").unwrap();
        assert_eq!(p.time, NaiveTime::from_hms_opt(6, 30, 0).unwrap());
        assert_eq!(p.location.id, "mumbai");
        assert_eq!(p.full_name, None);
    }

    #[test]
    fn accepts_common_time_formats() {
        assert_eq!(parse_birth_time("14:05").unwrap().hour(), 14);
        assert_eq!(parse_birth_time("14:05:30").unwrap().second(), 30);
        assert_eq!(parse_birth_time("02:05 PM").unwrap().hour(), 14);
        assert!(parse_birth_time("25:00").is_err());
    }

    #[test]
    fn unknown_location_is_an_error() {
        let err = BirthProfile::parse("1990-05-15", None, Some("atlantis"), None, "12:00", "delhi")
            .unwrap_err();
        assert_eq!(err, AstrologyError::UnknownLocation("atlantis".to_string()));
    }

    #[test]
    fn hour_ut_subtracts_offset() {
        let p = profile(Some("05:30"), None);
        assert!(p.hour_ut().abs() < 1e-9);
    }

    #[test]
    fn seed_is_stable_and_sensitive() {
        assert_eq!(profile(None, Some("Ravi")).seed(), profile(None, Some("ravi")).seed());
        assert_ne!(profile(None, Some("Ravi")).seed(), profile(None, Some("Rani")).seed());
        assert_ne!(profile(Some("12:01"), None).seed(), profile(None, None).seed());
    }
}
