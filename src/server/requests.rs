use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{AstrologyError, Result};
use crate::numerology::parse_birth_date;
use crate::profile::BirthProfile;

use super::AppState;

/// Reject an absent or blank field with a message naming it.
pub(crate) fn required<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AstrologyError::invalid(format!("{field} is required")))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DateRequest {
    pub date_of_birth: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NameRequest {
    pub full_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompleteReportRequest {
    pub full_name: Option<String>,
    pub date_of_birth: Option<String>,
}

/// Birth data for any chart endpoint. Time and location are optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BirthRequest {
    pub date_of_birth: Option<String>,
    pub time_of_birth: Option<String>,
    pub location_id: Option<String>,
    pub full_name: Option<String>,
    /// Reference date for the running dasha; today when absent.
    pub as_of: Option<String>,
}

impl BirthRequest {
    pub fn profile(&self, state: &AppState) -> Result<BirthProfile> {
        BirthProfile::parse(
            required(&self.date_of_birth, "dateOfBirth")?,
            self.time_of_birth.as_deref(),
            self.location_id.as_deref(),
            self.full_name.as_deref(),
            &state.chart.default_time_of_birth,
            &state.chart.default_location_id,
        )
    }

    pub fn as_of(&self, state: &AppState) -> Result<NaiveDate> {
        match self.as_of.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
            Some(date) => parse_birth_date(date),
            None => Ok(state.today()),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PairRequest {
    pub person1: Option<BirthRequest>,
    pub person2: Option<BirthRequest>,
}

impl PairRequest {
    pub fn people(&self) -> Result<(&BirthRequest, &BirthRequest)> {
        match (&self.person1, &self.person2) {
            (Some(a), Some(b)) => Ok((a, b)),
            _ => Err(AstrologyError::invalid("person1 and person2 are required")),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NearestRequest {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub limit: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_count_as_missing() {
        let err = required(&Some("   ".to_string()), "fullName").unwrap_err();
        assert_eq!(err, AstrologyError::invalid("fullName is required"));
        assert_eq!(required(&Some(" Ram ".to_string()), "fullName").unwrap(), "Ram");
        assert!(required(&None, "dateOfBirth").is_err());
    }

    #[test]
    fn birth_request_reads_camel_case() {
        let request: BirthRequest = serde_json::from_str(
            r#"{"dateOfBirth":"1990-05-15","timeOfBirth":"06:30","locationId":"mumbai","asOf":"2020-01-01"}"#,
        )
        .unwrap();
        let state = AppState::default();
        let profile = request.profile(&state).unwrap();
        assert_eq!(profile.location.id, "mumbai");
        assert_eq!(request.as_of(&state).unwrap(), NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    }
}
