use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

use super::requests::{
    required, BirthRequest, CompleteReportRequest, DateRequest, NameRequest, NearestRequest,
    PairRequest,
};
use super::AppState;
use crate::compatibility::{kundli_match, numerology_match, Partner};
use crate::error::AstrologyError;
use crate::numerology::{bhagyank, mulank, name_number};
use crate::predictions::{career_analysis, marriage_analysis};
use crate::report::{comprehensive_chart, numerology_report, ChartReading, NakshatraReading, NumberInsight, RashiReading};
use crate::tables::lookup;
use crate::vastu::{analyze, VastuInput};
use crate::{locations, loshu};

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn error(status: u16, message: impl Into<String>) -> Self {
        ApiResponse {
            status,
            body: json!({ "error": message.into() }),
        }
    }
}

#[derive(Debug)]
enum RouteError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl From<AstrologyError> for RouteError {
    fn from(err: AstrologyError) -> Self {
        RouteError::BadRequest(err.to_string())
    }
}

impl From<serde_json::Error> for RouteError {
    fn from(err: serde_json::Error) -> Self {
        RouteError::Internal(format!("serialization failed: {err}"))
    }
}

type RouteResult = Result<Value, RouteError>;

fn to_json<T: Serialize>(value: &T) -> RouteResult {
    Ok(serde_json::to_value(value)?)
}

/// An empty body reads as `{}` so missing-field errors name the field.
fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, RouteError> {
    let body = if body.trim().is_empty() { "{}" } else { body };
    serde_json::from_str(body).map_err(|e| RouteError::BadRequest(format!("invalid request body: {e}")))
}

fn decode(component: &str) -> String {
    let spaced = component.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|s| s.into_owned())
        .unwrap_or(spaced)
}

fn parse_query(query: &str) -> HashMap<String, String> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (decode(k), decode(v)),
            None => (decode(pair), String::new()),
        })
        .collect()
}

/// Route one request. Never panics; every failure is a JSON `{error}`.
pub fn dispatch(state: &AppState, method: &str, url: &str, body: &str) -> ApiResponse {
    let (path, query) = url.split_once('?').unwrap_or((url, ""));
    let segments: Vec<String> = path
        .trim_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .map(decode)
        .collect();
    let segments: Vec<&str> = segments.iter().map(String::as_str).collect();
    let method = method.to_ascii_uppercase();

    let result = match (method.as_str(), segments.as_slice()) {
        ("GET", ["health"]) => Ok(json!({
            "status": "ok",
            "version": env!("CARGO_PKG_VERSION"),
        })),
        ("POST", ["api", "numerology", endpoint]) => numerology(state, endpoint, body),
        ("POST", ["api", "jyotish", endpoint]) => jyotish(state, endpoint, body),
        ("POST", ["api", "vastu", "comprehensive-analysis"]) => {
            parse_body::<VastuInput>(body).and_then(|input| to_json(&analyze(&input)))
        }
        ("GET", ["api", "locations", "search"]) => search_locations(&parse_query(query)),
        ("GET", ["api", "locations", "popular"]) => {
            let popular = locations::popular();
            Ok(json!({ "count": popular.len(), "locations": popular }))
        }
        ("GET", ["api", "locations", "state", name]) => {
            let found = locations::by_state(name);
            Ok(json!({ "state": name, "count": found.len(), "locations": found }))
        }
        ("POST", ["api", "locations", "nearest"]) => nearest_locations(body),
        ("GET", ["api", "locations", id]) => locations::resolve(id)
            .map_err(RouteError::from)
            .and_then(to_json),
        ("GET", ["api", "lookup", category, key]) => Ok(json!({
            "category": category,
            "key": key,
            "value": lookup(category, key),
        })),
        _ => Err(RouteError::NotFound(format!("no route for {method} {path}"))),
    };

    match result {
        Ok(body) => ApiResponse { status: 200, body },
        Err(RouteError::BadRequest(message)) => ApiResponse::error(400, message),
        Err(RouteError::NotFound(message)) => ApiResponse::error(404, message),
        Err(RouteError::Internal(message)) => {
            tracing::error!(%message, "request failed");
            ApiResponse::error(500, "internal error")
        }
    }
}

fn number_reading(key: &str, number: u32) -> Value {
    let insight = NumberInsight::of(number);
    let mut body = json!({
        "description": insight.description,
        "meaning": insight.meaning,
        "details": insight,
    });
    body[key] = json!(number);
    body
}

fn numerology(state: &AppState, endpoint: &str, body: &str) -> RouteResult {
    match endpoint {
        "bhagyank" => {
            let request: DateRequest = parse_body(body)?;
            let n = bhagyank(required(&request.date_of_birth, "dateOfBirth")?)?;
            Ok(number_reading("bhagyank", n))
        }
        "mulank" => {
            let request: DateRequest = parse_body(body)?;
            let n = mulank(required(&request.date_of_birth, "dateOfBirth")?)?;
            Ok(number_reading("mulank", n))
        }
        "name" => {
            let request: NameRequest = parse_body(body)?;
            let n = name_number(required(&request.full_name, "fullName")?)?;
            Ok(number_reading("nameNumber", n))
        }
        "loshu-grid" => {
            let request: DateRequest = parse_body(body)?;
            to_json(&loshu::lo_shu_grid(required(&request.date_of_birth, "dateOfBirth")?)?)
        }
        "complete-report" => {
            let request: CompleteReportRequest = parse_body(body)?;
            to_json(&numerology_report(
                required(&request.full_name, "fullName")?,
                required(&request.date_of_birth, "dateOfBirth")?,
                state.today(),
            )?)
        }
        "compatibility" => {
            let request: PairRequest = parse_body(body)?;
            let (a, b) = request.people()?;
            to_json(&numerology_match(
                required(&a.date_of_birth, "person1.dateOfBirth")?,
                a.full_name.as_deref(),
                required(&b.date_of_birth, "person2.dateOfBirth")?,
                b.full_name.as_deref(),
            )?)
        }
        other => Err(RouteError::NotFound(format!("unknown numerology endpoint '{other}'"))),
    }
}

fn chart_reading(state: &AppState, request: &BirthRequest) -> Result<ChartReading, RouteError> {
    let profile = request.profile(state)?;
    let as_of = request.as_of(state)?;
    Ok(ChartReading::compute(profile, &state.options, as_of))
}

fn jyotish(state: &AppState, endpoint: &str, body: &str) -> RouteResult {
    if endpoint == "compatibility" {
        let request: PairRequest = parse_body(body)?;
        let (a, b) = request.people()?;
        let (first, second) = (chart_reading(state, a)?, chart_reading(state, b)?);
        let report = kundli_match(
            &Partner {
                profile: &first.profile,
                chart: &first.chart,
                dosha: &first.dosha,
            },
            &Partner {
                profile: &second.profile,
                chart: &second.chart,
                dosha: &second.dosha,
            },
        )?;
        return to_json(&report);
    }

    let known = [
        "comprehensive-chart",
        "nakshatra",
        "rashi",
        "dasha-periods",
        "yogas",
        "remedies",
        "mangal-dosha",
        "career",
        "marriage",
    ];
    if !known.contains(&endpoint) {
        return Err(RouteError::NotFound(format!("unknown jyotish endpoint '{endpoint}'")));
    }

    let request: BirthRequest = parse_body(body)?;
    if endpoint == "comprehensive-chart" {
        required(&request.location_id, "locationId")?;
    }
    let reading = chart_reading(state, &request)?;
    let chart = &reading.chart;
    match endpoint {
        "comprehensive-chart" => to_json(&comprehensive_chart(&reading)),
        "nakshatra" => to_json(&NakshatraReading::of(chart)),
        "rashi" => Ok(json!({
            "rashi": RashiReading::of(chart.moon_sign()),
            "lagna": RashiReading::of(chart.ascendant.sign),
        })),
        "dasha-periods" => to_json(&reading.dasha),
        "yogas" => Ok(json!({ "count": reading.yogas.len(), "yogas": reading.yogas })),
        "remedies" => to_json(&reading.remedies()),
        "mangal-dosha" => to_json(&reading.dosha),
        "career" => to_json(&career_analysis(&reading.context())),
        _ => to_json(&marriage_analysis(&reading.context())),
    }
}

fn search_locations(query: &HashMap<String, String>) -> RouteResult {
    let term = query
        .get("query")
        .or_else(|| query.get("q"))
        .map(|q| q.trim())
        .filter(|q| !q.is_empty())
        .ok_or_else(|| RouteError::BadRequest("query parameter is required".to_string()))?;
    let results = locations::search(term);
    Ok(json!({ "query": term, "count": results.len(), "results": results }))
}

fn nearest_locations(body: &str) -> RouteResult {
    let request: NearestRequest = parse_body(body)?;
    let (Some(latitude), Some(longitude)) = (request.latitude, request.longitude) else {
        return Err(RouteError::BadRequest(
            "latitude and longitude are required".to_string(),
        ));
    };
    let nearby = locations::nearest(latitude, longitude, request.limit.unwrap_or(5))?;
    Ok(json!({ "count": nearby.len(), "locations": nearby }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn post(url: &str, body: Value) -> ApiResponse {
        dispatch(&AppState::default(), "POST", url, &body.to_string())
    }

    fn get(url: &str) -> ApiResponse {
        dispatch(&AppState::default(), "GET", url, "")
    }

    #[test]
    fn query_strings_are_decoded() {
        let query = parse_query("query=new+delhi&x=%20a&flag");
        assert_eq!(query["query"], "new delhi");
        assert_eq!(query["x"], " a");
        assert_eq!(query["flag"], "");
    }

    #[test]
    fn bhagyank_endpoint() {
        let response = post("/api/numerology/bhagyank", json!({ "dateOfBirth": "1990-05-15" }));
        assert_eq!(response.status, 200);
        assert_eq!(response.body["bhagyank"], 3);
        assert!(response.body["description"].is_string());
    }

    #[test]
    fn missing_field_is_bad_request() {
        let response = post("/api/numerology/mulank", json!({}));
        assert_eq!(response.status, 400);
        assert!(response.body["error"].as_str().unwrap().contains("dateOfBirth"));

        let response = dispatch(&AppState::default(), "POST", "/api/numerology/name", "not json");
        assert_eq!(response.status, 400);
    }

    #[test]
    fn unknown_routes_are_not_found() {
        assert_eq!(get("/api/nothing").status, 404);
        assert_eq!(post("/api/jyotish/horoscope", json!({})).status, 404);
        assert_eq!(get("/api/numerology/bhagyank").status, 404);
    }

    #[test]
    fn unknown_location_is_bad_request() {
        let response = post(
            "/api/jyotish/rashi",
            json!({ "dateOfBirth": "1990-05-15", "locationId": "atlantis" }),
        );
        assert_eq!(response.status, 400);
    }

    #[test]
    fn comprehensive_chart_needs_location() {
        let response = post("/api/jyotish/comprehensive-chart", json!({ "dateOfBirth": "1990-05-15" }));
        assert_eq!(response.status, 400);
        assert!(response.body["error"].as_str().unwrap().contains("locationId"));

        let response = post(
            "/api/jyotish/comprehensive-chart",
            json!({ "dateOfBirth": "1990-05-15", "locationId": "pune" }),
        );
        assert_eq!(response.status, 200);
    }

    #[test]
    fn lookup_falls_back() {
        let response = get("/api/lookup/planet/Pluto");
        assert_eq!(response.status, 200);
        assert_eq!(response.body["value"], crate::tables::FALLBACK);
    }

    #[test]
    fn state_names_are_url_decoded() {
        let response = get("/api/locations/state/Tamil%20Nadu");
        assert_eq!(response.status, 200);
        assert_eq!(response.body["state"], "Tamil Nadu");
        assert!(response.body["count"].as_u64().unwrap() >= 1);
    }

    #[test]
    fn search_requires_query() {
        assert_eq!(get("/api/locations/search").status, 400);
        let response = get("/api/locations/search?query=mum");
        assert_eq!(response.body["results"][0]["id"], "mumbai");
    }
}
