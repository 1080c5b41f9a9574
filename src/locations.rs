// ---------------------------
// ## Locations
// ---------------------------

use serde::Serialize;

use crate::error::{AstrologyError, Result};

pub const MAX_SEARCH_RESULTS: usize = 20;
const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: &'static str,
    pub name: &'static str,
    pub state: &'static str,
    pub country: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub utc_offset_hours: f64,
    pub popular: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyLocation {
    #[serde(flatten)]
    pub location: Location,
    pub distance_km: f64,
}

macro_rules! city {
    ($id:literal, $name:literal, $state:literal, $lat:expr, $lon:expr, popular) => {
        city!($id, $name, $state, "India", $lat, $lon, 5.5, true)
    };
    ($id:literal, $name:literal, $state:literal, $lat:expr, $lon:expr) => {
        city!($id, $name, $state, "India", $lat, $lon, 5.5, false)
    };
    ($id:literal, $name:literal, $state:literal, $country:literal, $lat:expr, $lon:expr, $utc:expr, $popular:expr) => {
        Location {
            id: $id,
            name: $name,
            state: $state,
            country: $country,
            latitude: $lat,
            longitude: $lon,
            utc_offset_hours: $utc,
            popular: $popular,
        }
    };
}

static LOCATIONS: &[Location] = &[
    city!("delhi", "New Delhi", "Delhi", 28.6139, 77.2090, popular),
    city!("mumbai", "Mumbai", "Maharashtra", 19.0760, 72.8777, popular),
    city!("bangalore", "Bengaluru", "Karnataka", 12.9716, 77.5946, popular),
    city!("chennai", "Chennai", "Tamil Nadu", 13.0827, 80.2707, popular),
    city!("kolkata", "Kolkata", "West Bengal", 22.5726, 88.3639, popular),
    city!("hyderabad", "Hyderabad", "Telangana", 17.3850, 78.4867, popular),
    city!("pune", "Pune", "Maharashtra", 18.5204, 73.8567, popular),
    city!("ahmedabad", "Ahmedabad", "Gujarat", 23.0225, 72.5714, popular),
    city!("jaipur", "Jaipur", "Rajasthan", 26.9124, 75.7873, popular),
    city!("lucknow", "Lucknow", "Uttar Pradesh", 26.8467, 80.9462, popular),
    city!("varanasi", "Varanasi", "Uttar Pradesh", 25.3176, 82.9739, popular),
    city!("kochi", "Kochi", "Kerala", 9.9312, 76.2673, popular),
    city!("nagpur", "Nagpur", "Maharashtra", 21.1458, 79.0882),
    city!("nashik", "Nashik", "Maharashtra", 19.9975, 73.7898),
    city!("surat", "Surat", "Gujarat", 21.1702, 72.8311),
    city!("vadodara", "Vadodara", "Gujarat", 22.3072, 73.1812),
    city!("rajkot", "Rajkot", "Gujarat", 22.3039, 70.8022),
    city!("udaipur", "Udaipur", "Rajasthan", 24.5854, 73.7125),
    city!("jodhpur", "Jodhpur", "Rajasthan", 26.2389, 73.0243),
    city!("kanpur", "Kanpur", "Uttar Pradesh", 26.4499, 80.3319),
    city!("agra", "Agra", "Uttar Pradesh", 27.1767, 78.0081),
    city!("prayagraj", "Prayagraj", "Uttar Pradesh", 25.4358, 81.8463),
    city!("noida", "Noida", "Uttar Pradesh", 28.5355, 77.3910),
    city!("gurugram", "Gurugram", "Haryana", 28.4595, 77.0266),
    city!("chandigarh", "Chandigarh", "Chandigarh", 30.7333, 76.7794),
    city!("amritsar", "Amritsar", "Punjab", 31.6340, 74.8723),
    city!("ludhiana", "Ludhiana", "Punjab", 30.9010, 75.8573),
    city!("dehradun", "Dehradun", "Uttarakhand", 30.3165, 78.0322),
    city!("haridwar", "Haridwar", "Uttarakhand", 29.9457, 78.1642),
    city!("shimla", "Shimla", "Himachal Pradesh", 31.1048, 77.1734),
    city!("srinagar", "Srinagar", "Jammu and Kashmir", 34.0837, 74.7973),
    city!("bhopal", "Bhopal", "Madhya Pradesh", 23.2599, 77.4126),
    city!("indore", "Indore", "Madhya Pradesh", 22.7196, 75.8577),
    city!("ujjain", "Ujjain", "Madhya Pradesh", 23.1765, 75.7885),
    city!("raipur", "Raipur", "Chhattisgarh", 21.2514, 81.6296),
    city!("patna", "Patna", "Bihar", 25.5941, 85.1376),
    city!("ranchi", "Ranchi", "Jharkhand", 23.3441, 85.3096),
    city!("bhubaneswar", "Bhubaneswar", "Odisha", 20.2961, 85.8245),
    city!("puri", "Puri", "Odisha", 19.8135, 85.8312),
    city!("guwahati", "Guwahati", "Assam", 26.1445, 91.7362),
    city!("visakhapatnam", "Visakhapatnam", "Andhra Pradesh", 17.6868, 83.2185),
    city!("vijayawada", "Vijayawada", "Andhra Pradesh", 16.5062, 80.6480),
    city!("tirupati", "Tirupati", "Andhra Pradesh", 13.6288, 79.4192),
    city!("mysuru", "Mysuru", "Karnataka", 12.2958, 76.6394),
    city!("mangaluru", "Mangaluru", "Karnataka", 12.9141, 74.8560),
    city!("coimbatore", "Coimbatore", "Tamil Nadu", 11.0168, 76.9558),
    city!("madurai", "Madurai", "Tamil Nadu", 9.9252, 78.1198),
    city!("thiruvananthapuram", "Thiruvananthapuram", "Kerala", 8.5241, 76.9366),
    city!("kozhikode", "Kozhikode", "Kerala", 11.2588, 75.7804),
    city!("kannur", "Kannur", "Kerala", 11.8745, 75.3704),
    city!("thrissur", "Thrissur", "Kerala", 10.5276, 76.2144),
    city!("kollam", "Kollam", "Kerala", 8.8932, 76.6141),
    city!("alappuzha", "Alappuzha", "Kerala", 9.4981, 76.3388),
    city!("malappuram", "Malappuram", "Kerala", 11.0510, 76.0711),
    city!("panaji", "Panaji", "Goa", 15.4909, 73.8278),
    city!("dubai", "Dubai", "Dubai", "United Arab Emirates", 25.2048, 55.2708, 4.0, true),
    city!("abu-dhabi", "Abu Dhabi", "Abu Dhabi", "United Arab Emirates", 24.4539, 54.3773, 4.0, false),
    city!("sharjah", "Sharjah", "Sharjah", "United Arab Emirates", 25.3463, 55.4209, 4.0, false),
    city!("kathmandu", "Kathmandu", "Bagmati", "Nepal", 27.7172, 85.3240, 5.75, false),
    city!("singapore", "Singapore", "Singapore", "Singapore", 1.3521, 103.8198, 8.0, false),
    city!("london", "London", "England", "United Kingdom", 51.5074, -0.1278, 0.0, true),
    city!("new-york", "New York", "New York", "United States", 40.7128, -74.0060, -5.0, true),
];

pub fn all() -> &'static [Location] {
    LOCATIONS
}

pub fn get(id: &str) -> Option<&'static Location> {
    let id = id.trim();
    LOCATIONS.iter().find(|location| location.id.eq_ignore_ascii_case(id))
}

/// Like [`get`], but an unknown id is an error.
pub fn resolve(id: &str) -> Result<&'static Location> {
    get(id).ok_or_else(|| AstrologyError::UnknownLocation(id.to_string()))
}

/// Case-insensitive substring match on city or state name.
pub fn search(query: &str) -> Vec<&'static Location> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    LOCATIONS
        .iter()
        .filter(|location| {
            location.name.to_lowercase().contains(&needle)
                || location.state.to_lowercase().contains(&needle)
        })
        .take(MAX_SEARCH_RESULTS)
        .collect()
}

pub fn popular() -> Vec<&'static Location> {
    LOCATIONS.iter().filter(|location| location.popular).collect()
}

pub fn by_state(state: &str) -> Vec<&'static Location> {
    let state = state.trim();
    LOCATIONS
        .iter()
        .filter(|location| location.state.eq_ignore_ascii_case(state))
        .collect()
}

/// Great-circle distance in kilometres.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (phi1, phi2) = (lat1.to_radians(), lat2.to_radians());
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();
    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

pub fn nearest(latitude: f64, longitude: f64, limit: usize) -> Result<Vec<NearbyLocation>> {
    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return Err(AstrologyError::invalid(format!(
            "coordinates out of range: {latitude}, {longitude}"
        )));
    }
    let mut nearby: Vec<NearbyLocation> = LOCATIONS
        .iter()
        .map(|location| NearbyLocation {
            distance_km: haversine_km(latitude, longitude, location.latitude, location.longitude),
            location: location.clone(),
        })
        .collect();
    nearby.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    nearby.truncate(limit.clamp(1, MAX_SEARCH_RESULTS));
    Ok(nearby)
}
