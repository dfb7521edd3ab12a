//! Blocking client for the Google Maps web services.
//!
//! The tool relays three endpoints: Places Autocomplete for suggestions,
//! Nearby Search for coordinate-to-place resolution, and the Distance Matrix
//! for driving distances between two resolved places. Responses are reshaped
//! to the first row/element, which is all the form ever consumes.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

use crate::error::{Result, SplitError};
use crate::locale::Locale;
use crate::logging;

const AUTOCOMPLETE_URL: &str = "https://maps.googleapis.com/maps/api/place/autocomplete/json";
const NEARBY_URL: &str = "https://maps.googleapis.com/maps/api/place/nearbysearch/json";
const DISTANCE_MATRIX_URL: &str = "https://maps.googleapis.com/maps/api/distancematrix/json";

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "GOOGLE_MAPS_API_KEY";

/// Autocomplete bias radius in meters.
const AUTOCOMPLETE_RADIUS: &str = "1000";
/// Nearby search radius in meters; tight, the caller wants "the place here".
const NEARBY_RADIUS: &str = "25";

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Coordinate pair, parsed from `lat,lng` flags and sent as `location` bias.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    fn to_param(self) -> String {
        format!("{},{}", self.lat, self.lng)
    }
}

impl FromStr for LatLng {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| format!("expected LAT,LNG, got '{s}'"))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<f64>()
                .map_err(|_| format!("invalid coordinate '{part}'"))
        };
        Ok(LatLng {
            lat: parse(lat)?,
            lng: parse(lng)?,
        })
    }
}

/// One autocomplete suggestion.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Prediction {
    pub description: String,
    pub place_id: String,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct AutocompleteResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
    status: String,
}

/// First hit of a nearby search.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NearbyPlace {
    pub name: String,
    pub place_id: String,
    #[serde(default)]
    pub vicinity: String,
}

#[derive(Debug, Deserialize)]
struct NearbyResponse {
    #[serde(default)]
    results: Vec<NearbyPlace>,
    status: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct TextValue {
    text: String,
    value: i64,
}

#[derive(Debug, Deserialize)]
struct DistanceResponse {
    #[serde(default)]
    rows: Vec<DistanceRow>,
    status: String,
}

#[derive(Debug, Deserialize)]
struct DistanceRow {
    #[serde(default)]
    elements: Vec<DistanceElement>,
}

#[derive(Debug, Deserialize)]
struct DistanceElement {
    status: String,
    distance: Option<TextValue>,
    duration: Option<TextValue>,
}

/// Driving distance answer for one origin/destination pair.
#[derive(Debug, Clone, PartialEq)]
pub enum DistanceOutcome {
    Route(RouteLeg),
    /// The service found no driving route between the places.
    NoRoute,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteLeg {
    pub distance_meters: i64,
    pub distance_text: String,
    pub duration_seconds: i64,
    pub duration_text: String,
}

impl RouteLeg {
    pub fn distance_km(&self) -> f64 {
        self.distance_meters as f64 / 1000.0
    }
}

/// Client bound to one API key and one response language.
pub struct PlacesClient {
    http: reqwest::blocking::Client,
    api_key: String,
    locale: Locale,
}

impl PlacesClient {
    pub fn new(api_key: impl Into<String>, locale: Locale) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(|e| SplitError::http("building HTTP client", e))?;

        Ok(Self {
            http,
            api_key: api_key.into(),
            locale,
        })
    }

    /// Read the API key from the environment. Fails before any network call
    /// so a missing key is reported as configuration, not as a request error.
    pub fn from_env(locale: Locale) -> Result<Self> {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| SplitError::missing_api_key(API_KEY_VAR))?;
        Self::new(api_key, locale)
    }

    /// Place predictions for a typed input, optionally biased around a point.
    pub fn autocomplete(&self, input: &str, near: Option<LatLng>) -> Result<Vec<Prediction>> {
        let mut params = vec![
            ("input", input.to_string()),
            ("key", self.api_key.clone()),
            ("language", self.locale.tag().to_string()),
            ("radius", AUTOCOMPLETE_RADIUS.to_string()),
        ];
        if let Some(point) = near {
            params.push(("location", point.to_param()));
        }

        let response: AutocompleteResponse =
            self.get_json(AUTOCOMPLETE_URL, &params, "place autocomplete")?;

        match response.status.as_str() {
            "OK" | "ZERO_RESULTS" => Ok(response.predictions),
            status => Err(SplitError::service("place autocomplete", status)),
        }
    }

    /// Closest place to a coordinate, or `None` when nothing is that close.
    pub fn nearby(&self, point: LatLng) -> Result<Option<NearbyPlace>> {
        let params = vec![
            ("key", self.api_key.clone()),
            ("language", self.locale.tag().to_string()),
            ("location", point.to_param()),
            ("radius", NEARBY_RADIUS.to_string()),
        ];

        let response: NearbyResponse = self.get_json(NEARBY_URL, &params, "nearby search")?;

        match response.status.as_str() {
            "OK" => Ok(response.results.into_iter().next()),
            "ZERO_RESULTS" => Ok(None),
            status => Err(SplitError::service("nearby search", status)),
        }
    }

    /// Driving distance between two resolved places.
    pub fn distance(&self, from_place_id: &str, to_place_id: &str) -> Result<DistanceOutcome> {
        let params = vec![
            ("key", self.api_key.clone()),
            ("language", self.locale.tag().to_string()),
            ("mode", "driving".to_string()),
            ("origins", format!("place_id:{from_place_id}")),
            ("destinations", format!("place_id:{to_place_id}")),
        ];

        let response: DistanceResponse =
            self.get_json(DISTANCE_MATRIX_URL, &params, "distance matrix")?;

        if response.status != "OK" {
            return Err(SplitError::service("distance matrix", response.status));
        }

        let element = response
            .rows
            .into_iter()
            .next()
            .and_then(|row| row.elements.into_iter().next())
            .ok_or_else(|| SplitError::service("distance matrix", "empty response"))?;

        reshape_element(element)
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        base: &str,
        params: &[(&str, String)],
        operation: &str,
    ) -> Result<T> {
        let url = Url::parse_with_params(base, params)
            .map_err(|e| SplitError::Other(anyhow::anyhow!("invalid request URL: {e}")))?;

        logging::log_http_request("GET", base, None);
        let response = self
            .http
            .get(url)
            .send()
            .map_err(|e| SplitError::http(operation, e))?;
        logging::log_http_request("GET", base, Some(response.status().as_u16()));

        response.json().map_err(|e| SplitError::http(operation, e))
    }
}

fn reshape_element(element: DistanceElement) -> Result<DistanceOutcome> {
    match element.status.as_str() {
        "OK" => {
            let (distance, duration) = match (element.distance, element.duration) {
                (Some(distance), Some(duration)) => (distance, duration),
                _ => return Err(SplitError::service("distance matrix", "element missing fields")),
            };
            Ok(DistanceOutcome::Route(RouteLeg {
                distance_meters: distance.value,
                distance_text: distance.text,
                duration_seconds: duration.value,
                duration_text: duration.text,
            }))
        }
        "ZERO_RESULTS" => Ok(DistanceOutcome::NoRoute),
        status => Err(SplitError::service("distance matrix", status)),
    }
}
