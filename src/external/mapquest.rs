use serde::{Deserialize, Serialize};
use std::env;

use crate::{
    entities::Coordinates,
    error::{lookup_error, no_result_error, Error},
};

const DEFAULT_API_BASE: &str = "https://www.mapquestapi.com";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Location {
    #[serde(rename = "latLng")]
    lat_lng: LatLng,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct GeocodeResult {
    locations: Vec<Location>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Response {
    results: Vec<GeocodeResult>,
}

#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
}

impl Client {
    pub fn new(api_base: String, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base,
            api_key,
        }
    }

    pub fn from_env() -> Result<Self, Error> {
        let api_base = env::var("MAPQUEST_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.into());
        let api_key = env::var("MAPQUEST_API_KEY")?;

        Ok(Self::new(api_base, api_key))
    }

    /// One GET per call, no retries. Only the first location of the first
    /// result is consumed.
    #[tracing::instrument(skip(self))]
    pub async fn find_coordinates(&self, location: &str) -> Result<Coordinates, Error> {
        let url = format!("{}/geocoding/v1/address", self.api_base);

        let res = self
            .http
            .get(url)
            .query(&[("maxResults", "1")])
            .query(&[("key", self.api_key.as_str())])
            .query(&[("location", location)])
            .send()
            .await?;

        let status = res.status();

        if !status.is_success() {
            return Err(lookup_error(format!(
                "geocoding service returned status {}",
                status
            )));
        }

        let data: Response = res.json().await?;

        let lat_lng = data
            .results
            .into_iter()
            .next()
            .and_then(|result| result.locations.into_iter().next())
            .map(|location| location.lat_lng)
            .ok_or_else(no_result_error)?;

        Ok(Coordinates {
            latitude: lat_lng.lat,
            longitude: lat_lng.lng,
        })
    }
}
