use serde::{Deserialize, Serialize};

// The geocoder does not provide viewport spans, so they are fixed.
pub const LATITUDE_DELTA: f64 = 0.0322;
pub const LONGITUDE_DELTA: f64 = 0.0221;

/// Shown until a lookup has resolved.
pub const DEFAULT_COORDINATES: Coordinates = Coordinates {
    latitude: 60.200692,
    longitude: 24.934302,
};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for Coordinates {
    fn default() -> Self {
        DEFAULT_COORDINATES
    }
}

/// Map viewport: a center plus the fixed spans.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Region {
    pub fn centered_on(coordinates: Coordinates) -> Self {
        Self {
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
            latitude_delta: LATITUDE_DELTA,
            longitude_delta: LONGITUDE_DELTA,
        }
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::centered_on(DEFAULT_COORDINATES)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub coordinates: Coordinates,
    pub title: String,
}

/// Everything the map screen needs, derived from one resolved coordinate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub region: Region,
    pub marker: Marker,
}

impl MapView {
    pub fn of(coordinates: Coordinates, title: String) -> Self {
        Self {
            region: Region::centered_on(coordinates),
            marker: Marker { coordinates, title },
        }
    }
}
