mod location;
mod place;

pub use location::{
    Coordinates, MapView, Marker, Region, DEFAULT_COORDINATES, LATITUDE_DELTA, LONGITUDE_DELTA,
};
pub use place::Place;
