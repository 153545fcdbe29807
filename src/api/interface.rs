use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::{MapView, Place};
use crate::error::Error;

#[async_trait]
pub trait PlaceAPI {
    async fn create_place(&self, address: String) -> Result<Place, Error>;
    async fn list_places(&self) -> Result<Vec<Place>, Error>;
    async fn delete_place(&self, id: i64) -> Result<(), Error>;
}

#[async_trait]
pub trait MapAPI {
    async fn resolve_address(&self, address: String) -> Result<MapView, Error>;
}

pub trait API: PlaceAPI + MapAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
