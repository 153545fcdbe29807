use super::Engine;

use async_trait::async_trait;

use crate::{api::MapAPI, entities::MapView, error::Error};

#[async_trait]
impl MapAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn resolve_address(&self, address: String) -> Result<MapView, Error> {
        let coordinates = self.geocoder.find_coordinates(&address).await?;

        Ok(MapView::of(coordinates, address))
    }
}
