use axum::extract::{Extension, Json, Path};
use serde::{Deserialize, Serialize};

use crate::{api::interface::DynAPI, entities::Place, error::Error};

#[derive(Serialize, Deserialize)]
pub struct CreatePlaceParams {
    address: String,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreatePlaceParams>,
) -> Result<Json<Vec<Place>>, Error> {
    api.create_place(params.address).await?;

    // refresh-on-write: every mutation answers with the updated set
    let places = api.list_places().await?;

    Ok(places.into())
}

pub async fn list(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<Place>>, Error> {
    let places = api.list_places().await?;

    Ok(places.into())
}

pub async fn remove(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Place>>, Error> {
    api.delete_place(id).await?;

    let places = api.list_places().await?;

    Ok(places.into())
}
