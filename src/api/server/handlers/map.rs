use axum::extract::{Extension, Json, Query};
use serde::Deserialize;

use crate::{api::interface::DynAPI, entities::MapView, error::Error};

#[derive(Deserialize)]
pub struct ResolveParams {
    address: String,
}

pub async fn resolve(
    Extension(api): Extension<DynAPI>,
    Query(params): Query<ResolveParams>,
) -> Result<Json<MapView>, Error> {
    let view = api.resolve_address(params.address).await?;

    Ok(view.into())
}
