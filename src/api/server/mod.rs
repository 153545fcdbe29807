mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{delete, get, post},
    Router,
};

use crate::api::server::handlers::{map, place};
use crate::api::{interface::DynAPI, API};

pub fn router(api: DynAPI) -> Router {
    Router::new()
        .route("/places", post(place::create).get(place::list))
        .route("/places/:id", delete(place::remove))
        .route("/map", get(map::resolve))
        .layer(Extension(api))
}

pub async fn serve<T: API + Sync + Send + 'static>(api: T) {
    tracing_subscriber::fmt::init();

    let api = Arc::new(api) as DynAPI;

    let app = router(api);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
