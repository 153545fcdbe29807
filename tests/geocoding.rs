use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use placefinder::api::MapAPI;
use placefinder::db::SqlitePool;
use placefinder::engine::Engine;
use placefinder::entities::{LATITUDE_DELTA, LONGITUDE_DELTA};
use placefinder::error;
use placefinder::external::mapquest;

fn mock_geocoder(body: Value) -> SocketAddr {
    let app = Router::new().route(
        "/geocoding/v1/address",
        get(move || async move { Json(body) }),
    );

    serve_mock(app)
}

fn failing_geocoder() -> SocketAddr {
    let app = Router::new().route(
        "/geocoding/v1/address",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );

    serve_mock(app)
}

fn serve_mock(app: Router) -> SocketAddr {
    let server = axum::Server::bind(&"127.0.0.1:0".parse().unwrap()).serve(app.into_make_service());
    let addr = server.local_addr();

    tokio::spawn(server);

    addr
}

fn client_for(addr: SocketAddr) -> mapquest::Client {
    mapquest::Client::new(format!("http://{}", addr), "test-key".into())
}

#[tokio::test]
async fn resolves_the_first_returned_location() {
    let addr = mock_geocoder(json!({
        "results": [ { "locations": [ { "latLng": { "lat": 10.0, "lng": 20.0 } } ] } ]
    }));

    let coordinates = client_for(addr).find_coordinates("x").await.unwrap();

    assert_eq!(coordinates.latitude, 10.0);
    assert_eq!(coordinates.longitude, 20.0);
}

#[tokio::test]
async fn zero_results_surface_as_no_result() {
    let addr = mock_geocoder(json!({ "results": [] }));

    let err = client_for(addr)
        .find_coordinates("nowhere at all")
        .await
        .unwrap_err();

    assert_eq!(err.code, error::no_result_error().code);
}

#[tokio::test]
async fn malformed_response_surfaces_as_lookup_error() {
    let addr = mock_geocoder(json!({ "unexpected": true }));

    let err = client_for(addr).find_coordinates("x").await.unwrap_err();

    assert_eq!(err.code, error::lookup_error("").code);
}

#[tokio::test]
async fn upstream_failure_surfaces_as_lookup_error() {
    let addr = failing_geocoder();

    let err = client_for(addr).find_coordinates("x").await.unwrap_err();

    assert_eq!(err.code, error::lookup_error("").code);
}

#[tokio::test]
async fn resolve_address_builds_the_map_view() {
    let addr = mock_geocoder(json!({
        "results": [ { "locations": [ { "latLng": { "lat": 60.17, "lng": 24.94 } } ] } ]
    }));

    let SqlitePool(pool) = SqlitePool::new("sqlite::memory:", 1).await.unwrap();
    let engine = Engine::new(pool, client_for(addr)).await.unwrap();

    let view = engine.resolve_address("Main St 1".into()).await.unwrap();

    assert_eq!(view.region.latitude, 60.17);
    assert_eq!(view.region.longitude, 24.94);
    assert_eq!(view.region.latitude_delta, LATITUDE_DELTA);
    assert_eq!(view.region.longitude_delta, LONGITUDE_DELTA);
    assert_eq!(view.marker.coordinates.latitude, 60.17);
    assert_eq!(view.marker.title, "Main St 1");
}
