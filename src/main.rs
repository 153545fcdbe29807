use placefinder::api::serve;
use placefinder::db::SqlitePool;
use placefinder::engine::Engine;
use placefinder::external::mapquest;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let SqlitePool(pool) = SqlitePool::new("sqlite://placefinder.db?mode=rwc", 5)
        .await
        .unwrap();

    let geocoder = mapquest::Client::from_env().unwrap();

    let engine = Engine::new(pool, geocoder).await.unwrap();

    serve(engine).await;
}
