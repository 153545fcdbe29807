mod map_api;
mod place_api;

use sqlx::{Executor, Pool, Sqlite};

use crate::{api::API, error::Error, external::mapquest};

type Database = Sqlite;

pub struct Engine {
    pool: Pool<Database>,
    geocoder: mapquest::Client,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub async fn new(pool: Pool<Database>, geocoder: mapquest::Client) -> Result<Self, Error> {
        pool.execute(
            "CREATE TABLE IF NOT EXISTS place (id INTEGER PRIMARY KEY NOT NULL UNIQUE, address TEXT)",
        )
        .await?;

        Ok(Self { pool, geocoder })
    }
}

impl API for Engine {}
