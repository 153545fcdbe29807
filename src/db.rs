use sqlx::{sqlite::SqlitePoolOptions, Pool, Sqlite};

pub struct SqlitePool(pub Pool<Sqlite>);

impl SqlitePool {
    pub async fn new(db_uri: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(db_uri)
            .await?;

        Ok(Self(pool))
    }
}
