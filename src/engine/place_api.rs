use super::Engine;

use async_trait::async_trait;
use sqlx::{Executor, Row};

use crate::{api::PlaceAPI, entities::Place, error::Error};

#[async_trait]
impl PlaceAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_place(&self, address: String) -> Result<Place, Error> {
        let mut conn = self.pool.acquire().await?;

        let row = conn
            .fetch_one(
                sqlx::query("INSERT INTO place (address) VALUES ($1) RETURNING id").bind(&address),
            )
            .await?;

        let id = row.try_get("id")?;

        Ok(Place { id, address })
    }

    #[tracing::instrument(skip(self))]
    async fn list_places(&self) -> Result<Vec<Place>, Error> {
        let mut conn = self.pool.acquire().await?;

        let rows = conn
            .fetch_all(sqlx::query("SELECT id, address FROM place"))
            .await?;

        rows.iter()
            .map(|row| {
                let address: Option<String> = row.try_get("address")?;

                Ok(Place {
                    id: row.try_get("id")?,
                    address: address.unwrap_or_default(),
                })
            })
            .collect()
    }

    #[tracing::instrument(skip(self))]
    async fn delete_place(&self, id: i64) -> Result<(), Error> {
        let mut conn = self.pool.acquire().await?;

        // deleting an absent id is a no-op
        conn.execute(sqlx::query("DELETE FROM place WHERE id = $1").bind(id))
            .await?;

        Ok(())
    }
}
