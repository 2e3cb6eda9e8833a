//! Relational room store backed by Postgres.
//!
//! Rooms and users live in two auto-migrated tables; identifiers are serial
//! integers rendered as strings at the API boundary. Uses sqlx with a small
//! shared pool.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use tracing::debug;

use atrium_core::config::PostgresConfig;
use atrium_core::error::{AtriumError, AtriumResult};
use atrium_core::traits::RoomStore;
use atrium_core::types::{NewRoom, Room, RoomPatch};

/// Maximum connections for the shared pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create the process-wide PostgreSQL connection pool.
pub async fn connect_pool(config: &PostgresConfig) -> AtriumResult<PgPool> {
    PgPoolOptions::new()
        .max_connections(DEFAULT_MAX_CONNECTIONS)
        .connect(&config.url())
        .await
        .map_err(|err| AtriumError::database_with_source("failed to connect to Postgres", err))
}

/// Relational room store implementation.
pub struct PgRoomStore {
    pool: PgPool,
}

impl PgRoomStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the `users` and `rooms` tables when absent. Runs once at
    /// startup, before the server accepts traffic.
    pub async fn migrate(&self) -> AtriumResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|err| AtriumError::database_with_source("failed to migrate users table", err))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS rooms (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|err| AtriumError::database_with_source("failed to migrate rooms table", err))?;

        debug!("relational schema migrated");
        Ok(())
    }

    fn parse_id(id: &str) -> AtriumResult<i64> {
        id.parse().map_err(|_| AtriumError::invalid_identifier(id))
    }
}

#[async_trait]
impl RoomStore for PgRoomStore {
    async fn create(&self, room: NewRoom) -> AtriumResult<String> {
        let row = sqlx::query("INSERT INTO rooms (name) VALUES ($1) RETURNING id")
            .bind(&room.name)
            .fetch_one(&self.pool)
            .await
            .map_err(|err| AtriumError::database_with_source("failed to create room", err))?;

        Ok(row.get::<i64, _>("id").to_string())
    }

    async fn get(&self, id: &str) -> AtriumResult<Room> {
        let key = Self::parse_id(id)?;

        let row = sqlx::query("SELECT id, name, created_at, updated_at FROM rooms WHERE id = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| AtriumError::database_with_source("failed to read room", err))?
            .ok_or_else(|| AtriumError::room_not_found(id))?;

        Ok(Room {
            id: row.get::<i64, _>("id").to_string(),
            name: row.get("name"),
            members: None,
            created_at: Some(row.get::<DateTime<Utc>, _>("created_at")),
            updated_at: Some(row.get::<DateTime<Utc>, _>("updated_at")),
        })
    }

    async fn update(&self, id: &str, patch: RoomPatch) -> AtriumResult<()> {
        let key = Self::parse_id(id)?;

        // Read first so a miss is reported as such rather than as a no-op
        // update.
        sqlx::query("SELECT id FROM rooms WHERE id = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| AtriumError::database_with_source("failed to read room", err))?
            .ok_or_else(|| AtriumError::room_not_found(id))?;

        // The relational record only carries a name; member counts belong to
        // the document backend.
        let Some(name) = patch.name else {
            return Ok(());
        };

        sqlx::query("UPDATE rooms SET name = $2, updated_at = now() WHERE id = $1")
            .bind(key)
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(|err| AtriumError::database_with_source("failed to update room", err))?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> AtriumResult<()> {
        let key = Self::parse_id(id)?;

        let result = sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|err| AtriumError::database_with_source("failed to delete room", err))?;

        if result.rows_affected() < 1 {
            return Err(AtriumError::room_not_found(id));
        }
        Ok(())
    }
}
