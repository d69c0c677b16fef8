//! Repository for the `clients` table.

use garage_core::types::DbId;
use sqlx::PgPool;

use crate::models::client::{Client, CreateClient};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, phone, address, notes, created_at, updated_at";

/// Provides create and read operations for clients.
pub struct ClientRepo;

impl ClientRepo {
    /// Insert a new client, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateClient) -> Result<Client, sqlx::Error> {
        let query = format!(
            "INSERT INTO clients (name, email, phone, address, notes)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(input.name.trim())
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.address)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a client by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE id = $1");
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all clients alphabetically.
    pub async fn list(pool: &PgPool) -> Result<Vec<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients ORDER BY name ASC, id ASC");
        sqlx::query_as::<_, Client>(&query).fetch_all(pool).await
    }
}
