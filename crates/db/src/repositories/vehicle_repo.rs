//! Repository for the `vehicles` table.

use garage_core::types::DbId;
use sqlx::PgPool;

use crate::models::vehicle::{CreateVehicle, Vehicle};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, client_id, vin, brand, model, year, mileage, engine, \
    license_plate, notes, created_at, updated_at";

/// Provides create and read operations for vehicles.
pub struct VehicleRepo;

impl VehicleRepo {
    /// Insert a new vehicle, returning the created row.
    ///
    /// `vin` must already be normalized; the caller owns that rule.
    pub async fn create(
        pool: &PgPool,
        input: &CreateVehicle,
        vin: &str,
    ) -> Result<Vehicle, sqlx::Error> {
        let query = format!(
            "INSERT INTO vehicles
                (client_id, vin, brand, model, year, mileage, engine, license_plate, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(input.client_id)
            .bind(vin)
            .bind(&input.brand)
            .bind(&input.model)
            .bind(input.year)
            .bind(input.mileage)
            .bind(&input.engine)
            .bind(&input.license_plate)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a vehicle by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Vehicle>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vehicles WHERE id = $1");
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all vehicles, most recently registered first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Vehicle>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vehicles ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Vehicle>(&query).fetch_all(pool).await
    }

    /// List the vehicles owned by a client, most recently registered first.
    pub async fn list_by_client(
        pool: &PgPool,
        client_id: DbId,
    ) -> Result<Vec<Vehicle>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM vehicles WHERE client_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(client_id)
            .fetch_all(pool)
            .await
    }
}
