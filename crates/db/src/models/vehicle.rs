//! Vehicle entity model and DTOs.

use garage_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A vehicle row from the `vehicles` table. Owned by a client.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Vehicle {
    pub id: DbId,
    pub client_id: DbId,
    pub vin: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub mileage: Option<i32>,
    pub engine: Option<String>,
    pub license_plate: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a vehicle. `vin` is normalized before insert.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVehicle {
    pub client_id: DbId,
    pub vin: String,
    #[validate(length(min = 1, max = 100))]
    pub brand: String,
    #[validate(length(min = 1, max = 100))]
    pub model: String,
    #[validate(range(min = 1900, max = 2100))]
    pub year: i32,
    #[validate(range(min = 0))]
    pub mileage: Option<i32>,
    #[validate(length(max = 100))]
    pub engine: Option<String>,
    #[validate(length(max = 20))]
    pub license_plate: Option<String>,
    pub notes: Option<String>,
}
