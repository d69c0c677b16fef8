//! Repository for the `diagnoses` table.
//!
//! Every write is a single autocommit statement. Rows are never deleted
//! here; they disappear only when the owning vehicle is deleted (cascade).

use garage_core::types::DbId;
use sqlx::PgPool;

use crate::models::diagnosis::{Diagnosis, NewDiagnosis};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, vehicle_id, project_id, code, description, checklist, \
    probable_causes, estimated_cost_min, estimated_cost_max, labor_cost, risks, \
    tuning_compatibility, schema_version, resolved, created_at, updated_at";

/// Newest first. `id` breaks ties between rows inserted in the same instant.
const RECENCY: &str = "ORDER BY created_at DESC, id DESC";

/// Provides insert, read and resolve operations for diagnoses.
pub struct DiagnosisRepo;

impl DiagnosisRepo {
    /// Insert a diagnosis snapshot, returning the stored row.
    ///
    /// No dedup: the same code on the same vehicle may be recorded any
    /// number of times.
    pub async fn create(pool: &PgPool, input: &NewDiagnosis) -> Result<Diagnosis, sqlx::Error> {
        let query = format!(
            "INSERT INTO diagnoses
                (vehicle_id, project_id, code, description, checklist, probable_causes,
                 estimated_cost_min, estimated_cost_max, labor_cost, risks,
                 tuning_compatibility, schema_version)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Diagnosis>(&query)
            .bind(input.vehicle_id)
            .bind(input.project_id)
            .bind(&input.code)
            .bind(&input.description)
            .bind(&input.snapshot.checklist)
            .bind(&input.snapshot.probable_causes)
            .bind(input.estimated_cost_min)
            .bind(input.estimated_cost_max)
            .bind(input.labor_cost)
            .bind(&input.snapshot.risks)
            .bind(&input.snapshot.tuning_compatibility)
            .bind(input.snapshot.schema_version)
            .fetch_one(pool)
            .await
    }

    /// Find a diagnosis by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Diagnosis>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM diagnoses WHERE id = $1");
        sqlx::query_as::<_, Diagnosis>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// A vehicle's diagnosis history, most recent first.
    pub async fn list_by_vehicle(
        pool: &PgPool,
        vehicle_id: DbId,
    ) -> Result<Vec<Diagnosis>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM diagnoses WHERE vehicle_id = $1 {RECENCY}");
        sqlx::query_as::<_, Diagnosis>(&query)
            .bind(vehicle_id)
            .fetch_all(pool)
            .await
    }

    /// Diagnoses attached to a project, most recent first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Diagnosis>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM diagnoses WHERE project_id = $1 {RECENCY}");
        sqlx::query_as::<_, Diagnosis>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// `(code, resolved)` for every diagnosis on a vehicle.
    pub async fn code_history(
        pool: &PgPool,
        vehicle_id: DbId,
    ) -> Result<Vec<(String, bool)>, sqlx::Error> {
        sqlx::query_as::<_, (String, bool)>(
            "SELECT code, resolved FROM diagnoses WHERE vehicle_id = $1 ORDER BY id",
        )
        .bind(vehicle_id)
        .fetch_all(pool)
        .await
    }

    /// Mark a diagnosis resolved. Returns `true` if the row exists.
    ///
    /// Idempotent: re-resolving succeeds and leaves `updated_at` untouched.
    pub async fn mark_resolved(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE diagnoses
             SET resolved = true,
                 updated_at = CASE WHEN resolved THEN updated_at ELSE NOW() END
             WHERE id = $1",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
