//! Diagnosis record model, insert DTO, and the read view returned to callers.

use garage_core::diagnostics::codec::{
    decode_snapshot, encode_snapshot, EncodedSnapshot, StoredSnapshot,
};
use garage_core::diagnostics::presentation::DiagnosisPresentation;
use garage_core::diagnostics::FaultCodeTemplate;
use garage_core::error::CoreError;
use garage_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `diagnoses` table.
///
/// The template fields are a point-in-time copy, not a reference into the
/// catalog. Only `resolved` changes after insert.
#[derive(Debug, Clone, FromRow)]
pub struct Diagnosis {
    pub id: DbId,
    pub vehicle_id: DbId,
    pub project_id: Option<DbId>,
    pub code: String,
    pub description: String,
    pub checklist: serde_json::Value,
    pub probable_causes: serde_json::Value,
    pub estimated_cost_min: i32,
    pub estimated_cost_max: i32,
    pub labor_cost: i32,
    pub risks: serde_json::Value,
    pub tuning_compatibility: serde_json::Value,
    pub schema_version: i16,
    pub resolved: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Diagnosis {
    /// Rebuild the structured template from the stored snapshot.
    pub fn template(&self) -> Result<FaultCodeTemplate, CoreError> {
        let parts = decode_snapshot(StoredSnapshot {
            schema_version: self.schema_version,
            checklist: &self.checklist,
            probable_causes: &self.probable_causes,
            risks: &self.risks,
            tuning_compatibility: &self.tuning_compatibility,
        })?;
        Ok(FaultCodeTemplate {
            description: self.description.clone(),
            checklist: parts.checklist,
            probable_causes: parts.probable_causes,
            estimated_cost_min: self.estimated_cost_min,
            estimated_cost_max: self.estimated_cost_max,
            labor_cost: self.labor_cost,
            risks: parts.risks,
            tuning_compatibility: parts.tuning_compatibility,
        })
    }
}

/// Insert DTO built from a synthesized template.
#[derive(Debug, Clone)]
pub struct NewDiagnosis {
    pub vehicle_id: DbId,
    pub project_id: Option<DbId>,
    /// Already normalized (trimmed, uppercase).
    pub code: String,
    pub description: String,
    pub estimated_cost_min: i32,
    pub estimated_cost_max: i32,
    pub labor_cost: i32,
    pub snapshot: EncodedSnapshot,
}

impl NewDiagnosis {
    pub fn from_template(
        vehicle_id: DbId,
        project_id: Option<DbId>,
        code: String,
        template: &FaultCodeTemplate,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            vehicle_id,
            project_id,
            code,
            description: template.description.clone(),
            estimated_cost_min: template.estimated_cost_min,
            estimated_cost_max: template.estimated_cost_max,
            labor_cost: template.labor_cost,
            snapshot: encode_snapshot(template)?,
        })
    }
}

/// A stored diagnosis merged with its structured bundle and derived totals.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosisDetail {
    pub id: DbId,
    pub vehicle_id: DbId,
    pub project_id: Option<DbId>,
    pub code: String,
    pub resolved: bool,
    pub schema_version: i16,
    #[serde(flatten)]
    pub diagnosis: FaultCodeTemplate,
    #[serde(flatten)]
    pub presentation: DiagnosisPresentation,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TryFrom<Diagnosis> for DiagnosisDetail {
    type Error = CoreError;

    fn try_from(row: Diagnosis) -> Result<Self, Self::Error> {
        let diagnosis = row.template()?;
        let presentation = DiagnosisPresentation::from_template(&diagnosis);
        Ok(Self {
            id: row.id,
            vehicle_id: row.vehicle_id,
            project_id: row.project_id,
            code: row.code,
            resolved: row.resolved,
            schema_version: row.schema_version,
            diagnosis,
            presentation,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
