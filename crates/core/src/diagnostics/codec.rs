//! Versioned codec for the structured diagnosis snapshot.
//!
//! The checklist, cause distribution, risks and tuning verdict are persisted
//! as four JSON blobs next to a `schema_version` column. Every write goes
//! through [`encode_snapshot`] and every read through [`decode_snapshot`],
//! which dispatches on the stored version. A version this build does not know
//! is reported as an error; historical rows are never reinterpreted silently.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::diagnostics::catalog::{FaultCodeTemplate, ProbableCause, TuningCompatibility};
use crate::error::CoreError;

/// Version written by this build.
pub const DIAGNOSIS_SCHEMA_VERSION: i16 = 1;

/// The JSON-encoded parts of a template, ready to bind as JSONB parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedSnapshot {
    pub schema_version: i16,
    pub checklist: Value,
    pub probable_causes: Value,
    pub risks: Value,
    pub tuning_compatibility: Value,
}

/// The structured parts of a template after decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotParts {
    pub checklist: Vec<String>,
    pub probable_causes: Vec<ProbableCause>,
    pub risks: Vec<String>,
    pub tuning_compatibility: TuningCompatibility,
}

/// Raw blobs as read back from storage.
#[derive(Debug, Clone, Copy)]
pub struct StoredSnapshot<'a> {
    pub schema_version: i16,
    pub checklist: &'a Value,
    pub probable_causes: &'a Value,
    pub risks: &'a Value,
    pub tuning_compatibility: &'a Value,
}

/// Encode the structured parts of `template` at the current schema version.
pub fn encode_snapshot(template: &FaultCodeTemplate) -> Result<EncodedSnapshot, CoreError> {
    Ok(EncodedSnapshot {
        schema_version: DIAGNOSIS_SCHEMA_VERSION,
        checklist: to_value(&template.checklist, "checklist")?,
        probable_causes: to_value(&template.probable_causes, "probable_causes")?,
        risks: to_value(&template.risks, "risks")?,
        tuning_compatibility: to_value(&template.tuning_compatibility, "tuning_compatibility")?,
    })
}

/// Decode stored blobs according to their schema version.
pub fn decode_snapshot(stored: StoredSnapshot<'_>) -> Result<SnapshotParts, CoreError> {
    match stored.schema_version {
        1 => decode_v1(stored),
        other => Err(CoreError::Internal(format!(
            "Unsupported diagnosis schema version {other}"
        ))),
    }
}

fn decode_v1(stored: StoredSnapshot<'_>) -> Result<SnapshotParts, CoreError> {
    Ok(SnapshotParts {
        checklist: from_value(stored.checklist, "checklist")?,
        probable_causes: from_value(stored.probable_causes, "probable_causes")?,
        risks: from_value(stored.risks, "risks")?,
        tuning_compatibility: from_value(stored.tuning_compatibility, "tuning_compatibility")?,
    })
}

fn to_value<T: serde::Serialize>(value: &T, field: &str) -> Result<Value, CoreError> {
    serde_json::to_value(value)
        .map_err(|e| CoreError::Internal(format!("Cannot encode {field}: {e}")))
}

fn from_value<T: DeserializeOwned>(value: &Value, field: &str) -> Result<T, CoreError> {
    T::deserialize(value).map_err(|e| CoreError::Internal(format!("Cannot decode {field}: {e}")))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;
    use crate::diagnostics::catalog::FaultCodeCatalog;

    fn stored(encoded: &EncodedSnapshot) -> StoredSnapshot<'_> {
        StoredSnapshot {
            schema_version: encoded.schema_version,
            checklist: &encoded.checklist,
            probable_causes: &encoded.probable_causes,
            risks: &encoded.risks,
            tuning_compatibility: &encoded.tuning_compatibility,
        }
    }

    #[test]
    fn encode_writes_current_version() {
        let catalog = FaultCodeCatalog::builtin();
        let encoded = encode_snapshot(catalog.lookup("P0171").unwrap()).unwrap();
        assert_eq!(encoded.schema_version, DIAGNOSIS_SCHEMA_VERSION);
    }

    #[test]
    fn v1_field_names_are_stable() {
        let catalog = FaultCodeCatalog::builtin();
        let encoded = encode_snapshot(catalog.lookup("P0300").unwrap()).unwrap();

        assert_eq!(encoded.probable_causes[0]["cause"], "Zużyte świece zapłonowe");
        assert_eq!(encoded.probable_causes[0]["probability"], 40);
        assert_eq!(encoded.tuning_compatibility["can_tune"], false);
        assert_eq!(encoded.tuning_compatibility["must_repair_first"], true);
        assert!(encoded.tuning_compatibility["required_logs"].is_array());
    }

    #[test]
    fn decode_reads_hand_written_v1_blobs() {
        let checklist = json!(["a", "b"]);
        let causes = json!([{ "cause": "x", "probability": 60 }, { "cause": "y", "probability": 40 }]);
        let risks = json!([]);
        let tuning = json!({
            "can_tune": true,
            "stage1": "ok",
            "stage2": "ok",
            "required_logs": [],
            "must_repair_first": false
        });

        let parts = decode_snapshot(StoredSnapshot {
            schema_version: 1,
            checklist: &checklist,
            probable_causes: &causes,
            risks: &risks,
            tuning_compatibility: &tuning,
        })
        .unwrap();

        assert_eq!(parts.checklist, vec!["a", "b"]);
        assert_eq!(parts.probable_causes[1].probability, 40);
        assert!(parts.tuning_compatibility.can_tune);
    }

    #[test]
    fn decode_rejects_unknown_version() {
        let catalog = FaultCodeCatalog::builtin();
        let mut encoded = encode_snapshot(catalog.lookup("P0171").unwrap()).unwrap();
        encoded.schema_version = 99;
        assert_matches!(decode_snapshot(stored(&encoded)), Err(CoreError::Internal(_)));
    }

    #[test]
    fn decode_rejects_renamed_field() {
        let checklist = json!([]);
        let causes = json!([{ "reason": "x", "probability": 100 }]);
        let risks = json!([]);
        let tuning = json!({});
        let result = decode_snapshot(StoredSnapshot {
            schema_version: 1,
            checklist: &checklist,
            probable_causes: &causes,
            risks: &risks,
            tuning_compatibility: &tuning,
        });
        assert_matches!(result, Err(CoreError::Internal(_)));
    }

    #[test]
    fn decode_restores_encoded_parts() {
        let catalog = FaultCodeCatalog::builtin();
        let template = catalog.lookup("P0171").unwrap();
        let encoded = encode_snapshot(template).unwrap();
        let parts = decode_snapshot(stored(&encoded)).unwrap();

        assert_eq!(parts.checklist, template.checklist);
        assert_eq!(parts.probable_causes, template.probable_causes);
        assert_eq!(parts.risks, template.risks);
        assert_eq!(parts.tuning_compatibility, template.tuning_compatibility);
    }
}
