//! Diagnosis synthesizer: code in, complete template out.
//!
//! The synthesizer is total for any non-empty code. A code the catalog does
//! not know is answered with a generic fallback template, so "we don't
//! recognise this code" is data rather than an error.

use std::sync::Arc;

use crate::diagnostics::catalog::{
    FaultCodeCatalog, FaultCodeTemplate, ProbableCause, TuningCompatibility,
};
use crate::error::CoreError;

/// Maximum stored length of a fault code (`diagnoses.code` is VARCHAR(20)).
pub const MAX_CODE_LEN: usize = 20;

/// Cause reported for every code the catalog does not know.
pub const FALLBACK_CAUSE: &str = "Requires detailed diagnostics";

/// Parts cost band used for unknown codes.
pub const FALLBACK_COST_MIN: i32 = 200;
pub const FALLBACK_COST_MAX: i32 = 2000;
pub const FALLBACK_LABOR_COST: i32 = 250;

/// Trim and uppercase a submitted code.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Normalize a caller-supplied code, rejecting blank or oversized input.
pub fn validate_fault_code(code: &str) -> Result<String, CoreError> {
    let normalized = normalize_code(code);
    if normalized.is_empty() {
        return Err(CoreError::Validation("Fault code must not be empty".into()));
    }
    if normalized.chars().count() > MAX_CODE_LEN {
        return Err(CoreError::Validation(format!(
            "Fault code must be at most {MAX_CODE_LEN} characters"
        )));
    }
    Ok(normalized)
}

/// Produces diagnosis bundles from an injected catalog.
#[derive(Debug, Clone)]
pub struct DiagnosisSynthesizer {
    catalog: Arc<FaultCodeCatalog>,
}

impl DiagnosisSynthesizer {
    pub fn new(catalog: Arc<FaultCodeCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &FaultCodeCatalog {
        &self.catalog
    }

    /// Return the catalog template for `code`, or the fallback template.
    ///
    /// Input is normalized here as well, so `"p0171"` and `" P0171 "` resolve
    /// to the same template. Blank input is rejected earlier by
    /// [`validate_fault_code`].
    pub fn synthesize(&self, code: &str) -> FaultCodeTemplate {
        let normalized = normalize_code(code);
        match self.catalog.lookup(&normalized) {
            Some(template) => template.clone(),
            None => fallback_template(&normalized),
        }
    }

    /// Whether `code` resolves to a catalog entry rather than the fallback.
    pub fn is_known(&self, code: &str) -> bool {
        self.catalog.lookup(&normalize_code(code)).is_some()
    }
}

/// Generic bundle for an unrecognised code.
pub fn fallback_template(code: &str) -> FaultCodeTemplate {
    FaultCodeTemplate {
        description: format!("Fault code: {code}"),
        checklist: vec![
            "Look up the code in the manufacturer's documentation".into(),
            "Run a full computer diagnostic scan".into(),
            "Check related sensors and systems".into(),
            "Inspect wiring and connectors".into(),
        ],
        probable_causes: vec![ProbableCause {
            cause: FALLBACK_CAUSE.into(),
            probability: 100,
        }],
        estimated_cost_min: FALLBACK_COST_MIN,
        estimated_cost_max: FALLBACK_COST_MAX,
        labor_cost: FALLBACK_LABOR_COST,
        risks: vec![
            "Requires professional diagnostics".into(),
            "Effects vary depending on the root cause".into(),
        ],
        tuning_compatibility: TuningCompatibility {
            can_tune: false,
            stage1: "Diagnose before tuning".into(),
            stage2: "Diagnose before tuning".into(),
            required_logs: vec!["All available logs".into()],
            must_repair_first: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn synthesizer() -> DiagnosisSynthesizer {
        DiagnosisSynthesizer::new(Arc::new(FaultCodeCatalog::builtin()))
    }

    #[test]
    fn known_codes_return_catalog_template_verbatim() {
        let synth = synthesizer();
        let catalog = FaultCodeCatalog::builtin();
        for (code, template) in catalog.entries() {
            assert_eq!(&synth.synthesize(code), template);
        }
    }

    #[test]
    fn p0171_description() {
        let t = synthesizer().synthesize("P0171");
        assert_eq!(t.description, "System za ubogi (Bank 1)");
        assert_eq!(t.estimated_cost_min, 150);
        assert_eq!(t.estimated_cost_max, 1500);
        assert_eq!(t.labor_cost, 200);
        assert!(!t.tuning_compatibility.can_tune);
    }

    #[test]
    fn lookup_ignores_case_and_whitespace() {
        let synth = synthesizer();
        assert_eq!(synth.synthesize("p0171"), synth.synthesize("P0171"));
        assert_eq!(synth.synthesize("  p0300\n"), synth.synthesize("P0300"));
        assert!(synth.is_known("p0300"));
    }

    #[test]
    fn unknown_code_uses_fallback() {
        let t = synthesizer().synthesize("P9999");
        assert!(t.description.contains("P9999"));
        assert_eq!(
            t.probable_causes,
            vec![ProbableCause {
                cause: FALLBACK_CAUSE.into(),
                probability: 100,
            }]
        );
        assert_eq!(t.checklist.len(), 4);
        assert!(!t.tuning_compatibility.can_tune);
        assert!(t.tuning_compatibility.must_repair_first);
    }

    #[test]
    fn fallback_embeds_normalized_code() {
        let t = synthesizer().synthesize(" u0100 ");
        assert_eq!(t.description, "Fault code: U0100");
    }

    #[test]
    fn fallback_template_is_valid() {
        fallback_template("B1234").validate().unwrap();
    }

    #[test]
    fn empty_fixture_catalog_always_falls_back() {
        let synth = DiagnosisSynthesizer::new(Arc::new(FaultCodeCatalog::default()));
        assert!(!synth.is_known("P0171"));
        assert_eq!(synth.synthesize("P0171"), fallback_template("P0171"));
    }

    #[test]
    fn validate_fault_code_rejects_blank() {
        assert_matches!(validate_fault_code("   "), Err(CoreError::Validation(_)));
        assert_matches!(validate_fault_code(""), Err(CoreError::Validation(_)));
    }

    #[test]
    fn validate_fault_code_rejects_oversized() {
        let long = "P".repeat(MAX_CODE_LEN + 1);
        assert_matches!(validate_fault_code(&long), Err(CoreError::Validation(_)));
    }

    #[test]
    fn validate_fault_code_normalizes() {
        assert_eq!(validate_fault_code(" p0171 ").unwrap(), "P0171");
    }
}
