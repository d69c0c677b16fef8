//! Derived fields shown alongside a diagnosis.
//!
//! Always recomputed from the stored snapshot on read; nothing here is
//! persisted, so a change in labor-cost conventions never leaves stale
//! totals behind.

use serde::Serialize;

use crate::diagnostics::catalog::FaultCodeTemplate;

/// Total repair cost band (parts + labor) and the tuning gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiagnosisPresentation {
    pub total_cost_min: i64,
    pub total_cost_max: i64,
    pub requires_repair_before_tuning: bool,
}

impl DiagnosisPresentation {
    pub fn from_template(template: &FaultCodeTemplate) -> Self {
        present(
            template.estimated_cost_min,
            template.estimated_cost_max,
            template.labor_cost,
            template.tuning_compatibility.must_repair_first,
        )
    }
}

/// Compute totals from the raw cost columns.
///
/// Widened to `i64` so that two `INTEGER` columns can never overflow.
pub fn present(
    estimated_cost_min: i32,
    estimated_cost_max: i32,
    labor_cost: i32,
    must_repair_first: bool,
) -> DiagnosisPresentation {
    let labor = i64::from(labor_cost);
    DiagnosisPresentation {
        total_cost_min: i64::from(estimated_cost_min) + labor,
        total_cost_max: i64::from(estimated_cost_max) + labor,
        requires_repair_before_tuning: must_repair_first,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::catalog::FaultCodeCatalog;
    use crate::diagnostics::synthesizer::fallback_template;

    #[test]
    fn p0171_totals() {
        let catalog = FaultCodeCatalog::builtin();
        let p = DiagnosisPresentation::from_template(catalog.lookup("P0171").unwrap());
        assert_eq!(p.total_cost_min, 350);
        assert_eq!(p.total_cost_max, 1700);
        assert!(p.requires_repair_before_tuning);
    }

    #[test]
    fn totals_add_labor_to_both_bounds() {
        for (min, max, labor) in [(0, 0, 0), (10, 20, 5), (150, 1500, 200), (0, 9_999, 1)] {
            let p = present(min, max, labor, false);
            assert_eq!(p.total_cost_min, i64::from(min + labor));
            assert_eq!(p.total_cost_max, i64::from(max + labor));
        }
    }

    #[test]
    fn totals_do_not_overflow() {
        let p = present(i32::MAX, i32::MAX, i32::MAX, false);
        assert_eq!(p.total_cost_max, 2 * i64::from(i32::MAX));
    }

    #[test]
    fn fallback_requires_repair_before_tuning() {
        let p = DiagnosisPresentation::from_template(&fallback_template("P9999"));
        assert!(p.requires_repair_before_tuning);
        assert_eq!(p.total_cost_min, 450);
        assert_eq!(p.total_cost_max, 2250);
    }
}
