//! Fault-code catalog: static reference data keyed by normalized code.
//!
//! The catalog is built once at startup (either the built-in table or a JSON
//! file supplied by the deployment) and then shared read-only. There is no
//! mutation API.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Template types
// ---------------------------------------------------------------------------

/// One entry of a probable-cause distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbableCause {
    pub cause: String,
    /// Whole percent, 0-100.
    pub probability: u8,
}

/// Advisory verdict on whether performance tuning may proceed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TuningCompatibility {
    pub can_tune: bool,
    pub stage1: String,
    pub stage2: String,
    pub required_logs: Vec<String>,
    pub must_repair_first: bool,
}

/// Everything the shop knows about a single fault code.
///
/// `checklist`, `probable_causes` and `risks` are ordered; the order is what
/// the technician sees. Causes are listed most likely first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaultCodeTemplate {
    pub description: String,
    pub checklist: Vec<String>,
    pub probable_causes: Vec<ProbableCause>,
    pub estimated_cost_min: i32,
    pub estimated_cost_max: i32,
    pub labor_cost: i32,
    pub risks: Vec<String>,
    pub tuning_compatibility: TuningCompatibility,
}

impl FaultCodeTemplate {
    /// Sum of all cause probabilities.
    ///
    /// Expected to be 100 for an honest distribution, but templates are
    /// accepted as display data whatever the total.
    pub fn probability_total(&self) -> u32 {
        self.probable_causes
            .iter()
            .map(|c| u32::from(c.probability))
            .sum()
    }

    /// Check the hard invariants of a template.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.description.trim().is_empty() {
            return Err(CoreError::Validation(
                "Template description must not be empty".into(),
            ));
        }
        if self.estimated_cost_min < 0 || self.estimated_cost_min > self.estimated_cost_max {
            return Err(CoreError::Validation(format!(
                "Invalid cost range {}..{}",
                self.estimated_cost_min, self.estimated_cost_max
            )));
        }
        if self.labor_cost < 0 {
            return Err(CoreError::Validation(format!(
                "Labor cost must be >= 0, got {}",
                self.labor_cost
            )));
        }
        if let Some(bad) = self.probable_causes.iter().find(|c| c.probability > 100) {
            return Err(CoreError::Validation(format!(
                "Probability for '{}' exceeds 100: {}",
                bad.cause, bad.probability
            )));
        }
        if let Some(pair) = self
            .probable_causes
            .windows(2)
            .find(|w| w[0].probability < w[1].probability)
        {
            return Err(CoreError::Validation(format!(
                "Probable causes must be sorted most likely first: '{}' ({}) before '{}' ({})",
                pair[0].cause, pair[0].probability, pair[1].cause, pair[1].probability
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Immutable lookup table from normalized (uppercase) code to template.
#[derive(Debug, Clone, Default)]
pub struct FaultCodeCatalog {
    templates: BTreeMap<String, FaultCodeTemplate>,
}

impl FaultCodeCatalog {
    /// Build a catalog from `(code, template)` pairs.
    ///
    /// Keys are trimmed and uppercased. Fails on an empty key, a key that
    /// appears twice after normalization, or a template that violates
    /// [`FaultCodeTemplate::validate`].
    pub fn from_templates<I>(entries: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = (String, FaultCodeTemplate)>,
    {
        let mut templates = BTreeMap::new();
        for (code, template) in entries {
            let key = code.trim().to_uppercase();
            if key.is_empty() {
                return Err(CoreError::Validation(
                    "Catalog contains an empty fault code".into(),
                ));
            }
            template
                .validate()
                .map_err(|e| CoreError::Validation(format!("Template {key}: {e}")))?;
            if templates.insert(key.clone(), template).is_some() {
                return Err(CoreError::Validation(format!(
                    "Fault code {key} is defined more than once"
                )));
            }
        }
        Ok(Self { templates })
    }

    /// Load a catalog from a JSON object of `{ "P0171": { ...template } }`.
    pub fn from_json_file(path: &Path) -> Result<Self, CoreError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Internal(format!("Cannot read catalog {}: {e}", path.display()))
        })?;
        Self::from_json_str(&raw)
    }

    /// Parse a catalog from its JSON text form.
    pub fn from_json_str(raw: &str) -> Result<Self, CoreError> {
        let entries: BTreeMap<String, FaultCodeTemplate> = serde_json::from_str(raw)
            .map_err(|e| CoreError::Validation(format!("Malformed catalog JSON: {e}")))?;
        Self::from_templates(entries)
    }

    /// The catalog shipped with the application.
    pub fn builtin() -> Self {
        let mut templates = BTreeMap::new();
        templates.insert("P0171".to_string(), p0171());
        templates.insert("P0300".to_string(), p0300());
        Self { templates }
    }

    /// Exact, case-sensitive lookup. Callers normalize first.
    pub fn lookup(&self, code: &str) -> Option<&FaultCodeTemplate> {
        self.templates.get(code)
    }

    /// All known codes in ascending order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    /// Known codes with their templates, ascending by code.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &FaultCodeTemplate)> {
        self.templates.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Built-in templates
// ---------------------------------------------------------------------------

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn causes(items: &[(&str, u8)]) -> Vec<ProbableCause> {
    items
        .iter()
        .map(|(cause, probability)| ProbableCause {
            cause: (*cause).to_string(),
            probability: *probability,
        })
        .collect()
}

fn p0171() -> FaultCodeTemplate {
    FaultCodeTemplate {
        description: "System za ubogi (Bank 1)".into(),
        checklist: strings(&[
            "Sprawdź szczelność układu dolotowego",
            "Sprawdź czujnik MAF (masowego przepływu powietrza)",
            "Sprawdź czujnik MAP (ciśnienia w kolektorze)",
            "Sprawdź sondy lambda",
            "Sprawdź ciśnienie paliwa",
            "Sprawdź korekty paliwowe długo- i krótkoterminowe",
            "Sprawdź zawór PCV",
            "Sprawdź układ EVAP",
        ]),
        probable_causes: causes(&[
            ("Nieszczelność układu dolotowego", 55),
            ("Brudny lub uszkodzony MAF", 20),
            ("Niska wydajność pompy paliwa", 10),
            ("Uszkodzona sonda lambda", 8),
            ("Nieszczelny zawór PCV", 5),
            ("Inne przyczyny", 2),
        ]),
        estimated_cost_min: 150,
        estimated_cost_max: 1500,
        labor_cost: 200,
        risks: strings(&[
            "Zwiększone zużycie paliwa",
            "Utrata mocy silnika",
            "Uszkodzenie katalizatora przy długotrwałym ignorowaniu",
            "Nieprawidłowe spalanie - możliwe uszkodzenie tłoków",
        ]),
        tuning_compatibility: TuningCompatibility {
            can_tune: false,
            stage1: "Nie zalecane - najpierw napraw błąd".into(),
            stage2: "Nie zalecane - najpierw napraw błąd".into(),
            required_logs: strings(&["Korekty paliwowe", "AFR", "Ciśnienie paliwa"]),
            must_repair_first: true,
        },
    }
}

fn p0300() -> FaultCodeTemplate {
    FaultCodeTemplate {
        description: "Wykryto losowe wypadanie zapłonu".into(),
        checklist: strings(&[
            "Sprawdź świece zapłonowe",
            "Sprawdź cewki zapłonowe",
            "Sprawdź przewody zapłonowe",
            "Sprawdź kompresję silnika",
            "Sprawdź wtryskiwacze paliwa",
            "Sprawdź ciśnienie paliwa",
            "Sprawdź zawory silnika",
            "Sprawdź układ dolotowy",
        ]),
        probable_causes: causes(&[
            ("Zużyte świece zapłonowe", 40),
            ("Uszkodzone cewki zapłonowe", 30),
            ("Problemy z wtryskiwaczami", 15),
            ("Niska kompresja", 10),
            ("Inne przyczyny", 5),
        ]),
        estimated_cost_min: 200,
        estimated_cost_max: 3000,
        labor_cost: 300,
        risks: strings(&[
            "Poważne uszkodzenie katalizatora",
            "Uszkodzenie silnika przy kontynuacji jazdy",
            "Znaczna utrata mocy",
            "Możliwe uszkodzenie turbosprężarki (jeśli dotyczy)",
        ]),
        tuning_compatibility: TuningCompatibility {
            can_tune: false,
            stage1: "Absolutnie nie - krytyczny błąd".into(),
            stage2: "Absolutnie nie - krytyczny błąd".into(),
            required_logs: strings(&["Misfires", "Ignition timing", "Fuel pressure"]),
            must_repair_first: true,
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
