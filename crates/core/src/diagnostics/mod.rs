//! Fault-code (DTC) analysis engine.
//!
//! - [`catalog`] -- immutable code → template table, injected at startup.
//! - [`synthesizer`] -- turns any well-formed code into a complete template.
//! - [`codec`] -- versioned encoding of the structured snapshot columns.
//! - [`presentation`] -- derived cost totals and the tuning gate.
//! - [`history`] -- per-vehicle fault history summary (recurring codes).

pub mod catalog;
pub mod codec;
pub mod history;
pub mod presentation;
pub mod synthesizer;

pub use catalog::{FaultCodeCatalog, FaultCodeTemplate, ProbableCause, TuningCompatibility};
pub use synthesizer::{normalize_code, DiagnosisSynthesizer};
