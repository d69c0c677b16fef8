//! Client / vehicle / project directory rules.
//!
//! Project status and service type are stored as TEXT with a CHECK
//! constraint; the enums below are the Rust side of those constraints.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Length of a Vehicle Identification Number.
pub const VIN_LEN: usize = 17;

macro_rules! define_text_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal {
            $( $variant:ident = $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $( $variant ),+
        }

        impl $name {
            /// Every accepted variant, in declaration order.
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            /// Database / wire representation.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $text ),+
                }
            }

            /// Parse the database / wire representation.
            pub fn parse(value: &str) -> Result<Self, CoreError> {
                match value {
                    $( $text => Ok($name::$variant), )+
                    other => Err(CoreError::Validation(format!(
                        "Unknown {} '{other}'. Expected one of: {}",
                        $label,
                        [$( $text ),+].join(", ")
                    ))),
                }
            }
        }
    };
}

define_text_enum! {
    /// Lifecycle of a service project.
    ProjectStatus, "project status" {
        Received = "received",
        InProgress = "in_progress",
        WaitingParts = "waiting_parts",
        ReadyPickup = "ready_pickup",
        Completed = "completed",
    }
}

define_text_enum! {
    /// Kind of work a project covers.
    ServiceType, "service type" {
        Coding = "coding",
        Stage1 = "stage1",
        Stage2 = "stage2",
        Xhp = "xhp",
        Diagnostics = "diagnostics",
        Repair = "repair",
        Other = "other",
    }
}

impl Default for ProjectStatus {
    fn default() -> Self {
        Self::Received
    }
}

/// Normalize and check a VIN: 17 ASCII alphanumerics, uppercased.
pub fn normalize_vin(vin: &str) -> Result<String, CoreError> {
    let vin = vin.trim().to_uppercase();
    if vin.len() != VIN_LEN || !vin.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(CoreError::Validation(format!(
            "VIN must be {VIN_LEN} alphanumeric characters"
        )));
    }
    Ok(vin)
}
