//! Interchange models for bulk import/export.

use serde::{Deserialize, Serialize};

use crate::goals::Goal;
use crate::metrics::HealthMetric;

/// The full interchange document: everything the tracker stores, as plain
/// records with ISO-8601 dates. Deserializing this shape and serializing it
/// back must be lossless.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    #[serde(default)]
    pub metrics: Vec<HealthMetric>,
    #[serde(default)]
    pub goals: Vec<Goal>,
}

/// Counts reported after a successful import.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub metrics_imported: usize,
    pub goals_imported: usize,
}
