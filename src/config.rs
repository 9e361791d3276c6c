use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Roster configuration, threaded explicitly into the aggregation pipeline.
/// Loaded from a JSON file or taken from [`Default`], never read from
/// process-wide mutable state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterConfig {
    /// 1-indexed sheet row numbers of tracked staff members.
    #[serde(default = "default_active_rows")]
    pub active_rows: Vec<usize>,

    /// Zero-based column holding the name cell.
    #[serde(default)]
    pub name_column: usize,

    /// AM/PM column pair used when the report date cannot be located in the
    /// sheet. Lenient on purpose: an imprecise column beats no report.
    #[serde(default = "default_fallback_columns")]
    pub fallback_columns: (usize, usize),

    /// How many recent messages to scan for a duty-list announcement.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            active_rows: default_active_rows(),
            name_column: 0,
            fallback_columns: default_fallback_columns(),
            history_limit: default_history_limit(),
        }
    }
}

impl RosterConfig {
    /// Loads a configuration from a JSON file. Missing fields fall back to
    /// the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }
}

fn default_active_rows() -> Vec<usize> {
    vec![
        6, 7, 9, 10, 11, 12, 13, 15, 17, 18, 20, 21, 22, 23, 24, 25, 26, 27, 28, 30, 31, 35, 36,
        37,
    ]
}

fn default_fallback_columns() -> (usize, usize) {
    (1, 2)
}

fn default_history_limit() -> usize {
    100
}
