// Core data structures for launch records

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::errors::LaunchDashError;

/// Binary outcome of a launch attempt, stored as the `Class` column (1 = success).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum LaunchOutcome {
    Failure,
    Success,
}

impl LaunchOutcome {
    /// Numeric class as plotted on the scatter chart's y axis
    pub fn class(self) -> u8 {
        match self {
            Self::Failure => 0,
            Self::Success => 1,
        }
    }

    /// Parses a class value. Accepts `0`/`1` and their float spellings (`0.0`, `1.0`).
    pub fn from_class(value: &str) -> Option<Self> {
        let class: f64 = value.trim().parse().ok()?;
        if class == 1.0 {
            Some(Self::Success)
        } else if class == 0.0 {
            Some(Self::Failure)
        } else {
            None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Failure => "Failure",
            Self::Success => "Success",
        }
    }
}

/// One launch attempt
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LaunchRecord {
    pub launch_site: String,
    /// Payload mass in kilograms
    pub payload_mass_kg: f64,
    pub outcome: LaunchOutcome,
    pub booster_version_category: String,
}

impl LaunchRecord {
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass_kg: f64,
        outcome: LaunchOutcome,
        booster_version_category: impl Into<String>,
    ) -> Self {
        Self {
            launch_site: launch_site.into(),
            payload_mass_kg,
            outcome,
            booster_version_category: booster_version_category.into(),
        }
    }
}

/// Smallest and largest payload mass across the whole dataset
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PayloadBounds {
    pub min: f64,
    pub max: f64,
}

/// Launch records in file order, plus constants derived once at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    launch_sites: Vec<String>,
    payload_bounds: PayloadBounds,
}

impl Dataset {
    /// Builds a dataset, rejecting records with an empty site or a non-finite payload mass.
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self, LaunchDashError> {
        for (index, record) in records.iter().enumerate() {
            if record.launch_site.trim().is_empty() {
                return Err(LaunchDashError::MissingLaunchSite { row: index + 1 });
            }
            if !record.payload_mass_kg.is_finite() {
                return Err(LaunchDashError::InvalidPayloadMass {
                    row: index + 1,
                    value: record.payload_mass_kg.to_string(),
                });
            }
        }

        let payload_bounds = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .minmax()
            .into_option()
            .map(|(min, max)| PayloadBounds { min, max })
            .ok_or(LaunchDashError::EmptyDataset)?;

        let launch_sites = records
            .iter()
            .map(|r| r.launch_site.clone())
            .unique()
            .collect();

        Ok(Self {
            records,
            launch_sites,
            payload_bounds,
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Distinct launch site names in order of first appearance
    pub fn launch_sites(&self) -> &[String] {
        &self.launch_sites
    }

    pub fn payload_bounds(&self) -> PayloadBounds {
        self.payload_bounds
    }

    pub fn has_site(&self, site: &str) -> bool {
        self.launch_sites.iter().any(|s| s == site)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
