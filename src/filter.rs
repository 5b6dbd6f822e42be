// Filter engine: restricts launch records to a site and an inclusive payload range

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dataset::{Dataset, LaunchRecord, PayloadBounds};

/// Dropdown value selecting every launch site
pub const ALL_SITES: &str = "ALL";
/// Display name of the all-sites selection
pub const ALL_SITES_LABEL: &str = "All Sites";

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Value as submitted by the site dropdown
    pub fn value(&self) -> &str {
        match self {
            Self::All => ALL_SITES,
            Self::Site(site) => site,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            Self::All => true,
            Self::Site(site) => record.launch_site == *site,
        }
    }
}

impl From<String> for SiteSelection {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            Self::All
        } else {
            Self::Site(value)
        }
    }
}

impl From<&str> for SiteSelection {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<SiteSelection> for String {
    fn from(value: SiteSelection) -> Self {
        match value {
            SiteSelection::All => ALL_SITES.to_string(),
            SiteSelection::Site(site) => site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_SITES_LABEL),
            Self::Site(site) => f.write_str(site),
        }
    }
}

/// Inclusive payload mass interval in kilograms, taken as supplied: `low > high` is never reordered.
///
/// Serialized as `[low, high]`, the shape of the range slider's value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        payload_mass_kg >= self.low && payload_mass_kg <= self.high
    }
}

impl From<[f64; 2]> for PayloadRange {
    fn from([low, high]: [f64; 2]) -> Self {
        Self { low, high }
    }
}

impl From<PayloadRange> for [f64; 2] {
    fn from(value: PayloadRange) -> Self {
        [value.low, value.high]
    }
}

impl From<PayloadBounds> for PayloadRange {
    fn from(bounds: PayloadBounds) -> Self {
        Self {
            low: bounds.min,
            high: bounds.max,
        }
    }
}

/// Current value of both input widgets
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub site: SiteSelection,
    pub payload_range: PayloadRange,
}

impl FilterSelection {
    pub fn new(site: impl Into<SiteSelection>, payload_range: PayloadRange) -> Self {
        Self {
            site: site.into(),
            payload_range,
        }
    }

    /// All sites over the dataset's full payload bounds
    pub fn full_range(dataset: &Dataset) -> Self {
        Self {
            site: SiteSelection::All,
            payload_range: dataset.payload_bounds().into(),
        }
    }
}

/// Records matching a selection, in dataset order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilteredSet<'a> {
    records: Vec<&'a LaunchRecord>,
}

impl<'a> FilteredSet<'a> {
    pub fn records(&self) -> &[&'a LaunchRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a LaunchRecord> + '_ {
        self.records.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> FromIterator<&'a LaunchRecord> for FilteredSet<'a> {
    fn from_iter<T: IntoIterator<Item = &'a LaunchRecord>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

/// Keeps the records at the selected site whose payload mass lies in `range`.
///
/// Works on any record source, so an already filtered set can be filtered again.
pub fn filter_launches<'a, I>(records: I, site: &SiteSelection, range: &PayloadRange) -> FilteredSet<'a>
where
    I: IntoIterator<Item = &'a LaunchRecord>,
{
    records
        .into_iter()
        .filter(|record| site.matches(record))
        .filter(|record| range.contains(record.payload_mass_kg))
        .collect()
}
