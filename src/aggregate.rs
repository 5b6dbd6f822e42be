// Outcome aggregation feeding the success pie chart

use std::collections::BTreeMap;

use serde::Serialize;

use crate::dataset::LaunchOutcome;
use crate::filter::{FilteredSet, SiteSelection};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct OutcomeCounts {
    pub successes: usize,
    pub failures: usize,
}

impl OutcomeCounts {
    fn record(&mut self, outcome: LaunchOutcome) {
        match outcome {
            LaunchOutcome::Success => self.successes += 1,
            LaunchOutcome::Failure => self.failures += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.successes + self.failures
    }
}

/// Pie chart input. The all-sites view compares sites by their number of successful
/// launches, while a single site view splits that site's launches into successes and failures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OutcomeAggregate {
    BySite {
        sites: BTreeMap<String, OutcomeCounts>,
    },
    SingleSite {
        site: String,
        counts: OutcomeCounts,
    },
}

impl OutcomeAggregate {
    /// Labelled pie slices: per-site success counts, or the success/failure split of one site.
    pub fn slices(&self) -> Vec<(String, usize)> {
        match self {
            Self::BySite { sites } => sites
                .iter()
                .map(|(site, counts)| (site.clone(), counts.successes))
                .collect(),
            Self::SingleSite { counts, .. } => vec![
                (LaunchOutcome::Success.label().to_string(), counts.successes),
                (LaunchOutcome::Failure.label().to_string(), counts.failures),
            ],
        }
    }

    /// Number of launches behind the aggregate, failures included
    pub fn total_launches(&self) -> usize {
        match self {
            Self::BySite { sites } => sites.values().map(OutcomeCounts::total).sum(),
            Self::SingleSite { counts, .. } => counts.total(),
        }
    }
}

pub fn aggregate_outcomes(filtered: &FilteredSet<'_>, site: &SiteSelection) -> OutcomeAggregate {
    match site {
        SiteSelection::All => {
            let mut sites: BTreeMap<String, OutcomeCounts> = BTreeMap::new();
            for record in filtered.iter() {
                sites
                    .entry(record.launch_site.clone())
                    .or_default()
                    .record(record.outcome);
            }
            OutcomeAggregate::BySite { sites }
        }
        SiteSelection::Site(name) => {
            let mut counts = OutcomeCounts::default();
            for record in filtered.iter() {
                counts.record(record.outcome);
            }
            OutcomeAggregate::SingleSite {
                site: name.clone(),
                counts,
            }
        }
    }
}
