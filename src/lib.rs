// Library interface for launchdash
// This allows integration tests and benchmarks to access internal modules

pub mod aggregate;
pub mod charts;
pub mod config;
pub mod controller;
pub mod dataset;
pub mod errors;
pub mod filter;
pub mod layout;
pub mod server;
pub mod writer;

// Re-export commonly used types
pub use aggregate::{OutcomeAggregate, OutcomeCounts, aggregate_outcomes};
pub use charts::{ChartDescription, Trace, build_pie_chart, build_scatter_chart};
pub use config::DashboardConfig;
pub use controller::{DashboardController, DashboardView, InputWidget, OutputSlot, WidgetChange};
pub use dataset::{Dataset, LaunchOutcome, LaunchRecord, load_launch_csv};
pub use errors::LaunchDashError;
pub use filter::{FilterSelection, FilteredSet, PayloadRange, SiteSelection, filter_launches};
