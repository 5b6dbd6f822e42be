// Reactive controller
// Binds the site dropdown and payload slider to the two chart outputs through explicitly
// registered callbacks. The hosting layer owns event dispatch; callbacks are pure.

mod view;

pub use view::{ControllerState, DashboardView, WidgetChange};

use std::sync::Arc;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::LaunchDashError;
use crate::aggregate::aggregate_outcomes;
use crate::charts::{ChartDescription, build_pie_chart, build_scatter_chart};
use crate::dataset::Dataset;
use crate::filter::{FilterSelection, SiteSelection, filter_launches};
use crate::layout::{DashboardLayout, build_layout};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InputWidget {
    #[serde(rename = "site-dropdown")]
    SiteDropdown,
    #[serde(rename = "payload-slider")]
    PayloadSlider,
}

impl InputWidget {
    pub const ALL: [InputWidget; 2] = [Self::SiteDropdown, Self::PayloadSlider];

    pub const fn id(self) -> &'static str {
        match self {
            Self::SiteDropdown => "site-dropdown",
            Self::PayloadSlider => "payload-slider",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OutputSlot {
    #[serde(rename = "success-pie-chart")]
    SuccessPieChart,
    #[serde(rename = "success-payload-scatter-chart")]
    SuccessPayloadScatterChart,
}

impl OutputSlot {
    pub const ALL: [OutputSlot; 2] = [Self::SuccessPieChart, Self::SuccessPayloadScatterChart];

    pub const fn id(self) -> &'static str {
        match self {
            Self::SuccessPieChart => "success-pie-chart",
            Self::SuccessPayloadScatterChart => "success-payload-scatter-chart",
        }
    }
}

pub type ChartHandler = fn(&Dataset, &FilterSelection) -> ChartDescription;

/// A handler producing one output whenever any of its inputs changes
#[derive(Clone, Debug)]
pub struct Callback {
    pub output: OutputSlot,
    pub inputs: Vec<InputWidget>,
    handler: ChartHandler,
}

impl Callback {
    pub fn observes(&self, widget: InputWidget) -> bool {
        self.inputs.contains(&widget)
    }

    pub fn run(&self, dataset: &Dataset, selection: &FilterSelection) -> ChartDescription {
        (self.handler)(dataset, selection)
    }
}

#[derive(Clone, Debug, Default)]
pub struct CallbackRegistry {
    callbacks: Vec<Callback>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pie and scatter charts, each recomputed when either widget changes
    pub fn launch_charts() -> Result<Self, LaunchDashError> {
        let mut registry = Self::new();
        registry.register(OutputSlot::SuccessPieChart, &InputWidget::ALL, update_pie_chart)?;
        registry.register(
            OutputSlot::SuccessPayloadScatterChart,
            &InputWidget::ALL,
            update_scatter_chart,
        )?;
        Ok(registry)
    }

    /// Each output can only be driven by a single callback.
    pub fn register(
        &mut self,
        output: OutputSlot,
        inputs: &[InputWidget],
        handler: ChartHandler,
    ) -> Result<(), LaunchDashError> {
        if self.callbacks.iter().any(|c| c.output == output) {
            return Err(LaunchDashError::DuplicateOutput {
                output: output.id().to_string(),
            });
        }
        self.callbacks.push(Callback {
            output,
            inputs: inputs.to_vec(),
            handler,
        });
        Ok(())
    }

    pub fn callbacks(&self) -> &[Callback] {
        &self.callbacks
    }

    /// Callbacks observing at least one of the changed widgets
    pub fn triggered_by<'r>(&'r self, changed: &'r [InputWidget]) -> impl Iterator<Item = &'r Callback> {
        self.callbacks
            .iter()
            .filter(move |c| changed.iter().any(|w| c.observes(*w)))
    }
}

/// A freshly computed chart for one output slot
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OutputUpdate {
    pub output: OutputSlot,
    pub figure: ChartDescription,
}

pub fn update_pie_chart(dataset: &Dataset, selection: &FilterSelection) -> ChartDescription {
    let filtered = filter_launches(dataset.records(), &selection.site, &selection.payload_range);
    let aggregate = aggregate_outcomes(&filtered, &selection.site);
    build_pie_chart(&aggregate, selection)
}

pub fn update_scatter_chart(dataset: &Dataset, selection: &FilterSelection) -> ChartDescription {
    let filtered = filter_launches(dataset.records(), &selection.site, &selection.payload_range);
    build_scatter_chart(&filtered, &selection.site, &selection.payload_range)
}

/// Read-only dashboard core shared by every request
#[derive(Clone, Debug)]
pub struct DashboardController {
    dataset: Arc<Dataset>,
    registry: CallbackRegistry,
}

impl DashboardController {
    pub fn new(dataset: Arc<Dataset>) -> Result<Self, LaunchDashError> {
        Ok(Self::with_registry(dataset, CallbackRegistry::launch_charts()?))
    }

    pub fn with_registry(dataset: Arc<Dataset>, registry: CallbackRegistry) -> Self {
        Self { dataset, registry }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn layout(&self, payload_step: f64) -> DashboardLayout {
        build_layout(&self.dataset, payload_step)
    }

    pub fn default_selection(&self) -> FilterSelection {
        FilterSelection::full_range(&self.dataset)
    }

    /// Recomputes every output whose callback observes one of the changed widgets.
    pub fn dispatch(&self, changed: &[InputWidget], selection: &FilterSelection) -> Vec<OutputUpdate> {
        if let SiteSelection::Site(site) = &selection.site {
            if !self.dataset.has_site(site) {
                warn!("Selected launch site {:?} is not in the dataset", site);
            }
        }

        self.registry
            .triggered_by(changed)
            .map(|callback| {
                debug!(
                    "Recomputing {} for site {} and payload range {:?}",
                    callback.output.id(),
                    selection.site.value(),
                    selection.payload_range
                );
                OutputUpdate {
                    output: callback.output,
                    figure: callback.run(&self.dataset, selection),
                }
            })
            .collect()
    }

    /// Computes every registered output, as on first page load.
    pub fn render_all(&self, selection: &FilterSelection) -> Vec<OutputUpdate> {
        self.dispatch(&InputWidget::ALL, selection)
    }
}
