use std::collections::BTreeMap;

use log::debug;

use super::{DashboardController, InputWidget, OutputSlot};
use crate::charts::ChartDescription;
use crate::filter::{FilterSelection, PayloadRange, SiteSelection};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    Recomputing,
}

/// New value of a single input widget
#[derive(Clone, Debug, PartialEq)]
pub enum WidgetChange {
    Site(SiteSelection),
    PayloadRange(PayloadRange),
}

impl WidgetChange {
    pub fn widget(&self) -> InputWidget {
        match self {
            Self::Site(_) => InputWidget::SiteDropdown,
            Self::PayloadRange(_) => InputWidget::PayloadSlider,
        }
    }
}

/// What one viewer currently sees: widget values and the charts derived from them.
///
/// Charts from a recomputation are swapped in together, so a view never shows
/// outputs computed from different selections.
#[derive(Clone, Debug)]
pub struct DashboardView {
    selection: FilterSelection,
    state: ControllerState,
    charts: BTreeMap<OutputSlot, ChartDescription>,
}

impl DashboardView {
    /// Starts on the default selection with every output rendered.
    pub fn new(controller: &DashboardController) -> Self {
        let selection = controller.default_selection();
        Self::with_selection(controller, selection)
    }

    pub fn with_selection(controller: &DashboardController, selection: FilterSelection) -> Self {
        let charts = controller
            .render_all(&selection)
            .into_iter()
            .map(|update| (update.output, update.figure))
            .collect();
        Self {
            selection,
            state: ControllerState::Idle,
            charts,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn chart(&self, output: OutputSlot) -> Option<&ChartDescription> {
        self.charts.get(&output)
    }

    pub fn charts(&self) -> impl Iterator<Item = (OutputSlot, &ChartDescription)> {
        self.charts.iter().map(|(slot, chart)| (*slot, chart))
    }

    /// Applies a widget change and returns the outputs that were replaced.
    pub fn apply(&mut self, controller: &DashboardController, change: WidgetChange) -> Vec<OutputSlot> {
        let widget = change.widget();
        match change {
            WidgetChange::Site(site) => self.selection.site = site,
            WidgetChange::PayloadRange(range) => self.selection.payload_range = range,
        }

        self.state = ControllerState::Recomputing;
        debug!("{} changed, recomputing dashboard outputs", widget.id());
        let updates = controller.dispatch(&[widget], &self.selection);

        let replaced = updates.iter().map(|update| update.output).collect();
        for update in updates {
            self.charts.insert(update.output, update.figure);
        }
        self.state = ControllerState::Idle;
        replaced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Dataset, LaunchOutcome, LaunchRecord};
    use std::sync::Arc;

    fn controller() -> DashboardController {
        let dataset = Dataset::from_records(vec![
            LaunchRecord::new("A", 500.0, LaunchOutcome::Success, "v1.0"),
            LaunchRecord::new("A", 1500.0, LaunchOutcome::Failure, "v1.1"),
            LaunchRecord::new("B", 2000.0, LaunchOutcome::Success, "FT"),
        ])
        .unwrap();
        DashboardController::new(Arc::new(dataset)).unwrap()
    }

    #[test]
    fn test_new_view_renders_default_selection() {
        let controller = controller();
        let view = DashboardView::new(&controller);

        assert_eq!(view.state(), ControllerState::Idle);
        assert_eq!(view.selection(), &controller.default_selection());
        assert_eq!(view.charts().count(), 2);
        assert_eq!(
            view.chart(OutputSlot::SuccessPayloadScatterChart)
                .map(ChartDescription::mark_count),
            Some(3)
        );
    }

    #[test]
    fn test_site_change_replaces_both_charts() {
        let controller = controller();
        let mut view = DashboardView::new(&controller);

        let replaced = view.apply(&controller, WidgetChange::Site(SiteSelection::from("A")));

        assert_eq!(replaced, OutputSlot::ALL.to_vec());
        assert_eq!(view.state(), ControllerState::Idle);
        assert_eq!(view.selection().site, SiteSelection::from("A"));
        // payload range untouched by a dropdown change
        assert_eq!(view.selection().payload_range, PayloadRange::new(500.0, 2000.0));
        assert_eq!(
            view.chart(OutputSlot::SuccessPieChart).map(ChartDescription::title),
            Some("Success vs. Failed Launches for A (500 - 2000 Kg Payload)")
        );
    }

    #[test]
    fn test_range_change_keeps_site() {
        let controller = controller();
        let mut view = DashboardView::with_selection(
            &controller,
            FilterSelection::new("A", PayloadRange::new(0.0, 2000.0)),
        );

        view.apply(
            &controller,
            WidgetChange::PayloadRange(PayloadRange::new(0.0, 1000.0)),
        );

        assert_eq!(view.selection().site, SiteSelection::from("A"));
        assert_eq!(
            view.chart(OutputSlot::SuccessPayloadScatterChart)
                .map(ChartDescription::mark_count),
            Some(1)
        );
    }

    #[test]
    fn test_inverted_range_yields_empty_charts() {
        let controller = controller();
        let mut view = DashboardView::new(&controller);

        view.apply(
            &controller,
            WidgetChange::PayloadRange(PayloadRange::new(2000.0, 500.0)),
        );

        assert_eq!(
            view.chart(OutputSlot::SuccessPayloadScatterChart)
                .map(ChartDescription::mark_count),
            Some(0)
        );
        assert_eq!(
            view.chart(OutputSlot::SuccessPieChart).map(ChartDescription::mark_count),
            Some(0)
        );
    }
}
