// Integration tests for the launch dashboard
//
// Covers the full path from a CSV on disk to chart descriptions:
// 1. Load the sample launch records
// 2. Filter by site and payload range
// 3. Aggregate and build both charts through the controller
// 4. Apply widget changes to a dashboard view

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use launchdash::controller::ControllerState;
use launchdash::{
    DashboardController, DashboardView, FilterSelection, LaunchDashError, OutputSlot,
    PayloadRange, SiteSelection, Trace, WidgetChange, aggregate_outcomes, filter_launches,
    load_launch_csv,
};
use tempfile::NamedTempFile;

const SAMPLE_FILE: &str = "launch_samples/spacex_launch_dash.csv";

fn sample_controller() -> DashboardController {
    let dataset = load_launch_csv(Path::new(SAMPLE_FILE)).expect("Failed to load sample dataset");
    DashboardController::new(Arc::new(dataset)).unwrap()
}

/// Three record dataset: A/500/success, A/1500/failure, B/2000/success
fn scenario_controller() -> (NamedTempFile, DashboardController) {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Launch Site,PayloadMass,Class,Booster Version Category").unwrap();
    writeln!(file, "A,500,1,v1.0").unwrap();
    writeln!(file, "A,1500,0,v1.1").unwrap();
    writeln!(file, "B,2000,1,FT").unwrap();
    file.flush().unwrap();

    let dataset = load_launch_csv(file.path()).unwrap();
    let controller = DashboardController::new(Arc::new(dataset)).unwrap();
    (file, controller)
}

fn pie_slices(controller: &DashboardController, selection: &FilterSelection) -> Vec<(String, usize)> {
    let dataset = controller.dataset();
    let filtered = filter_launches(dataset.records(), &selection.site, &selection.payload_range);
    aggregate_outcomes(&filtered, &selection.site).slices()
}

fn owned(entries: &[(&str, usize)]) -> Vec<(String, usize)> {
    entries.iter().map(|(l, v)| (l.to_string(), *v)).collect()
}

#[test]
fn test_sample_dataset_loads() {
    let controller = sample_controller();
    let dataset = controller.dataset();

    assert_eq!(dataset.len(), 56);
    assert_eq!(
        dataset.launch_sites(),
        &["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"]
    );
    assert_eq!(dataset.payload_bounds().min, 0.0);
    assert_eq!(dataset.payload_bounds().max, 12050.0);
}

#[test]
fn test_sample_all_sites_pie_counts_successes() {
    let controller = sample_controller();
    let selection = controller.default_selection();

    assert_eq!(
        pie_slices(&controller, &selection),
        owned(&[
            ("CCAFS LC-40", 6),
            ("CCAFS SLC-40", 6),
            ("KSC LC-39A", 12),
            ("VAFB SLC-4E", 4),
        ])
    );
}

#[test]
fn test_sample_single_site_pie_splits_outcomes() {
    let controller = sample_controller();
    let mut selection = controller.default_selection();
    selection.site = SiteSelection::from("KSC LC-39A");

    assert_eq!(
        pie_slices(&controller, &selection),
        owned(&[("Success", 12), ("Failure", 3)])
    );
}

#[test]
fn test_sample_scatter_groups_by_booster() {
    let controller = sample_controller();
    let updates = controller.render_all(&controller.default_selection());
    let scatter = &updates[1].figure;

    assert_eq!(scatter.mark_count(), 56);
    let names: Vec<&str> = scatter
        .data
        .iter()
        .map(|trace| match trace {
            Trace::Scatter { name, .. } => name.as_str(),
            other => panic!("Expected scatter trace, got {:?}", other),
        })
        .collect();
    assert_eq!(names, ["v1.0", "v1.1", "FT", "B4", "B5"]);

    let selection = FilterSelection::new("ALL", PayloadRange::new(2000.0, 4000.0));
    let updates = controller.render_all(&selection);
    assert_eq!(updates[1].figure.mark_count(), 24);
    assert_eq!(
        updates[1].figure.title(),
        "Success Payload Scatter Plot for All Sites (2000 - 4000 Kg Payload)"
    );
}

#[test]
fn test_scenario_all_sites_full_range() {
    let (_file, controller) = scenario_controller();
    let selection = FilterSelection::new("ALL", PayloadRange::new(0.0, 2000.0));

    let filtered = filter_launches(
        controller.dataset().records(),
        &selection.site,
        &selection.payload_range,
    );
    assert_eq!(filtered.len(), 3);
    assert_eq!(pie_slices(&controller, &selection), owned(&[("A", 1), ("B", 1)]));

    let updates = controller.render_all(&selection);
    assert_eq!(updates[1].figure.mark_count(), 3);
}

#[test]
fn test_scenario_single_site_low_range() {
    let (_file, controller) = scenario_controller();
    let selection = FilterSelection::new("A", PayloadRange::new(0.0, 1000.0));

    let filtered = filter_launches(
        controller.dataset().records(),
        &selection.site,
        &selection.payload_range,
    );
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered.records()[0].payload_mass_kg, 500.0);
    assert_eq!(
        pie_slices(&controller, &selection),
        owned(&[("Success", 1), ("Failure", 0)])
    );
}

#[test]
fn test_scenario_range_outside_every_mass() {
    let (_file, controller) = scenario_controller();
    let selection = FilterSelection::new("ALL", PayloadRange::new(3000.0, 4000.0));

    assert!(pie_slices(&controller, &selection).is_empty());

    let updates = controller.render_all(&selection);
    let scatter = &updates[1].figure;
    assert_eq!(updates[1].output, OutputSlot::SuccessPayloadScatterChart);
    assert_eq!(scatter.mark_count(), 0);
    assert!(scatter.title().contains("3000 - 4000"));
}

#[test]
fn test_view_follows_widget_changes() {
    let controller = sample_controller();
    let mut view = DashboardView::new(&controller);

    let replaced = view.apply(&controller, WidgetChange::Site(SiteSelection::from("VAFB SLC-4E")));
    assert_eq!(replaced.len(), 2);
    assert_eq!(view.state(), ControllerState::Idle);
    assert_eq!(
        view.chart(OutputSlot::SuccessPayloadScatterChart).map(|c| c.mark_count()),
        Some(7)
    );

    view.apply(
        &controller,
        WidgetChange::PayloadRange(PayloadRange::new(9000.0, 10000.0)),
    );
    assert_eq!(
        view.chart(OutputSlot::SuccessPayloadScatterChart).map(|c| c.title()),
        Some("Success Payload Scatter Plot for VAFB SLC-4E (9000 - 10000 Kg Payload)")
    );
    assert_eq!(
        view.chart(OutputSlot::SuccessPayloadScatterChart).map(|c| c.mark_count()),
        Some(3)
    );
}

#[test]
fn test_missing_column_is_fatal() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Launch Site,PayloadMass,Booster Version Category").unwrap();
    writeln!(file, "A,500,v1.0").unwrap();
    file.flush().unwrap();

    match load_launch_csv(file.path()) {
        Err(LaunchDashError::MissingColumn { column }) => assert_eq!(column, "Class"),
        other => panic!("Expected MissingColumn error, got {:?}", other),
    }
}

#[test]
fn test_default_slider_value_reaches_dataset_max() {
    let controller = sample_controller();
    let layout = controller.layout(1000.0);
    let bounds = controller.dataset().payload_bounds();

    assert_eq!(layout.payload_slider.value, PayloadRange::from(bounds));
    assert_eq!(layout.payload_slider.max, 12050.0);

    let selection = FilterSelection {
        site: SiteSelection::from(layout.site_dropdown.value),
        payload_range: layout.payload_slider.value,
    };
    let updates = controller.render_all(&selection);
    assert_eq!(updates[1].figure.mark_count(), 56);
    assert_eq!(
        updates[1].figure.title(),
        "Success Payload Scatter Plot for All Sites (0 - 12050 Kg Payload)"
    );
}
