// Widget layout handed to the browser page
// Bounds and options are derived once from the dataset

use serde::Serialize;

use crate::controller::{InputWidget, OutputSlot};
use crate::dataset::Dataset;
use crate::filter::{ALL_SITES, ALL_SITES_LABEL, PayloadRange};

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";
pub const SITE_DROPDOWN_PLACEHOLDER: &str = "Select a launch site";
pub const DEFAULT_PAYLOAD_STEP: f64 = 1000.0;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Dropdown {
    pub id: &'static str,
    pub options: Vec<DropdownOption>,
    pub value: String,
    pub placeholder: &'static str,
    pub searchable: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RangeSlider {
    pub id: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<SliderMark>,
    pub value: PayloadRange,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DashboardLayout {
    pub title: &'static str,
    pub site_dropdown: Dropdown,
    pub payload_slider: RangeSlider,
    pub graphs: Vec<&'static str>,
}

pub fn build_layout(dataset: &Dataset, payload_step: f64) -> DashboardLayout {
    let bounds = dataset.payload_bounds();

    let options = std::iter::once(DropdownOption {
        label: ALL_SITES_LABEL.to_string(),
        value: ALL_SITES.to_string(),
    })
    .chain(dataset.launch_sites().iter().map(|site| DropdownOption {
        label: site.clone(),
        value: site.clone(),
    }))
    .collect();

    let mut marks = vec![SliderMark {
        value: bounds.min,
        label: bounds.min.to_string(),
    }];
    if bounds.max != bounds.min {
        marks.push(SliderMark {
            value: bounds.max,
            label: bounds.max.to_string(),
        });
    }

    DashboardLayout {
        title: DASHBOARD_TITLE,
        site_dropdown: Dropdown {
            id: InputWidget::SiteDropdown.id(),
            options,
            value: ALL_SITES.to_string(),
            placeholder: SITE_DROPDOWN_PLACEHOLDER,
            searchable: true,
        },
        payload_slider: RangeSlider {
            id: InputWidget::PayloadSlider.id(),
            min: bounds.min,
            max: bounds.max,
            step: payload_step,
            marks,
            value: bounds.into(),
        },
        graphs: OutputSlot::ALL.iter().map(|slot| slot.id()).collect(),
    }
}
