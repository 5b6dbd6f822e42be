use itertools::Itertools;

use super::{Axis, ChartDescription, ChartLayout, ChartTitle, Legend, Trace, payload_range_label};
use crate::filter::{FilteredSet, PayloadRange, SiteSelection};

pub const PAYLOAD_AXIS_TITLE: &str = "Payload Mass (kg)";
pub const CLASS_AXIS_TITLE: &str = "Class";
pub const BOOSTER_LEGEND_TITLE: &str = "Booster Version Category";

pub fn scatter_chart_title(site: &SiteSelection, range: &PayloadRange) -> String {
    format!(
        "Success Payload Scatter Plot for {} ({})",
        site,
        payload_range_label(range)
    )
}

/// One marker trace per booster version category, in order of first appearance.
pub fn build_scatter_chart(
    filtered: &FilteredSet<'_>,
    site: &SiteSelection,
    range: &PayloadRange,
) -> ChartDescription {
    let data = filtered
        .iter()
        .map(|r| r.booster_version_category.as_str())
        .unique()
        .map(|category| {
            let (x, y) = filtered
                .iter()
                .filter(|r| r.booster_version_category == category)
                .map(|r| (r.payload_mass_kg, r.outcome.class()))
                .unzip();
            Trace::Scatter {
                name: category.to_string(),
                legendgroup: category.to_string(),
                mode: "markers",
                x,
                y,
            }
        })
        .collect();

    ChartDescription {
        data,
        layout: ChartLayout {
            title: ChartTitle::new(scatter_chart_title(site, range)),
            xaxis: Some(Axis {
                title: ChartTitle::new(PAYLOAD_AXIS_TITLE),
            }),
            yaxis: Some(Axis {
                title: ChartTitle::new(CLASS_AXIS_TITLE),
            }),
            legend: Some(Legend {
                title: ChartTitle::new(BOOSTER_LEGEND_TITLE),
            }),
            showlegend: true,
        },
    }
}
