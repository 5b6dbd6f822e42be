use super::{ChartDescription, ChartLayout, ChartTitle, Trace, payload_range_label};
use crate::aggregate::OutcomeAggregate;
use crate::filter::{FilterSelection, SiteSelection};

pub fn pie_chart_title(selection: &FilterSelection) -> String {
    let range = payload_range_label(&selection.payload_range);
    match &selection.site {
        SiteSelection::All => format!("Total Successful Launches by Site ({range})"),
        SiteSelection::Site(site) => format!("Success vs. Failed Launches for {site} ({range})"),
    }
}

pub fn build_pie_chart(aggregate: &OutcomeAggregate, selection: &FilterSelection) -> ChartDescription {
    let (labels, values) = aggregate.slices().into_iter().unzip();

    ChartDescription {
        data: vec![Trace::Pie {
            labels,
            values,
            textinfo: "label+percent",
        }],
        layout: ChartLayout {
            title: ChartTitle::new(pie_chart_title(selection)),
            xaxis: None,
            yaxis: None,
            legend: None,
            showlegend: true,
        },
    }
}
