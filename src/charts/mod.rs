// Declarative chart descriptions
// Serialized in the Plotly figure shape so the browser can hand them straight to Plotly.react

pub mod pie;
pub mod scatter;

pub use pie::build_pie_chart;
pub use scatter::build_scatter_chart;

use serde::Serialize;

use crate::filter::PayloadRange;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartDescription {
    pub data: Vec<Trace>,
    pub layout: ChartLayout,
}

impl ChartDescription {
    pub fn title(&self) -> &str {
        &self.layout.title.text
    }

    /// Number of marks drawn: pie slices or scatter points
    pub fn mark_count(&self) -> usize {
        self.data.iter().map(Trace::mark_count).sum()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Pie {
        labels: Vec<String>,
        values: Vec<usize>,
        textinfo: &'static str,
    },
    Scatter {
        name: String,
        legendgroup: String,
        mode: &'static str,
        x: Vec<f64>,
        y: Vec<u8>,
    },
}

impl Trace {
    pub fn mark_count(&self) -> usize {
        match self {
            Self::Pie { values, .. } => values.len(),
            Self::Scatter { x, .. } => x.len(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartTitle {
    pub text: String,
}

impl ChartTitle {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Axis {
    pub title: ChartTitle,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Legend {
    pub title: ChartTitle,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartLayout {
    pub title: ChartTitle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    pub showlegend: bool,
}

/// `"<low> - <high> Kg Payload"`, bounds printed exactly as given
pub(crate) fn payload_range_label(range: &PayloadRange) -> String {
    format!("{} - {} Kg Payload", range.low, range.high)
}
