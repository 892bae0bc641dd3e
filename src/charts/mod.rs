//! Chart figures built from selection subsets.
//!
//! Figures serialise to the `{ "data": [...], "layout": {...} }` document
//! that plotly.js renders with `Plotly.react`.

use serde::{Deserialize, Serialize};

use crate::models::{OutcomeClass, Selection};

pub const PAYLOAD_AXIS_TITLE: &str = "Payload Mass (kg)";
pub const OUTCOME_AXIS_TITLE: &str = "Launch Outcome";
pub const BOOSTER_LEGEND_TITLE: &str = "Booster Version Category";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: FigureLayout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Pie {
        labels: Vec<String>,
        values: Vec<usize>,
    },
    Scatter {
        mode: String,
        name: String,
        legendgroup: String,
        x: Vec<f64>,
        y: Vec<u8>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureLayout {
    pub title: Text,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub title: Text,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub title: Text,
}

impl Text {
    fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Figure {
    pub fn title(&self) -> &str {
        &self.layout.title.text
    }
}

/// Pie of outcome class proportions.
///
/// Slices follow the order in which each class first appears in the subset,
/// so an empty subset has no slices and a single-class subset has one.
pub fn pie(selection: &Selection<'_>) -> Figure {
    let mut slices: Vec<(OutcomeClass, usize)> = Vec::new();
    for record in selection.subset.iter() {
        match slices.iter_mut().find(|(class, _)| *class == record.outcome_class) {
            Some((_, count)) => *count += 1,
            None => slices.push((record.outcome_class, 1)),
        }
    }

    let (labels, values) = slices
        .into_iter()
        .map(|(class, count)| (class.as_u8().to_string(), count))
        .unzip();

    Figure {
        data: vec![Trace::Pie { labels, values }],
        layout: FigureLayout {
            title: Text::new(&selection.title),
            xaxis: None,
            yaxis: None,
            legend: None,
        },
    }
}

/// Scatter of payload mass against outcome, one trace per booster category.
pub fn scatter(selection: &Selection<'_>) -> Figure {
    let mut traces: Vec<(String, Vec<f64>, Vec<u8>)> = Vec::new();
    for record in selection.subset.iter() {
        let category = &record.booster_version_category;
        let index = match traces.iter().position(|(name, _, _)| name == category) {
            Some(index) => index,
            None => {
                traces.push((category.clone(), Vec::new(), Vec::new()));
                traces.len() - 1
            }
        };
        let (_, x, y) = &mut traces[index];
        x.push(record.payload_mass_kg);
        y.push(record.outcome_class.as_u8());
    }

    Figure {
        data: traces
            .into_iter()
            .map(|(name, x, y)| Trace::Scatter {
                mode: "markers".to_string(),
                legendgroup: name.clone(),
                name,
                x,
                y,
            })
            .collect(),
        layout: FigureLayout {
            title: Text::new(&selection.title),
            xaxis: Some(Axis {
                title: Text::new(PAYLOAD_AXIS_TITLE),
            }),
            yaxis: Some(Axis {
                title: Text::new(OUTCOME_AXIS_TITLE),
            }),
            legend: Some(Legend {
                title: Text::new(BOOSTER_LEGEND_TITLE),
            }),
        },
    }
}
