//! Declarative page tree for the dashboard.
//!
//! The tree is plain data: the browser shell walks the JSON form and creates
//! one widget per node. Nodes with an `id` are the ones callbacks read from
//! and write to.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::{LayoutConfig, MAX_SLIDER_MARKS};
use crate::models::{LaunchTable, PayloadRange, ALL_SITES};

pub const SITE_DROPDOWN: &str = "site-dropdown";
pub const PAYLOAD_SLIDER: &str = "payload-slider";
pub const SUCCESS_PIE_CHART: &str = "success-pie-chart";
pub const SUCCESS_PAYLOAD_SCATTER_CHART: &str = "success-payload-scatter-chart";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Component {
    Div {
        children: Vec<Component>,
    },
    H1 {
        text: String,
        #[serde(default)]
        style: BTreeMap<String, String>,
    },
    P {
        text: String,
    },
    Br,
    Dropdown {
        id: String,
        options: Vec<DropdownOption>,
        value: String,
        placeholder: String,
        searchable: bool,
    },
    RangeSlider {
        id: String,
        min: f64,
        max: f64,
        step: f64,
        marks: Vec<SliderMark>,
        value: PayloadRange,
    },
    Graph {
        id: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

impl Component {
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Dropdown { id, .. } | Self::RangeSlider { id, .. } | Self::Graph { id } => {
                Some(id.as_str())
            }
            _ => None,
        }
    }

    /// Depth-first search for the node carrying `id`.
    pub fn find(&self, id: &str) -> Option<&Component> {
        if self.id() == Some(id) {
            return Some(self);
        }
        match self {
            Self::Div { children } => children.iter().find_map(|c| c.find(id)),
            _ => None,
        }
    }

    /// Every id in the tree, in document order.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        self.collect_ids(&mut ids);
        ids
    }

    fn collect_ids<'a>(&'a self, ids: &mut Vec<&'a str>) {
        if let Some(id) = self.id() {
            ids.push(id);
        }
        if let Self::Div { children } = self {
            for child in children {
                child.collect_ids(ids);
            }
        }
    }
}

/// Build the dashboard page for a loaded table.
///
/// The slider's initial value spans the table's payloads while its tick
/// range comes from configuration, so payloads above `slider_max` start
/// selected but sit past the last tick.
pub fn build_layout(table: &LaunchTable, config: &LayoutConfig) -> Component {
    let sites: Vec<&str> = if config.sites.is_empty() {
        table.sites().iter().map(String::as_str).collect()
    } else {
        config.sites.iter().map(String::as_str).collect()
    };

    let mut options = vec![DropdownOption {
        label: "All Sites".to_string(),
        value: ALL_SITES.to_string(),
    }];
    options.extend(sites.into_iter().map(|site| DropdownOption {
        label: site.to_string(),
        value: site.to_string(),
    }));

    let heading_style = BTreeMap::from([
        ("textAlign".to_string(), "center".to_string()),
        ("color".to_string(), "#503D36".to_string()),
        ("font-size".to_string(), "40px".to_string()),
    ]);

    Component::Div {
        children: vec![
            Component::H1 {
                text: config.title.clone(),
                style: heading_style,
            },
            Component::Dropdown {
                id: SITE_DROPDOWN.to_string(),
                options,
                value: ALL_SITES.to_string(),
                placeholder: "Select a Launch Site".to_string(),
                searchable: true,
            },
            Component::Br,
            Component::Div {
                children: vec![Component::Graph {
                    id: SUCCESS_PIE_CHART.to_string(),
                }],
            },
            Component::Br,
            Component::P {
                text: "Payload range (Kg):".to_string(),
            },
            Component::RangeSlider {
                id: PAYLOAD_SLIDER.to_string(),
                min: config.slider_min,
                max: config.slider_max,
                step: config.slider_step,
                marks: slider_marks(config.slider_min, config.slider_max, config.slider_step),
                value: PayloadRange::spanning(table),
            },
            Component::Div {
                children: vec![Component::Graph {
                    id: SUCCESS_PAYLOAD_SCATTER_CHART.to_string(),
                }],
            },
        ],
    }
}

fn slider_marks(min: f64, max: f64, step: f64) -> Vec<SliderMark> {
    let span = (max - min) / step;
    if !(step > 0.0) || min > max || !(span <= MAX_SLIDER_MARKS) {
        return Vec::new();
    }
    let count = span.floor() as usize;
    (0..=count)
        .map(|i| {
            let value = min + step * i as f64;
            SliderMark {
                value,
                label: format_mark(value),
            }
        })
        .collect()
}

fn format_mark(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
