//! Explicit callback table binding widget inputs to chart outputs.
//!
//! Each entry names the input properties it reads and the single output
//! property it writes. When the browser reports a change it posts the
//! current values of an entry's inputs; [`CallbackRegistry::dispatch`] runs
//! the handler against the shared table and returns the new figure.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::charts::{self, Figure};
use crate::engine::{compute_outcome_breakdown, compute_payload_correlation};
use crate::error::{DashboardError, Result};
use crate::layout::{
    Component, PAYLOAD_SLIDER, SITE_DROPDOWN, SUCCESS_PAYLOAD_SCATTER_CHART, SUCCESS_PIE_CHART,
};
use crate::models::{LaunchTable, PayloadRange, SiteSelection};

/// A named property of a component, written `id.property` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRef {
    pub id: String,
    pub property: String,
}

impl PropertyRef {
    pub fn new(id: impl Into<String>, property: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            property: property.into(),
        }
    }
}

impl fmt::Display for PropertyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.id, self.property)
    }
}

impl FromStr for PropertyRef {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.rsplit_once('.') {
            Some((id, property)) if !id.is_empty() && !property.is_empty() => {
                Ok(Self::new(id, property))
            }
            _ => Err(DashboardError::InvalidInput(format!(
                "expected `id.property`, got `{}`",
                s
            ))),
        }
    }
}

/// The current value of one input property, as posted by the browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputValue {
    pub id: String,
    pub property: String,
    #[serde(default)]
    pub value: Value,
}

/// Computes an output figure from input values ordered like the entry's inputs.
pub type Handler = fn(&LaunchTable, &[&Value]) -> Result<Figure>;

struct Callback {
    inputs: Vec<PropertyRef>,
    output: PropertyRef,
    handler: Handler,
}

/// Wire description of one registered callback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dependency {
    pub inputs: Vec<PropertyRef>,
    pub output: PropertyRef,
}

#[derive(Default)]
pub struct CallbackRegistry {
    callbacks: Vec<Callback>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The dashboard's two callbacks: dropdown → pie, dropdown + slider → scatter.
    pub fn dashboard() -> Self {
        let mut registry = Self::new();
        registry.register(
            vec![PropertyRef::new(SITE_DROPDOWN, "value")],
            PropertyRef::new(SUCCESS_PIE_CHART, "figure"),
            update_pie_chart,
        );
        registry.register(
            vec![
                PropertyRef::new(SITE_DROPDOWN, "value"),
                PropertyRef::new(PAYLOAD_SLIDER, "value"),
            ],
            PropertyRef::new(SUCCESS_PAYLOAD_SCATTER_CHART, "figure"),
            update_scatter_chart,
        );
        registry
    }

    /// Bind `handler` to `output`. A later registration for the same output
    /// replaces the earlier one.
    pub fn register(&mut self, inputs: Vec<PropertyRef>, output: PropertyRef, handler: Handler) {
        self.callbacks.retain(|c| c.output != output);
        self.callbacks.push(Callback {
            inputs,
            output,
            handler,
        });
    }

    pub fn dependencies(&self) -> Vec<Dependency> {
        self.callbacks
            .iter()
            .map(|c| Dependency {
                inputs: c.inputs.clone(),
                output: c.output.clone(),
            })
            .collect()
    }

    /// Outputs that depend on `input`, in registration order.
    pub fn outputs_for(&self, input: &PropertyRef) -> Vec<&PropertyRef> {
        self.callbacks
            .iter()
            .filter(|c| c.inputs.contains(input))
            .map(|c| &c.output)
            .collect()
    }

    /// Check that every property the table references names a component in
    /// `layout`.
    pub fn validate(&self, layout: &Component) -> Result<()> {
        for callback in &self.callbacks {
            for property in callback.inputs.iter().chain(std::iter::once(&callback.output)) {
                if layout.find(&property.id).is_none() {
                    return Err(DashboardError::Config(format!(
                        "callback for {} references unknown component `{}`",
                        callback.output, property.id
                    )));
                }
            }
        }
        Ok(())
    }

    /// Recompute `output` from the posted input values.
    ///
    /// Values are matched to the registered inputs by id and property; extra
    /// values are ignored.
    pub fn dispatch(
        &self,
        table: &LaunchTable,
        output: &PropertyRef,
        inputs: &[InputValue],
    ) -> Result<Figure> {
        let callback = self
            .callbacks
            .iter()
            .find(|c| &c.output == output)
            .ok_or_else(|| DashboardError::UnknownOutput(output.to_string()))?;

        let _span = tracing::debug_span!("recompute", output = %output).entered();

        let values = callback
            .inputs
            .iter()
            .map(|wanted| {
                inputs
                    .iter()
                    .find(|v| v.id == wanted.id && v.property == wanted.property)
                    .map(|v| &v.value)
                    .ok_or_else(|| {
                        DashboardError::InvalidInput(format!("missing value for {}", wanted))
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        let figure = (callback.handler)(table, &values)?;
        tracing::debug!("Recomputed {} ({})", output, figure.title());
        Ok(figure)
    }
}

fn decode<T: DeserializeOwned>(value: &Value, name: &str) -> Result<T> {
    T::deserialize(value)
        .map_err(|e| DashboardError::InvalidInput(format!("invalid value for {}: {}", name, e)))
}

fn update_pie_chart(table: &LaunchTable, values: &[&Value]) -> Result<Figure> {
    let site: SiteSelection = decode(values[0], SITE_DROPDOWN)?;
    Ok(charts::pie(&compute_outcome_breakdown(table, &site)))
}

fn update_scatter_chart(table: &LaunchTable, values: &[&Value]) -> Result<Figure> {
    let site: SiteSelection = decode(values[0], SITE_DROPDOWN)?;
    let range: PayloadRange = decode(values[1], PAYLOAD_SLIDER)?;
    Ok(charts::scatter(&compute_payload_correlation(table, &site, &range)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::layout::build_layout;
    use crate::models::{LaunchRecord, OutcomeClass};
    use serde_json::json;

    fn table() -> LaunchTable {
        let record = |site: &str, payload: f64, class: OutcomeClass| LaunchRecord {
            flight_number: None,
            launch_site: site.to_string(),
            payload_mass_kg: payload,
            booster_version: None,
            booster_version_category: "FT".to_string(),
            outcome_class: class,
        };
        LaunchTable::new(vec![
            record("CCAFS LC-40", 500.0, OutcomeClass::Failure),
            record("KSC LC-39A", 3000.0, OutcomeClass::Success),
        ])
    }

    fn input(id: &str, value: Value) -> InputValue {
        InputValue {
            id: id.to_string(),
            property: "value".to_string(),
            value,
        }
    }

    #[test]
    fn property_ref_parses_wire_form() {
        let parsed: PropertyRef = "success-pie-chart.figure".parse().unwrap();
        assert_eq!(parsed, PropertyRef::new(SUCCESS_PIE_CHART, "figure"));
        assert_eq!(parsed.to_string(), "success-pie-chart.figure");
        assert!("no-property".parse::<PropertyRef>().is_err());
    }

    #[test]
    fn dashboard_callbacks_reference_layout_components() {
        let layout = build_layout(&table(), &LayoutConfig::default());
        assert!(CallbackRegistry::dashboard().validate(&layout).is_ok());
    }

    #[test]
    fn callback_on_missing_component_is_a_config_error() {
        let mut registry = CallbackRegistry::dashboard();
        registry.register(
            vec![PropertyRef::new("launch-year-dropdown", "value")],
            PropertyRef::new(SUCCESS_PIE_CHART, "figure"),
            update_pie_chart,
        );
        let layout = build_layout(&table(), &LayoutConfig::default());
        assert!(matches!(registry.validate(&layout), Err(DashboardError::Config(_))));
    }

    #[test]
    fn dropdown_drives_both_charts() {
        let registry = CallbackRegistry::dashboard();
        let outputs = registry.outputs_for(&PropertyRef::new(SITE_DROPDOWN, "value"));
        assert_eq!(outputs.len(), 2);

        let outputs = registry.outputs_for(&PropertyRef::new(PAYLOAD_SLIDER, "value"));
        assert_eq!(outputs, vec![&PropertyRef::new(SUCCESS_PAYLOAD_SCATTER_CHART, "figure")]);
    }

    #[test]
    fn dispatches_pie_for_selected_site() {
        let registry = CallbackRegistry::dashboard();
        let figure = registry
            .dispatch(
                &table(),
                &PropertyRef::new(SUCCESS_PIE_CHART, "figure"),
                &[input(SITE_DROPDOWN, json!("KSC LC-39A"))],
            )
            .unwrap();
        assert_eq!(figure.title(), "Success vs. Failure for KSC LC-39A");
    }

    #[test]
    fn dispatches_scatter_with_range() {
        let registry = CallbackRegistry::dashboard();
        let figure = registry
            .dispatch(
                &table(),
                &PropertyRef::new(SUCCESS_PAYLOAD_SCATTER_CHART, "figure"),
                &[
                    input(PAYLOAD_SLIDER, json!([0, 1000])),
                    input(SITE_DROPDOWN, json!("ALL")),
                ],
            )
            .unwrap();
        assert_eq!(figure.title(), "Payload vs. Success for All Sites");
        assert_eq!(figure.data.len(), 1);
    }

    #[test]
    fn unknown_output_is_reported() {
        let registry = CallbackRegistry::dashboard();
        let err = registry
            .dispatch(&table(), &PropertyRef::new("nope", "figure"), &[])
            .unwrap_err();
        assert!(matches!(err, DashboardError::UnknownOutput(_)));
    }

    #[test]
    fn missing_input_is_invalid() {
        let registry = CallbackRegistry::dashboard();
        let err = registry
            .dispatch(
                &table(),
                &PropertyRef::new(SUCCESS_PAYLOAD_SCATTER_CHART, "figure"),
                &[input(SITE_DROPDOWN, json!("ALL"))],
            )
            .unwrap_err();
        assert!(matches!(err, DashboardError::InvalidInput(_)));
    }

    #[test]
    fn later_registration_replaces_earlier() {
        let mut registry = CallbackRegistry::dashboard();
        registry.register(
            vec![PropertyRef::new(SITE_DROPDOWN, "value")],
            PropertyRef::new(SUCCESS_PIE_CHART, "figure"),
            update_pie_chart,
        );
        assert_eq!(registry.dependencies().len(), 2);
    }
}
