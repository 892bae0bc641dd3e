//! Selection engine: decides which launch records feed each chart.
//!
//! Both operations are pure functions of their inputs. The table is never
//! filtered in place; every result borrows from it in original order.

use crate::models::{LaunchTable, OutcomeCounts, PayloadRange, Selection, SiteSelection, Subset};

/// Records for the success/failure pie chart.
///
/// An unknown site yields an empty subset rather than an error.
pub fn compute_outcome_breakdown<'a>(
    table: &'a LaunchTable,
    selected_site: &SiteSelection,
) -> Selection<'a> {
    Selection {
        subset: site_subset(table, selected_site),
        title: format!("Success vs. Failure for {}", selected_site.label()),
    }
}

/// Records for the payload/outcome scatter chart: the site subset further
/// restricted to payloads inside the inclusive range.
pub fn compute_payload_correlation<'a>(
    table: &'a LaunchTable,
    selected_site: &SiteSelection,
    payload_range: &PayloadRange,
) -> Selection<'a> {
    let records = table
        .records()
        .iter()
        .filter(|r| selected_site.matches(r) && payload_range.contains(r.payload_mass_kg))
        .collect();

    Selection {
        subset: Subset::new(records),
        title: format!("Payload vs. Success for {}", selected_site.label()),
    }
}

/// Tally successes and failures over a subset.
pub fn outcome_counts(subset: &Subset<'_>) -> OutcomeCounts {
    subset
        .iter()
        .fold(OutcomeCounts::default(), |mut counts, record| {
            if record.outcome_class.is_success() {
                counts.successes += 1;
            } else {
                counts.failures += 1;
            }
            counts
        })
}

fn site_subset<'a>(table: &'a LaunchTable, selected_site: &SiteSelection) -> Subset<'a> {
    Subset::new(
        table
            .records()
            .iter()
            .filter(|r| selected_site.matches(r))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LaunchRecord, OutcomeClass};

    fn record(site: &str, payload: f64, success: bool) -> LaunchRecord {
        LaunchRecord {
            flight_number: None,
            launch_site: site.to_string(),
            payload_mass_kg: payload,
            booster_version: None,
            booster_version_category: "FT".to_string(),
            outcome_class: if success {
                OutcomeClass::Success
            } else {
                OutcomeClass::Failure
            },
        }
    }

    #[test]
    fn site_filter_preserves_table_order() {
        let table = LaunchTable::new(vec![
            record("A", 3.0, true),
            record("B", 1.0, true),
            record("A", 2.0, false),
        ]);

        let selection = compute_outcome_breakdown(&table, &SiteSelection::Site("A".into()));
        let payloads: Vec<f64> = selection.subset.iter().map(|r| r.payload_mass_kg).collect();
        assert_eq!(payloads, vec![3.0, 2.0]);
    }

    #[test]
    fn counts_successes_and_failures() {
        let table = LaunchTable::new(vec![
            record("A", 0.0, true),
            record("A", 0.0, false),
            record("A", 0.0, true),
        ]);

        let selection = compute_outcome_breakdown(&table, &SiteSelection::All);
        let counts = outcome_counts(&selection.subset);
        assert_eq!(counts, OutcomeCounts { successes: 2, failures: 1 });
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn spanning_range_keeps_every_payload() {
        let table = LaunchTable::new(vec![record("A", 0.0, true), record("B", 9600.0, false)]);
        let range = PayloadRange::spanning(&table);

        let selection = compute_payload_correlation(&table, &SiteSelection::All, &range);
        assert_eq!(selection.subset.len(), 2);
    }
}
