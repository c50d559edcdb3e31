use crate::models::vehicle::VehicleModel;
use indexmap::IndexSet;

/// Placeholder rendered when a model has no value for a spec row.
pub const MISSING_SPEC_MARKER: &str = "-";

/// One row of the comparison table: a spec name and one cell per model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRow {
    pub spec: String,
    /// One entry per column; `None` means the model lacks this spec.
    pub values: Vec<Option<String>>,
}

/// Side-by-side comparison of the selected models.
///
/// Rows are the union of all spec-entry names across the supplied models,
/// in first-encounter order: selection order first, then spec-group
/// declaration order, then entry order within a group. The order is stable
/// for a given selection and catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonTable {
    /// Display name per column, in selection order.
    pub columns: Vec<String>,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    /// Build the table from the resolved selection, in order.
    pub fn build(models: &[&VehicleModel]) -> Self {
        let mut spec_names: IndexSet<&str> = IndexSet::new();
        for model in models {
            for group in model.specs.values() {
                for name in group.keys() {
                    spec_names.insert(name.as_str());
                }
            }
        }

        let rows = spec_names
            .into_iter()
            .map(|spec| ComparisonRow {
                spec: spec.to_string(),
                values: models
                    .iter()
                    .map(|model| model.find_spec(spec).map(str::to_string))
                    .collect(),
            })
            .collect();

        Self {
            columns: models.iter().map(|model| model.name.clone()).collect(),
            rows,
        }
    }

    /// Cell text for display, substituting the missing marker.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.values.get(column))
            .and_then(|v| v.as_deref())
            .unwrap_or(MISSING_SPEC_MARKER)
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vehicle::BodyType;
    use indexmap::IndexMap;

    fn model_with_specs(id: &str, groups: &[(&str, &[(&str, &str)])]) -> VehicleModel {
        let mut specs = IndexMap::new();
        for (group, entries) in groups {
            let mut map = IndexMap::new();
            for (name, value) in *entries {
                map.insert(name.to_string(), value.to_string());
            }
            specs.insert(group.to_string(), map);
        }
        VehicleModel {
            id: id.to_string(),
            name: format!("Model {id}"),
            body_type: BodyType::Sedan,
            price: 40_000,
            range_km: 500,
            drivetrain: "AWD".to_string(),
            specs,
        }
    }

    #[test]
    fn test_rows_are_union_in_first_encounter_order() {
        let a = model_with_specs(
            "a",
            &[("performance", &[("Top Speed", "250 km/h"), ("Power", "450 kW")])],
        );
        let b = model_with_specs(
            "b",
            &[
                ("performance", &[("Top Speed", "210 km/h")]),
                ("features", &[("Seats", "5")]),
            ],
        );

        let table = ComparisonTable::build(&[&a, &b]);

        let row_names: Vec<&str> = table.rows.iter().map(|r| r.spec.as_str()).collect();
        assert_eq!(row_names, ["Top Speed", "Power", "Seats"]);
        assert_eq!(table.columns, ["Model a", "Model b"]);
    }

    #[test]
    fn test_missing_cells_use_marker() {
        let a = model_with_specs("a", &[("performance", &[("Power", "450 kW")])]);
        let b = model_with_specs("b", &[("features", &[("Seats", "7")])]);

        let table = ComparisonTable::build(&[&a, &b]);

        // "Power" row: present for a, missing for b
        assert_eq!(table.cell(0, 0), "450 kW");
        assert_eq!(table.cell(0, 1), MISSING_SPEC_MARKER);
        // "Seats" row: the other way around
        assert_eq!(table.cell(1, 0), MISSING_SPEC_MARKER);
        assert_eq!(table.cell(1, 1), "7");
    }

    #[test]
    fn test_row_order_is_stable_across_rebuilds() {
        let a = model_with_specs(
            "a",
            &[("range", &[("Range (WLTP)", "650 km"), ("Battery Capacity", "100 kWh")])],
        );
        let b = model_with_specs("b", &[("range", &[("Fast Charging", "22 minutes")])]);

        let first = ComparisonTable::build(&[&a, &b]);
        let second = ComparisonTable::build(&[&a, &b]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_selection_yields_empty_table() {
        let table = ComparisonTable::build(&[]);
        assert!(table.is_empty());
        assert!(table.rows.is_empty());
    }
}
