//! Model catalog provider.
//!
//! The catalog is an ordered, read-only sequence of [`VehicleModel`] records
//! supplied at initialization. It is the single source the filter/comparison
//! manager resolves ids against; the core never mutates it.

use crate::models::{BodyType, SpecGroups, VehicleModel};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered, immutable vehicle model catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelCatalog {
    models: Vec<VehicleModel>,
}

impl ModelCatalog {
    /// Build a catalog from an ordered sequence of models.
    ///
    /// Later entries with a duplicate id are dropped with a warning; ids must
    /// be unique for selection and lookup to be well-defined.
    pub fn from_models(models: Vec<VehicleModel>) -> Self {
        let mut seen: IndexMap<String, VehicleModel> = IndexMap::new();
        for model in models {
            if seen.contains_key(&model.id) {
                tracing::warn!("Duplicate model id '{}' in catalog, keeping first", model.id);
                continue;
            }
            seen.insert(model.id.clone(), model);
        }
        Self {
            models: seen.into_values().collect(),
        }
    }

    pub fn get(&self, model_id: &str) -> Option<&VehicleModel> {
        self.models.iter().find(|m| m.id == model_id)
    }

    /// Resolve ids to records, preserving order and skipping unknown ids.
    pub fn resolve<I>(&self, ids: I) -> Vec<&VehicleModel>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        ids.into_iter().filter_map(|id| self.get(id.as_ref())).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VehicleModel> {
        self.models.iter()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

fn spec_group(entries: &[(&str, &str)]) -> IndexMap<String, String> {
    entries
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

fn spec_groups(groups: &[(&str, &[(&str, &str)])]) -> SpecGroups {
    groups
        .iter()
        .map(|(group, entries)| (group.to_string(), spec_group(entries)))
        .collect()
}

/// The factory VoltEdge line-up, used when no catalog file is present.
pub fn default_catalog() -> ModelCatalog {
    let models = vec![
        VehicleModel {
            id: "apex".to_string(),
            name: "VoltEdge Apex".to_string(),
            body_type: BodyType::Sedan,
            price: 45_990,
            range_km: 650,
            drivetrain: "AWD".to_string(),
            specs: spec_groups(&[
                (
                    "performance",
                    &[
                        ("Top Speed", "250 km/h"),
                        ("0-100 km/h", "3.2 seconds"),
                        ("Power", "450 kW"),
                        ("Torque", "850 Nm"),
                    ],
                ),
                (
                    "range",
                    &[
                        ("Range (WLTP)", "650 km"),
                        ("Battery Capacity", "100 kWh"),
                        ("Energy Consumption", "15.4 kWh/100km"),
                        ("Fast Charging", "18 minutes (10-80%)"),
                    ],
                ),
                (
                    "dimensions",
                    &[
                        ("Length", "4,970 mm"),
                        ("Width", "1,964 mm"),
                        ("Height", "1,445 mm"),
                        ("Weight", "2,108 kg"),
                    ],
                ),
                (
                    "features",
                    &[
                        ("Drivetrain", "All-Wheel Drive"),
                        ("Seats", "5"),
                        ("Cargo Space", "425 L"),
                        ("Warranty", "8 years / 160,000 km"),
                    ],
                ),
            ]),
        },
        VehicleModel {
            id: "pulse".to_string(),
            name: "VoltEdge Pulse".to_string(),
            body_type: BodyType::Sedan,
            price: 38_990,
            range_km: 520,
            drivetrain: "RWD".to_string(),
            specs: spec_groups(&[
                (
                    "performance",
                    &[
                        ("Top Speed", "210 km/h"),
                        ("0-100 km/h", "4.8 seconds"),
                        ("Power", "320 kW"),
                        ("Torque", "640 Nm"),
                    ],
                ),
                (
                    "range",
                    &[
                        ("Range (WLTP)", "520 km"),
                        ("Battery Capacity", "80 kWh"),
                        ("Energy Consumption", "15.8 kWh/100km"),
                        ("Fast Charging", "22 minutes (10-80%)"),
                    ],
                ),
                (
                    "dimensions",
                    &[
                        ("Length", "4,870 mm"),
                        ("Width", "1,850 mm"),
                        ("Height", "1,440 mm"),
                        ("Weight", "1,890 kg"),
                    ],
                ),
                (
                    "features",
                    &[
                        ("Drivetrain", "Rear-Wheel Drive"),
                        ("Seats", "5"),
                        ("Cargo Space", "405 L"),
                        ("Warranty", "8 years / 160,000 km"),
                    ],
                ),
            ]),
        },
        VehicleModel {
            id: "prime-suv".to_string(),
            name: "VoltEdge Prime SUV".to_string(),
            body_type: BodyType::Suv,
            price: 52_990,
            range_km: 580,
            drivetrain: "AWD".to_string(),
            specs: spec_groups(&[
                (
                    "performance",
                    &[
                        ("Top Speed", "200 km/h"),
                        ("0-100 km/h", "4.2 seconds"),
                        ("Power", "400 kW"),
                        ("Torque", "750 Nm"),
                    ],
                ),
                (
                    "range",
                    &[
                        ("Range (WLTP)", "580 km"),
                        ("Battery Capacity", "95 kWh"),
                        ("Energy Consumption", "16.4 kWh/100km"),
                        ("Fast Charging", "20 minutes (10-80%)"),
                    ],
                ),
                (
                    "dimensions",
                    &[
                        ("Length", "4,950 mm"),
                        ("Width", "1,970 mm"),
                        ("Height", "1,680 mm"),
                        ("Weight", "2,350 kg"),
                    ],
                ),
                (
                    "features",
                    &[
                        ("Drivetrain", "All-Wheel Drive"),
                        ("Seats", "7"),
                        ("Cargo Space", "645 L"),
                        ("Warranty", "8 years / 160,000 km"),
                    ],
                ),
            ]),
        },
        VehicleModel {
            id: "city".to_string(),
            name: "VoltEdge City".to_string(),
            body_type: BodyType::Hatchback,
            price: 29_990,
            range_km: 420,
            drivetrain: "FWD".to_string(),
            specs: spec_groups(&[
                (
                    "performance",
                    &[
                        ("Top Speed", "180 km/h"),
                        ("0-100 km/h", "6.8 seconds"),
                        ("Power", "200 kW"),
                        ("Torque", "400 Nm"),
                    ],
                ),
                (
                    "range",
                    &[
                        ("Range (WLTP)", "420 km"),
                        ("Battery Capacity", "60 kWh"),
                        ("Energy Consumption", "14.3 kWh/100km"),
                        ("Fast Charging", "25 minutes (10-80%)"),
                    ],
                ),
                (
                    "dimensions",
                    &[
                        ("Length", "4,285 mm"),
                        ("Width", "1,810 mm"),
                        ("Height", "1,550 mm"),
                        ("Weight", "1,680 kg"),
                    ],
                ),
                (
                    "features",
                    &[
                        ("Drivetrain", "Front-Wheel Drive"),
                        ("Seats", "5"),
                        ("Cargo Space", "385 L"),
                        ("Warranty", "8 years / 160,000 km"),
                    ],
                ),
            ]),
        },
    ];

    ModelCatalog::from_models(models)
}
