use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Grouped specification map: group name -> spec name -> display value.
///
/// Groups and entries keep their declaration order (`IndexMap`), which is
/// what the comparison table relies on for stable row ordering.
pub type SpecGroups = IndexMap<String, IndexMap<String, String>>;

/// Body style of a vehicle model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyType {
    Sedan,
    Suv,
    Hatchback,
    Coupe,
}

impl BodyType {
    /// Lowercase string form, matching the filter bucket values.
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyType::Sedan => "sedan",
            BodyType::Suv => "suv",
            BodyType::Hatchback => "hatchback",
            BodyType::Coupe => "coupe",
        }
    }
}

/// A single vehicle model as supplied by the catalog provider.
///
/// Immutable once loaded. `id` is the unique key used by filtering and
/// comparison selection; everything past `range_km` is descriptive data the
/// core passes through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleModel {
    pub id: String,
    pub name: String,
    pub body_type: BodyType,

    /// Base price in whole currency units.
    pub price: u32,

    /// WLTP range in kilometers.
    pub range_km: u32,

    #[serde(default)]
    pub drivetrain: String,

    /// Grouped spec sheet (performance, range, dimensions, features, ...).
    #[serde(default)]
    pub specs: SpecGroups,
}

impl VehicleModel {
    /// Look up a spec value by name across all groups, first match wins.
    pub fn find_spec(&self, spec_name: &str) -> Option<&str> {
        self.specs
            .values()
            .find_map(|group| group.get(spec_name).map(String::as_str))
    }
}
