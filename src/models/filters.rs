//! Filter buckets for the model grid.
//!
//! Each filter category holds exactly one active bucket at a time, with
//! `"all"` meaning no constraint. Bucket boundaries are inclusive on both
//! ends except where noted, mirroring the showroom filter chips:
//!
//! - range: `300-450`, `450-550`, `550+` (kilometers, inclusive)
//! - price: `under-35k` (exclusive upper), `35k-45k` (inclusive), `45k+`
//! - body type: exact match on the body style
//!
//! Unknown bucket values are treated as no constraint rather than an error;
//! the value set is closed and controlled by the presentation layer.

use crate::models::vehicle::{BodyType, VehicleModel};
use serde::{Deserialize, Serialize};

/// Filter category identifiers, one per filter chip row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterCategory {
    BodyType,
    Range,
    Price,
}

impl FilterCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterCategory::BodyType => "bodyType",
            FilterCategory::Range => "range",
            FilterCategory::Price => "price",
        }
    }
}

/// Body type filter bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyTypeFilter {
    #[default]
    All,
    Sedan,
    Suv,
    Hatchback,
    Coupe,
}

impl BodyTypeFilter {
    /// Parse a raw bucket value; unknown values pass everything through.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "sedan" => BodyTypeFilter::Sedan,
            "suv" => BodyTypeFilter::Suv,
            "hatchback" => BodyTypeFilter::Hatchback,
            "coupe" => BodyTypeFilter::Coupe,
            _ => BodyTypeFilter::All,
        }
    }

    pub fn matches(&self, body_type: BodyType) -> bool {
        match self {
            BodyTypeFilter::All => true,
            BodyTypeFilter::Sedan => body_type == BodyType::Sedan,
            BodyTypeFilter::Suv => body_type == BodyType::Suv,
            BodyTypeFilter::Hatchback => body_type == BodyType::Hatchback,
            BodyTypeFilter::Coupe => body_type == BodyType::Coupe,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BodyTypeFilter::All => "all",
            BodyTypeFilter::Sedan => "sedan",
            BodyTypeFilter::Suv => "suv",
            BodyTypeFilter::Hatchback => "hatchback",
            BodyTypeFilter::Coupe => "coupe",
        }
    }
}

/// Range filter bucket (kilometers, inclusive bounds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RangeBucket {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "300-450")]
    From300To450,
    #[serde(rename = "450-550")]
    From450To550,
    #[serde(rename = "550+")]
    Over550,
}

impl RangeBucket {
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "300-450" => RangeBucket::From300To450,
            "450-550" => RangeBucket::From450To550,
            "550+" => RangeBucket::Over550,
            _ => RangeBucket::All,
        }
    }

    pub fn matches(&self, range_km: u32) -> bool {
        match self {
            RangeBucket::All => true,
            RangeBucket::From300To450 => (300..=450).contains(&range_km),
            RangeBucket::From450To550 => (450..=550).contains(&range_km),
            RangeBucket::Over550 => range_km >= 550,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RangeBucket::All => "all",
            RangeBucket::From300To450 => "300-450",
            RangeBucket::From450To550 => "450-550",
            RangeBucket::Over550 => "550+",
        }
    }
}

/// Price filter bucket (whole currency units).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PriceBucket {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "under-35k")]
    Under35k,
    #[serde(rename = "35k-45k")]
    From35kTo45k,
    #[serde(rename = "45k+")]
    Over45k,
}

impl PriceBucket {
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "under-35k" => PriceBucket::Under35k,
            "35k-45k" => PriceBucket::From35kTo45k,
            "45k+" => PriceBucket::Over45k,
            _ => PriceBucket::All,
        }
    }

    pub fn matches(&self, price: u32) -> bool {
        match self {
            PriceBucket::All => true,
            PriceBucket::Under35k => price < 35_000,
            PriceBucket::From35kTo45k => (35_000..=45_000).contains(&price),
            PriceBucket::Over45k => price >= 45_000,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceBucket::All => "all",
            PriceBucket::Under35k => "under-35k",
            PriceBucket::From35kTo45k => "35k-45k",
            PriceBucket::Over45k => "45k+",
        }
    }
}

/// Active filter buckets, one per category. Defaults to all-`all`.
///
/// This is the persisted shape: the serialized mapping round-trips through
/// the preference store between sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub body_type: BodyTypeFilter,

    #[serde(default)]
    pub range: RangeBucket,

    #[serde(default)]
    pub price: PriceBucket,
}

impl FilterState {
    /// True iff the model satisfies every active category constraint.
    ///
    /// Pure function of `(model, self)`; a category set to `all` always
    /// passes.
    pub fn matches(&self, model: &VehicleModel) -> bool {
        self.body_type.matches(model.body_type)
            && self.range.matches(model.range_km)
            && self.price.matches(model.price)
    }

    /// Replace the active bucket for one category from its raw chip value.
    ///
    /// Returns the normalized value that was applied (unknown raw values
    /// normalize to `"all"`).
    pub fn set(&mut self, category: FilterCategory, raw: &str) -> &'static str {
        match category {
            FilterCategory::BodyType => {
                self.body_type = BodyTypeFilter::from_raw(raw);
                self.body_type.as_str()
            }
            FilterCategory::Range => {
                self.range = RangeBucket::from_raw(raw);
                self.range.as_str()
            }
            FilterCategory::Price => {
                self.price = PriceBucket::from_raw(raw);
                self.price.as_str()
            }
        }
    }

    /// True iff no category constrains anything.
    pub fn is_unconstrained(&self) -> bool {
        self.body_type == BodyTypeFilter::All
            && self.range == RangeBucket::All
            && self.price == PriceBucket::All
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(body_type: BodyType, price: u32, range_km: u32) -> VehicleModel {
        VehicleModel {
            id: "test".to_string(),
            name: "Test".to_string(),
            body_type,
            price,
            range_km,
            drivetrain: String::new(),
            specs: Default::default(),
        }
    }

    #[test]
    fn test_default_passes_everything() {
        let filters = FilterState::default();
        assert!(filters.is_unconstrained());
        assert!(filters.matches(&model(BodyType::Sedan, 29_990, 420)));
        assert!(filters.matches(&model(BodyType::Suv, 52_990, 580)));
    }

    #[test]
    fn test_range_buckets_inclusive_bounds() {
        let bucket = RangeBucket::from_raw("300-450");
        assert!(bucket.matches(300));
        assert!(bucket.matches(450));
        assert!(!bucket.matches(299));
        assert!(!bucket.matches(451));

        let bucket = RangeBucket::from_raw("450-550");
        assert!(bucket.matches(450));
        assert!(bucket.matches(550));
        assert!(!bucket.matches(551));

        let bucket = RangeBucket::from_raw("550+");
        assert!(bucket.matches(550));
        assert!(bucket.matches(1_000));
        assert!(!bucket.matches(549));
    }

    #[test]
    fn test_price_buckets() {
        let bucket = PriceBucket::from_raw("under-35k");
        assert!(bucket.matches(34_999));
        assert!(!bucket.matches(35_000));

        let bucket = PriceBucket::from_raw("35k-45k");
        assert!(bucket.matches(35_000));
        assert!(bucket.matches(45_000));
        assert!(!bucket.matches(45_001));

        let bucket = PriceBucket::from_raw("45k+");
        assert!(bucket.matches(45_000));
        assert!(!bucket.matches(44_999));
    }

    #[test]
    fn test_categories_combine_with_and() {
        let mut filters = FilterState::default();
        filters.set(FilterCategory::BodyType, "sedan");
        filters.set(FilterCategory::Price, "under-35k");

        // Sedan but too expensive
        assert!(!filters.matches(&model(BodyType::Sedan, 45_990, 650)));
        // Cheap but not a sedan
        assert!(!filters.matches(&model(BodyType::Hatchback, 29_990, 420)));
        // Both constraints satisfied
        assert!(filters.matches(&model(BodyType::Sedan, 32_500, 400)));
    }

    #[test]
    fn test_unknown_bucket_value_passes_through() {
        let mut filters = FilterState::default();
        let applied = filters.set(FilterCategory::Range, "900-1000");
        assert_eq!(applied, "all");
        assert!(filters.matches(&model(BodyType::Suv, 52_990, 120)));
    }

    #[test]
    fn test_all_clears_category() {
        let mut filters = FilterState::default();
        filters.set(FilterCategory::BodyType, "suv");
        assert!(!filters.matches(&model(BodyType::Sedan, 38_990, 520)));

        filters.set(FilterCategory::BodyType, "all");
        assert!(filters.matches(&model(BodyType::Sedan, 38_990, 520)));
    }

    #[test]
    fn test_filter_state_yaml_round_trip() {
        let mut filters = FilterState::default();
        filters.set(FilterCategory::Range, "450-550");
        filters.set(FilterCategory::Price, "35k-45k");

        let yaml = serde_yaml_ng::to_string(&filters).unwrap();
        assert!(yaml.contains("450-550"));
        assert!(yaml.contains("35k-45k"));

        let parsed: FilterState = serde_yaml_ng::from_str(&yaml).unwrap();
        assert_eq!(parsed, filters);
    }
}
