//! Dealer directory lookup.
//!
//! Dealerships are grouped by city. Lookups are case-insensitive on the city
//! key and an unknown city yields an empty slice rather than an error, so a
//! stale city picker never breaks the page.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single dealership location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dealer {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub hours: String,
}

/// Dealerships grouped by lowercase city key, in display order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DealerDirectory {
    cities: IndexMap<String, Vec<Dealer>>,
}

impl DealerDirectory {
    pub fn new(cities: IndexMap<String, Vec<Dealer>>) -> Self {
        let cities = cities
            .into_iter()
            .map(|(city, dealers)| (city.to_lowercase(), dealers))
            .collect();
        Self { cities }
    }

    /// Dealers in `city`, empty for an unknown city.
    pub fn dealers_in(&self, city: &str) -> &[Dealer] {
        self.cities
            .get(&city.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// City keys in display order.
    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.cities.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

fn dealer(name: &str, address: &str, phone: &str, email: &str) -> Dealer {
    Dealer {
        name: name.to_string(),
        address: address.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        hours: "Mon-Fri 9AM-8PM, Sat-Sun 10AM-6PM".to_string(),
    }
}

/// The built-in VoltEdge dealer network.
pub fn default_directory() -> DealerDirectory {
    let mut cities = IndexMap::new();
    cities.insert(
        "toronto".to_string(),
        vec![
            dealer(
                "VoltEdge Toronto Downtown",
                "123 Bay Street, Toronto, ON M5H 2Y2",
                "(416) 555-0123",
                "toronto.downtown@voltedgemotors.com",
            ),
            dealer(
                "VoltEdge Toronto North",
                "456 Yonge Street, North York, ON M2N 5S8",
                "(416) 555-0124",
                "toronto.north@voltedgemotors.com",
            ),
        ],
    );
    cities.insert(
        "vancouver".to_string(),
        vec![dealer(
            "VoltEdge Vancouver",
            "789 Robson Street, Vancouver, BC V6Z 1A1",
            "(604) 555-0125",
            "vancouver@voltedgemotors.com",
        )],
    );
    cities.insert(
        "montreal".to_string(),
        vec![dealer(
            "VoltEdge Montreal",
            "321 Rue Sainte-Catherine, Montreal, QC H3B 1A6",
            "(514) 555-0126",
            "montreal@voltedgemotors.com",
        )],
    );
    cities.insert(
        "calgary".to_string(),
        vec![dealer(
            "VoltEdge Calgary",
            "654 8th Avenue SW, Calgary, AB T2P 1H4",
            "(403) 555-0127",
            "calgary@voltedgemotors.com",
        )],
    );
    cities.insert(
        "ottawa".to_string(),
        vec![dealer(
            "VoltEdge Ottawa",
            "987 Sparks Street, Ottawa, ON K1A 0A6",
            "(613) 555-0128",
            "ottawa@voltedgemotors.com",
        )],
    );
    cities.insert(
        "winnipeg".to_string(),
        vec![dealer(
            "VoltEdge Winnipeg",
            "147 Portage Avenue, Winnipeg, MB R3B 2E1",
            "(204) 555-0129",
            "winnipeg@voltedgemotors.com",
        )],
    );
    DealerDirectory { cities }
}
