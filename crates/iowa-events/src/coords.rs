use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

const IOWA_CITIES: &[(&str, f64, f64)] = &[
    ("Des Moines", 41.5868, -93.6250),
    ("Cedar Rapids", 41.9779, -91.6656),
    ("Davenport", 41.5236, -90.5776),
    ("Sioux City", 42.4963, -96.4049),
    ("Ankeny", 41.7318, -93.6001),
    ("Iowa City", 41.6611, -91.5302),
    ("West Des Moines", 41.5772, -93.7113),
    ("Ames", 42.0308, -93.6319),
    ("Waterloo", 42.4928, -92.3426),
    ("Council Bluffs", 41.2619, -95.8608),
    ("Dubuque", 42.5006, -90.6646),
    ("Urbandale", 41.6267, -93.7122),
    ("Cedar Falls", 42.5349, -92.4453),
    ("Marion", 42.0342, -91.5975),
    ("Bettendorf", 41.5503, -90.4857),
    ("Coralville", 41.6765, -91.5804),
    ("Altoona", 41.6442, -93.4647),
    ("Clear Lake", 43.1380, -93.3791),
    ("Pella", 41.4083, -92.9163),
    ("Indianola", 41.3578, -93.5572),
    ("Monticello", 42.2383, -91.1871),
    ("St. Charles", 41.2908, -93.8158),
    ("Dyersville", 42.4844, -91.1224),
    ("Grimes", 41.6883, -93.7911),
    ("Sioux Center", 43.0786, -96.1756),
    ("Fort Dodge", 42.4975, -94.1680),
    ("Elk Horn", 41.5944, -95.0672),
    ("Newton", 41.7000, -93.0480),
    ("Knoxville", 41.3208, -93.1010),
    ("Central City", 42.2036, -91.5268),
    ("Mason City", 43.1536, -93.2010),
    ("Polk City", 41.7711, -93.7130),
    ("Winterset", 41.3308, -94.0136),
    ("Moline", 41.5067, -90.5151),
];

static COORDINATE_TABLE: LazyLock<HashMap<&'static str, Coordinates>> = LazyLock::new(|| {
    IOWA_CITIES
        .iter()
        .map(|&(city, latitude, longitude)| {
            (
                city,
                Coordinates {
                    latitude,
                    longitude,
                },
            )
        })
        .collect()
});

/// Approximate centre of a known city. Matching is exact: no case folding or trimming.
pub fn coordinates_for(city: &str) -> Option<Coordinates> {
    COORDINATE_TABLE.get(city).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_city_resolves() {
        let coords = coordinates_for("Bettendorf").expect("Bettendorf should be known");
        assert_eq!(coords.latitude, 41.5503);
        assert_eq!(coords.longitude, -90.4857);
    }

    #[test]
    fn test_lookup_is_exact_match_only() {
        assert!(coordinates_for("bettendorf").is_none());
        assert!(coordinates_for(" Bettendorf").is_none());
        assert!(coordinates_for("Saint Charles").is_none());
        assert!(coordinates_for("St. Charles").is_some());
    }

    #[test]
    fn test_unknown_city_has_no_coordinates() {
        assert_eq!(coordinates_for("Across Iowa"), None);
        assert_eq!(coordinates_for(""), None);
    }

    #[test]
    fn test_table_has_no_duplicate_cities() {
        assert_eq!(COORDINATE_TABLE.len(), IOWA_CITIES.len());
    }
}
