/// Airport catalog offered by the planner front ends

use std::collections::HashMap;

use regex::Regex;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Airport {
    pub code: &'static str,
    pub city: &'static str,
    pub country: &'static str,
}

impl Airport {
    /// Display label, e.g. "Colombo, Sri Lanka (CMB)"
    pub fn label(&self) -> String {
        format!("{}, {} ({})", self.city, self.country, self.code)
    }
}

pub static AIRPORTS: &[Airport] = &[
    Airport { code: "CMB", city: "Colombo", country: "Sri Lanka" },
    Airport { code: "BOM", city: "Mumbai", country: "India" },
    Airport { code: "DEL", city: "Delhi", country: "India" },
    Airport { code: "BLR", city: "Bangalore", country: "India" },
    Airport { code: "MAA", city: "Chennai", country: "India" },
    Airport { code: "MEL", city: "Melbourne", country: "Australia" },
    Airport { code: "SYD", city: "Sydney", country: "Australia" },
    Airport { code: "LHR", city: "London", country: "UK" },
    Airport { code: "JFK", city: "New York", country: "USA" },
];

lazy_static::lazy_static! {
    static ref IATA_CODE: Regex = Regex::new(r"^[A-Z]{3}$").expect("static IATA pattern");
    static ref AIRPORTS_BY_CODE: HashMap<&'static str, &'static Airport> =
        AIRPORTS.iter().map(|airport| (airport.code, airport)).collect();
}

/// Look up a catalog airport by IATA code (case-insensitive)
pub fn find_airport(code: &str) -> Option<&'static Airport> {
    AIRPORTS_BY_CODE
        .get(code.trim().to_ascii_uppercase().as_str())
        .copied()
}

/// Three uppercase ASCII letters. Codes outside the catalog are still valid.
pub fn is_valid_iata(code: &str) -> bool {
    IATA_CODE.is_match(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_catalog_airport_ignoring_case() {
        let airport = find_airport("lhr").unwrap();
        assert_eq!(airport.city, "London");
        assert_eq!(airport.label(), "London, UK (LHR)");
        assert!(find_airport("XXX").is_none());
    }

    #[test]
    fn validates_iata_shape() {
        assert!(is_valid_iata("CMB"));
        assert!(is_valid_iata("CDG"));
        assert!(!is_valid_iata("cmb"));
        assert!(!is_valid_iata("CMBX"));
        assert!(!is_valid_iata(""));
    }
}
