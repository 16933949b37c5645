//! Location source: the list of selectable property locations.
//!
//! The list is requested once per page lifetime from the geography service.
//! Whatever goes wrong there (transport failure, bad status, malformed body,
//! empty list) the embedded fallback list is used instead, so callers always
//! receive a non-empty, sorted list and never see an error.

use std::collections::BTreeSet;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::transport::{CityDirectory, TransportError};

/// Country whose cities are offered.
pub const COUNTRY: &str = "India";

/// Cities offered when the geography service cannot be used. Kept sorted.
pub const FALLBACK_CITIES: [&str; 34] = [
    "Betul",
    "Bhind",
    "Bhopal",
    "Burhanpur",
    "Chhatarpur",
    "Chhindwara",
    "Damoh",
    "Datia",
    "Dewas",
    "Guna",
    "Gwalior",
    "Indore",
    "Itarsi",
    "Jabalpur",
    "Katni",
    "Khandwa",
    "Khargone",
    "Mandsaur",
    "Morena",
    "Nagda",
    "Narmadapuram",
    "Neemach",
    "Pithampur",
    "Ratlam",
    "Rewa",
    "Sagar",
    "Satna",
    "Sehore",
    "Seoni",
    "Shajapur",
    "Shivpuri",
    "Singrauli",
    "Ujjain",
    "Vidisha",
];

/// Body of the geography service request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitiesRequest {
    pub country: String,
}

impl Default for CitiesRequest {
    fn default() -> Self {
        Self {
            country: COUNTRY.to_string(),
        }
    }
}

/// Body of the geography service response. Only `data` is read.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CitiesResponse {
    #[serde(default)]
    pub data: Vec<String>,
}

pub fn fallback_cities() -> Vec<String> {
    let mut cities: Vec<String> = FALLBACK_CITIES.iter().map(|c| c.to_string()).collect();
    cities.sort();
    cities
}

/// Turns the outcome of the geography call into the list to display.
pub fn resolve_locations(outcome: Result<CitiesResponse, TransportError>) -> Vec<String> {
    match outcome {
        Ok(response) if !response.data.is_empty() => response
            .data
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect(),
        Ok(_) => {
            warn!("city API returned no cities, using fallback list");
            fallback_cities()
        }
        Err(err) => {
            warn!("city API failed, using fallback list: {err}");
            fallback_cities()
        }
    }
}

/// Queries `directory` for the cities of [`COUNTRY`] and resolves the result.
pub async fn load_locations<D: CityDirectory>(directory: &D) -> Vec<String> {
    resolve_locations(directory.cities(&CitiesRequest::default()).await)
}

/// Loading state of the location list as seen by the view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocationSource {
    loading: bool,
    locations: Vec<String>,
}

impl LocationSource {
    /// Marks the fetch as in flight. Returns `false` if a list was already
    /// resolved or a fetch is pending, so the fetch only runs once.
    pub fn begin(&mut self) -> bool {
        if self.loading || !self.locations.is_empty() {
            return false;
        }
        self.loading = true;
        true
    }

    pub fn resolve(&mut self, locations: Vec<String>) {
        self.locations = locations;
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    /// Text of the disabled first option of the location select.
    pub fn placeholder(&self) -> &'static str {
        if self.loading {
            "Loading cities…"
        } else {
            "Select Property Location"
        }
    }
}
