use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_string_from_number;

/// One row of the world cities table, kept as text the way the table ships it.
///
/// Numeric columns may arrive as JSON strings or numbers. Missing columns are
/// empty and leave the city out of every tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    #[serde(default, alias = "city_ascii")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_string_from_number")]
    pub lat: String,
    #[serde(default, deserialize_with = "deserialize_string_from_number")]
    pub lng: String,
    #[serde(default)]
    pub country: String,
    #[serde(default, deserialize_with = "deserialize_string_from_number")]
    pub population: String,
}

impl City {
    pub fn new(name: &str, lat: &str, lng: &str, country: &str, population: &str) -> Self {
        Self {
            name: name.to_string(),
            lat: lat.to_string(),
            lng: lng.to_string(),
            country: country.to_string(),
            population: population.to_string(),
        }
    }

    /// Population for cities that may enter a difficulty tier.
    ///
    /// A city is eligible when name, latitude, longitude and population are all
    /// present and the population reads as a number. Fractional populations are
    /// truncated.
    pub fn eligible_population(&self) -> Option<u64> {
        let present = [&self.name, &self.lat, &self.lng, &self.population]
            .iter()
            .all(|field| !field.trim().is_empty());
        if !present {
            return None;
        }
        parse_population(&self.population)
    }

    /// Latitude and longitude, when both parse as finite numbers.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let lat = parse_finite(&self.lat)?;
        let lng = parse_finite(&self.lng)?;
        Some((lat, lng))
    }

    /// The name reduced to upper-case ASCII letters, as guesses are compared.
    pub fn letters(&self) -> String {
        normalize_letters(&self.name)
    }
}

pub fn normalize_letters(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

fn parse_finite(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_population(s: &str) -> Option<u64> {
    let value = parse_finite(s)?;
    if value < 0.0 {
        return None;
    }
    Some(value.trunc() as u64)
}
