use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::city::City;
use super::country::{Country, FlagTable};
use crate::error::DatasetError;

/// Immutable bundle of the reference data a challenge is generated from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub cities: Vec<City>,
    #[serde(default)]
    pub countries: Vec<Country>,
    #[serde(default)]
    pub flag_colors: FlagTable,
    #[serde(default)]
    pub flag_symbols: FlagTable,
}

impl Dataset {
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let content = fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| DatasetError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// First country whose common name matches, ignoring case.
    pub fn find_country(&self, name: &str) -> Option<&Country> {
        self.countries.iter().find(|c| c.matches(name))
    }

    /// First city whose letters match a guess after normalisation.
    pub fn find_city_by_letters(&self, letters: &str) -> Option<&City> {
        self.cities.iter().find(|c| c.letters() == letters)
    }

    pub fn flag_colors_for(&self, country: &str) -> &[String] {
        self.flag_colors.get(country).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn flag_symbols_for(&self, country: &str) -> &[String] {
        self.flag_symbols.get(country).map(Vec::as_slice).unwrap_or(&[])
    }
}
