use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Country name to an ordered list of flag colours or flag symbols.
pub type FlagTable = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryName {
    pub common: String,
    #[serde(default)]
    pub official: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlagImages {
    #[serde(default)]
    pub svg: Option<String>,
    #[serde(default)]
    pub png: Option<String>,
}

/// Country metadata in the shape of the public countries reference dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: CountryName,
    #[serde(default)]
    pub borders: Vec<String>,
    /// Keyed by language code, so the first entry is stable across data releases.
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
    #[serde(default)]
    pub flags: FlagImages,
}

impl Country {
    pub fn new(common: &str) -> Self {
        Self {
            name: CountryName {
                common: common.to_string(),
                official: None,
            },
            ..Default::default()
        }
    }

    pub fn common_name(&self) -> &str {
        &self.name.common
    }

    pub fn first_language(&self) -> Option<&str> {
        self.languages.values().next().map(String::as_str)
    }

    pub fn matches(&self, country: &str) -> bool {
        self.name.common.to_lowercase() == country.to_lowercase()
    }
}
