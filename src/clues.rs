use rand::Rng;

use crate::models::{Country, Dataset};

const POLAR_LATITUDE: f64 = 45.0;
const FAR_LONGITUDE: f64 = 90.0;
const FLAG_FALLBACK: &str = "The flag bears unique symbols known to the locals.";

/// Clue 1. One draw picks latitude (true) or longitude (false).
pub fn position_clue<R: Rng>(rng: &mut R, lat: f64, lng: f64) -> String {
    if rng.random_bool(0.5) {
        let direction = if lat >= 0.0 { "north" } else { "south" };
        format!("Sail to the {:.1}° {}.", lat.abs(), direction)
    } else {
        let direction = if lng >= 0.0 { "east" } else { "west" };
        format!("Head towards {:.1}° {}.", lng.abs(), direction)
    }
}

/// Clue 2. Depends only on the coordinates.
pub fn compass_clue(lat: f64, lng: f64) -> String {
    let band = if lat >= POLAR_LATITUDE {
        "in the cold northern realms"
    } else if lat <= -POLAR_LATITUDE {
        "in the icy southern lands"
    } else if lng.abs() >= FAR_LONGITUDE {
        "in the far east or west"
    } else {
        "somewhere in the temperate zones"
    };
    format!("Your treasure lies {}.", band)
}

/// Clue 3.
pub fn border_clue(country: Option<&Country>) -> String {
    match country.map(|c| c.borders.len()) {
        Some(count) if count > 0 => format!(
            "The land you're seeking is surrounded by {} neighboring lands.",
            count
        ),
        _ => "The land you seek stands alone with no neighboring countries.".to_string(),
    }
}

/// Clue 4. Colours first, then a drawn symbol, then the generic text.
/// The generator is only drawn from when a symbol list is used.
pub fn flag_clue<R: Rng>(rng: &mut R, country: Option<&Country>, dataset: &Dataset) -> String {
    let Some(country) = country else {
        return FLAG_FALLBACK.to_string();
    };

    let colors = dataset.flag_colors_for(country.common_name());
    if !colors.is_empty() {
        return format!("Hoist the flag with colors of {}.", colors.join(", "));
    }

    let symbols = dataset.flag_symbols_for(country.common_name());
    if symbols.is_empty() {
        return FLAG_FALLBACK.to_string();
    }

    let symbol = &symbols[rng.random_range(0..symbols.len())];
    format!("Look for the flag bearing the {}.", symbol)
}

/// Clue 5.
pub fn language_clue(country: Option<&Country>) -> String {
    match country.and_then(Country::first_language) {
        Some(language) => format!(
            "The local tongue traces back to the {} language family.",
            language
        ),
        None => "The local tongue holds ancient secrets.".to_string(),
    }
}
