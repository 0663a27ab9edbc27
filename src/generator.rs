use chrono::{NaiveDate, Utc};
use rand::Rng;

use crate::clues;
use crate::error::GenerationError;
use crate::models::{Challenge, City, Dataset, Difficulty, Seed, Tiers};

/// Builds challenge `challenge_number` from a dataset snapshot.
///
/// Every random choice (tier, city, clue 1 and a flag symbol when one is
/// needed) is drawn from one generator seeded by [`Seed::from_number`], so the
/// same number, snapshot and date always give the same challenge.
pub fn generate(
    challenge_number: u64,
    dataset: &Dataset,
    date: NaiveDate,
) -> Result<Challenge, GenerationError> {
    generate_with_location(challenge_number, dataset, date).map(|(challenge, _)| challenge)
}

/// [`generate`], also returning the chosen city's `(lat, lng)`.
///
/// The dataset may hold several cities with the answer's name, so callers
/// that need the target's position must take it from here.
#[tracing::instrument(
    name = "Generating challenge",
    skip(dataset),
    fields(cities = dataset.cities.len())
)]
pub fn generate_with_location(
    challenge_number: u64,
    dataset: &Dataset,
    date: NaiveDate,
) -> Result<(Challenge, (f64, f64)), GenerationError> {
    let seed = Seed::from_number(challenge_number);
    let mut rng = seed.rng();

    let tiers = Tiers::partition(&dataset.cities);
    let level = Difficulty::ALL[rng.random_range(0..Difficulty::ALL.len())];
    let candidates = tiers.get(level);

    if candidates.is_empty() {
        tracing::warn!("No locations found for level {}", level.display_name());
        return Err(GenerationError::EmptyTier(level));
    }

    let start = rng.random_range(0..candidates.len());
    let Some((city, (lat, lng))) = find_located(candidates, start) else {
        tracing::warn!(
            "Could not find a valid location among {} {} cities",
            candidates.len(),
            level.display_name()
        );
        return Err(GenerationError::NoValidLocation(level));
    };

    let country = dataset.find_country(&city.country);
    if country.is_none() {
        tracing::debug!("No country metadata for '{}'", city.country);
    }

    let clues = [
        clues::position_clue(&mut rng, lat, lng),
        clues::compass_clue(lat, lng),
        clues::border_clue(country),
        clues::flag_clue(&mut rng, country, dataset),
        clues::language_clue(country),
    ];

    tracing::info!(level = level.display_name(), "Challenge {} generated", seed.as_str());

    let challenge = Challenge::new(
        seed.challenge_id(),
        date,
        level,
        &city.name,
        &city.country,
        clues,
    );
    Ok((challenge, (lat, lng)))
}

/// [`generate`] dated with the current UTC day.
pub fn generate_today(challenge_number: u64, dataset: &Dataset) -> Result<Challenge, GenerationError> {
    generate(challenge_number, dataset, Utc::now().date_naive())
}

/// Walks forward from `start`, wrapping once, to the first city with usable coordinates.
fn find_located<'a>(candidates: &[&'a City], start: usize) -> Option<(&'a City, (f64, f64))> {
    let len = candidates.len();
    (0..len)
        .map(|offset| candidates[(start + offset) % len])
        .find_map(|city| city.coordinates().map(|coords| (city, coords)))
}

#[cfg(test)]
mod tests {
    use claims::{assert_err, assert_ok};

    use super::*;
    use crate::models::{challenge::answer_length, Country};

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 5).unwrap()
    }

    fn world() -> Dataset {
        let mut japan = Country::new("Japan");
        japan.languages.insert("jpn".into(), "Japanese".into());
        let mut france = Country::new("France");
        france.borders = ["AND", "BEL", "DEU", "ITA", "LUX", "MCO", "ESP", "CHE"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        france.languages.insert("fra".into(), "French".into());

        let mut dataset = Dataset {
            cities: vec![
                City::new("Tokyo", "35.6897", "139.6922", "Japan", "37732000"),
                City::new("Paris", "48.8567", "2.3522", "France", "11060000"),
                City::new("Osaka", "34.6939", "135.5022", "Japan", "2689000"),
                City::new("Lyon", "45.76", "4.84", "France", "1748000"),
                City::new("Nice", "43.7034", "7.2663", "France", "342669"),
                City::new("Sapporo", "43.0621", "141.3544", "Japan", "1952000"),
                City::new("Port-au-Prince", "18.5425", "-72.3386", "Haiti", "987310"),
            ],
            countries: vec![japan, france],
            ..Default::default()
        };
        dataset
            .flag_colors
            .insert("France".into(), vec!["blue".into(), "white".into(), "red".into()]);
        dataset.flag_symbols.insert("Japan".into(), vec!["red sun".into()]);
        dataset
    }

    #[test]
    fn test_deterministic() {
        let dataset = world();
        for number in 1..=40 {
            let first = generate(number, &dataset, day());
            let second = generate(number, &dataset, day());
            assert_eq!(first, second);
            if let (Ok(a), Ok(b)) = (first, second) {
                assert_eq!(
                    serde_json::to_string(&a).unwrap(),
                    serde_json::to_string(&b).unwrap()
                );
            }
        }
    }

    #[test]
    fn test_every_tier_populated_always_succeeds() {
        let dataset = world();
        for number in 1..=60 {
            let challenge = assert_ok!(generate(number, &dataset, day()));
            assert_eq!(challenge.id, number);
            assert_eq!(challenge.date, day());
            assert_eq!(challenge.answer_length, answer_length(&challenge.answer));
            assert_eq!(challenge.clues.len(), 5);

            let city = dataset
                .cities
                .iter()
                .find(|c| c.name == challenge.answer)
                .unwrap();
            assert_eq!(
                Difficulty::from_population(city.eligible_population().unwrap()),
                challenge.level
            );
        }
    }

    #[test]
    fn test_clues_use_country_data() {
        let dataset = world();
        let challenge = (1..=200)
            .filter_map(|n| generate(n, &dataset, day()).ok())
            .find(|c| c.answer == "Paris")
            .expect("some number should pick Paris");

        assert_eq!(challenge.clues[1], "Your treasure lies in the cold northern realms.");
        assert_eq!(
            challenge.clues[2],
            "The land you're seeking is surrounded by 8 neighboring lands."
        );
        assert_eq!(challenge.clues[3], "Hoist the flag with colors of blue, white, red.");
        assert_eq!(
            challenge.clues[4],
            "The local tongue traces back to the French language family."
        );
        assert_eq!(
            challenge.fact,
            "👑 The treasure is located in the city of Paris in France."
        );
    }

    #[test]
    fn test_flag_symbol_drawn_when_no_colors() {
        let dataset = world();
        let challenge = (1..=200)
            .filter_map(|n| generate(n, &dataset, day()).ok())
            .find(|c| c.answer == "Tokyo")
            .expect("some number should pick Tokyo");

        assert_eq!(challenge.clues[3], "Look for the flag bearing the red sun.");
        assert_eq!(
            challenge.clues[2],
            "The land you seek stands alone with no neighboring countries."
        );
    }

    fn lima_only() -> Dataset {
        Dataset {
            cities: vec![City::new("Lima", "-12.0", "-77.0", "Peru", "9000000")],
            ..Default::default()
        }
    }

    fn assert_lima_fallbacks(challenge: &Challenge) {
        assert_eq!(challenge.level, Difficulty::Easy);
        assert_eq!(challenge.answer, "Lima");
        assert_eq!(challenge.answer_length, 4);
        assert_eq!(
            challenge.clues[1],
            "Your treasure lies somewhere in the temperate zones."
        );
        assert_eq!(
            challenge.clues[2],
            "The land you seek stands alone with no neighboring countries."
        );
        assert_eq!(
            challenge.clues[3],
            "The flag bears unique symbols known to the locals."
        );
        assert_eq!(challenge.clues[4], "The local tongue holds ancient secrets.");
    }

    #[test]
    fn test_challenge_five_with_single_city() {
        // Replay the draws generate makes: tier, city, then the clue 1 coin.
        let mut rng = Seed::from_number(5).rng();
        let level = Difficulty::ALL[rng.random_range(0..Difficulty::ALL.len())];
        let result = generate(5, &lima_only(), day());

        if level != Difficulty::Easy {
            assert_eq!(result, Err(GenerationError::EmptyTier(level)));
            return;
        }

        let _city = rng.random_range(0..1usize);
        let expected_position = if rng.random_bool(0.5) {
            "Sail to the 12.0° south."
        } else {
            "Head towards 77.0° west."
        };

        let challenge = assert_ok!(result);
        assert_eq!(challenge.id, 5);
        assert_eq!(challenge.clues[0], expected_position);
        assert_lima_fallbacks(&challenge);
    }

    #[test]
    fn test_single_city_easy_tier() {
        let dataset = lima_only();
        let challenge = (1..=100)
            .find_map(|n| generate(n, &dataset, day()).ok())
            .expect("some number should draw the Easy tier");

        assert!(
            challenge.clues[0] == "Sail to the 12.0° south."
                || challenge.clues[0] == "Head towards 77.0° west."
        );
        assert_lima_fallbacks(&challenge);
    }

    #[test]
    fn test_location_is_the_chosen_city() {
        let dataset = Dataset {
            cities: vec![
                City::new("Portland", "45.5", "-122.6", "United States", "2074775"),
                City::new("Portland", "43.66", "-70.25", "United States", "68408"),
            ],
            ..Default::default()
        };

        let (challenge, location) = (1..=100)
            .filter_map(|n| generate_with_location(n, &dataset, day()).ok())
            .find(|(c, _)| c.level == Difficulty::Hard)
            .expect("some number should draw the Hard tier");

        assert_eq!(challenge.answer, "Portland");
        assert_eq!(location, (43.66, -70.25));
    }

    #[test]
    fn test_empty_tier_is_an_error() {
        let dataset = Dataset::default();
        let err = assert_err!(generate(1, &dataset, day()));
        assert!(matches!(err, GenerationError::EmptyTier(_)));
    }

    #[test]
    fn test_tier_without_coordinates_is_an_error() {
        let dataset = Dataset {
            cities: vec![
                City::new("Ghost", "n/a", "10.0", "Nowhere", "9000000"),
                City::new("Mirage", "10.0", "?", "Nowhere", "2000000"),
                City::new("Atlantis", "-", "-", "Nowhere", "500"),
            ],
            ..Default::default()
        };

        for number in 1..=20 {
            let err = assert_err!(generate(number, &dataset, day()));
            assert!(matches!(err, GenerationError::NoValidLocation(_)));
        }
    }

    #[test]
    fn test_skips_past_unusable_coordinates() {
        let dataset = Dataset {
            cities: vec![
                City::new("Ghost", "n/a", "10.0", "Nowhere", "9000000"),
                City::new("Lagos", "6.45", "3.4", "Nigeria", "9000000"),
                City::new("Mirage", "10.0", "?", "Nowhere", "9000000"),
            ],
            ..Default::default()
        };

        let challenge = (1..=100)
            .find_map(|n| generate(n, &dataset, day()).ok())
            .expect("some number should draw the Easy tier");
        assert_eq!(challenge.answer, "Lagos");
    }

    #[test]
    fn test_find_located_wraps() {
        let a = City::new("A", "x", "1", "Z", "1");
        let b = City::new("B", "1", "2", "Z", "1");
        let c = City::new("C", "x", "1", "Z", "1");
        let candidates = vec![&a, &b, &c];

        let (city, coords) = find_located(&candidates, 2).unwrap();
        assert_eq!(city.name, "B");
        assert_eq!(coords, (1.0, 2.0));
        assert!(find_located(&[&a, &c], 1).is_none());
    }
}
