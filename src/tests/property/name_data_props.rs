//! Property-based tests for name dataset sampling and lookup
//!
//! Tests invariants:
//! - Character batches have the requested size and "<first> <last>" shape
//! - Empty pools always yield empty batches
//! - Location batches only contain names from the requested pool
//! - Dispatch with options for the other dataset kind yields nothing
//! - The two discriminators always disagree
//! - Every generated name can be described

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::name_data::{
    generate_character_names, generate_location_names, generate_names, get_name_description,
    is_character_name_data, is_location_name_data, CharacterNameData, Gender, GenerateOptions,
    LocationCategory, LocationNameData, NameData, NameEntry,
};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

/// Names without spaces, so full names split back unambiguously
fn arb_name() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,10}"
}

fn arb_entry() -> impl Strategy<Value = NameEntry> {
    (arb_name(), "[A-Za-z .]{0,20}").prop_map(|(name, description)| NameEntry {
        name,
        description,
    })
}

fn arb_pool(min: usize) -> impl Strategy<Value = Vec<NameEntry>> {
    prop::collection::vec(arb_entry(), min..8)
}

fn arb_gender() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Male), Just(Gender::Female)]
}

fn arb_category() -> impl Strategy<Value = LocationCategory> {
    prop_oneof![
        Just(LocationCategory::City),
        Just(LocationCategory::District),
        Just(LocationCategory::Landmark),
        Just(LocationCategory::Region),
    ]
}

fn arb_character_data(min: usize) -> impl Strategy<Value = CharacterNameData> {
    (arb_pool(min), arb_pool(min), arb_pool(min))
        .prop_map(|(male, female, last_names)| CharacterNameData::new(male, female, last_names))
}

fn arb_location_data() -> impl Strategy<Value = LocationNameData> {
    prop::collection::vec((arb_category(), arb_pool(0)), 0..4).prop_map(|pools| {
        pools
            .into_iter()
            .fold(LocationNameData::new(), |data, (category, entries)| {
                data.with_pool(category, entries)
            })
    })
}

fn arb_name_data() -> impl Strategy<Value = NameData> {
    prop_oneof![
        arb_character_data(0).prop_map(NameData::Character),
        arb_location_data().prop_map(NameData::Location),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: non-empty character pools give exactly `count` well-formed names
    #[test]
    fn prop_character_names_have_count_and_shape(
        seed in any::<u64>(),
        data in arb_character_data(1),
        gender in arb_gender(),
        count in 0usize..40
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let names = generate_character_names(&data, gender, count, &mut rng);

        prop_assert_eq!(names.len(), count);
        for name in &names {
            let (first, last) = name.split_once(' ').expect("full name has a space");
            prop_assert!(data.first_names(gender).iter().any(|e| e.name == first));
            prop_assert!(data.last_names.iter().any(|e| e.name == last));
        }
    }

    /// Property: an empty contributing pool always yields an empty batch
    #[test]
    fn prop_empty_character_pool_yields_nothing(
        seed in any::<u64>(),
        pool in arb_pool(1),
        gender in arb_gender(),
        empty_last in any::<bool>(),
        count in 1usize..40
    ) {
        let data = if empty_last {
            CharacterNameData::new(pool.clone(), pool, Vec::new())
        } else {
            match gender {
                Gender::Male => CharacterNameData::new(Vec::new(), pool.clone(), pool),
                Gender::Female => CharacterNameData::new(pool.clone(), Vec::new(), pool),
            }
        };

        let mut rng = StdRng::seed_from_u64(seed);
        prop_assert!(generate_character_names(&data, gender, count, &mut rng).is_empty());
    }

    /// Property: location names come from the requested pool, or nothing when it is empty
    #[test]
    fn prop_location_names_from_pool(
        seed in any::<u64>(),
        data in arb_location_data(),
        category in arb_category(),
        count in 0usize..40
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let names = generate_location_names(&data, &category, count, &mut rng);

        match data.pool(&category) {
            Some(pool) if !pool.is_empty() => {
                prop_assert_eq!(names.len(), count);
                for name in &names {
                    prop_assert!(pool.iter().any(|e| &e.name == name));
                }
            }
            _ => prop_assert!(names.is_empty()),
        }
    }

    /// Property: the discriminators are exact complements
    #[test]
    fn prop_discriminators_complementary(data in arb_name_data()) {
        prop_assert_eq!(is_character_name_data(&data), !is_location_name_data(&data));
    }

    /// Property: options for the other dataset kind never generate anything
    #[test]
    fn prop_mismatched_options_yield_nothing(
        seed in any::<u64>(),
        data in arb_name_data(),
        gender in arb_gender(),
        category in arb_category(),
        count in 0usize..20
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let options = if is_character_name_data(&data) {
            GenerateOptions::for_category(category)
        } else {
            GenerateOptions::for_gender(gender)
        };

        prop_assert!(generate_names(&data, &options, count, &mut rng).is_empty());
    }

    /// Property: every generated character name has a description
    #[test]
    fn prop_generated_names_are_describable(
        seed in any::<u64>(),
        data in arb_character_data(1),
        gender in arb_gender()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let data = NameData::Character(data);
        let names = generate_names(&data, &GenerateOptions::for_gender(gender), 5, &mut rng);

        for name in &names {
            prop_assert!(get_name_description(&data, name).is_some());
        }
    }

    /// Property: datasets survive serialization to JSON unchanged
    #[test]
    fn prop_json_preserves_dataset(data in arb_name_data()) {
        let json = serde_json::to_string(&data).unwrap();
        let parsed: NameData = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(is_character_name_data(&parsed), is_character_name_data(&data));
        prop_assert_eq!(parsed, data);
    }
}
