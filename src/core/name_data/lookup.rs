//! Reverse lookup from a generated name to its description.

use super::types::{find_entry, CharacterNameData, LocationNameData, NameData};

/// Placeholder shown when a name has no known description.
pub const NO_DESCRIPTION: &str = "No description available.";

/// Describe a generated name, or `None` if nothing in the dataset matches.
///
/// Character names are split at the first space; the first part is matched
/// against male then female first names and the rest against last names.
/// When both halves match the result is `"<first>. <last>."`. Location names
/// are matched whole against every pool in document order. With duplicate
/// names the first entry in pool order wins.
pub fn get_name_description(data: &NameData, name: &str) -> Option<String> {
    match data {
        NameData::Character(character) => describe_character_name(character, name),
        NameData::Location(location) => describe_location_name(location, name),
    }
}

fn describe_character_name(data: &CharacterNameData, name: &str) -> Option<String> {
    let (first_part, last_part) = match name.split_once(' ') {
        Some((first, last)) => (first, Some(last)),
        None => (name, None),
    };

    let first = data.all_first_names().find(|entry| entry.name == first_part);
    let last = last_part.and_then(|last| find_entry(&data.last_names, last));

    match (first, last) {
        (Some(first), Some(last)) => Some(format!("{}. {}.", first.description, last.description)),
        (Some(first), None) => Some(first.description.clone()),
        (None, Some(last)) => Some(last.description.clone()),
        (None, None) => None,
    }
}

fn describe_location_name(data: &LocationNameData, name: &str) -> Option<String> {
    data.pools()
        .find_map(|(_, pool)| find_entry(pool, name))
        .map(|entry| entry.description.clone())
}
