//! Type chart used to enrich type names for display.
//!
//! `strength` and `weakness` describe this type attacking (super effective,
//! not very effective or no effect). `resistance` and `vulnerable` describe
//! it defending (reduced or no damage taken, super effective damage taken).

use crate::models::{PokemonType, TypeMatchups};

const fn matchups(
    image: &'static str,
    strength: &'static [&'static str],
    weakness: &'static [&'static str],
    resistance: &'static [&'static str],
    vulnerable: &'static [&'static str],
) -> TypeMatchups {
    TypeMatchups {
        image,
        strength,
        weakness,
        resistance,
        vulnerable,
    }
}

/// All 18 types, alphabetical.
pub const TYPE_CHART: [(&str, TypeMatchups); 18] = [
    (
        "bug",
        matchups(
            "types/bug.svg",
            &["grass", "psychic", "dark"],
            &["fire", "fighting", "poison", "flying", "ghost", "steel", "fairy"],
            &["grass", "fighting", "ground"],
            &["fire", "flying", "rock"],
        ),
    ),
    (
        "dark",
        matchups(
            "types/dark.svg",
            &["psychic", "ghost"],
            &["fighting", "dark", "fairy"],
            &["ghost", "dark", "psychic"],
            &["fighting", "bug", "fairy"],
        ),
    ),
    (
        "dragon",
        matchups(
            "types/dragon.svg",
            &["dragon"],
            &["steel", "fairy"],
            &["fire", "water", "electric", "grass"],
            &["ice", "dragon", "fairy"],
        ),
    ),
    (
        "electric",
        matchups(
            "types/electric.svg",
            &["water", "flying"],
            &["electric", "grass", "dragon", "ground"],
            &["electric", "flying", "steel"],
            &["ground"],
        ),
    ),
    (
        "fairy",
        matchups(
            "types/fairy.svg",
            &["fighting", "dragon", "dark"],
            &["fire", "poison", "steel"],
            &["fighting", "bug", "dark", "dragon"],
            &["poison", "steel"],
        ),
    ),
    (
        "fighting",
        matchups(
            "types/fighting.svg",
            &["normal", "ice", "rock", "dark", "steel"],
            &["poison", "flying", "psychic", "bug", "fairy", "ghost"],
            &["bug", "rock", "dark"],
            &["flying", "psychic", "fairy"],
        ),
    ),
    (
        "fire",
        matchups(
            "types/fire.svg",
            &["grass", "ice", "bug", "steel"],
            &["fire", "water", "rock", "dragon"],
            &["fire", "grass", "ice", "bug", "steel", "fairy"],
            &["water", "ground", "rock"],
        ),
    ),
    (
        "flying",
        matchups(
            "types/flying.svg",
            &["grass", "fighting", "bug"],
            &["electric", "rock", "steel"],
            &["grass", "fighting", "bug", "ground"],
            &["electric", "ice", "rock"],
        ),
    ),
    (
        "ghost",
        matchups(
            "types/ghost.svg",
            &["psychic", "ghost"],
            &["dark", "normal"],
            &["poison", "bug", "normal", "fighting"],
            &["ghost", "dark"],
        ),
    ),
    (
        "grass",
        matchups(
            "types/grass.svg",
            &["water", "ground", "rock"],
            &["fire", "grass", "poison", "flying", "bug", "dragon", "steel"],
            &["water", "electric", "grass", "ground"],
            &["fire", "ice", "poison", "flying", "bug"],
        ),
    ),
    (
        "ground",
        matchups(
            "types/ground.svg",
            &["fire", "electric", "poison", "rock", "steel"],
            &["grass", "bug", "flying"],
            &["poison", "rock", "electric"],
            &["water", "grass", "ice"],
        ),
    ),
    (
        "ice",
        matchups(
            "types/ice.svg",
            &["grass", "ground", "flying", "dragon"],
            &["fire", "water", "ice", "steel"],
            &["ice"],
            &["fire", "fighting", "rock", "steel"],
        ),
    ),
    (
        "normal",
        matchups(
            "types/normal.svg",
            &[],
            &["rock", "steel", "ghost"],
            &["ghost"],
            &["fighting"],
        ),
    ),
    (
        "poison",
        matchups(
            "types/poison.svg",
            &["grass", "fairy"],
            &["poison", "ground", "rock", "ghost", "steel"],
            &["grass", "fighting", "poison", "bug", "fairy"],
            &["ground", "psychic"],
        ),
    ),
    (
        "psychic",
        matchups(
            "types/psychic.svg",
            &["fighting", "poison"],
            &["psychic", "steel", "dark"],
            &["fighting", "psychic"],
            &["bug", "ghost", "dark"],
        ),
    ),
    (
        "rock",
        matchups(
            "types/rock.svg",
            &["fire", "ice", "flying", "bug"],
            &["fighting", "ground", "steel"],
            &["normal", "fire", "poison", "flying"],
            &["water", "grass", "fighting", "ground", "steel"],
        ),
    ),
    (
        "steel",
        matchups(
            "types/steel.svg",
            &["ice", "rock", "fairy"],
            &["fire", "water", "electric", "steel"],
            &[
                "normal", "grass", "ice", "flying", "psychic", "bug", "rock", "dragon", "steel",
                "fairy", "poison",
            ],
            &["fire", "fighting", "ground"],
        ),
    ),
    (
        "water",
        matchups(
            "types/water.svg",
            &["fire", "ground", "rock"],
            &["water", "grass", "dragon"],
            &["fire", "water", "ice", "steel"],
            &["electric", "grass"],
        ),
    ),
];

/// Matchups for a type name, if it is one of the 18 known types.
pub fn lookup(name: &str) -> Option<TypeMatchups> {
    TYPE_CHART
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, matchups)| *matchups)
}

/// Pairs every name with its chart entry. Unknown names keep no matchups.
pub fn enrich(names: &[String]) -> Vec<PokemonType> {
    names
        .iter()
        .map(|name| PokemonType {
            name: name.clone(),
            matchups: lookup(name),
        })
        .collect()
}
