use serde::{Deserialize, Serialize};

use crate::models::{PokemonApi, SpeciesApi};
use crate::species::SpeciesId;

const DISPLAY_LANGUAGE: &str = "en";
const NOT_AVAILABLE: &str = "N/A";

/// Display-ready species detail built from the pokemon and species payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonDetail {
    pub id: SpeciesId,
    pub name: String,
    pub image_url: Option<String>,
    /// Metres.
    pub height: f64,
    /// Kilograms.
    pub weight: f64,
    pub category: String,
    pub types: Vec<String>,
    pub abilities: Vec<String>,
    pub description: String,
}

impl PokemonDetail {
    pub fn from_api(pokemon: &PokemonApi, species: &SpeciesApi) -> Self {
        let category = species
            .genera
            .iter()
            .find(|g| g.language.name == DISPLAY_LANGUAGE)
            .map(|g| g.genus.clone())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        let description = species
            .flavor_text_entries
            .iter()
            .find(|entry| entry.language.name == DISPLAY_LANGUAGE)
            .map(|entry| entry.flavor_text.replace(['\n', '\x0c'], " "))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        Self {
            id: pokemon.id,
            name: pokemon.name.clone(),
            image_url: pokemon.sprites.front_default.clone(),
            height: f64::from(pokemon.height) / 10.0,
            weight: f64::from(pokemon.weight) / 10.0,
            category,
            types: pokemon
                .types
                .iter()
                .map(|slot| slot.kind.name.to_uppercase())
                .collect(),
            abilities: pokemon
                .abilities
                .iter()
                .map(|slot| slot.ability.name.replace('-', " ").to_uppercase())
                .collect(),
            description,
        }
    }
}
