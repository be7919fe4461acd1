pub type SpeciesId = u32;

/// Extract the species id from a resource url such as
/// `https://pokeapi.co/api/v2/pokemon-species/25/`.
///
/// Returns `None` unless the last path segment is a positive integer.
pub fn parse_species_id(url: &str) -> Option<SpeciesId> {
    let segment = url.trim_end_matches('/').rsplit('/').next()?;
    match segment.parse::<SpeciesId>() {
        Ok(0) | Err(_) => None,
        Ok(id) => Some(id),
    }
}

pub fn sprite_url(sprite_base_url: &str, id: SpeciesId) -> String {
    format!("{}/{}.png", sprite_base_url.trim_end_matches('/'), id)
}
