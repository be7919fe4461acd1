use serde::{Deserialize, Serialize};

use crate::models::{CatalogPage, NamedResource};
use crate::species::{parse_species_id, sprite_url, SpeciesId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: SpeciesId,
    pub name: String,
    pub url: String,
}

impl CatalogEntry {
    pub fn from_resource(resource: &NamedResource) -> Option<Self> {
        let id = parse_species_id(&resource.url)?;
        Some(Self {
            id,
            name: resource.name.clone(),
            url: resource.url.clone(),
        })
    }

    pub fn image_url(&self, sprite_base_url: &str) -> String {
        sprite_url(sprite_base_url, self.id)
    }
}

impl CatalogPage {
    /// Entries whose url carries no id are left out.
    pub fn entries(&self) -> Vec<CatalogEntry> {
        self.results
            .iter()
            .filter_map(CatalogEntry::from_resource)
            .collect()
    }
}

/// Case-insensitive substring match; an empty query matches everything.
pub fn matches_query(name: &str, query: &str) -> bool {
    query.is_empty() || name.to_lowercase().contains(&query.to_lowercase())
}

pub fn filter_by_name<'a>(entries: &'a [CatalogEntry], query: &str) -> Vec<&'a CatalogEntry> {
    entries
        .iter()
        .filter(|entry| matches_query(&entry.name, query))
        .collect()
}
