use dex_core::{NodeView, SpeciesId};
use serde::{Deserialize, Serialize};

/// A favorited species. Identity is `id`; two entries with the same id are
/// the same favorite whatever their names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub id: SpeciesId,
    pub name: String,
    #[serde(rename = "url")]
    pub canonical_url: String,
}

impl FavoriteEntry {
    pub fn new(id: SpeciesId, name: impl Into<String>, canonical_url: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            canonical_url: canonical_url.into(),
        }
    }

    /// Entry pointing at `{api_base}/pokemon/{name}/`.
    pub fn for_species(id: SpeciesId, name: &str, api_base: &str) -> Self {
        let canonical_url = format!("{}/pokemon/{}/", api_base.trim_end_matches('/'), name);
        Self::new(id, name, canonical_url)
    }

    pub fn from_view(view: &NodeView, api_base: &str) -> Self {
        Self::for_species(view.id, &view.name, api_base)
    }
}
