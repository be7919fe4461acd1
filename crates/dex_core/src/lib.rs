//! dex_core - Core types shared by every dex crate
//!
//! - `chain` - raw evolution chain tree, condition formatting and the resolver
//! - `models` - PokeAPI wire types for species, pokemon and catalog pages
//! - `catalog` - catalog entries and name search
//! - `detail` - display-ready species detail
//! - `config` / `paths` - configuration loading and on-disk locations

pub mod catalog;
pub mod chain;
pub mod config;
pub mod detail;
pub mod error;
pub mod models;
pub mod paths;
pub mod species;

pub use catalog::{filter_by_name, matches_query, CatalogEntry};
pub use chain::{
    format_conditions, ChainResolver, EvolutionChainResponse, NodeView, RawChainNode,
    RawTrigger, ResolvedChain, ResolvedNode, ResolvedSuccessor,
};
pub use config::DexConfig;
pub use detail::PokemonDetail;
pub use error::{ChainError, Result};
pub use models::NamedResource;
pub use species::{parse_species_id, sprite_url, SpeciesId};
