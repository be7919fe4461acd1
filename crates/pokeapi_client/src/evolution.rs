//! Chain lookup: species -> chain url -> chain tree -> resolved chain.

use dex_core::chain::EvolutionChainResponse;
use dex_core::{ChainError, ResolvedChain, SpeciesId};
use log::debug;

use crate::client::PokeApiClient;
use crate::error::ApiError;

fn unavailable(error: ApiError) -> ChainError {
    ChainError::Unavailable(error.to_string())
}

impl PokeApiClient {
    /// Resolve the evolution chain of `species_name`, focused on `focus`.
    ///
    /// The chain url comes from the species payload, so the two requests run
    /// one after the other. Either failing is `ChainError::Unavailable`; a
    /// tree that cannot be resolved is `ChainError::MalformedNode`.
    pub async fn evolution_chain(
        &self,
        species_name: &str,
        focus: SpeciesId,
    ) -> dex_core::Result<ResolvedChain> {
        let species = self.species(species_name).await.map_err(unavailable)?;
        let chain_url = species
            .evolution_chain
            .map(|chain| chain.url)
            .ok_or_else(|| {
                ChainError::Unavailable(format!("no evolution chain for {species_name}"))
            })?;

        let response: EvolutionChainResponse =
            self.fetch_json(&chain_url).await.map_err(unavailable)?;
        let chain = self.resolver().resolve_response(&response, focus)?;

        debug!(
            "Resolved chain {:?} for {}: {} nodes, current {:?}",
            response.id,
            species_name,
            chain.len(),
            chain.current().map(|node| node.id())
        );
        Ok(chain)
    }
}
