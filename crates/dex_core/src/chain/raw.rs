use serde::{Deserialize, Serialize};

use crate::error::{ChainError, Result};
use crate::models::NamedResource;

/// One condition record on an evolution edge.
///
/// The API sends many more keys (`gender`, `time_of_day`, ...); only the
/// three the formatter understands are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTrigger {
    #[serde(default)]
    pub min_level: Option<u32>,
    #[serde(default)]
    pub item: Option<NamedResource>,
    #[serde(default)]
    pub trigger: Option<NamedResource>,
}

impl RawTrigger {
    pub fn level(min_level: u32) -> Self {
        Self {
            min_level: Some(min_level),
            ..Self::default()
        }
    }

    pub fn item(name: impl Into<String>) -> Self {
        Self {
            item: Some(NamedResource::new(name, "")),
            ..Self::default()
        }
    }

    pub fn named(trigger: impl Into<String>) -> Self {
        Self {
            trigger: Some(NamedResource::new(trigger, "")),
            ..Self::default()
        }
    }
}

/// A species in the chain tree. `evolution_details` describes the edge from
/// the parent into this node and is empty for the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawChainNode {
    pub species: NamedResource,
    #[serde(default)]
    pub evolution_details: Vec<RawTrigger>,
    #[serde(default)]
    pub evolves_to: Vec<RawChainNode>,
}

impl RawChainNode {
    pub fn new(species: NamedResource) -> Self {
        Self {
            species,
            evolution_details: Vec::new(),
            evolves_to: Vec::new(),
        }
    }

    pub fn with_trigger(mut self, trigger: RawTrigger) -> Self {
        self.evolution_details.push(trigger);
        self
    }

    pub fn with_child(mut self, child: RawChainNode) -> Self {
        self.evolves_to.push(child);
        self
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.evolves_to.iter().map(RawChainNode::node_count).sum::<usize>()
    }
}

/// `GET evolution-chain/{id}/`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvolutionChainResponse {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub chain: Option<RawChainNode>,
}

impl EvolutionChainResponse {
    pub fn root(&self) -> Result<&RawChainNode> {
        self.chain
            .as_ref()
            .ok_or_else(|| ChainError::MalformedNode("evolution chain has no root".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_api_chain_payload() {
        let response: EvolutionChainResponse = serde_json::from_value(serde_json::json!({
            "id": 1,
            "baby_trigger_item": null,
            "chain": {
                "is_baby": false,
                "species": { "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon-species/1/" },
                "evolution_details": [],
                "evolves_to": [{
                    "is_baby": false,
                    "species": { "name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon-species/2/" },
                    "evolution_details": [{
                        "gender": null,
                        "item": null,
                        "min_level": 16,
                        "time_of_day": "",
                        "trigger": { "name": "level-up", "url": "https://pokeapi.co/api/v2/evolution-trigger/1/" }
                    }],
                    "evolves_to": []
                }]
            }
        }))
        .unwrap();

        let root = response.root().unwrap();
        assert_eq!(root.species.name, "bulbasaur");
        assert_eq!(root.node_count(), 2);
        let edge = &root.evolves_to[0].evolution_details[0];
        assert_eq!(edge.min_level, Some(16));
        assert!(edge.item.is_none());
        assert_eq!(edge.trigger.as_ref().map(|t| t.name.as_str()), Some("level-up"));
    }

    #[test]
    fn missing_chain_is_malformed() {
        let response: EvolutionChainResponse =
            serde_json::from_value(serde_json::json!({ "id": 9 })).unwrap();
        assert!(matches!(response.root(), Err(ChainError::MalformedNode(_))));
    }
}
