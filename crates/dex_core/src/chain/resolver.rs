//! Flattens a raw evolution tree into display-ready nodes anchored on the
//! species currently being viewed.

use serde::{Deserialize, Serialize};

use super::condition::format_conditions;
use super::raw::{EvolutionChainResponse, RawChainNode};
use crate::error::{ChainError, Result};
use crate::species::{parse_species_id, sprite_url, SpeciesId};

pub const DEFAULT_SPRITE_BASE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

/// Display fields of one chain entry, derived only from the raw node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeView {
    pub id: SpeciesId,
    pub name: String,
    pub image_url: String,
    pub can_evolve_further: bool,
    /// Conditions on the edge into this node; `"N/A"` for the root.
    pub evolution_details_text: String,
}

/// Successors are a one-level lookahead and never carry their own successors.
pub type ResolvedSuccessor = NodeView;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedNode {
    #[serde(flatten)]
    pub view: NodeView,
    pub is_current: bool,
    pub immediate_successors: Vec<ResolvedSuccessor>,
}

impl ResolvedNode {
    pub fn id(&self) -> SpeciesId {
        self.view.id
    }

    pub fn name(&self) -> &str {
        &self.view.name
    }

    pub fn successor(&self, id: SpeciesId) -> Option<&ResolvedSuccessor> {
        self.immediate_successors.iter().find(|s| s.id == id)
    }
}

/// Pre-order list of every node in the chain plus the index of the focused one.
///
/// Only built by [`ChainResolver`], so `current` always indexes into `nodes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedChain {
    nodes: Vec<ResolvedNode>,
    current: Option<usize>,
}

impl ResolvedChain {
    pub fn nodes(&self) -> &[ResolvedNode] {
        &self.nodes
    }

    /// The node matching the focus id, or `None` when the species is not in
    /// this chain.
    pub fn current(&self) -> Option<&ResolvedNode> {
        self.current.and_then(|index| self.nodes.get(index))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct ChainResolver {
    sprite_base_url: String,
}

impl Default for ChainResolver {
    fn default() -> Self {
        Self::new(DEFAULT_SPRITE_BASE_URL)
    }
}

impl ChainResolver {
    pub fn new(sprite_base_url: impl Into<String>) -> Self {
        Self {
            sprite_base_url: sprite_base_url.into(),
        }
    }

    pub fn sprite_base_url(&self) -> &str {
        &self.sprite_base_url
    }

    /// Display fields for `node`, used both when it is visited and when it is
    /// listed as a successor of its parent.
    pub fn describe(&self, node: &RawChainNode) -> Result<NodeView> {
        let id = parse_species_id(&node.species.url).ok_or_else(|| {
            ChainError::MalformedNode(format!(
                "species '{}' has no numeric id in url '{}'",
                node.species.name, node.species.url
            ))
        })?;

        Ok(NodeView {
            id,
            name: node.species.name.clone(),
            image_url: sprite_url(&self.sprite_base_url, id),
            can_evolve_further: !node.evolves_to.is_empty(),
            evolution_details_text: format_conditions(&node.evolution_details),
        })
    }

    /// Resolve the whole tree. Any node with an unparseable id fails the call
    /// and no partial list is returned.
    pub fn resolve(&self, root: &RawChainNode, focus: SpeciesId) -> Result<ResolvedChain> {
        let mut chain = ResolvedChain {
            nodes: Vec::with_capacity(root.node_count()),
            current: None,
        };
        self.visit(root, focus, &mut chain)?;
        Ok(chain)
    }

    pub fn resolve_response(
        &self,
        response: &EvolutionChainResponse,
        focus: SpeciesId,
    ) -> Result<ResolvedChain> {
        self.resolve(response.root()?, focus)
    }

    fn visit(&self, node: &RawChainNode, focus: SpeciesId, chain: &mut ResolvedChain) -> Result<()> {
        let view = self.describe(node)?;
        let immediate_successors = node
            .evolves_to
            .iter()
            .map(|child| self.describe(child))
            .collect::<Result<Vec<_>>>()?;

        // Duplicate ids: only the first one reached in pre-order is current.
        let is_current = chain.current.is_none() && view.id == focus;
        if is_current {
            chain.current = Some(chain.nodes.len());
        }

        chain.nodes.push(ResolvedNode {
            view,
            is_current,
            immediate_successors,
        });

        for child in &node.evolves_to {
            self.visit(child, focus, chain)?;
        }
        Ok(())
    }
}
