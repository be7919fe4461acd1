//! Evolution chains: the raw recursive tree returned by the API, the
//! condition formatter for evolution edges and the flattening resolver.

pub mod condition;
pub mod raw;
pub mod resolver;

pub use condition::{format_conditions, NO_CONDITION};
pub use raw::{EvolutionChainResponse, RawChainNode, RawTrigger};
pub use resolver::{
    ChainResolver, NodeView, ResolvedChain, ResolvedNode, ResolvedSuccessor,
    DEFAULT_SPRITE_BASE_URL,
};
