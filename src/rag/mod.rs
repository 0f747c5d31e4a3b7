//! Context retrieval for the tutor
//!
//! Despite the name there is no embedding or vector search here: context
//! is selected by a fixed table of keyword and game-state predicates over
//! the static knowledge base, then capped by insertion order.

pub mod context;
pub mod retriever;
pub mod rules;

// Re-export key types
pub use context::{GameHistorySnapshot, PedagogicalFocus, Priority, RetrievedContext};
pub use retriever::{ContextRetriever, RetrievalConfig};
pub use rules::{PedagogyRule, RetrievalInput, StrategyRule, PEDAGOGY_RULES, STRATEGY_RULES};
