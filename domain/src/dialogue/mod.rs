//! Inter-agent dialogue domain.
//!
//! The dialogue simulates a negotiation among the agents' outputs through
//! three fixed phases, each backed by one model call:
//!
//! 1. **Insight sharing**: each agent's digest is put on the table and
//!    synthesized into common themes.
//! 2. **Conflict identification**: recommendations are compared for
//!    contradictions and differing priorities.
//! 3. **Consensus building**: the two preceding narratives are reconciled
//!    into consensus items, priority actions, and risks.
//!
//! Phases are causally chained: a later prompt embeds the earlier
//! narratives, so they can never run concurrently or out of order.

pub mod parsing;
pub mod phase;
pub mod result;

pub use parsing::{MAX_ACTION_ITEMS, MAX_CONSENSUS_ITEMS, extract_consensus_and_actions};
pub use phase::{AgentInsight, DialoguePhase, DialoguePhaseResult};
pub use result::DialogueResult;
