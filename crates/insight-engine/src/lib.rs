//! # insight-engine
//!
//! The simulated reply engine behind the Tradvio demo widget.
//!
//! Replies come from an ordered keyword rule table evaluated first-match-wins
//! over the lowercased prompt, plus an artificial delay standing in for real
//! inference latency. Everything is deterministic and runs entirely
//! client-side; no model is consulted.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use insight_core::ReplyProvider;
//! use insight_engine::SimulatedModel;
//!
//! let model = SimulatedModel::default();
//! let reply = model.reply("show me a backtest").await?;
//! ```

pub mod rules;
pub mod simulated;

pub use rules::ReplyRules;
pub use simulated::SimulatedModel;

// Re-export core types for convenience
pub use insight_core::{ChatSession, InsightError, Message, ReplyProvider, Result, Role};
