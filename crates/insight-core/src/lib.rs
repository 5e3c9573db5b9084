//! # insight-core
//!
//! Core chat model for the Tradvio demo widget: an append-only message
//! transcript, a per-widget session state machine, and the provider seam the
//! session talks through to obtain replies.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     ChatSession                          │
//! │  ┌────────────┐  ┌──────────────┐  ┌──────────────────┐  │
//! │  │ Transcript │  │ draft / busy │  │  ReplyProvider   │  │
//! │  │ (append-   │──│  (one turn   │──│  (Strategy)      │  │
//! │  │  only log) │  │  in flight)  │  │                  │  │
//! │  └────────────┘  └──────────────┘  └──────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The `ReplyProvider` trait stands in for a future real backend call; the
//! session's recovery and ordering logic does not change when the simulated
//! engine is swapped for a real one.

pub mod error;
pub mod message;
pub mod provider;
pub mod session;

pub use error::{InsightError, Result};
pub use message::{Message, MessageId, Role, Transcript};
pub use provider::ReplyProvider;
pub use session::{APOLOGY_REPLY, ChatSession, SessionId};
