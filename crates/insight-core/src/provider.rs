//! Reply Provider Strategy Pattern
//!
//! Defines the interface the chat session uses to obtain replies. The demo
//! ships a simulated keyword-rule engine behind this trait; a real inference
//! backend would implement the same contract without touching session logic.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use insight_core::ReplyProvider;
//!
//! let reply = provider.reply("What about TSLA?").await?;
//! ```

use async_trait::async_trait;

use crate::error::Result;

/// Strategy trait for reply generation
///
/// Futures are not required to be `Send` on wasm32 since the browser event
/// loop is single-threaded and replies run under `spawn_local`.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ReplyProvider: Send + Sync {
    /// Generate a reply for a user prompt
    async fn reply(&self, prompt: &str) -> Result<String>;

    /// Provider name, for logging
    fn name(&self) -> &str;
}
