//! Simulated Model
//!
//! `ReplyProvider` implementation over the keyword rule table. The delay
//! stands in for a future real backend call so the UI's busy state is
//! exercised; it carries no correctness semantics and may be zero.

use std::time::Duration;

use async_trait::async_trait;

use insight_core::{ReplyProvider, Result};

use crate::rules::ReplyRules;

/// Latency of the reference widget (800 ms)
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(800);

/// Simulated reply model: deterministic rules plus artificial latency
pub struct SimulatedModel {
    rules: ReplyRules,
    latency: Duration,
}

impl Default for SimulatedModel {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedModel {
    pub fn new() -> Self {
        Self {
            rules: ReplyRules::default(),
            latency: DEFAULT_LATENCY,
        }
    }

    /// Create with a custom latency (zero is valid, used in tests)
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            rules: ReplyRules::default(),
            latency,
        }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn rules(&self) -> &ReplyRules {
        &self.rules
    }
}

async fn sleep(duration: Duration) {
    if duration.is_zero() {
        return;
    }

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;

    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ReplyProvider for SimulatedModel {
    async fn reply(&self, prompt: &str) -> Result<String> {
        sleep(self.latency).await;

        let reply = self.rules.evaluate(prompt);
        tracing::debug!(prompt_len = prompt.len(), "simulated reply selected");
        Ok(reply.to_string())
    }

    fn name(&self) -> &str {
        "SimulatedModel"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{REPLY_CAUTIOUS, REPLY_FALLBACK};

    #[tokio::test]
    async fn test_reply_through_provider_trait() {
        let model = SimulatedModel::with_latency(Duration::ZERO);
        let provider: &dyn ReplyProvider = &model;

        let reply = provider.reply("time to sell?").await.unwrap();
        assert_eq!(reply, REPLY_CAUTIOUS);
    }

    #[tokio::test]
    async fn test_reply_is_deterministic() {
        let model = SimulatedModel::with_latency(Duration::ZERO);

        let first = model.reply("hello there").await.unwrap();
        let second = model.reply("hello there").await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first, REPLY_FALLBACK);
    }

    #[tokio::test]
    async fn test_full_turn_with_session() {
        use crate::rules::REPLY_TSLA;
        use insight_core::ChatSession;

        let model = SimulatedModel::with_latency(Duration::ZERO);
        let mut session = ChatSession::new("Hi");
        session.set_draft("What about TSLA?");

        assert!(session.submit(&model).await);
        assert_eq!(session.transcript().last().unwrap().text, REPLY_TSLA);
        assert!(!session.is_busy());
    }

    #[test]
    fn test_default_latency() {
        let model = SimulatedModel::default();
        assert_eq!(model.latency(), Duration::from_millis(800));
        assert_eq!(model.name(), "SimulatedModel");
    }
}
