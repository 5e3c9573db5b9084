//! Chat Session
//!
//! One session exists per widget instance, created at mount and discarded at
//! unmount with no persistence. The session owns the transcript, the pending
//! draft, and the busy flag, and it is the only writer of all three.
//!
//! Per turn the session is a two-state machine:
//!
//! - **Idle**: `busy == false`, accepts `begin_submit`.
//! - **Awaiting reply**: `busy == true`, further submits are ignored; exits
//!   back to Idle when `finish_submit` runs with the provider's outcome,
//!   success or failure.
//!
//! Ordering guarantee: the user message is appended before the provider is
//! invoked, and the assistant reply is appended strictly after the provider
//! settles. There is no cancellation path; an accepted turn always resolves
//! `busy` back to false.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;
use crate::message::Transcript;
use crate::provider::ReplyProvider;

/// Fixed assistant text appended when reply generation fails.
///
/// Failure is recovered entirely inside the session; apart from this text the
/// failure path is indistinguishable from a successful turn.
pub const APOLOGY_REPLY: &str = "Sorry — an error occurred.";

/// Unique session identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A chat session for one widget instance
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatSession {
    /// Unique identifier
    id: SessionId,

    /// Append-only message log, seeded with the assistant greeting
    transcript: Transcript,

    /// Draft the user is composing; cleared on submission
    draft: String,

    /// True from submission until the reply (or apology) is appended
    busy: bool,

    /// Creation timestamp
    created_at: DateTime<Utc>,
}

impl ChatSession {
    /// Create a new session seeded with an assistant greeting
    pub fn new(greeting: impl Into<String>) -> Self {
        Self {
            id: SessionId::new(),
            transcript: Transcript::with_greeting(greeting),
            draft: String::new(),
            busy: false,
            created_at: Utc::now(),
        }
    }

    /// Create with a specific ID
    pub fn with_id(id: SessionId, greeting: impl Into<String>) -> Self {
        let mut session = Self::new(greeting);
        session.id = id;
        session
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Replace the pending draft
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Whether a reply computation is in flight
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Start a turn from the current draft.
    ///
    /// Returns the submitted text, or `None` if the trimmed draft is empty or
    /// a reply is already in flight. On acceptance the user message is
    /// appended with the draft text verbatim, the draft is cleared, and the
    /// session becomes busy. The caller must eventually call `finish_submit`.
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.busy {
            tracing::debug!(session = %self.id, "submit ignored: reply in flight");
            return None;
        }
        if self.draft.trim().is_empty() {
            return None;
        }

        let text = std::mem::take(&mut self.draft);
        self.transcript.push_user(text.clone());
        self.busy = true;
        tracing::debug!(session = %self.id, "turn started");
        Some(text)
    }

    /// Complete the in-flight turn with the provider's outcome.
    ///
    /// A failure appends the fixed apology instead of propagating; either way
    /// the session returns to idle.
    pub fn finish_submit(&mut self, outcome: Result<String>) {
        match outcome {
            Ok(reply) => {
                self.transcript.push_assistant(reply);
            }
            Err(e) => {
                tracing::warn!(session = %self.id, error = %e, "reply generation failed");
                self.transcript.push_assistant(APOLOGY_REPLY);
            }
        }
        self.busy = false;
    }

    /// Run one full turn against a provider.
    ///
    /// Returns false if the draft was rejected (empty or busy) and no turn ran.
    pub async fn submit(&mut self, provider: &dyn ReplyProvider) -> bool {
        let Some(prompt) = self.begin_submit() else {
            return false;
        };
        let outcome = provider.reply(&prompt).await;
        self.finish_submit(outcome);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InsightError;
    use crate::message::Role;
    use async_trait::async_trait;

    struct CannedProvider(&'static str);

    #[async_trait]
    impl ReplyProvider for CannedProvider {
        async fn reply(&self, _prompt: &str) -> Result<String> {
            Ok(self.0.to_string())
        }

        fn name(&self) -> &str {
            "canned"
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl ReplyProvider for FailingProvider {
        async fn reply(&self, _prompt: &str) -> Result<String> {
            Err(InsightError::ReplyGeneration("simulated fault".into()))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    #[tokio::test]
    async fn test_submit_appends_user_then_assistant() {
        let mut session = ChatSession::new("Hi");
        session.set_draft("hello model");

        let ran = session.submit(&CannedProvider("hello user")).await;
        assert!(ran);
        assert!(!session.is_busy());
        assert!(session.draft().is_empty());

        let messages = session.transcript().messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].text, "hello model");
        assert_eq!(messages[2].role, Role::Assistant);
        assert_eq!(messages[2].text, "hello user");
    }

    #[tokio::test]
    async fn test_whitespace_draft_is_noop() {
        let mut session = ChatSession::new("Hi");
        session.set_draft("   \t ");

        let ran = session.submit(&CannedProvider("unused")).await;
        assert!(!ran);
        assert!(!session.is_busy());
        assert_eq!(session.transcript().len(), 1);
    }

    #[tokio::test]
    async fn test_failure_appends_apology() {
        let mut session = ChatSession::new("Hi");
        session.set_draft("anything");

        let ran = session.submit(&FailingProvider).await;
        assert!(ran);
        assert!(!session.is_busy());
        assert_eq!(session.transcript().last().unwrap().text, APOLOGY_REPLY);
        assert_eq!(session.transcript().last().unwrap().role, Role::Assistant);
    }

    #[test]
    fn test_busy_guard_rejects_second_submit() {
        let mut session = ChatSession::new("Hi");
        session.set_draft("first");

        let accepted = session.begin_submit();
        assert_eq!(accepted.as_deref(), Some("first"));
        assert!(session.is_busy());

        // Second submit while awaiting reply must be ignored
        session.set_draft("second");
        assert!(session.begin_submit().is_none());
        assert_eq!(session.transcript().user_texts(), vec!["first"]);

        session.finish_submit(Ok("done".into()));
        assert!(!session.is_busy());

        // Back to idle, submits accepted again
        assert!(session.begin_submit().is_some());
    }

    #[test]
    fn test_submitted_text_is_verbatim() {
        let mut session = ChatSession::new("Hi");
        session.set_draft("  padded input  ");

        let text = session.begin_submit().unwrap();
        assert_eq!(text, "  padded input  ");
        assert_eq!(session.transcript().last().unwrap().text, "  padded input  ");
    }

    #[tokio::test]
    async fn test_user_projection_matches_submissions() {
        let mut session = ChatSession::new("Hi");
        let provider = CannedProvider("ok");

        for draft in ["one", "  ", "two", "", "three"] {
            session.set_draft(draft);
            session.submit(&provider).await;
        }

        assert_eq!(session.transcript().user_texts(), vec!["one", "two", "three"]);
        // greeting + 3 accepted turns of 2 messages each
        assert_eq!(session.transcript().len(), 7);
    }
}
