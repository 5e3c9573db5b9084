//! Reply Rules
//!
//! Ordered keyword rule table. Prompts can match several predicates, so rule
//! order is part of the contract: the first matching rule wins and later
//! matches are ignored. Matching is case-insensitive substring containment;
//! the original casing is not used for anything else.

/// Cautionary reply for sell/bear prompts
pub const REPLY_CAUTIOUS: &str =
    "Model view: Cautious. Consider reducing exposure and reviewing recent earnings.";

/// Positive-momentum reply for buy/bull prompts
pub const REPLY_MOMENTUM: &str =
    "Model view: Positive signal: momentum looks favorable — check sector strength and risk limits.";

/// Ticker-specific volatility commentary
pub const REPLY_TSLA: &str =
    "TSLA summary: Volatile, news-sensitive. If you trade it, tighten stop-loss and size positions conservatively.";

/// Fixed simulated performance summary
pub const REPLY_BACKTEST: &str =
    "Backtest summary: sample strategy returned CAGR 12% with max drawdown 18% over the sample period (simulated).";

/// Generic fallback when no rule matches
pub const REPLY_FALLBACK: &str =
    "Model view: Mixed signals — suggest deeper analysis (volatility, correlation, fundamentals).";

/// A single keyword rule
#[derive(Clone, Copy, Debug)]
pub struct Rule {
    /// Any of these substrings triggers the rule
    pub keywords: &'static [&'static str],

    /// Canned reply text
    pub reply: &'static str,
}

impl Rule {
    fn matches(&self, lowercased: &str) -> bool {
        self.keywords.iter().any(|k| lowercased.contains(k))
    }
}

/// The ordered rule table, evaluated top-to-bottom
#[derive(Clone, Debug)]
pub struct ReplyRules {
    rules: Vec<Rule>,
    fallback: &'static str,
}

impl Default for ReplyRules {
    fn default() -> Self {
        Self {
            rules: vec![
                Rule { keywords: &["sell", "bear"], reply: REPLY_CAUTIOUS },
                Rule { keywords: &["buy", "bull"], reply: REPLY_MOMENTUM },
                Rule { keywords: &["tsla"], reply: REPLY_TSLA },
                Rule { keywords: &["backtest"], reply: REPLY_BACKTEST },
            ],
            fallback: REPLY_FALLBACK,
        }
    }
}

impl ReplyRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate the table against a prompt, first-match-wins.
    ///
    /// Total for any string: unmatched prompts get the fallback reply.
    pub fn evaluate(&self, prompt: &str) -> &'static str {
        let lowercased = prompt.to_lowercase();

        self.rules
            .iter()
            .find(|rule| rule.matches(&lowercased))
            .map_or(self.fallback, |rule| rule.reply)
    }

    /// Number of rules, excluding the fallback
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sell_wins_over_buy() {
        let rules = ReplyRules::default();
        // "sell" and "buy" both match; the earlier rule decides
        assert_eq!(rules.evaluate("I want to sell and buy"), REPLY_CAUTIOUS);
    }

    #[test]
    fn test_bear_and_bull_keywords() {
        let rules = ReplyRules::default();
        assert_eq!(rules.evaluate("feeling bearish today"), REPLY_CAUTIOUS);
        assert_eq!(rules.evaluate("full bull mode"), REPLY_MOMENTUM);
    }

    #[test]
    fn test_tsla_prompt() {
        let rules = ReplyRules::default();
        assert_eq!(rules.evaluate("What about TSLA?"), REPLY_TSLA);
    }

    #[test]
    fn test_backtest_contains_figures() {
        let rules = ReplyRules::default();
        let reply = rules.evaluate("show me a backtest");
        assert!(reply.contains("CAGR 12%"));
        assert!(reply.contains("max drawdown 18%"));
    }

    #[test]
    fn test_fallback() {
        let rules = ReplyRules::default();
        assert_eq!(rules.evaluate("hello there"), REPLY_FALLBACK);
        assert_eq!(rules.evaluate(""), REPLY_FALLBACK);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let rules = ReplyRules::default();
        assert_eq!(rules.evaluate("SELL EVERYTHING"), REPLY_CAUTIOUS);
        assert_eq!(rules.evaluate("tSlA thoughts?"), REPLY_TSLA);
    }
}
