//! # insight-content
//!
//! Static presentation data for the Tradvio landing page: hero copy, the
//! feature list, sample stat highlights, and pricing tiers. Keeping the copy
//! as typed data lets the frontend render from tables instead of hardcoded
//! markup, and keeps the marketing text in one place.

use serde::{Deserialize, Serialize};

/// Product name shown in the header
pub const PRODUCT_NAME: &str = "Tradvio";

/// Header strapline
pub const TAGLINE: &str = "AI-driven trading insights";

/// Hero headline
pub const HERO_HEADLINE: &str = "AI insights for smarter trading";

/// Hero subheading
pub const HERO_SUBHEADING: &str = "Generate signals, analyze sentiment, and build strategies with a single AI-native workflow. Use our demo below to try the model.";

/// Hero ticker-input placeholder
pub const HERO_INPUT_PLACEHOLDER: &str = "Enter ticker or idea, e.g. AAPL";

/// Badges shown under the hero call-to-action
pub const HERO_BADGES: [&str; 3] = ["Real-time", "Backtests", "API"];

/// Caption under the live-preview card
pub const PREVIEW_DISCLAIMER: &str = "This is a simulated live preview for demonstration only.";

/// Demo card title and subtitle
pub const DEMO_TITLE: &str = "Interactive AI demo";
pub const DEMO_SUBTITLE: &str = "Ask the model about any ticker, strategy, or market event. This demo runs locally in your browser.";

/// Chat input placeholder
pub const CHAT_PLACEHOLDER: &str = "Ask about a ticker, strategy, or market event";

/// Assistant message every session is seeded with
pub const ASSISTANT_GREETING: &str =
    "Hi — ask me about a ticker, e.g. 'What do you think about TSLA this week?'";

/// Footer notice (year is supplied by the frontend)
pub const FOOTER_NOTICE: &str = "Tradvio — demo clone. Not affiliated with any other product.";

/// A marketing feature card
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

impl Feature {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// The "What we offer" feature list
pub fn features() -> Vec<Feature> {
    vec![
        Feature::new(
            "AI Signal Generation",
            "Generate trade signals using our fine-tuned models and custom prompts.",
        ),
        Feature::new(
            "Backtesting",
            "Run strategy simulations on historical data and see performance metrics.",
        ),
        Feature::new(
            "API First",
            "Integrate with your stack using a clean REST API and webhooks.",
        ),
        Feature::new(
            "Explainable AI",
            "Get human-readable rationales for model suggestions.",
        ),
    ]
}

/// A sample insight shown on the hero preview card
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StatHighlight {
    pub label: String,
    pub value: String,
}

impl StatHighlight {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// The "Live sample insights" preview values
pub fn sample_stats() -> Vec<StatHighlight> {
    vec![
        StatHighlight::new("Signal", "Bullish"),
        StatHighlight::new("Confidence", "72%"),
        StatHighlight::new("Sentiment", "Positive"),
        StatHighlight::new("Volatility", "Low"),
    ]
}

/// A pricing tier card
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PricingTier {
    pub name: String,

    /// Display price ("Free", "$49/mo", "Custom") — not a monetary value
    pub price: String,

    pub bullets: Vec<String>,

    /// Whether the card is visually emphasized
    pub highlight: bool,
}

impl PricingTier {
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        bullets: &[&str],
        highlight: bool,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            bullets: bullets.iter().map(|b| (*b).to_string()).collect(),
            highlight,
        }
    }
}

/// The three pricing tiers
pub fn pricing_tiers() -> Vec<PricingTier> {
    vec![
        PricingTier::new("Starter", "Free", &["10 queries/day", "Community support"], false),
        PricingTier::new(
            "Pro",
            "$49/mo",
            &["1,000 queries", "Priority support", "API access"],
            true,
        ),
        PricingTier::new(
            "Enterprise",
            "Custom",
            &["Unlimited", "Dedicated account manager", "Onboarding"],
            false,
        ),
    ]
}
