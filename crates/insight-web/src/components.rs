//! UI Components

use leptos::prelude::*;

use insight_content::{Feature, PricingTier, StatHighlight};
use insight_core::Message;

/// Message bubble component
#[component]
pub fn MessageBubble(message: Message) -> impl IntoView {
    let class = format!("message message-{}", message.role);

    view! {
        <div class=class>
            <p class="content">{message.text}</p>
        </div>
    }
}

/// Sample-insight card on the hero preview
#[component]
pub fn StatCard(stat: StatHighlight) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-label">{stat.label}</div>
            <div class="stat-value">{stat.value}</div>
        </div>
    }
}

/// Marketing feature card
#[component]
pub fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <div class="feature">
            <div class="feature-title">{feature.title}</div>
            <p class="feature-desc">{feature.description}</p>
        </div>
    }
}

/// Pricing tier card
#[component]
pub fn PriceCard(tier: PricingTier) -> impl IntoView {
    let class = if tier.highlight { "plan featured" } else { "plan" };

    view! {
        <div class=class>
            <div class="plan-header">
                <h2>{tier.name}</h2>
                <div class="price">{tier.price}</div>
            </div>
            <ul>
                {tier.bullets.into_iter().map(|b| view! { <li>{b}</li> }).collect_view()}
            </ul>
            <button class="btn">"Choose"</button>
        </div>
    }
}
