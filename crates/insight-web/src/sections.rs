//! Landing Page Sections

use chrono::Datelike;
use leptos::prelude::*;

use insight_content as content;

use crate::components::{FeatureCard, PriceCard, StatCard};

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="brand">
                <div class="logo">"TV"</div>
                <div>
                    <h1>{content::PRODUCT_NAME}</h1>
                    <p class="tagline">{content::TAGLINE}</p>
                </div>
            </div>
            <nav class="nav">
                <a href="#features">"Features"</a>
                <a href="#demo">"Demo"</a>
                <a href="#pricing">"Pricing"</a>
                <button class="btn btn-primary">"Get started"</button>
            </nav>
        </header>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-copy">
                <h2>{content::HERO_HEADLINE}</h2>
                <p class="subtitle">{content::HERO_SUBHEADING}</p>

                <div class="hero-cta">
                    <input placeholder=content::HERO_INPUT_PLACEHOLDER />
                    <button class="btn btn-primary">"Analyze"</button>
                </div>

                <div class="badges">
                    {content::HERO_BADGES
                        .iter()
                        .map(|b| view! { <span class="badge">{*b}</span> })
                        .collect_view()}
                </div>
            </div>

            <div class="hero-preview">
                <h3>"Live sample insights"</h3>
                <div class="stats">
                    {content::sample_stats()
                        .into_iter()
                        .map(|stat| view! { <StatCard stat=stat /> })
                        .collect_view()}
                </div>
                <div class="disclaimer">{content::PREVIEW_DISCLAIMER}</div>
            </div>
        </section>
    }
}

#[component]
pub fn FeatureList() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <h3>"What we offer"</h3>
            <p class="subtitle">
                "A complete toolset for systematic traders and analysts: signals, research, and execution tools powered by ML."
            </p>

            <div class="feature-grid">
                {content::features()
                    .into_iter()
                    .map(|feature| view! { <FeatureCard feature=feature /> })
                    .collect_view()}
            </div>

            <div class="dev-friendly">
                <h4>"Developer friendly"</h4>
                <p>"Documentation, SDKs, and example notebooks — everything you need to integrate quickly."</p>
            </div>
        </section>
    }
}

#[component]
pub fn Pricing() -> impl IntoView {
    view! {
        <section id="pricing" class="pricing">
            <h3>"Pricing"</h3>
            <p class="subtitle">
                "Choose a plan that fits your workflow — free tier for experimentation, paid tiers for production use."
            </p>

            <div class="plans">
                {content::pricing_tiers()
                    .into_iter()
                    .map(|tier| view! { <PriceCard tier=tier /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="footer">
            <div class="notice">{format!("© {} {}", year, content::FOOTER_NOTICE)}</div>
            <div class="links">
                <a href="#">"Terms"</a>
                <a href="#">"Privacy"</a>
            </div>
        </footer>
    }
}
