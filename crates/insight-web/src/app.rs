//! Main App Component

use leptos::prelude::*;

use crate::chat::DemoCard;
use crate::sections::{FeatureList, Footer, Header, Hero, Pricing};

/// Root application component: a single landing page with anchor navigation
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="page">
            <Header />
            <main class="content">
                <Hero />
                <div class="columns">
                    <FeatureList />
                    <DemoCard />
                </div>
                <Pricing />
            </main>
            <Footer />
        </div>
    }
}
