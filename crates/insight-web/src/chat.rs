//! Demo Chat Widget

use leptos::prelude::*;

use insight_content as content;
use insight_core::{ChatSession, ReplyProvider};
use insight_engine::SimulatedModel;

use crate::components::MessageBubble;

/// Demo card embedding the chat widget
#[component]
pub fn DemoCard() -> impl IntoView {
    view! {
        <section id="demo" class="demo-card">
            <h3>{content::DEMO_TITLE}</h3>
            <p class="subtitle">{content::DEMO_SUBTITLE}</p>
            <ChatWidget />
        </section>
    }
}

/// Simulated chat widget; owns one session for the lifetime of the mount
#[component]
pub fn ChatWidget() -> impl IntoView {
    let session = RwSignal::new(ChatSession::new(content::ASSISTANT_GREETING));

    let send = move |_| {
        let mut prompt = None;
        session.update(|s| prompt = s.begin_submit());
        // Empty drafts and double submits are silently ignored
        let Some(prompt) = prompt else {
            return;
        };

        leptos::task::spawn_local(async move {
            let model = SimulatedModel::default();
            let outcome = model.reply(&prompt).await;
            session.update(|s| s.finish_submit(outcome));
        });
    };

    let busy = move || session.with(ChatSession::is_busy);

    view! {
        <div class="chat">
            <div class="messages">
                <For
                    each=move || session.with(|s| s.transcript().messages().to_vec())
                    key=|msg| msg.id
                    children=move |msg| view! { <MessageBubble message=msg /> }
                />
            </div>

            <div class="input-area">
                <input
                    placeholder=content::CHAT_PLACEHOLDER
                    prop:value=move || session.with(|s| s.draft().to_string())
                    disabled=busy
                    on:input=move |ev| session.update(|s| s.set_draft(event_target_value(&ev)))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            send(());
                        }
                    }
                />
                <button class="btn btn-primary" on:click=move |_| send(()) disabled=busy>
                    {move || if busy() { "Thinking..." } else { "Send" }}
                </button>
            </div>
        </div>
    }
}
