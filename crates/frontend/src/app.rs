use contracts::shared::ResearchFinding;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api;
use crate::shared::components::ResearchPanel;

#[component]
pub fn App() -> impl IntoView {
    let findings = RwSignal::new(Vec::<ResearchFinding>::new());
    let loading = RwSignal::new(true);

    // Load findings from the research backend once at startup
    spawn_local(async move {
        match api::fetch_research_findings().await {
            Ok(response) => {
                findings.set(response.findings);
                loading.set(false);
            }
            Err(e) => {
                log!("Failed to load research findings: {}", e);
                loading.set(false);
            }
        }
    });

    view! {
        <main class="app">
            {move || {
                if loading.get() {
                    view! { <div class="app__loading">"Loading research findings..."</div> }
                        .into_any()
                } else {
                    view! { <ResearchPanel findings=findings /> }.into_any()
                }
            }}
        </main>
    }
}
