//! Tabbed panel for the research gathered before council deliberation

use contracts::shared::ResearchFinding;
use leptos::prelude::*;

use super::Markdown;
use crate::shared::text_utils::format_category_name;

/// Resolve which tab to display: `None` when there is nothing to show,
/// otherwise the selected index clamped to the last tab. Clamping
/// covers a selection left stale by an external shrink of the list.
fn effective_index(selected: usize, len: usize) -> Option<usize> {
    if len == 0 {
        None
    } else {
        Some(selected.min(len - 1))
    }
}

/// Research preprocessing panel
///
/// Shows one tab per research category, in list order, with the active
/// category's findings rendered as markdown. Renders nothing at all
/// when the findings list is empty.
#[component]
pub fn ResearchPanel(#[prop(into)] findings: Signal<Vec<ResearchFinding>>) -> impl IntoView {
    let active_tab = RwSignal::new(0usize);

    view! {
        {move || {
            let list = findings.get();
            let Some(active) = effective_index(active_tab.get(), list.len()) else {
                return ().into_any();
            };
            let current = list[active].clone();

            view! {
                <div class="stage stage0">
                    <h3 class="stage-title">"Stage 0: Research Preprocessing"</h3>
                    <p class="stage-description">
                        "Specialized research gathered before council deliberation"
                    </p>

                    <div class="tabs">
                        {list
                            .iter()
                            .enumerate()
                            .map(|(index, finding)| {
                                view! {
                                    <button
                                        class=if index == active { "tab active" } else { "tab" }
                                        on:click=move |_| active_tab.set(index)
                                    >
                                        {format_category_name(&finding.category)}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="tab-content">
                        <div class="research-category">
                            {format_category_name(&current.category)}
                        </div>
                        <div class="research-findings">
                            <Markdown content=current.findings />
                        </div>
                    </div>
                </div>
            }
            .into_any()
        }}
    }
}
