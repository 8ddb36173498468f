//! Single-page operator console with tabbed panels.
//!
//! SYSTEM CONTEXT
//! ==============
//! The tab bar drives the panel activation controller: the first visit to a
//! lazy panel kicks off its load routine exactly once, later visits only
//! toggle visibility. The compose workflow is always live. All panel content
//! stays mounted so switching tabs never tears down in-progress renders.

use leptos::prelude::*;

use crate::components::data_panel::DataPanel;
use crate::components::email_form::EmailForm;
use crate::components::graph_panel::GraphPanel;
use crate::components::queue_panel::QueuePanel;
use crate::components::response_view::ResponseView;
use crate::components::trace_view::TraceView;
use crate::state::data::DataState;
use crate::state::graph::GraphState;
use crate::state::panels::{Activation, PanelTab, PanelsState};
use crate::state::queue::QueueState;

const TABS: &[(PanelTab, &str)] = &[
    (PanelTab::Compose, "Process Email"),
    (PanelTab::Graph, "Agent Graph"),
    (PanelTab::Data, "Data"),
    (PanelTab::Queue, "Human Queue"),
];

fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Operator console page.
#[component]
pub fn ConsolePage() -> impl IntoView {
    let panels = expect_context::<RwSignal<PanelsState>>();
    let data = expect_context::<RwSignal<DataState>>();
    let queue = expect_context::<RwSignal<QueueState>>();
    let graph = expect_context::<RwSignal<GraphState>>();

    #[cfg(feature = "hydrate")]
    let spawn_panel_init = move |tab: PanelTab| {
        leptos::task::spawn_local(async move {
            match tab {
                PanelTab::Compose => {}
                PanelTab::Graph => crate::components::graph_panel::init_graph(graph).await,
                PanelTab::Data => crate::components::data_panel::init_data(data).await,
                PanelTab::Queue => crate::components::queue_panel::load_queue(queue).await,
            }
            panels.update(|p| p.finish_init(tab, now_ms()));
        });
    };
    #[cfg(not(feature = "hydrate"))]
    let spawn_panel_init = move |tab: PanelTab| {
        let _ = (tab, data, queue, graph);
    };

    let on_tab = move |tab: PanelTab| {
        let activation = panels
            .try_update(|p| p.activate(tab, now_ms()))
            .unwrap_or(Activation::ShowOnly);
        if activation == Activation::BeginInit {
            spawn_panel_init(tab);
        }
    };

    view! {
        <div class="console-page">
            <header class="console-page__header">
                <h1>"Email Triage Console"</h1>
                <p class="console-page__tagline">
                    "Operator console for the automated email-triage agent"
                </p>
            </header>

            <nav class="console-page__tabs">
                {TABS
                    .iter()
                    .map(|&(tab, label)| {
                        view! {
                            <button
                                class="tab-btn"
                                class:tab-btn--active=move || panels.get().active == tab
                                on:click=move |_| on_tab(tab)
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>

            <main class="console-page__content">
                <div
                    class="tab-content"
                    class:tab-content--active=move || panels.get().active == PanelTab::Compose
                >
                    <div class="compose-layout">
                        <EmailForm/>
                        <div class="compose-layout__results">
                            <ResponseView/>
                            <TraceView/>
                        </div>
                    </div>
                </div>
                <div
                    class="tab-content"
                    class:tab-content--active=move || panels.get().active == PanelTab::Graph
                >
                    <GraphPanel/>
                </div>
                <div
                    class="tab-content"
                    class:tab-content--active=move || panels.get().active == PanelTab::Data
                >
                    <DataPanel/>
                </div>
                <div
                    class="tab-content"
                    class:tab-content--active=move || panels.get().active == PanelTab::Queue
                >
                    <QueuePanel/>
                </div>
            </main>
        </div>
    }
}
