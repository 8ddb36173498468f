//! Agent pipeline diagram panel.
//!
//! The diagram engine is an external browser global; this panel fetches the
//! definition once on first activation and hands it over for rendering.

use leptos::prelude::*;

use crate::state::graph::GraphState;

/// DOM id of the region the renderer injects its SVG into.
const GRAPH_CONTAINER_ID: &str = "agent-graph";

/// Fetches the diagram definition and renders it.
#[cfg(feature = "hydrate")]
pub(crate) async fn init_graph(graph: RwSignal<GraphState>) {
    let definition = match crate::net::api::fetch_graph_definition().await {
        Ok(definition) => definition,
        Err(e) => {
            log::error!("failed to load graph definition: {e}");
            graph.update(|g| g.failed = true);
            return;
        }
    };
    graph.update(|g| {
        g.definition = Some(definition.clone());
        g.failed = false;
    });

    if let Err(e) = crate::util::diagram::init_renderer() {
        log::error!("diagram renderer unavailable: {e}");
        graph.update(|g| g.failed = true);
        return;
    }
    if let Err(e) = crate::util::diagram::render_into(GRAPH_CONTAINER_ID, &definition).await {
        log::error!("diagram render failed: {e}");
        graph.update(|g| g.failed = true);
    }
}

/// Diagram panel. The container div stays mounted so the renderer always has
/// a target; placeholders render alongside it.
#[component]
pub fn GraphPanel() -> impl IntoView {
    let graph = expect_context::<RwSignal<GraphState>>();

    view! {
        <div class="graph-panel">
            <h2>"Agent Graph"</h2>
            {move || {
                let state = graph.get();
                if state.failed {
                    Some(view! { <p class="placeholder">"Failed to load graph."</p> })
                } else if state.definition.is_none() {
                    Some(view! { <p class="placeholder">"Loading graph..."</p> })
                } else {
                    None
                }
            }}
            <div class="graph-panel__diagram" id=GRAPH_CONTAINER_ID></div>
        </div>
    }
}
