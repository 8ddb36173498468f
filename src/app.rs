//! Root component: shared state contexts, routing, and the HTML shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::console::ConsolePage;
use crate::state::data::DataState;
use crate::state::graph::GraphState;
use crate::state::panels::PanelsState;
use crate::state::queue::QueueState;
use crate::state::submission::SubmissionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns one signal per state domain and hands them to the console through
/// context, so panel components never hold free-standing module state.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let panels = RwSignal::new(PanelsState::default());
    let submission = RwSignal::new(SubmissionState::default());
    let data = RwSignal::new(DataState::default());
    let queue = RwSignal::new(QueueState::default());
    let graph = RwSignal::new(GraphState::default());

    provide_context(panels);
    provide_context(submission);
    provide_context(data);
    provide_context(queue);
    provide_context(graph);

    view! {
        <Stylesheet id="leptos" href="/pkg/triage-console.css"/>
        <Title text="Email Triage Console"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ConsolePage/>
            </Routes>
        </Router>
    }
}
