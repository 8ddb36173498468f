//! Human-escalation queue panel: cards with idempotent resolve actions.
//!
//! RESOLVE CYCLE
//! =============
//! Resolving reloads the full queue only after the backend confirms success,
//! so the rendered resolved-state always matches the last successful fetch.
//! A failed resolve leaves the queue untouched and raises a blocking alert.

#[cfg(test)]
#[path = "queue_panel_test.rs"]
mod queue_panel_test;

use leptos::prelude::*;

use crate::net::types::QueueItem;
use crate::state::queue::QueueState;
use crate::util::format::preview;
use crate::util::time::format_local;

/// Card-header status glyph.
fn status_glyph(resolved: bool) -> &'static str {
    if resolved { "✅" } else { "⏳" }
}

/// Loads the queue into state. Runs on first activation, explicit refresh,
/// and after each confirmed resolve.
#[cfg(feature = "hydrate")]
pub(crate) async fn load_queue(queue: RwSignal<QueueState>) {
    let Some(token) = queue.try_update(|q| {
        q.loading = true;
        q.next_token()
    }) else {
        return;
    };
    let result = crate::net::api::list_queue().await;
    if let Err(e) = &result {
        log::error!("failed to load queue: {e}");
    }
    queue.update(|q| {
        q.apply(token, result);
    });
}

#[cfg(feature = "hydrate")]
fn resolve_item(queue: RwSignal<QueueState>, id: String) {
    queue.update(|q| q.resolving = Some(id.clone()));
    leptos::task::spawn_local(async move {
        match crate::net::api::resolve_queue_item(&id).await {
            Ok(_) => {
                queue.update(|q| q.resolving = None);
                load_queue(queue).await;
            }
            Err(e) => {
                // Leave the queue untouched; the operator decides what next.
                log::error!("failed to resolve queue item {id}: {e}");
                queue.update(|q| q.resolving = None);
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message("Failed to resolve item");
                }
            }
        }
    });
}

/// Queue panel with a refresh control and per-item resolve buttons.
#[component]
pub fn QueuePanel() -> impl IntoView {
    let queue = expect_context::<RwSignal<QueueState>>();

    let on_refresh = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(load_queue(queue));
        #[cfg(not(feature = "hydrate"))]
        let _ = queue;
    };

    view! {
        <div class="queue-panel">
            <div class="queue-panel__toolbar">
                <h2>"Human Queue"</h2>
                <button class="btn" on:click=on_refresh>
                    "Refresh"
                </button>
            </div>
            {move || {
                let state = queue.get();
                if state.loading && state.items.is_empty() {
                    return view! { <p class="placeholder">"Loading queue..."</p> }.into_any();
                }
                if state.failed && state.items.is_empty() {
                    return view! { <p class="placeholder">"Failed to load queue."</p> }.into_any();
                }
                if state.items.is_empty() {
                    return view! { <p class="placeholder">"No items in queue."</p> }.into_any();
                }
                let resolving = state.resolving.clone();
                state
                    .items
                    .into_iter()
                    .map(|item| {
                        let in_flight = resolving.as_deref() == Some(item.id.as_str());
                        queue_card(queue, item, in_flight)
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}

fn queue_card(queue: RwSignal<QueueState>, item: QueueItem, in_flight: bool) -> impl IntoView {
    let resolved = item.resolved;
    let id = item.id.clone();
    let on_resolve = move |_| {
        #[cfg(feature = "hydrate")]
        resolve_item(queue, id.clone());
        #[cfg(not(feature = "hydrate"))]
        let _ = (queue, &id);
    };

    view! {
        <div class="queue-item" class:queue-item--resolved=resolved>
            <h3>{status_glyph(resolved)} " From: " {item.email_input.sender_email.clone()}</h3>
            <p class="queue-item__reason">
                <strong>"Reason: "</strong>
                {item.reason.clone()}
            </p>
            <div class="queue-item__preview">
                <p>
                    <strong>"Subject: "</strong>
                    {item.email_input.subject.clone()}
                </p>
                <p>{preview(&item.email_input.body)}</p>
            </div>
            <p class="queue-item__added">"Added: " {format_local(&item.timestamp)}</p>
            {(!resolved).then(|| view! {
                <button class="btn btn--primary" disabled=in_flight on:click=on_resolve>
                    "Mark Resolved"
                </button>
            })}
        </div>
    }
}
