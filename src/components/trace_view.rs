//! Execution-trace panel: the ordered step list for the last submission.
//!
//! Steps render strictly in the order received; rendering index `i` is
//! always input index `i`.

use leptos::prelude::*;

use crate::net::types::TraceStep;
use crate::state::submission::SubmissionState;
use crate::util::format::{format_duration, step_label};
use crate::util::time::format_local_time;

#[component]
pub fn TraceView() -> impl IntoView {
    let submission = expect_context::<RwSignal<SubmissionState>>();

    view! {
        <div class="trace-view">
            <h2>"Execution Trace"</h2>
            {move || {
                let steps = submission.get().result.map(|r| r.trace).unwrap_or_default();
                if steps.is_empty() {
                    return view! { <div class="placeholder">"No trace data available."</div> }
                        .into_any();
                }
                steps
                    .into_iter()
                    .enumerate()
                    .map(|(index, step)| step_view(index, step))
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}

fn step_view(index: usize, step: TraceStep) -> impl IntoView {
    view! {
        <div class="trace-step">
            <span class="trace-step__name">{step_label(index, &step.node)}</span>
            <span class="trace-step__duration">{format_duration(step.duration_ms)}</span>
            <div class="trace-step__details">
                <p>
                    <strong>"Time: "</strong>
                    {format_local_time(&step.timestamp)}
                </p>
                {step.input_summary.map(|summary| view! {
                    <p>
                        <strong>"Input: "</strong>
                        {summary}
                    </p>
                })}
                {step.output_summary.map(|summary| view! {
                    <p>
                        <strong>"Output: "</strong>
                        {summary}
                    </p>
                })}
            </div>
        </div>
    }
}
