//! Pure display formatting shared by the outcome, trace, queue, and data
//! renderers.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Queue-card body previews are cut at this many characters.
pub const BODY_PREVIEW_CHARS: usize = 200;

/// Turns a snake_case identifier into a display name:
/// `"fetch_user_orders"` → `"Fetch User Orders"`.
#[must_use]
pub fn humanize(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Numbered trace-step label: `step_label(0, "main_agent")` → `"1. Main Agent"`.
#[must_use]
pub fn step_label(index: usize, node: &str) -> String {
    format!("{}. {}", index + 1, humanize(node))
}

/// Millisecond duration rounded to a whole number, `"-"` when unmeasured.
/// A measured zero still renders as `"0ms"`.
#[must_use]
pub fn format_duration(duration_ms: Option<f64>) -> String {
    match duration_ms {
        Some(ms) => format!("{}ms", ms.round()),
        None => "-".to_owned(),
    }
}

/// Dollar amount with exactly two decimals: `19.5` → `"$19.50"`.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Body preview truncated to [`BODY_PREVIEW_CHARS`] characters with an
/// ellipsis marker; shorter bodies pass through unchanged.
#[must_use]
pub fn preview(body: &str) -> String {
    let mut chars = body.chars();
    let head: String = chars.by_ref().take(BODY_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
