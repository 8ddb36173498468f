//! Viewer-local timestamp formatting.
//!
//! The backend sends ISO-8601 strings; in the browser they are reformatted
//! through `js_sys::Date` so the operator sees local time. On the server (and
//! under test) the raw string passes through unchanged.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

/// Full local date and time, e.g. `"6/3/2025, 2:41:05 PM"`.
/// Unparseable timestamps pass through as-is.
#[must_use]
pub fn format_local(timestamp: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(timestamp));
        if date.get_time().is_nan() {
            return timestamp.to_owned();
        }
        String::from(date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        timestamp.to_owned()
    }
}

/// Local time-of-day only, used for trace step stamps.
#[must_use]
pub fn format_local_time(timestamp: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(timestamp));
        if date.get_time().is_nan() {
            return timestamp.to_owned();
        }
        String::from(date.to_locale_time_string("default"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        timestamp.to_owned()
    }
}
