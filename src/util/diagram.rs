//! Binding to the browser-global diagram renderer.
//!
//! The rendering engine is an external collaborator: this module hands it a
//! definition string and injects the SVG it returns. Nothing here parses or
//! lays out the diagram itself.

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue};

/// Configures the renderer once: rendering is driven from here, never by the
/// engine's own page scan.
///
/// # Errors
///
/// Returns a message when the `mermaid` global is missing or not callable.
#[cfg(feature = "hydrate")]
pub fn init_renderer() -> Result<(), String> {
    let mermaid = renderer_global()?;
    let initialize = member_function(&mermaid, "initialize")?;
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &JsValue::from_str("startOnLoad"), &JsValue::FALSE)
        .map_err(js_err)?;
    js_sys::Reflect::set(&options, &JsValue::from_str("theme"), &JsValue::from_str("default"))
        .map_err(js_err)?;
    js_sys::Reflect::set(
        &options,
        &JsValue::from_str("securityLevel"),
        &JsValue::from_str("loose"),
    )
    .map_err(js_err)?;
    initialize.call1(&mermaid, &options).map_err(js_err)?;
    Ok(())
}

/// Renders `definition` and injects the resulting SVG into the element with
/// id `container_id`.
///
/// # Errors
///
/// Returns a message when the engine rejects the definition or the container
/// element is missing.
#[cfg(feature = "hydrate")]
pub async fn render_into(container_id: &str, definition: &str) -> Result<(), String> {
    let mermaid = renderer_global()?;
    let render = member_function(&mermaid, "render")?;
    let value = render
        .call2(&mermaid, &JsValue::from_str("graph-svg"), &JsValue::from_str(definition))
        .map_err(js_err)?;
    let promise: js_sys::Promise = value
        .dyn_into()
        .map_err(|_| "render did not return a promise".to_owned())?;
    let rendered = wasm_bindgen_futures::JsFuture::from(promise).await.map_err(js_err)?;
    let svg = js_sys::Reflect::get(&rendered, &JsValue::from_str("svg"))
        .map_err(js_err)?
        .as_string()
        .ok_or_else(|| "render result missing svg".to_owned())?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document".to_owned())?;
    let container = document
        .get_element_by_id(container_id)
        .ok_or_else(|| format!("missing container #{container_id}"))?;
    container.set_inner_html(&svg);
    Ok(())
}

#[cfg(feature = "hydrate")]
fn renderer_global() -> Result<js_sys::Object, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_owned())?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str("mermaid")).map_err(js_err)?;
    value
        .dyn_into::<js_sys::Object>()
        .map_err(|_| "diagram renderer not loaded".to_owned())
}

#[cfg(feature = "hydrate")]
fn member_function(target: &js_sys::Object, name: &str) -> Result<js_sys::Function, String> {
    js_sys::Reflect::get(target, &JsValue::from_str(name))
        .map_err(js_err)?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| format!("{name} is not callable"))
}

#[cfg(feature = "hydrate")]
fn js_err(value: JsValue) -> String {
    format!("{value:?}")
}
