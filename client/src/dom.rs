use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, EventTarget, HtmlButtonElement, HtmlCanvasElement, HtmlElement, HtmlObjectElement,
    MouseEvent, Window,
};

use floorsketch_shared::{Config, GestureMode, Layout, PointerSample, Rect, Target};

pub const CONFIG_ELEMENT_ID: &str = "floorsketch-config";

pub fn get_element<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing element: {id}")))?;
    element
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Invalid element type: {id}")))
}

pub fn debug_enabled(window: &Window) -> bool {
    let search = window.location().search().ok().unwrap_or_default();
    search.contains("debug=1") || search.contains("debug=true")
}

/// Reads the optional JSON config block; anything unusable falls back to
/// the defaults.
pub fn read_config(document: &Document) -> Config {
    let Some(text) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return Config::default();
    };
    match Config::from_json(&text) {
        Ok(config) => config,
        Err(error) => {
            log::warn!("Ignoring page config: {error}");
            Config::default()
        }
    }
}

pub fn event_target(canvas: &HtmlCanvasElement, event: &MouseEvent) -> Target {
    let canvas: &EventTarget = canvas.as_ref();
    if event.target().as_ref() == Some(canvas) {
        Target::Canvas
    } else {
        Target::Other
    }
}

pub fn pointer_sample(canvas: &HtmlCanvasElement, event: &MouseEvent) -> PointerSample {
    let rect = canvas.get_bounding_client_rect();
    PointerSample::from_client(
        event.client_x() as f64,
        event.client_y() as f64,
        Rect {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        },
    )
}

fn place(element: &HtmlElement, left: f64, top: f64) {
    let style = element.style();
    let _ = style.set_property("left", &format!("{left}px"));
    let _ = style.set_property("top", &format!("{top}px"));
}

/// Moves the canvas and the floorplan together. The canvas pixel size has
/// already been set by its surface.
///
/// `layout` is in viewport coordinates; the style offsets are relative to
/// the canvas's offset parent.
pub fn apply_layout(canvas: &HtmlCanvasElement, floorplan: &HtmlObjectElement, layout: &Layout) {
    let rect = canvas.get_bounding_client_rect();
    let origin_x = rect.left() - canvas.offset_left() as f64;
    let origin_y = rect.top() - canvas.offset_top() as f64;
    let left = layout.left - origin_x;
    let top = layout.top - origin_y;
    place(canvas, left, top);
    size_floorplan(floorplan, layout.width, layout.height);
    place(floorplan, left, top);
}

pub fn size_floorplan(floorplan: &HtmlObjectElement, width: f64, height: f64) {
    floorplan.set_width(&width.round().to_string());
    floorplan.set_height(&height.round().to_string());
}

pub fn set_mode_button(button: &HtmlButtonElement, mode: GestureMode) {
    button.set_text_content(Some(&format!("Switch to {} mode", mode.toggled().label())));
    let _ = button.set_attribute("data-mode", mode.label());
}
