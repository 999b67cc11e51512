use wasm_bindgen::prelude::*;

/// Routes `log` records to the browser console. `?debug=1` on the page URL
/// turns on the per-stroke and per-zoom records.
pub fn init(debug: bool) -> Result<(), JsValue> {
    let level = if debug {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level).map_err(|error| JsValue::from_str(&error.to_string()))
}
