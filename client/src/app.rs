use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Event, HtmlButtonElement, HtmlCanvasElement, HtmlInputElement, HtmlObjectElement,
    KeyboardEvent, PointerEvent, WheelEvent,
};

use floorsketch_shared::{InputEvent, Session, Surface};

use crate::dom::{
    debug_enabled, event_target, get_element, pointer_sample, read_config, set_mode_button,
    size_floorplan,
};
use crate::logging;
use crate::render::CanvasSurface;
use crate::state::State;

fn document_ready_state(document: &web_sys::Document) -> Option<String> {
    Reflect::get(document.as_ref(), &JsValue::from_str("readyState"))
        .ok()?
        .as_string()
}

#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;
    logging::init(debug_enabled(&window))?;

    if document_ready_state(&document).as_deref() == Some("complete") {
        return start_app();
    }

    let onload_started = Rc::new(Cell::new(false));
    let onload = Closure::<dyn FnMut(Event)>::new(move |_| {
        if onload_started.replace(true) {
            return;
        }
        if let Err(err) = start_app() {
            log::error!("Startup failed: {err:?}");
        }
    });
    window.add_event_listener_with_callback("load", onload.as_ref().unchecked_ref())?;
    onload.forget();

    Ok(())
}

fn start_app() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Missing document"))?;

    let config = read_config(&document);
    let canvas: HtmlCanvasElement = get_element(&document, "canvas")?;
    let floorplan: HtmlObjectElement = get_element(&document, "floorplan")?;
    let continuous_input: HtmlInputElement = get_element(&document, "continuous")?;
    let visitor_button: HtmlButtonElement = get_element(&document, "newVisitor")?;
    let mode_button: HtmlButtonElement = get_element(&document, "modeButton")?;

    let session =
        Session::new(&config).map_err(|error| JsValue::from_str(&error.to_string()))?;
    let (base_width, base_height) = session.base_size();
    let mut surface = CanvasSurface::new(canvas.clone())?;
    surface.resize(base_width, base_height);
    surface.clear();

    floorplan.set_data(&config.background);
    size_floorplan(&floorplan, base_width, base_height);
    set_mode_button(&mode_button, session.mode());
    continuous_input.set_checked(session.continuous());

    let state = Rc::new(RefCell::new(State {
        session,
        surface,
        floorplan,
        mode_button: mode_button.clone(),
    }));

    {
        let down_state = state.clone();
        let down_canvas = canvas.clone();
        let ondown = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            let input = InputEvent::PointerDown {
                target: event_target(&down_canvas, &event),
                sample: pointer_sample(&down_canvas, &event),
                timestamp: js_sys::Date::now(),
            };
            down_state.borrow_mut().handle(input);
        });
        canvas.add_event_listener_with_callback("pointerdown", ondown.as_ref().unchecked_ref())?;
        ondown.forget();
    }

    {
        let move_state = state.clone();
        let move_canvas = canvas.clone();
        let onmove = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
            let input = InputEvent::PointerMove {
                target: event_target(&move_canvas, &event),
                sample: pointer_sample(&move_canvas, &event),
                timestamp: js_sys::Date::now(),
            };
            move_state.borrow_mut().handle(input);
        });
        // On the document so leaving the canvas is seen as a move elsewhere.
        document.add_event_listener_with_callback("pointermove", onmove.as_ref().unchecked_ref())?;
        onmove.forget();
    }

    {
        let stop_state = state.clone();
        let onstop = Closure::<dyn FnMut(PointerEvent)>::new(move |_| {
            stop_state.borrow_mut().handle(InputEvent::PointerUp);
        });
        canvas.add_event_listener_with_callback("pointerup", onstop.as_ref().unchecked_ref())?;
        canvas.add_event_listener_with_callback("pointercancel", onstop.as_ref().unchecked_ref())?;
        onstop.forget();
    }

    {
        let zoom_state = state.clone();
        let onwheel = Closure::<dyn FnMut(WheelEvent)>::new(move |event: WheelEvent| {
            if !event.ctrl_key() {
                return;
            }
            // Keep the browser from zooming the whole page.
            event.prevent_default();
            event.stop_immediate_propagation();
            zoom_state.borrow_mut().handle(InputEvent::Wheel {
                ctrl: true,
                delta_y: event.delta_y(),
            });
        });
        canvas.add_event_listener_with_callback("wheel", onwheel.as_ref().unchecked_ref())?;
        onwheel.forget();
    }

    {
        let key_state = state.clone();
        let onkeydown = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            key_state
                .borrow_mut()
                .handle(InputEvent::Key { key: event.key() });
        });
        window.add_event_listener_with_callback("keydown", onkeydown.as_ref().unchecked_ref())?;
        onkeydown.forget();
    }

    {
        let toggle_state = state.clone();
        let toggle_input = continuous_input.clone();
        let onchange = Closure::<dyn FnMut(Event)>::new(move |_| {
            toggle_state
                .borrow_mut()
                .handle(InputEvent::Toggle(toggle_input.checked()));
        });
        continuous_input
            .add_event_listener_with_callback("change", onchange.as_ref().unchecked_ref())?;
        onchange.forget();
    }

    {
        let visitor_state = state.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            visitor_state.borrow_mut().handle(InputEvent::NewVisitor);
        });
        visitor_button.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    {
        let mode_state = state.clone();
        let onclick = Closure::<dyn FnMut(Event)>::new(move |_| {
            mode_state.borrow_mut().handle(InputEvent::SwitchMode);
        });
        mode_button.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
        onclick.forget();
    }

    log::info!(
        "floorsketch ready canvas={base_width}x{base_height} background={}",
        config.background
    );
    Ok(())
}
