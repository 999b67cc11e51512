use web_sys::{HtmlButtonElement, HtmlObjectElement};

use floorsketch_shared::{Effect, InputEvent, Session};

use crate::dom::{apply_layout, set_mode_button};
use crate::render::CanvasSurface;

pub struct State {
    pub session: Session,
    pub surface: CanvasSurface,
    pub floorplan: HtmlObjectElement,
    pub mode_button: HtmlButtonElement,
}

impl State {
    /// Runs one input through the session and mirrors the result on the page.
    pub fn handle(&mut self, event: InputEvent) {
        let effect = match self.session.dispatch(event, &mut self.surface) {
            Ok(effect) => effect,
            Err(error) => {
                log::warn!("Input dropped: {error}");
                return;
            }
        };
        match effect {
            Effect::Relayout(layout) => {
                apply_layout(self.surface.canvas(), &self.floorplan, &layout);
            }
            Effect::ModeChanged(mode) => {
                set_mode_button(&self.mode_button, mode);
                log::info!("Gesture mode {}", mode.label());
            }
            Effect::Drew | Effect::None => {}
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Document, HtmlCanvasElement, HtmlElement};

    use floorsketch_shared::{Config, GestureMode, PointerSample, Rect, Surface, Target};

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn create<T: JsCast>(document: &Document, tag: &str) -> T {
        document.create_element(tag).unwrap().dyn_into().unwrap()
    }

    fn absolute(element: &HtmlElement, left: &str, top: &str) {
        let style = element.style();
        style.set_property("position", "absolute").unwrap();
        style.set_property("left", left).unwrap();
        style.set_property("top", top).unwrap();
    }

    /// A positioned stage holding a 300x300 canvas and its floorplan, so the
    /// canvas's offset parent is not the viewport.
    fn page() -> (HtmlElement, State) {
        let document = document();
        let stage: HtmlElement = create(&document, "div");
        absolute(&stage, "40px", "30px");
        let canvas: HtmlCanvasElement = create(&document, "canvas");
        absolute(&canvas, "0px", "0px");
        let floorplan: HtmlObjectElement = create(&document, "object");
        absolute(&floorplan, "0px", "0px");
        let mode_button: HtmlButtonElement = create(&document, "button");
        stage.append_child(&floorplan).unwrap();
        stage.append_child(&canvas).unwrap();
        stage.append_child(&mode_button).unwrap();
        document.body().unwrap().append_child(&stage).unwrap();

        let session = Session::new(&Config::default()).unwrap();
        let mut surface = CanvasSurface::new(canvas).unwrap();
        surface.resize(300.0, 300.0);
        set_mode_button(&mode_button, session.mode());
        let state = State {
            session,
            surface,
            floorplan,
            mode_button,
        };
        (stage, state)
    }

    fn canvas_rect(state: &State) -> Rect {
        let rect = state.surface.canvas().get_bounding_client_rect();
        Rect {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }

    #[wasm_bindgen_test]
    fn zoom_moves_canvas_and_floorplan_under_the_pointer() {
        let (stage, mut state) = page();
        let before = canvas_rect(&state);
        let sample = PointerSample::from_client(before.left + 75.0, before.top + 150.0, before);
        assert!(sample.inside);
        state.handle(InputEvent::PointerMove {
            target: Target::Canvas,
            sample,
            timestamp: 0.0,
        });

        for _ in 0..100 {
            state.handle(InputEvent::Key {
                key: "i".to_string(),
            });
        }

        let after = canvas_rect(&state);
        assert_eq!(state.surface.size(), (600.0, 600.0));
        assert!((after.width - 600.0).abs() < 0.5);
        assert!((after.left - (before.left - 75.0)).abs() < 0.5, "left {}", after.left);
        assert!((after.top - (before.top - 150.0)).abs() < 0.5, "top {}", after.top);
        // Same screen pixel under the pointer as before the zoom.
        assert!((after.left + 0.25 * after.width - (before.left + 75.0)).abs() < 0.5);

        let canvas_style = state.surface.canvas().style();
        let floorplan_style = state.floorplan.style();
        for property in ["left", "top"] {
            assert_eq!(
                canvas_style.get_property_value(property).unwrap(),
                floorplan_style.get_property_value(property).unwrap()
            );
        }
        // The stage sits at the canvas's old viewport position, so the style
        // offset is the viewport shift.
        let left: f64 = canvas_style
            .get_property_value("left")
            .unwrap()
            .trim_end_matches("px")
            .parse()
            .unwrap();
        assert!((left + 75.0).abs() < 0.5, "style left {left}");
        assert_eq!(state.floorplan.width(), "600");
        assert_eq!(state.floorplan.height(), "600");

        stage.remove();
    }

    #[wasm_bindgen_test]
    fn mode_switch_relabels_the_button() {
        let (stage, mut state) = page();
        assert_eq!(
            state.mode_button.text_content().as_deref(),
            Some("Switch to move mode")
        );

        state.handle(InputEvent::SwitchMode);
        assert_eq!(state.session.mode(), GestureMode::Move);
        assert_eq!(
            state.mode_button.text_content().as_deref(),
            Some("Switch to draw mode")
        );
        assert_eq!(
            state.mode_button.get_attribute("data-mode").as_deref(),
            Some("move")
        );

        state.handle(InputEvent::SwitchMode);
        assert_eq!(
            state.mode_button.text_content().as_deref(),
            Some("Switch to move mode")
        );

        stage.remove();
    }
}
