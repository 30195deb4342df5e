pub mod browser_store;
pub mod runner;

pub use browser_store::BrowserStore;
pub use runner::SessionRunner;

use std::cell::RefCell;
use std::rc::Rc;

use linmo_core::InputEvent;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

thread_local! {
    static RUNNER: RefCell<Option<SessionRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut SessionRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Session not initialized. Call trace_init() first.");
        f(runner)
    })
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Initialize the tracer on the canvas with the given element id: size the
/// backing store, hook pointer and resize events, start the frame loop.
#[wasm_bindgen]
pub fn trace_init(canvas_id: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str("canvas element not found"))?
        .dyn_into::<web_sys::HtmlCanvasElement>()?;

    let runner = SessionRunner::new(canvas.clone())?;
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });

    attach_pointer_listeners(&canvas)?;
    attach_resize_listener()?;
    start_frame_loop();
    log::info!("linmo: initialized");
    Ok(())
}

fn attach_pointer_listeners(canvas: &web_sys::HtmlCanvasElement) -> Result<(), JsValue> {
    let down = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
        with_runner(|r| {
            let (x, y) = r.surface_point(e.client_x() as f64, e.client_y() as f64);
            r.push_input(InputEvent::PointerDown { x, y });
        });
    }) as Box<dyn FnMut(_)>);
    canvas.add_event_listener_with_callback("mousedown", down.as_ref().unchecked_ref())?;
    down.forget();

    let moved = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
        with_runner(|r| {
            let (x, y) = r.surface_point(e.client_x() as f64, e.client_y() as f64);
            r.push_input(InputEvent::PointerMove { x, y });
        });
    }) as Box<dyn FnMut(_)>);
    canvas.add_event_listener_with_callback("mousemove", moved.as_ref().unchecked_ref())?;
    moved.forget();

    // Leaving the canvas ends the stroke, same as lifting the button.
    for name in ["mouseup", "mouseleave"] {
        let up = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            with_runner(|r| r.push_input(InputEvent::PointerUp));
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback(name, up.as_ref().unchecked_ref())?;
        up.forget();
    }

    let touch_start = Closure::wrap(Box::new(move |e: web_sys::TouchEvent| {
        e.prevent_default();
        if let Some(touch) = e.touches().get(0) {
            with_runner(|r| {
                let (x, y) = r.surface_point(touch.client_x() as f64, touch.client_y() as f64);
                r.push_input(InputEvent::PointerDown { x, y });
            });
        }
    }) as Box<dyn FnMut(_)>);
    canvas.add_event_listener_with_callback("touchstart", touch_start.as_ref().unchecked_ref())?;
    touch_start.forget();

    let touch_move = Closure::wrap(Box::new(move |e: web_sys::TouchEvent| {
        e.prevent_default();
        if let Some(touch) = e.touches().get(0) {
            with_runner(|r| {
                let (x, y) = r.surface_point(touch.client_x() as f64, touch.client_y() as f64);
                r.push_input(InputEvent::PointerMove { x, y });
            });
        }
    }) as Box<dyn FnMut(_)>);
    canvas.add_event_listener_with_callback("touchmove", touch_move.as_ref().unchecked_ref())?;
    touch_move.forget();

    let touch_end = Closure::wrap(Box::new(move |e: web_sys::TouchEvent| {
        e.prevent_default();
        with_runner(|r| r.push_input(InputEvent::PointerUp));
    }) as Box<dyn FnMut(_)>);
    canvas.add_event_listener_with_callback("touchend", touch_end.as_ref().unchecked_ref())?;
    touch_end.forget();

    Ok(())
}

fn attach_resize_listener() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let on_resize = Closure::wrap(Box::new(move || {
        with_runner(|r| r.handle_resize());
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();
    Ok(())
}

fn request_frame(callback: &FrameCallback) {
    if let (Some(window), Some(closure)) = (web_sys::window(), callback.borrow().as_ref()) {
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    }
}

/// Self-rescheduling animation frame loop. The frame timestamp is the only
/// clock the session ever sees.
fn start_frame_loop() {
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let hook = callback.clone();
    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        with_runner(|r| r.tick(now_ms));
        request_frame(&hook);
    }) as Box<dyn FnMut(f64)>));
    request_frame(&callback);
}

// ---- UI commands ----

#[wasm_bindgen]
pub fn trace_validate() {
    with_runner(|r| r.push_input(InputEvent::Validate));
}

#[wasm_bindgen]
pub fn trace_clear() {
    with_runner(|r| r.push_input(InputEvent::Clear));
}

#[wasm_bindgen]
pub fn trace_skip() {
    with_runner(|r| r.push_input(InputEvent::Skip));
}

/// Merge a glyph pack (JSON) over the built-in set.
#[wasm_bindgen]
pub fn trace_load_glyphs(json: &str) -> Result<(), JsValue> {
    with_runner(|r| r.load_glyphs(json))
}

// ---- State accessors ----

/// 0 none, 1 success, 2 retry.
#[wasm_bindgen]
pub fn trace_feedback() -> u8 {
    with_runner(|r| r.feedback_code())
}

/// One-based position of the current character.
#[wasm_bindgen]
pub fn trace_position() -> u32 {
    with_runner(|r| r.position())
}

#[wasm_bindgen]
pub fn trace_corpus_len() -> u32 {
    with_runner(|r| r.corpus_len())
}

#[wasm_bindgen]
pub fn trace_corpus_title() -> String {
    with_runner(|r| r.corpus_title())
}

#[wasm_bindgen]
pub fn trace_current_char() -> String {
    with_runner(|r| r.current_char())
}
