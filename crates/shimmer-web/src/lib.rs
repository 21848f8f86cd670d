#![cfg(target_arch = "wasm32")]
//! Wires the shimmer page effects onto the host page: custom cursor, card
//! tilt, pointer-reactive particle canvas, and scroll-spy nav highlighting.
//! All state lives in a handful of `Rc<RefCell<_>>` cells shared between
//! event closures and the frame loop; everything runs on the page's one
//! thread.

use std::cell::RefCell;
use std::rc::Rc;

use shimmer_core::{ParticleField, PointerState};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod cursor;
mod dom;
mod events;
mod frame;
mod tilt;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("shimmer-web starting");

    // Required page structure is a hard precondition; surface a missing
    // element as a load error instead of running half-wired.
    init().map_err(|e| JsValue::from_str(&format!("{e:?}")))
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let cursor_dot = dom::require_element(&document, "cursor")?;
    let cursor_blur = dom::require_element(&document, "cursor-blur")?;
    let canvas = dom::require_canvas(&document, "particles-canvas")?;
    let ctx = dom::canvas_context_2d(&canvas)?;

    let (width, height) = dom::sync_canvas_to_viewport(&window, &canvas);
    let seed = js_sys::Date::now() as u64;
    let field = Rc::new(RefCell::new(ParticleField::new(width, height, seed)));
    let pointer = Rc::new(RefCell::new(PointerState::default()));

    cursor::wire(&document, &cursor_dot, &cursor_blur)?;
    tilt::wire(&document)?;
    events::wire_pointer_tracking(&window, pointer.clone());
    events::wire_resize(&window, canvas.clone(), field.clone());
    events::wire_scroll_spy(&window, &document)?;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        canvas,
        ctx,
        field,
        pointer,
    }));
    let frame_loop = frame::start_loop(frame_ctx);
    events::wire_teardown(&window, frame_loop);

    Ok(())
}
