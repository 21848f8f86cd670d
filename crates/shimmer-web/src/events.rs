//! Window-level wiring: pointer tracking for the particle field,
//! resize-driven field rebuilds, the scroll-spy pass, and teardown.

use std::cell::RefCell;
use std::rc::Rc;

use shimmer_core::{current_section, link_targets, ParticleField, PointerState};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::frame::FrameLoop;

const SECTION_SELECTOR: &str = "section";
const NAV_LINK_SELECTOR: &str = "nav a";
const ACTIVE_CLASS: &str = "active";

/// Keep the shared pointer position current; clear it when the pointer
/// leaves the window so the field falls back to pure drift.
pub fn wire_pointer_tracking(window: &web::Window, pointer: Rc<RefCell<PointerState>>) {
    let pointer_move = pointer.clone();
    dom::add_mouse_listener(window.as_ref(), "mousemove", move |ev| {
        pointer_move
            .borrow_mut()
            .set(ev.client_x() as f32, ev.client_y() as f32);
    });

    dom::add_listener(window.as_ref(), "mouseout", move || {
        pointer.borrow_mut().clear();
    });
}

/// Resize the canvas backing store with the viewport and rebuild the field
/// from scratch at the new dimensions.
pub fn wire_resize(
    window: &web::Window,
    canvas: web::HtmlCanvasElement,
    field: Rc<RefCell<ParticleField>>,
) {
    let window_resize = window.clone();
    dom::add_listener(window.as_ref(), "resize", move || {
        let (width, height) = dom::sync_canvas_to_viewport(&window_resize, &canvas);
        field.borrow_mut().resize(width, height);
    });
}

/// Highlight the nav link for whichever section the viewport has scrolled
/// into. Section offsets are re-read on every scroll so layout changes are
/// picked up; the element sets themselves are captured once at startup.
pub fn wire_scroll_spy(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let sections: Vec<web::HtmlElement> = dom::query_all(document, SECTION_SELECTOR)?
        .into_iter()
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .collect();
    let links = dom::query_all(document, NAV_LINK_SELECTOR)?;
    log::info!(
        "scroll spy: {} sections, {} nav links",
        sections.len(),
        links.len()
    );

    let window_scroll = window.clone();
    dom::add_listener(window.as_ref(), "scroll", move || {
        let scroll_y = window_scroll.page_y_offset().unwrap_or(0.0);
        let tops: Vec<f64> = sections.iter().map(|s| s.offset_top() as f64).collect();
        let current_id = match current_section(scroll_y, &tops) {
            Some(i) => sections[i].id(),
            None => String::new(),
        };
        for link in &links {
            let classes = link.class_list();
            let _ = classes.remove_1(ACTIVE_CLASS);
            if let Some(href) = link.get_attribute("href") {
                if link_targets(&href, &current_id) {
                    let _ = classes.add_1(ACTIVE_CLASS);
                }
            }
        }
    });
    Ok(())
}

/// Stop the frame loop when the page goes away.
pub fn wire_teardown(window: &web::Window, frame_loop: FrameLoop) {
    dom::add_listener(window.as_ref(), "pagehide", move || {
        frame_loop.stop();
    });
}
