//! Custom cursor: a dot pinned to the pointer, a blur halo that trails it,
//! and a swell while hovering anything interactive.

use shimmer_core::{BLUR_TRAIL_MS, CURSOR_ACCENT, CURSOR_HOVER_SCALE};
use web_sys as web;

use crate::dom;

/// Elements that swell the cursor on hover.
const HOVER_SELECTOR: &str = "a, button, .tilt-element";

pub fn wire(
    document: &web::Document,
    cursor: &web::HtmlElement,
    blur: &web::HtmlElement,
) -> anyhow::Result<()> {
    // Armed once; afterwards every left/top write on the blur element glides
    // over the trail duration while the dot snaps instantly.
    let _ = blur.style().set_property(
        "transition",
        &format!("left {BLUR_TRAIL_MS}ms ease-out, top {BLUR_TRAIL_MS}ms ease-out"),
    );

    {
        let cursor = cursor.clone();
        let blur = blur.clone();
        dom::add_mouse_listener(document.as_ref(), "mousemove", move |ev| {
            let left = format!("{}px", ev.client_x());
            let top = format!("{}px", ev.client_y());
            let _ = cursor.style().set_property("left", &left);
            let _ = cursor.style().set_property("top", &top);
            let _ = blur.style().set_property("left", &left);
            let _ = blur.style().set_property("top", &top);
        });
    }

    let hoverables = dom::query_all(document, HOVER_SELECTOR)?;
    log::info!("cursor: hover swell on {} elements", hoverables.len());
    for el in hoverables {
        let cursor_enter = cursor.clone();
        let cursor_leave = cursor.clone();
        dom::wire_hover(
            &el,
            move |_| swell(&cursor_enter),
            move |_| relax(&cursor_leave),
        );
    }
    Ok(())
}

fn swell(cursor: &web::HtmlElement) {
    let style = cursor.style();
    let _ = style.set_property(
        "transform",
        &format!("translate(-50%, -50%) scale({CURSOR_HOVER_SCALE})"),
    );
    let _ = style.set_property("background", "transparent");
    let _ = style.set_property("border", &format!("1px solid {CURSOR_ACCENT}"));
}

fn relax(cursor: &web::HtmlElement) {
    let style = cursor.style();
    let _ = style.set_property("transform", "translate(-50%, -50%) scale(1)");
    let _ = style.set_property("background", CURSOR_ACCENT);
    let _ = style.set_property("border", "none");
}
