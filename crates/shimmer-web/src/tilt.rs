//! Per-card pointer tilt: rotate toward the pointer while it is inside the
//! card, snap flat when it leaves.

use glam::Vec2;
use shimmer_core::{rest_transform, tilt_for_offset};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

const TILT_SELECTOR: &str = ".tilt-element";

pub fn wire(document: &web::Document) -> anyhow::Result<()> {
    let cards = dom::query_all(document, TILT_SELECTOR)?;
    log::info!("tilt: {} cards", cards.len());
    for card in cards {
        let card: web::HtmlElement = match card.dyn_into() {
            Ok(el) => el,
            Err(_) => continue,
        };

        let card_move = card.clone();
        dom::add_mouse_listener(card.as_ref(), "mousemove", move |ev| {
            let rect = card_move.get_bounding_client_rect();
            let local = Vec2::new(
                ev.client_x() as f32 - rect.left() as f32,
                ev.client_y() as f32 - rect.top() as f32,
            );
            let tilt = tilt_for_offset(local, rect.width() as f32, rect.height() as f32);
            let _ = card_move.style().set_property("transform", &tilt.transform());
        });

        let card_leave = card.clone();
        dom::add_mouse_listener(card.as_ref(), "mouseleave", move |_| {
            let _ = card_leave.style().set_property("transform", &rest_transform());
        });
    }
    Ok(())
}
