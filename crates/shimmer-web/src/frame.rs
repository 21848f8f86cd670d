//! The per-frame simulate-and-redraw pass, driven by requestAnimationFrame.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use shimmer_core::{ParticleField, PointerState};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub field: Rc<RefCell<ParticleField>>,
    pub pointer: Rc<RefCell<PointerState>>,
}

impl FrameContext {
    /// Clear the whole surface, advance every particle against the current
    /// pointer, redraw each as a filled circle.
    pub fn frame(&mut self) {
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, width, height);

        let pointer = self.pointer.borrow().position;
        let mut field = self.field.borrow_mut();
        field.step(pointer);
        for particle in field.particles() {
            self.ctx.begin_path();
            let _ = self.ctx.arc(
                particle.position.x as f64,
                particle.position.y as f64,
                particle.size as f64,
                0.0,
                std::f64::consts::PI * 2.0,
            );
            self.ctx.set_fill_style_str(&particle.color.css());
            self.ctx.fill();
        }
    }
}

/// Handle for stopping a running frame loop; once stopped the tick closure
/// simply stops rescheduling itself.
#[derive(Clone)]
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn stop(&self) {
        self.running.set(false);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let running = Rc::new(Cell::new(true));
    let running_tick = running.clone();
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
    FrameLoop { running }
}
