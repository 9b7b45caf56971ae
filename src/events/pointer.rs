//! Mouse and touch listeners, both funnelled into `Session::handle_pointer`.

use super::dispatch;
use crate::frame::Clock;
use crate::input::{canvas_point, suppresses_mouse_default};
use glam::Vec2;
use prism_core::pointer::from_touch;
use prism_core::{PointerEvent, PointerPhase, Session, TouchPhase};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub session: Rc<RefCell<Session>>,
    pub clock: Clock,
    /// Last position seen, reused by touchend which carries no touches.
    pub last_position: Rc<Cell<Vec2>>,
}

impl PointerWiring {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        session: Rc<RefCell<Session>>,
        clock: Clock,
    ) -> Self {
        Self {
            canvas,
            session,
            clock,
            last_position: Rc::new(Cell::new(Vec2::ZERO)),
        }
    }

    fn to_canvas(&self, client_x: i32, client_y: i32) -> Vec2 {
        let rect = self.canvas.get_bounding_client_rect();
        canvas_point(client_x as f64, client_y as f64, rect.left(), rect.top())
    }

    fn feed(&self, event: PointerEvent) {
        self.last_position.set(event.position);
        let activation = self
            .session
            .borrow_mut()
            .handle_pointer(event, self.clock.now_ms());
        if let Some(activation) = activation {
            dispatch(activation);
        }
    }
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_mouse(&w, "mousedown", PointerPhase::Down);
    wire_mouse(&w, "mousemove", PointerPhase::Move);
    wire_mouse(&w, "mouseup", PointerPhase::Up);
    wire_mouse(&w, "mouseleave", PointerPhase::Leave);
    wire_touch(&w, "touchstart", TouchPhase::Start);
    wire_touch(&w, "touchmove", TouchPhase::Move);
    wire_touch(&w, "touchend", TouchPhase::End);
    wire_touch(&w, "touchcancel", TouchPhase::Cancel);
}

fn wire_mouse(w: &PointerWiring, name: &str, phase: PointerPhase) {
    let w = w.clone();
    let target = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if suppresses_mouse_default(phase) {
            ev.prevent_default();
        }
        let pos = w.to_canvas(ev.client_x(), ev.client_y());
        w.feed(PointerEvent::new(phase, pos.x, pos.y));
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_touch(w: &PointerWiring, name: &str, phase: TouchPhase) {
    let w = w.clone();
    let target = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        let first = ev
            .touches()
            .get(0)
            .map(|t| w.to_canvas(t.client_x(), t.client_y()));
        if let Some(event) = from_touch(phase, first, w.last_position.get()) {
            w.feed(event);
        }
        // Keep the page from scrolling while a prism is dragged
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
    closure.forget();
}
