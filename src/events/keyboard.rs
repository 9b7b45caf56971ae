use crate::frame::Clock;
use crate::input::direction_for_key;
use prism_core::Session;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// ArrowLeft / ArrowRight behave like the on-screen arrows.
pub fn wire_keyboard(session: Rc<RefCell<Session>>, clock: Clock) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.repeat() {
            return;
        }
        let Some(direction) = direction_for_key(&ev.key()) else {
            return;
        };
        let mut session = session.borrow_mut();
        if !session.is_loaded() {
            return;
        }
        log::info!("[keys] {:?}", direction);
        session.navigate(direction, clock.now_ms());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
