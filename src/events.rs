mod keyboard;
mod pointer;

pub use keyboard::wire_keyboard;
pub use pointer::{wire_pointer_handlers, PointerWiring};

use crate::dom;
use crate::fetch;
use prism_core::{Action, Activation, Command, Session};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Hand an activation to the browser. Navigation was already applied.
pub fn dispatch(activation: Activation) {
    match activation.action {
        Action::Url(Some(url)) => dom::open_url(&url),
        Action::Command(Command::FunFact) => spawn_local(fetch::log_fun_fact()),
        Action::Url(None) | Action::Command(Command::Navigate(_)) => {}
    }
}

pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, session: Rc<RefCell<Session>>) {
    let canvas = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas);
        let viewport = dom::canvas_viewport(&canvas);
        session
            .borrow_mut()
            .set_viewport(viewport.width, viewport.height);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
