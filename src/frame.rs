use crate::dom;
use crate::render;
use instant::Instant;
use prism_core::{Cursor, DrawList, SceneUniforms, Session};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Milliseconds since start-up, shared by input handlers and the frame loop.
#[derive(Clone, Copy)]
pub struct Clock {
    started: Instant,
}

impl Clock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn now_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }
}

pub struct FrameContext {
    pub session: Rc<RefCell<Session>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState>,
    pub clock: Clock,
    pub draw_list: DrawList,
    pub cursor: Cursor,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now_ms = self.clock.now_ms();
        let uniforms;
        {
            let mut session = self.session.borrow_mut();
            let report = session.frame(now_ms);
            if report.cursor != self.cursor {
                dom::set_cursor(&self.canvas, report.cursor);
                self.cursor = report.cursor;
            }
            self.draw_list.rebuild(session.scene());
            uniforms = SceneUniforms::new(session.camera(), &session.config().scene);
        }

        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
        match gpu.render(&uniforms, &self.draw_list) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
            Err(e) => log::error!("[gpu] render error: {:?}", e),
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    clear: [f64; 3],
) -> Option<render::GpuState> {
    match render::GpuState::new(canvas, clear).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(closure) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(closure.as_ref().unchecked_ref());
    }
}
