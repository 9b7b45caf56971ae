use crate::constants::LINK_TARGET;
use prism_core::{Cursor, Viewport};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Keep the backing store at CSS size times devicePixelRatio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// The canvas' CSS box, which is the space pointer coordinates live in.
pub fn canvas_viewport(canvas: &web::HtmlCanvasElement) -> Viewport {
    let rect = canvas.get_bounding_client_rect();
    Viewport::new(rect.width() as f32, rect.height() as f32)
}

pub fn set_cursor(canvas: &web::HtmlCanvasElement, cursor: Cursor) {
    _ = canvas.style().set_property("cursor", cursor.css());
}

pub fn open_url(url: &str) {
    let Some(w) = web::window() else {
        return;
    };
    if let Err(e) = w.open_with_url_and_target(url, LINK_TARGET) {
        log::warn!("[click] could not open {}: {:?}", url, e);
    }
}
