#![cfg(target_arch = "wasm32")]
use constants::{texture_url, CANVAS_ID, CONFIG_PATH, FONT_PATH};
use prism_core::mesh::clear_rgb;
use prism_core::{AppConfig, Cursor, DrawList, Session};
use prism_render::TextureImage;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod fetch;
mod frame;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("prism-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ID}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Keep the backing store at CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);

    let config = load_config().await;
    let clear = clear_rgb(&config.scene);
    let session = Rc::new(RefCell::new(Session::new(
        config,
        dom::canvas_viewport(&canvas),
    )?));
    let clock = frame::Clock::start();

    events::wire_canvas_resize(&canvas, session.clone());
    events::wire_pointer_handlers(events::PointerWiring::new(
        canvas.clone(),
        session.clone(),
        clock,
    ));
    events::wire_keyboard(session.clone(), clock);

    // Rendering starts right away; prisms appear once the font and images resolve
    let gpu = frame::init_gpu(&canvas, clear).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session: session.clone(),
        canvas,
        gpu,
        clock,
        draw_list: DrawList::new(),
        cursor: Cursor::Default,
    }));
    frame::start_loop(frame_ctx.clone());

    let keys = session.borrow().texture_keys().to_vec();
    for key in keys {
        spawn_local(load_texture(key, session.clone(), frame_ctx.clone()));
    }
    spawn_local(load_font(session));
    Ok(())
}

async fn load_config() -> AppConfig {
    let text = match fetch::fetch_text(CONFIG_PATH).await {
        Ok(text) => text,
        Err(e) => {
            log::info!("[config] using defaults ({})", e);
            return AppConfig::default();
        }
    };
    match AppConfig::from_json(&text) {
        Ok(config) => {
            log::info!("[config] loaded {}", CONFIG_PATH);
            config
        }
        Err(e) => {
            log::warn!("[config] {} rejected, using defaults: {}", CONFIG_PATH, e);
            AppConfig::default()
        }
    }
}

async fn load_font(session: Rc<RefCell<Session>>) {
    let json = match fetch::fetch_text(FONT_PATH).await {
        Ok(json) => Some(json),
        Err(e) => {
            log::warn!("[load] {}", e);
            None
        }
    };
    session.borrow_mut().resolve_font_json(json.as_deref());
}

async fn load_texture(
    key: &'static str,
    session: Rc<RefCell<Session>>,
    frame_ctx: Rc<RefCell<frame::FrameContext>>,
) {
    let image = match fetch_texture(key).await {
        Ok(image) => Some(image),
        Err(e) => {
            log::warn!("[load] {}: {}", key, e);
            None
        }
    };
    if let Some(image) = &image {
        if let Some(gpu) = frame_ctx.borrow_mut().gpu.as_mut() {
            gpu.upload_texture(key, image);
        }
    }
    session.borrow_mut().resolve_texture(key, image.is_some());
}

async fn fetch_texture(key: &str) -> anyhow::Result<TextureImage> {
    let url = texture_url(key).ok_or_else(|| anyhow::anyhow!("no image for texture {key}"))?;
    let bytes = fetch::fetch_bytes(&url).await?;
    Ok(TextureImage::decode(&bytes)?)
}
