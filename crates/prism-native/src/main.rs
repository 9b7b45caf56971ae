//! Desktop preview: the same session as the web build in a winit window.
//!
//! Usage: `prism-native [config.json]`. The typeface is read from
//! `fonts/noto-sans-regular.json` and images from `assets/` when present.

use std::time::Instant;
use winit::event::{ElementState, Event, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowBuilder;

use glam::Vec2;
use prism_core::content::texture_file;
use prism_core::pointer::from_touch;
use prism_core::{
    Action, Activation, AppConfig, Command, Direction, DrawList, SceneUniforms, Session,
    TouchPhase, Viewport,
};
use prism_render::TextureImage;

mod gpu;
use gpu::GpuState;

const FONT_PATH: &str = "fonts/noto-sans-regular.json";
const TEXTURE_DIR: &str = "assets";

fn load_config() -> anyhow::Result<AppConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(AppConfig::default());
    };
    let text = std::fs::read_to_string(&path)?;
    let config = AppConfig::from_json(&text)?;
    log::info!("[config] loaded {}", path);
    Ok(config)
}

fn read_texture(key: &str) -> anyhow::Result<TextureImage> {
    let file = texture_file(key).ok_or_else(|| anyhow::anyhow!("no image for texture {key}"))?;
    let bytes = std::fs::read(std::path::Path::new(TEXTURE_DIR).join(file))?;
    Ok(TextureImage::decode(&bytes)?)
}

fn load_textures(session: &mut Session, state: &mut GpuState<'_>) {
    for key in session.texture_keys().to_vec() {
        let loaded = match read_texture(key) {
            Ok(image) => {
                state.upload_texture(key, &image);
                true
            }
            Err(e) => {
                log::warn!("[load] {}: {}", key, e);
                false
            }
        };
        session.resolve_texture(key, loaded);
    }
}

fn report(activation: Activation) {
    match activation.action {
        Action::Url(Some(url)) => log::info!("[click] open {}", url),
        Action::Command(Command::FunFact) => {
            log::info!("[fun-fact] unavailable in the native preview")
        }
        Action::Url(None) | Action::Command(Command::Navigate(_)) => {}
    }
}

fn touch_phase(phase: winit::event::TouchPhase) -> TouchPhase {
    match phase {
        winit::event::TouchPhase::Started => TouchPhase::Start,
        winit::event::TouchPhase::Moved => TouchPhase::Move,
        winit::event::TouchPhase::Ended => TouchPhase::End,
        winit::event::TouchPhase::Cancelled => TouchPhase::Cancel,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = load_config()?;
    let clear = prism_core::mesh::clear_rgb(&config.scene);

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("prism-folio (native)")
        .build(&event_loop)?;
    let size = window.inner_size();
    let mut session = Session::new(config, Viewport::new(size.width as f32, size.height as f32))?;
    let mut state = pollster::block_on(GpuState::new(&window, clear))?;

    load_textures(&mut session, &mut state);
    let font = match std::fs::read_to_string(FONT_PATH) {
        Ok(text) => Some(text),
        Err(e) => {
            log::warn!("[load] {}: {}", FONT_PATH, e);
            None
        }
    };
    session.resolve_font_json(font.as_deref());

    let start = Instant::now();
    let now_ms = move || start.elapsed().as_secs_f64() * 1000.0;
    let mut cursor = Vec2::ZERO;
    let mut touch_id: Option<u64> = None;
    let mut draw_list = DrawList::new();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => {
                state.resize(size);
                session.set_viewport(size.width as f32, size.height as f32);
            }
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::CursorMoved { position, .. } => {
                cursor = Vec2::new(position.x as f32, position.y as f32);
                session.pointer_move(cursor.x, cursor.y);
            }
            WindowEvent::CursorLeft { .. } => session.leave(),
            WindowEvent::MouseInput {
                state: button_state,
                button: MouseButton::Left,
                ..
            } => match button_state {
                ElementState::Pressed => {
                    if let Some(a) = session.pointer_down(cursor.x, cursor.y, now_ms()) {
                        report(a);
                    }
                }
                ElementState::Released => session.pointer_up(),
            },
            WindowEvent::Touch(touch) => {
                // Follow the first finger only
                if *touch_id.get_or_insert(touch.id) != touch.id {
                    return;
                }
                let phase = touch_phase(touch.phase);
                if matches!(phase, TouchPhase::End | TouchPhase::Cancel) {
                    touch_id = None;
                }
                let at = Vec2::new(touch.location.x as f32, touch.location.y as f32);
                if let Some(ev) = from_touch(phase, Some(at), cursor) {
                    cursor = ev.position;
                    if let Some(a) = session.handle_pointer(ev, now_ms()) {
                        report(a);
                    }
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(key),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                let direction = match key {
                    NamedKey::ArrowLeft => Direction::Previous,
                    NamedKey::ArrowRight => Direction::Next,
                    _ => return,
                };
                session.navigate(direction, now_ms());
            }
            _ => {}
        },
        Event::AboutToWait => {
            session.frame(now_ms());
            draw_list.rebuild(session.scene());
            let uniforms = SceneUniforms::new(session.camera(), &session.config().scene);
            match state.render(&uniforms, &draw_list) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    state.resize(state.window.inner_size())
                }
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("[gpu] {:?}", e),
            }
        }
        _ => {}
    })?;
    Ok(())
}
