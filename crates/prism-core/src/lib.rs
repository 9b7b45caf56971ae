pub mod carousel;
pub mod config;
pub mod constants;
pub mod content;
pub mod drag;
pub mod error;
pub mod factory;
pub mod geometry;
pub mod hover;
pub mod loading;
pub mod material;
pub mod mesh;
pub mod pointer;
pub mod raycast;
pub mod registry;
pub mod scene;
pub mod session;
pub mod spin;
pub mod state;
pub mod text;
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use config::{AppConfig, InteractionConfig, SceneConfig};
pub use error::{PrismError, Result};
pub use hover::Cursor;
pub use mesh::{DrawBatch, DrawList, SceneUniforms, SceneVertex};
pub use pointer::{PointerEvent, PointerPhase, TouchPhase};
pub use registry::{Action, Command, Direction};
pub use session::{Activation, FrameReport, Session};
pub use state::*;
