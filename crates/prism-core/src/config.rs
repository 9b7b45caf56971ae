//! Tunable parameters for the session and the scene.
//!
//! Every field has a default taken from [`crate::constants`], and the serde
//! derives use `#[serde(default)]` so a partial JSON document only overrides
//! the fields it names.

use crate::constants::*;
use crate::error::{PrismError, Result};
use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub interaction: InteractionConfig,
    pub scene: SceneConfig,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Resting angular velocity every idle prism relaxes toward.
    pub base_spin: f32,
    /// Multiplicative decay per frame, one entry per prism. Prisms beyond the
    /// end of the list reuse the last factor.
    pub decay_factors: Vec<f32>,
    /// Pixels of horizontal drag per radian of yaw.
    pub drag_scale: f32,
    pub tween_duration_ms: f64,
    /// Depths for the `[center, far, farther, behind]` carousel slots.
    pub slot_depths: [f32; 4],
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            base_spin: BASE_SPIN,
            decay_factors: DEFAULT_DECAY_FACTORS.to_vec(),
            drag_scale: DRAG_SCALE,
            tween_duration_ms: TWEEN_DURATION_MS,
            slot_depths: SLOT_DEPTHS,
        }
    }
}

impl InteractionConfig {
    pub fn decay_for(&self, prism_index: usize) -> f32 {
        self.decay_factors
            .get(prism_index)
            .or_else(|| self.decay_factors.last())
            .copied()
            .unwrap_or(DECAY_FACTOR_MIN)
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub camera_eye: [f32; 3],
    pub camera_target: [f32; 3],
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub clear_color: u32,
    pub light_position: [f32; 3],
    pub ambient_color: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            camera_eye: CAMERA_EYE,
            camera_target: CAMERA_TARGET,
            fov_degrees: CAMERA_FOV_DEGREES,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            clear_color: CLEAR_COLOR,
            light_position: LIGHT_POSITION,
            ambient_color: AMBIENT_COLOR,
        }
    }
}

impl AppConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(text).map_err(PrismError::ConfigParse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let i = &self.interaction;
        if i.base_spin == 0.0 || !i.base_spin.is_finite() {
            return Err(PrismError::InvalidConfig(
                "base_spin must be finite and non-zero".into(),
            ));
        }
        if i.decay_factors.is_empty() {
            return Err(PrismError::InvalidConfig(
                "decay_factors must not be empty".into(),
            ));
        }
        let allowed = DECAY_FACTOR_MIN..=DECAY_FACTOR_MAX;
        if let Some(bad) = i.decay_factors.iter().find(|d| !allowed.contains(*d)) {
            return Err(PrismError::InvalidConfig(format!(
                "decay factor {bad} is outside [{DECAY_FACTOR_MIN}, {DECAY_FACTOR_MAX}]"
            )));
        }
        if !(i.drag_scale > 0.0) {
            return Err(PrismError::InvalidConfig(
                "drag_scale must be positive".into(),
            ));
        }
        if !(i.tween_duration_ms > 0.0) {
            return Err(PrismError::InvalidConfig(
                "tween_duration_ms must be positive".into(),
            ));
        }
        let s = &self.scene;
        if !(s.fov_degrees > 0.0 && s.fov_degrees < 180.0) {
            return Err(PrismError::InvalidConfig(
                "fov_degrees must be in (0, 180)".into(),
            ));
        }
        if !(s.near > 0.0 && s.far > s.near) {
            return Err(PrismError::InvalidConfig(
                "near/far planes must satisfy 0 < near < far".into(),
            ));
        }
        Ok(())
    }
}
