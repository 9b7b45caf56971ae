// Shared scene/interaction tuning constants used by both web and native frontends.

// Idle spin
pub const BASE_SPIN: f32 = -0.4; // resting velocity, slow spin to the left
// Per prism, slightly different so the prisms drift out of sync
pub const DEFAULT_DECAY_FACTORS: [f32; 4] = [0.98, 0.985, 0.9825, 0.9875];
pub const DECAY_FACTOR_MIN: f32 = 0.98;
pub const DECAY_FACTOR_MAX: f32 = 0.99;

// Drag
pub const DRAG_SCALE: f32 = 200.0; // pixels of drag per radian of yaw

// Carousel
pub const PRISM_COUNT: usize = 4;
pub const TWEEN_DURATION_MS: f64 = 500.0;
// Depth (world X) of each carousel slot: [center, far, farther, behind the viewer]
pub const SLOT_DEPTHS: [f32; 4] = [0.0, 3.2, 6.4, -4.5];

// Prism geometry
pub const PRISM_RADIUS: f32 = 1.0;
pub const PRISM_HEIGHT: f32 = 1.0;
pub const PRISM_ELEVATION: f32 = 1.0; // Y of every prism's centre

// Panel decoration
pub const BILLBOARD_FONT_SIZE: f32 = 0.08;
pub const BILLBOARD_PADDING: [f32; 2] = [0.1, 0.1]; // horizontal, vertical
pub const BILLBOARD_Y: f32 = 0.61;
pub const BODY_FONT_SIZE: f32 = 0.05;
pub const BODY_LINE_START_Y: f32 = -0.25;
pub const BODY_LINE_SPACING: f32 = 0.1;
pub const PICTURE_SIZE: [f32; 3] = [1.0, 0.6, 0.05];
pub const PICTURE_Y: f32 = 0.15;

// Navigation HUD (camera-local space, -Z forward)
pub const NAV_ARROW_OFFSET: [f32; 3] = [0.62, -0.42, -1.2];
pub const NAV_ARROW_RADIUS: f32 = 0.06;
pub const NAV_LABEL_FONT_SIZE: f32 = 0.035;
pub const NAV_LABEL_DROP: f32 = 0.11; // label sits this far below its arrow

// Camera
pub const CAMERA_EYE: [f32; 3] = [-2.6, 2.2, 0.0];
pub const CAMERA_TARGET: [f32; 3] = [0.0, 1.0, 0.0];
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Lighting
pub const CLEAR_COLOR: u32 = 0x1a1e1f;
pub const LIGHT_POSITION: [f32; 3] = [-8.0, 10.0, 2.0]; // directional light, aimed at the origin
pub const AMBIENT_COLOR: u32 = 0x565656;

// Fallback text metrics when no typeface is available (em units)
pub const FALLBACK_ADVANCE_EM: f32 = 0.56;
