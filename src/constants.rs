//! DOM ids and asset locations used by the web front-end.

pub const CANVAS_ID: &str = "app-canvas";

// Optional overrides; missing file means defaults
pub const CONFIG_PATH: &str = "config.json";

// three.js typeface JSON, only glyph advances are read
pub const FONT_PATH: &str = "fonts/noto-sans-regular.json";

// Picture and board images, by file name
pub const TEXTURE_DIR: &str = "assets";

pub fn texture_url(key: &str) -> Option<String> {
    prism_core::content::texture_file(key).map(|file| format!("{TEXTURE_DIR}/{file}"))
}

pub const LINK_TARGET: &str = "_blank";
