//! Font metrics and text layout.
//!
//! Glyph outlines are not tessellated; a text node is a slab as wide as the
//! laid-out string, which is all picking and billboard sizing need.

use crate::constants::FALLBACK_ADVANCE_EM;
use crate::error::{PrismError, Result};
use crate::geometry::TextShape;
use crate::material::MaterialSet;
use crate::scene::NodeId;
use fnv::FnvHashMap;
use glam::Vec3;
use serde::Deserialize;
use std::collections::HashMap;

pub trait FontMetrics {
    /// Horizontal advance of `ch` in em units.
    fn advance_em(&self, ch: char) -> f32;

    fn text_width(&self, text: &str, size: f32) -> f32 {
        text.chars().map(|c| self.advance_em(c)).sum::<f32>() * size
    }
}

/// Fixed-advance metrics used when no typeface could be loaded.
#[derive(Clone, Copy, Debug)]
pub struct FallbackMetrics {
    pub advance_em: f32,
}

impl Default for FallbackMetrics {
    fn default() -> Self {
        Self {
            advance_em: FALLBACK_ADVANCE_EM,
        }
    }
}

impl FontMetrics for FallbackMetrics {
    fn advance_em(&self, _ch: char) -> f32 {
        self.advance_em
    }
}

#[derive(Deserialize)]
struct TypefaceFile {
    glyphs: HashMap<String, GlyphEntry>,
    resolution: f32,
}

#[derive(Deserialize)]
struct GlyphEntry {
    ha: f32,
}

/// Advances parsed from a typeface JSON document (`glyphs[ch].ha` over
/// `resolution`).
#[derive(Clone, Debug)]
pub struct Typeface {
    advances: FnvHashMap<char, f32>,
    missing_em: f32,
}

impl Typeface {
    pub fn from_json(text: &str) -> Result<Self> {
        let file: TypefaceFile = serde_json::from_str(text).map_err(PrismError::Typeface)?;
        if file.glyphs.is_empty() || !(file.resolution > 0.0) {
            return Err(PrismError::EmptyTypeface);
        }
        let advances: FnvHashMap<char, f32> = file
            .glyphs
            .iter()
            .filter_map(|(key, glyph)| {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some((c, glyph.ha / file.resolution)),
                    _ => None,
                }
            })
            .collect();
        if advances.is_empty() {
            return Err(PrismError::EmptyTypeface);
        }
        let missing_em = advances.get(&'?').copied().unwrap_or(FALLBACK_ADVANCE_EM);
        Ok(Self {
            advances,
            missing_em,
        })
    }

    pub fn glyph_count(&self) -> usize {
        self.advances.len()
    }
}

impl FontMetrics for Typeface {
    fn advance_em(&self, ch: char) -> f32 {
        self.advances.get(&ch).copied().unwrap_or(self.missing_em)
    }
}

pub fn layout(metrics: &dyn FontMetrics, content: &str, size: f32, thickness: f32) -> TextShape {
    TextShape {
        content: content.to_owned(),
        size,
        thickness,
        width: metrics.text_width(content, size),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextStyle {
    /// Centred on the request offset by shifting left half the laid-out width.
    Plain,
    /// Centred label on a wooden board with two posts.
    Billboard,
}

/// Text waiting on a font before it can be laid out.
#[derive(Clone, Debug)]
pub struct TextRequest {
    pub parent: NodeId,
    pub content: String,
    pub size: f32,
    pub thickness: f32,
    pub offset: Vec3,
    pub style: TextStyle,
    pub materials: MaterialSet,
}

#[derive(Clone, Debug, Default)]
pub struct DeferredText {
    queue: Vec<TextRequest>,
}

impl DeferredText {
    pub fn push(&mut self, request: TextRequest) {
        self.queue.push(request);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn drain(&mut self) -> Vec<TextRequest> {
        std::mem::take(&mut self.queue)
    }
}
