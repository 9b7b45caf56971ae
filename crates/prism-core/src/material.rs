use glam::Vec3;
use smallvec::SmallVec;

/// Surface appearance of one face group.
///
/// `lit` selects lambert shading (standard material) versus flat colour
/// (basic material). `texture` names an image asset; the renderer multiplies
/// it by `color`, and an unresolved key draws as plain `color`.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub color: Vec3,
    pub texture: Option<&'static str>,
    pub lit: bool,
}

impl Material {
    pub fn standard(hex: u32) -> Self {
        Self {
            color: hex_to_rgb(hex),
            texture: None,
            lit: true,
        }
    }

    pub fn basic(hex: u32) -> Self {
        Self {
            color: hex_to_rgb(hex),
            texture: None,
            lit: false,
        }
    }

    pub fn with_texture(mut self, key: &'static str) -> Self {
        self.texture = Some(key);
        self
    }
}

#[inline]
pub fn hex_to_rgb(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}

/// One material for the whole mesh, or one per face group.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct MaterialSet(pub SmallVec<[Material; 6]>);

impl MaterialSet {
    pub fn single(material: Material) -> Self {
        let mut v = SmallVec::new();
        v.push(material);
        Self(v)
    }

    pub fn per_face(materials: impl IntoIterator<Item = Material>) -> Self {
        Self(materials.into_iter().collect())
    }

    /// Material used for `face`; single-material sets cover every face.
    pub fn for_face(&self, face: usize) -> Option<&Material> {
        match self.0.len() {
            0 => None,
            1 => self.0.first(),
            _ => self.0.get(face),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Material> for MaterialSet {
    fn from(material: Material) -> Self {
        Self::single(material)
    }
}
