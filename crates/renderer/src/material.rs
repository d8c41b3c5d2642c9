//! Globe surface materials, with texture loading that degrades gracefully.

use std::path::{Path, PathBuf};

use engine_core::Color;
use thiserror::Error;

/// Error loading a texture image from disk.
#[derive(Debug, Error)]
pub enum TextureError {
    #[error("failed to load texture {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// A decoded RGBA8 texture, ready for upload by any backend.
#[derive(Debug, Clone)]
pub struct Texture {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Texture {
    /// Decode an image file into RGBA8 pixels.
    pub fn load(path: &Path) -> Result<Self, TextureError> {
        let img = image::open(path).map_err(|source| TextureError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Self {
            width,
            height,
            pixels: rgba.into_raw(),
        })
    }
}

// Globe surface palette.
const GLOBE_BASE: Color = Color::rgb(0x1E, 0x40, 0xAF);
const GLOBE_FALLBACK_EMISSIVE: Color = Color::rgb(0x0E, 0xA5, 0xE9);

/// Surface material for the globe body.
///
/// A texture is optional decoration: when it cannot be loaded the globe
/// falls back to a flat emissive material so the initial render is never
/// blocked on a resource fetch.
#[derive(Debug, Clone)]
pub enum Material {
    Textured {
        texture: Texture,
        emissive: Color,
        emissive_intensity: f32,
        shininess: f32,
    },
    FlatEmissive {
        color: Color,
        emissive: Color,
        emissive_intensity: f32,
        shininess: f32,
    },
}

impl Material {
    /// The flat fallback globe surface.
    pub fn globe_fallback() -> Self {
        Material::FlatEmissive {
            color: GLOBE_BASE,
            emissive: GLOBE_FALLBACK_EMISSIVE,
            emissive_intensity: 0.2,
            shininess: 150.0,
        }
    }

    /// Textured globe surface around a loaded texture.
    pub fn globe_textured(texture: Texture) -> Self {
        Material::Textured {
            texture,
            emissive: GLOBE_BASE,
            emissive_intensity: 0.1,
            shininess: 150.0,
        }
    }

    /// Load the globe texture if a path is configured, falling back to the
    /// flat material on any failure.
    pub fn globe_or_fallback(texture_path: Option<&Path>) -> Self {
        let Some(path) = texture_path else {
            return Self::globe_fallback();
        };
        match Texture::load(path) {
            Ok(texture) => Self::globe_textured(texture),
            Err(e) => {
                log::warn!("using fallback globe material: {e}");
                Self::globe_fallback()
            }
        }
    }

    pub fn is_textured(&self) -> bool {
        matches!(self, Material::Textured { .. })
    }
}
