use std::env;
use std::path::{Path, PathBuf};
use image;
use gx;
use grx;
use v::Extent2;

/// An atlas decoded to RGBA8, not yet uploaded. The pixel buffer only lives
/// until the GL upload; nothing keeps it around afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtlasImage {
    pub pixels: Vec<u8>,
    pub size: Extent2<u32>,
}

impl AtlasImage {
    pub fn load(path: &Path) -> Result<Self, String> {
        let decoded = image::open(path)
            .map_err(|e| format!("Could not load atlas image `{}`: {}", path.display(), e))?;
        let rgba = decoded.to_rgba8();
        let size = Extent2::new(rgba.width(), rgba.height());
        Ok(Self { pixels: rgba.into_raw(), size })
    }
    pub fn upload_to_unit(&self, unit: grx::TextureUnit) -> gx::Texture2D {
        grx::set_active_texture(unit);
        gx::Texture2D::new(gx::Texture2DInit {
            image: gx::Texture2DImage::from_rgba_u8(&self.pixels, self.size),
            params_i: gx::TextureParamsI::new_repeat_linear(),
            do_generate_mipmaps: true,
        })
    }
}

/// Walks up from the executable's directory until it finds `assets/`.
pub fn find_assets_dir() -> Result<PathBuf, String> {
    let mut path = match env::current_exe() {
        Ok(p) => {
            info!("Path of current executable is: {}", p.display());
            match p.parent() {
                Some(parent) => parent.to_path_buf(),
                None => PathBuf::from("."),
            }
        },
        Err(e) => {
            warn!("Failed to get current exe path: {}", e);
            env::current_dir().map_err(|e| format!("Failed to get current directory: {}", e))?
        },
    };
    loop {
        let candidate = path.join("assets");
        if candidate.is_dir() {
            info!("Assets path located at `{}`", candidate.display());
            return Ok(candidate);
        }
        if !path.pop() {
            return Err("Could not find an `assets/` directory next to (or above) the executable".to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_atlas_is_a_descriptive_error() {
        let path = Path::new("definitely/not/here/wallsprites1.png");
        let err = AtlasImage::load(path).unwrap_err();
        assert!(err.contains("wallsprites1.png"), "error should name the path: {}", err);
    }
}
