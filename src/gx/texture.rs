use gl;
use gl::types::*;
use super::object::{ObjType, GLResource};
use v::Extent2;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Texture2DImage<'a> {
    pub pixels: &'a [u8],
    pub size: Extent2<u32>,
    pub mipmap_level: GLint, // 0
    pub internal_format: GLenum,
    pub pixels_format: GLenum,
    pub pixel_element_type: GLenum,
}

impl<'a> Texture2DImage<'a> {
    pub fn from_rgba_u8(pixels: &'a [u8], size: Extent2<u32>) -> Self {
        Self {
            pixels, size,
            mipmap_level: 0,
            internal_format: gl::RGBA,
            pixels_format: gl::RGBA,
            pixel_element_type: gl::UNSIGNED_BYTE,
        }
    }
    pub fn tex_image_2d(&self, target: GLenum) {
        unsafe {
            gl::TexImage2D(
                target, self.mipmap_level, self.internal_format as _,
                self.size.w as _, self.size.h as _, 0,
                self.pixels_format, self.pixel_element_type,
                self.pixels.as_ptr() as *const _
            );
        }
    }
}

#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub struct TextureParamsI {
    pub wrap_s: GLenum,
    pub wrap_t: GLenum,
    pub min_filter: GLenum,
    pub mag_filter: GLenum,
}

impl TextureParamsI {
    pub fn new_repeat_linear() -> Self {
        Self {
            wrap_s: gl::REPEAT,
            wrap_t: gl::REPEAT,
            min_filter: gl::LINEAR,
            mag_filter: gl::LINEAR,
        }
    }
    pub fn apply(&self, target: GLenum) {
        unsafe {
            gl::TexParameteri(target, gl::TEXTURE_WRAP_S, self.wrap_s as GLint);
            gl::TexParameteri(target, gl::TEXTURE_WRAP_T, self.wrap_t as GLint);
            gl::TexParameteri(target, gl::TEXTURE_MIN_FILTER, self.min_filter as GLint);
            gl::TexParameteri(target, gl::TEXTURE_MAG_FILTER, self.mag_filter as GLint);
        }
    }
}

#[derive(Debug)]
pub struct Texture2DInit<'a> {
    pub image: Texture2DImage<'a>,
    pub params_i: TextureParamsI,
    pub do_generate_mipmaps: bool,
}

#[derive(Debug, Hash, PartialEq, Eq)]
pub struct Texture2D(GLuint);

impl GLResource for Texture2D {
    const OBJ_TYPE: ObjType = ObjType::Texture;
    fn gl_id(&self) -> GLuint { self.0 }
}

impl Drop for Texture2D {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteTextures(1, &self.0);
        }
    }
}

impl Texture2D {
    /// Creates, binds and fills the texture on the currently active texture
    /// unit; it stays bound there.
    pub fn new(init: Texture2DInit) -> Self {
        let mut id = 0;
        unsafe {
            gl::GenTextures(1, &mut id);
            gl::BindTexture(gl::TEXTURE_2D, id);
        }
        init.params_i.apply(gl::TEXTURE_2D);
        init.image.tex_image_2d(gl::TEXTURE_2D);
        if init.do_generate_mipmaps {
            unsafe {
                gl::GenerateMipmap(gl::TEXTURE_2D);
            }
        }
        Texture2D(id)
    }
    pub fn bind(&self) {
        unsafe {
            gl::BindTexture(gl::TEXTURE_2D, self.0);
        }
    }
}
