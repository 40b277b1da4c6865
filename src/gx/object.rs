use std::mem::size_of;
use gl;
use gl::types::*;
use super::buffer::UpdateHint;

#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
#[repr(u32)]
pub enum ObjType {
    Buffer            = gl::BUFFER,
    Shader            = gl::SHADER,
    Program           = gl::PROGRAM,
    VertexArray       = gl::VERTEX_ARRAY,
    Query             = gl::QUERY,
    ProgramPipeline   = gl::PROGRAM_PIPELINE,
    TransformFeedback = gl::TRANSFORM_FEEDBACK,
    Sampler           = gl::SAMPLER,
    Texture           = gl::TEXTURE,
    Renderbuffer      = gl::RENDERBUFFER,
    Framebuffer       = gl::FRAMEBUFFER,
}

pub trait GLResource {
    const OBJ_TYPE: ObjType;
    fn gl_id(&self) -> GLuint;
    fn set_label(&self, label: &[u8]) {
        super::object_label(Self::OBJ_TYPE, self.gl_id(), label);
    }
}

#[derive(Debug, Hash, PartialEq, Eq)]
pub struct Vao(GLuint);

impl GLResource for Vao {
    const OBJ_TYPE: ObjType = ObjType::VertexArray;
    fn gl_id(&self) -> GLuint { self.0 }
}

impl Drop for Vao {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.0);
        }
    }
}

impl Vao {
    pub fn new() -> Self {
        let mut id = 0;
        unsafe {
            gl::GenVertexArrays(1, &mut id);
        }
        Vao(id)
    }
    pub fn bind(&self) {
        unsafe {
            gl::BindVertexArray(self.0);
        }
    }
    pub fn unbind() {
        unsafe {
            gl::BindVertexArray(0);
        }
    }
}

#[derive(Debug, Hash, PartialEq, Eq)]
pub struct Vbo(GLuint);

impl GLResource for Vbo {
    const OBJ_TYPE: ObjType = ObjType::Buffer;
    fn gl_id(&self) -> GLuint { self.0 }
}

impl Drop for Vbo {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.0);
        }
    }
}

impl Vbo {
    pub fn new() -> Self {
        let mut id = 0;
        unsafe {
            gl::GenBuffers(1, &mut id);
        }
        Vbo(id)
    }
    pub fn bind(&self) {
        unsafe {
            gl::BindBuffer(gl::ARRAY_BUFFER, self.0);
        }
    }
    pub fn set_data<T>(&self, data: &[T], update_hint: UpdateHint) {
        unsafe {
            gl::BindBuffer(gl::ARRAY_BUFFER, self.0);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                (data.len() * size_of::<T>()) as GLsizeiptr,
                data.as_ptr() as *const _,
                update_hint.buffer_usage() as GLenum
            );
        }
    }
}

/// A raw buffer object for targets other than ARRAY_BUFFER; the caller
/// picks the binding point.
#[derive(Debug, Hash, PartialEq, Eq)]
pub struct Buffer(GLuint);

impl GLResource for Buffer {
    const OBJ_TYPE: ObjType = ObjType::Buffer;
    fn gl_id(&self) -> GLuint { self.0 }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.0);
        }
    }
}

impl Buffer {
    pub fn new() -> Self {
        let mut id = 0;
        unsafe {
            gl::GenBuffers(1, &mut id);
        }
        Buffer(id)
    }
}
