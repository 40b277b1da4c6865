use std::ptr;
use gl;
use gl::types::*;
use super::object::{ObjType, GLResource};
use v::Mat4;

// Shader sources are expected to be nul-terminated byte strings
// (b"...\0"), which lets us hand them to the GL without reallocating.

unsafe fn compile_shader(ty: GLenum, src: &[u8]) -> Result<GLuint, String> {
    let id = gl::CreateShader(ty);
    let src_ptr = src.as_ptr() as *const GLchar;
    gl::ShaderSource(id, 1, &src_ptr, ptr::null());
    gl::CompileShader(id);
    let mut status = gl::FALSE as GLint;
    gl::GetShaderiv(id, gl::COMPILE_STATUS, &mut status);
    if status == gl::TRUE as GLint {
        return Ok(id);
    }
    let log = shader_info_log(id);
    gl::DeleteShader(id);
    Err(log)
}

unsafe fn shader_info_log(id: GLuint) -> String {
    let mut len: GLint = 0;
    gl::GetShaderiv(id, gl::INFO_LOG_LENGTH, &mut len);
    if len <= 0 {
        return String::new();
    }
    let mut buf = Vec::with_capacity(len as usize);
    buf.set_len(len as usize - 1); // leave out the trailing nul
    gl::GetShaderInfoLog(id, len, ptr::null_mut(), buf.as_mut_ptr() as *mut GLchar);
    String::from_utf8_lossy(&buf).into_owned()
}

unsafe fn program_info_log(id: GLuint) -> String {
    let mut len: GLint = 0;
    gl::GetProgramiv(id, gl::INFO_LOG_LENGTH, &mut len);
    if len <= 0 {
        return String::new();
    }
    let mut buf = Vec::with_capacity(len as usize);
    buf.set_len(len as usize - 1);
    gl::GetProgramInfoLog(id, len, ptr::null_mut(), buf.as_mut_ptr() as *mut GLchar);
    String::from_utf8_lossy(&buf).into_owned()
}

#[derive(Debug, Hash, PartialEq, Eq)]
pub struct VertexShader(GLuint);

impl GLResource for VertexShader {
    const OBJ_TYPE: ObjType = ObjType::Shader;
    fn gl_id(&self) -> GLuint { self.0 }
}

impl Drop for VertexShader {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteShader(self.0);
        }
    }
}

impl VertexShader {
    /// On failure, the Err value is the GL compiler's info log.
    pub fn from_source(src: &[u8]) -> Result<Self, String> {
        unsafe {
            compile_shader(gl::VERTEX_SHADER, src).map(VertexShader)
        }
    }
}

#[derive(Debug, Hash, PartialEq, Eq)]
pub struct FragmentShader(GLuint);

impl GLResource for FragmentShader {
    const OBJ_TYPE: ObjType = ObjType::Shader;
    fn gl_id(&self) -> GLuint { self.0 }
}

impl Drop for FragmentShader {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteShader(self.0);
        }
    }
}

impl FragmentShader {
    pub fn from_source(src: &[u8]) -> Result<Self, String> {
        unsafe {
            compile_shader(gl::FRAGMENT_SHADER, src).map(FragmentShader)
        }
    }
}

#[derive(Debug, Hash, PartialEq, Eq)]
pub struct Program(GLuint);

impl GLResource for Program {
    const OBJ_TYPE: ObjType = ObjType::Program;
    fn gl_id(&self) -> GLuint { self.0 }
}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteProgram(self.0);
        }
    }
}

impl Program {
    /// On failure, the Err value is the GL linker's info log.
    pub fn from_vert_frag(vs: &VertexShader, fs: &FragmentShader) -> Result<Self, String> {
        unsafe {
            let id = gl::CreateProgram();
            gl::AttachShader(id, vs.gl_id());
            gl::AttachShader(id, fs.gl_id());
            gl::LinkProgram(id);
            gl::DetachShader(id, vs.gl_id());
            gl::DetachShader(id, fs.gl_id());
            let mut status = gl::FALSE as GLint;
            gl::GetProgramiv(id, gl::LINK_STATUS, &mut status);
            if status == gl::TRUE as GLint {
                return Ok(Program(id));
            }
            let log = program_info_log(id);
            gl::DeleteProgram(id);
            Err(log)
        }
    }
    pub fn use_program(&self) {
        unsafe {
            gl::UseProgram(self.0);
        }
    }
    pub fn attrib_location(&self, name: &[u8]) -> Option<GLint> {
        let loc = unsafe {
            gl::GetAttribLocation(self.0, name.as_ptr() as *const GLchar)
        };
        if loc < 0 { None } else { Some(loc) }
    }
    pub fn uniform_location(&self, name: &[u8]) -> Option<GLint> {
        let loc = unsafe {
            gl::GetUniformLocation(self.0, name.as_ptr() as *const GLchar)
        };
        if loc < 0 { None } else { Some(loc) }
    }
    pub fn set_uniform_mat4(&self, loc: GLint, m: &[Mat4<f32>]) {
        unsafe {
            gl::UniformMatrix4fv(loc, m.len() as _, gl::FALSE, m.as_ptr() as *const GLfloat);
        }
    }
    pub fn set_uniform_2f(&self, loc: GLint, v: &[[f32; 2]]) {
        unsafe {
            gl::Uniform2fv(loc, v.len() as _, v.as_ptr() as *const GLfloat);
        }
    }
    pub fn set_uniform_1i(&self, loc: GLint, v: &[GLint]) {
        unsafe {
            gl::Uniform1iv(loc, v.len() as _, v.as_ptr());
        }
    }
}
