pub mod object;
pub mod buffer;
pub mod shader;
pub mod texture;

pub use self::object::*;
pub use self::buffer::*;
pub use self::shader::*;
pub use self::texture::*;

use std::ffi::CStr;
use std::ptr;
use std::slice;
use std::os::raw::c_void;
use std::sync::atomic::{AtomicBool, Ordering};
use sdl2::VideoSubsystem;
use gl;
use gl::types::*;

static LABELS_ENABLED: AtomicBool = AtomicBool::new(false);

pub fn object_label(ns: ObjType, id: GLuint, label: &[u8]) {
    if LABELS_ENABLED.load(Ordering::Relaxed) {
        unsafe {
            gl::ObjectLabel(ns as _, id, label.len() as _, label.as_ptr() as _);
        }
    }
}

pub fn set_active_texture(unit: GLuint) {
    unsafe {
        gl::ActiveTexture(gl::TEXTURE0 + unit);
    }
}

pub fn parse_version_string(version_string: &str) -> (u32, u32) {
    (version_string.chars().nth(0).unwrap() as u32 - '0' as u32,
     version_string.chars().nth(2).unwrap() as u32 - '0' as u32)
}

/// Must be called exactly once, right after the GL function pointers are
/// loaded and before any other function of this module.
pub unsafe fn init(video: &VideoSubsystem) {
    let mut ctxflags: GLint = 0;
    let mut ctxpmask: GLint = 0;
    gl::GetIntegerv(gl::CONTEXT_FLAGS, &mut ctxflags);
    gl::GetIntegerv(gl::CONTEXT_PROFILE_MASK, &mut ctxpmask);
    let ctxflags = ctxflags as GLuint;
    let ctxpmask = ctxpmask as GLuint;

    let gl_version   = CStr::from_ptr(gl::GetString(gl::VERSION) as _).to_string_lossy();
    let gl_renderer  = CStr::from_ptr(gl::GetString(gl::RENDERER) as _).to_string_lossy();
    let gl_vendor    = CStr::from_ptr(gl::GetString(gl::VENDOR) as _).to_string_lossy();
    let glsl_version = CStr::from_ptr(gl::GetString(gl::SHADING_LANGUAGE_VERSION) as _).to_string_lossy();

    let (gl_major, gl_minor) = parse_version_string(&gl_version);

    info!(
"--- Active OpenGL context settings ---
    Version       : {} (parsed: {}.{})
    Renderer      : {}
    Vendor        : {}
    GLSL version  : {}
    Profile flags : {} (bits: 0b{:08b})
    Context flags : {}{}(bits: {:08b})",
        gl_version, gl_major, gl_minor, gl_renderer, gl_vendor, glsl_version,
        if ctxpmask & gl::CONTEXT_CORE_PROFILE_BIT != 0 {
            "core"
        } else if ctxpmask & gl::CONTEXT_COMPATIBILITY_PROFILE_BIT != 0 {
            "compatibility"
        } else { "" },
        ctxpmask,
        if ctxflags & gl::CONTEXT_FLAG_FORWARD_COMPATIBLE_BIT != 0 { "forward_compatible " } else {""},
        if ctxflags & gl::CONTEXT_FLAG_DEBUG_BIT != 0 { "debug " } else {""},
        ctxflags,
    );

    let can_debug = gl_major > 4
        || (gl_major == 4 && gl_minor >= 3)
        || video.gl_extension_supported("GL_KHR_debug");

    if can_debug {
        gl::Enable(gl::DEBUG_OUTPUT);
        gl::Enable(gl::DEBUG_OUTPUT_SYNCHRONOUS);
        gl::DebugMessageCallback(gl_dbg_msg_callback, ptr::null_mut());
        gl::DebugMessageControl(
            gl::DONT_CARE, gl::DONT_CARE, gl::DONT_CARE,
            0, ptr::null_mut(), gl::TRUE
        );
        LABELS_ENABLED.store(true, Ordering::Relaxed);
    }
}

extern "system" fn gl_dbg_msg_callback(
    source: GLenum, ty: GLenum, id: GLuint, severity: GLenum,
    length: GLsizei, message: *const GLchar, _user_param: *mut c_void,
) {
    let src = match source {
        gl::DEBUG_SOURCE_API => "API",
        gl::DEBUG_SOURCE_WINDOW_SYSTEM => "Window system",
        gl::DEBUG_SOURCE_SHADER_COMPILER => "Shader compiler",
        gl::DEBUG_SOURCE_THIRD_PARTY => "3rd party",
        gl::DEBUG_SOURCE_APPLICATION => "Application",
        gl::DEBUG_SOURCE_OTHER => "Other",
        _ => "",
    };
    let t = match ty {
        gl::DEBUG_TYPE_ERROR => "Error",
        gl::DEBUG_TYPE_DEPRECATED_BEHAVIOR => "Deprecated behaviour",
        gl::DEBUG_TYPE_UNDEFINED_BEHAVIOR => "Undefined behaviour",
        gl::DEBUG_TYPE_PERFORMANCE => "Performance",
        gl::DEBUG_TYPE_PORTABILITY => "Portability",
        gl::DEBUG_TYPE_MARKER => "Command stream annotation",
        gl::DEBUG_TYPE_PUSH_GROUP => "Push debug group",
        gl::DEBUG_TYPE_POP_GROUP => "Pop debug group",
        gl::DEBUG_TYPE_OTHER => "Other",
        _ => "",
    };
    let sev = match severity {
        gl::DEBUG_SEVERITY_HIGH         => "High",
        gl::DEBUG_SEVERITY_MEDIUM       => "Medium",
        gl::DEBUG_SEVERITY_LOW          => "Low",
        gl::DEBUG_SEVERITY_NOTIFICATION => "Info",
        _ => "",
    };
    let message = unsafe {
        slice::from_raw_parts(message as *const u8, length as _)
    };
    let message = String::from_utf8_lossy(message);
    debug!(
        "OpenGL debug message ({}, {}, {}, {:X}) :\n{}",
        sev, t, src, id, message
    );
}
