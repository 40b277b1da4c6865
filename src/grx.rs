use gl::types::*;
use gx;
use gx::GLResource;
use v::{Mat4, Vec2, Vec3};

#[repr(u32)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum TextureUnit {
    GroundAtlas = 1,
    GlyphAtlas = 2,
}

pub fn set_active_texture(unit: TextureUnit) {
    gx::set_active_texture(unit as GLuint)
}

static VS_SRC: &[u8] = b"
    #version 130
    uniform mat4 u_transform;
    uniform vec2 u_atlas_cell;
    in vec3 a_position;
    in vec2 a_texcoords;
    out vec2 v_texcoords;
    void main() {
        gl_Position = u_transform * vec4(a_position, 1.0);
        v_texcoords = a_texcoords + u_atlas_cell;
    }
\0";

static FS_SRC: &[u8] = b"
    #version 130
    uniform sampler2D u_texture;
    in vec2 v_texcoords;
    out vec4 f_color;
    void main() {
        f_color = texture(u_texture, v_texcoords);
    }
\0";

/// The one program of this demo: a translated, atlas-textured quad. The
/// per-tile atlas cell comes in as a uniform offset added on top of the
/// quad's base texcoords.
#[derive(Debug, Hash, PartialEq, Eq)]
pub struct TileProgram {
    program: gx::Program,
    u_transform: GLint,
    u_atlas_cell: GLint,
    u_texture: GLint,
    a_position: GLuint,
    a_texcoords: GLuint,
}

#[repr(C, packed)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TileVertex {
    pub position: Vec3<f32>,
    pub texcoords: Vec2<f32>,
}
assert_eq_size!(tile_vertex_size; TileVertex, [f32; 5]);

impl TileProgram {
    pub fn a_position(&self) -> GLuint {
        self.a_position
    }
    pub fn a_texcoords(&self) -> GLuint {
        self.a_texcoords
    }
    pub fn new() -> Result<Self, String> {
        let vs = gx::VertexShader::from_source(VS_SRC)
            .map_err(|s| format!("Failed to compile vertex shader:\n{}", s))?;
        vs.set_label(b"TileProgram Vertex Shader");
        let fs = gx::FragmentShader::from_source(FS_SRC)
            .map_err(|s| format!("Failed to compile fragment shader:\n{}", s))?;
        fs.set_label(b"TileProgram Fragment Shader");
        let program = gx::Program::from_vert_frag(&vs, &fs)
            .map_err(|s| format!("Failed to link GL program:\n{}", s))?;
        program.set_label(b"TileProgram Program");

        let a_position = program.attrib_location(b"a_position\0").unwrap() as _;
        let a_texcoords = program.attrib_location(b"a_texcoords\0").unwrap() as _;
        let u_transform = program.uniform_location(b"u_transform\0").unwrap();
        let u_atlas_cell = program.uniform_location(b"u_atlas_cell\0").unwrap();
        let u_texture = program.uniform_location(b"u_texture\0").unwrap();

        Ok(Self {
            program, u_transform, u_atlas_cell, u_texture, a_position, a_texcoords,
        })
    }
    pub fn use_program(&self) {
        self.program.use_program();
    }
    pub fn set_uniform_transform(&self, transform: &Mat4<f32>) {
        self.program.set_uniform_mat4(self.u_transform, &[*transform]);
    }
    pub fn set_uniform_atlas_cell(&self, cell: Vec2<f32>) {
        self.program.set_uniform_2f(self.u_atlas_cell, &[cell.into_array()]);
    }
    pub fn set_uniform_texture(&self, unit: TextureUnit) {
        self.program.set_uniform_1i(self.u_texture, &[unit as GLuint as GLint]);
    }
}
