use std::ffi::CString;
use std::ptr;
use std::mem::size_of;
use gl;
use gl::types::*;
use gx;
use gx::GLResource;
use grx;
use v::{Vec2, Vec3};

pub trait VertexIndex {
    const GL_TYPE: GLenum;
}

impl VertexIndex for u16 { const GL_TYPE: GLenum = gl::UNSIGNED_SHORT; }
impl VertexIndex for u32 { const GL_TYPE: GLenum = gl::UNSIGNED_INT; }

#[derive(Debug)]
pub struct IndexArray<T: VertexIndex> {
    pub indices: Vec<T>,
    buffer_usage: gx::BufferUsage,
    ibo: gx::Buffer,
}

impl<T: VertexIndex> IndexArray<T> {
    pub const INDEX_GL_TYPE: GLenum = T::GL_TYPE;
    pub fn ibo(&self) -> &gx::Buffer {
        &self.ibo
    }
    pub fn update_ibo(&self) {
        unsafe {
            gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, self.ibo.gl_id());
            gl::BufferData(
                gl::ELEMENT_ARRAY_BUFFER,
                (self.indices.len() * size_of::<T>()) as GLsizeiptr,
                self.indices.as_ptr() as *const _,
                self.buffer_usage as GLenum
            );
            gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, 0);
        }
    }
    pub fn from_indices(label: &str, buffer_usage: gx::BufferUsage, indices: Vec<T>) -> Self {
        let ibo = gx::Buffer::new();
        ibo.set_label(&CString::new(label.to_owned() + " IBO").unwrap().into_bytes_with_nul());
        let array = Self { buffer_usage, indices, ibo };
        array.update_ibo();
        array
    }
}

pub fn quad_vertices(half_extent: Vec2<f32>, cell_min: Vec2<f32>, cell_max: Vec2<f32>) -> Vec<grx::TileVertex> {
    let Vec2 { x: w, y: h } = half_extent;
    vec![
        grx::TileVertex { position: Vec3::new(-w, -h, 0.), texcoords: Vec2::new(cell_min.x, cell_min.y) },
        grx::TileVertex { position: Vec3::new( w, -h, 0.), texcoords: Vec2::new(cell_max.x, cell_min.y) },
        grx::TileVertex { position: Vec3::new( w,  h, 0.), texcoords: Vec2::new(cell_max.x, cell_max.y) },
        grx::TileVertex { position: Vec3::new(-w,  h, 0.), texcoords: Vec2::new(cell_min.x, cell_max.y) },
    ]
}

pub const QUAD_INDICES: [u32; 6] = [
    0, 1, 2, // first triangle
    2, 3, 0, // second triangle
];

/// One layer's quad: 4 vertices and 6 indices, uploaded once. Every tile of
/// the layer is this same quad under a different translation and atlas cell.
#[derive(Debug)]
pub struct TileMesh {
    pub vertices: Vec<grx::TileVertex>,
    pub indices: IndexArray<u32>,
    pub update_hint: gx::UpdateHint,
    pub vao: gx::Vao,
    pub vbo: gx::Vbo,
}

impl TileMesh {
    /// `half_extent` is the quad's half size in clip space; `cell_min` and
    /// `cell_max` bound the base atlas cell the quad samples, before the
    /// per-tile cell offset uniform.
    pub fn new_tile_quad(
        prog: &grx::TileProgram,
        label: &str,
        update_hint: gx::UpdateHint,
        half_extent: Vec2<f32>,
        cell_min: Vec2<f32>,
        cell_max: Vec2<f32>,
    ) -> Self {
        let vertices = quad_vertices(half_extent, cell_min, cell_max);
        let indices = IndexArray::from_indices(label, gx::BufferUsage::StaticDraw, QUAD_INDICES.to_vec());
        let vao = gx::Vao::new();
        let vbo = gx::Vbo::new();
        vao.bind();
        vbo.bind();
        vao.set_label(&CString::new(label.to_owned() + " VAO").unwrap().into_bytes_with_nul());
        vbo.set_label(&CString::new(label.to_owned() + " VBO").unwrap().into_bytes_with_nul());
        vbo.set_data(&vertices, update_hint);
        unsafe {
            gl::EnableVertexAttribArray(prog.a_position());
            gl::EnableVertexAttribArray(prog.a_texcoords());
            gl::VertexAttribPointer(
                prog.a_position(), 3, gl::FLOAT,
                gl::FALSE as _, size_of::<grx::TileVertex>() as _,
                ptr::null()
            );
            gl::VertexAttribPointer(
                prog.a_texcoords(), 2, gl::FLOAT,
                gl::FALSE as _, size_of::<grx::TileVertex>() as _,
                ptr::null::<GLvoid>().offset(3*size_of::<f32>() as isize)
            );
            // The element binding is VAO state; leave it bound.
            gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, indices.ibo().gl_id());
        }
        gx::Vao::unbind();

        Self {
            vertices, indices, update_hint, vao, vbo,
        }
    }
    /// The caller binds the program and the VAO first.
    pub fn draw(&self) {
        unsafe {
            gl::DrawElements(
                gl::TRIANGLES,
                self.indices.indices.len() as GLsizei,
                IndexArray::<u32>::INDEX_GL_TYPE,
                ptr::null()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_has_four_vertices_and_two_triangles() {
        let vertices = quad_vertices(Vec2::new(0.0156, 0.0278), Vec2::new(0.3334, 0.8333), Vec2::new(0.5, 1.0));
        assert_eq!(vertices.len(), 4);
        assert_eq!(QUAD_INDICES.len(), 6);
        for &i in QUAD_INDICES.iter() {
            assert!((i as usize) < vertices.len());
        }
    }

    #[test]
    fn quad_corners_match_half_extent_and_cell() {
        let vertices = quad_vertices(Vec2::new(0.0082, 0.0146), Vec2::new(0., 0.), Vec2::new(0.125, 0.083));
        let bl_position = vertices[0].position;
        let bl_texcoords = vertices[0].texcoords;
        let tr_position = vertices[2].position;
        let tr_texcoords = vertices[2].texcoords;
        assert_eq!(bl_position, Vec3::new(-0.0082, -0.0146, 0.));
        assert_eq!(bl_texcoords, Vec2::new(0., 0.));
        assert_eq!(tr_position, Vec3::new(0.0082, 0.0146, 0.));
        assert_eq!(tr_texcoords, Vec2::new(0.125, 0.083));
    }

    #[test]
    fn quad_is_flat() {
        for vertex in quad_vertices(Vec2::new(1., 1.), Vec2::new(0., 0.), Vec2::new(1., 1.)) {
            let position = vertex.position;
            assert_eq!(position.z, 0.);
        }
    }
}
