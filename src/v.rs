extern crate vek;

// NOTE: Avoid repr_simd for alignment reasons (when sending packed data to OpenGL)
pub use self::vek::vec::repr_c::{Vec2, Vec3, Extent2};
pub use self::vek::mat::repr_c::column_major::Mat4;
