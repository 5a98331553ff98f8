//! Flat-primitive intersection core for a ray tracer: infinite planes,
//! disks, and axis-aligned rectangles answering ray-hit and bounding-box
//! queries.

mod shape;
mod traits;

pub use glam::Vec3A as Vec3;
use slotmap::new_key_type;

pub use shape::*;
pub use traits::*;

pub type Point3 = Vec3;
pub type Float = f32;

new_key_type! { pub struct MaterialKey; }

#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vec3,
}

impl Ray {
    #[inline]
    pub fn at(&self, t: Float) -> Point3 {
        self.origin + t * self.direction
    }
}
