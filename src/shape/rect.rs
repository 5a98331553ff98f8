use super::{set_front_face, BoundingBox, HitRecord};
use crate::traits::Hittable;
use crate::{Float, MaterialKey, Point3, Ray, Vec3};

/// Padding applied to a rectangle's zero-width axis so the reported box
/// keeps positive volume on all three axes.
const PAD: Float = 1e-4;

/// Axis-aligned rectangle in the `z = k` plane spanning
/// `[x0, x1] x [y0, y1]`.
///
/// Rectangles follow the normalized-UV / corrected-normal policy: `u`/`v`
/// are rescaled to the rectangle's own extents and the reported normal is
/// flipped to oppose the incoming ray, with the flip recorded in
/// `front_face`.
#[derive(Debug, Clone, Copy)]
pub struct RectXy {
    pub x0: Float,
    pub x1: Float,
    pub y0: Float,
    pub y1: Float,
    pub k: Float,
    material_key: MaterialKey,
}

impl RectXy {
    pub fn new(
        x0: Float,
        x1: Float,
        y0: Float,
        y1: Float,
        k: Float,
        material_key: MaterialKey,
    ) -> Self {
        Self {
            x0,
            x1,
            y0,
            y1,
            k,
            material_key,
        }
    }
}

impl Hittable for RectXy {
    fn hit(&self, ray_in: &Ray, t_min: Float, t_max: Float) -> Option<HitRecord> {
        let t = (self.k - ray_in.origin.z) / ray_in.direction.z;
        // A zero z direction component makes t infinite or NaN; either way
        // it fails this range test.
        if !(t >= t_min && t <= t_max) {
            return None;
        }

        let x = ray_in.origin.x + t * ray_in.direction.x;
        let y = ray_in.origin.y + t * ray_in.direction.y;
        if x < self.x0 || x > self.x1 || y < self.y0 || y > self.y1 {
            return None;
        }

        let (normal, front_face) = set_front_face(ray_in, Vec3::Z);
        Some(HitRecord {
            point: ray_in.at(t),
            normal,
            t,
            u: (x - self.x0) / (self.x1 - self.x0),
            v: (y - self.y0) / (self.y1 - self.y0),
            front_face,
            material_key: self.material_key,
        })
    }

    fn bounding_box(&self, _time0: Float, _time1: Float) -> Option<BoundingBox> {
        Some(BoundingBox::new(
            Point3::new(self.x0, self.y0, self.k - PAD),
            Point3::new(self.x1, self.y1, self.k + PAD),
        ))
    }
}

/// Axis-aligned rectangle in the `y = k` plane spanning
/// `[x0, x1] x [z0, z1]`.
#[derive(Debug, Clone, Copy)]
pub struct RectXz {
    pub x0: Float,
    pub x1: Float,
    pub z0: Float,
    pub z1: Float,
    pub k: Float,
    material_key: MaterialKey,
}

impl RectXz {
    pub fn new(
        x0: Float,
        x1: Float,
        z0: Float,
        z1: Float,
        k: Float,
        material_key: MaterialKey,
    ) -> Self {
        Self {
            x0,
            x1,
            z0,
            z1,
            k,
            material_key,
        }
    }
}

impl Hittable for RectXz {
    fn hit(&self, ray_in: &Ray, t_min: Float, t_max: Float) -> Option<HitRecord> {
        let t = (self.k - ray_in.origin.y) / ray_in.direction.y;
        if !(t >= t_min && t <= t_max) {
            return None;
        }

        let x = ray_in.origin.x + t * ray_in.direction.x;
        let z = ray_in.origin.z + t * ray_in.direction.z;
        if x < self.x0 || x > self.x1 || z < self.z0 || z > self.z1 {
            return None;
        }

        let (normal, front_face) = set_front_face(ray_in, Vec3::Y);
        Some(HitRecord {
            point: ray_in.at(t),
            normal,
            t,
            u: (x - self.x0) / (self.x1 - self.x0),
            v: (z - self.z0) / (self.z1 - self.z0),
            front_face,
            material_key: self.material_key,
        })
    }

    fn bounding_box(&self, _time0: Float, _time1: Float) -> Option<BoundingBox> {
        Some(BoundingBox::new(
            Point3::new(self.x0, self.k - PAD, self.z0),
            Point3::new(self.x1, self.k + PAD, self.z1),
        ))
    }
}

/// Axis-aligned rectangle in the `x = k` plane spanning
/// `[y0, y1] x [z0, z1]`.
#[derive(Debug, Clone, Copy)]
pub struct RectYz {
    pub y0: Float,
    pub y1: Float,
    pub z0: Float,
    pub z1: Float,
    pub k: Float,
    material_key: MaterialKey,
}

impl RectYz {
    pub fn new(
        y0: Float,
        y1: Float,
        z0: Float,
        z1: Float,
        k: Float,
        material_key: MaterialKey,
    ) -> Self {
        Self {
            y0,
            y1,
            z0,
            z1,
            k,
            material_key,
        }
    }
}

impl Hittable for RectYz {
    fn hit(&self, ray_in: &Ray, t_min: Float, t_max: Float) -> Option<HitRecord> {
        let t = (self.k - ray_in.origin.x) / ray_in.direction.x;
        if !(t >= t_min && t <= t_max) {
            return None;
        }

        let y = ray_in.origin.y + t * ray_in.direction.y;
        let z = ray_in.origin.z + t * ray_in.direction.z;
        if y < self.y0 || y > self.y1 || z < self.z0 || z > self.z1 {
            return None;
        }

        let (normal, front_face) = set_front_face(ray_in, Vec3::X);
        Some(HitRecord {
            point: ray_in.at(t),
            normal,
            t,
            u: (y - self.y0) / (self.y1 - self.y0),
            v: (z - self.z0) / (self.z1 - self.z0),
            front_face,
            material_key: self.material_key,
        })
    }

    fn bounding_box(&self, _time0: Float, _time1: Float) -> Option<BoundingBox> {
        Some(BoundingBox::new(
            Point3::new(self.k - PAD, self.y0, self.z0),
            Point3::new(self.k + PAD, self.y1, self.z1),
        ))
    }
}
