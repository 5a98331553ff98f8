use super::{BoundingBox, HitRecord, EPSILON};
use crate::traits::Hittable;
use crate::{Float, MaterialKey, Point3, Ray, Vec3};

/// Half-thickness of the slab boxes reported for disks.
const SLAB_HALF_THICKNESS: Float = 0.01;

/// Infinite flat surface through `center` with the given normal.
///
/// This kind follows the projected-UV / stored-normal policy: the reported
/// normal is the constructor's normal, never flipped toward the ray, and
/// texture coordinates are the hit point's world `x` and `z`, unnormalized
/// and only meaningful for horizontal planes. Rectangles follow the other
/// policy (normalized UVs, front-face-corrected normals); callers must not
/// assume one convention across kinds.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    pub center: Point3,
    pub normal: Vec3,
    material_key: MaterialKey,
}

impl Plane {
    pub fn new(center: Point3, normal: Vec3, material_key: MaterialKey) -> Self {
        Self {
            center,
            normal,
            material_key,
        }
    }
}

#[inline(always)]
fn plane_uv(p: Point3) -> (Float, Float) {
    (p.x, p.z)
}

impl Hittable for Plane {
    /// Accepts any root `t >= EPSILON`; the caller's `[t_min, t_max]` is
    /// not consulted by this kind.
    fn hit(&self, ray_in: &Ray, _t_min: Float, _t_max: Float) -> Option<HitRecord> {
        let denom = Vec3::dot(self.normal, ray_in.direction);
        if denom.abs() <= EPSILON {
            return None;
        }

        let t = Vec3::dot(self.center - ray_in.origin, self.normal) / denom;
        if t < EPSILON {
            return None;
        }

        let point = ray_in.at(t);
        let (u, v) = plane_uv(point);
        Some(HitRecord {
            point,
            normal: self.normal,
            t,
            u,
            v,
            front_face: true,
            material_key: self.material_key,
        })
    }

    fn bounding_box(&self, _time0: Float, _time1: Float) -> Option<BoundingBox> {
        None
    }
}

/// Circular region of a plane, bounded by `radius` around the plane's
/// center. Inherits the plane's UV and normal policy wholesale.
#[derive(Debug, Clone, Copy)]
pub struct Disk {
    plane: Plane,
    pub radius: Float,
}

impl Disk {
    pub fn new(center: Point3, normal: Vec3, radius: Float, material_key: MaterialKey) -> Self {
        Self {
            plane: Plane::new(center, normal, material_key),
            radius,
        }
    }

    /// Thin-slab box with the slab axis chosen by testing the normal's
    /// components for exact equality with `1.0` (`+X`, then `+Y`, else the
    /// `Z` fallback). The fallback places *both* corners at
    /// `center - extent`, a zero-volume box, and is what any normal other
    /// than exactly `+X`/`+Y` gets — including exactly-`+Z` ones.
    ///
    /// [`Disk::bounding_box`] computes a correct box for every orientation;
    /// this variant is retained for parity with acceleration structures
    /// built against the old boxes.
    pub fn axis_slab_bounding_box(&self) -> BoundingBox {
        let c = self.plane.center;
        let r = self.radius;
        if self.plane.normal.x == 1.0 {
            let extent = Vec3::new(SLAB_HALF_THICKNESS, r, r);
            BoundingBox::new(c - extent, c + extent)
        } else if self.plane.normal.y == 1.0 {
            let extent = Vec3::new(r, SLAB_HALF_THICKNESS, r);
            BoundingBox::new(c - extent, c + extent)
        } else {
            let extent = Vec3::new(r, r, SLAB_HALF_THICKNESS);
            BoundingBox::new(c - extent, c - extent)
        }
    }
}

impl Hittable for Disk {
    fn hit(&self, ray_in: &Ray, t_min: Float, t_max: Float) -> Option<HitRecord> {
        let rec = self.plane.hit(ray_in, t_min, t_max)?;
        let offset = rec.point - self.plane.center;
        if offset.length_squared() <= self.radius * self.radius {
            Some(rec)
        } else {
            None
        }
    }

    /// Conservative box for any disk orientation: per-axis half-extent
    /// `radius * sqrt(1 - n_i^2)` for unit normal `n`, floored at the slab
    /// half-thickness so the box keeps positive volume on the normal axis.
    /// Axis-aligned disks get the expected `center ± (radius, 0.01, radius)`
    /// shape (and permutations).
    fn bounding_box(&self, _time0: Float, _time1: Float) -> Option<BoundingBox> {
        let n = self.plane.normal.normalize();
        let half = Vec3::new(
            (1.0 - n.x * n.x).max(0.0).sqrt(),
            (1.0 - n.y * n.y).max(0.0).sqrt(),
            (1.0 - n.z * n.z).max(0.0).sqrt(),
        ) * self.radius;
        let half = half.max(Vec3::splat(SLAB_HALF_THICKNESS));
        Some(BoundingBox::new(
            self.plane.center - half,
            self.plane.center + half,
        ))
    }
}
