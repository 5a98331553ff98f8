mod plane;
mod rect;

use crate::traits::Hittable;
use crate::{Float, MaterialKey, Point3, Ray, Vec3};

pub use plane::{Disk, Plane};
pub use rect::{RectXy, RectXz, RectYz};

/// Threshold below which a denominator counts as parallel and below which
/// a planar root counts as a self-hit.
pub(crate) const EPSILON: Float = 1e-4;

/// Output of a successful intersection query.
///
/// `front_face` is meaningful only for front-face-corrected kinds (the
/// rectangles); [`Plane`] and [`Disk`] report their stored normal as-is
/// and leave the flag `true`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct HitRecord {
    pub point: Point3,
    pub normal: Vec3,
    pub t: Float,
    pub u: Float,
    pub v: Float,
    pub front_face: bool,
    pub material_key: MaterialKey,
}

/// Axis-aligned min/max corner pair consumed by acceleration structures.
/// This crate only constructs boxes, it never queries them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Point3,
    pub max: Point3,
}

impl BoundingBox {
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }
}

#[inline(always)]
pub(crate) fn set_front_face(r: &Ray, outward_normal: Vec3) -> (Vec3, bool) {
    let front_face = Vec3::dot(r.direction, outward_normal) < 0.0;
    if front_face {
        (outward_normal, front_face)
    } else {
        (-outward_normal, front_face)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Primitive {
    Plane(Plane),
    Disk(Disk),
    RectXy(RectXy),
    RectXz(RectXz),
    RectYz(RectYz),
}

impl Primitive {
    pub fn plane(center: Point3, normal: Vec3, material_key: MaterialKey) -> Self {
        Self::Plane(Plane::new(center, normal, material_key))
    }

    pub fn disk(center: Point3, normal: Vec3, radius: Float, material_key: MaterialKey) -> Self {
        Self::Disk(Disk::new(center, normal, radius, material_key))
    }

    pub fn rect_xy(
        x0: Float,
        x1: Float,
        y0: Float,
        y1: Float,
        k: Float,
        material_key: MaterialKey,
    ) -> Self {
        Self::RectXy(RectXy::new(x0, x1, y0, y1, k, material_key))
    }

    pub fn rect_xz(
        x0: Float,
        x1: Float,
        z0: Float,
        z1: Float,
        k: Float,
        material_key: MaterialKey,
    ) -> Self {
        Self::RectXz(RectXz::new(x0, x1, z0, z1, k, material_key))
    }

    pub fn rect_yz(
        y0: Float,
        y1: Float,
        z0: Float,
        z1: Float,
        k: Float,
        material_key: MaterialKey,
    ) -> Self {
        Self::RectYz(RectYz::new(y0, y1, z0, z1, k, material_key))
    }
}

impl Hittable for Primitive {
    fn hit(&self, ray_in: &Ray, t_min: Float, t_max: Float) -> Option<HitRecord> {
        match self {
            Self::Plane(p) => p.hit(ray_in, t_min, t_max),
            Self::Disk(d) => d.hit(ray_in, t_min, t_max),
            Self::RectXy(r) => r.hit(ray_in, t_min, t_max),
            Self::RectXz(r) => r.hit(ray_in, t_min, t_max),
            Self::RectYz(r) => r.hit(ray_in, t_min, t_max),
        }
    }

    fn bounding_box(&self, time0: Float, time1: Float) -> Option<BoundingBox> {
        match self {
            Self::Plane(p) => p.bounding_box(time0, time1),
            Self::Disk(d) => d.bounding_box(time0, time1),
            Self::RectXy(r) => r.bounding_box(time0, time1),
            Self::RectXz(r) => r.bounding_box(time0, time1),
            Self::RectYz(r) => r.bounding_box(time0, time1),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::traits::Hittable;
    use crate::{MaterialKey, Ray, Vec3};

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rayon::prelude::*;
    use slotmap::SlotMap;

    fn scene() -> Vec<Primitive> {
        let key = MaterialKey::default();
        vec![
            Primitive::plane(Vec3::ZERO, Vec3::Y, key),
            Primitive::disk(Vec3::new(0.0, 1.0, 0.0), Vec3::Y, 2.0, key),
            Primitive::rect_xy(-1.0, 1.0, -1.0, 1.0, 2.0, key),
            Primitive::rect_xz(-1.0, 1.0, -1.0, 1.0, 3.0, key),
            Primitive::rect_yz(-1.0, 1.0, -1.0, 1.0, -2.0, key),
        ]
    }

    fn random_ray(rng: &mut StdRng) -> Ray {
        Ray {
            origin: Vec3::new(
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-5.0..5.0),
            ),
            direction: Vec3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            ),
        }
    }

    #[test]
    fn repeated_queries_are_bit_identical() {
        let shapes = scene();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..256 {
            let ray = random_ray(&mut rng);
            for shape in &shapes {
                let first = shape.hit(&ray, 0.001, 1000.0);
                let second = shape.hit(&ray, 0.001, 1000.0);
                assert_eq!(first, second);
            }
        }
    }

    #[test]
    fn parallel_queries_match_serial() {
        let shapes = scene();
        let mut rng = StdRng::seed_from_u64(11);
        let rays: Vec<Ray> = (0..512).map(|_| random_ray(&mut rng)).collect();

        let serial: Vec<Vec<Option<HitRecord>>> = rays
            .iter()
            .map(|r| shapes.iter().map(|s| s.hit(r, 0.001, 1000.0)).collect())
            .collect();
        let parallel: Vec<Vec<Option<HitRecord>>> = rays
            .par_iter()
            .map(|r| shapes.iter().map(|s| s.hit(r, 0.001, 1000.0)).collect())
            .collect();

        assert_eq!(serial, parallel);
    }

    #[test]
    fn enum_dispatch_matches_direct_calls() {
        let key = MaterialKey::default();
        let ray = Ray {
            origin: Vec3::new(0.2, 0.3, -5.0),
            direction: Vec3::Z,
        };

        let rect = RectXy::new(-1.0, 1.0, -1.0, 1.0, 0.0, key);
        assert_eq!(
            Primitive::RectXy(rect).hit(&ray, 0.0, 100.0),
            rect.hit(&ray, 0.0, 100.0)
        );
        assert_eq!(
            Primitive::RectXy(rect).bounding_box(0.0, 1.0),
            rect.bounding_box(0.0, 1.0)
        );

        let disk = Disk::new(Vec3::ZERO, Vec3::Z, 0.5, key);
        let down_z = Ray {
            origin: Vec3::new(0.1, 0.1, 4.0),
            direction: -Vec3::Z,
        };
        assert_eq!(
            Primitive::Disk(disk).hit(&down_z, 0.0, 100.0),
            disk.hit(&down_z, 0.0, 100.0)
        );
        assert_eq!(
            Primitive::Disk(disk).bounding_box(0.0, 1.0),
            disk.bounding_box(0.0, 1.0)
        );
    }

    #[test]
    fn only_the_plane_is_unbounded() {
        for shape in scene() {
            let finite = shape.bounding_box(0.0, 1.0).is_some();
            match shape {
                Primitive::Plane(_) => assert!(!finite),
                _ => assert!(finite),
            }
        }
    }

    #[test]
    fn material_key_rides_through_the_record() {
        let mut materials: SlotMap<MaterialKey, &str> = SlotMap::with_key();
        let matte = materials.insert("matte");

        let rect = RectXz::new(-1.0, 1.0, -1.0, 1.0, 0.0, matte);
        let ray = Ray {
            origin: Vec3::new(0.0, 3.0, 0.0),
            direction: -Vec3::Y,
        };
        let rec = rect.hit(&ray, 0.0, 100.0).unwrap();
        assert_eq!(materials[rec.material_key], "matte");
    }
}
