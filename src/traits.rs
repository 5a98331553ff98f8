use std::fmt::Debug;

use crate::shape::{BoundingBox, HitRecord};
use crate::{Float, Ray};

pub trait Hittable: Debug + Send + Sync {
    /// Ray intersection query over the parametric interval `[t_min, t_max]`.
    ///
    /// `None` is the only miss outcome; a miss performs no writes of any
    /// kind. See [`Plane::hit`](crate::Plane) for the one kind that does
    /// not consult the interval.
    fn hit(&self, ray_in: &Ray, t_min: Float, t_max: Float) -> Option<HitRecord>;

    /// Conservative enclosing box, or `None` for unbounded shapes.
    ///
    /// `time0`/`time1` keep the signature uniform with moving-geometry
    /// implementors elsewhere in the renderer; every shape in this crate
    /// is static and ignores them.
    fn bounding_box(&self, time0: Float, time1: Float) -> Option<BoundingBox>;
}
