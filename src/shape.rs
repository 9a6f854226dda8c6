use crate::*;

/// Geometry of a ray-surface intersection.
#[derive(Clone, Debug)]
pub struct Hit {
    pub t: f64,
    pub pos: P3,
    /// Unit normal facing against the incoming ray.
    pub normal: V3,
    /// Whether the ray struck the outward facing side.
    pub front_face: bool,
}

impl Hit {
    pub fn new(ray: &Ray, t: f64, pos: P3, outward_normal: V3) -> Self {
        let front_face = ray.dir.dot(&outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };
        Hit {
            t,
            pos,
            normal,
            front_face,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Sphere {
    pub center: P3,
    /// A negative radius turns the outward normal inward, which models the
    /// inner wall of a hollow shell.
    pub radius: f64,
}

impl Sphere {
    pub fn new(center: P3, radius: f64) -> Self {
        Sphere { center, radius }
    }

    fn make_hit(&self, ray: &Ray, t: f64) -> Hit {
        let pos = ray.at(t);
        let outward_normal = (pos - self.center) / self.radius;
        Hit::new(ray, t, pos, outward_normal)
    }

    /// Nearest intersection with `t` strictly between `tnear` and `tfar`.
    ///
    /// Solves `|O + tD - C|^2 = R^2` with the half-b form of the quadratic.
    /// The entry root is tried before the exit root, so a ray starting inside
    /// the sphere reports where it leaves.
    pub fn test_hit(&self, ray: &Ray, tnear: f64, tfar: f64) -> Option<Hit> {
        let oc = ray.origin - self.center;
        let a = ray.dir.norm_squared();
        let half_b = ray.dir.dot(&oc);
        let c = oc.norm_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrtd = discriminant.sqrt();

        // a root exactly at tfar is rejected, so on equal t the object found first wins
        let in_range = |t: f64| tnear < t && t < tfar;
        let tmin = (-half_b - sqrtd) / a;
        let tmax = (-half_b + sqrtd) / a;
        if in_range(tmin) {
            Some(self.make_hit(ray, tmin))
        } else if in_range(tmax) {
            Some(self.make_hit(ray, tmax))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;
    use rand::rngs::SmallRng;

    const INF: f64 = std::f64::INFINITY;

    fn unit_sphere_ahead() -> Sphere {
        Sphere::new(P3::new(0.0, 0.0, -1.0), 0.5)
    }

    #[test]
    fn hit_straight_ahead() {
        let ray = Ray::new(P3::origin(), V3::new(0.0, 0.0, -1.0));
        let hit = unit_sphere_ahead().test_hit(&ray, 1e-3, INF).unwrap();
        assert!((hit.t - 0.5).abs() < 1e-12);
        assert!((hit.pos - P3::new(0.0, 0.0, -0.5)).norm() < 1e-12);
        assert!((hit.normal - V3::new(0.0, 0.0, 1.0)).norm() < 1e-12);
        assert!(hit.front_face);
    }

    #[test]
    fn root_matches_analytic_solution() {
        // |D| = 3, so the entry point at distance 7 sits at t = 7 / 3
        let sphere = Sphere::new(P3::new(0.0, 0.0, -10.0), 3.0);
        let ray = Ray::new(P3::origin(), V3::new(0.0, 0.0, -3.0));
        let hit = sphere.test_hit(&ray, 1e-3, INF).unwrap();
        let expected = 7.0 / 3.0;
        assert!(((hit.t - expected) / expected).abs() < 1e-9);
    }

    #[test]
    fn lines_passing_outside_never_hit() {
        let sphere = Sphere::new(P3::new(1.0, 2.0, 3.0), 1.0);
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..1000 {
            let dir = math::random_unit_vector(&mut rng);
            // offset the line sideways from the center by more than the radius
            let side = math::unit_vector(&dir.cross(&math::random_unit_vector(&mut rng)));
            let origin = sphere.center + side * 1.5 - dir * 10.0;
            let ray = Ray::new(origin, dir * rng.gen_range(0.1..10.0));
            assert!(sphere.test_hit(&ray, -INF, INF).is_none());
        }
    }

    #[test]
    fn normal_is_unit_and_faces_the_ray() {
        let sphere = Sphere::new(P3::new(0.0, 0.0, 0.0), 2.0);
        let mut rng = SmallRng::seed_from_u64(2);
        for _ in 0..1000 {
            let origin = P3::origin() + math::random_vec_range(&mut rng, -4.0, 4.0);
            let target = P3::origin() + math::random_in_unit_sphere(&mut rng);
            let ray = Ray::from_to(&origin, &target);
            if let Some(hit) = sphere.test_hit(&ray, 1e-6, INF) {
                assert!((hit.normal.norm() - 1.0).abs() < 1e-9);
                assert!(hit.normal.dot(&ray.dir) <= 0.0);
            }
        }
    }

    #[test]
    fn ray_from_inside_reports_exit() {
        let sphere = Sphere::new(P3::new(0.0, 0.0, 0.0), 2.0);
        let ray = Ray::new(P3::new(0.0, 0.0, 1.0), V3::new(0.0, 0.0, 1.0));
        let hit = sphere.test_hit(&ray, 1e-3, INF).unwrap();
        assert!((hit.t - 1.0).abs() < 1e-12);
        assert!(!hit.front_face);
        assert!((hit.normal - V3::new(0.0, 0.0, -1.0)).norm() < 1e-12);
    }

    #[test]
    fn bounds_are_exclusive() {
        let ray = Ray::new(P3::origin(), V3::new(0.0, 0.0, -1.0));
        let sphere = unit_sphere_ahead();
        // entry at 0.5 is excluded, exit at 1.5 is taken
        let hit = sphere.test_hit(&ray, 0.5, INF).unwrap();
        assert!((hit.t - 1.5).abs() < 1e-12);
        assert!(sphere.test_hit(&ray, 0.5, 1.5).is_none());
        assert!(sphere.test_hit(&ray, 1e-3, 0.4).is_none());
        // root at exactly tfar
        assert!(sphere.test_hit(&ray, 1e-3, 0.5).is_none());
    }

    #[test]
    fn negative_radius_flips_outward_normal() {
        let sphere = Sphere::new(P3::new(0.0, 0.0, -1.0), -0.5);
        let ray = Ray::new(P3::origin(), V3::new(0.0, 0.0, -1.0));
        let hit = sphere.test_hit(&ray, 1e-3, INF).unwrap();
        assert!(!hit.front_face);
        assert!(hit.normal.dot(&ray.dir) <= 0.0);
    }
}
