use nalgebra::{Point3, Vector3};
use rand::distributions::{Distribution, Uniform};
use rand::prelude::*;

pub type P3 = Point3<f64>;
pub type V3 = Vector3<f64>;

//undefined for zero vectors
pub fn unit_vector(v: &V3) -> V3 {
    v / v.norm()
}

pub fn random_vec<R: Rng + ?Sized>(rng: &mut R) -> V3 {
    random_vec_range(rng, 0.0, 1.0)
}

pub fn random_vec_range<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> V3 {
    let u = Uniform::new(min, max);
    V3::new(u.sample(rng), u.sample(rng), u.sample(rng))
}

pub fn random_in_unit_sphere<R: Rng + ?Sized>(rng: &mut R) -> V3 {
    loop {
        let p = random_vec_range(rng, -1.0, 1.0);
        if p.norm_squared() < 1.0 {
            return p;
        }
    }
}

pub fn random_unit_vector<R: Rng + ?Sized>(rng: &mut R) -> V3 {
    loop {
        let p = random_in_unit_sphere(rng);
        // rejects samples too close to the center to normalize reliably
        if p.norm_squared() > 1e-160 {
            return unit_vector(&p);
        }
    }
}

pub fn random_in_hemisphere<R: Rng + ?Sized>(rng: &mut R, normal: &V3) -> V3 {
    let in_unit_sphere = random_in_unit_sphere(rng);
    if in_unit_sphere.dot(normal) > 0.0 {
        in_unit_sphere
    } else {
        -in_unit_sphere
    }
}

pub fn near_zero(v: &V3) -> bool {
    const S: f64 = 1e-8;
    v.iter().all(|x| x.abs() < S)
}

pub fn reflect(v: &V3, n: &V3) -> V3 {
    v - 2.0 * v.dot(n) * n
}

/// Bends the unit vector `uv` through a surface with normal `n`.
///
/// `eta_ratio` is the index of the incident side over the index of the
/// transmitted side. The caller must rule out total internal reflection.
pub fn refract(uv: &V3, n: &V3, eta_ratio: f64) -> V3 {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = eta_ratio * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.norm_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}
