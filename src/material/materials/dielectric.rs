use crate::material::materials::*;
use rand::distributions::Uniform;

#[derive(Clone, Debug)]
pub struct Dielectric {
    pub color: RGB,
    pub index: f64,
}

impl Dielectric {
    /// Unpolarized Fresnel reflectance between media `ix1` and `ix2`.
    fn fresnel_reflection(ix1: f64, cos1: f64, ix2: f64, cos2: f64) -> f64 {
        let p = (ix2 * cos1 - ix1 * cos2) / (ix2 * cos1 + ix1 * cos2);
        let s = (ix1 * cos1 - ix2 * cos2) / (ix1 * cos1 + ix2 * cos2);
        (p * p + s * s) / 2.0
    }
}

impl MaterialImpl for Dielectric {
    fn scatter<R: ?Sized>(&self, ray: &Ray, hit: &shape::Hit, rng: &mut R) -> Option<Scatter>
    where
        R: Rng,
    {
        let (index_in, index_out) = if hit.front_face {
            (1.0, self.index)
        } else {
            (self.index, 1.0)
        };
        let index_ratio = index_in / index_out;

        let unit_dir = math::unit_vector(&ray.dir);
        let cos_in = (-unit_dir).dot(&hit.normal).min(1.0);
        let sin_in = (1.0 - cos_in * cos_in).sqrt();
        let sin_out = sin_in * index_ratio;

        let dir = if sin_out < 1.0 {
            let cos_out = (1.0 - sin_out * sin_out).sqrt();
            let c_ref = Self::fresnel_reflection(index_in, cos_in, index_out, cos_out);
            if Uniform::new(0.0, 1.0).sample(rng) < c_ref {
                math::reflect(&unit_dir, &hit.normal)
            } else {
                math::refract(&unit_dir, &hit.normal, index_ratio)
            }
        } else {
            // total internal reflection
            math::reflect(&unit_dir, &hit.normal)
        };

        Some(Scatter {
            attenuation: self.color,
            ray: Ray::new(hit.pos, dir),
        })
    }
}
