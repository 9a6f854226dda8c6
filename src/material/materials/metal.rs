use crate::material::materials::*;

#[derive(Clone, Debug)]
pub struct Metal {
    pub albedo: RGB,
    /// Radius of the jitter added to the mirror direction, within `[0, 1]`.
    pub fuzz: f64,
}

impl Metal {
    pub fn new(albedo: RGB, fuzz: f64) -> Self {
        Metal {
            albedo,
            fuzz: fuzz.max(0.0).min(1.0),
        }
    }
}

impl MaterialImpl for Metal {
    fn scatter<R: ?Sized>(&self, ray: &Ray, hit: &shape::Hit, rng: &mut R) -> Option<Scatter>
    where
        R: Rng,
    {
        let reflected = math::reflect(&math::unit_vector(&ray.dir), &hit.normal);
        let dir = reflected + self.fuzz * math::random_in_unit_sphere(rng);
        // fuzz can push the ray below the surface
        if dir.dot(&hit.normal) > 0.0 {
            Some(Scatter {
                attenuation: self.albedo,
                ray: Ray::new(hit.pos, dir),
            })
        } else {
            None
        }
    }
}
