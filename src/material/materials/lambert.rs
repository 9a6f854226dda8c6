use crate::material::materials::*;

#[derive(Clone, Debug)]
pub struct Lambert(pub RGB);

impl MaterialImpl for Lambert {
    fn scatter<R: ?Sized>(&self, _ray: &Ray, hit: &shape::Hit, rng: &mut R) -> Option<Scatter>
    where
        R: Rng,
    {
        let mut dir = hit.normal + math::random_unit_vector(rng);
        if math::near_zero(&dir) {
            dir = hit.normal;
        }
        Some(Scatter {
            attenuation: self.0,
            ray: Ray::new(hit.pos, dir),
        })
    }
}
