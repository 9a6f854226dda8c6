use crate::material::materials::*;

/// Swallows every ray.
#[derive(Clone, Debug)]
pub struct Absorber;

impl MaterialImpl for Absorber {
    fn scatter<R: ?Sized>(&self, _ray: &Ray, _hit: &shape::Hit, _rng: &mut R) -> Option<Scatter>
    where
        R: Rng,
    {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::materials::testing::hit_facing;
    use rand::rngs::SmallRng;

    #[test]
    fn never_scatters() {
        let mut rng = SmallRng::seed_from_u64(0);
        let ray = Ray::new(P3::origin(), V3::new(0.0, 0.0, -1.0));
        let hit = hit_facing(&ray, 1.0, V3::z());
        for _ in 0..10 {
            assert!(Absorber.scatter(&ray, &hit, &mut rng).is_none());
        }
    }
}
