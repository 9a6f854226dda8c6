use crate::*;
use std::sync::Arc;

/// An intersection together with the material found there.
#[derive(Clone, Debug)]
pub struct HitRecord<'a> {
    pub geom: shape::Hit,
    pub material: &'a material::Material,
}

/// Anything a ray can strike.
pub trait Hittable {
    /// Nearest intersection with `t` strictly inside `(tnear, tfar)`.
    fn hit(&self, ray: &Ray, tnear: f64, tfar: f64) -> Option<HitRecord<'_>>;
}

#[derive(Clone, Debug)]
pub struct SimpleObject {
    pub shape: shape::Sphere,
    pub material: Arc<material::Material>,
}

impl SimpleObject {
    pub fn sphere(center: P3, radius: f64, material: Arc<material::Material>) -> Self {
        SimpleObject {
            shape: shape::Sphere::new(center, radius),
            material,
        }
    }
}

impl Hittable for SimpleObject {
    fn hit(&self, ray: &Ray, tnear: f64, tfar: f64) -> Option<HitRecord<'_>> {
        self.shape.test_hit(ray, tnear, tfar).map(|geom| HitRecord {
            geom,
            material: self.material.as_ref(),
        })
    }
}

#[derive(Default)]
pub struct ObjectList {
    pub objects: Vec<Box<dyn Hittable + Send + Sync>>,
}

impl ObjectList {
    pub fn new() -> Self {
        ObjectList { objects: vec![] }
    }

    pub fn push<H: Hittable + Send + Sync + 'static>(&mut self, object: H) {
        self.objects.push(Box::new(object));
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Hittable for ObjectList {
    fn hit(&self, ray: &Ray, tnear: f64, mut tfar: f64) -> Option<HitRecord<'_>> {
        let mut hit = None::<HitRecord<'_>>;
        for o in self.objects.iter() {
            if let Some(new_hit) = o.hit(ray, tnear, tfar) {
                tfar = new_hit.geom.t;
                hit = Some(new_hit);
            }
        }
        hit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use material::Material;

    const INF: f64 = std::f64::INFINITY;

    fn two_overlapping(near_first: bool) -> ObjectList {
        let near = SimpleObject::sphere(
            P3::new(0.0, 0.0, -2.0),
            1.0,
            Arc::new(Material::new_lambert(RGB::new(1.0, 0.0, 0.0))),
        );
        let far = SimpleObject::sphere(
            P3::new(0.0, 0.0, -3.0),
            1.5,
            Arc::new(Material::new_lambert(RGB::new(0.0, 0.0, 1.0))),
        );
        let mut list = ObjectList::new();
        if near_first {
            list.push(near);
            list.push(far);
        } else {
            list.push(far);
            list.push(near);
        }
        list
    }

    #[test]
    fn nearest_hit_wins_in_any_order() {
        let ray = Ray::new(P3::origin(), V3::new(0.0, 0.0, -1.0));
        let near_first = two_overlapping(true);
        let far_first = two_overlapping(false);
        let a = near_first.hit(&ray, 1e-3, INF).unwrap();
        let b = far_first.hit(&ray, 1e-3, INF).unwrap();
        assert!((a.geom.t - 1.0).abs() < 1e-12);
        assert_eq!(a.geom.t, b.geom.t);
        assert_eq!(a.geom.pos, b.geom.pos);
        assert_eq!(a.geom.normal, b.geom.normal);
        match (a.material, b.material) {
            (Material::Lambert(x), Material::Lambert(y)) => {
                assert_eq!(x.0, RGB::new(1.0, 0.0, 0.0));
                assert_eq!(y.0, RGB::new(1.0, 0.0, 0.0));
            }
            _ => panic!("unexpected material"),
        }
    }

    #[test]
    fn tfar_limits_the_search() {
        let ray = Ray::new(P3::origin(), V3::new(0.0, 0.0, -1.0));
        let list = two_overlapping(false);
        assert!(list.hit(&ray, 1e-3, 0.5).is_none());
        let hit = list.hit(&ray, 1e-3, 1.2).unwrap();
        assert!((hit.geom.t - 1.0).abs() < 1e-12);
    }

    #[test]
    fn empty_list_never_hits() {
        let ray = Ray::new(P3::origin(), V3::new(0.0, 0.0, -1.0));
        let list = ObjectList::new();
        assert!(list.is_empty());
        assert!(list.hit(&ray, 1e-3, INF).is_none());
    }

    #[test]
    fn material_is_shared_not_copied() {
        let shared = Arc::new(Material::Absorber(material::materials::Absorber));
        let mut list = ObjectList::new();
        list.push(SimpleObject::sphere(P3::new(0.0, 0.0, -2.0), 0.5, shared.clone()));
        list.push(SimpleObject::sphere(P3::new(0.0, 3.0, -2.0), 0.5, shared.clone()));
        assert_eq!(Arc::strong_count(&shared), 3);
        assert_eq!(list.len(), 2);
    }
}
