use crate::*;

/// Maps normalized film coordinates to world space rays.
///
/// `u` runs left to right and `v` bottom to top, both over `[0, 1]`.
#[derive(Clone, Debug)]
pub struct Camera {
    origin: P3,
    lower_left_corner: P3,
    horizontal: V3,
    vertical: V3,
}

impl Camera {
    /// Camera at the origin looking down `-z`.
    pub fn new(aspect_ratio: f64, viewport_height: f64, focal_length: f64) -> Self {
        let viewport_width = viewport_height * aspect_ratio;
        let origin = P3::origin();
        let horizontal = V3::new(viewport_width, 0.0, 0.0);
        let vertical = V3::new(0.0, viewport_height, 0.0);
        let lower_left_corner =
            origin - V3::new(0.0, 0.0, focal_length) - horizontal / 2.0 - vertical / 2.0;
        Camera {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
        }
    }

    pub fn look_at(
        origin: P3,
        view_at: P3,
        view_up: V3,
        fov_degree: f64,
        aspect_ratio: f64,
    ) -> Self {
        let fov_rad = fov_degree.to_radians();
        let viewport_height = 2.0 * (fov_rad / 2.0).tan();
        let viewport_width = viewport_height * aspect_ratio;

        let w = math::unit_vector(&(origin - view_at));
        let u = math::unit_vector(&view_up.cross(&w));
        let v = w.cross(&u);

        let horizontal = viewport_width * u;
        let vertical = viewport_height * v;
        let lower_left_corner = origin - horizontal / 2.0 - vertical / 2.0 - w;
        Camera {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
        }
    }

    pub fn get_ray(&self, u: f64, v: f64) -> Ray {
        Ray::new(
            self.origin,
            self.lower_left_corner + u * self.horizontal + v * self.vertical - self.origin,
        )
    }
}

impl Default for Camera {
    fn default() -> Self {
        Camera::new(16.0 / 9.0, 2.0, 1.0)
    }
}
