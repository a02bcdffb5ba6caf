use super::Vec3;

/// Geographic coordinate in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LatLon {
    pub lat_deg: f64,
    pub lon_deg: f64,
}

impl LatLon {
    pub const fn new(lat_deg: f64, lon_deg: f64) -> Self {
        Self { lat_deg, lon_deg }
    }
}

/// Project a latitude/longitude onto a sphere centred at the origin.
///
/// Y is up. Longitude 0 lands on +X, longitude 180/-180 on -X, and
/// longitude 90 on -Z, matching the scene-graph convention used by the
/// renderer. Poles collapse X and Z to (numerically) zero.
pub fn lat_lon_to_sphere(coord: LatLon, radius: f64) -> Vec3 {
    let phi = (90.0 - coord.lat_deg).to_radians();
    let theta = (coord.lon_deg + 180.0).to_radians();

    let sin_phi = phi.sin();
    let x = -(radius * sin_phi * theta.cos());
    let z = radius * sin_phi * theta.sin();
    let y = radius * phi.cos();

    Vec3::new(x, y, z)
}

#[cfg(test)]
mod tests {
    use super::{LatLon, lat_lon_to_sphere};
    use proptest::prelude::*;

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    #[test]
    fn equator_prime_meridian_is_positive_x() {
        let p = lat_lon_to_sphere(LatLon::new(0.0, 0.0), 2.0);
        assert_close(p.x, 2.0, 1e-12);
        assert_close(p.y, 0.0, 1e-12);
        assert_close(p.z, 0.0, 1e-12);
    }

    #[test]
    fn antimeridian_mirrors_prime_meridian() {
        let origin = lat_lon_to_sphere(LatLon::new(0.0, 0.0), 3.0);
        for lon in [180.0, -180.0] {
            let p = lat_lon_to_sphere(LatLon::new(0.0, lon), 3.0);
            assert_close(p.x, -origin.x, 1e-12);
            assert_close(p.y, origin.y, 1e-12);
            assert_close(p.z, origin.z, 1e-12);
        }
    }

    #[test]
    fn east_ninety_is_negative_z() {
        let p = lat_lon_to_sphere(LatLon::new(0.0, 90.0), 1.0);
        assert_close(p.x, 0.0, 1e-12);
        assert_close(p.z, -1.0, 1e-12);
    }

    #[test]
    fn poles_collapse_horizontal_axes() {
        let north = lat_lon_to_sphere(LatLon::new(90.0, 37.0), 2.0);
        assert_close(north.x, 0.0, 1e-12);
        assert_close(north.z, 0.0, 1e-12);
        assert_close(north.y, 2.0, 1e-12);

        let south = lat_lon_to_sphere(LatLon::new(-90.0, -120.0), 2.0);
        assert_close(south.y, -2.0, 1e-12);
    }

    proptest! {
        #[test]
        fn projected_point_lies_on_sphere(
            lat in -90.0f64..=90.0,
            lon in -180.0f64..=180.0,
            radius in 0.01f64..100.0,
        ) {
            let p = lat_lon_to_sphere(LatLon::new(lat, lon), radius);
            prop_assert!((p.length() - radius).abs() <= 1e-9 * radius.max(1.0));
        }
    }
}
