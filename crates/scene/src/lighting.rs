//! Day/night lighting driven by scroll progress.
//!
//! One full scroll moves the sun through a complete revolution. The moon
//! sits opposite the sun and never goes fully dark.

use std::f64::consts::TAU;

use foundation::math::Vec3;
use runtime::clamp_progress;
use serde::{Deserialize, Serialize};

use crate::color::Rgb;

pub const SUN_COLOR: Rgb = Rgb::from_hex(0xfdb813);
pub const MOON_COLOR: Rgb = Rgb::from_hex(0xb8d7f0);

/// Moon intensity floor.
pub const MOON_MIN_INTENSITY: f64 = 0.3;

/// How the day/night flag relates to the sun angle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DaylightCycle {
    /// `sin(2 * angle) > 0`: two day phases per scroll while the sun
    /// completes one revolution.
    #[default]
    DoubleFrequency,
    /// `sin(angle) > 0`: day exactly while the sun is above the horizon.
    SunAligned,
}

impl DaylightCycle {
    pub fn is_daytime(self, sun_angle: f64) -> bool {
        match self {
            DaylightCycle::DoubleFrequency => (sun_angle * 2.0).sin() > 0.0,
            DaylightCycle::SunAligned => sun_angle.sin() > 0.0,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    /// Distance of the sun and moon from the globe's vertical axis.
    pub orbit_radius: f64,
    /// Fixed depth of both lights.
    pub light_z: f64,
    pub cycle: DaylightCycle,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            orbit_radius: 6.0,
            light_z: 3.0,
            cycle: DaylightCycle::default(),
        }
    }
}

/// Colors and intensities that switch with the day/night flag.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Palette {
    pub ambient_intensity: f64,
    pub globe_color: Rgb,
    pub globe_emissive: Rgb,
    pub fill_color: Rgb,
}

pub const DAY_PALETTE: Palette = Palette {
    ambient_intensity: 0.4,
    globe_color: Rgb::from_hex(0x3b82f6),
    globe_emissive: Rgb::from_hex(0x1e40af),
    fill_color: Rgb::from_hex(0x3b82f6),
};

pub const NIGHT_PALETTE: Palette = Palette {
    ambient_intensity: 0.2,
    globe_color: Rgb::from_hex(0x1e40af),
    globe_emissive: Rgb::from_hex(0x0a1929),
    fill_color: Rgb::from_hex(0x1e3a8a),
};

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Lighting {
    pub sun_angle: f64,
    pub sun_position: Vec3,
    pub sun_intensity: f64,
    pub moon_position: Vec3,
    pub moon_intensity: f64,
    pub is_daytime: bool,
    pub palette: Palette,
}

impl Lighting {
    pub fn at(progress: f64, config: &LightingConfig) -> Self {
        let sun_angle = clamp_progress(progress) * TAU;
        let height = sun_angle.sin();
        let sweep = sun_angle.cos();
        let r = config.orbit_radius;

        let is_daytime = config.cycle.is_daytime(sun_angle);

        Self {
            sun_angle,
            sun_position: Vec3::new(sweep * r, height * r, config.light_z),
            sun_intensity: (height * 2.0).max(0.0),
            moon_position: Vec3::new(-sweep * r, -height * r, config.light_z),
            moon_intensity: (-height * 1.5).max(MOON_MIN_INTENSITY),
            is_daytime,
            palette: if is_daytime { DAY_PALETTE } else { NIGHT_PALETTE },
        }
    }

    pub fn stars_visible(&self) -> bool {
        !self.is_daytime
    }
}

#[cfg(test)]
mod tests {
    use super::{
        DAY_PALETTE, DaylightCycle, Lighting, LightingConfig, MOON_MIN_INTENSITY, NIGHT_PALETTE,
    };
    use foundation::math::Vec3;
    use proptest::prelude::*;

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    /// (night-to-day, day-to-night) transitions over a full scroll.
    fn transitions(cycle: DaylightCycle) -> (usize, usize) {
        let config = LightingConfig {
            cycle,
            ..LightingConfig::default()
        };
        let mut rising = 0;
        let mut falling = 0;
        let mut prev = Lighting::at(0.0, &config).is_daytime;
        for i in 1..=1000 {
            let now = Lighting::at(i as f64 / 1000.0, &config).is_daytime;
            match (prev, now) {
                (false, true) => rising += 1,
                (true, false) => falling += 1,
                _ => {}
            }
            prev = now;
        }
        (rising, falling)
    }

    #[test]
    fn sun_starts_on_the_horizon() {
        let l = Lighting::at(0.0, &LightingConfig::default());
        assert_eq!(l.sun_position, Vec3::new(6.0, 0.0, 3.0));
        assert_eq!(l.moon_position, Vec3::new(-6.0, -0.0, 3.0));
        assert_eq!(l.sun_intensity, 0.0);
        assert_eq!(l.moon_intensity, MOON_MIN_INTENSITY);
        assert!(!l.is_daytime);
        assert!(l.stars_visible());
    }

    #[test]
    fn quarter_scroll_puts_sun_overhead() {
        let l = Lighting::at(0.25, &LightingConfig::default());
        assert_close(l.sun_position.x, 0.0, 1e-12);
        assert_close(l.sun_position.y, 6.0, 1e-12);
        assert_close(l.sun_intensity, 2.0, 1e-12);
        assert_eq!(l.moon_intensity, MOON_MIN_INTENSITY);
    }

    #[test]
    fn three_quarter_scroll_brightens_moon() {
        let l = Lighting::at(0.75, &LightingConfig::default());
        assert_close(l.moon_intensity, 1.5, 1e-12);
        assert_eq!(l.sun_intensity, 0.0);
        assert_close(l.moon_position.y, 6.0, 1e-12);
    }

    #[test]
    fn moon_mirrors_sun() {
        let l = Lighting::at(0.37, &LightingConfig::default());
        assert_eq!(l.moon_position.x, -l.sun_position.x);
        assert_eq!(l.moon_position.y, -l.sun_position.y);
        assert_eq!(l.moon_position.z, l.sun_position.z);
    }

    #[test]
    fn double_frequency_has_two_day_phases_per_scroll() {
        assert_eq!(transitions(DaylightCycle::DoubleFrequency), (2, 2));
    }

    #[test]
    fn sun_aligned_has_one_day_phase_per_scroll() {
        assert_eq!(transitions(DaylightCycle::SunAligned), (1, 1));
    }

    #[test]
    fn double_frequency_is_night_while_sun_is_high() {
        // Sun near its zenith (p ~ 0.3) but the double-frequency flag says night.
        let l = Lighting::at(0.3, &LightingConfig::default());
        assert!(l.sun_intensity > 1.0);
        assert!(!l.is_daytime);
        assert_eq!(l.palette, NIGHT_PALETTE);
    }

    #[test]
    fn palette_follows_daytime_flag() {
        let l = Lighting::at(0.1, &LightingConfig::default());
        assert!(l.is_daytime);
        assert_eq!(l.palette, DAY_PALETTE);
        assert!(!l.stars_visible());
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        let cfg = LightingConfig::default();
        assert_eq!(Lighting::at(-1.0, &cfg), Lighting::at(0.0, &cfg));
        assert_eq!(Lighting::at(3.0, &cfg), Lighting::at(1.0, &cfg));
    }

    proptest! {
        #[test]
        fn intensities_are_never_negative(p in 0.0f64..1.0) {
            let l = Lighting::at(p, &LightingConfig::default());
            prop_assert!(l.sun_intensity >= 0.0);
            prop_assert!(l.moon_intensity >= MOON_MIN_INTENSITY);
        }
    }
}
