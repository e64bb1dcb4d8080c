//! Field layout: world size, the band horses roam in, and the stable placement.
//!
//! Everything is derived from the render resolution and the horse frame size,
//! so a different `[render]` size rescales the layout.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

/// Share of the height above the band (sky and stable).
const BAND_TOP_RATIO: f32 = 0.3;
/// Gap between the band and the bottom edge.
const BAND_BOTTOM_MARGIN: f32 = 4.0;
/// Stable centre height as a share of the height.
const STABLE_Y_RATIO: f32 = 0.2;
const STABLE_SIZE: Vector2 = Vector2 { x: 96.0, y: 72.0 };

pub const DEFAULT_BIRTH_SPEED: f32 = -20.0;
pub const DEFAULT_PUSHBACK: f32 = 24.0;
pub const DEFAULT_RETURN_DURATION: f32 = 0.25;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Pasture {
    pub width: f32,
    pub height: f32,
    /// Topmost y a horse footprint may reach.
    pub band_top: f32,
    /// Bottommost y a horse footprint may reach.
    pub band_bottom: f32,
    /// Horse frame size in pixels.
    pub horse_size: Vector2,
    /// Centre of the stable.
    pub stable_pos: Vector2,
    pub stable_size: Vector2,
    /// Where bred horses appear.
    pub birth_pos: Vector2,
    /// Horizontal velocity of a newborn.
    pub birth_speed: f32,
    /// How far a missed drop is pushed back along its travel direction.
    pub pushback: f32,
    /// Duration of the tween that brings a stray horse back into the band.
    pub return_duration: f32,
}

impl Default for Pasture {
    fn default() -> Self {
        Self::new(640.0, 320.0, Vector2::new(60.0, 33.0))
    }
}

impl Pasture {
    pub fn new(width: f32, height: f32, horse_size: Vector2) -> Self {
        let stable_pos = Vector2::new(width * 0.5, height * STABLE_Y_RATIO);
        let birth_pos = Vector2::new(
            stable_pos.x,
            stable_pos.y + STABLE_SIZE.y * 0.5 + horse_size.y * 0.5 + 4.0,
        );
        Self {
            width,
            height,
            band_top: height * BAND_TOP_RATIO,
            band_bottom: height - BAND_BOTTOM_MARGIN,
            horse_size,
            stable_pos,
            stable_size: STABLE_SIZE,
            birth_pos,
            birth_speed: DEFAULT_BIRTH_SPEED,
            pushback: DEFAULT_PUSHBACK,
            return_duration: DEFAULT_RETURN_DURATION,
        }
    }

    pub fn half_horse_width(&self) -> f32 {
        self.horse_size.x * 0.5
    }

    /// Range of valid centre y values for a footprint of the given half height.
    pub fn center_range(&self, half_height: f32) -> (f32, f32) {
        let lo = self.band_top + half_height;
        let hi = (self.band_bottom - half_height).max(lo);
        (lo, hi)
    }

    /// Centre y that puts a footprint `top..bottom` back in the band, or
    /// `None` if it is already inside.
    pub fn band_correction(&self, center_y: f32, top: f32, bottom: f32) -> Option<f32> {
        if top >= self.band_top && bottom <= self.band_bottom {
            return None;
        }
        let (lo, hi) = self.center_range((bottom - top) * 0.5);
        Some(center_y.clamp(lo, hi))
    }

    /// Random centre y inside the band for a horse.
    pub fn random_center_y(&self, rng: &mut fastrand::Rng) -> f32 {
        let (lo, hi) = self.center_range(self.horse_size.y * 0.5);
        lo + rng.f32() * (hi - lo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let p = Pasture::default();
        assert_eq!(p.band_top, 96.0);
        assert_eq!(p.band_bottom, 316.0);
        assert_eq!(p.stable_pos, Vector2::new(320.0, 64.0));
        assert_eq!(p.birth_pos, Vector2::new(320.0, 120.5));
    }

    #[test]
    fn test_birth_position_is_inside_band() {
        let p = Pasture::default();
        let half = p.horse_size.y * 0.5;
        assert_eq!(
            p.band_correction(p.birth_pos.y, p.birth_pos.y - half, p.birth_pos.y + half),
            None
        );
    }

    #[test]
    fn test_band_correction() {
        let p = Pasture::default();
        // Footprint 10..40 is above the band: centre moves to 96 + 15.
        assert_eq!(p.band_correction(25.0, 10.0, 40.0), Some(111.0));
        // Footprint 300..330 is below the band: centre moves to 316 - 15.
        assert_eq!(p.band_correction(315.0, 300.0, 330.0), Some(301.0));
        assert_eq!(p.band_correction(200.0, 185.0, 215.0), None);
    }

    #[test]
    fn test_random_center_y_stays_in_band() {
        let p = Pasture::default();
        let mut rng = fastrand::Rng::with_seed(7);
        let (lo, hi) = p.center_range(p.horse_size.y * 0.5);
        for _ in 0..100 {
            let y = p.random_center_y(&mut rng);
            assert!(y >= lo && y <= hi);
        }
    }
}
