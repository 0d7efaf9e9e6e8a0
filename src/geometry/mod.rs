//! Geometry and randomness helpers.
//!
//! Pure functions with no state: distances, normalization, box overlap,
//! interpolation and the seeded position generators used at level init.

use bevy::math::Vec3;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// RNG used for every random roll in the simulation
pub type SimRng = Xoshiro256PlusPlus;

pub fn seeded_rng(seed: u64) -> SimRng {
    Xoshiro256PlusPlus::seed_from_u64(seed)
}

pub fn distance(a: Vec3, b: Vec3) -> f32 {
    a.distance(b)
}

/// Unit vector in the direction of `v`, or zero for a zero-length input
pub fn normalize(v: Vec3) -> Vec3 {
    v.normalize_or_zero()
}

pub fn lerp(start: f32, end: f32, factor: f32) -> f32 {
    start + (end - start) * factor
}

pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}

/// Axis-aligned box given by center and full extents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec3,
    pub size: Vec3,
}

impl Aabb {
    pub fn new(center: Vec3, size: Vec3) -> Self {
        Self { center, size }
    }

    pub fn min(&self) -> Vec3 {
        self.center - self.size * 0.5
    }

    pub fn max(&self) -> Vec3 {
        self.center + self.size * 0.5
    }

    pub fn overlaps(&self, other: &Aabb) -> bool {
        aabb_overlap(self.center, self.size, other.center, other.size)
    }
}

/// Strict overlap on all three axes. Boxes that exactly touch do not overlap.
pub fn aabb_overlap(pos_a: Vec3, size_a: Vec3, pos_b: Vec3, size_b: Vec3) -> bool {
    let half_a = size_a * 0.5;
    let half_b = size_b * 0.5;
    pos_a.x - half_a.x < pos_b.x + half_b.x
        && pos_a.x + half_a.x > pos_b.x - half_b.x
        && pos_a.y - half_a.y < pos_b.y + half_b.y
        && pos_a.y + half_a.y > pos_b.y - half_b.y
        && pos_a.z - half_a.z < pos_b.z + half_b.z
        && pos_a.z + half_a.z > pos_b.z - half_b.z
}

/// Uniform roll in [min, max). Returns `min` for an empty range.
pub fn random_range(rng: &mut SimRng, min: f32, max: f32) -> f32 {
    if max <= min {
        return min;
    }
    min + rng.gen::<f32>() * (max - min)
}

/// Random point on the XZ plane within `radius` of the origin
pub fn random_position_in_disc(rng: &mut SimRng, radius: f32, height: f32) -> Vec3 {
    let angle = rng.gen::<f32>() * std::f32::consts::TAU;
    let dist = rng.gen::<f32>() * radius;
    Vec3::new(angle.cos() * dist, height, angle.sin() * dist)
}

/// Random point in the square of side `extent` centered on the origin
pub fn random_position_in_square(rng: &mut SimRng, extent: f32, height: f32) -> Vec3 {
    Vec3::new(
        (rng.gen::<f32>() - 0.5) * extent,
        height,
        (rng.gen::<f32>() - 0.5) * extent,
    )
}

/// Slot `index` of `count` evenly spaced points on a ring around the origin
pub fn ring_position(index: usize, count: usize, radius: f32, height: f32) -> Vec3 {
    let angle = if count == 0 {
        0.0
    } else {
        index as f32 / count as f32 * std::f32::consts::TAU
    };
    Vec3::new(angle.cos() * radius, height, angle.sin() * radius)
}

/// "m:ss" clock string
pub fn format_time(seconds: f32) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
