//! Input intents and the kinematic helpers shared by movers.
//!
//! Movement is variable-delta integration: callers pass the frame's delta time
//! and positions advance by `velocity * dt`.

use bevy::math::{Vec2, Vec3};

/// One frame of player intent, independent of the input device
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputIntent {
    pub forward: bool,
    pub backward: bool,
    pub leftward: bool,
    pub rightward: bool,
    pub jump: bool,
    pub interact: bool,
    pub clone: bool,
    pub inventory: bool,
    pub pause: bool,
    /// Analog stick, each axis in [-1, 1]; x = right, y = backward (screen down)
    pub joystick: Vec2,
}

impl InputIntent {
    pub fn idle() -> Self {
        Self::default()
    }

    /// Rising edges relative to the previous frame's intent
    pub fn edges(&self, previous: &InputIntent) -> InputEdges {
        InputEdges {
            interact: self.interact && !previous.interact,
            clone: self.clone && !previous.clone,
            inventory: self.inventory && !previous.inventory,
            pause: self.pause && !previous.pause,
        }
    }

    fn has_key_movement(&self) -> bool {
        self.forward || self.backward || self.leftward || self.rightward
    }
}

/// Actions that fire once per press
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputEdges {
    pub interact: bool,
    pub clone: bool,
    pub inventory: bool,
    pub pause: bool,
}

/// Horizontal move direction on the XZ plane with length at most 1.
///
/// Forward is -Z. Key flags take priority; the joystick is used only when no
/// movement key is held.
pub fn move_direction(input: &InputIntent) -> Vec3 {
    let raw = if input.has_key_movement() {
        let mut x = 0.0;
        let mut z = 0.0;
        if input.forward {
            z -= 1.0;
        }
        if input.backward {
            z += 1.0;
        }
        if input.leftward {
            x -= 1.0;
        }
        if input.rightward {
            x += 1.0;
        }
        Vec3::new(x, 0.0, z)
    } else {
        let stick = input.joystick.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
        Vec3::new(stick.x, 0.0, stick.y)
    };

    if raw.length_squared() > 1.0 {
        raw.normalize()
    } else {
        raw
    }
}

/// Subtract `gravity * dt` from vertical velocity. No terminal velocity.
pub fn apply_gravity(velocity: &mut Vec3, gravity: f32, delta_seconds: f32) {
    velocity.y -= gravity * delta_seconds;
}

/// Constant-speed seek on the XZ plane that never overshoots the target
pub fn seek_horizontal(from: Vec3, to: Vec3, speed: f32, delta_seconds: f32) -> Vec3 {
    let offset = Vec3::new(to.x - from.x, 0.0, to.z - from.z);
    let remaining = offset.length();
    let step = speed * delta_seconds;
    if remaining <= step || remaining == 0.0 {
        return Vec3::new(to.x, from.y, to.z);
    }
    from + offset / remaining * step
}
