//! Kinematic body component.
//!
//! The [`RigidBody`] component stores the velocity integrated by
//! [`movement_system`](crate::systems::movement::movement_system). Horses only
//! ever move horizontally at constant speed, so there are no forces or
//! friction. Held horses keep their velocity but are skipped while
//! [`Dragged`](crate::components::draggable::Dragged).

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Kinematic body storing velocity in world units per second.
#[derive(Component, Clone, Debug)]
pub struct RigidBody {
    /// Current velocity in world units per second.
    pub velocity: Vector2,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a RigidBody with zero velocity.
    pub fn new() -> Self {
        Self {
            velocity: Vector2 { x: 0.0, y: 0.0 },
        }
    }

    /// Create a RigidBody moving horizontally at `vx`.
    pub fn with_velocity_x(vx: f32) -> Self {
        Self {
            velocity: Vector2 { x: vx, y: 0.0 },
        }
    }

    /// Sign of the horizontal velocity: -1, 0 or 1.
    pub fn direction_x(&self) -> f32 {
        if self.velocity.x > 0.0 {
            1.0
        } else if self.velocity.x < 0.0 {
            -1.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rigidbody_new() {
        let rb = RigidBody::new();
        assert_eq!(rb.velocity.x, 0.0);
        assert_eq!(rb.velocity.y, 0.0);
    }

    #[test]
    fn test_with_velocity_x() {
        let rb = RigidBody::with_velocity_x(-40.0);
        assert_eq!(rb.velocity.x, -40.0);
        assert_eq!(rb.velocity.y, 0.0);
    }

    #[test]
    fn test_direction_x() {
        assert_eq!(RigidBody::with_velocity_x(12.0).direction_x(), 1.0);
        assert_eq!(RigidBody::with_velocity_x(-0.5).direction_x(), -1.0);
        assert_eq!(RigidBody::new().direction_x(), 0.0);
    }
}
