//! Shared 2D camera resource.
//!
//! The game is laid out at the render resolution; the camera zoom scales it
//! up to the window. The same camera maps the mouse back into game space.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera2D, Vector2};

#[derive(Resource)]
pub struct Camera2DRes(pub Camera2D);

impl Camera2DRes {
    /// Camera that fits a `render_w`×`render_h` world into the window,
    /// keeping the aspect ratio and centring the result.
    pub fn fit(render_w: f32, render_h: f32, window_w: f32, window_h: f32) -> Self {
        let zoom = (window_w / render_w).min(window_h / render_h).max(f32::EPSILON);
        let offset = Vector2::new(
            (window_w - render_w * zoom) * 0.5,
            (window_h - render_h * zoom) * 0.5,
        );
        Camera2DRes(Camera2D {
            offset,
            target: Vector2::new(0.0, 0.0),
            rotation: 0.0,
            zoom,
        })
    }
}
