use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

use crate::palette::sheet::FrameRect;

/// Sprite is identified by a texture key, its size in world units and a offset if the texture is a spritesheet.
/// The offset is used to select the correct frame from the spritesheet.
/// The origin selects the pivot point (in pixels) relative to the frame's top-left
/// used for placement and scaling when rendering.
///
/// Horse art faces left; `flip_h` makes it face right.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub offset: Vector2,
    pub origin: Vector2,
    pub flip_h: bool,
}

impl Sprite {
    /// Sprite showing `frame` of `tex_key`, pivoted at the frame centre.
    pub fn centered(tex_key: impl Into<String>, frame: FrameRect) -> Self {
        Self {
            tex_key: tex_key.into(),
            width: frame.width as f32,
            height: frame.height as f32,
            offset: Vector2 {
                x: frame.x as f32,
                y: frame.y as f32,
            },
            origin: Vector2 {
                x: frame.width as f32 * 0.5,
                y: frame.height as f32 * 0.5,
            },
            flip_h: false,
        }
    }

    /// Select another frame of the same sheet.
    pub fn set_frame(&mut self, frame: FrameRect) {
        self.offset = Vector2 {
            x: frame.x as f32,
            y: frame.y as f32,
        };
        self.width = frame.width as f32;
        self.height = frame.height as f32;
    }
}
