//! Input system.
//!
//! [`update_pointer_state`] samples the mouse each frame, maps it into game
//! space through the camera, and toggles the debug overlay on F1.
use bevy_ecs::prelude::*;
use raylib::ffi::{KeyboardKey, MouseButton};

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::pointer::PointerState;

pub fn update_pointer_state(
    mut pointer: ResMut<PointerState>,
    camera: Res<Camera2DRes>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    let mouse = rl.get_mouse_position();
    let position = rl.get_screen_to_world2D(mouse, camera.0);
    let down = rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT);
    pointer.update(position, down);

    if rl.is_key_pressed(KeyboardKey::KEY_F1) {
        commands.trigger(SwitchDebugEvent {});
    }
}
