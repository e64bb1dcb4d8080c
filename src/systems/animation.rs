//! Animation system.
//!
//! Advances [`Animation`] playback by elapsed time and points the entity's
//! [`Sprite`] at the current frame rectangle and texture.

use bevy_ecs::prelude::*;

use crate::components::animation::Animation;
use crate::components::sprite::Sprite;
use crate::resources::animationstore::AnimationStore;
use crate::resources::worldtime::WorldTime;

/// Advance animation playback and update the sprite frame.
///
/// Unknown animation keys leave the sprite as it is.
pub fn animation(
    mut query: Query<(&mut Animation, &mut Sprite)>,
    animation_store: Res<AnimationStore>,
    time: Res<WorldTime>,
) {
    for (mut anim_comp, mut sprite) in query.iter_mut() {
        let Some(animation) = animation_store.get(&anim_comp.animation_key) else {
            continue;
        };
        let frame_count = animation.frame_count();
        if frame_count == 0 {
            continue;
        }

        if animation.fps > 0.0 {
            anim_comp.elapsed_time += time.delta;
            let frame_duration = 1.0 / animation.fps;
            while anim_comp.elapsed_time >= frame_duration {
                anim_comp.elapsed_time -= frame_duration;
                anim_comp.frame_index += 1;
                if anim_comp.frame_index >= frame_count {
                    if animation.looped {
                        anim_comp.frame_index = 0;
                    } else {
                        anim_comp.frame_index = frame_count - 1;
                        anim_comp.elapsed_time = 0.0;
                        break;
                    }
                }
            }
        }
        anim_comp.frame_index = anim_comp.frame_index.min(frame_count - 1);

        if sprite.tex_key != *animation.tex_key {
            sprite.tex_key = animation.tex_key.to_string();
        }
        sprite.set_frame(animation.frames[anim_comp.frame_index]);
    }
}
