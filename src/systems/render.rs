use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::scale::Scale;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::breeder::BreederState;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::debugmode::DebugMode;
use crate::resources::pasture::Pasture;
use crate::resources::texturestore::TextureStore;

/// Sky colour behind everything.
const CLEAR_COLOR: Color = Color::new(0xAD, 0xD8, 0xE6, 0xFF);
/// Drawn where a texture failed to load.
const PLACEHOLDER_COLOR: Color = Color::new(0x80, 0x80, 0x80, 0x80);

/// Source and destination rectangles plus origin for one sprite.
///
/// A mirrored sprite uses a negative source width. The destination is scaled
/// around the sprite origin; a zero x scale collapses it to a vertical line.
pub fn sprite_rects(sprite: &Sprite, pos: Vector2, scale: Vector2) -> (Rectangle, Rectangle, Vector2) {
    let src = Rectangle {
        x: sprite.offset.x,
        y: sprite.offset.y,
        width: if sprite.flip_h {
            -sprite.width
        } else {
            sprite.width
        },
        height: sprite.height,
    };
    let sx = scale.x.abs();
    let sy = scale.y.abs();
    let dest = Rectangle {
        x: pos.x,
        y: pos.y,
        width: sprite.width * sx,
        height: sprite.height * sy,
    };
    let origin = Vector2 {
        x: sprite.origin.x * sx,
        y: sprite.origin.y * sy,
    };
    (src, dest, origin)
}

/// Draw all sprites in z order inside the camera.
pub fn render_pass(world: &mut World, d2: &mut RaylibMode2D<RaylibDrawHandle>) {
    let mut to_draw: Vec<(Sprite, MapPosition, ZIndex, Vector2)> = {
        let mut q = world.query::<(&Sprite, &MapPosition, &ZIndex, Option<&Scale>)>();
        q.iter(world)
            .map(|(s, p, z, scale)| {
                let scale = scale.map(|s| s.scale).unwrap_or(Vector2 { x: 1.0, y: 1.0 });
                (s.clone(), *p, *z, scale)
            })
            .collect()
    };
    to_draw.sort_by_key(|(_, _, z, _)| *z);

    let textures = world.resource::<TextureStore>();
    for (sprite, pos, _z, scale) in to_draw.iter() {
        let (src, dest, origin) = sprite_rects(sprite, pos.pos, *scale);
        match textures.get(&sprite.tex_key) {
            Some(tex) => d2.draw_texture_pro(tex, src, dest, origin, 0.0, Color::WHITE),
            None => d2.draw_rectangle_rec(
                Rectangle {
                    x: dest.x - origin.x,
                    y: dest.y - origin.y,
                    width: dest.width,
                    height: dest.height,
                },
                PLACEHOLDER_COLOR,
            ),
        }
    }

    if world.contains_resource::<DebugMode>() {
        let mut colliders = world.query::<(&BoxCollider, &MapPosition)>();
        for (collider, position) in colliders.iter(world) {
            let (x, y, w, h) = collider.get_aabb(position.pos);
            d2.draw_rectangle_lines(x as i32, y as i32, w as i32, h as i32, Color::RED);
        }
        if let Some(pasture) = world.get_resource::<Pasture>() {
            let w = pasture.width as i32;
            d2.draw_line(0, pasture.band_top as i32, w, pasture.band_top as i32, Color::BLUE);
            d2.draw_line(
                0,
                pasture.band_bottom as i32,
                w,
                pasture.band_bottom as i32,
                Color::BLUE,
            );
        }
    }
}

/// Breeder name and level, in window coordinates.
pub fn render_hud(world: &mut World, d: &mut RaylibDrawHandle) {
    if let Some(breeder) = world.get_resource::<BreederState>() {
        let text = format!("{}  level {}", breeder.name, breeder.level);
        d.draw_text(&text, 10, 10, 20, Color::BLACK);
    }
    if world.contains_resource::<DebugMode>() {
        let text = format!("FPS: {} | Entities: {}", d.get_fps(), world.entities().len());
        d.draw_text(&text, 10, 34, 10, Color::BLACK);
    }
}

/// Draw one frame.
///
/// Takes the raylib handles out of the world for the duration of the frame
/// so the render passes can query it freely.
pub fn render_system(world: &mut World) {
    let Some(mut rl) = world.remove_non_send_resource::<RaylibHandle>() else {
        return;
    };
    let Some(thread) = world.remove_non_send_resource::<RaylibThread>() else {
        world.insert_non_send_resource(rl);
        return;
    };
    let camera = world
        .get_resource::<Camera2DRes>()
        .map(|c| c.0)
        .unwrap_or(Camera2D {
            offset: Vector2 { x: 0.0, y: 0.0 },
            target: Vector2 { x: 0.0, y: 0.0 },
            rotation: 0.0,
            zoom: 1.0,
        });

    {
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(CLEAR_COLOR);
        {
            let mut d2 = d.begin_mode2D(camera);
            render_pass(world, &mut d2);
        }
        render_hud(world, &mut d);
    }

    world.insert_non_send_resource(thread);
    world.insert_non_send_resource(rl);
}
