//! Play-field integration tests: stable, breeding, spawning, wrapping and turning.

use bevy_ecs::observer::{Observer, On};
use bevy_ecs::prelude::*;
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::system::ScheduleSystem;
use raylib::prelude::Vector2;

use horsebreeder::components::animation::Animation;
use horsebreeder::components::boxcollider::BoxCollider;
use horsebreeder::components::draggable::Dragged;
use horsebreeder::components::horse::{FlipState, Gait, Horse};
use horsebreeder::components::mapposition::MapPosition;
use horsebreeder::components::rigidbody::RigidBody;
use horsebreeder::components::scale::Scale;
use horsebreeder::components::sprite::Sprite;
use horsebreeder::components::stablezone::StableZone;
use horsebreeder::components::tween::{TweenPosition, TweenScale};
use horsebreeder::components::zindex::ZIndex;
use horsebreeder::events::breeding::HorseBredEvent;
use horsebreeder::events::drag::DragEndEvent;
use horsebreeder::resources::breeder::BreederState;
use horsebreeder::resources::catalog::{HorseCatalog, HorseType};
use horsebreeder::resources::pasture::Pasture;
use horsebreeder::resources::pointer::PointerState;
use horsebreeder::resources::spawner::HorseSpawner;
use horsebreeder::resources::stable::{Stable, StableState};
use horsebreeder::resources::worldtime::WorldTime;
use horsebreeder::systems::horse::{
    DRAGGED_Z, depth_system, facing_system, flip_observer, spawn_horse, wrap_system,
};
use horsebreeder::systems::drag::drag_system;
use horsebreeder::systems::movement::movement_system;
use horsebreeder::systems::spawner::spawner_system;
use horsebreeder::systems::stable::drop_observer;
use horsebreeder::systems::tween::{tween_mapposition_system, tween_scale_system};

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn kind(level: u32) -> HorseType {
    HorseType {
        sheet: level,
        level,
    }
}

/// Foals born during a test.
#[derive(Resource, Default)]
struct Births(Vec<HorseBredEvent>);

fn record_birth(trigger: On<HorseBredEvent>, mut births: ResMut<Births>) {
    births.0.push(*trigger.event());
}

fn make_world(delta: f32) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime {
        elapsed: 0.0,
        delta,
        time_scale: 1.0,
    });
    world.insert_resource(Pasture::default());
    world.insert_resource(HorseCatalog::default());
    world.insert_resource(BreederState::default());
    world.insert_resource(Stable::new());
    world.insert_resource(Births::default());
    world.insert_resource(PointerState::default());
    world.spawn(Observer::new(drop_observer));
    world.spawn(Observer::new(flip_observer));
    world.spawn(Observer::new(record_birth));

    let pasture = *world.resource::<Pasture>();
    world.spawn((
        StableZone,
        MapPosition::new(pasture.stable_pos.x, pasture.stable_pos.y),
        BoxCollider::centered(pasture.stable_size.x, pasture.stable_size.y),
    ));
    world.flush();
    world
}

fn add_horse(world: &mut World, kind: HorseType, x: f32, y: f32, vx: f32) -> Entity {
    let size = world.resource::<Pasture>().horse_size;
    let entity = spawn_horse(
        &mut world.commands(),
        kind,
        Vector2::new(x, y),
        vx,
        Gait::Run,
        size,
    );
    world.flush();
    entity
}

fn drop_at(world: &mut World, entity: Entity, x: f32, y: f32) {
    world.get_mut::<MapPosition>(entity).unwrap().pos = Vector2::new(x, y);
    world.trigger(DragEndEvent {
        entity,
        position: Vector2::new(x, y),
    });
    world.flush();
}

fn drop_in_stable(world: &mut World, entity: Entity) {
    let stable = world.resource::<Pasture>().stable_pos;
    drop_at(world, entity, stable.x, stable.y);
}

fn run_system<M>(world: &mut World, system: impl IntoScheduleConfigs<ScheduleSystem, M>) {
    let mut schedule = Schedule::default();
    schedule.add_systems(system);
    schedule.run(world);
}

fn horses(world: &mut World) -> Vec<(Entity, Horse)> {
    let mut q = world.query::<(Entity, &Horse)>();
    q.iter(world).map(|(e, h)| (e, *h)).collect()
}

// ==================== STABLE & BREEDING ====================

#[test]
fn first_drop_fills_the_stable() {
    let mut world = make_world(0.0);
    let a = add_horse(&mut world, kind(2), 100.0, 200.0, 40.0);

    drop_in_stable(&mut world, a);

    let stable = world.resource::<Stable>();
    assert_eq!(stable.state(), StableState::OneFilled);
    assert_eq!(stable.pending(), &[kind(2)]);
    assert!(world.get_entity(a).is_err());
}

#[test]
fn second_drop_breeds_one_foal_at_birth_position() {
    let mut world = make_world(0.0);
    let a = add_horse(&mut world, kind(2), 100.0, 200.0, 40.0);
    let b = add_horse(&mut world, kind(3), 300.0, 250.0, -40.0);

    drop_in_stable(&mut world, a);
    drop_in_stable(&mut world, b);

    let stable = world.resource::<Stable>();
    assert_eq!(stable.state(), StableState::Empty);
    assert!(stable.pending().is_empty());
    assert_eq!(world.resource::<BreederState>().level, 5);

    let all = horses(&mut world);
    assert_eq!(all.len(), 1);
    let (foal, horse) = all[0];
    assert_eq!(horse.kind, kind(5));
    assert_eq!(horse.gait, Gait::Walk);

    let pasture = *world.resource::<Pasture>();
    assert_eq!(world.get::<MapPosition>(foal).unwrap().pos, pasture.birth_pos);
    assert_eq!(
        world.get::<RigidBody>(foal).unwrap().velocity.x,
        pasture.birth_speed
    );
    assert_eq!(
        world.get::<Animation>(foal).unwrap().animation_key,
        "horse-color-5-walk"
    );

    let births = &world.resource::<Births>().0;
    assert_eq!(births.len(), 1);
    assert_eq!(births[0].parents, (kind(2), kind(3)));
    assert_eq!(births[0].entity, foal);
}

#[test]
fn breeder_level_never_decreases() {
    let mut world = make_world(0.0);
    world.resource_mut::<BreederState>().level = 9;
    let a = add_horse(&mut world, kind(1), 100.0, 200.0, 40.0);
    let b = add_horse(&mut world, kind(1), 120.0, 200.0, 40.0);

    drop_in_stable(&mut world, a);
    drop_in_stable(&mut world, b);

    assert_eq!(world.resource::<BreederState>().level, 9);
    assert_eq!(horses(&mut world)[0].1.kind, kind(2));
}

#[test]
fn bred_level_beyond_catalog_falls_back_to_lowest() {
    let mut world = make_world(0.0);
    let a = add_horse(&mut world, kind(6), 100.0, 200.0, 40.0);
    let b = add_horse(&mut world, kind(7), 120.0, 200.0, 40.0);

    drop_in_stable(&mut world, a);
    drop_in_stable(&mut world, b);

    assert_eq!(world.resource::<BreederState>().level, 13);
    assert_eq!(horses(&mut world)[0].1.kind, kind(1));
}

#[test]
fn missed_drop_pushes_back_and_walks() {
    let mut world = make_world(0.0);
    let a = add_horse(&mut world, kind(1), 100.0, 200.0, 40.0);

    drop_at(&mut world, a, 100.0, 200.0);

    let pos = world.get::<MapPosition>(a).unwrap().pos;
    assert!(approx_eq(pos.x, 76.0));
    assert!(approx_eq(pos.y, 200.0));
    assert_eq!(world.get::<Horse>(a).unwrap().gait, Gait::Walk);
    assert_eq!(
        world.get::<Animation>(a).unwrap().animation_key,
        "horse-color-1-walk"
    );
    assert!(world.get::<TweenPosition>(a).is_none());
    assert_eq!(world.resource::<Stable>().state(), StableState::Empty);
}

#[test]
fn missed_drop_outside_band_tweens_back_in() {
    let mut world = make_world(0.25);
    let a = add_horse(&mut world, kind(1), 100.0, 200.0, -40.0);

    // Above the band, away from the stable.
    drop_at(&mut world, a, 40.0, 20.0);

    let pasture = *world.resource::<Pasture>();
    let target_y = pasture.band_top + pasture.horse_size.y * 0.5;
    let tween = world.get::<TweenPosition>(a).unwrap();
    assert!(approx_eq(tween.to.y, target_y));
    assert!(approx_eq(tween.to.x, 64.0));
    assert!(approx_eq(tween.duration, 0.25));

    run_system(&mut world, tween_mapposition_system);

    let pos = world.get::<MapPosition>(a).unwrap().pos;
    assert!(approx_eq(pos.y, target_y));
    assert!(world.get::<TweenPosition>(a).is_none());
    assert!(world.get_entity(a).is_ok());
}

#[test]
fn picking_up_a_returning_horse_follows_the_pointer() {
    let mut world = make_world(0.1);
    let a = add_horse(&mut world, kind(1), 100.0, 200.0, -40.0);

    // Missed drop above the band starts a return tween from (64, 20).
    drop_at(&mut world, a, 40.0, 20.0);
    assert!(world.get::<TweenPosition>(a).is_some());

    // Grab it 6 px right and 5 px below its centre.
    world
        .resource_mut::<PointerState>()
        .update(Vector2::new(70.0, 25.0), true);
    run_system(&mut world, drag_system);
    assert!(world.get::<Dragged>(a).is_some());
    assert!(world.get::<TweenPosition>(a).is_none());

    world
        .resource_mut::<PointerState>()
        .update(Vector2::new(500.0, 250.0), true);
    run_system(
        &mut world,
        (drag_system, tween_mapposition_system, movement_system).chain(),
    );

    let pos = world.get::<MapPosition>(a).unwrap().pos;
    assert!(approx_eq(pos.x, 494.0));
    assert!(approx_eq(pos.y, 245.0));
}

// ==================== SPAWNER ====================

#[test]
fn spawner_respects_the_cap() {
    let mut world = make_world(1.0);
    world.insert_resource(HorseSpawner::new(1.0, 8, 40.0).with_seed(42));

    for _ in 0..20 {
        run_system(&mut world, spawner_system);
    }

    let all = horses(&mut world);
    assert_eq!(all.len(), 8);
    assert!(all.iter().all(|(_, h)| h.kind.level == 1));
}

#[test]
fn spawned_horses_enter_from_an_edge_and_run() {
    let mut world = make_world(1.0);
    world.resource_mut::<BreederState>().level = 3;
    world.insert_resource(HorseSpawner::new(1.0, 50, 40.0).with_seed(7));

    for _ in 0..30 {
        run_system(&mut world, spawner_system);
    }

    let pasture = *world.resource::<Pasture>();
    let half = pasture.half_horse_width();
    let (lo, hi) = pasture.center_range(pasture.horse_size.y * 0.5);
    let mut q = world.query::<(&Horse, &MapPosition, &RigidBody, &Animation)>();
    let mut count = 0;
    for (horse, pos, body, anim) in q.iter(&world) {
        count += 1;
        assert!((1..=3).contains(&horse.kind.level));
        if body.velocity.x > 0.0 {
            assert!(approx_eq(pos.pos.x, -half));
        } else {
            assert!(approx_eq(pos.pos.x, pasture.width + half));
        }
        assert!(approx_eq(body.velocity.x.abs(), 40.0));
        assert!(pos.pos.y >= lo && pos.pos.y <= hi);
        assert!(anim.animation_key.ends_with("-run"));
    }
    assert_eq!(count, 30);
}

#[test]
fn disabled_spawner_spawns_nothing() {
    let mut world = make_world(1.0);
    let mut spawner = HorseSpawner::default();
    spawner.enabled = false;
    world.insert_resource(spawner);

    for _ in 0..5 {
        run_system(&mut world, spawner_system);
    }
    assert!(horses(&mut world).is_empty());
}

// ==================== MOVEMENT, WRAP, DEPTH ====================

#[test]
fn wrap_moves_horses_to_the_opposite_edge() {
    let mut world = make_world(0.0);
    let left = add_horse(&mut world, kind(1), -31.0, 200.0, -40.0);
    let right = add_horse(&mut world, kind(1), 671.0, 200.0, 40.0);
    let inside = add_horse(&mut world, kind(1), -30.0, 200.0, 40.0);

    run_system(&mut world, wrap_system);

    assert!(approx_eq(world.get::<MapPosition>(left).unwrap().pos.x, 670.0));
    assert!(approx_eq(world.get::<MapPosition>(right).unwrap().pos.x, -30.0));
    assert!(approx_eq(world.get::<MapPosition>(inside).unwrap().pos.x, -30.0));
}

#[test]
fn dragged_horses_neither_move_nor_wrap() {
    let mut world = make_world(1.0);
    let a = add_horse(&mut world, kind(1), -100.0, 200.0, -40.0);
    world.entity_mut(a).insert(Dragged {
        grab_offset: Vector2::new(0.0, 0.0),
    });

    run_system(&mut world, movement_system);
    run_system(&mut world, wrap_system);

    assert!(approx_eq(world.get::<MapPosition>(a).unwrap().pos.x, -100.0));
}

#[test]
fn depth_follows_the_bottom_of_the_sprite() {
    let mut world = make_world(0.0);
    let a = add_horse(&mut world, kind(1), 100.0, 150.0, 40.0);
    let b = add_horse(&mut world, kind(1), 100.0, 250.0, 40.0);
    world.entity_mut(b).insert(Dragged {
        grab_offset: Vector2::new(0.0, 0.0),
    });
    world.get_mut::<MapPosition>(a).unwrap().pos.y = 200.0;

    run_system(&mut world, depth_system);

    assert_eq!(*world.get::<ZIndex>(a).unwrap(), ZIndex(216));
    assert_eq!(*world.get::<ZIndex>(b).unwrap(), ZIndex(DRAGGED_Z));
}

// ==================== TURNING AROUND ====================

#[test]
fn turning_around_runs_both_halves_in_order() {
    let mut world = make_world(0.15);
    let a = add_horse(&mut world, kind(1), 300.0, 200.0, -40.0);
    assert!(!world.get::<Sprite>(a).unwrap().flip_h);

    // Now heading right while still facing left.
    world.get_mut::<RigidBody>(a).unwrap().velocity.x = 40.0;
    run_system(&mut world, facing_system);
    assert!(matches!(
        world.get::<Horse>(a).unwrap().flip,
        FlipState::FlippingOut { .. }
    ));
    assert!(world.get::<TweenScale>(a).is_some());
    assert!(!world.get::<Sprite>(a).unwrap().flip_h);

    run_system(&mut world, tween_scale_system);
    assert_eq!(world.get::<Horse>(a).unwrap().flip, FlipState::FlippingIn);
    assert!(world.get::<Sprite>(a).unwrap().flip_h);
    assert!(approx_eq(world.get::<Scale>(a).unwrap().scale.x, 0.0));

    // No new turn starts while one is in progress.
    world.get_mut::<RigidBody>(a).unwrap().velocity.x = -40.0;
    run_system(&mut world, facing_system);
    assert_eq!(world.get::<Horse>(a).unwrap().flip, FlipState::FlippingIn);

    run_system(&mut world, tween_scale_system);
    assert_eq!(world.get::<Horse>(a).unwrap().flip, FlipState::Idle);
    assert!(approx_eq(world.get::<Scale>(a).unwrap().scale.x, 1.0));
    assert!(world.get::<TweenScale>(a).is_none());
}

#[test]
fn matching_heading_does_not_turn() {
    let mut world = make_world(0.15);
    let a = add_horse(&mut world, kind(1), 300.0, 200.0, 40.0);
    run_system(&mut world, facing_system);
    assert_eq!(world.get::<Horse>(a).unwrap().flip, FlipState::Idle);
    assert!(world.get::<TweenScale>(a).is_none());
}
