//! Game setup and state enter hooks.
//!
//! - [`setup`] runs once in `Setup`: generates the horse colour variants,
//!   uploads every sheet to the GPU and moves on to `Playing`.
//! - [`enter_play`] builds the play field: breeder, stable, spawner and the
//!   static background and stable entities.
//! - [`export_variants`] is the headless path used by `--export-variants`.

use std::path::{Path, PathBuf};

use bevy_ecs::prelude::*;
use image::RgbaImage;
use log::{error, info, warn};
use raylib::ffi;
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::components::stablezone::StableZone;
use crate::components::zindex::ZIndex;
use crate::palette::export::write_sheets;
use crate::palette::remap::{GenerationReport, VARIANT_PREFIX, generate_variants};
use crate::palette::sheet::{FrameRect, SpriteSheet, WHOLE_IMAGE_FRAME};
use crate::palette::{RemapError, load_rgba};
use crate::resources::animationstore::AnimationStore;
use crate::resources::breeder::BreederState;
use crate::resources::catalog::HorseCatalog;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::pasture::Pasture;
use crate::resources::pointer::PointerState;
use crate::resources::sheetstore::SheetStore;
use crate::resources::spawner::HorseSpawner;
use crate::resources::stable::{STABLE_CAPACITY, Stable};
use crate::resources::texturestore::TextureStore;
use crate::systems::horse::depth_of;

pub const BASE_SHEET_KEY: &str = "horse-base";
pub const BACKGROUND_KEY: &str = "background";
pub const STABLE_KEY: &str = "stable";
/// Stable sheet frames, one per stable state.
const STABLE_FRAMES: u32 = STABLE_CAPACITY as u32 + 1;
const BACKGROUND_Z: i32 = -1000;

/// Load the base sheet and palette and generate every colour variant.
///
/// The base sheet is registered as [`BASE_SHEET_KEY`]. Any load or palette
/// error aborts before a variant is registered.
pub fn build_sheets(
    config: &GameConfig,
    sheets: &mut SheetStore,
    animations: &mut AnimationStore,
) -> Result<GenerationReport, RemapError> {
    let base_image = load_rgba(BASE_SHEET_KEY, &config.assets.base_sheet)?;
    let palette_image = load_rgba("palette", &config.assets.palette)?;
    let base = SpriteSheet::from_grid(
        base_image,
        config.assets.frame_width,
        config.assets.frame_height,
    );
    let report = generate_variants(
        &base,
        &palette_image,
        config.palette,
        config.run_fps,
        sheets,
        animations,
    )?;
    sheets.insert(BASE_SHEET_KEY, base);
    Ok(report)
}

/// Run the remapper without a window and write the variants as PNG files.
pub fn export_variants(config: &GameConfig, dir: &Path) -> Result<Vec<PathBuf>, String> {
    let mut sheets = SheetStore::new();
    let mut animations = AnimationStore::new();
    let report =
        build_sheets(config, &mut sheets, &mut animations).map_err(|e| e.to_string())?;
    for (key, e) in &report.failed {
        warn!("{key} was not generated: {e}");
    }
    write_sheets(&sheets, VARIANT_PREFIX, dir)
}

/// Copy an RGBA image into a GPU texture.
///
/// The pixel buffer is handed to raylib as one R8G8B8A8 block; raylib owns
/// (and frees) the copy.
fn upload_rgba(
    rl: &mut RaylibHandle,
    th: &RaylibThread,
    image: &RgbaImage,
) -> Result<Texture2D, String> {
    let bytes = image.as_raw();
    let img = unsafe {
        let data = ffi::MemAlloc(bytes.len() as u32);
        if data.is_null() {
            return Err(format!("Failed to allocate {} bytes for texture", bytes.len()));
        }
        std::ptr::copy_nonoverlapping(bytes.as_ptr(), data as *mut u8, bytes.len());
        Image::from_raw(ffi::Image {
            data,
            width: image.width() as i32,
            height: image.height() as i32,
            mipmaps: 1,
            format: ffi::PixelFormat::PIXELFORMAT_UNCOMPRESSED_R8G8B8A8 as i32,
        })
    };
    rl.load_texture_from_image(th, &img)
        .map_err(|e| format!("Failed to upload texture: {}", e))
}

/// Load a static picture into the sheet store, split into `frames` columns.
fn load_static_sheet(
    sheets: &mut SheetStore,
    key: &str,
    path: &Path,
    frames: u32,
) -> Result<(), RemapError> {
    let image = load_rgba(key, path)?;
    let frame_width = (image.width() / frames.max(1)).max(1);
    let frame_height = image.height().max(1);
    sheets.insert(key, SpriteSheet::from_grid(image, frame_width, frame_height));
    Ok(())
}

pub fn setup(
    mut commands: Commands,
    mut next_state: ResMut<NextGameState>,
    config: Res<GameConfig>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
) {
    let mut sheets = SheetStore::new();
    let mut animations = AnimationStore::new();

    match build_sheets(&config, &mut sheets, &mut animations) {
        Ok(report) if report.is_clean() => {
            info!("All {} horse colours are ready", report.generated.len() + report.skipped.len());
        }
        Ok(report) => {
            for (key, e) in &report.failed {
                warn!("{key} will not be available: {e}");
            }
        }
        Err(e) => {
            error!("Cannot generate horse sheets: {e}");
            next_state.set(GameStates::Quitting);
            return;
        }
    }

    for (key, path, frames) in [
        (BACKGROUND_KEY, &config.assets.background, 1),
        (STABLE_KEY, &config.assets.stable, STABLE_FRAMES),
    ] {
        if let Err(e) = load_static_sheet(&mut sheets, key, path, frames) {
            warn!("{e}; drawing a placeholder instead");
        }
    }

    let mut textures = TextureStore::new();
    for key in sheets.keys() {
        let Some(sheet) = sheets.get(key) else {
            continue;
        };
        match upload_rgba(&mut rl, &th, &sheet.image) {
            Ok(texture) => textures.insert(key, texture),
            Err(e) => warn!("Skipping texture {key}: {e}"),
        }
    }
    info!("Uploaded {} textures", textures.map.len());

    let catalog = match &config.assets.catalog {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))
            .and_then(|json| HorseCatalog::from_json(&json))
            .unwrap_or_else(|e| {
                warn!("{e}; using the built-in catalog");
                HorseCatalog::default()
            }),
        None => HorseCatalog::default(),
    };

    commands.insert_resource(Pasture::new(
        config.render_width as f32,
        config.render_height as f32,
        Vector2::new(
            config.assets.frame_width as f32,
            config.assets.frame_height as f32,
        ),
    ));
    commands.insert_resource(catalog);
    commands.insert_resource(sheets);
    commands.insert_resource(animations);
    commands.insert_resource(textures);

    next_state.set(GameStates::Playing);
}

/// Sprite covering the whole sheet's first frame, or a placeholder of `size`.
fn static_sprite(sheets: &SheetStore, key: &str, first_frame: &str, size: Vector2) -> Sprite {
    let frame = sheets
        .get(key)
        .and_then(|sheet| sheet.frames.get(first_frame))
        .unwrap_or(FrameRect::new(0, 0, size.x as u32, size.y as u32));
    Sprite::centered(key, frame)
}

pub fn enter_play(
    mut commands: Commands,
    config: Res<GameConfig>,
    catalog: Res<HorseCatalog>,
    sheets: Res<SheetStore>,
    textures: Res<TextureStore>,
    pasture: Res<Pasture>,
) {
    let mut spawner =
        HorseSpawner::new(config.spawn_interval, config.spawn_cap, config.spawn_speed);
    if let Err(e) = catalog.validate(|key| sheets.contains(key) && textures.contains(key)) {
        error!("Horse catalog does not match the generated sheets: {e}; spawning disabled");
        spawner.enabled = false;
    }

    commands.insert_resource(BreederState::new(
        config.breeder_name.clone(),
        config.breeder_level,
    ));
    commands.insert_resource(Stable::new());
    commands.insert_resource(PointerState::default());
    commands.insert_resource(spawner);

    let field = Vector2::new(pasture.width, pasture.height);
    commands.spawn((
        Group("background"),
        MapPosition::new(pasture.width * 0.5, pasture.height * 0.5),
        static_sprite(&sheets, BACKGROUND_KEY, WHOLE_IMAGE_FRAME, field),
        ZIndex(BACKGROUND_Z),
    ));

    let stable_sprite = static_sprite(&sheets, STABLE_KEY, "0", pasture.stable_size);
    let bottom = pasture.stable_pos.y - stable_sprite.origin.y + stable_sprite.height;
    commands.spawn((
        Group("stable"),
        StableZone,
        MapPosition::new(pasture.stable_pos.x, pasture.stable_pos.y),
        BoxCollider::centered(pasture.stable_size.x, pasture.stable_size.y),
        stable_sprite,
        depth_of(bottom),
    ));

    info!(
        "{} enters the pasture at level {}",
        config.breeder_name, config.breeder_level
    );
}

pub fn quit_game() {
    info!("Quitting");
}
