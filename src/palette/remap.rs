//! Pixel replacement and colour variant generation.
//!
//! # Algorithm
//!
//! 1. Sample the palette grid ([`PaletteGrid::sample`]). Column 0 yields the
//!    source colours found in the base sheet.
//! 2. For each destination column `c` in `1..columns`:
//!    - skip if `horse-color-{c}` is already registered,
//!    - copy the base pixels and, for each source colour `i` in row order,
//!      replace every pixel whose RGB equals source `i` with swatch `(i, c)`,
//!    - register the sheet with the base frame table (minus the whole-image
//!      frame) and its `-run` / `-walk` animations.
//!
//! Matching is exact. Anti-aliased pixels that differ from every source
//! colour are left as they are.

use std::ops::RangeInclusive;
use std::sync::Arc;

use image::RgbaImage;
use log::{debug, error, info};

use super::sheet::{FrameTable, SpriteSheet};
use super::{PaletteGrid, PaletteLayout, RemapError, Rgb};
use crate::resources::animationstore::{AnimationResource, AnimationStore};
use crate::resources::sheetstore::SheetStore;

/// Prefix of every generated sheet key.
pub const VARIANT_PREFIX: &str = "horse-color-";
/// Frames of the `run` animation.
pub const RUN_FRAMES: RangeInclusive<usize> = 0..=5;
/// Frames of the `walk` animation.
pub const WALK_FRAMES: RangeInclusive<usize> = 8..=15;
/// Walking plays this many frames per second slower than running.
pub const WALK_FPS_OFFSET: f32 = 3.0;
/// Default running frame rate.
pub const DEFAULT_RUN_FPS: f32 = 12.0;

/// Texture key of the variant generated from palette column `column`.
pub fn variant_key(column: u32) -> String {
    format!("{VARIANT_PREFIX}{column}")
}

pub fn run_animation_key(tex_key: &str) -> String {
    format!("{tex_key}-run")
}

pub fn walk_animation_key(tex_key: &str) -> String {
    format!("{tex_key}-walk")
}

/// Outcome of one generation pass.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Keys generated during this pass.
    pub generated: Vec<String>,
    /// Keys that already existed and were left untouched.
    pub skipped: Vec<String>,
    /// Keys whose generation failed, with the reason.
    pub failed: Vec<(String, RemapError)>,
}

impl GenerationReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Copy `base` and replace colours pair-wise.
///
/// Pairs are applied in order, each one scanning the whole buffer, so a
/// pixel rewritten by an earlier pair can be matched again by a later one.
/// Alpha is kept as it was.
pub fn remap_pixels(
    base: &RgbaImage,
    sources: &[Rgb],
    targets: &[Rgb],
    asset: &str,
) -> Result<RgbaImage, RemapError> {
    let (width, height) = base.dimensions();
    let mut buffer = base.as_raw().clone();

    for (source, target) in sources.iter().zip(targets) {
        let mut replaced = 0usize;
        for px in buffer.chunks_exact_mut(4) {
            if px[0] == source.r && px[1] == source.g && px[2] == source.b {
                px.copy_from_slice(&target.with_alpha(px[3]).0);
                replaced += 1;
            }
        }
        debug!("{asset}: replaced {replaced} pixels of {source:?} with {target:?}");
    }

    RgbaImage::from_raw(width, height, buffer).ok_or_else(|| RemapError::BufferAccess {
        asset: asset.to_string(),
    })
}

/// Build a looped animation from a run of numbered frames.
fn frame_range_animation(
    tex_key: &str,
    frames: &FrameTable,
    range: RangeInclusive<usize>,
    fps: f32,
) -> Result<AnimationResource, RemapError> {
    let rects = range
        .map(|index| {
            let name = index.to_string();
            frames.get(&name).ok_or_else(|| RemapError::MissingFrame {
                asset: tex_key.to_string(),
                frame: name,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(AnimationResource {
        tex_key: Arc::from(tex_key),
        frames: rects,
        fps,
        looped: true,
    })
}

/// Register `run` and `walk` animations for `tex_key` over its frame table.
pub fn register_variant_animations(
    tex_key: &str,
    frames: &FrameTable,
    run_fps: f32,
    animations: &mut AnimationStore,
) -> Result<(), RemapError> {
    let run = frame_range_animation(tex_key, frames, RUN_FRAMES, run_fps)?;
    let walk = frame_range_animation(
        tex_key,
        frames,
        WALK_FRAMES,
        (run_fps - WALK_FPS_OFFSET).max(1.0),
    )?;
    animations.insert(run_animation_key(tex_key), run);
    animations.insert(walk_animation_key(tex_key), walk);
    Ok(())
}

/// Produce the recoloured sheet for one palette column.
fn build_variant(
    tex_key: &str,
    base: &SpriteSheet,
    sources: &[Rgb],
    palette: &PaletteGrid,
    column: u32,
    run_fps: f32,
    animations: &mut AnimationStore,
) -> Result<SpriteSheet, RemapError> {
    let targets = palette.column(column);
    let image = remap_pixels(&base.image, sources, &targets, tex_key)?;
    let frames = base.frames.derive_for(image.width(), image.height());
    register_variant_animations(tex_key, &frames, run_fps, animations)?;
    Ok(SpriteSheet { image, frames })
}

/// Generate every colour variant of `base` described by `palette_image`.
///
/// Fails as a whole only if the palette cannot be sampled. Per-variant
/// failures are logged and collected in the report; the other variants are
/// still generated. Keys already present in `sheets` are skipped without any
/// pixel work.
pub fn generate_variants(
    base: &SpriteSheet,
    palette_image: &RgbaImage,
    layout: PaletteLayout,
    run_fps: f32,
    sheets: &mut SheetStore,
    animations: &mut AnimationStore,
) -> Result<GenerationReport, RemapError> {
    let palette = PaletteGrid::sample(palette_image, layout)?;
    let sources = palette.source_colors();
    let mut report = GenerationReport::default();

    for column in 1..layout.columns {
        let tex_key = variant_key(column);
        if sheets.contains(&tex_key) {
            debug!("Texture {tex_key} already exists, skipping");
            report.skipped.push(tex_key);
            continue;
        }

        debug!("Processing column {column} for texture {tex_key}");
        match build_variant(
            &tex_key,
            base,
            &sources,
            &palette,
            column,
            run_fps,
            animations,
        ) {
            Ok(sheet) => {
                debug!(
                    "Added {} frames to texture {tex_key}",
                    sheet.frames.named_len()
                );
                sheets.insert(tex_key.clone(), sheet);
                report.generated.push(tex_key);
            }
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                error!("Failed to generate {tex_key}: {e}");
                report.failed.push((tex_key, e));
            }
        }
    }

    info!(
        "Finished generating recoloured horse sheets: {} generated, {} skipped, {} failed",
        report.generated.len(),
        report.skipped.len(),
        report.failed.len()
    );
    Ok(report)
}
