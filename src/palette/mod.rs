//! Palette remapping of the base horse sprite-sheet.
//!
//! The palette reference image is a grid of colour swatches: each row is one
//! body region of the horse, each column one colour variant. Column 0 holds
//! the colours that actually appear in the base sheet. For every other column
//! the remapper produces a recoloured copy of the base sheet, named
//! `horse-color-{column}`, and registers its `run` and `walk` animations.
//!
//! Submodules:
//! - [`sheet`] – sprite-sheet images and named frame tables
//! - [`remap`] – pixel replacement and variant generation
//! - [`export`] – headless PNG export of generated sheets
//! - [`error`] – [`RemapError`]

pub mod error;
pub mod export;
pub mod remap;
pub mod sheet;

use std::path::Path;

use image::{Rgba, RgbaImage};

pub use error::RemapError;

/// Opaque RGB colour used for exact matching. Alpha is never compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn from_pixel(pixel: &Rgba<u8>) -> Self {
        Self::new(pixel[0], pixel[1], pixel[2])
    }

    /// Pixel with this colour and the given alpha.
    pub fn with_alpha(self, a: u8) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, a])
    }
}

/// Shape of the swatch grid in the palette image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteLayout {
    /// One row per body region (source colour).
    pub rows: u32,
    /// Column 0 is the base reference; the rest are variants.
    pub columns: u32,
}

impl Default for PaletteLayout {
    fn default() -> Self {
        Self {
            rows: 3,
            columns: 11,
        }
    }
}

/// Colours sampled at the centre of every swatch, indexed by (row, column).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteGrid {
    layout: PaletteLayout,
    colors: Vec<Rgb>,
}

impl PaletteGrid {
    /// Sample one colour per swatch from `image`.
    ///
    /// Each swatch is `width / columns` by `height / rows` pixels (fractional
    /// sizes allowed); the sampled pixel is the floor of the swatch centre.
    pub fn sample(image: &RgbaImage, layout: PaletteLayout) -> Result<Self, RemapError> {
        let (width, height) = image.dimensions();
        let buffer_error = || RemapError::PaletteBuffer {
            width,
            height,
            rows: layout.rows,
            columns: layout.columns,
        };
        if layout.rows == 0 || layout.columns == 0 {
            return Err(buffer_error());
        }
        if width < layout.columns || height < layout.rows {
            return Err(buffer_error());
        }

        let swatch_w = width as f32 / layout.columns as f32;
        let swatch_h = height as f32 / layout.rows as f32;
        let mut colors = Vec::with_capacity((layout.rows * layout.columns) as usize);
        for row in 0..layout.rows {
            for col in 0..layout.columns {
                let x = (col as f32 * swatch_w + swatch_w / 2.0).floor() as u32;
                let y = (row as f32 * swatch_h + swatch_h / 2.0).floor() as u32;
                let pixel = image.get_pixel_checked(x, y).ok_or_else(buffer_error)?;
                colors.push(Rgb::from_pixel(pixel));
            }
        }
        Ok(Self { layout, colors })
    }

    pub fn layout(&self) -> PaletteLayout {
        self.layout
    }

    pub fn color(&self, row: u32, column: u32) -> Option<Rgb> {
        if row >= self.layout.rows || column >= self.layout.columns {
            return None;
        }
        self.colors
            .get((row * self.layout.columns + column) as usize)
            .copied()
    }

    /// Colours of one column, top to bottom.
    pub fn column(&self, column: u32) -> Vec<Rgb> {
        (0..self.layout.rows)
            .filter_map(|row| self.color(row, column))
            .collect()
    }

    /// The colours present in the base sheet (column 0).
    pub fn source_colors(&self) -> Vec<Rgb> {
        self.column(0)
    }
}

/// Load an image from disk as RGBA8.
///
/// `key` names the asset in diagnostics (e.g. `"palette"`).
pub fn load_rgba(key: &str, path: impl AsRef<Path>) -> Result<RgbaImage, RemapError> {
    let path = path.as_ref();
    image::open(path)
        .map(|img| img.to_rgba8())
        .map_err(|source| RemapError::AssetLoad {
            key: key.to_string(),
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 4x2 swatch grid, each swatch 10x10, colour = (row*10, col*10, 7).
    fn grid_image(rows: u32, columns: u32, swatch: u32) -> RgbaImage {
        RgbaImage::from_fn(columns * swatch, rows * swatch, |x, y| {
            let col = x / swatch;
            let row = y / swatch;
            Rgba([(row * 10) as u8, (col * 10) as u8, 7, 255])
        })
    }

    #[test]
    fn test_sample_reads_swatch_centres() {
        let layout = PaletteLayout {
            rows: 2,
            columns: 4,
        };
        let grid = PaletteGrid::sample(&grid_image(2, 4, 10), layout).unwrap();
        assert_eq!(grid.color(0, 0), Some(Rgb::new(0, 0, 7)));
        assert_eq!(grid.color(1, 3), Some(Rgb::new(10, 30, 7)));
        assert_eq!(grid.color(2, 0), None);
        assert_eq!(grid.color(0, 4), None);
    }

    #[test]
    fn test_sample_ignores_swatch_borders() {
        // Each swatch has a 1px black border; the centre holds the real colour.
        let img = RgbaImage::from_fn(30, 10, |x, y| {
            if x % 10 == 0 || y == 0 {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([200, (x / 10) as u8, 0, 255])
            }
        });
        let grid = PaletteGrid::sample(
            &img,
            PaletteLayout {
                rows: 1,
                columns: 3,
            },
        )
        .unwrap();
        assert_eq!(grid.column(0), vec![Rgb::new(200, 0, 0)]);
        assert_eq!(grid.column(2), vec![Rgb::new(200, 2, 0)]);
    }

    #[test]
    fn test_sample_fractional_swatch_size() {
        // 11 columns over 100px: swatches are ~9.09px wide.
        let img = RgbaImage::from_fn(100, 3, |x, _| {
            let col = (x as f32 / (100.0 / 11.0)).floor() as u8;
            Rgba([col, 0, 0, 255])
        });
        let grid = PaletteGrid::sample(
            &img,
            PaletteLayout {
                rows: 1,
                columns: 11,
            },
        )
        .unwrap();
        for col in 0..11 {
            assert_eq!(grid.color(0, col), Some(Rgb::new(col as u8, 0, 0)));
        }
    }

    #[test]
    fn test_sample_rejects_empty_layout() {
        let err = PaletteGrid::sample(
            &grid_image(1, 1, 4),
            PaletteLayout {
                rows: 0,
                columns: 3,
            },
        )
        .unwrap_err();
        assert!(matches!(err, RemapError::PaletteBuffer { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_sample_rejects_image_smaller_than_grid() {
        let err = PaletteGrid::sample(&RgbaImage::new(5, 2), PaletteLayout::default()).unwrap_err();
        assert!(matches!(err, RemapError::PaletteBuffer { .. }));
    }

    #[test]
    fn test_source_colors_is_column_zero() {
        let layout = PaletteLayout {
            rows: 3,
            columns: 2,
        };
        let grid = PaletteGrid::sample(&grid_image(3, 2, 6), layout).unwrap();
        assert_eq!(
            grid.source_colors(),
            vec![Rgb::new(0, 0, 7), Rgb::new(10, 0, 7), Rgb::new(20, 0, 7)]
        );
    }

    #[test]
    fn test_load_rgba_missing_file() {
        let err = load_rgba("palette", "/definitely/not/here.png").unwrap_err();
        match err {
            RemapError::AssetLoad { key, .. } => assert_eq!(key, "palette"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
