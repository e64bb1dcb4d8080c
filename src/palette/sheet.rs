//! Sprite-sheet images and their frame tables.
//!
//! A [`SpriteSheet`] is one RGBA image plus a [`FrameTable`] naming the
//! rectangular sub-regions used by animations. Sheets built from a fixed grid
//! name their frames `"0"`, `"1"`, ... in row-major order and also carry an
//! implicit whole-image frame under [`WHOLE_IMAGE_FRAME`].

use image::RgbaImage;

/// Name of the implicit frame covering the entire sheet.
pub const WHOLE_IMAGE_FRAME: &str = "__whole__";

/// Pixel rectangle inside a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl FrameRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A named frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub name: String,
    pub rect: FrameRect,
}

impl Frame {
    pub fn is_whole_image(&self) -> bool {
        self.name == WHOLE_IMAGE_FRAME
    }
}

/// Ordered table of named frames.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameTable {
    frames: Vec<Frame>,
}

impl FrameTable {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Build the table for a sheet cut into a regular grid of
    /// `frame_width` x `frame_height` cells. Partial cells at the right and
    /// bottom edges are ignored.
    pub fn from_grid(width: u32, height: u32, frame_width: u32, frame_height: u32) -> Self {
        let mut table = Self::new();
        table.add(WHOLE_IMAGE_FRAME, FrameRect::new(0, 0, width, height));
        if frame_width == 0 || frame_height == 0 {
            return table;
        }
        let columns = width / frame_width;
        let rows = height / frame_height;
        let mut index = 0;
        for row in 0..rows {
            for col in 0..columns {
                table.add(
                    index.to_string(),
                    FrameRect::new(col * frame_width, row * frame_height, frame_width, frame_height),
                );
                index += 1;
            }
        }
        table
    }

    /// Add a frame, replacing any existing frame with the same name.
    pub fn add(&mut self, name: impl Into<String>, rect: FrameRect) {
        let name = name.into();
        if let Some(existing) = self.frames.iter_mut().find(|f| f.name == name) {
            existing.rect = rect;
        } else {
            self.frames.push(Frame { name, rect });
        }
    }

    pub fn get(&self, name: impl AsRef<str>) -> Option<FrameRect> {
        let name = name.as_ref();
        self.frames.iter().find(|f| f.name == name).map(|f| f.rect)
    }

    pub fn contains(&self, name: impl AsRef<str>) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter()
    }

    /// All frames except the whole-image frame, in table order.
    pub fn named_frames(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter().filter(|f| !f.is_whole_image())
    }

    /// Number of frames, excluding the whole-image frame.
    pub fn named_len(&self) -> usize {
        self.named_frames().count()
    }

    /// Table for a new sheet of `width` x `height` carrying over every named
    /// frame of `self`. The whole-image frame is rebuilt for the new size.
    pub fn derive_for(&self, width: u32, height: u32) -> Self {
        let mut table = Self::new();
        table.add(WHOLE_IMAGE_FRAME, FrameRect::new(0, 0, width, height));
        for frame in self.named_frames() {
            table.add(frame.name.clone(), frame.rect);
        }
        table
    }
}

/// An RGBA sprite-sheet and its frame table.
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    pub image: RgbaImage,
    pub frames: FrameTable,
}

impl SpriteSheet {
    /// Wrap an image cut into a regular frame grid.
    pub fn from_grid(image: RgbaImage, frame_width: u32, frame_height: u32) -> Self {
        let frames = FrameTable::from_grid(image.width(), image.height(), frame_width, frame_height);
        Self { image, frames }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_grid_names_frames_row_major() {
        let table = FrameTable::from_grid(120, 66, 60, 33);
        assert_eq!(table.named_len(), 4);
        assert_eq!(table.get("0"), Some(FrameRect::new(0, 0, 60, 33)));
        assert_eq!(table.get("1"), Some(FrameRect::new(60, 0, 60, 33)));
        assert_eq!(table.get("2"), Some(FrameRect::new(0, 33, 60, 33)));
        assert_eq!(table.get("3"), Some(FrameRect::new(60, 33, 60, 33)));
    }

    #[test]
    fn test_from_grid_has_whole_image_frame() {
        let table = FrameTable::from_grid(120, 66, 60, 33);
        assert_eq!(
            table.get(WHOLE_IMAGE_FRAME),
            Some(FrameRect::new(0, 0, 120, 66))
        );
        assert!(table.named_frames().all(|f| !f.is_whole_image()));
    }

    #[test]
    fn test_from_grid_ignores_partial_cells() {
        let table = FrameTable::from_grid(130, 40, 60, 33);
        assert_eq!(table.named_len(), 2);
        assert!(!table.contains("2"));
    }

    #[test]
    fn test_from_grid_zero_frame_size() {
        let table = FrameTable::from_grid(130, 40, 0, 33);
        assert_eq!(table.named_len(), 0);
        assert!(table.contains(WHOLE_IMAGE_FRAME));
    }

    #[test]
    fn test_add_replaces_existing() {
        let mut table = FrameTable::new();
        table.add("a", FrameRect::new(0, 0, 1, 1));
        table.add("a", FrameRect::new(5, 5, 2, 2));
        assert_eq!(table.named_len(), 1);
        assert_eq!(table.get("a"), Some(FrameRect::new(5, 5, 2, 2)));
    }

    #[test]
    fn test_derive_for_keeps_named_frames() {
        let base = FrameTable::from_grid(120, 33, 60, 33);
        let derived = base.derive_for(120, 33);
        let base_named: Vec<_> = base.named_frames().cloned().collect();
        let derived_named: Vec<_> = derived.named_frames().cloned().collect();
        assert_eq!(base_named, derived_named);
    }
}
