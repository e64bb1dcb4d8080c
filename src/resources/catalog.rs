//! Horse types and the level catalog.
//!
//! Every horse belongs to a [`HorseType`]: the sprite-sheet it is drawn with
//! and its breeding level. The [`HorseCatalog`] maps each level to exactly one
//! type and is checked against the generated sheets before play starts.

use std::collections::BTreeMap;

use bevy_ecs::prelude::Resource;
use log::warn;
use serde::Deserialize;
use thiserror::Error;

use crate::palette::remap::variant_key;

/// Highest level of the built-in catalog, one per generated colour column.
pub const DEFAULT_MAX_LEVEL: u32 = 10;

/// Immutable description of a kind of horse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub struct HorseType {
    /// Palette column of the sheet, i.e. `horse-color-{sheet}`.
    pub sheet: u32,
    pub level: u32,
}

impl HorseType {
    pub fn tex_key(&self) -> String {
        variant_key(self.sheet)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("horse catalog is empty")]
    Empty,
    #[error("horse catalog has no entry for level {0}")]
    MissingLevel(u32),
    #[error("horse type of level {level} uses sheet {sheet} which was never generated")]
    MissingSheet { level: u32, sheet: u32 },
}

/// Level → type map.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct HorseCatalog {
    types: BTreeMap<u32, HorseType>,
}

impl Default for HorseCatalog {
    /// Levels `1..=10`, each drawn with the sheet of the same number.
    fn default() -> Self {
        Self::from_types((1..=DEFAULT_MAX_LEVEL).map(|level| HorseType {
            sheet: level,
            level,
        }))
    }
}

impl HorseCatalog {
    /// Build a catalog. A later type with the same level replaces an earlier one.
    pub fn from_types(types: impl IntoIterator<Item = HorseType>) -> Self {
        Self {
            types: types.into_iter().map(|t| (t.level, t)).collect(),
        }
    }

    /// Parse a JSON list of horse types.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let types: Vec<HorseType> =
            serde_json::from_str(json).map_err(|e| format!("Invalid horse catalog: {}", e))?;
        if types.is_empty() {
            return Err("Invalid horse catalog: no horse types".to_string());
        }
        Ok(Self::from_types(types))
    }

    pub fn get(&self, level: u32) -> Option<HorseType> {
        self.types.get(&level).copied()
    }

    pub fn lowest(&self) -> Option<HorseType> {
        self.types.values().next().copied()
    }

    pub fn max_level(&self) -> u32 {
        self.types.keys().next_back().copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HorseType> {
        self.types.values()
    }

    /// Type of the foal of two horses whose levels add up to `level`.
    ///
    /// Falls back to the lowest level when the catalog has no exact entry.
    /// Such a gap usually means the catalog is too short for the breeder's
    /// progress, so it is logged.
    pub fn resolve_bred(&self, level: u32) -> Option<HorseType> {
        if let Some(kind) = self.get(level) {
            return Some(kind);
        }
        let fallback = self.lowest()?;
        warn!(
            "No horse type for bred level {}, falling back to level {}",
            level, fallback.level
        );
        Some(fallback)
    }

    /// Check that levels `1..=max_level` are contiguous and that every sheet exists.
    pub fn validate(&self, has_sheet: impl Fn(&str) -> bool) -> Result<(), CatalogError> {
        if self.is_empty() {
            return Err(CatalogError::Empty);
        }
        for level in 1..=self.max_level() {
            let kind = self.get(level).ok_or(CatalogError::MissingLevel(level))?;
            if !has_sheet(&kind.tex_key()) {
                return Err(CatalogError::MissingSheet {
                    level,
                    sheet: kind.sheet,
                });
            }
        }
        Ok(())
    }
}
