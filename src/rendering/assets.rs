//! # Asset Cache
//!
//! Textures loaded once at startup and looked up by logical name.

use crate::{MatchSoundsError, MatchSoundsResult};
use log::{debug, info};
use macroquad::prelude::*;
use std::collections::HashMap;
use std::path::PathBuf;

/// Texture cache keyed by logical asset name (e.g. `"img/background.png"`).
pub struct AssetCache {
    root: PathBuf,
    textures: HashMap<String, Texture2D>,
}

impl Default for AssetCache {
    fn default() -> Self {
        Self::new("assets")
    }
}

impl AssetCache {
    /// Creates an empty cache resolving names relative to `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            textures: HashMap::new(),
        }
    }

    /// Loads the texture `name` from disk. Already loaded names are skipped.
    pub async fn load_texture(&mut self, name: &str) -> MatchSoundsResult<()> {
        if self.textures.contains_key(name) {
            debug!("Texture {} already loaded", name);
            return Ok(());
        }

        let path = self.root.join(name);
        let texture = load_texture(&path.to_string_lossy())
            .await
            .map_err(|e| MatchSoundsError::AssetLoad {
                name: name.to_string(),
                reason: e.to_string(),
            })?;
        texture.set_filter(FilterMode::Linear);

        info!("Loaded texture {} ({}x{})", name, texture.width(), texture.height());
        self.textures.insert(name.to_string(), texture);
        Ok(())
    }

    /// Returns the texture loaded under `name`.
    pub fn texture(&self, name: &str) -> MatchSoundsResult<&Texture2D> {
        self.textures
            .get(name)
            .ok_or_else(|| MatchSoundsError::AssetMissing(name.to_string()))
    }

    /// Whether `name` has been loaded.
    pub fn is_loaded(&self, name: &str) -> bool {
        self.textures.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_texture_is_error() {
        let cache = AssetCache::new("assets");
        assert!(!cache.is_loaded("img/background.png"));
        assert!(matches!(
            cache.texture("img/background.png"),
            Err(MatchSoundsError::AssetMissing(name)) if name == "img/background.png"
        ));
    }
}
