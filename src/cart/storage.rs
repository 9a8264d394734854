//! Persistence backends for [`super::CartStore`].

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::cart::CartResult;
use crate::domain::cart::CartLineItem;

/// Where a cart is kept between sessions.
pub trait CartStorage {
    /// Previously saved lines, `None` when nothing was stored yet.
    fn load(&self) -> CartResult<Option<Vec<CartLineItem>>>;
    /// Replace the stored lines with `items`.
    fn save(&mut self, items: &[CartLineItem]) -> CartResult<()>;
}

/// Keeps the serialized cart in memory; mirrors a browser storage slot.
#[derive(Debug, Default, Clone)]
pub struct MemoryCartStorage {
    blob: Option<String>,
}

impl MemoryCartStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the slot with a raw JSON blob, as an older client would have left it.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Some(blob.into()),
        }
    }

    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }
}

impl CartStorage for MemoryCartStorage {
    fn load(&self) -> CartResult<Option<Vec<CartLineItem>>> {
        match &self.blob {
            Some(blob) => Ok(Some(serde_json::from_str(blob)?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, items: &[CartLineItem]) -> CartResult<()> {
        self.blob = Some(serde_json::to_string(items)?);
        Ok(())
    }
}

/// Stores the cart as a JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileCartStorage {
    path: PathBuf,
}

impl JsonFileCartStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStorage for JsonFileCartStorage {
    fn load(&self) -> CartResult<Option<Vec<CartLineItem>>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(serde_json::from_str(&contents)?)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&mut self, items: &[CartLineItem]) -> CartResult<()> {
        let contents = serde_json::to_string_pretty(items)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
