use std::{
    cell::RefCell,
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::{
    curve::bezier::CubicBezierCurve,
    foundation::error::{EaseflowError, EaseflowResult},
};

/// Fixed key the user collection is stored under.
pub const STORAGE_KEY: &str = "easeflowCurves";

/// User curves keyed by name.
pub type CurveMap = BTreeMap<String, CubicBezierCurve>;

/// Backing storage for user-defined curves.
pub trait CurveStore {
    /// Stored collection; an empty map when nothing has been saved yet.
    fn load(&self) -> EaseflowResult<CurveMap>;
    fn save(&self, curves: &CurveMap) -> EaseflowResult<()>;
}

#[derive(serde::Serialize, serde::Deserialize)]
struct StoredCurves {
    #[serde(rename = "easeflowCurves", default)]
    curves: CurveMap,
}

fn decode(text: &str) -> EaseflowResult<CurveMap> {
    let doc: StoredCurves = serde_json::from_str(text)?;
    Ok(doc.curves)
}

fn encode(curves: &CurveMap) -> EaseflowResult<String> {
    let doc = StoredCurves {
        curves: curves.clone(),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// JSON document on disk: `{"easeflowCurves": {"name": [x1, y1, x2, y2]}}`.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CurveStore for JsonFileStore {
    fn load(&self) -> EaseflowResult<CurveMap> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no curve store yet");
            return Ok(CurveMap::new());
        }
        let text = std::fs::read_to_string(&self.path)
            .with_context(|| format!("read curve store '{}'", self.path.display()))?;
        let curves = decode(&text).map_err(|e| {
            EaseflowError::serde(format!("curve store '{}': {e}", self.path.display()))
        })?;
        tracing::debug!(count = curves.len(), "loaded user curves");
        Ok(curves)
    }

    fn save(&self, curves: &CurveMap) -> EaseflowResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create store dir '{}'", parent.display()))?;
        }
        std::fs::write(&self.path, encode(curves)?)
            .with_context(|| format!("write curve store '{}'", self.path.display()))?;
        tracing::debug!(count = curves.len(), path = %self.path.display(), "saved user curves");
        Ok(())
    }
}

/// Single in-process string slot holding the same JSON document as [`JsonFileStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with raw text, as if written by an earlier session.
    pub fn with_raw(text: impl Into<String>) -> Self {
        Self {
            slot: RefCell::new(Some(text.into())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl CurveStore for MemoryStore {
    fn load(&self) -> EaseflowResult<CurveMap> {
        match self.slot.borrow().as_deref() {
            Some(text) => decode(text),
            None => Ok(CurveMap::new()),
        }
    }

    fn save(&self, curves: &CurveMap) -> EaseflowResult<()> {
        *self.slot.borrow_mut() = Some(encode(curves)?);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/library/store.rs"]
mod tests;
