use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    curve::codec::{EXPORT_DECIMALS, ImportRange},
    foundation::error::{EaseflowError, EaseflowResult},
};

/// Tool settings, read from a JSON file. Every field is optional.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EaseflowConfig {
    /// Where user curves are kept. `None` means the tool's default location.
    pub store_path: Option<PathBuf>,
    pub import_range: ImportRange,
    /// Decimal places used when exporting curves as text.
    pub export_decimals: usize,
}

impl Default for EaseflowConfig {
    fn default() -> Self {
        Self {
            store_path: None,
            import_range: ImportRange::default(),
            export_decimals: EXPORT_DECIMALS,
        }
    }
}

impl EaseflowConfig {
    pub fn from_json_str(text: &str) -> EaseflowResult<Self> {
        let cfg: Self = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> EaseflowResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> EaseflowResult<()> {
        if self.export_decimals > 12 {
            return Err(EaseflowError::validation(format!(
                "export_decimals must be at most 12, got {}",
                self.export_decimals
            )));
        }
        Ok(())
    }
}
