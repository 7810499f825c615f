use provmeta_infra::{JsonLayout, WriteMode};
use serde::{Deserialize, Serialize};

/// How a record is encoded and written.
///
/// Deserializable so host pipelines can embed it in their own config files:
///
/// ```
/// # use provmeta::{PersistConfig, JsonLayout, WriteMode};
/// let cfg: PersistConfig = serde_json::from_str(r#"{"layout": "pretty"}"#).unwrap();
/// assert_eq!(cfg.layout, JsonLayout::Pretty);
/// assert_eq!(cfg.write_mode, WriteMode::Truncate);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PersistConfig {
    pub layout: JsonLayout,
    pub write_mode: WriteMode,
}

impl PersistConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_layout(mut self, layout: JsonLayout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }
}
