use provmeta_ports::document::{DocumentEncoder, MetadataDocument};
use provmeta_shared_kernel::Result;
use serde::{Deserialize, Serialize};

use super::SpacedFormatter;

/// Textual layout of the JSON document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JsonLayout {
    /// One line, `", "` and `": "` separators, non-ASCII escaped.
    #[default]
    Spaced,
    /// One line, no whitespace.
    Compact,
    /// Two-space indented.
    Pretty,
}

/// JSON adapter implementing the `DocumentEncoder` port.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonEncoder {
    layout: JsonLayout,
}

impl JsonEncoder {
    pub fn new(layout: JsonLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> JsonLayout {
        self.layout
    }
}

impl DocumentEncoder for JsonEncoder {
    fn format_name(&self) -> &'static str {
        "JSON"
    }

    fn encode(&self, document: &MetadataDocument) -> Result<Vec<u8>> {
        let bytes = match self.layout {
            JsonLayout::Spaced => {
                let mut buf = Vec::with_capacity(256);
                let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
                document.serialize(&mut ser)?;
                buf
            }
            JsonLayout::Compact => serde_json::to_vec(document)?,
            JsonLayout::Pretty => serde_json::to_vec_pretty(document)?,
        };
        Ok(bytes)
    }
}
