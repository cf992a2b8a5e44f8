use encoding_rs::{UTF_16LE, UTF_8};
use serde::Serialize;

/// The two encodings every dictionary is written in. Some DSL readers only
/// accept UTF-16, others prefer UTF-8.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputEncoding {
    Utf8,
    Utf16,
}

const UTF16LE_BOM: [u8; 2] = [0xFF, 0xFE];

impl OutputEncoding {
    pub const ALL: [OutputEncoding; 2] = [OutputEncoding::Utf8, OutputEncoding::Utf16];

    pub fn label(self) -> &'static str {
        match self {
            OutputEncoding::Utf8 => "utf8",
            OutputEncoding::Utf16 => "utf16",
        }
    }

    /// Output subdirectory, e.g. `dsl_utf16`.
    pub fn dir_name(self) -> String {
        format!("dsl_{}", self.label())
    }

    /// UTF-8 without a BOM; UTF-16 little-endian with a BOM.
    pub fn encode(self, text: &str) -> Vec<u8> {
        match self {
            OutputEncoding::Utf8 => {
                let (bytes, _, _) = UTF_8.encode(text);
                bytes.into_owned()
            }
            // encoding_rs never encodes into UTF-16 (its encoders fall back to UTF-8),
            // so build the code units directly.
            OutputEncoding::Utf16 => {
                let mut out = Vec::with_capacity(2 + text.len() * 2);
                out.extend_from_slice(&UTF16LE_BOM);
                for unit in text.encode_utf16() {
                    out.extend_from_slice(&unit.to_le_bytes());
                }
                out
            }
        }
    }

    /// Inverse of [`OutputEncoding::encode`]; `None` if the bytes are malformed.
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            OutputEncoding::Utf8 => UTF_8
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(|text| text.into_owned()),
            OutputEncoding::Utf16 => {
                let (text, had_errors) = UTF_16LE.decode_with_bom_removal(bytes);
                if had_errors {
                    None
                } else {
                    Some(text.into_owned())
                }
            }
        }
    }
}
