//! Raw page-dictionary input types.
//!
//! These mirror the rendering engine's per-page output, using serde to
//! enforce the structural contract: a missing required field is a hard
//! validation error with a descriptive message. External short names are
//! mapped to model names here (`font` → `font_name`, `wmode` →
//! `writing_mode`, `number` → `block_number`, ...).

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::model::{BBox, Point};

/// One page: `{width, height, blocks}`.
#[derive(Debug, Deserialize)]
pub struct RawPage {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub blocks: Vec<Value>,
}

/// A text block before line building. `lines` entries stay raw so line
/// failures can be handled individually.
#[derive(Debug, Deserialize)]
pub struct RawTextBlock {
    #[serde(rename = "number")]
    pub block_number: u32,
    pub bbox: BBox,
    pub flags: i64,
    #[serde(default)]
    pub lines: Vec<Value>,
}

/// An image block with its embedded raster payload.
#[derive(Debug, Deserialize)]
pub struct RawImageBlock {
    #[serde(rename = "number")]
    pub block_number: u32,
    pub bbox: BBox,
    pub width: u32,
    pub height: u32,
    pub ext: String,
    #[serde(deserialize_with = "deserialize_bytes")]
    pub image: Vec<u8>,
    #[serde(default, deserialize_with = "deserialize_opt_bytes")]
    pub mask: Option<Vec<u8>>,
}

/// A line before span building.
#[derive(Debug, Deserialize)]
pub struct RawLine {
    #[serde(rename = "wmode")]
    pub writing_mode: i64,
    #[serde(default)]
    pub dir: Point,
    #[serde(default)]
    pub bbox: BBox,
    #[serde(default)]
    pub spans: Vec<Value>,
}

/// One font run.
#[derive(Debug, Deserialize)]
pub struct RawSpan {
    #[serde(rename = "font")]
    pub font_name: String,
    #[serde(rename = "size")]
    pub font_size: f64,
    #[serde(rename = "color")]
    pub font_color: i64,
    pub origin: Point,
    pub bbox: BBox,
    pub text: String,
    pub ascender: f64,
    pub descender: f64,
    pub flags: i64,
    #[serde(default)]
    pub chars: Vec<Value>,
}

/// Byte payloads arrive either as base64 strings (JSON dumps) or as
/// plain byte arrays (in-process dictionaries).
fn deserialize_bytes<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    use base64::Engine;
    use serde::de::Error as _;

    match Value::deserialize(deserializer)? {
        Value::String(s) => base64::engine::general_purpose::STANDARD
            .decode(s.as_bytes())
            .map_err(|e| D::Error::custom(format!("invalid base64 image data: {}", e))),
        Value::Array(values) => values
            .into_iter()
            .map(|v| {
                v.as_u64()
                    .filter(|&n| n <= u8::MAX as u64)
                    .map(|n| n as u8)
                    .ok_or_else(|| D::Error::custom("image byte array contains a non-byte value"))
            })
            .collect(),
        other => Err(D::Error::custom(format!(
            "expected base64 string or byte array, got {}",
            type_name(&other)
        ))),
    }
}

fn deserialize_opt_bytes<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
where
    D: Deserializer<'de>,
{
    use base64::Engine;
    use serde::de::Error as _;

    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => base64::engine::general_purpose::STANDARD
            .decode(s.as_bytes())
            .map(Some)
            .map_err(|e| D::Error::custom(format!("invalid base64 mask data: {}", e))),
        Value::Array(values) => values
            .into_iter()
            .map(|v| {
                v.as_u64()
                    .filter(|&n| n <= u8::MAX as u64)
                    .map(|n| n as u8)
                    .ok_or_else(|| D::Error::custom("mask byte array contains a non-byte value"))
            })
            .collect::<Result<Vec<u8>, _>>()
            .map(Some),
        other => Err(D::Error::custom(format!(
            "expected base64 string or byte array, got {}",
            type_name(&other)
        ))),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
