use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

pub const TRANSPARENT_TOKEN: &str = "transparent";

/// Opaque color token as handed over by the palette (usually `#rrggbb`).
/// The engine only ever compares tokens; `to_rgba` exists for the exporter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(Arc<str>);

/// One cell of a layer. `None` is what the eraser writes.
pub type Pixel = Option<Color>;

impl Color {
    pub fn new(token: impl AsRef<str>) -> Self {
        Self(Arc::from(token.as_ref()))
    }

    pub fn transparent() -> Self {
        Self::new(TRANSPARENT_TOKEN)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_transparent(&self) -> bool {
        &*self.0 == TRANSPARENT_TOKEN
    }

    pub fn to_rgba(&self) -> Option<[u8; 4]> {
        if self.is_transparent() {
            return Some([0, 0, 0, 0]);
        }
        let hex = self.0.trim().strip_prefix('#')?;
        if !hex.is_ascii() {
            return None;
        }
        let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            3 => Some([nibble(0)?, nibble(1)?, nibble(2)?, 255]),
            4 => Some([nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?]),
            6 => Some([byte(0)?, byte(2)?, byte(4)?, 255]),
            8 => Some([byte(0)?, byte(2)?, byte(4)?, byte(6)?]),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

/// True when the cell carries paint that hides the layers below it.
#[inline]
pub fn is_painted(pixel: &Pixel) -> bool {
    matches!(pixel, Some(color) if !color.is_transparent())
}
