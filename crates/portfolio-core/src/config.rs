//! Processing settings for the avatar and the project thumbnails.
//!
//! Both structs deserialize from partial input, so a caller can override a
//! single field and keep the defaults for the rest.

use serde::{Deserialize, Serialize};

use crate::decode::FilterType;

/// Default avatar edge length in pixels.
pub const DEFAULT_AVATAR_SIZE: u32 = 250;

/// Largest accepted avatar edge length in pixels.
///
/// Keeps every `size x size` RGBA buffer well inside a 32-bit `usize`.
pub const MAX_AVATAR_SIZE: u32 = 4096;

/// Largest project placeholder edge; larger configured values are clamped.
pub const MAX_PLACEHOLDER_DIMENSION: u32 = 4096;

/// Mid-gray, fully opaque.
pub const DEFAULT_FALLBACK_COLOR: [u8; 4] = [100, 100, 100, 255];

/// Settings for the circular avatar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarConfig {
    /// Output edge length in pixels (1 to [`MAX_AVATAR_SIZE`])
    pub size: u32,
    /// Filter used to scale the cropped square
    pub filter: FilterType,
    /// Colour of the placeholder used when the source cannot be decoded
    pub fallback_color: [u8; 4],
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_AVATAR_SIZE,
            filter: FilterType::default(),
            fallback_color: DEFAULT_FALLBACK_COLOR,
        }
    }
}

impl AvatarConfig {
    /// Default settings with a different output size.
    pub fn with_size(size: u32) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }
}

/// Settings for project card thumbnails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectImageConfig {
    /// Placeholder width in pixels
    pub width: u32,
    /// Placeholder height in pixels
    pub height: u32,
    /// Placeholder colour (`#333333` by default)
    pub placeholder_color: [u8; 3],
}

impl Default for ProjectImageConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 400,
            placeholder_color: [0x33, 0x33, 0x33],
        }
    }
}
