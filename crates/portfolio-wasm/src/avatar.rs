//! Circular avatar WASM bindings.
//!
//! # Functions
//!
//! - [`circular_avatar_png`] - Strict: fails on undecodable input
//! - [`render_avatar`] - Never fails on bad input; renders the gray placeholder
//! - [`render_avatar_with_config`] - Same, with a settings object
//! - [`placeholder_png`] - The placeholder on its own
//!
//! # Example
//!
//! ```typescript
//! import { render_avatar } from '@portfolio/wasm';
//!
//! const bytes = new Uint8Array(await (await fetch('profile_picture.jpg')).arrayBuffer());
//! const avatar = render_avatar(bytes, 250);
//! img.src = URL.createObjectURL(new Blob([avatar.png()], { type: 'image/png' }));
//! ```

use crate::types::{js_error, JsRenderedImage};
use portfolio_core::{
    create_circular_avatar_from_bytes, encode::encode_png_rgba, placeholder,
    render_avatar_from_bytes, AvatarConfig, DEFAULT_FALLBACK_COLOR,
};
use wasm_bindgen::prelude::*;

/// Build a circular avatar and return it as PNG bytes.
///
/// # Errors
///
/// Throws if `size` is zero or the bytes are not a decodable JPEG/PNG.
#[wasm_bindgen]
pub fn circular_avatar_png(bytes: &[u8], size: u32) -> Result<Vec<u8>, JsValue> {
    strict_png(bytes, size).map_err(js_error)
}

/// Build a circular avatar, falling back to the gray placeholder.
///
/// Only throws for a zero `size`. A placeholder is reported through
/// `console.warn` and the returned object's `fallback_reason`.
#[wasm_bindgen]
pub fn render_avatar(bytes: &[u8], size: u32) -> Result<JsRenderedImage, JsValue> {
    rendered(bytes, &AvatarConfig::with_size(size)).map_err(js_error)
}

/// Like [`render_avatar`], with a settings object.
///
/// Fields are optional: `{ size?: number, filter?: "nearest" | "bilinear" |
/// "bicubic" | "lanczos3", fallback_color?: [r, g, b, a] }`.
#[wasm_bindgen]
pub fn render_avatar_with_config(bytes: &[u8], config: JsValue) -> Result<JsRenderedImage, JsValue> {
    let config: AvatarConfig = if config.is_undefined() || config.is_null() {
        AvatarConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config).map_err(|e| js_error(e.to_string()))?
    };
    rendered(bytes, &config).map_err(js_error)
}

/// The solid mid-gray placeholder as PNG bytes.
///
/// Fails for a `size` of zero or above `MAX_AVATAR_SIZE`.
#[wasm_bindgen]
pub fn placeholder_png(size: u32) -> Result<Vec<u8>, JsValue> {
    placeholder_bytes(size).map_err(js_error)
}

fn strict_png(bytes: &[u8], size: u32) -> Result<Vec<u8>, String> {
    let image = create_circular_avatar_from_bytes(bytes, size).map_err(|e| e.to_string())?;
    encode_png_rgba(image.as_raw(), image.width(), image.height()).map_err(|e| e.to_string())
}

fn rendered(bytes: &[u8], config: &AvatarConfig) -> Result<JsRenderedImage, String> {
    let avatar = render_avatar_from_bytes(bytes, config).map_err(|e| e.to_string())?;
    let rendered = JsRenderedImage::from_avatar(&avatar)?;
    #[cfg(target_arch = "wasm32")]
    rendered.warn_if_placeholder();
    Ok(rendered)
}

fn placeholder_bytes(size: u32) -> Result<Vec<u8>, String> {
    let image = placeholder(size, DEFAULT_FALLBACK_COLOR).map_err(|e| e.to_string())?;
    encode_png_rgba(image.as_raw(), image.width(), image.height()).map_err(|e| e.to_string())
}


/// WASM-specific tests that require JsValue.
///
/// Run with `wasm-pack test`.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_render_avatar_with_default_config() {
        let rendered = render_avatar_with_config(b"nope", JsValue::UNDEFINED).unwrap();
        assert_eq!(rendered.width(), 250);
        assert!(rendered.is_placeholder());
    }

    #[wasm_bindgen_test]
    fn test_circular_avatar_png_zero_size_throws() {
        assert!(circular_avatar_png(b"nope", 0).is_err());
    }
}
