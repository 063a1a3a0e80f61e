//! JavaScript-facing wrapper types.

use portfolio_core::{Avatar, ProjectImage};
use wasm_bindgen::prelude::*;

/// A rendered image ready for embedding in the page.
///
/// Holds PNG bytes plus the diagnostic that explains a placeholder, if one
/// was used.
#[wasm_bindgen]
pub struct JsRenderedImage {
    width: u32,
    height: u32,
    png: Vec<u8>,
    fallback_reason: Option<String>,
}

#[wasm_bindgen]
impl JsRenderedImage {
    /// Image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the source failed and a placeholder was rendered instead
    #[wasm_bindgen(getter)]
    pub fn is_placeholder(&self) -> bool {
        self.fallback_reason.is_some()
    }

    /// Failure message when a placeholder was used
    #[wasm_bindgen(getter)]
    pub fn fallback_reason(&self) -> Option<String> {
        self.fallback_reason.clone()
    }

    /// PNG bytes as Uint8Array (copied out of WASM memory)
    pub fn png(&self) -> Vec<u8> {
        self.png.clone()
    }
}

impl JsRenderedImage {
    pub(crate) fn from_avatar(avatar: &Avatar) -> Result<Self, String> {
        let png = avatar.to_png().map_err(|e| e.to_string())?;
        Ok(Self {
            width: avatar.image.width(),
            height: avatar.image.height(),
            png,
            fallback_reason: avatar.fallback_reason.as_ref().map(ToString::to_string),
        })
    }

    pub(crate) fn from_project(project: &ProjectImage) -> Result<Self, String> {
        let png = project.to_png().map_err(|e| e.to_string())?;
        Ok(Self {
            width: project.image.width,
            height: project.image.height,
            png,
            fallback_reason: project.fallback_reason.as_ref().map(ToString::to_string),
        })
    }

    /// Report a placeholder to the browser console.
    #[cfg(target_arch = "wasm32")]
    pub(crate) fn warn_if_placeholder(&self) {
        if let Some(reason) = &self.fallback_reason {
            web_sys::console::warn_1(&JsValue::from_str(&format!(
                "Error processing image: {reason}"
            )));
        }
    }
}

/// Convert an error message to a JavaScript `Error`.
pub(crate) fn js_error(message: impl AsRef<str>) -> JsValue {
    js_sys::Error::new(message.as_ref()).into()
}
