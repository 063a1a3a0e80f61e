//! Project card thumbnail WASM bindings.

use crate::types::{js_error, JsRenderedImage};
use portfolio_core::{decode_project_image, ProjectImageConfig};
use wasm_bindgen::prelude::*;

/// Decode a project screenshot, substituting the dark `600 x 400`
/// placeholder when the bytes are unusable.
#[wasm_bindgen]
pub fn render_project_image(bytes: &[u8]) -> Result<JsRenderedImage, JsValue> {
    rendered(bytes, &ProjectImageConfig::default()).map_err(js_error)
}

fn rendered(bytes: &[u8], config: &ProjectImageConfig) -> Result<JsRenderedImage, String> {
    let rendered = JsRenderedImage::from_project(&decode_project_image(bytes, config))?;
    #[cfg(target_arch = "wasm32")]
    rendered.warn_if_placeholder();
    Ok(rendered)
}
