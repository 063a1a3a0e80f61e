//! Portfolio WASM - WebAssembly bindings for the portfolio page
//!
//! Exposes the portfolio-core image pipeline to the page's JavaScript. Every
//! image comes back as PNG bytes; failures that the page can survive are
//! rendered as placeholders and reported with `console.warn`.
//!
//! # Module Structure
//!
//! - `avatar` - Circular profile picture
//! - `project` - Project card thumbnails
//! - `types` - WASM-compatible wrapper types
//!
//! # Usage
//!
//! ```typescript
//! import init, { render_avatar } from '@portfolio/wasm';
//!
//! await init();
//! const avatar = render_avatar(bytes, 250);
//! if (avatar.is_placeholder) console.log(avatar.fallback_reason);
//! ```

use wasm_bindgen::prelude::*;

mod avatar;
mod project;
mod types;

pub use avatar::{circular_avatar_png, placeholder_png, render_avatar, render_avatar_with_config};
pub use project::render_project_image;
pub use types::JsRenderedImage;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
