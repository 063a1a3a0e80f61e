//! Portfolio Core - Image processing for the portfolio page
//!
//! This crate turns raw photos into the images the page embeds: a circular
//! profile picture and project card thumbnails, each with a deterministic
//! placeholder when the asset is missing.
//!
//! The crate logs through the `log` facade and never installs a logger.

pub mod avatar;
pub mod config;
pub mod decode;
pub mod encode;
pub mod mask;
pub mod project;
pub mod transform;

pub use avatar::{
    circular_avatar, circular_avatar_or_placeholder, create_circular_avatar,
    create_circular_avatar_from_bytes, placeholder, render_avatar, render_avatar_from_bytes,
    Avatar, AvatarError,
};
pub use config::{
    AvatarConfig, ProjectImageConfig, DEFAULT_AVATAR_SIZE, DEFAULT_FALLBACK_COLOR, MAX_AVATAR_SIZE,
    MAX_PLACEHOLDER_DIMENSION,
};
pub use decode::{DecodeError, DecodedImage, FilterType};
pub use encode::EncodeError;
pub use project::{decode_project_image, load_project_image, project_placeholder, ProjectImage};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_public_types_are_thread_safe() {
        assert_send_sync::<Avatar>();
        assert_send_sync::<AvatarConfig>();
        assert_send_sync::<DecodedImage>();
        assert_send_sync::<ProjectImage>();
    }

    #[test]
    fn test_parallel_renders_are_independent() {
        let handles: Vec<_> = (1..=4u32)
            .map(|i| {
                std::thread::spawn(move || {
                    let source = DecodedImage::filled(10 * i, 7 * i, [i as u8, 0, 0]);
                    circular_avatar(&source, &AvatarConfig::with_size(16 * i)).unwrap()
                })
            })
            .collect();

        for (i, handle) in (1..=4u32).zip(handles) {
            let avatar = handle.join().unwrap();
            assert_eq!(avatar.dimensions(), (16 * i, 16 * i));
            assert_eq!(avatar.get_pixel(8 * i, 8 * i).0, [i as u8, 0, 0, 255]);
        }
    }
}
