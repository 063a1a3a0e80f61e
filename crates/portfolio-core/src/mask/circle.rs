//! Circular (inscribed ellipse) alpha mask.
//!
//! The mask is the filled ellipse spanning the full bounding box of the
//! image. For a square bounding box this is the inscribed circle.

use image::{GrayImage, Luma};

/// Mask value for pixels inside the ellipse.
pub const OPAQUE: u8 = 255;
/// Mask value for pixels outside the ellipse.
pub const TRANSPARENT: u8 = 0;

/// Ellipse inscribed in a `width x height` bounding box.
///
/// Coordinates are normalized so that (0, 0) is the top-left corner and
/// (1, 1) is the bottom-right corner of the box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleMask {
    pub center_x: f32,
    pub center_y: f32,
    pub radius_x: f32,
    pub radius_y: f32,
}

impl Default for CircleMask {
    fn default() -> Self {
        Self::inscribed()
    }
}

impl CircleMask {
    /// The ellipse touching all four edges of the bounding box.
    pub fn inscribed() -> Self {
        Self {
            center_x: 0.5,
            center_y: 0.5,
            radius_x: 0.5,
            radius_y: 0.5,
        }
    }

    /// Squared normalized distance from the centre; 1.0 is on the boundary.
    #[inline]
    fn normalized_distance_sq(&self, x: f32, y: f32) -> f32 {
        let dx = (x - self.center_x) / self.radius_x.max(0.001);
        let dy = (y - self.center_y) / self.radius_y.max(0.001);
        dx * dx + dy * dy
    }

    /// Check if a normalized point is inside the ellipse boundary.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.normalized_distance_sq(x, y) <= 1.0
    }

    /// Rasterize into a single-channel mask.
    ///
    /// Starts fully transparent and sets every pixel whose centre lies inside
    /// the ellipse to [`OPAQUE`]. Below 4 pixels per axis the corner pixel
    /// centres fall inside, so only boxes of at least `4 x 4` have transparent
    /// corners.
    pub fn render(&self, width: u32, height: u32) -> GrayImage {
        let mut mask = GrayImage::from_pixel(width, height, Luma([TRANSPARENT]));
        let w_f = width as f32;
        let h_f = height as f32;

        for (px, py, value) in mask.enumerate_pixels_mut() {
            let x = (px as f32 + 0.5) / w_f;
            let y = (py as f32 + 0.5) / h_f;
            if self.contains(x, y) {
                *value = Luma([OPAQUE]);
            }
        }

        mask
    }
}

/// Square circular mask of `size x size` pixels.
///
/// The four corners are [`TRANSPARENT`] for `size >= 4`. At sizes 1 to 3 every
/// corner pixel centre lies inside the circle (at size 3 the corner centre is
/// at normalized distance² 8/9), so those masks have opaque corners.
pub fn circle_mask(size: u32) -> GrayImage {
    CircleMask::inscribed().render(size, size)
}
