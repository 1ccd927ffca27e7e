// SPDX-License-Identifier: MPL-2.0
//! Frame preparation: color normalization and resampling.

use crate::config::{MAX_ICON_DIMENSION, RESAMPLE_FILTER};
use image_rs::{imageops, DynamicImage, GenericImageView, RgbaImage};
use tracing::{debug, warn};

/// Converts any decoded image to 8-bit RGBA.
///
/// Images that are already RGBA8 are moved through without copying. Anything
/// else is converted; sources without an alpha channel come out fully opaque.
pub fn normalize_rgba(image: DynamicImage) -> RgbaImage {
    match image {
        DynamicImage::ImageRgba8(rgba) => rgba,
        other => {
            debug!(color = ?other.color(), "converting source to rgba8");
            other.to_rgba8()
        }
    }
}

/// Resize the image to a `size`×`size` square using the icon resampling filter.
pub fn resize_frame(image: &RgbaImage, size: u32) -> RgbaImage {
    let size = size.max(1);
    imageops::resize(image, size, size, RESAMPLE_FILTER)
}

/// Produces one square frame per entry of `sizes`, in the order given.
pub fn render_frames(source: &RgbaImage, sizes: &[u32]) -> Vec<RgbaImage> {
    sizes
        .iter()
        .map(|&size| {
            debug!(size, "resampling frame");
            resize_frame(source, size)
        })
        .collect()
}

/// Logs sources that will not shrink cleanly into square icon frames.
///
/// Returns `true` when the source is square and at least as large as the
/// biggest frame.
pub fn check_source_quality(image: &DynamicImage) -> bool {
    let (width, height) = image.dimensions();
    let mut ok = true;

    if width != height {
        warn!(width, height, "source is not square; frames will be stretched");
        ok = false;
    }
    if width.min(height) < MAX_ICON_DIMENSION {
        warn!(
            width,
            height,
            largest = MAX_ICON_DIMENSION,
            "source is smaller than the largest icon size; frames will be upscaled"
        );
        ok = false;
    }

    ok
}
