// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for icon generation.
//!
//! This module is the single source of truth for the constants the
//! generator works from. Constants are organized by category.
//!
//! # Categories
//!
//! - **Icon sizes**: The frame dimensions embedded in every container
//! - **Resampling**: Filter used when shrinking the source
//! - **Locations**: Source and output paths relative to the project root
//! - **Logging**: Fallback log filter

use image_rs::imageops::FilterType;

// ==========================================================================
// Icon Size Defaults
// ==========================================================================

/// Standard Windows icon dimensions, ascending. Every generated container
/// embeds exactly these square frames.
pub const ICON_SIZES: [u32; 7] = [16, 24, 32, 48, 64, 128, 256];

/// Largest edge an ICO directory entry can describe.
pub const MAX_ICON_DIMENSION: u32 = 256;

// ==========================================================================
// Resampling Defaults
// ==========================================================================

/// Filter used for every frame. Lanczos keeps small sizes sharp without
/// the aliasing nearest/triangle filters produce when shrinking 512 → 16.
pub const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

// ==========================================================================
// Location Defaults
// ==========================================================================

/// Source raster, relative to the project root.
pub const SOURCE_RELATIVE_PATH: &str = "public/favicon-512x512.png";

/// Generated container, relative to the project root.
pub const OUTPUT_RELATIVE_PATH: &str = "build/icon.ico";

/// Unix mode for a freshly generated container: owner read/write, everyone
/// else read.
pub const DEFAULT_ICON_MODE: u32 = 0o644;

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Filter applied when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(!ICON_SIZES.is_empty());
    let mut i = 0;
    while i < ICON_SIZES.len() {
        assert!(ICON_SIZES[i] > 0);
        assert!(ICON_SIZES[i] <= MAX_ICON_DIMENSION);
        if i > 0 {
            assert!(ICON_SIZES[i] > ICON_SIZES[i - 1]);
        }
        i += 1;
    }
};
