// SPDX-License-Identifier: MPL-2.0
//! Multi-resolution Windows icon generation.
//!
//! [`generate`] runs the whole pipeline: decode the source, normalize it to
//! RGBA, resample one square frame per [`ICON_SIZES`] entry, write them into
//! a single `.ico` container and read the container back to report which
//! sizes it actually holds.
//!
//! # Example
//!
//! ```no_run
//! use icon_forge::icon;
//! use std::path::Path;
//!
//! let report = icon::generate(
//!     Path::new("public/favicon-512x512.png"),
//!     Path::new("build/icon.ico"),
//! )?;
//! println!("Available sizes: {}", report.sizes_display());
//! # Ok::<(), icon_forge::error::Error>(())
//! ```

pub mod container;
pub mod frame;

use crate::config::ICON_SIZES;
use crate::error::{Error, Result};
use image_rs::{DynamicImage, GenericImageView};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub use container::{encode_icon, read_icon_sizes, write_icon, IconSize};
pub use frame::{normalize_rgba, render_frames, resize_frame};

/// What a finished run wrote and what the container declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconReport {
    pub output: PathBuf,
    /// Entry sizes read back from the written file, ascending.
    pub sizes: Vec<IconSize>,
}

impl IconReport {
    /// Formats the embedded sizes as `[(16, 16), (24, 24), ...]`.
    #[must_use]
    pub fn sizes_display(&self) -> String {
        let items: Vec<String> = self.sizes.iter().map(ToString::to_string).collect();
        format!("[{}]", items.join(", "))
    }

    /// Returns whether the container holds exactly the requested square sizes.
    #[must_use]
    pub fn matches(&self, requested: &[u32]) -> bool {
        let mut expected: Vec<IconSize> = requested.iter().copied().map(IconSize::square).collect();
        expected.sort();
        expected.dedup();
        self.sizes == expected
    }
}

/// Decodes the image at `path`.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the file is missing, unreadable or not a
/// format the codec understands.
pub fn load_source(path: &Path) -> Result<DynamicImage> {
    let image = image_rs::open(path).map_err(|e| Error::decode_at(path, e))?;
    let (width, height) = image.dimensions();
    info!(
        path = %path.display(),
        width,
        height,
        color = ?image.color(),
        "loaded source image"
    );
    Ok(image)
}

/// Generates a `.ico` at `output_path` holding every standard icon size of
/// the image at `source_path`.
///
/// Any existing file at `output_path` is replaced. Nothing is written when
/// decoding fails, and a failed write leaves the previous file untouched.
///
/// # Errors
///
/// Returns [`Error::Decode`] when the source cannot be decoded and
/// [`Error::Write`] when the container cannot be written.
pub fn generate(source_path: &Path, output_path: &Path) -> Result<IconReport> {
    let source = load_source(source_path)?;
    let clean_source = frame::check_source_quality(&source);

    let rgba = normalize_rgba(source);
    let frames = render_frames(&rgba, &ICON_SIZES);
    let bytes = encode_icon(&frames)?;
    write_icon(output_path, &bytes)?;
    info!(
        path = %output_path.display(),
        bytes = bytes.len(),
        clean_source,
        "icon container written"
    );

    let report = IconReport {
        output: output_path.to_path_buf(),
        sizes: read_icon_sizes(output_path)?,
    };
    if !report.matches(&ICON_SIZES) {
        warn!(
            embedded = %report.sizes_display(),
            requested = ?ICON_SIZES,
            "container does not hold the requested sizes"
        );
    }
    Ok(report)
}
