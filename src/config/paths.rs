// SPDX-License-Identifier: MPL-2.0
//! Resolution of the source and output locations.
//!
//! Both paths hang off a project root. The binary uses the crate's manifest
//! directory, fixed at build time, so the tool finds `public/` and `build/`
//! no matter which working directory it is launched from. Tests pass their
//! own root through [`IconPaths::with_root`].

use super::defaults::{OUTPUT_RELATIVE_PATH, SOURCE_RELATIVE_PATH};
use std::path::{Path, PathBuf};

/// Absolute source and output locations for one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconPaths {
    pub source: PathBuf,
    pub output: PathBuf,
}

impl IconPaths {
    /// Resolves the default locations under `root`.
    pub fn with_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            source: root.join(SOURCE_RELATIVE_PATH),
            output: root.join(OUTPUT_RELATIVE_PATH),
        }
    }

    /// Resolves the default locations under the crate's manifest directory.
    pub fn from_manifest_dir() -> Self {
        Self::with_root(project_root())
    }
}

/// Returns the project root the binary was built from.
pub fn project_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}
