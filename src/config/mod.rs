//! Generator configuration: compile-time defaults and path resolution.
//!
//! There is no settings file. Every run uses the constants in [`defaults`]
//! and resolves its locations through [`paths`].
//!
//! # Examples
//!
//! ```no_run
//! use icon_forge::config::{IconPaths, ICON_SIZES};
//!
//! let paths = IconPaths::with_root("/work/app");
//! assert!(paths.output.ends_with("build/icon.ico"));
//! assert_eq!(ICON_SIZES.len(), 7);
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::{
    DEFAULT_ICON_MODE, DEFAULT_LOG_FILTER, ICON_SIZES, MAX_ICON_DIMENSION, OUTPUT_RELATIVE_PATH,
    RESAMPLE_FILTER, SOURCE_RELATIVE_PATH,
};
pub use paths::{project_root, IconPaths};
