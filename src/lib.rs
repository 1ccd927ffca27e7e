// SPDX-License-Identifier: MPL-2.0
//! `icon_forge` turns a PNG into a multi-resolution Windows `.ico` file.
//!
//! The source is normalized to RGBA, resampled with Lanczos to every standard
//! icon size from 16 to 256 pixels, and packed into one container that is read
//! back to confirm which sizes it holds.

#![doc(html_root_url = "https://docs.rs/icon_forge/0.1.0")]

pub mod config;
pub mod error;
pub mod icon;
pub mod logging;
