// SPDX-License-Identifier: MPL-2.0
use ico::IconDir;
use icon_forge::config::{IconPaths, ICON_SIZES};
use icon_forge::error::Error;
use icon_forge::icon::{self, IconSize};
use image_rs::{ImageBuffer, Rgb, Rgba};
use std::fs::{self, File};
use std::path::Path;
use tempfile::tempdir;

fn project_with_dirs(root: &Path) -> IconPaths {
    let paths = IconPaths::with_root(root);
    fs::create_dir_all(paths.source.parent().expect("source has a parent"))
        .expect("failed to create public dir");
    fs::create_dir_all(paths.output.parent().expect("output has a parent"))
        .expect("failed to create build dir");
    paths
}

fn decode_entries(path: &Path) -> Vec<ico::IconImage> {
    let file = File::open(path).expect("failed to open icon");
    let dir = IconDir::read(file).expect("output should be an icon container");
    dir.entries()
        .iter()
        .map(|entry| entry.decode().expect("entry should decode"))
        .collect()
}

#[test]
fn test_generate_from_default_project_layout() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let paths = project_with_dirs(dir.path());
    ImageBuffer::from_pixel(512, 512, Rgba([20u8, 140, 220, 255]))
        .save(&paths.source)
        .expect("Failed to write source png");

    let report = icon::generate(&paths.source, &paths.output).expect("generation failed");

    let expected: Vec<IconSize> = ICON_SIZES.iter().copied().map(IconSize::square).collect();
    assert_eq!(report.sizes, expected);
    assert_eq!(
        report.sizes_display(),
        "[(16, 16), (24, 24), (32, 32), (48, 48), (64, 64), (128, 128), (256, 256)]"
    );
    assert_eq!(icon::read_icon_sizes(&paths.output).expect("re-read"), expected);
}

#[test]
fn test_primary_entry_is_largest_frame() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let paths = project_with_dirs(dir.path());
    ImageBuffer::from_pixel(512, 512, Rgba([0u8, 0, 0, 255]))
        .save(&paths.source)
        .expect("Failed to write source png");

    icon::generate(&paths.source, &paths.output).expect("generation failed");

    let entries = decode_entries(&paths.output);
    assert_eq!(entries.len(), ICON_SIZES.len());
    assert_eq!(entries[0].width(), 256);
}

#[test]
fn test_rgb_source_produces_opaque_frames() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let paths = project_with_dirs(dir.path());
    ImageBuffer::from_fn(512, 512, |x, y| Rgb([(x / 2) as u8, (y / 2) as u8, 90u8]))
        .save(&paths.source)
        .expect("Failed to write source png");

    icon::generate(&paths.source, &paths.output).expect("generation failed");

    for entry in decode_entries(&paths.output) {
        assert!(
            entry.rgba_data().chunks_exact(4).all(|px| px[3] == 255),
            "{}px frame has non-opaque pixels",
            entry.width()
        );
    }
}

#[test]
fn test_transparency_survives_in_every_frame() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let paths = project_with_dirs(dir.path());
    // Transparent top half, half-transparent bottom half.
    ImageBuffer::from_fn(512, 512, |_, y| {
        if y < 256 {
            Rgba([0u8, 0, 0, 0])
        } else {
            Rgba([255u8, 255, 255, 128])
        }
    })
    .save(&paths.source)
    .expect("Failed to write source png");

    icon::generate(&paths.source, &paths.output).expect("generation failed");

    for entry in decode_entries(&paths.output) {
        let size = entry.width() as usize;
        let rgba = entry.rgba_data();
        let alpha_at = |x: usize, y: usize| rgba[(y * size + x) * 4 + 3];

        assert_eq!(alpha_at(0, 0), 0, "{size}px frame lost transparency");
        assert!(
            alpha_at(size - 1, size - 1).abs_diff(128) <= 1,
            "{size}px frame lost partial transparency"
        );
    }
}

#[test]
fn test_regeneration_is_deterministic() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let paths = project_with_dirs(dir.path());
    ImageBuffer::from_fn(300, 300, |x, y| Rgba([(x % 256) as u8, (y % 256) as u8, 7u8, 200]))
        .save(&paths.source)
        .expect("Failed to write source png");

    let first = icon::generate(&paths.source, &paths.output).expect("first run failed");
    let first_bytes = fs::read(&paths.output).expect("read first output");
    let second = icon::generate(&paths.source, &paths.output).expect("second run failed");
    let second_bytes = fs::read(&paths.output).expect("read second output");

    assert_eq!(first.sizes, second.sizes);
    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn test_missing_source_writes_nothing() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let paths = project_with_dirs(dir.path());

    let err = icon::generate(&paths.source, &paths.output).expect_err("should fail");

    assert!(matches!(err, Error::Decode(_)));
    assert!(!paths.output.exists());
}

#[test]
fn test_missing_output_directory_is_a_write_error() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let paths = IconPaths::with_root(dir.path());
    fs::create_dir_all(paths.source.parent().expect("source has a parent"))
        .expect("failed to create public dir");
    ImageBuffer::from_pixel(256, 256, Rgba([1u8, 2, 3, 255]))
        .save(&paths.source)
        .expect("Failed to write source png");

    let err = icon::generate(&paths.source, &paths.output).expect_err("should fail");

    assert!(matches!(err, Error::Write(_)));
    assert!(!paths.output.exists());
    assert!(err.to_string().contains("icon.ico"));
}

#[test]
fn test_failed_write_leaves_previous_output_untouched() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let paths = project_with_dirs(dir.path());
    ImageBuffer::from_pixel(512, 512, Rgba([9u8, 9, 9, 255]))
        .save(&paths.source)
        .expect("Failed to write source png");
    fs::create_dir(&paths.output).expect("Failed to create blocking directory");
    let kept = paths.output.join("previous.ico");
    fs::write(&kept, b"previous icon").expect("Failed to seed previous output");

    let err = icon::generate(&paths.source, &paths.output).expect_err("should fail");

    assert!(matches!(err, Error::Write(_)));
    assert_eq!(fs::read(&kept).expect("read previous"), b"previous icon");
    let build_dir = paths.output.parent().expect("output has a parent");
    let entries: Vec<_> = fs::read_dir(build_dir)
        .expect("list build dir")
        .map(|entry| entry.expect("dir entry").file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("icon.ico")]);
}

#[cfg(unix)]
#[test]
fn test_output_is_readable_by_others() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().expect("Failed to create temporary directory");
    let paths = project_with_dirs(dir.path());
    ImageBuffer::from_pixel(512, 512, Rgba([9u8, 9, 9, 255]))
        .save(&paths.source)
        .expect("Failed to write source png");

    icon::generate(&paths.source, &paths.output).expect("first run failed");
    let mode = fs::metadata(&paths.output).expect("metadata").permissions().mode();
    assert_eq!(mode & 0o777, 0o644);

    fs::set_permissions(&paths.output, fs::Permissions::from_mode(0o664)).expect("chmod");
    icon::generate(&paths.source, &paths.output).expect("second run failed");
    let mode = fs::metadata(&paths.output).expect("metadata").permissions().mode();
    assert_eq!(mode & 0o777, 0o664);
}
