// SPDX-License-Identifier: MPL-2.0
use icon_forge::config::IconPaths;
use icon_forge::error::Result;
use icon_forge::{icon, logging};

fn main() -> Result<()> {
    logging::init();

    let ignored = pico_args::Arguments::from_env().finish();
    if !ignored.is_empty() {
        tracing::warn!(?ignored, "icon_forge takes no arguments; ignoring them");
    }

    let paths = IconPaths::from_manifest_dir();
    let report = icon::generate(&paths.source, &paths.output)?;

    println!("Generated {}", report.output.display());
    println!("Available sizes: {}", report.sizes_display());
    Ok(())
}
