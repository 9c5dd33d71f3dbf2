use anyhow::Result;
use app_icon_gen::icon_gen::{icon_file_name, verify_icon, DEFAULT_OUTPUT_DIR, ICON_SIZES};
use std::path::{Path, PathBuf};
use tracing::warn;

fn main() -> Result<()> {
    app_icon_gen::init_logging(false);

    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_OUTPUT_DIR));

    println!("Checking icon set in: {}", dir.display());

    for size in ICON_SIZES {
        let filename = icon_file_name(size);
        if let Err(err) = verify_icon(&dir.join(&filename), size) {
            warn!(size, "Icon check failed");
            return Err(err);
        }
        println!("  ✓ {filename} ({size}x{size})");
    }

    println!("\n✓ All {} icons present and valid", ICON_SIZES.len());
    Ok(())
}
