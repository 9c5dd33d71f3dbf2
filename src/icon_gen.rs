use crate::render::render_icon;
use anyhow::{bail, ensure, Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, ImageFormat, RgbaImage,
};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};
use tracing::info;

/// Sizes required by the macOS app icon set, in generation order.
pub const ICON_SIZES: [u32; 7] = [16, 32, 64, 128, 256, 512, 1024];

/// Asset catalog folder, relative to the repository root.
pub const DEFAULT_OUTPUT_DIR: &str = "macos/Runner/Assets.xcassets/AppIcon.appiconset";

pub fn icon_file_name(size: u32) -> String {
    format!("app_icon_{size}.png")
}

/// Render every size and write it into `out_dir`.
///
/// The directory must already exist. Existing icons are overwritten. The
/// first failure stops the batch; icons written before it are left in place.
pub fn generate_all(sizes: &[u32], out_dir: &Path) -> Result<Vec<PathBuf>> {
    if !out_dir.is_dir() {
        bail!("Output directory does not exist: {}", out_dir.display());
    }

    info!(count = sizes.len(), dir = %out_dir.display(), "Generating app icons");

    let mut written = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let icon = render_icon(size)?;
        let filename = icon_file_name(size);
        let output_path = out_dir.join(&filename);
        save_png(&icon, &output_path)?;
        println!("✓ {size}x{size} → {filename}");
        written.push(output_path);
    }

    println!();
    println!("Icons saved to: {}", out_dir.display());
    info!(count = written.len(), "Done");

    Ok(written)
}

pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    ensure!(
        image.width() == image.height(),
        "Icon must be square, got {}x{}",
        image.width(),
        image.height()
    );

    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut out_file = BufWriter::new(file);
    write_png(image.as_raw(), &mut out_file, image.width())
        .with_context(|| format!("Failed to write PNG {}", path.display()))?;
    out_file
        .flush()
        .with_context(|| format!("Failed to flush PNG {}", path.display()))?;
    Ok(())
}

// Encode image data as PNG with compression
fn write_png<W: Write>(image_data: &[u8], w: W, size: u32) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image_data, size, size, ColorType::Rgba8)?;
    Ok(())
}

/// Check that one icon file is a PNG of `size`×`size` pixels.
pub fn verify_icon(path: &Path, size: u32) -> Result<()> {
    let data = std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let format = image::guess_format(&data)
        .with_context(|| format!("Unrecognized image data in {}", path.display()))?;
    ensure!(
        format == ImageFormat::Png,
        "{} is {:?}, expected PNG",
        path.display(),
        format
    );

    let img = image::load_from_memory_with_format(&data, ImageFormat::Png)
        .with_context(|| format!("Failed to decode {}", path.display()))?;
    ensure!(
        img.width() == size && img.height() == size,
        "{} is {}x{}, expected {size}x{size}",
        path.display(),
        img.width(),
        img.height()
    );
    Ok(())
}

/// Check the whole icon set in `dir`.
pub fn verify_icon_set(dir: &Path, sizes: &[u32]) -> Result<()> {
    for &size in sizes {
        verify_icon(&dir.join(icon_file_name(size)), size)?;
    }
    Ok(())
}
