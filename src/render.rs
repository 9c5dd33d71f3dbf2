//! Procedural renderer for the equalizer app icon.
//!
//! An icon is a dark radial-gradient disc with five bottom-aligned bars on
//! top of it. All geometry scales with the requested size; the only
//! absolute numbers are the 1-2 px minimums that keep strokes visible at
//! tiny sizes.

use crate::palette::{
    mix, opaque, Color, BRAND_GREEN, BRAND_GREEN_LIGHT, DARK_BG, DARK_BG_LIGHT,
};
use anyhow::{ensure, Result};
use image::RgbaImage;
use tracing::debug;

/// Relative bar heights, left to right.
pub const BAR_HEIGHTS: [f64; 5] = [0.30, 0.55, 0.40, 0.70, 0.50];

/// Pixel rectangle of a single bar. Coordinates may fall outside the
/// canvas; drawing clips them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bar {
    pub x: i64,
    pub top: i64,
    pub width: i64,
    pub height: i64,
}

impl Bar {
    /// First row below the bar.
    pub fn bottom(&self) -> i64 {
        self.top + self.height
    }

    pub fn has_cap(&self) -> bool {
        self.width > 3
    }

    pub fn cap_radius(&self) -> i64 {
        self.width / 4
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarLayout {
    pub bar_width: i64,
    pub gap: i64,
    pub start_x: i64,
    pub base_y: i64,
    pub max_height: i64,
    pub bars: [Bar; 5],
}

/// Compute the bar geometry for an icon of `size` pixels.
pub fn bar_layout(size: u32) -> BarLayout {
    let s = size as i64;
    let bar_width = (s / 7).max(2);
    let gap = (s / 12).max(1);
    let start_x = (size as f64 * 0.17) as i64;
    let base_y = (size as f64 * 0.73) as i64;
    let max_height = (size as f64 * 0.50) as i64;

    let bars = std::array::from_fn(|i| {
        let height = ((max_height as f64 * BAR_HEIGHTS[i]) as i64).max(2);
        Bar {
            x: start_x + i as i64 * (bar_width + gap),
            top: base_y - height,
            width: bar_width,
            height,
        }
    });

    BarLayout {
        bar_width,
        gap,
        start_x,
        base_y,
        max_height,
        bars,
    }
}

/// Radius of the background disc, leaving a small transparent margin.
pub fn background_radius(size: u32) -> i64 {
    let s = size as i64;
    (s / 2 - (s / 64).max(1)).max(1)
}

/// The background disc. Everything drawn is clipped to it.
#[derive(Debug, Clone, Copy)]
struct Disc {
    cx: i64,
    cy: i64,
    radius: i64,
}

impl Disc {
    fn new(size: u32) -> Self {
        let center = size as i64 / 2;
        Self {
            cx: center,
            cy: center,
            radius: background_radius(size),
        }
    }

    fn distance_sq(&self, x: i64, y: i64) -> i64 {
        let dx = x - self.cx;
        let dy = y - self.cy;
        dx * dx + dy * dy
    }

    fn contains(&self, x: i64, y: i64) -> bool {
        self.distance_sq(x, y) <= self.radius * self.radius
    }

    /// Color of the gradient at a pixel, or `None` outside the disc.
    ///
    /// Painting discs of radius R, R-1, ..., 1 on top of each other leaves
    /// each pixel with the color of the smallest disc covering it, so the
    /// result is looked up directly instead of overdrawn.
    fn shade(&self, x: i64, y: i64) -> Option<Color> {
        let d2 = self.distance_sq(x, y);
        let r = ((d2 as f64).sqrt().ceil() as i64).max(1);
        if r > self.radius {
            return None;
        }
        let ratio = r as f32 / self.radius as f32;
        Some(mix(DARK_BG, DARK_BG_LIGHT, 1.0 - ratio))
    }
}

/// Render the icon at `size`×`size` pixels.
///
/// Pure: the same size always yields the same pixels. A size of zero is
/// rejected; every other size renders, however degenerate.
pub fn render_icon(size: u32) -> Result<RgbaImage> {
    ensure!(size > 0, "Icon size must be at least 1 pixel, got {size}");

    let mut canvas = Canvas {
        img: RgbaImage::new(size, size),
        disc: Disc::new(size),
    };
    canvas.paint_background();

    let layout = bar_layout(size);
    debug!(
        size,
        radius = canvas.disc.radius,
        bar_width = layout.bar_width,
        gap = layout.gap,
        base_y = layout.base_y,
        "Rendering icon"
    );

    for bar in &layout.bars {
        canvas.paint_bar(bar);
        if bar.has_cap() {
            canvas.paint_cap(bar);
        }
    }

    Ok(canvas.img)
}

struct Canvas {
    img: RgbaImage,
    disc: Disc,
}

impl Canvas {
    fn put(&mut self, x: i64, y: i64, color: Color) {
        let (w, h) = (self.img.width() as i64, self.img.height() as i64);
        if x < 0 || y < 0 || x >= w || y >= h || !self.disc.contains(x, y) {
            return;
        }
        self.img.put_pixel(x as u32, y as u32, opaque(color));
    }

    fn paint_background(&mut self) {
        let disc = self.disc;
        for (x, y, pixel) in self.img.enumerate_pixels_mut() {
            if let Some(color) = disc.shade(x as i64, y as i64) {
                *pixel = opaque(color);
            }
        }
    }

    /// Rows are shaded from the base green at the bottom toward the light
    /// green at the top.
    fn paint_bar(&mut self, bar: &Bar) {
        for k in 0..bar.height {
            let y = bar.bottom() - 1 - k;
            let color = mix(BRAND_GREEN, BRAND_GREEN_LIGHT, k as f32 / bar.height as f32);
            for x in bar.x..bar.x + bar.width {
                self.put(x, y, color);
            }
        }
    }

    /// Elliptical cap centered on the top edge of the bar.
    fn paint_cap(&mut self, bar: &Bar) {
        let rx = (bar.width - 1) as f64 / 2.0;
        let ry = bar.cap_radius() as f64;
        let cx = bar.x as f64 + rx;
        let cy = bar.top as f64;

        for y in bar.top - bar.cap_radius()..=bar.top + bar.cap_radius() {
            for x in bar.x..bar.x + bar.width {
                let dx = (x as f64 - cx) / rx;
                let dy = (y as f64 - cy) / ry;
                if dx * dx + dy * dy <= 1.0 {
                    self.put(x, y, BRAND_GREEN_LIGHT);
                }
            }
        }
    }
}
