use app_icon_gen::render::{background_radius, bar_layout, render_icon};
use image::RgbaImage;

fn is_bar_pixel(img: &RgbaImage, x: i64, y: i64) -> bool {
    let p = img.get_pixel(x as u32, y as u32);
    p[3] == 255 && p[1] > 150
}

/// Height of the green run in the column through the middle of a bar.
fn measured_bar_height(img: &RgbaImage, index: usize) -> usize {
    let bar = bar_layout(img.width()).bars[index];
    let x = bar.x + bar.width / 2;
    if x >= img.width() as i64 {
        return 0;
    }
    (0..img.height() as i64)
        .filter(|&y| is_bar_pixel(img, x, y))
        .count()
}

#[test]
fn test_dimension_invariant() {
    for size in [1, 2, 3, 16, 64, 1024] {
        let icon = render_icon(size).unwrap();
        assert_eq!(icon.width(), size);
        assert_eq!(icon.height(), size);
    }
}

#[test]
fn test_determinism() {
    for size in [16, 512] {
        assert_eq!(render_icon(size).unwrap(), render_icon(size).unwrap());
    }
}

#[test]
fn test_transparent_outside_radius() {
    for size in [3, 16, 32, 256, 1024] {
        let icon = render_icon(size).unwrap();
        let center = (size / 2) as i64;
        let radius = background_radius(size);
        for (x, y, p) in icon.enumerate_pixels() {
            let dx = x as i64 - center;
            let dy = y as i64 - center;
            if dx * dx + dy * dy > radius * radius {
                assert_eq!(p[3], 0, "size {size} at ({x}, {y})");
            }
        }
    }
}

#[test]
fn test_fourth_bar_renders_tallest() {
    for size in [64, 128, 256, 512, 1024] {
        let icon = render_icon(size).unwrap();
        let heights: Vec<usize> = (0..5).map(|i| measured_bar_height(&icon, i)).collect();
        for i in [0, 1, 2, 4] {
            assert!(heights[3] > heights[i], "size {size}: {heights:?}");
        }
    }
}

#[test]
fn test_size_four_clamps() {
    let layout = bar_layout(4);
    assert!(layout.bar_width > 0);
    assert!(layout.gap > 0);
    assert!(background_radius(4) > 0);

    let icon = render_icon(4).unwrap();
    assert_eq!(icon.dimensions(), (4, 4));
    assert!(icon.pixels().any(|p| p[3] == 255));
}
