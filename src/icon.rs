use anyhow::{Context, Result};
use image::{ImageFormat, Rgba, RgbaImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_ellipse_mut, draw_hollow_circle_mut,
    draw_line_segment_mut, draw_polygon_mut,
};
use imageproc::point::Point;
use std::path::Path;

/// Side length of the reference design all coordinates are expressed in.
pub const REF_SIZE: u32 = 512;

const GOLD: Rgba<u8> = Rgba([255, 215, 0, 255]);
const GOLD_MID: Rgba<u8> = Rgba([212, 175, 55, 255]);
const GOLD_DARK: Rgba<u8> = Rgba([184, 148, 31, 255]);
const GLASS: Rgba<u8> = Rgba([245, 245, 245, 255]);
const GLASS_EDGE: Rgba<u8> = Rgba([176, 176, 176, 255]);
const BEER: Rgba<u8> = Rgba([255, 140, 0, 255]);
const FOAM: Rgba<u8> = Rgba([255, 251, 240, 255]);
const FOAM_EDGE: Rgba<u8> = Rgba([240, 230, 140, 255]);
const HIGHLIGHT: Rgba<u8> = Rgba([255, 255, 255, 100]);

/// A beer mug icon rendered at a fixed pixel size.
pub struct BeerIcon {
    img: RgbaImage,
}

impl BeerIcon {
    /// Renders the icon onto a transparent `size` x `size` canvas.
    ///
    /// The composition is drawn in a fixed z-order: gold disc, glass body,
    /// beverage fill, foam bubbles, handle, highlight. Succeeds for any
    /// positive size; at very small sizes degenerate shapes are skipped.
    pub fn render(size: u32) -> Self {
        let mut img = RgbaImage::new(size, size);
        let center = (size as i32 / 2, size as i32 / 2);
        let scale = size as f32 / REF_SIZE as f32;
        let s = |v: i32| (v as f32 * scale) as i32;

        // Gold disc, three radial bands built from concentric circles.
        let bg_radius = size as i32 / 2;
        let mut r = bg_radius;
        while r > 0 {
            let ratio = r as f32 / bg_radius as f32;
            let color = if ratio > 0.7 {
                GOLD
            } else if ratio > 0.4 {
                GOLD_MID
            } else {
                GOLD_DARK
            };
            draw_filled_circle_mut(&mut img, center, r, color);
            r -= 2;
        }

        // Glass body, slightly conical.
        let glass_w = s(120);
        let glass_h = s(180);
        let gx = center.0 - glass_w / 2;
        let gy = center.1 - glass_h / 2 + s(20);
        let top_inset = s(15);
        let bottom_inset = s(5);
        let glass = [
            Point::new(gx + top_inset, gy),
            Point::new(gx + glass_w - top_inset, gy),
            Point::new(gx + glass_w - bottom_inset, gy + glass_h),
            Point::new(gx + bottom_inset, gy + glass_h),
        ];
        draw_trapezoid(&mut img, &glass, GLASS, Some(GLASS_EDGE));

        // Beverage, inset into the glass.
        let margin = s(8);
        let beer_top = gy + s(30);
        let beer_bottom = gy + glass_h - s(10);
        let beer = [
            Point::new(gx + top_inset + margin, beer_top),
            Point::new(gx + glass_w - top_inset - margin, beer_top),
            Point::new(gx + glass_w - bottom_inset - margin, beer_bottom),
            Point::new(gx + bottom_inset + margin, beer_bottom),
        ];
        draw_trapezoid(&mut img, &beer, BEER, None);

        // Foam bubbles along the rim.
        let foam_y = gy + s(10);
        let bubbles = [
            (center.0 - s(25), foam_y, s(12)),
            (center.0 + s(10), foam_y - s(5), s(15)),
            (center.0 + s(35), foam_y + s(5), s(10)),
            (center.0 - s(5), foam_y + s(10), s(8)),
            (center.0 + s(20), foam_y + s(15), s(6)),
        ];
        for (x, y, radius) in bubbles {
            draw_filled_circle_mut(&mut img, (x, y), radius, FOAM);
            draw_hollow_circle_mut(&mut img, (x, y), radius, FOAM_EDGE);
        }

        // Handle, stroked as concentric arcs growing outward.
        let handle_center = (gx + glass_w + s(10), center.1);
        let handle_radius = s(25);
        for t in 0..s(8).max(1) {
            draw_arc_mut(
                &mut img,
                handle_center,
                handle_radius + t,
                -60.0,
                60.0,
                GLASS_EDGE,
            );
        }

        // Highlight on the glass. Pixels are written as-is, so the
        // translucent white shows through in the saved file.
        let shine = (gx + s(30), gy + s(60));
        draw_filled_ellipse_mut(&mut img, shine, s(8), s(40), HIGHLIGHT);

        Self { img }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.img
    }

    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.img
            .save_with_format(path, ImageFormat::Png)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}

fn draw_trapezoid(
    img: &mut RgbaImage,
    poly: &[Point<i32>; 4],
    fill: Rgba<u8>,
    outline: Option<Rgba<u8>>,
) {
    // draw_polygon_mut rejects a slice whose endpoints coincide, which the
    // trapezoid collapses to below a handful of pixels
    if poly.first() != poly.last() {
        draw_polygon_mut(img, poly, fill);
    }
    if let Some(color) = outline {
        for i in 0..poly.len() {
            let a = poly[i];
            let b = poly[(i + 1) % poly.len()];
            draw_line_segment_mut(
                img,
                (a.x as f32, a.y as f32),
                (b.x as f32, b.y as f32),
                color,
            );
        }
    }
}

fn draw_arc_mut(
    img: &mut RgbaImage,
    center: (i32, i32),
    radius: i32,
    start_deg: f32,
    end_deg: f32,
    color: Rgba<u8>,
) {
    if radius <= 0 {
        return;
    }
    let steps = (radius * 6).max(8);
    for i in 0..=steps {
        let angle = (start_deg + (end_deg - start_deg) * i as f32 / steps as f32).to_radians();
        let x = center.0 + (radius as f32 * angle.cos()).round() as i32;
        let y = center.1 + (radius as f32 * angle.sin()).round() as i32;
        if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
            img.put_pixel(x as u32, y as u32, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_match_requested_size() {
        for size in [1, 48, 152, 512] {
            let icon = BeerIcon::render(size);
            assert_eq!(icon.image().dimensions(), (size, size));
        }
    }

    #[test]
    fn corners_outside_disc_are_transparent() {
        for size in [48, 192, 512] {
            let icon = BeerIcon::render(size);
            let img = icon.image();
            let max = size - 1;
            for (x, y) in [(0, 0), (max, 0), (0, max), (max, max)] {
                assert_eq!(img.get_pixel(x, y)[3], 0, "corner ({}, {}) at size {}", x, y, size);
            }
        }
    }

    #[test]
    fn center_holds_the_beverage() {
        let icon = BeerIcon::render(512);
        assert_eq!(*icon.image().get_pixel(256, 256), BEER);
    }

    #[test]
    fn center_is_opaque_at_small_sizes() {
        for size in [48, 72, 96] {
            let icon = BeerIcon::render(size);
            assert_eq!(icon.image().get_pixel(size / 2, size / 2)[3], 255);
        }
    }
}
