use image::{GrayImage, Luma, Rgba, RgbaImage};

/// Whether pixel `(x, y)` lies inside a `size × size` rounded rectangle with
/// corner radius `radius`.
///
/// Distances are measured in pixel-index space from the nearest point of the
/// inner rectangle `[r, size-1-r]²`, so the shape is symmetric under both
/// flips and the outermost corner pixel is clipped for any `radius > 0`.
pub fn inside_rounded_rect(x: u32, y: u32, size: u32, radius: u32) -> bool {
    if x >= size || y >= size {
        return false;
    }
    if radius == 0 {
        return true;
    }

    let r = radius as i64;
    let lo = r;
    let hi = (size as i64 - 1 - r).max(lo);

    let dx = distance_outside(x as i64, lo, hi);
    let dy = distance_outside(y as i64, lo, hi);

    dx * dx + dy * dy <= r * r
}

fn distance_outside(v: i64, lo: i64, hi: i64) -> i64 {
    if v < lo {
        lo - v
    } else if v > hi {
        v - hi
    } else {
        0
    }
}

/// Builds the single-channel corner mask: 255 inside the rounded rectangle,
/// 0 outside.
pub fn rounded_rect_mask(size: u32, radius: u32) -> GrayImage {
    GrayImage::from_fn(size, size, |x, y| {
        if inside_rounded_rect(x, y, size, radius) {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}

/// Paints `color` over every pixel the rounded rectangle covers.
pub fn fill_rounded_rect(canvas: &mut RgbaImage, radius: u32, color: Rgba<u8>) {
    let size = canvas.width().min(canvas.height());
    for (x, y, pixel) in canvas.enumerate_pixels_mut() {
        if inside_rounded_rect(x, y, size, radius) {
            *pixel = color;
        }
    }
}

/// Replaces the canvas alpha channel with the mask value at each pixel.
pub fn apply_mask(canvas: &mut RgbaImage, mask: &GrayImage) {
    for (x, y, pixel) in canvas.enumerate_pixels_mut() {
        pixel[3] = mask.get_pixel_checked(x, y).map_or(0, |m| m[0]);
    }
}
