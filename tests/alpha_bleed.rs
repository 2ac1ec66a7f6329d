use appicon::alpha_bleed::alpha_bleed;
use image::{Rgba, RgbaImage};

#[test]
fn transparent_pixels_take_neighbor_color() {
    let mut img = RgbaImage::new(5, 5);
    img.put_pixel(2, 2, Rgba([200, 100, 50, 255]));

    alpha_bleed(&mut img);

    for (x, y, pixel) in img.enumerate_pixels() {
        assert_eq!(&pixel.0[..3], &[200, 100, 50], "color at ({x}, {y})");
        let expected_alpha = if (x, y) == (2, 2) { 255 } else { 0 };
        assert_eq!(pixel[3], expected_alpha, "alpha at ({x}, {y})");
    }
}

#[test]
fn averages_multiple_sources() {
    let mut img = RgbaImage::new(3, 1);
    img.put_pixel(0, 0, Rgba([100, 0, 0, 255]));
    img.put_pixel(2, 0, Rgba([200, 0, 0, 255]));

    alpha_bleed(&mut img);

    assert_eq!(*img.get_pixel(1, 0), Rgba([150, 0, 0, 0]));
}

#[test]
fn fully_transparent_image_is_untouched() {
    let mut img = RgbaImage::from_pixel(4, 4, Rgba([1, 2, 3, 0]));
    let before = img.clone();

    alpha_bleed(&mut img);

    assert_eq!(img, before);
}

#[test]
fn visible_pixels_are_untouched() {
    let mut img = RgbaImage::new(4, 4);
    img.put_pixel(0, 0, Rgba([10, 20, 30, 128]));
    img.put_pixel(3, 3, Rgba([40, 50, 60, 1]));

    alpha_bleed(&mut img);

    assert_eq!(*img.get_pixel(0, 0), Rgba([10, 20, 30, 128]));
    assert_eq!(*img.get_pixel(3, 3), Rgba([40, 50, 60, 1]));
}
