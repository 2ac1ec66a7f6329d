//! Gives fully transparent pixels the color of their nearest visible
//! neighbors. Alpha is left untouched, so the icon silhouette does not
//! change, but downsampled icons no longer pick up a dark fringe from the
//! clipped corners.

use std::collections::VecDeque;

use bit_vec::BitVec;
use image::RgbaImage;

const NEIGHBORS: &[(i64, i64)] = &[
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

pub fn alpha_bleed(img: &mut RgbaImage) {
    let (w, h) = img.dimensions();

    let mut colored = PixelSet::new(w, h);
    let mut queued = PixelSet::new(w, h);
    let mut frontier = VecDeque::new();

    for (x, y, pixel) in img.enumerate_pixels() {
        if pixel[3] != 0 {
            colored.insert(x, y);
            queued.insert(x, y);
        }
    }

    for y in 0..h {
        for x in 0..w {
            if queued.contains(x, y) {
                continue;
            }
            if neighbors(x, y, w, h).any(|(nx, ny)| colored.contains(nx, ny)) {
                queued.insert(x, y);
                frontier.push_back((x, y));
            }
        }
    }

    // One ring per pass: a pixel only samples neighbors finished in earlier
    // passes, which keeps the result independent of queue order.
    while !frontier.is_empty() {
        let ring: Vec<(u32, u32)> = frontier.drain(..).collect();
        let mut painted = Vec::with_capacity(ring.len());

        for &(x, y) in &ring {
            let mut sum = [0u32; 3];
            let mut count = 0u32;

            for (nx, ny) in neighbors(x, y, w, h) {
                if colored.contains(nx, ny) {
                    let source = img.get_pixel(nx, ny);
                    sum[0] += source[0] as u32;
                    sum[1] += source[1] as u32;
                    sum[2] += source[2] as u32;
                    count += 1;
                } else if !queued.contains(nx, ny) {
                    queued.insert(nx, ny);
                    frontier.push_back((nx, ny));
                }
            }

            let count = count.max(1);
            let pixel = img.get_pixel_mut(x, y);
            pixel[0] = (sum[0] / count) as u8;
            pixel[1] = (sum[1] / count) as u8;
            pixel[2] = (sum[2] / count) as u8;
            painted.push((x, y));
        }

        for (x, y) in painted {
            colored.insert(x, y);
        }
    }
}

fn neighbors(x: u32, y: u32, w: u32, h: u32) -> impl Iterator<Item = (u32, u32)> {
    NEIGHBORS.iter().filter_map(move |(dx, dy)| {
        let nx = x as i64 + dx;
        let ny = y as i64 + dy;
        if nx < 0 || ny < 0 || nx >= w as i64 || ny >= h as i64 {
            None
        } else {
            Some((nx as u32, ny as u32))
        }
    })
}

struct PixelSet {
    width: u32,
    bits: BitVec,
}

impl PixelSet {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            bits: BitVec::from_elem(width as usize * height as usize, false),
        }
    }

    fn contains(&self, x: u32, y: u32) -> bool {
        self.bits
            .get(y as usize * self.width as usize + x as usize)
            .unwrap_or(false)
    }

    fn insert(&mut self, x: u32, y: u32) {
        self.bits.set(y as usize * self.width as usize + x as usize, true);
    }
}
