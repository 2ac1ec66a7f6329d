use std::path::{Path, PathBuf};

use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::imageops::{self, FilterType};
use image::{ExtendedColorType, ImageEncoder, ImageReader, Rgba, RgbaImage};
use thiserror::Error;

use crate::alpha_bleed;
use crate::layout::{
    IconLayout, LayoutError, DEFAULT_CORNER_RADIUS_FRACTION, DEFAULT_PADDING_FRACTION,
};
use crate::mask;

/// Placeholder fill used when the logo cannot be decoded or resized.
pub const FALLBACK_COLOR: Rgba<u8> = Rgba([0, 122, 255, 255]);

/// Errors that stop a single icon from being written.
#[derive(Debug, Error)]
pub enum IconError {
    #[error("invalid icon layout: {0}")]
    InvalidLayout(#[from] LayoutError),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Reasons the logo could not be placed on the canvas. These never escape
/// [`generate`]; they select the placeholder instead.
#[derive(Debug, Error)]
pub enum LogoError {
    #[error("failed to decode {path}: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("failed to process logo: {0}")]
    Processing(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct IconOptions {
    pub padding_fraction: f64,
    pub corner_radius_fraction: f64,
    pub fallback_color: Rgba<u8>,
    pub bleed: bool,
}

impl Default for IconOptions {
    fn default() -> Self {
        Self {
            padding_fraction: DEFAULT_PADDING_FRACTION,
            corner_radius_fraction: DEFAULT_CORNER_RADIUS_FRACTION,
            fallback_color: FALLBACK_COLOR,
            bleed: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconContent {
    Logo,
    Placeholder { reason: String },
}

/// What [`generate`] wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconOutcome {
    pub layout: IconLayout,
    pub content: IconContent,
    /// BLAKE3 hex digest of the PNG bytes on disk.
    pub hash: String,
}

impl IconOutcome {
    pub fn is_placeholder(&self) -> bool {
        matches!(self.content, IconContent::Placeholder { .. })
    }
}

/// Renders one rounded icon of `size × size` from the logo at `source` and
/// writes it as PNG to `dest`.
///
/// A logo that cannot be decoded or resized is replaced by a solid
/// placeholder in `options.fallback_color`; the file is still written and the
/// outcome says so. The parent directory of `dest` must already exist.
pub fn generate(
    size: u32,
    source: &Path,
    dest: &Path,
    options: &IconOptions,
) -> Result<IconOutcome, IconError> {
    let layout = IconLayout::new(
        size,
        options.padding_fraction,
        options.corner_radius_fraction,
    )?;

    let (canvas, content) = render(&layout, source, options);

    let bytes = encode_png(&canvas, dest)?;
    write_atomic(dest, &bytes)?;

    Ok(IconOutcome {
        layout,
        content,
        hash: blake3::hash(&bytes).to_hex().to_string(),
    })
}

/// Builds the final masked canvas in memory.
pub fn render(
    layout: &IconLayout,
    source: &Path,
    options: &IconOptions,
) -> (RgbaImage, IconContent) {
    let mut canvas = RgbaImage::new(layout.size, layout.size);
    let corner_mask = mask::rounded_rect_mask(layout.size, layout.corner_radius);

    let content = match load_logo(source, layout.inner_size) {
        Ok(logo) => {
            let centered = center_on_square(&logo, layout.inner_size);
            blend_over(&mut canvas, &centered, layout.padding, layout.padding);
            IconContent::Logo
        }
        Err(err) => {
            mask::fill_rounded_rect(&mut canvas, layout.corner_radius, options.fallback_color);
            IconContent::Placeholder {
                reason: err.to_string(),
            }
        }
    };

    mask::apply_mask(&mut canvas, &corner_mask);

    if options.bleed {
        alpha_bleed::alpha_bleed(&mut canvas);
    }

    (canvas, content)
}

/// Decodes the logo (format sniffed from content) and scales it so its
/// longer side is exactly `inner_size`.
pub fn load_logo(path: &Path, inner_size: u32) -> Result<RgbaImage, LogoError> {
    let decode_err = |reason: String| LogoError::Decode {
        path: path.to_path_buf(),
        reason,
    };

    let img = ImageReader::open(path)
        .map_err(|e| decode_err(e.to_string()))?
        .with_guessed_format()
        .map_err(|e| decode_err(e.to_string()))?
        .decode()
        .map_err(|e| decode_err(e.to_string()))?
        .to_rgba8();

    let (width, height) = fit_within(img.width(), img.height(), inner_size)?;
    Ok(imageops::resize(&img, width, height, FilterType::Lanczos3))
}

/// Target dimensions for scaling `width × height` into a `bound` square
/// without changing the aspect ratio.
pub fn fit_within(width: u32, height: u32, bound: u32) -> Result<(u32, u32), LogoError> {
    if bound == 0 {
        return Err(LogoError::Processing(
            "icon is too small to hold a logo".to_string(),
        ));
    }
    if width == 0 || height == 0 {
        return Err(LogoError::Processing(format!(
            "logo has no pixels ({width}x{height})"
        )));
    }

    let scale_short = |short: u32, long: u32| -> u32 {
        let scaled = (short as u64 * bound as u64 + long as u64 / 2) / long as u64;
        (scaled as u32).clamp(1, bound)
    };

    if width >= height {
        Ok((bound, scale_short(height, width)))
    } else {
        Ok((scale_short(width, height), bound))
    }
}

/// Places `logo` in the middle of a transparent `side × side` square.
/// Odd leftovers go to the bottom/right margin.
pub fn center_on_square(logo: &RgbaImage, side: u32) -> RgbaImage {
    let mut square = RgbaImage::new(side, side);
    let x = side.saturating_sub(logo.width()) / 2;
    let y = side.saturating_sub(logo.height()) / 2;
    imageops::replace(&mut square, logo, x as i64, y as i64);
    square
}

/// Straight alpha blend of `top` onto `bottom` at `(x, y)`, weighting every
/// channel (alpha included) by the top pixel's alpha.
pub fn blend_over(bottom: &mut RgbaImage, top: &RgbaImage, x: u32, y: u32) {
    for (tx, ty, src) in top.enumerate_pixels() {
        let Some(dst) = bottom.get_pixel_mut_checked(x + tx, y + ty) else {
            continue;
        };
        let a = src[3] as u32;
        for c in 0..4 {
            let blended = (src[c] as u32 * a + dst[c] as u32 * (255 - a) + 127) / 255;
            dst[c] = blended as u8;
        }
    }
}

fn encode_png(canvas: &RgbaImage, dest: &Path) -> Result<Vec<u8>, IconError> {
    let mut buf = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut buf, CompressionType::Best, PngFilterType::Adaptive);
    encoder
        .write_image(
            canvas.as_raw(),
            canvas.width(),
            canvas.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|source| IconError::Encode {
            path: dest.to_path_buf(),
            source,
        })?;
    Ok(buf)
}

/// Writes `<dest>.tmp` and renames it over `dest`.
fn write_atomic(dest: &Path, bytes: &[u8]) -> Result<(), IconError> {
    let mut tmp_name = dest.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp = PathBuf::from(tmp_name);

    let write_err = |source| IconError::Write {
        path: dest.to_path_buf(),
        source,
    };

    std::fs::write(&tmp, bytes).map_err(write_err)?;
    if let Err(source) = std::fs::rename(&tmp, dest) {
        let _ = std::fs::remove_file(&tmp);
        return Err(write_err(source));
    }
    Ok(())
}
