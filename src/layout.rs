use thiserror::Error;

/// Padding reserved around the logo, as a fraction of the icon size.
pub const DEFAULT_PADDING_FRACTION: f64 = 0.25;

/// Corner radius of the rounded silhouette, as a fraction of the icon size.
pub const DEFAULT_CORNER_RADIUS_FRACTION: f64 = 0.20;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("icon size must be greater than zero")]
    ZeroSize,

    #[error("{label} fraction must be between 0 and 0.5 (exclusive), got {value}")]
    Fraction { label: &'static str, value: f64 },
}

/// Integer geometry of a single icon.
///
/// `inner_size` is always even so the logo square sits symmetrically inside
/// the canvas; any leftover pixel from an odd size ends up on the
/// bottom/right edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconLayout {
    pub size: u32,
    pub padding: u32,
    pub inner_size: u32,
    pub corner_radius: u32,
}

impl IconLayout {
    pub fn new(
        size: u32,
        padding_fraction: f64,
        corner_radius_fraction: f64,
    ) -> Result<Self, LayoutError> {
        if size == 0 {
            return Err(LayoutError::ZeroSize);
        }
        check_fraction("padding", padding_fraction)?;
        check_fraction("corner radius", corner_radius_fraction)?;

        let corner_radius = (size as f64 * corner_radius_fraction).floor() as u32;

        let mut padding = (size as f64 * padding_fraction).floor() as u32;
        let mut inner_size = size - padding * 2;
        if inner_size % 2 != 0 {
            inner_size -= 1;
            padding = (size - inner_size) / 2;
        }

        Ok(Self {
            size,
            padding,
            inner_size,
            corner_radius,
        })
    }

    pub fn with_defaults(size: u32) -> Result<Self, LayoutError> {
        Self::new(
            size,
            DEFAULT_PADDING_FRACTION,
            DEFAULT_CORNER_RADIUS_FRACTION,
        )
    }
}

fn check_fraction(label: &'static str, value: f64) -> Result<(), LayoutError> {
    if value > 0.0 && value < 0.5 {
        Ok(())
    } else {
        Err(LayoutError::Fraction { label, value })
    }
}
