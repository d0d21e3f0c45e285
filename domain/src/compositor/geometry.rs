//! Watermark crop and cover-fit geometry

use thiserror::Error;

/// Height in source pixels of the watermark band at the bottom of rendered images
pub const DEFAULT_WATERMARK_BAND: u32 = 85;

/// Why no draw plan could be produced
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositeError {
    #[error("Image height {height} is too small to crop a {band}px band")]
    CropTooSmall { height: u32, band: u32 },

    #[error("Target rectangle {width}x{height} is empty")]
    EmptyTarget { width: u32, height: u32 },

    #[error("Source image is empty")]
    EmptySource,
}

/// Pixel dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Axis-aligned rectangle in (possibly fractional) pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Where and how to draw the cropped source into the target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawPlan {
    /// Sub-rectangle of the source image to keep (always anchored at 0,0)
    pub source: Rect,
    /// Placement of the scaled source, relative to the target origin.
    /// Overflow on one axis is centred, so offsets are zero or negative.
    pub dest: Rect,
    /// Size of the target rectangle
    pub target: Size,
}

impl DrawPlan {
    /// Integer crop `(x, y, width, height)` of the source region that lands on the target.
    ///
    /// The region is centred on the overflowing axis and spans the whole
    /// cropped source on the other, so resizing it straight to the target
    /// size covers every target pixel. The result is never empty and never
    /// leaves the cropped source.
    pub fn visible_pixels(&self) -> (u32, u32, u32, u32) {
        let scale = self.dest.width / self.source.width;
        let axis = |extent: u32, limit: u32| {
            let len = ((extent as f64 / scale).round() as u32).clamp(1, limit);
            ((limit - len) / 2, len)
        };
        let (x, width) = axis(self.target.width, self.source.width as u32);
        let (y, height) = axis(self.target.height, self.source.height as u32);
        (x, y, width, height)
    }
}

/// Plan a watermark crop followed by a cover fit into `target`.
pub fn plan_cover(source: Size, target: Size, watermark_band: u32) -> Result<DrawPlan, CompositeError> {
    if target.is_empty() {
        return Err(CompositeError::EmptyTarget {
            width: target.width,
            height: target.height,
        });
    }
    if source.width == 0 {
        return Err(CompositeError::EmptySource);
    }
    if source.height <= watermark_band {
        return Err(CompositeError::CropTooSmall {
            height: source.height,
            band: watermark_band,
        });
    }

    let cropped = Size::new(source.width, source.height - watermark_band);
    let source_aspect = cropped.aspect_ratio();
    let target_aspect = target.aspect_ratio();
    let (tw, th) = (target.width as f64, target.height as f64);

    let dest = if source_aspect > target_aspect {
        // Wider than the target: match heights, centre horizontally
        let width = th * source_aspect;
        Rect::new((tw - width) / 2.0, 0.0, width, th)
    } else {
        // Taller (or equal): match widths, centre vertically
        let height = tw / source_aspect;
        Rect::new(0.0, (th - height) / 2.0, tw, height)
    };

    Ok(DrawPlan {
        source: Rect::new(0.0, 0.0, cropped.width as f64, cropped.height as f64),
        dest,
        target,
    })
}
