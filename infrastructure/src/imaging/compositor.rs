//! Canvas painting for briefing illustrations

use super::loader::LoadError;
use font8x8::{BASIC_FONTS, UnicodeFonts};
use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};
use sportify_domain::compositor::geometry::DEFAULT_WATERMARK_BAND;
use sportify_domain::{CompositeError, Size, plan_cover};
use tracing::{debug, warn};

/// Flat background painted when the image cannot be loaded (#374151)
pub const FALLBACK_BACKGROUND: Rgba<u8> = Rgba([0x37, 0x41, 0x51, 0xff]);

/// Label centred on the fallback background
pub const FALLBACK_LABEL: &str = "Image could not be loaded";

const LABEL_COLOR: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0xff]);

/// Glyph edge length of the bitmap font
const GLYPH: u32 = 8;

/// Largest integer scale used for the fallback label
const MAX_LABEL_SCALE: u32 = 2;

/// Paints a loaded image (or the fallback card) into a target-sized canvas
#[derive(Debug, Clone, Copy)]
pub struct Compositor {
    watermark_band: u32,
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new(DEFAULT_WATERMARK_BAND)
    }
}

impl Compositor {
    pub fn new(watermark_band: u32) -> Self {
        Self { watermark_band }
    }

    /// Paint the load outcome into a fresh `target`-sized canvas.
    ///
    /// The canvas starts fully transparent. A loaded image is cropped and
    /// cover-fitted; a failed load paints the fallback card instead.
    pub fn paint(&self, image: Result<DynamicImage, LoadError>, target: Size) -> RgbaImage {
        let mut canvas = RgbaImage::new(target.width, target.height);

        match image {
            Ok(source) => self.draw_cover(&mut canvas, &source, target),
            Err(e) => {
                warn!(error = %e, "Image failed to load, painting fallback");
                paint_fallback(&mut canvas);
            }
        }

        canvas
    }

    fn draw_cover(&self, canvas: &mut RgbaImage, source: &DynamicImage, target: Size) {
        let (width, height) = source.dimensions();
        let plan = match plan_cover(Size::new(width, height), target, self.watermark_band) {
            Ok(plan) => plan,
            Err(e @ CompositeError::CropTooSmall { .. }) => {
                warn!(error = %e, "Skipping image draw");
                return;
            }
            Err(e) => {
                debug!(error = %e, "Nothing to draw");
                return;
            }
        };

        // Only the visible slice is scaled, so the buffer never exceeds the target
        let (x, y, width, height) = plan.visible_pixels();
        let scaled = source
            .crop_imm(x, y, width, height)
            .resize_exact(target.width, target.height, FilterType::Triangle)
            .to_rgba8();

        imageops::overlay(canvas, &scaled, 0, 0);
    }
}

/// Fill with the fallback colour and centre the label
fn paint_fallback(canvas: &mut RgbaImage) {
    for pixel in canvas.pixels_mut() {
        *pixel = FALLBACK_BACKGROUND;
    }

    let chars = FALLBACK_LABEL.chars().count() as u32;
    let scale = (canvas.width() / (chars * GLYPH)).clamp(1, MAX_LABEL_SCALE);
    let label_width = (chars * GLYPH * scale) as i64;
    let label_height = (GLYPH * scale) as i64;
    let x = (canvas.width() as i64 - label_width) / 2;
    let y = (canvas.height() as i64 - label_height) / 2;

    draw_bitmap_text(canvas, x, y, FALLBACK_LABEL, LABEL_COLOR, scale);
}

/// Draw text with the 8x8 font, clipping anything outside the canvas
fn draw_bitmap_text(canvas: &mut RgbaImage, x: i64, y: i64, text: &str, color: Rgba<u8>, scale: u32) {
    let scale = scale.max(1) as i64;
    let (width, height) = (canvas.width() as i64, canvas.height() as i64);

    for (index, ch) in text.chars().enumerate() {
        let Some(glyph) = BASIC_FONTS.get(ch).or_else(|| BASIC_FONTS.get('?')) else {
            continue;
        };
        let cursor_x = x + index as i64 * GLYPH as i64 * scale;

        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..GLYPH as i64 {
                if (*bits >> col) & 1 == 0 {
                    continue;
                }
                for sy in 0..scale {
                    for sx in 0..scale {
                        let px = cursor_x + col * scale + sx;
                        let py = y + row as i64 * scale + sy;
                        if (0..width).contains(&px) && (0..height).contains(&py) {
                            canvas.put_pixel(px as u32, py as u32, color);
                        }
                    }
                }
            }
        }
    }
}
