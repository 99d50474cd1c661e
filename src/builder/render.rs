use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD, Engine};
use image::{GrayImage, ImageFormat, Luma};
use imageproc::{drawing::draw_filled_rect_mut, rect::Rect};

use super::QR;
use crate::common::{
    error::{QRError, QRResult},
    metadata::{Color, MAX_RASTER_PIXELS},
};

pub const SVG_DATA_URL_PREFIX: &str = "data:image/svg+xml;base64,";

// Render
//------------------------------------------------------------------------------

impl QR {
    /// Side length in pixels of the rendered square: `(width + 2 * margin) * cell_size`.
    pub fn canvas_size(&self, cell_size: u32, margin: u32) -> QRResult<u32> {
        if cell_size == 0 {
            return Err(QRError::InvalidParameter);
        }
        margin
            .checked_mul(2)
            .and_then(|m| m.checked_add(self.width() as u32))
            .and_then(|modules| modules.checked_mul(cell_size))
            .ok_or(QRError::InvalidParameter)
    }

    // Pixel offset of each dark module's top left corner
    fn dark_cells(&self, cell_size: u32, margin: u32) -> impl Iterator<Item = (u32, u32)> + '_ {
        let w = self.width();
        self.grid().iter().enumerate().filter(|(_, m)| ***m == Color::Dark).map(move |(i, _)| {
            let (r, c) = ((i / w) as u32, (i % w) as u32);
            ((c + margin) * cell_size, (r + margin) * cell_size)
        })
    }

    pub fn to_svg(&self, cell_size: u32, margin: u32) -> QRResult<String> {
        let sz = self.canvas_size(cell_size, margin)?;

        let mut svg = String::with_capacity(256 + self.count_dark_modules() * 64);
        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{sz}" height="{sz}" viewBox="0 0 {sz} {sz}">"#
        ));
        svg.push_str(r#"<rect width="100%" height="100%" fill="white"/>"#);
        for (x, y) in self.dark_cells(cell_size, margin) {
            svg.push_str(&format!(
                r#"<rect x="{x}" y="{y}" width="{cell_size}" height="{cell_size}" fill="black"/>"#
            ));
        }
        svg.push_str("</svg>");

        tracing::trace!(size = sz, bytes = svg.len(), "Rendered svg");
        Ok(svg)
    }

    /// SVG markup as a base64 data URL, ready for an `<img src>` attribute.
    pub fn to_data_url(&self, cell_size: u32, margin: u32) -> QRResult<String> {
        let svg = self.to_svg(cell_size, margin)?;
        Ok(format!("{SVG_DATA_URL_PREFIX}{}", STANDARD.encode(svg)))
    }

    /// Grayscale raster of the symbol. Canvases above [`MAX_RASTER_PIXELS`] are
    /// rejected with [`QRError::InvalidParameter`] before any allocation.
    pub fn to_image(&self, cell_size: u32, margin: u32) -> QRResult<GrayImage> {
        let sz = self.canvas_size(cell_size, margin)?;
        if (sz as u64).pow(2) > MAX_RASTER_PIXELS {
            return Err(QRError::InvalidParameter);
        }

        let mut canvas = GrayImage::from_pixel(sz, sz, Luma([255]));
        for (x, y) in self.dark_cells(cell_size, margin) {
            let cell = Rect::at(x as i32, y as i32).of_size(cell_size, cell_size);
            draw_filled_rect_mut(&mut canvas, cell, Luma([0]));
        }

        tracing::trace!(size = sz, "Rendered image");
        Ok(canvas)
    }

    pub fn to_png(&self, cell_size: u32, margin: u32) -> QRResult<Vec<u8>> {
        let img = self.to_image(cell_size, margin)?;
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png)?;
        Ok(buf.into_inner())
    }

    // One char per module, light modules drawn solid for dark-background terminals
    pub fn to_str(&self, margin: usize) -> String {
        let qr_sz = self.width();
        let total_sz = margin + qr_sz + margin;

        let mut canvas = String::with_capacity(total_sz * (total_sz + 1) * 3);
        for i in 0..total_sz {
            for j in 0..total_sz {
                if i < margin || i >= margin + qr_sz || j < margin || j >= margin + qr_sz {
                    canvas.push('█');
                    continue;
                }
                let r = (i - margin) as i16;
                let c = (j - margin) as i16;
                canvas.push(self.get(r, c).select('█', ' '));
            }
            canvas.push('\n');
        }

        canvas
    }
}
