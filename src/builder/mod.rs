mod ec;
mod qr;
mod render;

pub use ec::{ecc, generator_polynomial};
pub use qr::{Module, QR};
pub use render::SVG_DATA_URL_PREFIX;

use crate::common::{
    codec::encode,
    error::QRResult,
    metadata::{DEFAULT_CELL_SIZE, DEFAULT_MARGIN, EC_CODEWORDS, VERSION, WIDTH},
};

/// Builds a version 4-L QR symbol from text and renders it.
///
/// ```rust
/// use vaultqr::QRBuilder;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let svg = QRBuilder::new("treasury.sputnik-dao.near").cell_size(4).margin(4).render()?;
/// assert!(svg.starts_with("<svg"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct QRBuilder<'a> {
    text: &'a str,
    cell_size: u32,
    margin: u32,
}

impl<'a> QRBuilder<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, cell_size: DEFAULT_CELL_SIZE, margin: DEFAULT_MARGIN }
    }

    pub fn text(&mut self, text: &'a str) -> &mut Self {
        self.text = text;
        self
    }

    pub fn cell_size(&mut self, cell_size: u32) -> &mut Self {
        self.cell_size = cell_size;
        self
    }

    pub fn margin(&mut self, margin: u32) -> &mut Self {
        self.margin = margin;
        self
    }

    pub fn metadata(&self) -> String {
        format!(
            "{{ Version: {VERSION}, Ec level: L, Cell size: {}, Margin: {} }}",
            self.cell_size, self.margin
        )
    }
}

#[cfg(test)]
mod qrbuilder_util_tests {
    use super::QRBuilder;

    #[test]
    fn test_metadata() {
        let mut qr_builder = QRBuilder::new("Hello, world!");
        assert_eq!(qr_builder.metadata(), "{ Version: 4, Ec level: L, Cell size: 4, Margin: 4 }");
        qr_builder.cell_size(8).margin(0);
        assert_eq!(qr_builder.metadata(), "{ Version: 4, Ec level: L, Cell size: 8, Margin: 0 }");
    }
}

impl QRBuilder<'_> {
    /// Encodes the text into a complete module grid.
    ///
    /// Fails with [`InvalidParameter`](crate::QRError::InvalidParameter) before any encoding when the
    /// configured cell size or margin cannot produce an image.
    pub fn build(&self) -> QRResult<QR> {
        tracing::debug!("Generating QR {}...", self.metadata());
        self.validate()?;

        tracing::debug!("Encoding data...");
        let data = encode(self.text)?;

        tracing::debug!("Computing error correction...");
        let ecc = ecc(&data, EC_CODEWORDS);

        tracing::debug!("Constructing QR...");
        let qr = QR::from_codewords(&data, &ecc);

        let total_modules = WIDTH * WIDTH;
        let dark_modules = qr.count_dark_modules();
        tracing::debug!(
            data_codewords = data.len(),
            ec_codewords = ecc.len(),
            dark_modules,
            light_modules = total_modules - dark_modules,
            balance = dark_modules * 100 / total_modules,
            "QR generated"
        );

        Ok(qr)
    }

    /// Builds the symbol and renders it as SVG markup.
    pub fn render(&self) -> QRResult<String> {
        self.build()?.to_svg(self.cell_size, self.margin)
    }

    /// Builds the symbol and renders it as a `data:image/svg+xml;base64,` URL.
    pub fn render_data_url(&self) -> QRResult<String> {
        self.build()?.to_data_url(self.cell_size, self.margin)
    }

    pub fn render_png(&self) -> QRResult<Vec<u8>> {
        self.build()?.to_png(self.cell_size, self.margin)
    }

    fn validate(&self) -> QRResult<()> {
        QR::new().canvas_size(self.cell_size, self.margin).map(|_| ())
    }
}
