//! # vaultqr
//!
//! A small QR code encoder for embedding deposit addresses and
//! account ids in dashboards. It targets a single symbol class, version 4
//! (33x33 modules) with error correction level L, and renders to SVG markup,
//! base64 data URLs, grayscale images or PNG bytes.
//!
//! ## Quick Start
//!
//! ```rust
//! use vaultqr::QRBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Cell size and margin default to 4
//! let svg = QRBuilder::new("treasury.sputnik-dao.near").render()?;
//! assert!(svg.contains(r#"width="164""#));
//!
//! // Or keep the module grid around and render it several ways
//! let qr = QRBuilder::new("treasury.sputnik-dao.near").build()?;
//! let url = qr.to_data_url(2, 2)?;
//! let img = qr.to_image(8, 4)?;
//! assert!(url.starts_with("data:image/svg+xml;base64,"));
//! assert_eq!(img.dimensions(), (328, 328));
//! # Ok(())
//! # }
//! ```
//!
//! ## Pipeline
//!
//! 1. **Data segment**: byte mode indicator, 8 bit character count, one byte per
//!    char, zero bits to the next byte, then `0x11`/`0xEC` pad codewords up to 80
//!    data codewords.
//! 2. **Error correction**: 20 Reed-Solomon codewords over GF(256) (primitive
//!    polynomial `0x11D`) for the single block.
//! 3. **Matrix**: finder patterns with separators, timing patterns, then data and
//!    error correction bits in two-column zig-zag order.
//! 4. **Render**: one background fill plus one square per dark module.
//!
//! ## Limitations
//!
//! - Input is limited to 78 chars in U+0000..=U+00FF. Empty input is rejected.
//! - There is a single Reed-Solomon block, so no interleaving.
//! - No mask is applied and no format or version information is written. Data
//!   bits flow into the modules a conformant symbol reserves for format info.
//!   The symbol is visually QR-like but not guaranteed to satisfy every
//!   conformant reader.

#![allow(clippy::items_after_test_module)]

pub mod builder;
pub mod common;

pub use builder::{Module, QRBuilder, QR};
pub use common::error::{QRError, QRResult};
pub use common::metadata::{
    Color, CHAR_CAPACITY, DEFAULT_CELL_SIZE, DEFAULT_MARGIN, MAX_RASTER_PIXELS, WIDTH,
};
