use std::fmt::{Debug, Display, Error, Formatter};

// Error
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum QRError {
    // QR builder
    EmptyData,
    CapacityExceeded,
    InvalidChar,

    // Renderer
    InvalidParameter,
    ImageEncoding(String),
}

impl Display for QRError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        match self {
            // QR builder
            Self::EmptyData => f.write_str("Empty data"),
            Self::CapacityExceeded => f.write_str("Data too long for version 4-L QR"),
            Self::InvalidChar => f.write_str("Invalid character: only U+0000..=U+00FF is supported"),

            // Renderer
            Self::InvalidParameter => f.write_str("Invalid cell size or margin"),
            Self::ImageEncoding(e) => write!(f, "Image encoding failed: {e}"),
        }
    }
}

impl std::error::Error for QRError {}

impl From<image::ImageError> for QRError {
    fn from(e: image::ImageError) -> Self {
        Self::ImageEncoding(e.to_string())
    }
}

pub type QRResult<T> = Result<T, QRError>;

#[cfg(test)]
mod error_tests {
    use super::QRError;

    #[test]
    fn test_display() {
        assert_eq!(QRError::EmptyData.to_string(), "Empty data");
        assert_eq!(QRError::CapacityExceeded.to_string(), "Data too long for version 4-L QR");
        assert_eq!(QRError::InvalidParameter.to_string(), "Invalid cell size or margin");
        assert_eq!(
            QRError::ImageEncoding("boom".to_string()).to_string(),
            "Image encoding failed: boom"
        );
    }
}
