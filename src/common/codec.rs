use super::{
    bitstream::BitStream,
    error::{QRError, QRResult},
    metadata::{
        BYTE_MODE, CHAR_CAPACITY, CHAR_COUNT_BIT_LEN, DATA_CODEWORDS, MODE_INDICATOR_BIT_LEN,
        PADDING_CODEWORDS,
    },
};

// Data segment encoder
//------------------------------------------------------------------------------

/// Encodes `text` as a single byte-mode segment padded to exactly
/// [`DATA_CODEWORDS`] bytes.
///
/// Every char must lie in U+0000..=U+00FF and is emitted as one byte. Nothing is
/// truncated: longer or wider input is rejected before any bits are written.
pub fn encode(text: &str) -> QRResult<Vec<u8>> {
    let payload = to_latin1(text)?;
    let char_count = payload.len();

    if char_count == 0 {
        return Err(QRError::EmptyData);
    }
    if char_count > CHAR_CAPACITY {
        return Err(QRError::CapacityExceeded);
    }

    let mut bs = BitStream::new(DATA_CODEWORDS << 3);
    bs.push_bits(BYTE_MODE, MODE_INDICATOR_BIT_LEN);
    bs.push_bits(char_count as u8, CHAR_COUNT_BIT_LEN);
    bs.extend(&payload);
    bs.pad_to_byte();

    let mut codewords = bs.data().to_vec();
    debug_assert!(
        codewords.len() <= DATA_CODEWORDS,
        "Encoded data overflows capacity: Len {}, Capacity {DATA_CODEWORDS}",
        codewords.len()
    );

    let pad_len = DATA_CODEWORDS - codewords.len();
    codewords.extend(PADDING_CODEWORDS.iter().cycle().take(pad_len));

    tracing::trace!(char_count, padding = pad_len, "Encoded data segment");
    Ok(codewords)
}

fn to_latin1(text: &str) -> QRResult<Vec<u8>> {
    text.chars().map(|c| u8::try_from(c).map_err(|_| QRError::InvalidChar)).collect()
}
