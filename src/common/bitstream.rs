// Bit stream
//------------------------------------------------------------------------------

/// MSB-first bit buffer used for both the data segment and the placement payload.
#[derive(Debug, Clone)]
pub struct BitStream {
    data: Vec<u8>,
    // Bit length
    len: usize,
    // Max bit capacity
    capacity: usize,
    // Read cursor
    cursor: usize,
}

impl BitStream {
    pub fn new(capacity: usize) -> Self {
        Self { data: vec![0; capacity.div_ceil(8)], len: 0, capacity, cursor: 0 }
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        let len = bytes.len() << 3;
        Self { data: bytes.to_vec(), len, capacity: len, cursor: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn data(&self) -> &[u8] {
        &self.data[..self.len.div_ceil(8)]
    }

    pub fn push_bits(&mut self, bits: u8, size: usize) {
        debug_assert!(size <= 8, "Cannot push more than 8 bits at once: Size {size}");
        debug_assert!(
            size >= (8 - bits.leading_zeros()) as usize,
            "Bit count shouldn't exceed bit length: Length {size}, Bits {bits}"
        );
        debug_assert!(
            self.len + size <= self.capacity,
            "Insufficient capacity: Capacity {}, Size {}",
            self.capacity,
            self.len + size
        );

        if size == 0 {
            return;
        }

        let offset = self.len & 7;
        let pos = self.len >> 3;

        if offset + size <= 8 {
            self.data[pos] |= bits << (8 - size - offset);
        } else {
            self.data[pos] |= bits >> (size + offset - 8);
            self.data[pos + 1] = bits << (16 - size - offset);
        }

        self.len += size;
    }

    pub fn extend(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.push_bits(b, 8);
        }
    }

    // Zero bits until the next byte boundary
    pub fn pad_to_byte(&mut self) {
        let rem = self.len & 7;
        if rem > 0 {
            self.push_bits(0, 8 - rem);
        }
    }
}

impl Iterator for BitStream {
    type Item = bool;
    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.len {
            return None;
        }
        let bit = self.data[self.cursor >> 3] & (0b10000000 >> (self.cursor & 7)) != 0;
        self.cursor += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.len - self.cursor;
        (rem, Some(rem))
    }
}
