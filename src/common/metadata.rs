// Fixed symbol class: version 4, error correction level L, one RS block
//------------------------------------------------------------------------------

pub const VERSION: usize = 4;

pub const WIDTH: usize = 21 + 4 * (VERSION - 1);

pub const TOTAL_CODEWORDS: usize = 100;

pub const EC_CODEWORDS: usize = 20;

pub const DATA_CODEWORDS: usize = TOTAL_CODEWORDS - EC_CODEWORDS;

// Mode indicator + char count + payload must fit within DATA_CODEWORDS bytes
pub const CHAR_CAPACITY: usize = 78;

pub const BYTE_MODE: u8 = 0b0100;

pub const MODE_INDICATOR_BIT_LEN: usize = 4;

pub const CHAR_COUNT_BIT_LEN: usize = 8;

pub const PADDING_CODEWORDS: [u8; 2] = [0x11, 0xEC];

pub const TIMING_OFFSET: i16 = 6;

pub const DEFAULT_CELL_SIZE: u32 = 4;

pub const DEFAULT_MARGIN: u32 = 4;

// Largest raster canvas, 16384 x 16384 pixels
pub const MAX_RASTER_PIXELS: u64 = 1 << 28;

// Color
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    pub fn select<T>(&self, light: T, dark: T) -> T {
        match self {
            Self::Light => light,
            Self::Dark => dark,
        }
    }
}

impl From<bool> for Color {
    fn from(bit: bool) -> Self {
        if bit {
            Self::Dark
        } else {
            Self::Light
        }
    }
}
