use std::ops::{Add, AddAssign, Div, Mul, MulAssign};

use num_traits::{One, Zero};

// Galois field GF(256) with primitive polynomial x^8 + x^4 + x^3 + x^2 + 1
//------------------------------------------------------------------------------

pub const PRIMITIVE_POLY: u16 = 0x11D;

const TABLES: ([u8; 256], [u8; 256]) = build_tables();

/// `EXP_TABLE[i]` is α^i. The table wraps, so `EXP_TABLE[255] == 1`.
pub static EXP_TABLE: [u8; 256] = TABLES.0;

/// Inverse of [`EXP_TABLE`] over the 255 nonzero elements. `LOG_TABLE[0]` is unused.
pub static LOG_TABLE: [u8; 256] = TABLES.1;

const fn build_tables() -> ([u8; 256], [u8; 256]) {
    let mut exp = [0u8; 256];
    let mut log = [0u8; 256];
    let mut x: u16 = 1;
    let mut i = 0;
    while i < 256 {
        exp[i] = x as u8;
        if i < 255 {
            log[x as usize] = i as u8;
        }
        x <<= 1;
        if x & 0x100 != 0 {
            x ^= PRIMITIVE_POLY;
        }
        i += 1;
    }
    (exp, log)
}

/// Multiplies two field elements. Total over all byte pairs.
pub fn multiply(a: u8, b: u8) -> u8 {
    (G(a) * G(b)).0
}

// Field element
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct G(pub u8);

impl G {
    // α^i
    pub fn gen_pow(i: usize) -> Self {
        Self(EXP_TABLE[i % 255])
    }

    pub fn log(self) -> usize {
        debug_assert!(self.0 != 0, "Log of zero is undefined");
        LOG_TABLE[self.0 as usize] as usize
    }
}

impl From<G> for u8 {
    fn from(g: G) -> Self {
        g.0
    }
}

impl Add for G {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 ^ rhs.0)
    }
}

impl AddAssign for G {
    fn add_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl Mul for G {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        if self.0 == 0 || rhs.0 == 0 {
            return Self(0);
        }
        Self::gen_pow(self.log() + rhs.log())
    }
}

impl MulAssign for G {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Div for G {
    type Output = Self;
    fn div(self, rhs: Self) -> Self::Output {
        assert!(rhs.0 != 0, "Division by zero in GF(256)");
        if self.0 == 0 {
            return Self(0);
        }
        Self::gen_pow(self.log() + 255 - rhs.log())
    }
}

impl Zero for G {
    fn zero() -> Self {
        Self(0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl One for G {
    fn one() -> Self {
        Self(1)
    }
}
