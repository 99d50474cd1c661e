use std::ops::Deref;

use crate::common::{
    bitstream::BitStream,
    iter::EncRegionIter,
    metadata::{Color, TIMING_OFFSET, WIDTH},
};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Module {
    Empty,
    Func(Color),
    Data(Color),
}

impl Deref for Module {
    type Target = Color;
    fn deref(&self) -> &Self::Target {
        match self {
            Module::Empty => &Color::Light,
            Module::Func(c) => c,
            Module::Data(c) => c,
        }
    }
}

/// Square module grid of a version 4 symbol.
///
/// No format or version information is written and no mask is applied, so
/// data modules flow into the areas a conformant symbol reserves for format
/// info. The output is visually QR-like but not every reader will accept it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QR {
    grid: Vec<Module>,
    w: usize,
}

// QR type for builder
//------------------------------------------------------------------------------

impl QR {
    pub fn new() -> Self {
        Self { grid: vec![Module::Empty; WIDTH * WIDTH], w: WIDTH }
    }

    /// Stamps the function patterns and places `data` followed by `ecc`.
    ///
    /// # Panics
    ///
    /// Panics if the codewords do not fit in the free modules of the grid.
    pub fn from_codewords(data: &[u8], ecc: &[u8]) -> Self {
        let mut payload = BitStream::new((data.len() + ecc.len()) << 3);
        payload.extend(data);
        payload.extend(ecc);

        let mut qr = Self::new();
        qr.draw_all_function_patterns();
        qr.draw_encoding_region(payload);
        qr
    }

    pub fn grid(&self) -> &[Module] {
        &self.grid
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn count_dark_modules(&self) -> usize {
        self.grid.iter().filter(|&m| matches!(**m, Color::Dark)).count()
    }

    #[cfg(test)]
    pub fn to_debug_str(&self) -> String {
        let w = self.w as i16;
        let mut res = String::with_capacity((w * (w + 1)) as usize);
        res.push('\n');
        for i in 0..w {
            for j in 0..w {
                let c = match self.get(i, j) {
                    Module::Empty => '.',
                    Module::Func(Color::Dark) => 'f',
                    Module::Func(Color::Light) => 'F',
                    Module::Data(Color::Dark) => 'd',
                    Module::Data(Color::Light) => 'D',
                };
                res.push(c);
            }
            res.push('\n');
        }
        res
    }

    fn coord_to_index(&self, r: i16, c: i16) -> usize {
        let w = self.w as i16;
        debug_assert!(-w <= r && r < w, "row should be greater than or equal to w");
        debug_assert!(-w <= c && c < w, "column should be greater than or equal to w");

        let r = if r < 0 { r + w } else { r };
        let c = if c < 0 { c + w } else { c };
        (r * w + c) as _
    }

    pub fn get(&self, r: i16, c: i16) -> Module {
        self.grid[self.coord_to_index(r, c)]
    }

    pub fn get_mut(&mut self, r: i16, c: i16) -> &mut Module {
        let index = self.coord_to_index(r, c);
        &mut self.grid[index]
    }

    pub fn set(&mut self, r: i16, c: i16, module: Module) {
        *self.get_mut(r, c) = module;
    }
}

impl Default for QR {
    fn default() -> Self {
        Self::new()
    }
}


// Finder pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_finder_patterns(&mut self) {
        self.draw_finder_pattern_at(3, 3);
        self.draw_finder_pattern_at(3, -4);
        self.draw_finder_pattern_at(-4, 3);
    }

    // Draws the 7x7 finder centered at (r, c) and its one module light separator
    // on the sides facing the symbol interior
    fn draw_finder_pattern_at(&mut self, r: i16, c: i16) {
        let (dr_top, dr_bottom) = if r > 0 { (-3, 4) } else { (-4, 3) };
        let (dc_left, dc_right) = if c > 0 { (-3, 4) } else { (-4, 3) };
        for i in dr_top..=dr_bottom {
            for j in dc_left..=dc_right {
                self.set(
                    r + i,
                    c + j,
                    match (i, j) {
                        (4 | -4, _) | (_, 4 | -4) => Module::Func(Color::Light),
                        (3 | -3, _) | (_, 3 | -3) => Module::Func(Color::Dark),
                        (2 | -2, _) | (_, 2 | -2) => Module::Func(Color::Light),
                        _ => Module::Func(Color::Dark),
                    },
                );
            }
        }
    }
}

#[cfg(test)]
mod finder_pattern_tests {
    use crate::builder::QR;

    #[test]
    fn test_finder_pattern_qr() {
        let mut qr = QR::new();
        qr.draw_finder_patterns();
        assert_eq!(
            qr.to_debug_str(),
            "\n\
             fffffffF.................Ffffffff\n\
             fFFFFFfF.................FfFFFFFf\n\
             fFfffFfF.................FfFfffFf\n\
             fFfffFfF.................FfFfffFf\n\
             fFfffFfF.................FfFfffFf\n\
             fFFFFFfF.................FfFFFFFf\n\
             fffffffF.................Ffffffff\n\
             FFFFFFFF.................FFFFFFFF\n\
             .................................\n\
             .................................\n\
             .................................\n\
             .................................\n\
             .................................\n\
             .................................\n\
             .................................\n\
             .................................\n\
             .................................\n\
             .................................\n\
             .................................\n\
             .................................\n\
             .................................\n\
             .................................\n\
             .................................\n\
             .................................\n\
             .................................\n\
             FFFFFFFF.........................\n\
             fffffffF.........................\n\
             fFFFFFfF.........................\n\
             fFfffFfF.........................\n\
             fFfffFfF.........................\n\
             fFfffFfF.........................\n\
             fFFFFFfF.........................\n\
             fffffffF.........................\n"
        );
    }
}

// Timing pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_timing_pattern(&mut self) {
        let w = self.w as i16;
        let (off, last) = (TIMING_OFFSET, w - 9);
        self.draw_line(off, 8, off, last);
        self.draw_line(8, off, last, off);
    }

    fn draw_line(&mut self, r1: i16, c1: i16, r2: i16, c2: i16) {
        debug_assert!(r1 == r2 || c1 == c2, "Line is neither vertical nor horizontal");

        if r1 == r2 {
            for j in c1..=c2 {
                let m =
                    if j & 1 == 0 { Module::Func(Color::Dark) } else { Module::Func(Color::Light) };
                self.set(r1, j, m);
            }
        } else {
            for i in r1..=r2 {
                let m =
                    if i & 1 == 0 { Module::Func(Color::Dark) } else { Module::Func(Color::Light) };
                self.set(i, c1, m);
            }
        }
    }
}


// All function patterns
//------------------------------------------------------------------------------

impl QR {
    pub fn draw_all_function_patterns(&mut self) {
        self.draw_finder_patterns();
        self.draw_timing_pattern();
    }
}


// Encoding region
//------------------------------------------------------------------------------

impl QR {
    pub fn draw_encoding_region(&mut self, payload: BitStream) {
        self.draw_payload(payload);
        debug_assert!(!self.grid.contains(&Module::Empty), "Empty module found in debug");
    }

    // Bits go into empty modules in traversal order; modules left over once the
    // payload is exhausted are light
    fn draw_payload(&mut self, mut payload: BitStream) {
        let bit_len = payload.len();
        for (r, c) in EncRegionIter::new(self.w) {
            if matches!(self.get(r, c), Module::Empty) {
                let bit = payload.next().unwrap_or(false);
                self.set(r, c, Module::Data(Color::from(bit)));
            }
        }

        let unplaced = payload.count();
        assert!(unplaced == 0, "Payload of {bit_len} bits overflows encoding region by {unplaced}");
    }
}
